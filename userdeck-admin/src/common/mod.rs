//! Common module containing shared utilities and types
//!
//! This module provides common functionality used across multiple domains

pub mod messages;
pub mod icons;
