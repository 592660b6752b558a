//! Userdeck admin dashboard library
//!
//! The desktop user-management dashboard behind the `userdeck-admin` binary.
//! Modules are application glue, UI domains and infrastructure helpers.
//!
//! Notes
//! - The users list is fetched once per activation of the users panel and
//!   then edited locally; nothing is written back to the server.
//! - The library is exposed mainly to enable testing.

pub mod app;
/// Shared message routing and UI helpers
pub mod common;
pub mod domains;
pub mod infra;
pub mod state;
pub mod subscriptions;
pub mod update;
pub mod view;
