//! User record model shared by the Userdeck crates.
#![allow(missing_docs)]

pub use ::chrono;

pub mod error;
pub mod time;
pub mod user;

pub use error::{ModelError, Result as ModelResult};
pub use time::{format_last_login, parse_optional_timestamp, parse_timestamp};
pub use user::{NewUser, Role, User, UserId, UserStatus};
