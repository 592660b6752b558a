use std::fmt::{self, Display};

/// Errors produced while validating user record fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidTimestamp { value: String },
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidTimestamp { value } => {
                write!(f, "invalid timestamp: {value:?}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
