//! Validation error types

use std::fmt;

/// Request input that could not be coerced into the expected type
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Field is missing or has the wrong shape (e.g., not an integer)
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}
