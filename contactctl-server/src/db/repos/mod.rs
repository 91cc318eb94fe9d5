//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - One statement per operation, one round trip per call
//! - Rely on DB constraints (no check-then-insert)
//! - Absent rows become `DbError::NotFound`, never a panic

pub mod contacts;
pub mod memory;

pub use contacts::{ContactStore, PgContactStore};
pub use memory::MemoryContactStore;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    /// True when the driver reported a unique/primary-key violation.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Sqlx(sqlx::Error::Database(e)) => e.is_unique_violation(),
            _ => false,
        }
    }
}
