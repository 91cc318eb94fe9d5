//! Command implementations for the contactctl CLI

pub mod contacts;
pub mod serve;

// Re-export dispatcher functions for flat access from main.rs
pub use contacts::run_contacts;
pub use serve::run_serve;
