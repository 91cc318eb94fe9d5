//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections by default) - no Arc<Mutex<Connection>>
//! - Stores are built from an existing pool, never before it
//! - Rely on DB constraints, surface conflicts - no check-then-insert

pub mod pool;
pub mod repos;

pub use pool::{connect, create_pool, create_pool_with_options};
pub use repos::*;
