//! contactctl-server: contact store and read-only HTTP facade
//!
//! Wraps three SQL statements (get, list, insert) over a shared
//! PostgreSQL pool and exposes the reads over HTTP.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::DatabaseConfig;
pub use db::{ContactStore, DbError, MemoryContactStore, PgContactStore};
pub use http::{run_server, ServerConfig};
pub use models::Contact;
