//! Database configuration from environment variables
//!
//! `DATABASE_URL` wins when set. Otherwise the connection is assembled from
//! the `CONTACTS_DB_*` components, each with a default.

use std::str::FromStr;

use sqlx::postgres::PgConnectOptions;

const DEFAULT_HOST: &str = "postgresql";
const DEFAULT_PORT: u16 = 5432;
const DEFAULT_USER: &str = "classe";
const DEFAULT_PASSWORD: &str = "classe";
const DEFAULT_DATABASE: &str = "classe";

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Where and how to connect to PostgreSQL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Full connection string; overrides the individual components
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            user: DEFAULT_USER.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl DatabaseConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    ///
    /// Empty values count as unset. Unparseable numbers fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            url: get("DATABASE_URL"),
            host: get("CONTACTS_DB_HOST").unwrap_or(defaults.host),
            port: get("CONTACTS_DB_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            user: get("CONTACTS_DB_USER").unwrap_or(defaults.user),
            password: get("CONTACTS_DB_PASSWORD").unwrap_or(defaults.password),
            database: get("CONTACTS_DB_NAME").unwrap_or(defaults.database),
            max_connections: get("CONTACTS_DB_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.max_connections),
        }
    }

    /// Replace the connection string (e.g., from a CLI flag).
    pub fn with_url(mut self, url: Option<String>) -> Self {
        if url.is_some() {
            self.url = url;
        }
        self
    }

    /// Build sqlx connect options.
    ///
    /// # Errors
    ///
    /// Returns an error if `url` is set and cannot be parsed.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        match &self.url {
            Some(url) => PgConnectOptions::from_str(url),
            None => Ok(PgConnectOptions::new()
                .host(&self.host)
                .port(self.port)
                .username(&self.user)
                .password(&self.password)
                .database(&self.database)),
        }
    }

    /// Connection target for log lines, without credentials.
    pub fn describe(&self) -> String {
        match &self.url {
            Some(_) => "DATABASE_URL".to_string(),
            None => format!("{}@{}:{}/{}", self.user, self.host, self.port, self.database),
        }
    }
}
