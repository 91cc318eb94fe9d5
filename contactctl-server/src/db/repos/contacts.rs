//! Contact repository
//!
//! Three fixed statements over the shared pool:
//! - get: single row by id, absent row is NotFound
//! - get_all: unfiltered scan, database order
//! - save: plain INSERT, returns rows affected

use async_trait::async_trait;
use sqlx::PgPool;

use super::DbError;
use crate::models::Contact;

/// Contact persistence (testable)
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Fetch one contact by id.
    async fn get(&self, id: i32) -> Result<Contact, DbError>;

    /// Fetch every contact, fully materialized.
    async fn get_all(&self) -> Result<Vec<Contact>, DbError>;

    /// Insert a contact, returning the number of rows affected.
    async fn save(&self, contact: &Contact) -> Result<u64, DbError>;
}

/// PostgreSQL-backed contact store
#[derive(Clone)]
pub struct PgContactStore {
    pool: PgPool,
}

impl PgContactStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for PgContactStore {
    async fn get(&self, id: i32) -> Result<Contact, DbError> {
        sqlx::query_as::<_, Contact>(
            r#"
            SELECT id, firstname, lastname, phone, email
            FROM contact
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "contact",
            id: id.to_string(),
        })
    }

    async fn get_all(&self) -> Result<Vec<Contact>, DbError> {
        let contacts = sqlx::query_as::<_, Contact>(
            r#"
            SELECT id, firstname, lastname, phone, email
            FROM contact
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(contacts)
    }

    async fn save(&self, contact: &Contact) -> Result<u64, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO contact (id, firstname, lastname, phone, email)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(contact.id)
        .bind(&contact.firstname)
        .bind(&contact.lastname)
        .bind(&contact.phone)
        .bind(&contact.email)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
