//! In-memory contact store for tests and local runs without PostgreSQL

use std::borrow::Cow;
use std::collections::HashMap;
use std::error::Error as StdError;

use async_trait::async_trait;
use sqlx::error::{DatabaseError, ErrorKind};
use tokio::sync::RwLock;

use super::{ContactStore, DbError};
use crate::models::Contact;

/// Contact store backed by a `HashMap`.
///
/// Mirrors the database contract: missing ids are `NotFound`, duplicate ids
/// are rejected and leave the stored contact untouched. `get_all` returns
/// contacts in insertion order.
#[derive(Default)]
pub struct MemoryContactStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    order: Vec<i32>,
    by_id: HashMap<i32, Contact>,
}

impl MemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `contacts`. Later duplicates are skipped.
    pub fn with_contacts(contacts: impl IntoIterator<Item = Contact>) -> Self {
        let mut inner = Inner::default();
        for contact in contacts {
            if !inner.by_id.contains_key(&contact.id) {
                inner.order.push(contact.id);
                inner.by_id.insert(contact.id, contact);
            }
        }
        Self {
            inner: RwLock::new(inner),
        }
    }
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    async fn get(&self, id: i32) -> Result<Contact, DbError> {
        self.inner
            .read()
            .await
            .by_id
            .get(&id)
            .cloned()
            .ok_or_else(|| DbError::NotFound {
                resource: "contact",
                id: id.to_string(),
            })
    }

    async fn get_all(&self) -> Result<Vec<Contact>, DbError> {
        let inner = self.inner.read().await;
        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.by_id.get(id).cloned())
            .collect())
    }

    async fn save(&self, contact: &Contact) -> Result<u64, DbError> {
        let mut inner = self.inner.write().await;
        if inner.by_id.contains_key(&contact.id) {
            return Err(DbError::Sqlx(sqlx::Error::Database(Box::new(
                DuplicateKey { id: contact.id },
            ))));
        }
        inner.order.push(contact.id);
        inner.by_id.insert(contact.id, contact.clone());
        Ok(1)
    }
}

/// Primary-key violation, shaped like the one PostgreSQL reports
#[derive(Debug, thiserror::Error)]
#[error("duplicate key value violates unique constraint \"contact_pkey\": id {id}")]
struct DuplicateKey {
    id: i32,
}

impl DatabaseError for DuplicateKey {
    fn message(&self) -> &str {
        "duplicate key value violates unique constraint \"contact_pkey\""
    }

    fn code(&self) -> Option<Cow<'_, str>> {
        // unique_violation
        Some(Cow::Borrowed("23505"))
    }

    fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
        self
    }

    fn constraint(&self) -> Option<&str> {
        Some("contact_pkey")
    }

    fn table(&self) -> Option<&str> {
        Some("contact")
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::UniqueViolation
    }
}
