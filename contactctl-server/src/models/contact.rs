//! Contact record

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

/// A single contact.
///
/// `id` is supplied by the caller; uniqueness is left to the table's
/// primary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    pub fn new(
        id: i32,
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            firstname: firstname.into(),
            lastname: lastname.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }
}

/// Text columns are nullable in the schema; NULL reads back as "".
impl<'r> FromRow<'r, PgRow> for Contact {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            firstname: text_or_empty(row, "firstname")?,
            lastname: text_or_empty(row, "lastname")?,
            phone: text_or_empty(row, "phone")?,
            email: text_or_empty(row, "email")?,
        })
    }
}

fn text_or_empty(row: &PgRow, column: &str) -> Result<String, sqlx::Error> {
    Ok(row.try_get::<Option<String>, _>(column)?.unwrap_or_default())
}
