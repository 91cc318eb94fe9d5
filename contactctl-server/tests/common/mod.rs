//! Shared fixtures for database-backed tests
//!
//! Each test runs in its own PostgreSQL schema so tests can run in
//! parallel against one database. Requires `DATABASE_URL`.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};

use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, PgPool};

static NEXT_SCHEMA: AtomicUsize = AtomicUsize::new(0);

const CONTACT_TABLE: &str = r#"
    CREATE TABLE contact (
        id INTEGER PRIMARY KEY,
        firstname TEXT,
        lastname TEXT,
        phone TEXT,
        email TEXT
    )
"#;

/// Run `test` against a fresh `contact` table.
///
/// The body runs on its own task so a failed assertion still reaches
/// teardown; the panic is re-raised once the schema is dropped.
pub async fn with_test_db<F, Fut>(test: F)
where
    F: FnOnce(PgPool) -> Fut,
    Fut: Future<Output = ()> + Send + 'static,
{
    let db = TestDb::new().await;
    let outcome = tokio::spawn(test(db.pool.clone())).await;
    db.teardown().await;

    if let Err(err) = outcome {
        if err.is_panic() {
            std::panic::resume_unwind(err.into_panic());
        }
        panic!("test task failed: {}", err);
    }
}

struct TestDb {
    pool: PgPool,
    admin: PgPool,
    schema: String,
}

impl TestDb {
    async fn new() -> Self {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let schema = format!(
            "contact_test_{}_{}",
            std::process::id(),
            NEXT_SCHEMA.fetch_add(1, Ordering::SeqCst)
        );

        let admin = PgPoolOptions::new()
            .max_connections(1)
            .connect(&url)
            .await
            .expect("admin pool");
        let create = format!("CREATE SCHEMA {}", schema);
        sqlx::query(&create)
            .execute(&admin)
            .await
            .expect("create schema");

        let search_path = format!("SET search_path TO {}", schema);
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .after_connect(move |conn, _meta| {
                let sql = search_path.clone();
                Box::pin(async move {
                    conn.execute(sql.as_str()).await?;
                    Ok(())
                })
            })
            .connect(&url)
            .await
            .expect("test pool");

        sqlx::query(CONTACT_TABLE)
            .execute(&pool)
            .await
            .expect("create contact table");

        Self {
            pool,
            admin,
            schema,
        }
    }

    /// Close the test pool and drop its schema.
    async fn teardown(self) {
        self.pool.close().await;

        let drop = format!("DROP SCHEMA IF EXISTS {} CASCADE", self.schema);
        sqlx::query(&drop)
            .execute(&self.admin)
            .await
            .expect("drop schema");
        self.admin.close().await;
    }
}
