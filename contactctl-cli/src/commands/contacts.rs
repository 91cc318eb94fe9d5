//! Direct contact store access (get, list, add)
//!
//! `add` is the only write path; the HTTP API is read-only.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use contactctl_server::db::connect;
use contactctl_server::{Contact, ContactStore, DatabaseConfig, DbError, PgContactStore};

#[derive(Parser, Debug)]
pub struct ContactsArgs {
    /// Database URL (overrides CONTACTS_DB_* variables)
    #[arg(long, env = "DATABASE_URL", global = true)]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: ContactsCommands,
}

#[derive(Subcommand, Debug)]
pub enum ContactsCommands {
    /// Print a single contact as JSON
    Get(GetArgs),
    /// Print every contact as a JSON array
    List,
    /// Insert a new contact
    Add(AddArgs),
}

#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Contact id
    pub id: i32,
}

#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Contact id (must not already exist)
    #[arg(long)]
    pub id: i32,

    /// First name
    #[arg(long, default_value = "")]
    pub firstname: String,

    /// Last name
    #[arg(long, default_value = "")]
    pub lastname: String,

    /// Phone number, stored as given
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Email address, stored as given
    #[arg(long, default_value = "")]
    pub email: String,
}

impl From<AddArgs> for Contact {
    fn from(args: AddArgs) -> Self {
        Contact::new(args.id, args.firstname, args.lastname, args.phone, args.email)
    }
}

pub async fn run_contacts(args: ContactsArgs) -> Result<()> {
    let db_config = DatabaseConfig::from_env().with_url(args.database_url);
    let pool = connect(&db_config)
        .await
        .context("Failed to create database pool")?;
    let store = PgContactStore::new(pool.clone());

    let result = execute(&store, args.command).await;
    pool.close().await;
    result
}

async fn execute(store: &dyn ContactStore, command: ContactsCommands) -> Result<()> {
    match command {
        ContactsCommands::Get(args) => {
            let contact = store.get(args.id).await.map_err(|e| match e {
                DbError::NotFound { .. } => anyhow::anyhow!("contact {} not found", args.id),
                other => anyhow::Error::new(other).context("Failed to fetch contact"),
            })?;
            print_json(&contact)
        }
        ContactsCommands::List => {
            let contacts = store
                .get_all()
                .await
                .context("Failed to list contacts")?;
            print_json(&contacts)
        }
        ContactsCommands::Add(args) => {
            let contact = Contact::from(args);
            let rows = store.save(&contact).await.map_err(|e| {
                if e.is_unique_violation() {
                    anyhow::anyhow!("contact {} already exists", contact.id)
                } else {
                    anyhow::Error::new(e).context("Failed to save contact")
                }
            })?;
            tracing::info!(id = contact.id, rows, "contact saved");
            print_json(&serde_json::json!({ "rows_affected": rows }))
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
