//! Contact endpoints (read-only)

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::ContactId;
use crate::http::server::AppState;
use crate::models::Contact;

/// GET /contacts - every contact, database order
async fn list_contacts(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Contact>>, ApiError> {
    let contacts = state.contacts.get_all().await?;
    tracing::debug!(count = contacts.len(), "listed contacts");
    Ok(Json(contacts))
}

/// GET /contacts/{id} - a single contact
async fn get_contact(
    State(state): State<Arc<AppState>>,
    ContactId(id): ContactId,
) -> Result<Json<Contact>, ApiError> {
    let contact = state.contacts.get(id).await?;
    Ok(Json(contact))
}

/// Contact routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/contacts", get(list_contacts))
        .route("/contacts/{id}", get(get_contact))
}
