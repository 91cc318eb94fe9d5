//! Axum server setup
//!
//! Server skeleton with:
//! - Localhost-only CORS by default
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;
use crate::db::repos::{ContactStore, PgContactStore};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:8000)
    pub bind_addr: SocketAddr,

    /// Allow permissive CORS (default: false = localhost only)
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            cors_permissive: false,
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub contacts: Arc<dyn ContactStore>,
}

impl AppState {
    pub fn new(contacts: Arc<dyn ContactStore>) -> Self {
        Self { contacts }
    }
}

/// Build the application router with all routes.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let cors = if config.cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin([
                HeaderValue::from_static("http://localhost:8000"),
                HeaderValue::from_static("http://127.0.0.1:8000"),
            ])
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .merge(routes::health::router())
        .merge(routes::contacts::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Run the HTTP server.
///
/// The pool must already be connected; the contact store is built from it
/// before the listener accepts anything.
///
/// # Example
///
/// ```ignore
/// let pool = connect(&DatabaseConfig::from_env()).await?;
/// run_server(pool, ServerConfig::default()).await?;
/// ```
pub async fn run_server(pool: PgPool, config: ServerConfig) -> Result<(), ServerError> {
    let state = AppState::new(Arc::new(PgContactStore::new(pool)));
    let app = build_router(state, &config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::MemoryContactStore;
    use crate::models::Contact;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app_with(contacts: Vec<Contact>) -> Router {
        let store = MemoryContactStore::with_contacts(contacts);
        build_router(AppState::new(Arc::new(store)), &ServerConfig::default())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn sample(id: i32) -> Contact {
        Contact::new(id, "firstname", "lastname", "0123456789", "e@mail.com")
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 8000);
        assert!(!config.cors_permissive);
    }

    #[tokio::test]
    async fn root_returns_identity() {
        let (status, body) = get_json(app_with(vec![]), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::String("contact API".into()));
    }

    #[tokio::test]
    async fn health_endpoint() {
        let (status, body) = get_json(app_with(vec![]), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn list_contacts_empty() {
        let (status, body) = get_json(app_with(vec![]), "/contacts").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn list_contacts_returns_all() {
        let (status, body) = get_json(app_with(vec![sample(11), sample(12)]), "/contacts").await;
        assert_eq!(status, StatusCode::OK);

        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["id"], 11);
        assert_eq!(items[1]["id"], 12);
    }

    #[tokio::test]
    async fn get_contact_by_id() {
        let (status, body) = get_json(app_with(vec![sample(12)]), "/contacts/12").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!({
                "id": 12,
                "firstname": "firstname",
                "lastname": "lastname",
                "phone": "0123456789",
                "email": "e@mail.com"
            })
        );
    }

    #[tokio::test]
    async fn get_missing_contact_is_404() {
        let (status, body) = get_json(app_with(vec![sample(12)]), "/contacts/13").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn non_integer_id_is_400() {
        let (status, body) = get_json(app_with(vec![]), "/contacts/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["message"], "id: expected an integer");
    }

    #[tokio::test]
    async fn negative_id_is_looked_up() {
        let (status, body) = get_json(app_with(vec![sample(-3)]), "/contacts/-3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], -3);
    }

    #[tokio::test]
    async fn no_write_endpoint() {
        let response = app_with(vec![])
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/contacts")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"id":1,"firstname":"a","lastname":"b","phone":"c","email":"d"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
