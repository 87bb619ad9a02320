//! REST host surface for tool registration and invocation
//!
//! Stands in for the managed trigger host during development: advertises the
//! registered tool catalog and forwards invocation payloads to the
//! dispatcher. Independent requests may run in parallel; the registry they
//! share is immutable after startup.

use crate::dispatch::{Dispatcher, TriggerPayload};
use crate::registry::{ToolRegistration, ToolRegistry};
use axum::{
    Router,
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use fieldvault_core::{Error, Result, ServerConfig};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ToolRegistry>,
    pub dispatcher: Arc<Dispatcher>,
}

pub fn create_router(registry: Arc<ToolRegistry>) -> Router {
    let state = AppState {
        dispatcher: Arc::new(Dispatcher::new(registry.clone())),
        registry,
    };

    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // API endpoints
        .route("/api/v1/tools", get(list_tools))
        .route("/api/v1/tools/:name/invoke", post(invoke_tool))
        // Middleware layers (applied in reverse order)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve the REST host until the process is stopped
pub async fn serve(config: &ServerConfig, registry: Arc<ToolRegistry>) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(addr = %addr, "Fieldvault host listening");

    axum::serve(listener, create_router(registry)).await?;
    Ok(())
}

/// Health check endpoint - returns OK if the service is running
async fn health_check() -> impl IntoResponse {
    tracing::debug!("Health check requested");
    (StatusCode::OK, "OK")
}

/// The advertised tool catalog
async fn list_tools(State(state): State<AppState>) -> Json<Vec<ToolRegistration>> {
    Json(state.registry.registrations().to_vec())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InvokeResponse {
    pub result: String,
}

async fn invoke_tool(
    Path(name): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<TriggerPayload>,
) -> std::result::Result<Json<InvokeResponse>, AppError> {
    let result = state.dispatcher.dispatch(&name, payload).await?;
    Ok(Json(InvokeResponse { result }))
}

/// Error wrapper mapping core errors onto HTTP statuses
struct AppError(Error);

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::ToolNotFound(_) => StatusCode::NOT_FOUND,
            Error::Serialization(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::warn!(status = %status, error = %self.0, "Tool invocation failed");

        (status, self.0.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::build_registry;
    use axum::body::Body;
    use axum::http::Request;
    use fieldvault_blob::InMemoryBlobStore;
    use tower::ServiceExt;

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn test_router() -> (Router, InMemoryBlobStore) {
        let store = InMemoryBlobStore::new();
        let registry = build_registry(Arc::new(store.clone())).unwrap();
        (create_router(Arc::new(registry)), store)
    }

    #[tokio::test]
    async fn test_health_check() {
        let (router, _store) = test_router();

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_invoke_unknown_tool_is_404() {
        let (router, _store) = test_router();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/tools/nope/invoke")
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_tools_returns_catalog() {
        let (router, _store) = test_router();

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/tools")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        let catalog: Vec<ToolRegistration> = serde_json::from_str(&body).unwrap();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog[0].name, "hello");
    }
}
