//! HTTP transport for the catalog schema
//!
//! Serves GraphQL over a single `/graphql` path: `POST` executes a
//! document, `GET` returns the GraphiQL explorer.

use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use garage_core::limits::MAX_REQUEST_BODY_SIZE;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::schema::{CatalogSchema, SharedStore};

/// Path the schema is served on
pub const GRAPHQL_PATH: &str = "/graphql";

/// Shared state for the HTTP handlers
#[derive(Clone)]
pub struct HttpState {
    schema: CatalogSchema,
    store: SharedStore,
}

impl HttpState {
    pub fn new(schema: CatalogSchema, store: SharedStore) -> Self {
        Self { schema, store }
    }
}

/// Create the HTTP router
pub fn create_router(state: HttpState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route(GRAPHQL_PATH, get(graphiql_handler).post(graphql_handler))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(MAX_REQUEST_BODY_SIZE))
        .layer(TraceLayer::new_for_http())
}

/// Execute a query or mutation document
async fn graphql_handler(
    State(state): State<Arc<HttpState>>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let request = request.into_inner();
    tracing::debug!("Received GraphQL request: {:?}", request.operation_name);
    state.schema.execute(request).await.into()
}

/// Interactive query explorer
async fn graphiql_handler() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Health check endpoint
async fn health_handler(State(state): State<Arc<HttpState>>) -> impl IntoResponse {
    let healthy = match state.store.health_check().await {
        Ok(healthy) => healthy,
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            false
        }
    };

    let catalog = match state.store.snapshot().await {
        Ok(catalog) => Some(catalog),
        Err(e) => {
            tracing::warn!("Failed to read catalog for health check: {}", e);
            None
        }
    };

    let status = if healthy && catalog.is_some() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(serde_json::json!({
            "status": if status == StatusCode::OK { "ok" } else { "unhealthy" },
            "server": "garage-graphql",
            "version": env!("CARGO_PKG_VERSION"),
            "manufacturers": catalog.as_ref().map(|c| c.manufacturers.len()),
            "vehicles": catalog.as_ref().map(|c| c.vehicles.len())
        })),
    )
}

/// Base URL announced on startup
pub fn server_url(port: u16) -> String {
    format!("http://localhost:{}{}", port, GRAPHQL_PATH)
}

/// Bind the listener the server will accept on
pub async fn bind_listener(host: &str, port: u16) -> anyhow::Result<TcpListener> {
    let listener = TcpListener::bind((host, port)).await?;
    tracing::debug!("Bound {}", listener.local_addr()?);
    Ok(listener)
}

/// Serve on an already bound listener until the process is stopped
pub async fn serve_http(listener: TcpListener, state: HttpState) -> anyhow::Result<()> {
    let port = listener.local_addr()?.port();
    tracing::info!("API server at {}", server_url(port));
    tracing::info!("  Health check: http://localhost:{}/health", port);

    axum::serve(listener, create_router(state)).await?;

    Ok(())
}

/// Run the HTTP server until the process is stopped
pub async fn run_http_server(state: HttpState, host: &str, port: u16) -> anyhow::Result<()> {
    let listener = bind_listener(host, port).await?;
    serve_http(listener, state).await
}
