//! Static catalog server
//!
//! Publishes a catalog document at the resource path so fetchers (and local
//! development) have something to read. The file is re-read on every request.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::{Error, Result};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Catalog document on disk
    pub catalog_file: PathBuf,
    /// Path the document is served under
    pub resource_path: String,
}

/// Build the router for a catalog
pub fn router(config: ServerConfig) -> Result<Router> {
    if !config.resource_path.starts_with('/') {
        return Err(Error::invalid_value(
            "resource_path",
            "server needs a path starting with '/'",
        ));
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let resource_path = config.resource_path.clone();
    Ok(Router::new()
        .route("/health", get(health))
        .route(&resource_path, get(catalog))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(config)))
}

/// Start the HTTP server
pub async fn serve(config: ServerConfig, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to port {port}: {e}")))?;

    serve_on(listener, config).await
}

/// Serve on an already bound listener
pub async fn serve_on(listener: TcpListener, config: ServerConfig) -> Result<()> {
    let app = router(config.clone())?;

    if let Ok(addr) = listener.local_addr() {
        tracing::info!(
            "Serving {} at http://{}{}",
            config.catalog_file.display(),
            addr,
            config.resource_path
        );
    }

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Catalog document endpoint
async fn catalog(State(config): State<Arc<ServerConfig>>) -> Response {
    match tokio::fs::read(&config.catalog_file).await {
        Ok(bytes) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "application/json; charset=utf-8"),
                (header::CACHE_CONTROL, "no-store"),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => {
            tracing::warn!("Cannot read {}: {}", config.catalog_file.display(), e);
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "catalog not available" })),
            )
                .into_response()
        }
    }
}
