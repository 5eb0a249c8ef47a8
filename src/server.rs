//! HTTP Server
//!
//! Wires the search handlers into an Axum router and serves it.

use crate::catalog::store::SharedSource;
use crate::search::handlers::{
    handle_health, handle_search, handle_search_by_genre, handle_search_by_title,
};
use axum::extract::Extension;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

pub const ENDPOINT_SEARCH: &str = "/api/movies/search";
pub const ENDPOINT_SEARCH_BY_TITLE: &str = "/api/movies/SearchByTitle/:title";
pub const ENDPOINT_SEARCH_BY_GENRE: &str = "/api/movies/SearchByGenre/:genre";
pub const ENDPOINT_HEALTH: &str = "/healthz";

pub fn router(source: SharedSource) -> Router {
    Router::new()
        .route(ENDPOINT_SEARCH, get(handle_search))
        .route(ENDPOINT_SEARCH_BY_TITLE, get(handle_search_by_title))
        .route(ENDPOINT_SEARCH_BY_GENRE, get(handle_search_by_genre))
        .route(ENDPOINT_HEALTH, get(handle_health))
        .layer(Extension(source))
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(addr: SocketAddr, source: SharedSource) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("HTTP server listening on {}", listener.local_addr()?);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, router(source))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
