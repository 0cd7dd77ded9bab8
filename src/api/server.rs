//! HTTP server setup: router, root page, and API routes.

use axum::Json;
use axum::Router;
use axum::response::Html;
use axum::routing::{get, post};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use super::clock;
use super::state::ApiState;
use super::timer;

/// Start the HTTP server on the given address.
///
/// Returns the bound address (relevant when binding port 0) and a handle
/// that resolves when the server shuts down. The caller passes a
/// `tokio::sync::watch::Receiver<bool>` for graceful shutdown.
pub async fn start_http_server(
    bind: SocketAddr,
    shutdown_rx: tokio::sync::watch::Receiver<bool>,
) -> anyhow::Result<(SocketAddr, tokio::task::JoinHandle<()>)> {
    let state = Arc::new(ApiState::new());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/timer", get(timer::get_timer))
        .route("/timer/start", post(timer::start_timer))
        .route("/timer/stop", post(timer::stop_timer))
        .route("/timer/lap", post(timer::lap_timer))
        .route("/timer/reset", post(timer::reset_timer))
        .route("/clock", get(clock::get_clock))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(addr = %local_addr, "HTTP server listening");

    let handle = tokio::spawn(async move {
        let mut shutdown = shutdown_rx;
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.wait_for(|v| *v).await;
            })
            .await
            .ok();
    });

    Ok((local_addr, handle))
}

// -- Plain handlers --

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// The single-page stopwatch and clock UI.
async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
