//! HTTP surface for the booking forms.
//!
//! Three form endpoints accept `POST` and answer `OPTIONS` pre-flight probes;
//! every response carries permissive CORS headers so the static site can
//! call them from any origin.

pub mod handlers;

pub use handlers::AppState;

use anyhow::Result;
use axum::http::header::{
    HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::routing::{any, get};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/contact", any(handlers::contact))
        .route("/api/quote", any(handlers::quote))
        .route("/api/quote-contact", any(handlers::quote_contact))
        .route("/health", get(handlers::health))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .with_state(Arc::new(state))
}

/// Serve the router on an already bound listener until Ctrl-C.
pub async fn run_server(listener: TcpListener, router: Router) -> Result<()> {
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}
