//! Booth Quote - Main entry point
//!
//! Starts the HTTP service that backs the website's contact form and quote
//! wizard.

use anyhow::Result;
use booth_quote::server::{build_router, run_server};
use booth_quote::{
    AppState, Config, Metrics, NotificationRenderer, NotificationSender, ResendClient,
    ResendSender, SubmissionService,
};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let default_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let metrics = Metrics::new();

    // The provider client is built once; without a key every send is refused
    let sender = match ResendClient::from_config(&config) {
        Some(client) => {
            info!("Email provider: {}", config.resend_api_url);
            Some(Arc::new(ResendSender::new(client.with_metrics(metrics.clone())))
                as Arc<dyn NotificationSender>)
        }
        None => {
            warn!("RESEND_API_KEY is not set; submissions will fail with ServiceUnconfigured");
            None
        }
    };

    let renderer = NotificationRenderer::new(config.mail.clone())?;
    let service = SubmissionService::new(renderer, sender, config.total_policy, metrics);

    info!(
        "Quote total policy: {}, environment: {}",
        config.total_policy, config.app_env
    );

    let router = build_router(AppState::new(service, !config.is_production()));
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    run_server(listener, router).await?;

    info!("Booth Quote shutdown complete");
    Ok(())
}
