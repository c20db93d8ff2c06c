//! HTTP client for the transactional email provider.
//!
//! This module provides a synchronous HTTP client that can be used from async
//! contexts via `tokio::task::spawn_blocking`. It handles authentication and
//! maps provider failures onto `SendError`.

use crate::config::Config;
use crate::error::{SendError, SendResult};
use crate::metrics::Metrics;
use crate::models::{Notification, Receipt};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// HTTP client for the provider's `POST /emails` endpoint.
#[derive(Clone)]
pub struct ResendClient {
    /// Base URL for the provider API
    base_url: String,

    /// API key, sent as a bearer token
    api_key: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ResendClient {
    /// Create a client from configuration.
    ///
    /// Returns `None` when no API key is configured.
    pub fn from_config(config: &Config) -> Option<Self> {
        let api_key = config.resend_api_key.clone()?;
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Some(Self {
            base_url: config.resend_api_url.clone(),
            api_key,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        })
    }

    /// Create a ResendClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            api_key,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Report provider calls to a shared collector.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Send one email.
    pub fn send_email(&self, notification: &Notification) -> SendResult<Receipt> {
        let start = Instant::now();
        let url = self.build_url("/emails");
        let body = serde_json::to_value(notification)?;

        tracing::debug!(to = ?notification.to, subject = %notification.subject, "POST {}", url);

        let result = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e))
            .and_then(|response| {
                let text = response
                    .into_string()
                    .map_err(|e| SendError::HttpError(e.to_string()))?;
                serde_json::from_str::<Receipt>(&text).map_err(SendError::JsonError)
            });

        self.metrics.record_send(start.elapsed(), result.is_ok());
        match &result {
            Ok(receipt) => tracing::debug!("POST {} - accepted as {}", url, receipt.id),
            Err(e) => tracing::error!("POST {} - Error: {:?}", url, e),
        }

        result
    }

    /// Map a ureq error to a SendError.
    fn map_error(&self, error: ureq::Error) -> SendError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    401 | 403 => SendError::Unauthorized,
                    429 => SendError::RateLimitExceeded,
                    _ => SendError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    SendError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    SendError::Timeout
                } else {
                    SendError::HttpError(transport.to_string())
                }
            }
        }
    }
}
