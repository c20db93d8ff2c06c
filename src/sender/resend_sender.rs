use crate::client::ResendClient;
use crate::error::{SendError, SendResult};
use crate::models::{Notification, Receipt};
use crate::sender::traits::NotificationSender;
use async_trait::async_trait;
use std::sync::Arc;

/// Notification sender backed by the synchronous `ResendClient`.
///
/// Each call runs on tokio's blocking pool so the HTTP round trip never
/// stalls the async runtime.
pub struct ResendSender {
    client: Arc<ResendClient>,
}

impl ResendSender {
    pub fn new(client: ResendClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl NotificationSender for ResendSender {
    async fn send(&self, notification: &Notification) -> SendResult<Receipt> {
        let client = self.client.clone();
        let notification = notification.clone();
        tokio::task::spawn_blocking(move || client.send_email(&notification))
            .await
            .map_err(|e| SendError::HttpError(format!("Task join error: {}", e)))?
    }
}
