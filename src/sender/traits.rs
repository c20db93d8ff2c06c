use crate::error::SendResult;
use crate::models::{Notification, Receipt};
use async_trait::async_trait;

/// Delivers a rendered notification to its recipients.
///
/// Abstracts the email provider so handlers can be exercised against an
/// in-memory implementation.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Hand one message to the provider, returning its delivery receipt.
    async fn send(&self, notification: &Notification) -> SendResult<Receipt>;
}
