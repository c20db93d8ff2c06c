use async_trait::async_trait;
use booth_quote::error::{SendError, SendResult};
use booth_quote::models::{Notification, Receipt};
use booth_quote::sender::NotificationSender;
use std::sync::{Arc, Mutex};

/// Mock notification sender for testing.
///
/// Records every message it is handed and can be told to fail from a given
/// call onwards.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockNotificationSender {
    sent: Arc<Mutex<Vec<Notification>>>,
    fail_from: Arc<Mutex<Option<usize>>>,
}

#[allow(dead_code)]
impl MockNotificationSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sender whose every call fails.
    pub fn failing() -> Self {
        let sender = Self::new();
        sender.fail_from_call(0);
        sender
    }

    /// Fail calls with a zero-based index of `index` or later.
    pub fn fail_from_call(&self, index: usize) {
        *self.fail_from.lock().unwrap() = Some(index);
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl NotificationSender for MockNotificationSender {
    async fn send(&self, notification: &Notification) -> SendResult<Receipt> {
        let mut sent = self.sent.lock().unwrap();
        let index = sent.len();
        sent.push(notification.clone());

        match *self.fail_from.lock().unwrap() {
            Some(from) if index >= from => Err(SendError::ApiError {
                status: 500,
                message: "provider unavailable".to_string(),
            }),
            _ => Ok(Receipt {
                id: format!("msg-{}", index + 1),
            }),
        }
    }
}
