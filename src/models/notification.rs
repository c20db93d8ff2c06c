//! Outbound notification and provider receipt.

use serde::{Deserialize, Serialize};

/// A rendered email ready to hand to a `NotificationSender`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Sender, e.g. `GTA Photo Booths<hello@gtaphotobooths.ca>`
    pub from: String,

    pub to: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,

    pub subject: String,

    /// HTML body
    pub html: String,
}

/// Acknowledgement returned by the email provider for one accepted message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Provider message id
    pub id: String,
}
