//! Contact details submitted by the website forms.

use crate::domain::{EmailAddress, EventDate, PhoneNumber};
use serde::{Deserialize, Serialize};

/// Contact block of the quote wizard, exactly as the browser sent it.
///
/// Every field is optional here; the engine decides what is missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct RawContact {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub event_date: Option<String>,
}

/// Body of the simple contact form.
///
/// Field names follow the HTML form's `name` attributes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContactFormPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(rename = "event-date")]
    pub event_date: Option<String>,
    #[serde(rename = "event-type")]
    pub event_type: Option<String>,
    pub message: Option<String>,
}

/// Validated contact details shared by every submission kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    /// Customer's name, trimmed
    pub full_name: String,

    /// Customer's email, used as reply-to and as the confirmation recipient
    pub email: EmailAddress,

    pub phone: PhoneNumber,

    pub event_date: EventDate,
}

/// A validated contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub contact: ContactInfo,

    /// Kind of event (wedding, corporate, ...), if given
    pub event_type: Option<String>,

    /// Free-form message, if given
    pub message: Option<String>,
}

impl ContactForm {
    /// Event type with its first character upper-cased for display.
    pub fn event_type_display(&self) -> Option<String> {
        self.event_type.as_deref().map(capitalize_first)
    }
}

/// Upper-case the first character and keep the rest untouched.
fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
