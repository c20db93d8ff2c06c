//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Serialize, Serializer};
use std::fmt;

/// A phone number as the customer typed it.
///
/// The website accepts any non-blank text here, so the only rule is that the
/// value is not empty. Formatting is kept for display; `digits_only` gives
/// the dialable form used in `tel:` links.
///
/// # Example
///
/// ```
/// use booth_quote::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("(647) 378-5332").unwrap();
/// assert_eq!(phone.digits_only(), "6473785332");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingField("phone")` for blank input.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if phone.trim().is_empty() {
            return Err(ValidationError::MissingField(vec!["phone"]));
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the phone number with only digits (no formatting).
    pub fn digits_only(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
