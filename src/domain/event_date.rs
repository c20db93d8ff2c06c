//! EventDate value object.

use super::errors::ValidationError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

/// The calendar date of the customer's event.
///
/// Accepts the `YYYY-MM-DD` value produced by a date input, or a full
/// RFC 3339 timestamp whose UTC calendar date is used.
///
/// # Example
///
/// ```
/// use booth_quote::domain::EventDate;
///
/// let date = EventDate::parse("2025-01-05").unwrap();
/// assert_eq!(date.long_format(), "January 5, 2025");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventDate(NaiveDate);

impl EventDate {
    /// Parse an event date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` with the original input when
    /// neither format matches or the date does not exist.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Ok(Self(date));
        }

        DateTime::parse_from_rfc3339(trimmed)
            .map(|dt| Self(dt.with_timezone(&Utc).date_naive()))
            .map_err(|_| ValidationError::InvalidDate(input.to_string()))
    }

    /// Long English date, e.g. `January 5, 2025`.
    pub fn long_format(&self) -> String {
        self.0.format("%B %-d, %Y").to_string()
    }

    /// `YYYY-MM-DD`.
    pub fn iso_format(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

// Serialized in ISO form so receipts and logs stay machine-readable
impl Serialize for EventDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.iso_format().serialize(serializer)
    }
}

impl fmt::Display for EventDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.long_format())
    }
}
