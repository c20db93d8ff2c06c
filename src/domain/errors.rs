//! Domain validation errors.

use std::fmt;

/// Errors raised while validating a submission.
///
/// These are always recoverable and are reported to the caller as 4xx
/// responses, never as server failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields were absent or blank, in form order.
    MissingField(Vec<&'static str>),

    /// The email address did not match the accepted shape.
    InvalidEmail(String),

    /// No package was selected, or it had zero hours or a zero price.
    MissingPackage,

    /// The event date could not be parsed as a calendar date.
    InvalidDate(String),

    /// The client-submitted total disagrees with the recomputed one.
    TotalMismatch { submitted: u32, computed: u32 },

    /// The price breakdown does not fit in the price type.
    PriceOverflow,
}

impl ValidationError {
    /// Names of the missing fields, empty for every other variant.
    pub fn missing_fields(&self) -> &[&'static str] {
        match self {
            Self::MissingField(fields) => fields,
            _ => &[],
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(fields) => {
                write!(f, "Missing required field(s): {}", fields.join(", "))
            }
            Self::InvalidEmail(_) => write!(f, "Invalid email format"),
            Self::MissingPackage => write!(f, "Package selection is required"),
            Self::InvalidDate(date) => write!(f, "Invalid event date: {}", date),
            Self::TotalMismatch {
                submitted,
                computed,
            } => write!(
                f,
                "Submitted total ${} does not match computed total ${}",
                submitted, computed
            ),
            Self::PriceOverflow => write!(f, "Quote total is out of range"),
        }
    }
}

impl std::error::Error for ValidationError {}
