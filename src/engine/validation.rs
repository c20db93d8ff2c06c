//! Submission validation.
//!
//! Checks run in a fixed order: required fields, package, email shape, event
//! date, then pricing. The first failing check decides the error.

use super::pricing::{compute_breakdown, describe_addons};
use crate::domain::{EmailAddress, EventDate, PhoneNumber, ValidationError};
use crate::models::{
    AddonSelection, ContactForm, ContactFormPayload, ContactInfo, PackagePick, QuotePayload,
    QuoteRequest, RawContact,
};
use std::fmt;
use std::str::FromStr;

/// What to do when the browser's total disagrees with the recomputed one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TotalPolicy {
    /// Accept the quote, mark it and log a warning.
    #[default]
    Flag,

    /// Refuse the quote with `ValidationError::TotalMismatch`.
    Reject,
}

impl FromStr for TotalPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flag" => Ok(Self::Flag),
            "reject" => Ok(Self::Reject),
            other => Err(format!("expected 'flag' or 'reject', got '{}'", other)),
        }
    }
}

impl fmt::Display for TotalPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag => write!(f, "flag"),
            Self::Reject => write!(f, "reject"),
        }
    }
}

/// Field names used in `MissingField` for each form.
struct FieldNames {
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    event_date: &'static str,
}

const QUOTE_FIELDS: FieldNames = FieldNames {
    name: "fullName",
    email: "email",
    phone: "phone",
    event_date: "eventDate",
};

const CONTACT_FORM_FIELDS: FieldNames = FieldNames {
    name: "name",
    email: "email",
    phone: "phone",
    event_date: "event-date",
};

/// Borrow a field's value when it is present and not blank.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Blank optional text becomes `None`.
fn optional_text(value: &Option<String>) -> Option<String> {
    present(value).map(str::to_string)
}

/// Presence check for all four contact fields, reporting every missing one.
fn require_contact_fields<'a>(
    names: &FieldNames,
    full_name: &'a Option<String>,
    email: &'a Option<String>,
    phone: &'a Option<String>,
    event_date: &'a Option<String>,
) -> Result<[&'a str; 4], ValidationError> {
    let fields = [
        (names.name, present(full_name)),
        (names.email, present(email)),
        (names.phone, present(phone)),
        (names.event_date, present(event_date)),
    ];

    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| *name)
        .collect();

    match fields {
        [(_, Some(n)), (_, Some(e)), (_, Some(p)), (_, Some(d))] => Ok([n, e, p, d]),
        _ => Err(ValidationError::MissingField(missing)),
    }
}

/// Shape checks that follow the presence check.
fn build_contact(
    full_name: &str,
    email: &str,
    phone: &str,
    event_date: &str,
) -> Result<ContactInfo, ValidationError> {
    let email = EmailAddress::new(email)?;
    let event_date = EventDate::parse(event_date)?;
    let phone = PhoneNumber::new(phone)?;

    Ok(ContactInfo {
        full_name: full_name.trim().to_string(),
        email,
        phone,
        event_date,
    })
}

/// Validate the contact block of the quote wizard on its own.
///
/// Used by lead capture, which runs before a package is chosen.
pub fn validate_contact(raw: &RawContact) -> Result<ContactInfo, ValidationError> {
    let [name, email, phone, date] = require_contact_fields(
        &QUOTE_FIELDS,
        &raw.full_name,
        &raw.email,
        &raw.phone,
        &raw.event_date,
    )?;
    build_contact(name, email, phone, date)
}

/// Validate a simple contact form submission.
pub fn validate_contact_form(payload: &ContactFormPayload) -> Result<ContactForm, ValidationError> {
    let [name, email, phone, date] = require_contact_fields(
        &CONTACT_FORM_FIELDS,
        &payload.name,
        &payload.email,
        &payload.phone,
        &payload.event_date,
    )?;
    let contact = build_contact(name, email, phone, date)?;

    Ok(ContactForm {
        contact,
        event_type: optional_text(&payload.event_type),
        message: optional_text(&payload.message),
    })
}

/// Validate and price a quote, flagging a mismatched client total.
pub fn validate_and_price(payload: &QuotePayload) -> Result<QuoteRequest, ValidationError> {
    validate_and_price_with(payload, TotalPolicy::Flag)
}

/// Validate and price a quote under an explicit total policy.
pub fn validate_and_price_with(
    payload: &QuotePayload,
    policy: TotalPolicy,
) -> Result<QuoteRequest, ValidationError> {
    let raw_contact = payload.contact.clone().unwrap_or_default();
    let [name, email, phone, date] = require_contact_fields(
        &QUOTE_FIELDS,
        &raw_contact.full_name,
        &raw_contact.email,
        &raw_contact.phone,
        &raw_contact.event_date,
    )?;

    let raw_package = payload.package.clone().unwrap_or_default();
    let package = PackagePick::new(
        raw_package.hours.unwrap_or(0),
        raw_package.price.unwrap_or(0),
    )?;

    let contact = build_contact(name, email, phone, date)?;

    let addons: AddonSelection = payload.addons.unwrap_or_default().into();
    let breakdown = compute_breakdown(&package, &addons)?;
    let addon_lines = describe_addons(&addons, &breakdown);

    let total_mismatch = payload
        .total
        .is_some_and(|submitted| submitted != breakdown.total());

    if total_mismatch {
        let submitted = payload.total.unwrap_or_default();
        if policy == TotalPolicy::Reject {
            return Err(ValidationError::TotalMismatch {
                submitted,
                computed: breakdown.total(),
            });
        }
        tracing::warn!(
            submitted,
            computed = breakdown.total(),
            "Client total differs from recomputed total; using recomputed total"
        );
    }

    Ok(QuoteRequest {
        contact,
        package,
        addons,
        breakdown,
        addon_lines,
        client_total: payload.total,
        total_mismatch,
    })
}
