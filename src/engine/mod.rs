//! Quote pricing and validation engine.
//!
//! Pure functions only: feed in a raw payload, get back a validated and
//! priced request or a `ValidationError`. Nothing here performs I/O.

pub mod format;
pub mod pricing;
pub mod validation;

pub use format::format_dollars;
pub use pricing::{
    compute_breakdown, describe_addons, GLAM_BOOTH_FLAT, UNLIMITED_PRINTS_PER_HOUR,
    WAITING_TIME_PER_HOUR,
};
pub use validation::{
    validate_and_price, validate_and_price_with, validate_contact, validate_contact_form,
    TotalPolicy,
};
