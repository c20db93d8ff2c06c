//! Data models for form submissions and notifications.
//!
//! Raw payload types mirror the JSON the website posts; validated types are
//! only produced by the engine.

pub mod contact;
pub mod notification;
pub mod quote;

pub use contact::{ContactForm, ContactFormPayload, ContactInfo, RawContact};
pub use notification::{Notification, Receipt};
pub use quote::{
    AddonSelection, PackagePick, PriceBreakdown, QuotePayload, QuoteRequest, RawAddons,
    RawPackage,
};
