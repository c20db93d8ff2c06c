//! Domain value objects and types.
//!
//! Type-safe wrappers for the contact details a customer submits. Each value
//! object validates at construction time so the rest of the crate never
//! handles an unchecked email address or event date.

pub mod email;
pub mod errors;
pub mod event_date;
pub mod phone;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use event_date::EventDate;
pub use phone::PhoneNumber;
