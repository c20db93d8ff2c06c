//! Application service layer.
//!
//! The submission service sits between the HTTP handlers and the outside
//! world: it runs the engine, renders notifications and hands them to the
//! configured sender.

mod submission_service;

pub use submission_service::{QuoteReceipts, SubmissionService};
