//! Booth Quote - pricing, validation and email notification service for a
//! photo booth rental business.
//!
//! The website's contact form and quote wizard post to this service, which
//! validates the submission, recomputes the price server-side and emails the
//! business (and, for quotes, the customer) through a transactional email
//! provider.
//!
//! # Architecture
//!
//! - **domain**: Value objects (email, phone, event date) and validation errors
//! - **models**: Wire payloads and validated submission types
//! - **engine**: Pure pricing and validation functions
//! - **templates**: Tera-backed notification rendering
//! - **client**: Blocking HTTP client for the email provider
//! - **sender**: Async notification port and its provider implementation
//! - **services**: Submission orchestration
//! - **server**: axum HTTP surface
//! - **config**, **error**, **metrics**: Ambient support

pub mod client;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod models;
pub mod sender;
pub mod server;
pub mod services;
pub mod templates;

// Re-export commonly used types
pub use client::ResendClient;
pub use config::{Config, MailSettings};
pub use domain::{EmailAddress, EventDate, PhoneNumber, ValidationError};
pub use engine::{validate_and_price, validate_and_price_with, TotalPolicy};
pub use error::{ConfigError, ErrorKind, SendError, SubmissionError};
pub use metrics::{Metrics, MetricsSummary, SubmissionKind};
pub use models::{
    ContactForm, ContactFormPayload, ContactInfo, Notification, PriceBreakdown, QuotePayload,
    QuoteRequest, RawContact, Receipt,
};
pub use sender::{NotificationSender, ResendSender};
pub use server::{build_router, AppState};
pub use services::{QuoteReceipts, SubmissionService};
pub use templates::NotificationRenderer;
