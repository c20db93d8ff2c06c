//! Error types for the quote service.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur when handing a message to the email provider.
#[derive(Error, Debug)]
pub enum SendError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Provider returned an error status code
    #[error("Email provider error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Credential rejected by the provider
    #[error("Authentication failed")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Machine-readable error category returned to HTTP callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    MissingField,
    InvalidEmail,
    MissingPackage,
    InvalidDate,
    TotalMismatch,
    PriceOverflow,
    MalformedBody,
    MethodNotAllowed,
    ServiceUnconfigured,
    SendError,
    TemplateError,
}

/// Everything a submission can fail with, from parsing to delivery.
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// Submitted data failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Body was not the expected JSON shape
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// HTTP method other than POST or OPTIONS
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// No provider API key is configured
    #[error("Email service not configured")]
    ServiceUnconfigured,

    /// Provider rejected or never received the message
    #[error("Failed to send email: {0}")]
    Send(#[from] SendError),

    /// A notification template failed to render
    #[error("Failed to render email: {0}")]
    Template(#[from] tera::Error),
}

impl SubmissionError {
    /// HTTP status for this error: 4xx for caller mistakes, 500 otherwise.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) | Self::MalformedBody(_) => 400,
            Self::MethodNotAllowed => 405,
            Self::ServiceUnconfigured | Self::Send(_) | Self::Template(_) => 500,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(err) => match err {
                ValidationError::MissingField(_) => ErrorKind::MissingField,
                ValidationError::InvalidEmail(_) => ErrorKind::InvalidEmail,
                ValidationError::MissingPackage => ErrorKind::MissingPackage,
                ValidationError::InvalidDate(_) => ErrorKind::InvalidDate,
                ValidationError::TotalMismatch { .. } => ErrorKind::TotalMismatch,
                ValidationError::PriceOverflow => ErrorKind::PriceOverflow,
            },
            Self::MalformedBody(_) => ErrorKind::MalformedBody,
            Self::MethodNotAllowed => ErrorKind::MethodNotAllowed,
            Self::ServiceUnconfigured => ErrorKind::ServiceUnconfigured,
            Self::Send(_) => ErrorKind::SendError,
            Self::Template(_) => ErrorKind::TemplateError,
        }
    }

    /// True for errors caused by the server rather than the submitted data.
    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

/// Convenience type alias for Results with SendError
pub type SendResult<T> = Result<T, SendError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with SubmissionError
pub type SubmissionResult<T> = Result<T, SubmissionError>;
