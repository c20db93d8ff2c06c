//! Request handlers and the JSON response contract.

use crate::error::{ErrorKind, SubmissionError, SubmissionResult};
use crate::models::{ContactFormPayload, QuotePayload, RawContact};
use crate::services::SubmissionService;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Shared state behind every handler.
pub struct AppState {
    pub service: SubmissionService,

    /// Attach the error's debug chain to failure bodies
    pub expose_stack: bool,
}

impl AppState {
    pub fn new(service: SubmissionService, expose_stack: bool) -> Self {
        Self {
            service,
            expose_stack,
        }
    }

    /// Short answer for anything that is not a `POST`.
    fn preflight(&self, method: &Method) -> Option<Response> {
        if method == Method::OPTIONS {
            Some(StatusCode::OK.into_response())
        } else if method != Method::POST {
            Some(self.error_response(SubmissionError::MethodNotAllowed))
        } else {
            None
        }
    }

    fn error_response(&self, err: SubmissionError) -> Response {
        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorBody {
            error: self.short_message(&err),
            kind: err.kind(),
            fields: match &err {
                SubmissionError::Validation(validation) if !validation.missing_fields().is_empty() => {
                    Some(validation.missing_fields().to_vec())
                }
                _ => None,
            },
            details: err.is_server_error().then(|| err.to_string()),
            stack: self.expose_stack.then(|| format!("{:?}", err)),
        };
        (status, Json(body)).into_response()
    }

    fn short_message(&self, err: &SubmissionError) -> String {
        match err {
            SubmissionError::Validation(validation) => validation.to_string(),
            SubmissionError::MalformedBody(_) => "Invalid JSON body".to_string(),
            SubmissionError::MethodNotAllowed => "Method not allowed".to_string(),
            SubmissionError::ServiceUnconfigured => "Email service not configured".to_string(),
            SubmissionError::Send(_) | SubmissionError::Template(_) => format!(
                "Failed to send email. Please try again or call us at {}",
                self.service.renderer().mail().phone
            ),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    kind: ErrorKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<Vec<&'static str>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    stack: Option<String>,
}

#[derive(Debug, Serialize)]
struct SuccessBody<T> {
    success: bool,
    message: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T: Serialize> SuccessBody<T> {
    fn with_data(message: &'static str, data: T) -> Self {
        Self {
            success: true,
            message,
            data: Some(data),
        }
    }
}

/// Decode a request body into a payload.
///
/// Accepts a JSON object, or a JSON string whose content is itself JSON.
fn parse_body<T: DeserializeOwned>(body: &[u8]) -> SubmissionResult<T> {
    let malformed = |e: serde_json::Error| SubmissionError::MalformedBody(e.to_string());

    let value: Value = serde_json::from_slice(body).map_err(malformed)?;
    let value = match value {
        Value::String(inner) => serde_json::from_str(&inner).map_err(malformed)?,
        other => other,
    };

    serde_json::from_value(value).map_err(malformed)
}

pub async fn contact(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Bytes,
) -> Response {
    if let Some(response) = state.preflight(&method) {
        return response;
    }

    let result = match parse_body::<ContactFormPayload>(&body) {
        Ok(payload) => state.service.submit_contact(&payload).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(receipt) => Json(SuccessBody::with_data("Email sent successfully", receipt)).into_response(),
        Err(e) => state.error_response(e),
    }
}

pub async fn quote(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Bytes,
) -> Response {
    if let Some(response) = state.preflight(&method) {
        return response;
    }

    let result = match parse_body::<QuotePayload>(&body) {
        Ok(payload) => state.service.submit_quote(&payload).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(receipts) => {
            Json(SuccessBody::with_data("Quote sent successfully", receipts)).into_response()
        }
        Err(e) => state.error_response(e),
    }
}

pub async fn quote_contact(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Bytes,
) -> Response {
    if let Some(response) = state.preflight(&method) {
        return response;
    }

    let result = parse_body::<RawContact>(&body)
        .and_then(|contact| state.service.capture_lead(&contact));

    match result {
        // The send continues in the background
        Ok(_) => (
            StatusCode::ACCEPTED,
            Json(SuccessBody::<()> {
                success: true,
                message: "Contact received",
                data: None,
            }),
        )
            .into_response(),
        Err(e) => state.error_response(e),
    }
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "metrics": state.service.metrics().summary(),
    }))
}
