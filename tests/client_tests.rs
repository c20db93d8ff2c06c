//! Integration tests for the ResendClient using mockito for HTTP mocking.

use booth_quote::{Notification, ResendClient, SendError};
use mockito::{Matcher, Server};
use serde_json::json;

fn sample_notification(reply_to: Option<&str>) -> Notification {
    Notification {
        from: "GTA Photo Booths<hello@gtaphotobooths.ca>".to_string(),
        to: vec!["hello@gtaphotobooths.ca".to_string()],
        reply_to: reply_to.map(str::to_string),
        subject: "New Contact Form Submission from Ann Lee".to_string(),
        html: "<p>Hello</p>".to_string(),
    }
}

#[test]
fn test_send_email() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/emails")
        .match_header("authorization", "Bearer re_test_key")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "from": "GTA Photo Booths<hello@gtaphotobooths.ca>",
            "to": ["hello@gtaphotobooths.ca"],
            "reply_to": "ann@example.com",
            "subject": "New Contact Form Submission from Ann Lee",
            "html": "<p>Hello</p>"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794"}"#)
        .create();

    let client = ResendClient::with_base_url(server.url(), "re_test_key".to_string());
    let receipt = client
        .send_email(&sample_notification(Some("ann@example.com")))
        .unwrap();

    mock.assert();
    assert_eq!(receipt.id, "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794");
    assert_eq!(client.metrics().emails_sent_total(), 1);
}

#[test]
fn test_send_email_without_reply_to_omits_field() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/emails")
        .match_body(Matcher::Json(json!({
            "from": "GTA Photo Booths<hello@gtaphotobooths.ca>",
            "to": ["hello@gtaphotobooths.ca"],
            "subject": "New Contact Form Submission from Ann Lee",
            "html": "<p>Hello</p>"
        })))
        .with_status(200)
        .with_body(r#"{"id": "abc"}"#)
        .create();

    let client = ResendClient::with_base_url(server.url(), "re_test_key".to_string());
    let receipt = client.send_email(&sample_notification(None)).unwrap();

    mock.assert();
    assert_eq!(receipt.id, "abc");
}

#[test]
fn test_send_email_unauthorized() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/emails")
        .with_status(401)
        .with_body(r#"{"statusCode":401,"message":"API key is invalid"}"#)
        .create();

    let client = ResendClient::with_base_url(server.url(), "bad_key".to_string());
    let result = client.send_email(&sample_notification(None));

    mock.assert();
    assert!(matches!(result, Err(SendError::Unauthorized)));
    assert_eq!(client.metrics().send_errors_total(), 1);
}

#[test]
fn test_send_email_forbidden() {
    let mut server = Server::new();

    let mock = server.mock("POST", "/emails").with_status(403).create();

    let client = ResendClient::with_base_url(server.url(), "re_test_key".to_string());
    let result = client.send_email(&sample_notification(None));

    mock.assert();
    assert!(matches!(result, Err(SendError::Unauthorized)));
}

#[test]
fn test_send_email_rate_limited() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/emails")
        .with_status(429)
        .with_body(r#"{"message":"Too many requests"}"#)
        .create();

    let client = ResendClient::with_base_url(server.url(), "re_test_key".to_string());
    let result = client.send_email(&sample_notification(None));

    mock.assert();
    assert!(matches!(result, Err(SendError::RateLimitExceeded)));
}

#[test]
fn test_send_email_validation_error() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/emails")
        .with_status(422)
        .with_body(r#"{"statusCode":422,"message":"Invalid `to` field"}"#)
        .create();

    let client = ResendClient::with_base_url(server.url(), "re_test_key".to_string());
    let result = client.send_email(&sample_notification(None));

    mock.assert();
    match result {
        Err(SendError::ApiError { status, message }) => {
            assert_eq!(status, 422);
            assert!(message.contains("Invalid `to` field"));
        }
        other => panic!("Expected ApiError, got: {:?}", other),
    }
}

#[test]
fn test_send_email_unexpected_response() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/emails")
        .with_status(200)
        .with_body("not json")
        .create();

    let client = ResendClient::with_base_url(server.url(), "re_test_key".to_string());
    let result = client.send_email(&sample_notification(None));

    mock.assert();
    assert!(matches!(result, Err(SendError::JsonError(_))));
}
