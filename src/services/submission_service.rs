//! Submission orchestration.
//!
//! Every flow runs in the same order: validate, render, check that a sender
//! is configured, send.

use crate::domain::ValidationError;
use crate::engine::{self, TotalPolicy};
use crate::error::{SubmissionError, SubmissionResult};
use crate::metrics::{Metrics, SubmissionKind};
use crate::models::{ContactFormPayload, Notification, QuotePayload, RawContact, Receipt};
use crate::sender::NotificationSender;
use crate::templates::{NotificationRenderer, RenderedMessage};
use serde::Serialize;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// Provider receipts for the two messages of a quote submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteReceipts {
    pub business_email: Receipt,
    pub customer_email: Receipt,
}

/// Orchestrates form submissions from payload to delivered email.
pub struct SubmissionService {
    renderer: NotificationRenderer,
    sender: Option<Arc<dyn NotificationSender>>,
    total_policy: TotalPolicy,
    metrics: Metrics,
}

impl SubmissionService {
    /// Create a new submission service.
    ///
    /// `sender` is `None` when no provider credential is configured; every
    /// flow then fails with `ServiceUnconfigured` once validation passes.
    pub fn new(
        renderer: NotificationRenderer,
        sender: Option<Arc<dyn NotificationSender>>,
        total_policy: TotalPolicy,
        metrics: Metrics,
    ) -> Self {
        Self {
            renderer,
            sender,
            total_policy,
            metrics,
        }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn renderer(&self) -> &NotificationRenderer {
        &self.renderer
    }

    /// Handle a contact form submission: one message to the business inbox.
    pub async fn submit_contact(&self, payload: &ContactFormPayload) -> SubmissionResult<Receipt> {
        self.metrics.record_submission(SubmissionKind::Contact);

        let form =
            engine::validate_contact_form(payload).map_err(|e| self.rejected("contact", e))?;
        let message = self.renderer.contact_business(&form)?;
        let sender = self.sender()?;

        let notification = self.to_business(message, form.contact.email.as_str());
        let receipt = self.deliver(sender, &notification).await?;

        info!(id = %receipt.id, "Contact form forwarded to {}", self.renderer.mail().inbox);
        Ok(receipt)
    }

    /// Handle a quote submission.
    ///
    /// Sends the business notification first, then the customer confirmation.
    /// A failed business send aborts before the customer is emailed.
    pub async fn submit_quote(&self, payload: &QuotePayload) -> SubmissionResult<QuoteReceipts> {
        self.metrics.record_submission(SubmissionKind::Quote);

        let request = engine::validate_and_price_with(payload, self.total_policy)
            .map_err(|e| self.rejected("quote", e))?;
        let business_message = self.renderer.quote_business(&request)?;
        let customer_message = self.renderer.quote_customer(&request)?;
        let sender = self.sender()?;

        let customer = request.contact.email.as_str();
        let business_email = self
            .deliver(sender, &self.to_business(business_message, customer))
            .await?;

        let confirmation = Notification {
            from: self.renderer.mail().from.clone(),
            to: vec![customer.to_string()],
            reply_to: None,
            subject: customer_message.subject,
            html: customer_message.html,
        };
        let customer_email = self.deliver(sender, &confirmation).await?;

        info!(
            total = request.breakdown.total(),
            mismatch = request.total_mismatch,
            "Quote sent to business ({}) and customer ({})",
            business_email.id,
            customer_email.id
        );

        Ok(QuoteReceipts {
            business_email,
            customer_email,
        })
    }

    /// Capture the contact details entered on the first wizard step.
    ///
    /// Validation errors are returned to the caller. Delivery happens on a
    /// spawned task whose failure is only logged; the returned handle may be
    /// awaited or dropped. `None` means nothing was sent because no sender
    /// is configured.
    pub fn capture_lead(&self, raw: &RawContact) -> SubmissionResult<Option<JoinHandle<()>>> {
        self.metrics.record_submission(SubmissionKind::Lead);

        let contact = engine::validate_contact(raw).map_err(|e| self.rejected("lead", e))?;
        let message = self.renderer.quote_lead(&contact)?;

        let Some(sender) = self.sender.clone() else {
            warn!("Lead from {} not forwarded: email service not configured", contact.email);
            return Ok(None);
        };

        let notification = self.to_business(message, contact.email.as_str());
        let handle = tokio::spawn(async move {
            match sender.send(&notification).await {
                Ok(receipt) => info!(id = %receipt.id, "Lead forwarded"),
                Err(e) => warn!("Failed to forward lead: {}", e),
            }
        });

        Ok(Some(handle))
    }

    fn sender(&self) -> SubmissionResult<&Arc<dyn NotificationSender>> {
        self.sender.as_ref().ok_or_else(|| {
            error!("RESEND_API_KEY is not configured");
            SubmissionError::ServiceUnconfigured
        })
    }

    fn to_business(&self, message: RenderedMessage, reply_to: &str) -> Notification {
        let mail = self.renderer.mail();
        Notification {
            from: mail.from.clone(),
            to: vec![mail.inbox.clone()],
            reply_to: Some(reply_to.to_string()),
            subject: message.subject,
            html: message.html,
        }
    }

    async fn deliver(
        &self,
        sender: &Arc<dyn NotificationSender>,
        notification: &Notification,
    ) -> SubmissionResult<Receipt> {
        sender.send(notification).await.map_err(|e| {
            error!(to = ?notification.to, "Failed to send email: {}", e);
            SubmissionError::Send(e)
        })
    }

    fn rejected(&self, flow: &str, err: ValidationError) -> SubmissionError {
        self.metrics.record_validation_failure();
        info!(flow, "Submission rejected: {}", err);
        SubmissionError::Validation(err)
    }
}
