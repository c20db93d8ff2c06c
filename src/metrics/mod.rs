//! Basic metrics instrumentation for submissions and email delivery.
//!
//! Counters are shared atomics, so clones of a `Metrics` handle all update
//! the same values.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Which form a submission came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    Contact,
    Quote,
    Lead,
}

/// Metrics collector for the quote service.
#[derive(Debug, Clone)]
pub struct Metrics {
    contact_submissions_total: Arc<AtomicU64>,
    quote_submissions_total: Arc<AtomicU64>,
    lead_submissions_total: Arc<AtomicU64>,

    /// Submissions refused by the engine
    validation_failures_total: Arc<AtomicU64>,

    /// Messages accepted by the provider
    emails_sent_total: Arc<AtomicU64>,

    /// Provider calls that failed
    send_errors_total: Arc<AtomicU64>,

    /// Total duration of all provider calls in milliseconds
    send_duration_total_ms: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            contact_submissions_total: Arc::new(AtomicU64::new(0)),
            quote_submissions_total: Arc::new(AtomicU64::new(0)),
            lead_submissions_total: Arc::new(AtomicU64::new(0)),
            validation_failures_total: Arc::new(AtomicU64::new(0)),
            emails_sent_total: Arc::new(AtomicU64::new(0)),
            send_errors_total: Arc::new(AtomicU64::new(0)),
            send_duration_total_ms: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record an incoming submission.
    pub fn record_submission(&self, kind: SubmissionKind) {
        let counter = match kind {
            SubmissionKind::Contact => &self.contact_submissions_total,
            SubmissionKind::Quote => &self.quote_submissions_total,
            SubmissionKind::Lead => &self.lead_submissions_total,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_validation_failure(&self) {
        self.validation_failures_total
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Record one provider call and its outcome.
    pub fn record_send(&self, duration: Duration, success: bool) {
        if success {
            self.emails_sent_total.fetch_add(1, Ordering::Relaxed);
        } else {
            self.send_errors_total.fetch_add(1, Ordering::Relaxed);
        }
        self.send_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn submissions_total(&self, kind: SubmissionKind) -> u64 {
        match kind {
            SubmissionKind::Contact => self.contact_submissions_total.load(Ordering::Relaxed),
            SubmissionKind::Quote => self.quote_submissions_total.load(Ordering::Relaxed),
            SubmissionKind::Lead => self.lead_submissions_total.load(Ordering::Relaxed),
        }
    }

    pub fn validation_failures_total(&self) -> u64 {
        self.validation_failures_total.load(Ordering::Relaxed)
    }

    pub fn emails_sent_total(&self) -> u64 {
        self.emails_sent_total.load(Ordering::Relaxed)
    }

    pub fn send_errors_total(&self) -> u64 {
        self.send_errors_total.load(Ordering::Relaxed)
    }

    /// Get average provider call duration in milliseconds.
    pub fn send_duration_avg_ms(&self) -> f64 {
        let total = self.send_duration_total_ms.load(Ordering::Relaxed);
        let count = self.emails_sent_total() + self.send_errors_total();
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            contact_submissions_total: self.submissions_total(SubmissionKind::Contact),
            quote_submissions_total: self.submissions_total(SubmissionKind::Quote),
            lead_submissions_total: self.submissions_total(SubmissionKind::Lead),
            validation_failures_total: self.validation_failures_total(),
            emails_sent_total: self.emails_sent_total(),
            send_errors_total: self.send_errors_total(),
            send_duration_avg_ms: self.send_duration_avg_ms(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSummary {
    pub contact_submissions_total: u64,
    pub quote_submissions_total: u64,
    pub lead_submissions_total: u64,
    pub validation_failures_total: u64,
    pub emails_sent_total: u64,
    pub send_errors_total: u64,
    pub send_duration_avg_ms: f64,
}
