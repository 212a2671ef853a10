//! Submission observability hook.
//!
//! One callback per failure category plus completion, injected into the
//! pipeline so logging policy stays out of the orchestration logic.

use crate::pipeline::submit::Confirmation;

/// Hook invoked at each submission outcome.
///
/// Implementations must not fail; they observe, they don't participate.
pub trait SubmitObserver: Send + Sync {
    /// Local validation rejected the draft before any network call.
    fn on_validation_failure(&self) {}

    /// The creation service responded with a failure.
    fn on_remote_error(&self, _message: &str) {}

    /// No response was obtained from the creation service.
    fn on_transport_error(&self, _message: &str) {}

    /// The cache write failed after a successful creation. Operational
    /// only — the submission still completed.
    fn on_persistence_error(&self, _id: &str, _message: &str) {}

    /// The submission completed.
    fn on_completed(&self, _confirmation: &Confirmation) {}
}

/// Default observer — structured `tracing` events per category.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl SubmitObserver for TracingObserver {
    fn on_validation_failure(&self) {
        tracing::debug!("Submission blocked by local validation");
    }

    fn on_remote_error(&self, message: &str) {
        tracing::error!(message = %message, "Creation service returned an error");
    }

    fn on_transport_error(&self, message: &str) {
        tracing::error!(message = %message, "Creation request failed in transport");
    }

    fn on_persistence_error(&self, id: &str, message: &str) {
        tracing::warn!(id = %id, message = %message, "Session cache write failed (ignored)");
    }

    fn on_completed(&self, confirmation: &Confirmation) {
        tracing::info!(
            id = %confirmation.id,
            report_link = %confirmation.report_link,
            "Interview created"
        );
    }
}
