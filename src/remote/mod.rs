//! Remote creation service boundary.
//!
//! The service is the system of record for "did the interview get created";
//! everything this crate persists afterwards is a convenience cache. The
//! pipeline talks to the service through the `CreationClient` trait so
//! tests can substitute a fake.

pub mod http;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::SubmitError;
use crate::pipeline::payload::SubmissionPayload;

pub use http::HttpCreationClient;

/// Success response from the creation endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct InterviewCreated {
    /// Link applicants follow to take the interview. Its final path
    /// segment is the canonical interview id.
    pub interview_link: String,
    /// Link to the employer-facing report.
    pub report_link: String,
}

/// Optional structured body of a failure response.
#[derive(Debug, Deserialize)]
pub struct RemoteErrorBody {
    pub error: String,
}

/// Client for the interview-creation service.
#[async_trait]
pub trait CreationClient: Send + Sync {
    /// Create an interview from a normalized payload.
    ///
    /// A non-success response maps to `SubmitError::Remote` carrying the
    /// body's `error` field when present; a failure to get any response
    /// maps to `SubmitError::Transport`.
    async fn create_interview(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<InterviewCreated, SubmitError>;
}

/// Extract the canonical interview id from a creation link: the last
/// non-empty path segment, so a trailing slash does not change the result.
pub fn interview_id_from_link(link: &str) -> Option<String> {
    link.split('/')
        .rev()
        .find(|segment| !segment.is_empty())
        .map(str::to_string)
}
