//! Submission pipeline — validate, normalize, create, cache, confirm.
//!
//! The central failure-handling decision: the remote creation call
//! hard-fails (the service is the system of record), the cache write
//! soft-fails (logged through the observer, never surfaced, never blocks
//! completion). A transport failure before a response maps to a
//! message-carrying error so the banner can explain itself.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::draft::SessionDraft;
use crate::error::SubmitError;
use crate::pipeline::observer::SubmitObserver;
use crate::pipeline::payload::SubmissionPayload;
use crate::remote::{CreationClient, interview_id_from_link};
use crate::store::{SessionRecord, SessionStore};

/// Completion context handed to the confirmation view. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    /// Canonical interview id, derived from the creation link.
    pub id: String,
    /// Employer-facing report link from the creation response.
    pub report_link: String,
}

/// Where a submission attempt currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelinePhase {
    Idle,
    Validating,
    Submitting,
    Persisting,
    Completed,
}

impl PipelinePhase {
    fn as_u8(self) -> u8 {
        match self {
            Self::Idle => 0,
            Self::Validating => 1,
            Self::Submitting => 2,
            Self::Persisting => 3,
            Self::Completed => 4,
        }
    }

    fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Self::Validating,
            2 => Self::Submitting,
            3 => Self::Persisting,
            4 => Self::Completed,
            _ => Self::Idle,
        }
    }
}

/// Orchestrates one submission attempt end to end.
pub struct SubmissionPipeline {
    client: Arc<dyn CreationClient>,
    store: Arc<dyn SessionStore>,
    observer: Arc<dyn SubmitObserver>,
    in_flight: AtomicBool,
    phase: AtomicU8,
}

impl SubmissionPipeline {
    pub fn new(
        client: Arc<dyn CreationClient>,
        store: Arc<dyn SessionStore>,
        observer: Arc<dyn SubmitObserver>,
    ) -> Self {
        Self {
            client,
            store,
            observer,
            in_flight: AtomicBool::new(false),
            phase: AtomicU8::new(PipelinePhase::Idle.as_u8()),
        }
    }

    /// Whether a submission is currently awaiting the remote service.
    /// The UI disables the send control while this is true.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Current phase of the latest attempt.
    pub fn phase(&self) -> PipelinePhase {
        PipelinePhase::from_u8(self.phase.load(Ordering::Acquire))
    }

    fn set_phase(&self, phase: PipelinePhase) {
        self.phase.store(phase.as_u8(), Ordering::Release);
    }

    /// Submit a completed draft.
    ///
    /// 1. Trim-validate and normalize; fail fast with no network call.
    /// 2. Call the creation service; non-success surfaces the body's
    ///    error or a generic fallback, transport failures surface their
    ///    description.
    /// 3. Derive the canonical id from the creation link.
    /// 4. Write the session cache record under that id — best effort.
    /// 5. Return the confirmation regardless of the cache outcome.
    ///
    /// A second call while one is awaiting the service is rejected with
    /// `SubmitError::InFlight` and has no other effect.
    pub async fn submit(&self, draft: &SessionDraft) -> Result<Confirmation, SubmitError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(SubmitError::InFlight);
        }

        let outcome = self.run(draft).await;
        self.in_flight.store(false, Ordering::Release);
        outcome
    }

    async fn run(&self, draft: &SessionDraft) -> Result<Confirmation, SubmitError> {
        self.set_phase(PipelinePhase::Validating);
        let payload = SubmissionPayload::from_draft(draft).inspect_err(|_| {
            self.observer.on_validation_failure();
            self.set_phase(PipelinePhase::Idle);
        })?;

        self.set_phase(PipelinePhase::Submitting);
        let created = self
            .client
            .create_interview(&payload)
            .await
            .inspect_err(|err| {
                match err {
                    SubmitError::Remote { message } => self.observer.on_remote_error(message),
                    SubmitError::Transport { message } => {
                        self.observer.on_transport_error(message)
                    }
                    _ => {}
                }
                self.set_phase(PipelinePhase::Idle);
            })?;

        let id = interview_id_from_link(&created.interview_link).ok_or_else(|| {
            self.set_phase(PipelinePhase::Idle);
            let message = format!(
                "creation response carried no usable link: '{}'",
                created.interview_link
            );
            self.observer.on_transport_error(&message);
            SubmitError::Transport { message }
        })?;

        // Cache write is best effort: the interview already exists, so a
        // failure here never rolls back success or touches the banner.
        self.set_phase(PipelinePhase::Persisting);
        let record = SessionRecord {
            email: payload.employer_email.clone(),
            questions: payload.questions.clone(),
            traits: payload.traits.clone(),
            recipients: payload.applicant_emails.clone(),
            report_link: created.report_link.clone(),
        };
        if let Err(err) = self.store.save_session(&id, &record).await {
            self.observer.on_persistence_error(&id, &err.to_string());
        }

        self.set_phase(PipelinePhase::Completed);
        let confirmation = Confirmation {
            id,
            report_link: created.report_link,
        };
        self.observer.on_completed(&confirmation);
        Ok(confirmation)
    }
}
