//! Submission pipeline — the orchestration behind the wizard's send action.

pub mod observer;
pub mod payload;
pub mod submit;

pub use observer::{SubmitObserver, TracingObserver};
pub use payload::SubmissionPayload;
pub use submit::{Confirmation, PipelinePhase, SubmissionPipeline};
