//! Error channel — the single user-facing error presentation state.
//!
//! "Block the action" and "explain why" are independently representable:
//! validation failures block silently (the disabled control is the signal),
//! operational failures carry a message for the banner.

use crate::error::SubmitError;

/// Presentation state for the wizard's error banner.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ErrorState {
    /// Nothing wrong; banner hidden.
    #[default]
    None,
    /// A step or the pipeline rejected the input locally. Blocks the
    /// action but renders nothing.
    Validation,
    /// An operational failure with a message to show.
    Message(String),
}

impl ErrorState {
    /// Reset to `None`. Called at the start of every new attempt.
    pub fn clear(&mut self) {
        *self = Self::None;
    }

    /// Whether the triggering action is currently blocked.
    pub fn blocks_action(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Text for the banner, if any. `None` and `Validation` render nothing.
    pub fn banner_text(&self) -> Option<&str> {
        match self {
            Self::Message(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&SubmitError> for ErrorState {
    fn from(err: &SubmitError) -> Self {
        match err {
            SubmitError::Validation => Self::Validation,
            SubmitError::Remote { message } | SubmitError::Transport { message } => {
                Self::Message(message.clone())
            }
            // The in-flight guard blocks silently: the send control is
            // already disabled while a submission runs.
            SubmitError::InFlight => Self::None,
        }
    }
}
