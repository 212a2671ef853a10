//! Wizard controller — owns the step index, the draft, and the error state.
//!
//! Step editors receive the draft by reference and report a `can_continue`
//! signal reflecting their own fields' well-formedness; the controller
//! consumes that signal to gate forward navigation and never inspects field
//! contents itself. Submission re-validates independently (see
//! `pipeline::payload`), so a step reporting `true` over whitespace-only
//! input still cannot reach the service.

use crate::draft::SessionDraft;
use crate::wizard::error_channel::ErrorState;
use crate::wizard::step::WizardStep;

/// Controller for one wizard run.
#[derive(Debug, Default)]
pub struct WizardController {
    step: WizardStep,
    draft: SessionDraft,
    error: ErrorState,
    can_continue: bool,
}

impl WizardController {
    /// Create a controller at the email step with an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently displayed step.
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Read access to the draft.
    pub fn draft(&self) -> &SessionDraft {
        &self.draft
    }

    /// Mutable access to the draft, for the currently displayed step's
    /// editor only.
    pub fn draft_mut(&mut self) -> &mut SessionDraft {
        &mut self.draft
    }

    /// Current error presentation state.
    pub fn error(&self) -> &ErrorState {
        &self.error
    }

    /// Overwrite the error state, e.g. with a submission outcome.
    pub fn set_error(&mut self, error: ErrorState) {
        self.error = error;
    }

    /// The active step's validity signal, as last reported by its editor.
    pub fn can_continue(&self) -> bool {
        self.can_continue
    }

    /// Record the active step's validity signal.
    pub fn set_can_continue(&mut self, can_continue: bool) {
        self.can_continue = can_continue;
    }

    /// Advance to the next step, gated on the active step's signal.
    ///
    /// The email step advances unconditionally: the original behaved this
    /// way (its `can_continue` signal exists but is bypassed), and the
    /// behavior is preserved rather than made symmetric. Submission
    /// re-validates the email, so nothing invalid reaches the service.
    ///
    /// Returns the new step, or `None` if navigation did not happen
    /// (blocked by validation, or already at the last step).
    pub fn next(&mut self) -> Option<WizardStep> {
        if self.step != WizardStep::Email && !self.can_continue {
            self.error = ErrorState::Validation;
            return None;
        }
        self.error.clear();
        let next = self.step.next()?;
        self.step = next;
        self.can_continue = false;
        Some(next)
    }

    /// Go back one step, clamped at the email step.
    ///
    /// The surrounding UI only shows the back control when step > 0, but
    /// the clamp holds regardless of what the UI does.
    pub fn back(&mut self) -> WizardStep {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
            self.error.clear();
            self.can_continue = false;
        }
        self.step
    }
}
