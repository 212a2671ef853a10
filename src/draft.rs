//! Session draft — the mutable in-progress form state for one wizard run.
//!
//! The draft is owned by the `WizardController` and handed to step editors
//! by reference; all mutation goes through the structured setters here so
//! there is exactly one owner and no ambient shared state. Each sequence
//! keeps at least one (possibly blank) slot so step UIs always have an
//! editable entry; submission validity is stricter and checked separately.

use serde::{Deserialize, Serialize};

/// In-progress interview-creation inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDraft {
    /// Employer contact email.
    pub email: String,
    /// Interview questions, in the order they will be asked.
    pub questions: Vec<String>,
    /// Traits the answers are evaluated against.
    pub traits: Vec<String>,
    /// Applicant email addresses to invite.
    pub recipients: Vec<String>,
}

impl Default for SessionDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionDraft {
    /// Create an empty draft with one blank slot per sequence.
    pub fn new() -> Self {
        Self {
            email: String::new(),
            questions: vec![String::new()],
            traits: vec![String::new()],
            recipients: vec![String::new()],
        }
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Replace the question at `index`, if it exists.
    pub fn set_question(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.questions.get_mut(index) {
            *slot = value.into();
        }
    }

    pub fn add_question(&mut self, value: impl Into<String>) {
        self.questions.push(value.into());
    }

    /// Remove the question at `index`, keeping the one-slot invariant.
    pub fn remove_question(&mut self, index: usize) {
        remove_keeping_slot(&mut self.questions, index);
    }

    pub fn set_trait(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.traits.get_mut(index) {
            *slot = value.into();
        }
    }

    pub fn add_trait(&mut self, value: impl Into<String>) {
        self.traits.push(value.into());
    }

    pub fn remove_trait(&mut self, index: usize) {
        remove_keeping_slot(&mut self.traits, index);
    }

    pub fn set_recipient(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.recipients.get_mut(index) {
            *slot = value.into();
        }
    }

    pub fn add_recipient(&mut self, value: impl Into<String>) {
        self.recipients.push(value.into());
    }

    pub fn remove_recipient(&mut self, index: usize) {
        remove_keeping_slot(&mut self.recipients, index);
    }

    /// Whether the draft would pass submission validation: non-blank email
    /// and at least one non-blank entry in every sequence after trimming.
    ///
    /// Steps report their own `can_continue` signal independently; the
    /// pipeline re-checks this regardless of what the steps reported.
    pub fn is_submittable(&self) -> bool {
        !self.email.trim().is_empty()
            && has_non_blank(&self.questions)
            && has_non_blank(&self.traits)
            && has_non_blank(&self.recipients)
    }
}

/// Remove `index` from `items` but never leave the sequence empty.
fn remove_keeping_slot(items: &mut Vec<String>, index: usize) {
    if index < items.len() {
        items.remove(index);
    }
    if items.is_empty() {
        items.push(String::new());
    }
}

/// Whether any entry is non-blank after trimming.
pub fn has_non_blank(items: &[String]) -> bool {
    items.iter().any(|item| !item.trim().is_empty())
}

/// Copy of `items` with blank/whitespace-only entries removed, relative
/// order preserved. Kept entries pass through verbatim; trimming is only
/// used for the emptiness check. No deduplication.
pub fn non_blank(items: &[String]) -> Vec<String> {
    items
        .iter()
        .filter(|item| !item.trim().is_empty())
        .cloned()
        .collect()
}
