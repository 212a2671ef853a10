//! Submission payload — normalized, wire-shaped copy of the draft.

use serde::Serialize;

use crate::draft::{SessionDraft, non_blank};
use crate::error::SubmitError;

/// Request body for the creation service.
///
/// Built exactly once per submission attempt and never mutated. Field
/// names match the wire shape: the draft's `email` becomes
/// `employer_email`, `recipients` become `applicant_emails`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionPayload {
    pub questions: Vec<String>,
    pub traits: Vec<String>,
    pub employer_email: String,
    pub applicant_emails: Vec<String>,
}

impl SubmissionPayload {
    /// Validate and normalize a draft into a payload.
    ///
    /// Fails fast with `SubmitError::Validation` when the trimmed email is
    /// empty or any sequence has no non-blank entry — this check runs
    /// regardless of what the step editors reported, so a step claiming
    /// validity over whitespace-only input still cannot submit. Blank
    /// entries are dropped, order is preserved, nothing is deduplicated,
    /// and kept entries (the email included) pass through verbatim —
    /// trimming only feeds the emptiness checks.
    pub fn from_draft(draft: &SessionDraft) -> Result<Self, SubmitError> {
        let employer_email = draft.email.clone();
        let questions = non_blank(&draft.questions);
        let traits = non_blank(&draft.traits);
        let applicant_emails = non_blank(&draft.recipients);

        if employer_email.trim().is_empty()
            || questions.is_empty()
            || traits.is_empty()
            || applicant_emails.is_empty()
        {
            return Err(SubmitError::Validation);
        }

        Ok(Self {
            questions,
            traits,
            employer_email,
            applicant_emails,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> SessionDraft {
        let mut draft = SessionDraft::new();
        draft.set_email("e@x.com");
        draft.set_question(0, "Q1");
        draft.set_trait(0, "T1");
        draft.set_recipient(0, "r@x.com");
        draft
    }

    #[test]
    fn valid_draft_normalizes() {
        let payload = SubmissionPayload::from_draft(&valid_draft()).unwrap();
        assert_eq!(payload.employer_email, "e@x.com");
        assert_eq!(payload.questions, vec!["Q1".to_string()]);
        assert_eq!(payload.traits, vec!["T1".to_string()]);
        assert_eq!(payload.applicant_emails, vec!["r@x.com".to_string()]);
    }

    #[test]
    fn blank_email_fails() {
        let mut draft = valid_draft();
        draft.set_email("   ");
        assert!(matches!(
            SubmissionPayload::from_draft(&draft),
            Err(SubmitError::Validation)
        ));
    }

    #[test]
    fn all_blank_sequence_fails() {
        for field in ["questions", "traits", "recipients"] {
            let mut draft = valid_draft();
            match field {
                "questions" => draft.set_question(0, "  "),
                "traits" => draft.set_trait(0, ""),
                _ => draft.set_recipient(0, " \t"),
            }
            assert!(
                matches!(
                    SubmissionPayload::from_draft(&draft),
                    Err(SubmitError::Validation)
                ),
                "expected validation failure for blank {field}"
            );
        }
    }

    #[test]
    fn blank_entries_filtered_order_preserved() {
        let mut draft = valid_draft();
        draft.add_question("");
        draft.add_question("Q2");
        draft.add_question("   ");
        draft.add_question("Q2"); // duplicate stays

        let payload = SubmissionPayload::from_draft(&draft).unwrap();
        assert_eq!(
            payload.questions,
            vec!["Q1".to_string(), "Q2".to_string(), "Q2".to_string()]
        );
    }

    #[test]
    fn kept_entries_are_not_rewritten() {
        let mut draft = valid_draft();
        draft.set_question(0, "  Q1  ");
        draft.set_email("  e@x.com  ");
        let payload = SubmissionPayload::from_draft(&draft).unwrap();
        // Filtering removes blanks; what survives is byte-for-byte the input.
        assert_eq!(payload.questions, vec!["  Q1  ".to_string()]);
        assert_eq!(payload.employer_email, "  e@x.com  ");
    }

    #[test]
    fn serializes_to_wire_field_names() {
        let payload = SubmissionPayload::from_draft(&valid_draft()).unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["employer_email"], "e@x.com");
        assert_eq!(json["applicant_emails"][0], "r@x.com");
        assert_eq!(json["questions"][0], "Q1");
        assert_eq!(json["traits"][0], "T1");
    }
}
