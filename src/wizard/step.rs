//! Wizard step machine — tracks which form stage the user is on.

use serde::{Deserialize, Serialize};

/// The four stages of the interview-creation wizard.
///
/// Progresses linearly: Email → Questions → Traits → Recipients.
/// No branching, no skipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Email,
    Questions,
    Traits,
    Recipients,
}

impl WizardStep {
    /// Zero-based position in the progression.
    pub fn index(&self) -> usize {
        match self {
            Self::Email => 0,
            Self::Questions => 1,
            Self::Traits => 2,
            Self::Recipients => 3,
        }
    }

    /// The next step in the linear progression, if any.
    pub fn next(&self) -> Option<WizardStep> {
        match self {
            Self::Email => Some(Self::Questions),
            Self::Questions => Some(Self::Traits),
            Self::Traits => Some(Self::Recipients),
            Self::Recipients => None,
        }
    }

    /// The previous step, if any.
    pub fn prev(&self) -> Option<WizardStep> {
        match self {
            Self::Email => None,
            Self::Questions => Some(Self::Email),
            Self::Traits => Some(Self::Questions),
            Self::Recipients => Some(Self::Traits),
        }
    }

    /// Whether this is the final step, where send replaces next.
    pub fn is_last(&self) -> bool {
        matches!(self, Self::Recipients)
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::Email
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Email => "email",
            Self::Questions => "questions",
            Self::Traits => "traits",
            Self::Recipients => "recipients",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_walks_all_steps() {
        use WizardStep::*;
        let expected = [Questions, Traits, Recipients];
        let mut current = Email;
        for expected_next in expected {
            let next = current.next().unwrap();
            assert_eq!(next, expected_next);
            current = next;
        }
        assert!(current.next().is_none());
    }

    #[test]
    fn prev_walks_back_to_start() {
        use WizardStep::*;
        assert_eq!(Recipients.prev(), Some(Traits));
        assert_eq!(Traits.prev(), Some(Questions));
        assert_eq!(Questions.prev(), Some(Email));
        assert_eq!(Email.prev(), None);
    }

    #[test]
    fn indices_match_positions() {
        use WizardStep::*;
        assert_eq!(Email.index(), 0);
        assert_eq!(Questions.index(), 1);
        assert_eq!(Traits.index(), 2);
        assert_eq!(Recipients.index(), 3);
    }

    #[test]
    fn only_recipients_is_last() {
        use WizardStep::*;
        assert!(Recipients.is_last());
        assert!(!Email.is_last());
        assert!(!Questions.is_last());
        assert!(!Traits.is_last());
    }

    #[test]
    fn display_matches_serde() {
        use WizardStep::*;
        for step in [Email, Questions, Traits, Recipients] {
            let display = format!("{step}");
            let json = serde_json::to_string(&step).unwrap();
            assert_eq!(format!("\"{display}\""), json);
        }
    }
}
