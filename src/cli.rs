//! CLI front-end — stdin/stdout rendition of the wizard's action surface.
//!
//! This is the widget side of the step boundary: each step's editor lives
//! here, computes its own `can_continue` signal, and reports it to the
//! controller. The controller and pipeline never look at these rules.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::draft::{SessionDraft, has_non_blank};
use crate::pipeline::{Confirmation, SubmissionPipeline};
use crate::wizard::{ErrorState, WizardController, WizardStep};

/// Per-step validity rule, as a step widget would compute it.
///
/// The email rule is widget-local (shape check); the list steps only
/// require one non-blank entry. Submission re-validates independently.
pub fn can_continue_for(step: WizardStep, draft: &SessionDraft) -> bool {
    match step {
        WizardStep::Email => {
            let email = draft.email.trim();
            !email.is_empty() && email.contains('@')
        }
        WizardStep::Questions => has_non_blank(&draft.questions),
        WizardStep::Traits => has_non_blank(&draft.traits),
        WizardStep::Recipients => has_non_blank(&draft.recipients),
    }
}

fn prompt_for(step: WizardStep) -> &'static str {
    match step {
        WizardStep::Email => "Your email address",
        WizardStep::Questions => "Interview questions (one per line)",
        WizardStep::Traits => "Traits to evaluate (one per line)",
        WizardStep::Recipients => "Applicant email addresses (one per line)",
    }
}

fn render(controller: &WizardController) {
    let step = controller.step();
    let draft = controller.draft();

    eprintln!();
    if let Some(text) = controller.error().banner_text() {
        eprintln!("❌ Error: {text}");
    }
    eprintln!("── Step {}/4: {} ──", step.index() + 1, prompt_for(step));

    match step {
        WizardStep::Email => {
            if !draft.email.is_empty() {
                eprintln!("   {}", draft.email);
            }
        }
        _ => {
            let entries = match step {
                WizardStep::Questions => &draft.questions,
                WizardStep::Traits => &draft.traits,
                _ => &draft.recipients,
            };
            for (i, entry) in entries.iter().filter(|e| !e.trim().is_empty()).enumerate() {
                eprintln!("   {}. {}", i + 1, entry);
            }
        }
    }

    let mut actions = vec![];
    if step.index() > 0 {
        actions.push("/back");
    }
    if step.is_last() {
        actions.push("/send");
    } else {
        actions.push("/next");
    }
    actions.push("/quit");
    eprintln!("   ({})", actions.join(", "));
    eprint!("> ");
}

/// Apply a line of input as an edit to the current step's fields.
fn apply_edit(step: WizardStep, draft: &mut SessionDraft, line: &str) {
    match step {
        WizardStep::Email => draft.set_email(line),
        WizardStep::Questions => {
            // Fill the seeded blank slot before appending.
            if draft.questions.len() == 1 && draft.questions[0].trim().is_empty() {
                draft.set_question(0, line);
            } else {
                draft.add_question(line);
            }
        }
        WizardStep::Traits => {
            if draft.traits.len() == 1 && draft.traits[0].trim().is_empty() {
                draft.set_trait(0, line);
            } else {
                draft.add_trait(line);
            }
        }
        WizardStep::Recipients => {
            if draft.recipients.len() == 1 && draft.recipients[0].trim().is_empty() {
                draft.set_recipient(0, line);
            } else {
                draft.add_recipient(line);
            }
        }
    }
}

/// Run the wizard loop until an interview is created or stdin closes.
///
/// Returns the confirmation on success, `None` if the user quit.
pub async fn run(pipeline: Arc<SubmissionPipeline>) -> std::io::Result<Option<Confirmation>> {
    let mut controller = WizardController::new();
    let stdin = tokio::io::stdin();
    let reader = BufReader::new(stdin);
    let mut lines = reader.lines();

    controller.set_can_continue(can_continue_for(controller.step(), controller.draft()));
    render(&controller);

    while let Some(line) = lines.next_line().await? {
        let line = line.trim().to_string();

        match line.as_str() {
            "" => {}
            "/quit" | "/exit" => return Ok(None),
            "/back" => {
                controller.back();
            }
            "/next" => {
                if !controller.step().is_last() {
                    controller.next();
                }
            }
            "/send" if !controller.step().is_last() => {}
            "/send" => {
                if pipeline.is_in_flight() {
                    // Send control is disabled while a submission runs.
                    render(&controller);
                    continue;
                }
                if !controller.can_continue() {
                    controller.set_error(ErrorState::Validation);
                    render(&controller);
                    continue;
                }
                controller.set_error(ErrorState::None);
                eprintln!("⏳ Creating interview...");
                match pipeline.submit(controller.draft()).await {
                    Ok(confirmation) => {
                        eprintln!("✅ Interview created: {}", confirmation.id);
                        eprintln!("   Report: {}", confirmation.report_link);
                        return Ok(Some(confirmation));
                    }
                    Err(err) => controller.set_error(ErrorState::from(&err)),
                }
            }
            _ => apply_edit(controller.step(), controller.draft_mut(), &line),
        }

        controller.set_can_continue(can_continue_for(controller.step(), controller.draft()));
        render(&controller);
    }

    Ok(None)
}
