//! Assembler / validator
//!
//! Assigns sequential string ids, builds the final [`Checklist`] and checks
//! every output invariant before it leaves the engine.

use crate::config::{EngineConfig, MIN_STEPS};
use crate::error::InvariantViolation;
use crate::types::{Audience, Checklist, ChecklistKind, DraftStep, Step};

/// Build the checklist from bounded drafts
pub fn assemble(
    drafts: Vec<DraftStep>,
    context: Option<&str>,
    human_summary: String,
) -> Checklist {
    let steps = drafts
        .into_iter()
        .enumerate()
        .map(|(i, draft)| Step {
            id: (i + 1).to_string(),
            title: draft.title,
            action: draft.action,
            verify: draft.verify,
            artifacts: draft.artifacts,
        })
        .collect();

    Checklist {
        kind: ChecklistKind::Checklist,
        audience: Audience::Agent,
        context: context.map(str::to_string),
        steps,
        human_summary,
    }
}

/// Check the output contract
///
/// # Errors
///
/// Returns the first violated invariant.
pub fn validate(
    checklist: &Checklist,
    context: Option<&str>,
    limit: usize,
    config: &EngineConfig,
) -> Result<(), InvariantViolation> {
    let min = usize::from(MIN_STEPS);
    let count = checklist.steps.len();
    if count < min || count > limit {
        return Err(InvariantViolation::StepCount {
            count,
            min,
            max: limit,
        });
    }

    for (position, step) in checklist.steps.iter().enumerate() {
        if step.id != (position + 1).to_string() {
            return Err(InvariantViolation::NonSequentialId {
                position,
                found: step.id.clone(),
            });
        }

        for (field, value) in [
            ("title", &step.title),
            ("action", &step.action),
            ("verify", &step.verify),
        ] {
            if value.trim().is_empty() {
                return Err(InvariantViolation::EmptyField {
                    step_id: step.id.clone(),
                    field,
                });
            }
        }

        let tokens = step.title.split_whitespace().count();
        if tokens > config.title_token_budget {
            return Err(InvariantViolation::TitleOverBudget {
                step_id: step.id.clone(),
                tokens,
                budget: config.title_token_budget,
            });
        }
    }

    if checklist.context.as_deref() != context {
        return Err(InvariantViolation::ContextMismatch);
    }

    if !is_single_sentence(&checklist.human_summary) {
        return Err(InvariantViolation::MalformedSummary(
            checklist.human_summary.clone(),
        ));
    }

    Ok(())
}

fn is_single_sentence(text: &str) -> bool {
    !text.trim().is_empty()
        && text.ends_with('.')
        && !text.contains('\n')
        && !["! ", "? ", ". "].iter().any(|sep| text.contains(sep))
}
