//! Testing utilities for the checklist workspace
//!
//! Shared fixtures and the output-contract assertion used by every
//! crate's integration tests.

#![allow(missing_docs)]

use checklist_core::{
    effective_limit, generate_checklist, Audience, Checklist, ChecklistKind, MIN_STEPS,
};

/// Comma-separated directives; yields one step per directive
pub const SCENARIO_TEXT: &str =
    "Provide a clear description, avoid prohibited activities, expose a stable endpoint, handle errors.";

/// Marketplace submission guidelines with named artifacts and prohibitions
pub const SUBMISSION_TEXT: &str = "\
Submission guidelines:
- Provide a privacy policy and terms of service.
- Publish a demo video showing the main workflow.
- Agents must not store user credentials.
- The endpoint must be reachable over HTTPS.
- Validate all inputs and handle errors gracefully.";

/// Prose with no directive at all
pub const DESCRIPTIVE_TEXT: &str =
    "The platform is a marketplace. Listings are reviewed by a small team.";

/// Punctuation only
pub const PUNCTUATION_TEXT: &str = "... !!! ;;";

/// Every fixture text, for sweeping tests
pub const ALL_TEXTS: [&str; 4] = [SCENARIO_TEXT, SUBMISSION_TEXT, DESCRIPTIVE_TEXT, PUNCTUATION_TEXT];

/// Generate with the default engine, panicking on engine defects
pub fn generate(text: &str, context: Option<&str>, max_steps: Option<i64>) -> Checklist {
    generate_checklist(text, context, max_steps, Audience::Agent)
        .unwrap_or_else(|e| panic!("engine failed on {text:?}: {e}"))
}

/// Titles in order
pub fn titles(checklist: &Checklist) -> Vec<&str> {
    checklist.steps.iter().map(|s| s.title.as_str()).collect()
}

/// Assert every output-contract invariant on a generated checklist
pub fn assert_checklist_invariants(checklist: &Checklist, max_steps: Option<i64>) {
    let limit = effective_limit(max_steps);
    let count = checklist.steps.len();

    assert_eq!(checklist.kind, ChecklistKind::Checklist);
    assert_eq!(checklist.audience, Audience::Agent);
    assert!(
        (usize::from(MIN_STEPS)..=limit).contains(&count),
        "step count {count} outside [{MIN_STEPS}, {limit}]"
    );

    for (i, step) in checklist.steps.iter().enumerate() {
        assert_eq!(step.id, (i + 1).to_string(), "non-sequential id");
        assert!(!step.title.trim().is_empty(), "empty title in step {}", step.id);
        assert!(!step.action.trim().is_empty(), "empty action in step {}", step.id);
        assert!(!step.verify.trim().is_empty(), "empty verify in step {}", step.id);
        assert!(
            step.title.split_whitespace().count() <= 8,
            "title over budget: {:?}",
            step.title
        );
    }

    let summary = &checklist.human_summary;
    assert!(summary.ends_with('.'), "summary not a sentence: {summary:?}");
    assert!(!summary.contains(". "), "summary has several sentences: {summary:?}");
    assert!(!summary.contains('\n'));
}
