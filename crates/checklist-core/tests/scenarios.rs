//! End-to-end scenarios for the checklist engine

use checklist_core::{ChecklistEngine, ChecklistRequest, EngineConfig};
use checklist_test_utils::{
    assert_checklist_invariants, generate, titles, DESCRIPTIVE_TEXT, PUNCTUATION_TEXT,
    SCENARIO_TEXT, SUBMISSION_TEXT,
};
use pretty_assertions::assert_eq;
use std::collections::HashSet;

#[test]
fn comma_separated_directives() {
    let checklist = generate(SCENARIO_TEXT, None, None);
    assert_checklist_invariants(&checklist, None);

    assert_eq!(
        titles(&checklist),
        vec![
            "Provide a clear description",
            "Avoid prohibited activities",
            "Expose a stable endpoint",
            "Handle errors",
        ]
    );
    assert_eq!(checklist.steps[0].artifacts, vec!["clear description"]);
    assert_eq!(checklist.steps[2].artifacts, vec!["stable endpoint"]);
    assert!(checklist.context.is_none());

    let verifies: HashSet<_> = checklist.steps.iter().map(|s| s.verify.as_str()).collect();
    assert_eq!(verifies.len(), 4, "each category has its own verify text");
}

#[test]
fn clamped_bound_keeps_leading_steps() {
    let full = generate(SCENARIO_TEXT, None, None);
    let clamped = generate(SCENARIO_TEXT, None, Some(2));
    assert_checklist_invariants(&clamped, Some(2));

    assert_eq!(clamped.steps.len(), 3);
    assert_eq!(&clamped.steps[..], &full.steps[..3]);
    assert_eq!(
        clamped.human_summary,
        "Execute 3 checklist steps derived from the source text, centered on clear description."
    );
}

#[test]
fn upper_bound_is_twelve() {
    let text: String = (0..15).map(|i| format!("Deploy service{i}. ")).collect();
    let checklist = generate(&text, None, Some(40));
    assert_checklist_invariants(&checklist, Some(40));
    assert_eq!(checklist.steps.len(), 12);
    assert_eq!(checklist.steps[11].title, "Deploy service11");
}

#[test]
fn submission_guidelines() {
    let checklist = generate(SUBMISSION_TEXT, Some("marketplace listing"), None);
    assert_checklist_invariants(&checklist, None);

    let titles = titles(&checklist);
    assert_eq!(titles.len(), 5);
    assert_eq!(titles[0], "Provide a privacy policy and terms");
    assert_eq!(titles[2], "Do not store user credentials");
    assert_eq!(titles[3], "Validate all inputs");
    assert_eq!(titles[4], "Handle errors gracefully");

    assert_eq!(
        checklist.steps[0].artifacts,
        vec!["privacy policy URL", "terms of service URL"]
    );
    assert_eq!(checklist.steps[1].artifacts, vec!["demo video URL"]);
    assert!(checklist.steps[2].verify.contains("does not occur"));
    assert_eq!(checklist.context.as_deref(), Some("marketplace listing"));
    assert_eq!(
        checklist.human_summary,
        "Execute 5 checklist steps derived from the source text, centered on privacy policy."
    );
}

#[test]
fn descriptive_prose_falls_back() {
    let checklist = generate(DESCRIPTIVE_TEXT, None, None);
    assert_checklist_invariants(&checklist, None);
    assert_eq!(
        titles(&checklist),
        vec![
            "Clarify ambiguous requirement",
            "Confirm scope with source text",
            "Document assumptions made",
        ]
    );
    assert_eq!(
        checklist.human_summary,
        "The source text contained no clearly actionable instructions, so 3 generic clarification steps were produced."
    );
}

#[test]
fn punctuation_only_falls_back() {
    let checklist = generate(PUNCTUATION_TEXT, None, Some(12));
    assert_checklist_invariants(&checklist, Some(12));
    assert_eq!(checklist.steps.len(), 3);
}

#[test]
fn single_directive_is_padded() {
    let checklist = generate("Rotate the signing keys.", None, None);
    assert_checklist_invariants(&checklist, None);
    assert_eq!(
        titles(&checklist),
        vec![
            "Rotate the signing keys",
            "Clarify ambiguous requirement",
            "Confirm scope with source text",
        ]
    );
    assert!(checklist.human_summary.contains("signing keys"));
}

#[test]
fn context_is_echoed_verbatim() {
    let context = "  Release 4.2\n(hotfix)  ";
    let checklist = generate(SCENARIO_TEXT, Some(context), None);
    assert_eq!(checklist.context.as_deref(), Some(context));
}

#[test]
fn duplicates_collapse_into_first() {
    let checklist = generate(
        "Log all errors. Deploy the service. Log the errors to the audit trail.",
        None,
        None,
    );
    assert_checklist_invariants(&checklist, None);
    assert_eq!(checklist.steps[0].title, "Log all errors");
    assert_eq!(checklist.steps[1].title, "Deploy the service");
}

#[test]
fn output_is_deterministic() {
    let engine = ChecklistEngine::with_config(EngineConfig::default()).unwrap();
    let request = ChecklistRequest::new(SUBMISSION_TEXT).with_max_steps(6);

    let first = serde_json::to_string(&engine.generate(&request).unwrap()).unwrap();
    for _ in 0..5 {
        let again = serde_json::to_string(&engine.generate(&request).unwrap()).unwrap();
        assert_eq!(first, again);
    }
}

#[test]
fn lead_ins_and_abbreviations_keep_the_instruction() {
    let checklist = generate(
        "Make sure you document the release process or the rollback plan",
        None,
        None,
    );
    assert_checklist_invariants(&checklist, None);
    assert_eq!(checklist.steps[0].title, "Document the release process");
    assert_eq!(
        checklist.steps[0].action,
        "Document the release process or the rollback plan."
    );

    let checklist = generate("Use e.g. the staging cluster.", None, None);
    assert_checklist_invariants(&checklist, None);
    assert_eq!(checklist.steps[0].title, "Use e.g. the staging cluster");
}

#[test]
fn complement_clause_titles_are_clean() {
    let checklist = generate("Ensure that logs are retained for 90 days and reviewed.", None, None);
    assert_checklist_invariants(&checklist, None);
    assert_eq!(checklist.steps[0].title, "Ensure logs are retained");
    assert_eq!(
        checklist.steps[0].verify,
        "Confirm the check was run and its outcome is recorded."
    );
}
