//! CLI runners driven end to end through files and buffers

use checklist_cli::{load_config, run_call, run_generate, run_serve, GenerateArgs, Outcome};
use checklist_core::{Checklist, ChecklistEngine};
use checklist_service::ChecklistService;
use checklist_test_utils::{assert_checklist_invariants, SCENARIO_TEXT, SUBMISSION_TEXT};
use pretty_assertions::assert_eq;
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn config_file_changes_default_bound() {
    let file = temp_file("default_max_steps = 3\n");
    let config = load_config(Some(file.path())).unwrap();
    let service = ChecklistService::with_engine(ChecklistEngine::with_config(config).unwrap());

    let args = GenerateArgs {
        text: Some(SCENARIO_TEXT),
        ..GenerateArgs::default()
    };
    let mut out = Vec::new();
    run_generate(&service, &args, &mut std::io::empty(), &mut out).unwrap();

    let checklist: Checklist = serde_json::from_slice(&out).unwrap();
    assert_eq!(checklist.steps.len(), 3);
}

#[test]
fn missing_config_file_is_an_error() {
    let err = load_config(Some(std::path::Path::new("/nonexistent/checklist.toml"))).unwrap_err();
    assert!(err.to_string().contains("failed to read config"));
}

#[test]
fn generate_reads_text_file() {
    let file = temp_file(SUBMISSION_TEXT);
    let args = GenerateArgs {
        file: Some(file.path()),
        max_steps: Some(4),
        pretty: true,
        ..GenerateArgs::default()
    };
    let mut out = Vec::new();
    let outcome = run_generate(&ChecklistService::new(), &args, &mut std::io::empty(), &mut out).unwrap();
    assert_eq!(outcome, Outcome::Success);

    let checklist: Checklist = serde_json::from_slice(&out).unwrap();
    assert_checklist_invariants(&checklist, Some(4));
    assert_eq!(checklist.steps.len(), 4);
}

#[test]
fn call_reads_envelope_file() {
    let file = temp_file(r#"{"tool":"generate_checklist","input":{"text":"Handle errors","context":"svc"}}"#);
    let mut out = Vec::new();
    let outcome = run_call(&ChecklistService::new(), Some(file.path()), &mut std::io::empty(), &mut out).unwrap();
    assert_eq!(outcome, Outcome::Success);

    let checklist: Checklist = serde_json::from_slice(&out).unwrap();
    assert_eq!(checklist.context.as_deref(), Some("svc"));
    assert_eq!(checklist.steps[0].title, "Handle errors");
}

#[test]
fn call_with_bad_audience_is_rejected() {
    let mut stdin = Cursor::new(r#"{"tool":"generate_checklist","input":{"text":"x","audience":"human"}}"#);
    let mut out = Vec::new();
    let outcome = run_call(&ChecklistService::new(), None, &mut stdin, &mut out).unwrap();
    assert_eq!(outcome, Outcome::Rejected);

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["error"]["status"], 400);
}

#[test]
fn serve_is_deterministic_across_runs() {
    let requests = format!(
        "{}\n{}\n",
        serde_json::json!({ "tool": "generate_checklist", "input": { "text": SCENARIO_TEXT } }),
        serde_json::json!({ "tool": "generate_checklist", "input": { "text": SUBMISSION_TEXT, "max_steps": 12 } }),
    );

    let service = ChecklistService::new();
    let mut first = Vec::new();
    let mut second = Vec::new();
    run_serve(&service, Cursor::new(requests.clone()), &mut first).unwrap();
    run_serve(&service, Cursor::new(requests), &mut second).unwrap();

    assert_eq!(String::from_utf8(first).unwrap(), String::from_utf8(second).unwrap());
}
