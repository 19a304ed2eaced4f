//! Subcommand runners
//!
//! Runners take their reader and writer as parameters so they can be
//! driven from tests without touching the process's stdio.

use anyhow::{Context, Result};
use checklist_service::{health, manifest, respond, ChecklistService, ToolInput};
use serde_json::Value;
use std::io::{BufRead, Read, Write};
use std::path::Path;

/// Process exit status for a handled request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A checklist was written
    Success,
    /// An error response was written
    Rejected,
}

impl Outcome {
    /// Exit code for the process
    #[inline]
    #[must_use]
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Rejected => 1,
        }
    }

    fn of(response: &Value) -> Self {
        if response.get("error").is_some() {
            Self::Rejected
        } else {
            Self::Success
        }
    }
}

/// Options for `generate`
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs<'a> {
    /// Inline text
    pub text: Option<&'a str>,
    /// Text file
    pub file: Option<&'a Path>,
    /// Context echoed in the output
    pub context: Option<&'a str>,
    /// Requested step bound
    pub max_steps: Option<i64>,
    /// Pretty-print output
    pub pretty: bool,
}

/// Serve summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServeStats {
    /// Non-blank lines handled
    pub handled: usize,
    /// Lines answered with an error response
    pub rejected: usize,
}

/// `generate`: one checklist from text
pub fn run_generate(
    service: &ChecklistService,
    args: &GenerateArgs<'_>,
    stdin: &mut impl Read,
    out: &mut impl Write,
) -> Result<Outcome> {
    let text = match (args.text, args.file) {
        (Some(text), _) => text.to_string(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, None) => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf).context("failed to read stdin")?;
            buf
        }
    };

    let mut input = ToolInput::new(text);
    input.context = args.context.map(str::to_string);
    input.max_steps = args.max_steps;

    let response = respond(service.handle_input(input));
    write_json(out, &response, args.pretty)?;
    Ok(Outcome::of(&response))
}

/// `call`: one tool-call envelope
pub fn run_call(
    service: &ChecklistService,
    file: Option<&Path>,
    stdin: &mut impl Read,
    out: &mut impl Write,
) -> Result<Outcome> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf).context("failed to read stdin")?;
            buf
        }
    };

    let response = service.handle_line(raw.trim());
    write_json(out, &response, false)?;
    Ok(Outcome::of(&response))
}

/// `serve`: JSON-lines loop until end of input
///
/// Blank lines are skipped. Every other line gets exactly one response
/// line, in order.
pub fn run_serve(
    service: &ChecklistService,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<ServeStats> {
    let mut stats = ServeStats::default();

    for line in input.lines() {
        let line = line.context("failed to read request line")?;
        if line.trim().is_empty() {
            continue;
        }

        let response = service.handle_line(&line);
        stats.handled += 1;
        if Outcome::of(&response) == Outcome::Rejected {
            stats.rejected += 1;
        }

        write_json(out, &response, false)?;
        out.flush().context("failed to flush response")?;
    }

    tracing::info!("Served {} requests ({} rejected)", stats.handled, stats.rejected);
    Ok(stats)
}

/// `manifest`
pub fn run_manifest(out: &mut impl Write) -> Result<()> {
    write_json(out, &manifest(), true)
}

/// `health`
pub fn run_health(out: &mut impl Write) -> Result<()> {
    let report = serde_json::to_value(health()).context("failed to serialize health")?;
    write_json(out, &report, false)
}

fn write_json(out: &mut impl Write, value: &Value, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        value.to_string()
    };
    writeln!(out, "{rendered}").context("failed to write output")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn generate_from_inline_text() {
        let service = ChecklistService::new();
        let args = GenerateArgs {
            text: Some("Log errors. Rotate keys."),
            context: Some("ops"),
            ..GenerateArgs::default()
        };
        let mut out = Vec::new();
        let outcome = run_generate(&service, &args, &mut std::io::empty(), &mut out).unwrap();
        assert_eq!(outcome, Outcome::Success);

        let value: Value = serde_json::from_str(&output(out)).unwrap();
        assert_eq!(value["context"], "ops");
        assert_eq!(value["steps"][1]["title"], "Rotate keys");
    }

    #[test]
    fn generate_from_stdin() {
        let service = ChecklistService::new();
        let mut stdin = Cursor::new("Validate inputs");
        let mut out = Vec::new();
        run_generate(&service, &GenerateArgs::default(), &mut stdin, &mut out).unwrap();
        assert!(output(out).contains("\"Validate inputs\""));
    }

    #[test]
    fn blank_text_is_rejected() {
        let service = ChecklistService::new();
        let mut out = Vec::new();
        let outcome =
            run_generate(&service, &GenerateArgs::default(), &mut Cursor::new("  "), &mut out).unwrap();
        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(outcome.exit_code(), 1);
        assert!(output(out).contains("text must not be empty"));
    }

    #[test]
    fn serve_answers_each_line() {
        let service = ChecklistService::new();
        let input = Cursor::new(
            "{\"tool\":\"generate_checklist\",\"input\":{\"text\":\"Log errors\"}}\n\n{\"tool\":\"nope\",\"input\":{}}\n",
        );
        let mut out = Vec::new();
        let stats = run_serve(&service, input, &mut out).unwrap();
        assert_eq!(stats, ServeStats { handled: 2, rejected: 1 });

        let text = output(out);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"type\":\"checklist\""));
        assert!(lines[1].contains("unknown tool"));
    }

    #[test]
    fn health_is_one_line() {
        let mut out = Vec::new();
        run_health(&mut out).unwrap();
        let text = output(out);
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("\"status\":\"ok\""));
    }
}
