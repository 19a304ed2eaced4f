//! Summary generator
//!
//! Produces the single-sentence `human_summary` from a template and the
//! dominant noun phrase across extracted step actions.

use crate::lexicon::{is_adverb, is_stop_word, lookup_verb, normalize_token, MODALS, NEGATIONS};
use crate::types::DraftStep;
use indexmap::IndexMap;

/// Longest noun phrase quoted in a summary
const MAX_PHRASE_TOKENS: usize = 4;

/// Phrase used when extracted steps carry no noun phrase at all
const GENERIC_PHRASE: &str = "the stated actions";

/// Render the one-sentence summary for the final steps
#[must_use]
pub fn summarize(steps: &[DraftStep]) -> String {
    let count = steps.len();
    let extracted: Vec<&DraftStep> = steps.iter().filter(|s| s.is_extracted()).collect();

    if extracted.is_empty() {
        return format!(
            "The source text contained no clearly actionable instructions, so {count} generic clarification steps were produced."
        );
    }

    let phrase = dominant_phrase(extracted.iter().map(|s| s.action.as_str()))
        .unwrap_or_else(|| GENERIC_PHRASE.to_string());
    format!("Execute {count} checklist steps derived from the source text, centered on {phrase}.")
}

/// Most frequent noun phrase, grouped by head noun; earliest wins ties
#[must_use]
pub fn dominant_phrase<'a>(actions: impl IntoIterator<Item = &'a str>) -> Option<String> {
    // head noun -> (first phrase seen, occurrences)
    let mut heads: IndexMap<String, (String, usize)> = IndexMap::new();

    for action in actions {
        for run in noun_runs(action) {
            let Some(last) = run.last() else {
                continue;
            };
            let head = singular(&normalize_token(last));
            let entry = heads.entry(head).or_insert_with(|| (run.join(" "), 0));
            entry.1 += 1;
        }
    }

    let mut best: Option<&(String, usize)> = None;
    for candidate in heads.values() {
        if best.map_or(true, |(_, top)| candidate.1 > *top) {
            best = Some(candidate);
        }
    }
    best.map(|(phrase, _)| phrase.clone())
}

/// Maximal runs of content tokens in an action sentence
fn noun_runs(action: &str) -> Vec<Vec<String>> {
    let mut runs = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for (i, token) in action.split_whitespace().enumerate() {
        let word = normalize_token(token);
        if !is_content_word(&word) {
            close_run(&mut runs, &mut current);
            continue;
        }

        let cleaned = token.trim_matches(|c: char| !c.is_alphanumeric());
        current.push(if i == 0 { decapitalize(cleaned) } else { cleaned.to_string() });

        if token.ends_with(|c: char| !c.is_alphanumeric() && c != ')') {
            close_run(&mut runs, &mut current);
        }
    }
    close_run(&mut runs, &mut current);

    runs
}

fn close_run(runs: &mut Vec<Vec<String>>, current: &mut Vec<String>) {
    if current.is_empty() {
        return;
    }
    let mut run = std::mem::take(current);
    if run.len() > MAX_PHRASE_TOKENS {
        run.drain(..run.len() - MAX_PHRASE_TOKENS);
    }
    runs.push(run);
}

fn is_content_word(word: &str) -> bool {
    word.chars().any(char::is_alphabetic)
        && !is_stop_word(word)
        && !is_adverb(word)
        && lookup_verb(word).is_none()
        && !MODALS.contains(&word)
        && !NEGATIONS.contains(&word)
}

fn singular(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        return format!("{stem}y");
    }
    match word.strip_suffix('s') {
        Some(stem) if !stem.ends_with('s') && !stem.is_empty() => stem.to_string(),
        _ => word.to_string(),
    }
}

/// Undo sentence-initial capitalization unless the token is an acronym
fn decapitalize(token: &str) -> String {
    if token.chars().filter(|c| c.is_alphabetic()).all(char::is_uppercase) {
        return token.to_string();
    }
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
