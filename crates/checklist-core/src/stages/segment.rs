//! Segmenter
//!
//! Splits raw text into ordered clause spans. Breaks happen on line
//! boundaries (after stripping bullet and numbered-list markers), on
//! sentence terminators followed by whitespace, and before a directive
//! verb introduced by a comma, colon or coordinating conjunction.

use crate::lexicon::{lookup_verb, normalize_token, ABBREVIATIONS, CONJUNCTIONS, OBJECT_LEADS};
use crate::types::Clause;
use once_cell::sync::Lazy;
use regex::Regex;

const SENTENCE_TERMINATORS: [char; 4] = ['.', '!', '?', ';'];

static LIST_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[-*•+>]+|#{1,6}|\(?\d{1,3}[.)]|\(?[A-Za-z]\))\s+")
        .expect("list marker pattern is valid")
});

/// Segment text into clauses
///
/// Never returns an empty vector: when nothing survives splitting, the
/// whole trimmed input becomes a single clause.
#[must_use]
pub fn segment(text: &str) -> Vec<Clause> {
    let mut clauses: Vec<Clause> = Vec::new();

    for line in text.lines() {
        let line = strip_list_marker(line.trim());
        for sentence in split_sentences(line) {
            for tokens in split_directives(sentence) {
                clauses.push(Clause::new(clauses.len(), tokens));
            }
        }
    }

    if clauses.is_empty() {
        let tokens = text.split_whitespace().map(str::to_string).collect();
        clauses.push(Clause::new(0, tokens));
    }

    tracing::debug!("Segmented input into {} clauses", clauses.len());
    clauses
}

/// Remove a leading bullet, heading or numbered-list marker
fn strip_list_marker(line: &str) -> &str {
    match LIST_MARKER.find(line) {
        Some(marker) => &line[marker.end()..],
        None => line,
    }
}

fn is_span_edge(c: char) -> bool {
    c.is_whitespace() || SENTENCE_TERMINATORS.contains(&c) || matches!(c, ',' | ':')
}

/// Split a line on terminators that end a sentence
fn split_sentences(line: &str) -> Vec<&str> {
    let mut spans = Vec::new();
    let mut start = 0;
    let mut chars = line.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !SENTENCE_TERMINATORS.contains(&c) {
            continue;
        }
        let at_boundary = chars.peek().map_or(true, |(_, next)| next.is_whitespace());
        if at_boundary && !(c == '.' && ends_with_abbreviation(&line[start..idx])) {
            let end = idx + c.len_utf8();
            push_span(&mut spans, &line[start..end]);
            start = end;
        }
    }
    push_span(&mut spans, &line[start..]);

    spans
}

/// "Use e.g. the staging cluster": the dot closes "e.g", not the sentence
fn ends_with_abbreviation(span: &str) -> bool {
    span.split_whitespace()
        .next_back()
        .is_some_and(|word| ABBREVIATIONS.contains(&normalize_token(word).as_str()))
}

fn push_span<'a>(spans: &mut Vec<&'a str>, span: &'a str) {
    let trimmed = span.trim_matches(is_span_edge);
    if !trimmed.is_empty() {
        spans.push(trimmed);
    }
}

/// Split a sentence before each directive introduced by a list delimiter
fn split_directives(sentence: &str) -> Vec<Vec<String>> {
    let tokens: Vec<&str> = sentence.split_whitespace().collect();
    let mut parts = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        if i > 0 && follows_delimiter(&tokens, i) && starts_directive(&tokens, i) {
            while current
                .last()
                .is_some_and(|t| CONJUNCTIONS.contains(&normalize_token(t).as_str()))
            {
                current.pop();
            }
            push_part(&mut parts, std::mem::take(&mut current));
        }
        current.push((*token).to_string());
    }
    push_part(&mut parts, current);

    parts
}

fn push_part(parts: &mut Vec<Vec<String>>, mut tokens: Vec<String>) {
    if let Some(last) = tokens.last_mut() {
        let trimmed = last.trim_end_matches(is_span_edge).to_string();
        *last = trimmed;
    }
    tokens.retain(|t| !t.is_empty());
    if !tokens.is_empty() {
        parts.push(tokens);
    }
}

/// Previous token is a comma/colon-terminated word or a conjunction
fn follows_delimiter(tokens: &[&str], i: usize) -> bool {
    let prev = tokens[i - 1];
    prev.ends_with(',')
        || prev.ends_with(':')
        || CONJUNCTIONS.contains(&normalize_token(prev).as_str())
}

/// Token at `i` opens an imperative directive
fn starts_directive(tokens: &[&str], i: usize) -> bool {
    let word = normalize_token(tokens[i]);
    let next = tokens.get(i + 1).map(|t| normalize_token(t));

    match word.as_str() {
        "never" | "don't" => return next.is_some(),
        "do" => return next.as_deref() == Some("not"),
        _ => {}
    }

    match lookup_verb(&word) {
        Some(entry) if entry.noun_ambiguous => next
            .as_deref()
            .is_some_and(|n| OBJECT_LEADS.contains(&n)),
        Some(_) => true,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<String> {
        segment(text).iter().map(Clause::text).collect()
    }

    #[test]
    fn splits_comma_separated_directives() {
        let clauses = texts(
            "Provide a clear description, avoid prohibited activities, expose a stable endpoint, handle errors.",
        );
        assert_eq!(
            clauses,
            vec![
                "Provide a clear description",
                "avoid prohibited activities",
                "expose a stable endpoint",
                "handle errors",
            ]
        );
    }

    #[test]
    fn splits_sentences_and_semicolons() {
        let clauses = texts("Deploy the service. Monitor latency; rotate keys! Done?");
        assert_eq!(
            clauses,
            vec!["Deploy the service", "Monitor latency", "rotate keys", "Done"]
        );
    }

    #[test]
    fn keeps_decimal_points() {
        let clauses = texts("Upgrade to version 1.2 before launch.");
        assert_eq!(clauses, vec!["Upgrade to version 1.2 before launch"]);
    }

    #[test]
    fn abbreviations_do_not_end_sentences() {
        let clauses = texts("Use e.g. the staging cluster.");
        assert_eq!(clauses, vec!["Use e.g. the staging cluster"]);

        let clauses = texts("Pick a region (cf. the runbook). Deploy it.");
        assert_eq!(clauses, vec!["Pick a region (cf. the runbook)", "Deploy it"]);
    }

    #[test]
    fn strips_list_markers() {
        let clauses = texts("- Provide docs\n2. Validate input\n(b) Log errors\n# Heading");
        assert_eq!(
            clauses,
            vec!["Provide docs", "Validate input", "Log errors", "Heading"]
        );
    }

    #[test]
    fn drops_conjunction_at_boundary() {
        let clauses = texts("Build the image and then deploy it to staging");
        assert_eq!(clauses, vec!["Build the image", "deploy it to staging"]);
    }

    #[test]
    fn ambiguous_verb_needs_object_lead() {
        let clauses = texts("Collect logs, test results and metrics");
        assert_eq!(clauses, vec!["Collect logs, test results and metrics"]);

        let clauses = texts("Build the app, test it, ship it");
        assert_eq!(clauses, vec!["Build the app", "test it, ship it"]);
    }

    #[test]
    fn negated_directive_after_comma() {
        let clauses = texts("Log errors, never expose secrets");
        assert_eq!(clauses, vec!["Log errors", "never expose secrets"]);
    }

    #[test]
    fn preserves_order_indices() {
        let clauses = segment("One. Two. Three.");
        let indices: Vec<_> = clauses.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn degenerate_input_yields_single_clause() {
        let clauses = segment("  ... !!! ;;  ");
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].text(), "... !!! ;;");

        let clauses = segment("");
        assert_eq!(clauses.len(), 1);
        assert!(clauses[0].tokens.is_empty());
    }
}
