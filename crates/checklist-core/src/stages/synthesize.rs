//! Step synthesizer
//!
//! Maps each actionable clause into a draft step:
//! - `title`: capitalized verb phrase within the title token budget
//! - `action`: the clause restated from its verb onward
//! - `verify`: the category's verify template
//! - `artifacts`: artifact-noun phrases found in the clause

use crate::config::EngineConfig;
use crate::lexicon::{
    is_adverb, is_artifact_noun, is_dangling, is_stop_word, lookup_verb, normalize_token,
    verify_for, COMPLEMENTIZERS, COPULAS, MODALS, NAMED_ARTIFACTS, NEGATED_MODALS, NEGATIONS,
};
use crate::stages::classify::rewrite_connective;
use crate::stages::rank::merge_artifacts;
use crate::types::{ClassifiedClause, DraftStep, StepOrigin, VerbPhrase};

/// Modifiers kept in front of an artifact noun
const MAX_ARTIFACT_MODIFIERS: usize = 2;

/// Bracket and quote pairs kept balanced at a rendered edge
const PAIRS: [(char, char); 3] = [('(', ')'), ('[', ']'), ('\u{201C}', '\u{201D}')];

/// Closing marks kept when trimming the end of a rendered text
const CLOSERS: [char; 5] = [')', ']', '"', '\u{201D}', '\u{2019}'];

/// Synthesize draft steps for actionable clauses, in clause order
#[must_use]
pub fn synthesize(classified: &[ClassifiedClause], config: &EngineConfig) -> Vec<DraftStep> {
    let drafts: Vec<DraftStep> = classified
        .iter()
        .filter_map(|c| c.verb_phrase().map(|phrase| draft_step(c, phrase, config)))
        .collect();

    tracing::debug!("Synthesized {} draft steps", drafts.len());
    drafts
}

fn draft_step(clause: &ClassifiedClause, phrase: &VerbPhrase, config: &EngineConfig) -> DraftStep {
    let object = phrase_object(phrase);
    DraftStep {
        position: clause.clause.index,
        origin: StepOrigin::Extracted(phrase.category),
        title: render_title(phrase, config.title_token_budget),
        action: render_action(&clause.clause.tokens, phrase),
        verify: verify_for(phrase.category, object.as_deref()),
        artifacts: extract_artifacts(&clause.clause.tokens, Some(phrase.verb_index)),
    }
}

/// Capitalized verb phrase truncated to `budget` tokens
#[must_use]
pub fn render_title(phrase: &VerbPhrase, budget: usize) -> String {
    let prefix: &[&str] = if phrase.negated { &["Do", "not"] } else { &[] };
    let words: Vec<&str> = prefix
        .iter()
        .copied()
        .chain(phrase.tokens.iter().map(String::as_str))
        .collect();
    truncate_title(&words, budget)
}

/// Join at most `budget` words into a capitalized title
#[must_use]
pub fn truncate_title(words: &[&str], budget: usize) -> String {
    let mut kept: Vec<&str> = words.iter().take(budget).copied().collect();
    while kept.len() > 1 && kept.last().is_some_and(|w| is_dangling(&normalize_token(w))) {
        kept.pop();
    }
    let joined = kept.join(" ");
    capitalize(&trim_edges(&joined))
}

/// Clause restated in imperative form starting at the verb
#[must_use]
pub fn render_action(tokens: &[String], phrase: &VerbPhrase) -> String {
    let mut words: Vec<String> = Vec::new();
    if phrase.negated {
        words.push("Do".to_string());
        words.push("not".to_string());
    }
    words.extend(
        tokens
            .iter()
            .skip(phrase.verb_index)
            .map(|t| rewrite_connective(t)),
    );

    format!("{}.", capitalize(&trim_edges(&words.join(" "))))
}

/// Trim punctuation off both edges, keeping closing quotes and brackets
/// and balancing any pair the cut left open or closed.
fn trim_edges(text: &str) -> String {
    let mut trimmed = text
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .trim_end_matches(|c: char| !c.is_alphanumeric() && !CLOSERS.contains(&c))
        .to_string();

    for (open, close) in PAIRS {
        let opens = trimmed.matches(open).count();
        let closes = trimmed.matches(close).count();
        if opens > closes {
            trimmed.push(close);
        } else if closes > opens && trimmed.ends_with(close) {
            trimmed.pop();
        }
    }
    if trimmed.matches('"').count() % 2 == 1 {
        if trimmed.ends_with('"') {
            trimmed.pop();
        } else {
            trimmed.push('"');
        }
    }
    trimmed
}

/// Object span of the verb phrase, when it reads as a noun phrase
///
/// Trailing manner adverbs are dropped ("errors gracefully" -> "errors").
/// A clause-like remainder ("logs are retained") yields `None` so the
/// verify text falls back to its object-free form.
fn phrase_object(phrase: &VerbPhrase) -> Option<String> {
    let mut object: Vec<&str> = phrase.object().iter().map(String::as_str).collect();
    while object
        .last()
        .is_some_and(|t| is_adverb(&normalize_token(t)) || is_dangling(&normalize_token(t)))
    {
        object.pop();
    }

    let clause_like = object.iter().any(|t| {
        let word = normalize_token(t);
        COPULAS.contains(&word.as_str())
            || MODALS.contains(&word.as_str())
            || NEGATED_MODALS.contains(&word.as_str())
            || COMPLEMENTIZERS.contains(&word.as_str())
    });
    if clause_like {
        return None;
    }

    let object = object.join(" ");
    let trimmed = object.trim_matches(|c: char| !c.is_alphanumeric());
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Artifact-noun phrases in token order, de-duplicated
///
/// `skip` is the verb position, so "Test the build" does not report "Test"
/// as an artifact.
#[must_use]
pub fn extract_artifacts(tokens: &[String], skip: Option<usize>) -> Vec<String> {
    let words: Vec<String> = tokens.iter().map(|t| normalize_token(t)).collect();
    let mut covered = vec![false; words.len()];
    let mut found: Vec<(usize, String)> = Vec::new();

    for (phrase, name) in NAMED_ARTIFACTS {
        let len = phrase.len();
        if len > words.len() {
            continue;
        }
        for start in 0..=words.len() - len {
            let matches = words[start..start + len]
                .iter()
                .zip(phrase.iter())
                .all(|(w, p)| w == p);
            if matches && !covered[start..start + len].contains(&true) {
                covered[start..start + len].iter_mut().for_each(|c| *c = true);
                found.push((start, (*name).to_string()));
            }
        }
    }

    let usable = |i: usize, covered: &[bool]| !covered[i] && Some(i) != skip;

    for i in 0..words.len() {
        if !usable(i, &covered) || !is_artifact_noun(&words[i]) {
            continue;
        }
        // compound nouns ("API endpoint") are reported once, by their head
        let next_is_noun = i + 1 < words.len()
            && usable(i + 1, &covered)
            && is_artifact_noun(&words[i + 1])
            && !tokens[i].ends_with(',');
        if next_is_noun {
            continue;
        }

        let mut start = i;
        while start > 0 && i - start < MAX_ARTIFACT_MODIFIERS {
            let prev = start - 1;
            if !usable(prev, &covered)
                || !is_modifier(&words[prev])
                || tokens[prev].ends_with([',', ';', ':'])
            {
                break;
            }
            start = prev;
        }

        let phrase = tokens[start..=i]
            .iter()
            .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()))
            .collect::<Vec<_>>()
            .join(" ");
        found.push((start, phrase));
    }

    found.sort_by_key(|(start, _)| *start);
    let mut artifacts = Vec::new();
    merge_artifacts(&mut artifacts, found.into_iter().map(|(_, phrase)| phrase));
    artifacts
}

fn is_modifier(word: &str) -> bool {
    !word.is_empty()
        && word.chars().all(|c| c.is_alphanumeric() || c == '-')
        && word.chars().any(char::is_alphabetic)
        && !is_stop_word(word)
        && lookup_verb(word).is_none()
        && !MODALS.contains(&word)
        && !NEGATIONS.contains(&word)
}

/// Uppercase the first character
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
