//! Deduplicator / ranker
//!
//! - Folds evidence from descriptive clauses into the step they describe
//! - Merges drafts whose canonical titles are near-duplicates; the earlier
//!   draft wins and absorbs the later draft's artifacts
//! - Orders steps by clause position, then verb-category priority

use crate::config::EngineConfig;
use crate::lexicon::{is_stop_word, normalize_token, NEGATIONS};
use crate::stages::synthesize::extract_artifacts;
use crate::types::{ClassifiedClause, ClauseKind, DraftStep};
use indexmap::IndexMap;
use std::collections::BTreeSet;

/// Canonical form of a title for near-duplicate detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalTitle {
    negated: bool,
    tokens: BTreeSet<String>,
    raw: String,
}

impl CanonicalTitle {
    /// Lower-case, strip stop words, compare as a token set
    #[must_use]
    pub fn new(title: &str) -> Self {
        let words: Vec<String> = title
            .split_whitespace()
            .map(normalize_token)
            .filter(|w| !w.is_empty())
            .collect();
        Self {
            negated: words.iter().any(|w| NEGATIONS.contains(&w.as_str())),
            tokens: words.iter().filter(|w| !is_stop_word(w)).cloned().collect(),
            raw: words.join(" "),
        }
    }

    /// Jaccard similarity of the token sets
    ///
    /// A negated title is never similar to a non-negated one. Titles made
    /// only of stop words compare by their full lower-cased text.
    #[must_use]
    pub fn similarity(&self, other: &Self) -> f64 {
        if self.negated != other.negated {
            return 0.0;
        }
        if self.tokens.is_empty() || other.tokens.is_empty() {
            return if self.raw == other.raw { 1.0 } else { 0.0 };
        }
        let shared = self.tokens.intersection(&other.tokens).count();
        let union = self.tokens.union(&other.tokens).count();
        shared as f64 / union as f64
    }
}

/// Rank draft steps
#[must_use]
pub fn rank(
    drafts: Vec<DraftStep>,
    classified: &[ClassifiedClause],
    config: &EngineConfig,
) -> Vec<DraftStep> {
    let mut drafts = drafts;
    drafts.sort_by_key(|d| d.position);

    attach_descriptive_context(&mut drafts, classified);
    let mut ranked = deduplicate(drafts, config.similarity_threshold);
    ranked.sort_by(|a, b| {
        (a.position, a.category_priority(), &a.title).cmp(&(b.position, b.category_priority(), &b.title))
    });

    tracing::debug!("Ranked {} steps after deduplication", ranked.len());
    ranked
}

/// Merge near-duplicate drafts, keeping the earliest
#[must_use]
pub fn deduplicate(drafts: Vec<DraftStep>, threshold: f64) -> Vec<DraftStep> {
    let mut kept: Vec<(CanonicalTitle, DraftStep)> = Vec::with_capacity(drafts.len());

    for draft in drafts {
        let canonical = CanonicalTitle::new(&draft.title);
        match kept
            .iter_mut()
            .find(|(existing, _)| existing.similarity(&canonical) >= threshold)
        {
            Some((_, winner)) => {
                tracing::debug!("Merging '{}' into '{}'", draft.title, winner.title);
                merge_artifacts(&mut winner.artifacts, draft.artifacts);
            }
            None => kept.push((canonical, draft)),
        }
    }

    kept.into_iter().map(|(_, draft)| draft).collect()
}

/// Union of artifacts, order-preserving, de-duplicated ignoring case
///
/// The first spelling seen wins: "api" then "API" keeps "api".
pub fn merge_artifacts(into: &mut Vec<String>, from: impl IntoIterator<Item = String>) {
    let mut seen: IndexMap<String, String> = into
        .drain(..)
        .map(|artifact| (artifact.to_lowercase(), artifact))
        .collect();
    for artifact in from {
        seen.entry(artifact.to_lowercase()).or_insert(artifact);
    }
    into.extend(seen.into_values());
}

/// Attach artifacts mentioned by descriptive clauses to the step sharing
/// the most content words with them (earliest step on ties).
fn attach_descriptive_context(drafts: &mut [DraftStep], classified: &[ClassifiedClause]) {
    let targets: Vec<BTreeSet<String>> = drafts.iter().map(|d| content_words(&d.action)).collect();

    for clause in classified
        .iter()
        .filter(|c| matches!(c.kind, ClauseKind::Descriptive))
    {
        let artifacts = extract_artifacts(&clause.clause.tokens, None);
        if artifacts.is_empty() {
            continue;
        }

        let words = content_words(&clause.clause.text());
        let mut best: Option<(usize, usize)> = None;
        for (idx, target) in targets.iter().enumerate() {
            let overlap = target.intersection(&words).count();
            if overlap > 0 && best.map_or(true, |(_, top)| overlap > top) {
                best = Some((idx, overlap));
            }
        }

        if let Some((idx, _)) = best {
            merge_artifacts(&mut drafts[idx].artifacts, artifacts);
        }
    }
}

fn content_words(text: &str) -> BTreeSet<String> {
    text.split_whitespace()
        .map(normalize_token)
        .filter(|w| w.chars().any(char::is_alphabetic) && !is_stop_word(w))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stages::classify::classify;
    use crate::stages::segment::segment;
    use crate::stages::synthesize::synthesize;
    use crate::types::{StepOrigin, VerbCategory};

    fn draft(position: usize, title: &str, artifacts: &[&str]) -> DraftStep {
        DraftStep {
            position,
            origin: StepOrigin::Extracted(VerbCategory::General),
            title: title.to_string(),
            action: format!("{title}."),
            verify: "Confirm it.".to_string(),
            artifacts: artifacts.iter().map(|a| (*a).to_string()).collect(),
        }
    }

    fn run(text: &str) -> Vec<DraftStep> {
        let config = EngineConfig::default();
        let classified = classify(segment(text), &config);
        let drafts = synthesize(&classified, &config);
        rank(drafts, &classified, &config)
    }

    #[test]
    fn similarity_ignores_stop_words() {
        let a = CanonicalTitle::new("Log all errors");
        let b = CanonicalTitle::new("log the errors");
        assert!((a.similarity(&b) - 1.0).abs() < f64::EPSILON);

        let c = CanonicalTitle::new("Expose a stable endpoint");
        assert!(a.similarity(&c) < 0.6);
    }

    #[test]
    fn negation_never_matches() {
        let a = CanonicalTitle::new("Do not share data");
        let b = CanonicalTitle::new("Share data");
        assert!(a.similarity(&b).abs() < f64::EPSILON);
    }

    #[test]
    fn later_duplicate_is_absorbed() {
        let merged = deduplicate(
            vec![
                draft(0, "Provide documentation", &["documentation"]),
                draft(1, "Handle errors", &[]),
                draft(2, "Provide API documentation", &["API documentation", "documentation"]),
            ],
            0.6,
        );
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].title, "Provide documentation");
        assert_eq!(merged[0].artifacts, vec!["documentation", "API documentation"]);
        assert_eq!(merged[1].title, "Handle errors");
    }

    #[test]
    fn merged_artifacts_ignore_case() {
        let mut merged = vec!["api".to_string()];
        merge_artifacts(&mut merged, vec!["API".to_string(), "runbook".to_string()]);
        assert_eq!(merged, vec!["api", "runbook"]);

        let ranked = run("Deploy the api. Deploy the API.");
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].artifacts, vec!["api"]);
    }

    #[test]
    fn ranks_by_position() {
        let ranked = run("Log errors. Deploy the service. Log all errors.");
        let titles: Vec<_> = ranked.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["Log errors", "Deploy the service"]);
    }

    #[test]
    fn descriptive_clause_artifacts_attach_to_related_step() {
        let ranked = run("Publish the privacy policy. The policy must be reachable from a public URL.");
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].artifacts, vec!["privacy policy URL", "policy", "public URL"]);
    }

    #[test]
    fn descriptive_clause_without_overlap_is_ignored() {
        let ranked = run("Rotate keys. The report is emailed weekly.");
        assert_eq!(ranked.len(), 1);
        assert!(ranked[0].artifacts.is_empty());
    }
}
