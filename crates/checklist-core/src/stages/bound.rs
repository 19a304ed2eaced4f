//! Bounder
//!
//! Enforces the step count window: truncates ranked drafts to the limit and
//! pads with generic clarification steps from [`FALLBACK_BANK`] when fewer
//! than [`MIN_STEPS`] remain.

use crate::config::{EngineConfig, MIN_STEPS};
use crate::lexicon::{FallbackTemplate, FALLBACK_BANK};
use crate::stages::rank::CanonicalTitle;
use crate::stages::synthesize::truncate_title;
use crate::types::{DraftStep, StepOrigin};

/// Truncate or pad `drafts` so the count lies in `[MIN_STEPS, limit]`
///
/// `limit` is already clamped, so it is never below [`MIN_STEPS`].
#[must_use]
pub fn bound(mut drafts: Vec<DraftStep>, limit: usize, config: &EngineConfig) -> Vec<DraftStep> {
    let min = usize::from(MIN_STEPS);
    let limit = limit.max(min);

    if drafts.len() > limit {
        tracing::debug!("Truncating {} steps to {}", drafts.len(), limit);
        drafts.truncate(limit);
    }

    if drafts.len() < min {
        let needed = min - drafts.len();
        let (fresh, shadowed): (Vec<_>, Vec<_>) = FALLBACK_BANK
            .iter()
            .enumerate()
            .partition(|(_, template)| !duplicates_existing(template, &drafts, config));

        // shadowed templates are only used once the fresh ones run out
        let mut chosen: Vec<(usize, &FallbackTemplate)> =
            fresh.into_iter().chain(shadowed).take(needed).collect();
        chosen.sort_by_key(|(idx, _)| *idx);

        tracing::debug!("Padding {} steps with {} fallback steps", drafts.len(), chosen.len());
        drafts.extend(
            chosen
                .into_iter()
                .map(|(idx, template)| fallback_step(idx, template, config)),
        );
    }

    drafts
}

fn duplicates_existing(template: &FallbackTemplate, drafts: &[DraftStep], config: &EngineConfig) -> bool {
    let candidate = CanonicalTitle::new(template.title);
    drafts
        .iter()
        .any(|d| CanonicalTitle::new(&d.title).similarity(&candidate) >= config.similarity_threshold)
}

fn fallback_step(idx: usize, template: &FallbackTemplate, config: &EngineConfig) -> DraftStep {
    let words: Vec<&str> = template.title.split_whitespace().collect();
    DraftStep {
        position: usize::MAX,
        origin: StepOrigin::Fallback(idx),
        title: truncate_title(&words, config.title_token_budget),
        action: template.action.to_string(),
        verify: template.verify.to_string(),
        artifacts: template.artifacts.iter().map(|a| (*a).to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VerbCategory;

    fn extracted(position: usize, title: &str) -> DraftStep {
        DraftStep {
            position,
            origin: StepOrigin::Extracted(VerbCategory::General),
            title: title.to_string(),
            action: format!("{title}."),
            verify: "Confirm it.".to_string(),
            artifacts: Vec::new(),
        }
    }

    fn titles(steps: &[DraftStep]) -> Vec<&str> {
        steps.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn truncates_to_limit() {
        let drafts = (0..10).map(|i| extracted(i, &format!("Step number {i}"))).collect();
        let bounded = bound(drafts, 4, &EngineConfig::default());
        assert_eq!(bounded.len(), 4);
        assert_eq!(bounded[3].position, 3);
    }

    #[test]
    fn pads_empty_input_in_bank_order() {
        let bounded = bound(Vec::new(), 8, &EngineConfig::default());
        assert_eq!(
            titles(&bounded),
            vec![
                "Clarify ambiguous requirement",
                "Confirm scope with source text",
                "Document assumptions made",
            ]
        );
        assert_eq!(bounded[0].artifacts, vec!["clarification notes"]);
        assert!(bounded.iter().all(|s| !s.is_extracted()));
    }

    #[test]
    fn padding_follows_extracted_steps() {
        let bounded = bound(vec![extracted(0, "Deploy the service")], 8, &EngineConfig::default());
        assert_eq!(bounded.len(), 3);
        assert_eq!(bounded[0].title, "Deploy the service");
        assert_eq!(bounded[1].origin, StepOrigin::Fallback(0));
        assert_eq!(bounded[2].origin, StepOrigin::Fallback(1));
    }

    #[test]
    fn padding_skips_duplicate_templates() {
        let bounded = bound(
            vec![extracted(0, "Clarify the ambiguous requirement")],
            8,
            &EngineConfig::default(),
        );
        assert_eq!(
            titles(&bounded),
            vec![
                "Clarify the ambiguous requirement",
                "Confirm scope with source text",
                "Document assumptions made",
            ]
        );
    }

    #[test]
    fn fallback_titles_respect_budget() {
        let config = EngineConfig::default().with_title_token_budget(2);
        let bounded = bound(Vec::new(), 8, &config);
        assert_eq!(bounded[1].title, "Confirm scope");
    }
}
