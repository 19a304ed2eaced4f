//! Engine configuration
//!
//! Static, read-only settings shared by every request. The hard step
//! bounds are constants; everything else can be tuned and is validated
//! once when the engine is built.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Minimum number of steps in any checklist
pub const MIN_STEPS: u8 = 3;

/// Maximum number of steps in any checklist
pub const MAX_STEPS: u8 = 12;

/// Step count used when the request does not name one
pub const DEFAULT_MAX_STEPS: u8 = 8;

/// Clamp a requested step count into `[MIN_STEPS, MAX_STEPS]`
///
/// Out-of-range requests are clamped silently, never rejected.
#[inline]
#[must_use]
pub fn clamp_max_steps(requested: i64) -> usize {
    let clamped = requested.clamp(i64::from(MIN_STEPS), i64::from(MAX_STEPS));
    usize::try_from(clamped).unwrap_or(usize::from(DEFAULT_MAX_STEPS))
}

/// Checklist engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Step bound applied when `max_steps` is absent
    pub default_max_steps: u8,
    /// Jaccard similarity at or above which two titles are merged
    pub similarity_threshold: f64,
    /// Maximum tokens in a step title
    pub title_token_budget: usize,
    /// Maximum tokens taken from the verb onward for the verb phrase
    pub verb_phrase_tokens: usize,
}

impl EngineConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With default step bound
    #[inline]
    #[must_use]
    pub fn with_default_max_steps(mut self, steps: u8) -> Self {
        self.default_max_steps = steps;
        self
    }

    /// With dedup similarity threshold
    #[inline]
    #[must_use]
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// With title token budget
    #[inline]
    #[must_use]
    pub fn with_title_token_budget(mut self, budget: usize) -> Self {
        self.title_token_budget = budget;
        self
    }

    /// With verb phrase token cap
    #[inline]
    #[must_use]
    pub fn with_verb_phrase_tokens(mut self, tokens: usize) -> Self {
        self.verb_phrase_tokens = tokens;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_STEPS..=MAX_STEPS).contains(&self.default_max_steps) {
            return Err(ConfigError::DefaultStepsOutOfRange {
                value: self.default_max_steps,
                min: MIN_STEPS,
                max: MAX_STEPS,
            });
        }
        if !(self.similarity_threshold > 0.0 && self.similarity_threshold <= 1.0) {
            return Err(ConfigError::ThresholdOutOfRange(self.similarity_threshold));
        }
        if self.title_token_budget == 0 {
            return Err(ConfigError::ZeroBudget("title_token_budget"));
        }
        if self.verb_phrase_tokens == 0 {
            return Err(ConfigError::ZeroBudget("verb_phrase_tokens"));
        }
        Ok(())
    }

    /// Resolve the effective step bound for a request
    #[inline]
    #[must_use]
    pub fn step_bound(&self, requested: Option<i64>) -> usize {
        clamp_max_steps(requested.unwrap_or(i64::from(self.default_max_steps)))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_max_steps: DEFAULT_MAX_STEPS,
            similarity_threshold: 0.6,
            title_token_budget: 8,
            verb_phrase_tokens: 6,
        }
    }
}
