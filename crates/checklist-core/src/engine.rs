//! Checklist engine
//!
//! Owns the validated configuration and runs the pipeline end to end:
//! - Resolves and clamps the step bound
//! - Runs every stage in order
//! - Validates the assembled checklist before returning it

use crate::config::{clamp_max_steps, EngineConfig};
use crate::error::{ConfigError, EngineError};
use crate::stages;
use crate::types::{Audience, Checklist, ChecklistRequest};
use once_cell::sync::Lazy;

/// Deterministic checklist synthesizer
///
/// Holds no mutable state; a single instance can serve any number of
/// concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct ChecklistEngine {
    config: EngineConfig,
}

impl ChecklistEngine {
    /// Create engine with default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create engine with custom configuration
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration fails validation.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Engine configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Generate a checklist for a request
    ///
    /// # Workflow
    /// 1. Segment the text into clauses
    /// 2. Classify clauses and synthesize draft steps
    /// 3. Deduplicate, rank and bound the drafts
    /// 4. Summarize, assemble and validate
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Invariant`] only when a stage is defective;
    /// every well-formed request produces a checklist.
    pub fn generate(&self, request: &ChecklistRequest) -> Result<Checklist, EngineError> {
        let limit = self.config.step_bound(request.max_steps);
        if let Some(requested) = request.max_steps {
            if usize::try_from(requested).ok() != Some(limit) {
                tracing::warn!("Clamped max_steps {} to {}", requested, limit);
            }
        }

        let clauses = stages::segment(&request.text);
        let classified = stages::classify(clauses, &self.config);
        let drafts = stages::synthesize(&classified, &self.config);
        let ranked = stages::rank(drafts, &classified, &self.config);
        let bounded = stages::bound(ranked, limit, &self.config);
        let summary = stages::summarize(&bounded);

        let context = request.context.as_deref();
        let checklist = stages::assemble(bounded, context, summary);

        if let Err(violation) = stages::validate(&checklist, context, limit, &self.config) {
            tracing::error!("Checklist failed validation: {}", violation);
            return Err(violation.into());
        }

        tracing::info!(
            "Generated checklist with {} steps (limit {})",
            checklist.len(),
            limit
        );
        Ok(checklist)
    }
}

static DEFAULT_ENGINE: Lazy<ChecklistEngine> = Lazy::new(ChecklistEngine::new);

/// Generate a checklist with the default engine
///
/// `max_steps` is clamped into `[3, 12]`; `None` uses the default of 8.
///
/// # Errors
///
/// See [`ChecklistEngine::generate`].
pub fn generate_checklist(
    text: &str,
    context: Option<&str>,
    max_steps: Option<i64>,
    audience: Audience,
) -> Result<Checklist, EngineError> {
    let request = ChecklistRequest {
        text: text.to_string(),
        context: context.map(str::to_string),
        max_steps,
        audience,
    };
    DEFAULT_ENGINE.generate(&request)
}

/// Effective step bound for a raw request value
#[inline]
#[must_use]
pub fn effective_limit(max_steps: Option<i64>) -> usize {
    max_steps.map_or_else(|| DEFAULT_ENGINE.config().step_bound(None), clamp_max_steps)
}
