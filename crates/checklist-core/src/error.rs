//! Error types for the Checklist Synthesis Engine
//!
//! The engine must always produce output, so the taxonomy is narrow:
//! - Invalid engine configuration (rejected before any request is served)
//! - Internal invariant violations detected at assembly time (engine defects)
//!
//! Caller input errors (empty text, wrong audience) belong to the request
//! handling layer and never reach the engine.

/// Main engine error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// Engine configuration is invalid
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Assembled checklist broke an output invariant
    #[error("internal invariant violation: {0}")]
    Invariant(#[from] InvariantViolation),
}

impl EngineError {
    /// Check if error is an internal engine defect rather than a setup problem
    #[inline]
    #[must_use]
    pub fn is_defect(&self) -> bool {
        matches!(self, Self::Invariant(_))
    }
}

/// Engine configuration errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Default step count outside the hard bounds
    #[error("default_max_steps {value} outside [{min}, {max}]")]
    DefaultStepsOutOfRange { value: u8, min: u8, max: u8 },

    /// Similarity threshold outside (0, 1]
    #[error("similarity_threshold {0} outside (0, 1]")]
    ThresholdOutOfRange(f64),

    /// A token budget was set to zero
    #[error("{0} must be greater than zero")]
    ZeroBudget(&'static str),
}

/// Output invariant violations
///
/// Every variant here is unreachable by construction. Observing one means
/// a pipeline stage is broken.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    /// Step count outside [min, max]
    #[error("step count {count} outside [{min}, {max}]")]
    StepCount { count: usize, min: usize, max: usize },

    /// Step id does not match its position
    #[error("step at position {position} has id {found:?}")]
    NonSequentialId { position: usize, found: String },

    /// Required step field is empty
    #[error("step {step_id} has empty {field}")]
    EmptyField { step_id: String, field: &'static str },

    /// Step title exceeds the token budget
    #[error("step {step_id} title has {tokens} tokens, budget is {budget}")]
    TitleOverBudget {
        step_id: String,
        tokens: usize,
        budget: usize,
    },

    /// Output context differs from the request context
    #[error("context does not echo the request")]
    ContextMismatch,

    /// Summary is empty or not a single sentence
    #[error("malformed summary: {0:?}")]
    MalformedSummary(String),
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_error_display() {
        let err = EngineError::from(InvariantViolation::StepCount {
            count: 2,
            min: 3,
            max: 8,
        });
        assert_eq!(
            err.to_string(),
            "internal invariant violation: step count 2 outside [3, 8]"
        );
    }

    #[test]
    fn engine_error_is_defect() {
        assert!(EngineError::Invariant(InvariantViolation::ContextMismatch).is_defect());
        assert!(!EngineError::Config(ConfigError::ZeroBudget("title_token_budget")).is_defect());
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::DefaultStepsOutOfRange {
            value: 20,
            min: 3,
            max: 12,
        };
        assert!(err.to_string().contains("default_max_steps 20"));
    }

    #[test]
    fn error_conversions() {
        let err: EngineError = ConfigError::ThresholdOutOfRange(1.5).into();
        assert!(matches!(err, EngineError::Config(_)));
    }
}
