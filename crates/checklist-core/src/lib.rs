//! Checklist Core - Checklist Synthesis Engine
//!
//! Turns free-form instructional text into a bounded, ordered checklist
//! of verifiable steps for an automated agent:
//! - Segments text into clauses and classifies each one
//! - Synthesizes one draft step per actionable clause
//! - Deduplicates, ranks and bounds the steps (3 to 12)
//! - Summarizes the result in a single sentence
//!
//! The pipeline is pure and deterministic: identical input yields
//! byte-identical output for a given [`LEXICON_VERSION`].
//!
//! # Example
//!
//! ```rust
//! use checklist_core::{generate_checklist, Audience};
//!
//! let checklist = generate_checklist(
//!     "Provide a clear description, avoid prohibited activities, expose a stable endpoint, handle errors.",
//!     None,
//!     None,
//!     Audience::Agent,
//! )
//! .expect("engine invariants hold");
//!
//! assert_eq!(checklist.steps.len(), 4);
//! assert_eq!(checklist.steps[0].id, "1");
//! ```

#![warn(unreachable_pub)]

// Core modules
pub mod config;
pub mod engine;
pub mod error;
pub mod lexicon;
pub mod stages;
pub mod types;

// Re-exports for convenience
pub use config::{clamp_max_steps, EngineConfig, DEFAULT_MAX_STEPS, MAX_STEPS, MIN_STEPS};
pub use engine::{effective_limit, generate_checklist, ChecklistEngine};
pub use error::{ConfigError, EngineError, EngineResult, InvariantViolation};
pub use lexicon::LEXICON_VERSION;
pub use types::{
    Audience, Checklist, ChecklistKind, ChecklistRequest, ClassifiedClause, Clause, ClauseKind,
    ClassifierRule, DraftStep, Step, StepOrigin, VerbCategory, VerbPhrase,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with Checklist Core
    pub use crate::{
        generate_checklist, Audience, Checklist, ChecklistEngine, ChecklistRequest, EngineConfig,
        EngineError, Step,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
