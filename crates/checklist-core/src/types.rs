//! Core types for the checklist engine
//!
//! Defines:
//! - The request accepted by the engine
//! - The checklist output schema (steps, constants, summary)
//! - Intermediate pipeline values (clauses, classifications, draft steps)

use serde::{Deserialize, Serialize};

/// Target audience of a checklist
///
/// Only `agent` exists; the request layer rejects anything else before
/// the engine is invoked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Audience {
    /// Automated agent consumer
    #[default]
    #[serde(rename = "agent")]
    Agent,
}

impl Audience {
    /// Wire name
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::Agent => "agent",
        }
    }
}

impl std::fmt::Display for Audience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output document type tag, always `checklist`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChecklistKind {
    /// The only document type
    #[default]
    #[serde(rename = "checklist")]
    Checklist,
}

/// Parsed checklist request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistRequest {
    /// Source text (non-empty after trimming, enforced by the caller)
    pub text: String,
    /// Optional context echoed verbatim in the output
    pub context: Option<String>,
    /// Requested step bound, clamped to [3, 12]
    pub max_steps: Option<i64>,
    /// Audience, already validated by the caller
    pub audience: Audience,
}

impl ChecklistRequest {
    /// Create request for text with defaults
    #[inline]
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            context: None,
            max_steps: None,
            audience: Audience::Agent,
        }
    }

    /// With context
    #[inline]
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// With requested step bound
    #[inline]
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: i64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }
}

/// One verifiable unit of the output checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Step {
    /// Sequential id "1".."N"
    pub id: String,
    /// Short imperative phrase
    pub title: String,
    /// Imperative restatement of the source clause
    pub action: String,
    /// Checkable completion condition
    pub verify: String,
    /// Expected evidence, possibly empty
    pub artifacts: Vec<String>,
}

/// Output root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Checklist {
    /// Always `checklist`
    #[serde(rename = "type")]
    pub kind: ChecklistKind,
    /// Always `agent`
    pub audience: Audience,
    /// Request context, `null` when none was supplied
    pub context: Option<String>,
    /// Ordered steps
    pub steps: Vec<Step>,
    /// One-sentence summary
    pub human_summary: String,
}

impl Checklist {
    /// Number of steps
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the checklist has no steps (never true for engine output)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Contiguous span of normalized input text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    /// Position in the input, used for ordering and tie-breaks
    pub index: usize,
    /// Surface tokens of the span
    pub tokens: Vec<String>,
}

impl Clause {
    /// Create clause from surface tokens
    #[inline]
    #[must_use]
    pub fn new(index: usize, tokens: Vec<String>) -> Self {
        Self { index, tokens }
    }

    /// Span text with single spaces
    #[must_use]
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Semantic category of an actionable verb
///
/// Declaration order is the fixed priority order used for tie-breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VerbCategory {
    /// avoid, prevent, prohibit, and any negated directive
    Prohibit,
    /// provide, expose, publish, deploy
    Expose,
    /// handle, respond, recover, retry
    Handle,
    /// encrypt, protect, authenticate
    Secure,
    /// validate, ensure, verify, test
    Validate,
    /// document, record, log, track
    Record,
    /// recognized directive with no specific category
    General,
}

impl VerbCategory {
    /// All categories in priority order
    pub const ALL: [VerbCategory; 7] = [
        VerbCategory::Prohibit,
        VerbCategory::Expose,
        VerbCategory::Handle,
        VerbCategory::Secure,
        VerbCategory::Validate,
        VerbCategory::Record,
        VerbCategory::General,
    ];

    /// Priority rank (lower wins)
    #[inline]
    #[must_use]
    pub fn priority(&self) -> u8 {
        match self {
            VerbCategory::Prohibit => 0,
            VerbCategory::Expose => 1,
            VerbCategory::Handle => 2,
            VerbCategory::Secure => 3,
            VerbCategory::Validate => 4,
            VerbCategory::Record => 5,
            VerbCategory::General => 6,
        }
    }

    /// Stable name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            VerbCategory::Prohibit => "prohibit",
            VerbCategory::Expose => "expose",
            VerbCategory::Handle => "handle",
            VerbCategory::Secure => "secure",
            VerbCategory::Validate => "validate",
            VerbCategory::Record => "record",
            VerbCategory::General => "general",
        }
    }
}

/// Extracted verb plus its immediate object span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbPhrase {
    /// Token index of the verb inside the clause
    pub verb_index: usize,
    /// Category of the verb (Prohibit when negated)
    pub category: VerbCategory,
    /// Directive is negated ("must not", "do not", "never")
    pub negated: bool,
    /// Verb and object tokens, capped
    pub tokens: Vec<String>,
}

impl VerbPhrase {
    /// Object tokens following the verb
    #[inline]
    #[must_use]
    pub fn object(&self) -> &[String] {
        self.tokens.get(1..).unwrap_or(&[])
    }
}

/// Classification of a clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClauseKind {
    /// Instruction that becomes a step
    Actionable(VerbPhrase),
    /// Stative requirement kept as context
    Descriptive,
    /// Boilerplate, headers, fragments
    Irrelevant,
}

impl ClauseKind {
    /// Tag name
    #[inline]
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            ClauseKind::Actionable(_) => "actionable",
            ClauseKind::Descriptive => "descriptive",
            ClauseKind::Irrelevant => "irrelevant",
        }
    }
}

/// Classifier rules in fixed priority order
///
/// The first matching rule decides the clause kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClassifierRule {
    /// No alphabetic token
    NoWords,
    /// Clause opens with a directive verb, optionally negated
    LeadingDirective,
    /// Modal ("must", "should", "needs to") followed by a verb
    ModalDirective,
    /// Lexicon verb in infinitive position or unambiguous verb anywhere
    InfinitiveVerb,
    /// Copular / stative pattern
    Copular,
    /// Nothing matched
    Fallthrough,
}

impl ClassifierRule {
    /// All rules in evaluation order
    pub const ORDER: [ClassifierRule; 6] = [
        ClassifierRule::NoWords,
        ClassifierRule::LeadingDirective,
        ClassifierRule::ModalDirective,
        ClassifierRule::InfinitiveVerb,
        ClassifierRule::Copular,
        ClassifierRule::Fallthrough,
    ];
}

/// Clause with its assigned kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedClause {
    /// Source clause
    pub clause: Clause,
    /// Assigned kind
    pub kind: ClauseKind,
    /// Rule that decided the kind
    pub rule: ClassifierRule,
}

impl ClassifiedClause {
    /// Verb phrase when actionable
    #[inline]
    #[must_use]
    pub fn verb_phrase(&self) -> Option<&VerbPhrase> {
        match &self.kind {
            ClauseKind::Actionable(phrase) => Some(phrase),
            _ => None,
        }
    }
}

/// Where a draft step came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOrigin {
    /// Synthesized from an actionable clause
    Extracted(VerbCategory),
    /// Padded from the fallback bank (template index)
    Fallback(usize),
}

/// Step before ids are assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftStep {
    /// Source clause position
    pub position: usize,
    /// Origin of the step
    pub origin: StepOrigin,
    /// Title
    pub title: String,
    /// Action
    pub action: String,
    /// Verify condition
    pub verify: String,
    /// Artifacts, de-duplicated, order-preserving
    pub artifacts: Vec<String>,
}

impl DraftStep {
    /// Whether the step was extracted from the input
    #[inline]
    #[must_use]
    pub fn is_extracted(&self) -> bool {
        matches!(self.origin, StepOrigin::Extracted(_))
    }

    /// Priority of the step's verb category (fallbacks rank last)
    #[inline]
    #[must_use]
    pub fn category_priority(&self) -> u8 {
        match self.origin {
            StepOrigin::Extracted(category) => category.priority(),
            StepOrigin::Fallback(_) => u8::MAX,
        }
    }
}
