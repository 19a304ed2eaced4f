//! Lexicon tables
//!
//! Closed, versioned word lists and decision tables that drive the
//! pipeline. Everything here is immutable process-wide data initialized
//! once; changing any table must bump [`LEXICON_VERSION`].

use crate::types::VerbCategory;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Version of every table in this module
pub const LEXICON_VERSION: &str = "1.1.0";

/// Lexicon verb entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerbEntry {
    /// Base form
    pub word: &'static str,
    /// Semantic category
    pub category: VerbCategory,
    /// Also a common noun ("test", "log"); only counts in directive position
    pub noun_ambiguous: bool,
}

const fn verb(word: &'static str, category: VerbCategory) -> VerbEntry {
    VerbEntry {
        word,
        category,
        noun_ambiguous: false,
    }
}

const fn noun_verb(word: &'static str, category: VerbCategory) -> VerbEntry {
    VerbEntry {
        word,
        category,
        noun_ambiguous: true,
    }
}

use VerbCategory::{Expose, General, Handle, Prohibit, Record, Secure, Validate};

/// Imperative / infinitive verb forms
pub const VERBS: &[VerbEntry] = &[
    // prohibit
    verb("avoid", Prohibit),
    verb("prevent", Prohibit),
    verb("prohibit", Prohibit),
    verb("forbid", Prohibit),
    verb("disallow", Prohibit),
    verb("refrain", Prohibit),
    verb("exclude", Prohibit),
    verb("reject", Prohibit),
    verb("deny", Prohibit),
    verb("restrict", Prohibit),
    noun_verb("block", Prohibit),
    noun_verb("stop", Prohibit),
    noun_verb("ban", Prohibit),
    // expose
    verb("provide", Expose),
    verb("expose", Expose),
    verb("publish", Expose),
    verb("deploy", Expose),
    verb("serve", Expose),
    verb("host", Expose),
    verb("share", Expose),
    verb("supply", Expose),
    verb("deliver", Expose),
    verb("submit", Expose),
    verb("upload", Expose),
    noun_verb("release", Expose),
    noun_verb("offer", Expose),
    noun_verb("present", Expose),
    noun_verb("return", Expose),
    // handle
    verb("handle", Handle),
    verb("respond", Handle),
    verb("recover", Handle),
    verb("retry", Handle),
    verb("catch", Handle),
    verb("resolve", Handle),
    verb("escalate", Handle),
    verb("notify", Handle),
    verb("mitigate", Handle),
    verb("remediate", Handle),
    verb("manage", Handle),
    noun_verb("alert", Handle),
    noun_verb("fix", Handle),
    noun_verb("process", Handle),
    // secure
    verb("encrypt", Secure),
    verb("protect", Secure),
    verb("authenticate", Secure),
    verb("authorize", Secure),
    verb("sanitize", Secure),
    verb("redact", Secure),
    verb("rotate", Secure),
    verb("revoke", Secure),
    noun_verb("secure", Secure),
    noun_verb("mask", Secure),
    noun_verb("hash", Secure),
    noun_verb("sign", Secure),
    // validate
    verb("validate", Validate),
    verb("verify", Validate),
    verb("ensure", Validate),
    verb("confirm", Validate),
    verb("inspect", Validate),
    verb("assess", Validate),
    verb("evaluate", Validate),
    verb("approve", Validate),
    verb("compare", Validate),
    noun_verb("check", Validate),
    noun_verb("test", Validate),
    noun_verb("review", Validate),
    noun_verb("audit", Validate),
    noun_verb("monitor", Validate),
    noun_verb("measure", Validate),
    // record
    verb("describe", Record),
    verb("write", Record),
    verb("capture", Record),
    verb("annotate", Record),
    verb("summarize", Record),
    verb("explain", Record),
    noun_verb("document", Record),
    noun_verb("record", Record),
    noun_verb("log", Record),
    noun_verb("note", Record),
    noun_verb("track", Record),
    noun_verb("store", Record),
    noun_verb("archive", Record),
    noun_verb("report", Record),
    noun_verb("update", Record),
    noun_verb("label", Record),
    noun_verb("list", Record),
    // general
    verb("create", General),
    verb("implement", General),
    verb("add", General),
    verb("define", General),
    verb("configure", General),
    verb("install", General),
    verb("enable", General),
    verb("disable", General),
    verb("remove", General),
    verb("delete", General),
    verb("migrate", General),
    verb("integrate", General),
    verb("include", General),
    verb("follow", General),
    verb("maintain", General),
    verb("keep", General),
    verb("apply", General),
    verb("execute", General),
    verb("perform", General),
    verb("prepare", General),
    verb("obtain", General),
    verb("collect", General),
    verb("send", General),
    verb("assign", General),
    verb("identify", General),
    verb("complete", General),
    verb("clarify", General),
    verb("establish", General),
    verb("register", General),
    verb("retain", General),
    verb("inform", General),
    verb("communicate", General),
    verb("allow", General),
    verb("grant", General),
    noun_verb("build", General),
    noun_verb("set", General),
    noun_verb("use", General),
    noun_verb("run", General),
    noun_verb("schedule", General),
    noun_verb("design", General),
    noun_verb("plan", General),
    noun_verb("limit", General),
    noun_verb("support", General),
    noun_verb("require", General),
    noun_verb("contact", General),
];

static VERB_INDEX: Lazy<HashMap<&'static str, VerbEntry>> = Lazy::new(|| {
    let mut index = HashMap::with_capacity(VERBS.len());
    for entry in VERBS {
        index.entry(entry.word).or_insert(*entry);
    }
    index
});

/// Look up a normalized token in the verb lexicon
#[inline]
#[must_use]
pub fn lookup_verb(word: &str) -> Option<VerbEntry> {
    VERB_INDEX.get(word).copied()
}

/// Words ignored when comparing titles or picking summary phrases
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "an", "and", "any", "are", "as", "at", "be", "been",
    "before", "being", "both", "but", "by", "can", "could", "did", "do", "does", "e.g", "each",
    "either", "etc", "every", "for", "from", "had", "has", "have", "her", "here", "his", "how",
    "i", "i.e", "if", "in", "into", "is", "it", "its", "may", "me", "might", "more", "most",
    "must", "my", "no", "nor", "not", "of", "on", "onto", "only", "or", "other", "our", "over",
    "per", "please", "shall", "should", "so", "some", "such", "than", "that", "the", "their",
    "them", "then", "there", "these", "they", "this", "those", "to", "under", "up", "us", "via",
    "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "will",
    "with", "within", "without", "would", "you", "your",
];

static STOP_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| STOP_WORDS.iter().copied().collect());

/// Check whether a normalized token is a stop word
#[inline]
#[must_use]
pub fn is_stop_word(word: &str) -> bool {
    STOP_SET.contains(word)
}

/// Modals that introduce a directive verb directly
pub const MODALS: &[&str] = &["must", "should", "shall", "will"];

/// Modals that need a following "to" ("needs to", "required to")
pub const MODALS_WITH_TO: &[&str] = &[
    "need", "needs", "have", "has", "required", "expected", "obliged",
];

/// Contracted negated modals
pub const NEGATED_MODALS: &[&str] = &[
    "cannot", "can't", "mustn't", "shouldn't", "shan't", "won't",
];

/// Negation tokens following a modal
pub const NEGATIONS: &[&str] = &["not", "never"];

/// Tokens skipped before a leading directive verb
pub const LEADING_FILLERS: &[&str] = &[
    "please", "also", "then", "always", "first", "next", "finally", "additionally", "and",
    "or", "to", "now",
];

/// Multi-word lead-ins skipped like fillers ("make sure", "be sure to")
pub const LEAD_INS: &[&[&str]] = &[
    &["make", "sure"],
    &["make", "certain"],
    &["be", "sure", "to"],
    &["be", "certain", "to"],
];

/// Subject pronouns after which a noun-ambiguous verb still reads as a verb
pub const SUBJECT_PRONOUNS: &[&str] = &["you", "we", "they"];

/// Complementizers skipped when they directly follow the verb
pub const COMPLEMENTIZERS: &[&str] = &["that", "whether"];

/// Prepositions that may close a verb phrase
pub const PREPOSITIONS: &[&str] = &[
    "about", "after", "at", "before", "by", "during", "for", "from", "in", "into", "of", "on",
    "onto", "over", "per", "to", "under", "via", "with", "within", "without",
];

/// Determiners that cannot end a phrase
pub const DETERMINERS: &[&str] = &[
    "a", "all", "an", "any", "each", "every", "its", "our", "some", "that", "the", "their",
    "these", "this", "those", "your",
];

/// Words a phrase must not end on
#[must_use]
pub fn is_dangling(word: &str) -> bool {
    CONJUNCTIONS.contains(&word)
        || DETERMINERS.contains(&word)
        || PREPOSITIONS.contains(&word)
        || matches!(word, "but" | "nor")
}

/// Dotted abbreviations that never end a sentence
pub const ABBREVIATIONS: &[&str] = &["e.g", "i.e", "cf", "vs", "approx", "incl", "esp"];

/// "-ly" nouns and adjectives that are not manner adverbs
const LY_WORDS: &[&str] = &[
    "anomaly", "assembly", "butterfly", "family", "friendly", "reply", "supply",
];

/// Check whether a normalized token is a manner adverb ("gracefully")
#[must_use]
pub fn is_adverb(word: &str) -> bool {
    word.len() > 4 && word.ends_with("ly") && !LY_WORDS.contains(&word)
}

/// Adverbs skipped between a modal and its verb
pub const MODAL_ADVERBS: &[&str] = &["also", "always", "first", "immediately", "promptly"];

/// Determiners and pronouns that typically open a verb's object
pub const OBJECT_LEADS: &[&str] = &[
    "a", "all", "an", "any", "each", "every", "it", "its", "our", "that", "the", "their",
    "them", "these", "this", "those", "your",
];

/// Conjunctions dropped at a clause boundary
pub const CONJUNCTIONS: &[&str] = &["and", "or", "then", "also", "plus"];

/// Copular / stative forms
pub const COPULAS: &[&str] = &["is", "are", "was", "were", "be", "been", "being"];

/// Subordinators that end a verb phrase's object span
pub const PHRASE_BREAKS: &[&str] = &[
    "because", "unless", "although", "whereas", "if", "when", "while", "since", "until",
];

/// Connective rewrites applied when restating an action
pub const CONNECTIVES: &[(&str, &str)] = &[
    ("&", "and"),
    ("+", "and"),
    ("w/", "with"),
    ("w/o", "without"),
    ("and/or", "or"),
];

/// Nouns that name expected evidence
pub const ARTIFACT_NOUNS: &[&str] = &[
    "api", "backup", "certificate", "changelog", "checklist", "config", "configuration",
    "consent", "contract", "dashboard", "description", "diagram", "document", "documentation",
    "endpoint", "evidence", "export", "file", "form", "inventory", "link", "log", "manifest",
    "metric", "notice", "page", "playbook", "policy", "readme", "receipt", "record",
    "recording", "report", "runbook", "schema", "screenshot", "spec", "specification",
    "summary", "test", "ticket", "trail", "url", "video",
];

static ARTIFACT_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ARTIFACT_NOUNS.iter().copied().collect());

/// Check whether a normalized token is an artifact noun (singular or plural)
#[must_use]
pub fn is_artifact_noun(word: &str) -> bool {
    if ARTIFACT_SET.contains(word) {
        return true;
    }
    if let Some(stem) = word.strip_suffix("ies") {
        if ARTIFACT_SET.contains(format!("{stem}y").as_str()) {
            return true;
        }
    }
    word.strip_suffix('s')
        .is_some_and(|stem| ARTIFACT_SET.contains(stem))
}

/// Multi-word phrases mapped to a named artifact
pub const NAMED_ARTIFACTS: &[(&[&str], &str)] = &[
    (&["privacy", "policy"], "privacy policy URL"),
    (&["terms", "of", "service"], "terms of service URL"),
    (&["demo", "video"], "demo video URL"),
];

/// Lower-case a token and trim surrounding punctuation
#[must_use]
pub fn normalize_token(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

/// Verify condition for a verb category
///
/// The table is total over [`VerbCategory`]; `General` is the default for
/// verbs with no specific category.
#[must_use]
pub fn verify_for(category: VerbCategory, object: Option<&str>) -> String {
    match (category, object) {
        (Prohibit, Some(object)) => format!(
            "Confirm the prohibited condition ({object}) does not occur in the output or process."
        ),
        (Prohibit, None) => {
            "Confirm the prohibited condition does not occur in the output or process.".to_string()
        }
        (Expose, Some(object)) => format!(
            "Confirm the artifact or endpoint ({object}) is present and reachable or reviewable."
        ),
        (Expose, None) => {
            "Confirm the artifact or endpoint is present and reachable or reviewable.".to_string()
        }
        (Handle, Some(object)) => format!(
            "Confirm the handling path for {object} is exercised and produces the expected response."
        ),
        (Handle, None) => {
            "Confirm the handling path is exercised and produces the expected response."
                .to_string()
        }
        (Secure, Some(object)) => format!(
            "Confirm the protection of {object} is in place and cannot be bypassed."
        ),
        (Secure, None) => "Confirm the protection is in place and cannot be bypassed.".to_string(),
        (Validate, Some(object)) => format!(
            "Confirm the check on {object} was run and its outcome is recorded."
        ),
        (Validate, None) => "Confirm the check was run and its outcome is recorded.".to_string(),
        (Record, Some(object)) => {
            format!("Confirm a written record of {object} exists and is reviewable.")
        }
        (Record, None) => "Confirm a written record exists and is reviewable.".to_string(),
        (General, _) => {
            "Confirm the action was performed and its result matches the stated intent."
                .to_string()
        }
    }
}

/// Generic clarification step template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackTemplate {
    /// Step title
    pub title: &'static str,
    /// Step action
    pub action: &'static str,
    /// Step verify condition
    pub verify: &'static str,
    /// Expected artifacts
    pub artifacts: &'static [&'static str],
}

/// Ordered fallback bank used to pad sparse checklists
pub static FALLBACK_BANK: [FallbackTemplate; 5] = [
    FallbackTemplate {
        title: "Clarify ambiguous requirement",
        action: "Identify each ambiguous requirement in the source text and restate it as a concrete instruction.",
        verify: "Confirm every restated requirement maps to a specific passage of the source text.",
        artifacts: &["clarification notes"],
    },
    FallbackTemplate {
        title: "Confirm scope with source text",
        action: "Compare the planned work against the source text and list what is in and out of scope.",
        verify: "Confirm the scope list cites the source text and names its boundaries.",
        artifacts: &[],
    },
    FallbackTemplate {
        title: "Document assumptions made",
        action: "Write down each assumption made while interpreting the source text.",
        verify: "Confirm each assumption is recorded next to the passage it relates to.",
        artifacts: &["assumptions log"],
    },
    FallbackTemplate {
        title: "Break down key tasks",
        action: "Split the remaining work into executable tasks and order them.",
        verify: "Confirm the task list has a clear sequence with no gaps.",
        artifacts: &[],
    },
    FallbackTemplate {
        title: "Run a quick validation",
        action: "Execute a small end-to-end run of the described workflow.",
        verify: "Confirm outputs are produced and errors are reported clearly.",
        artifacts: &["test output"],
    },
];
