//! Clause classifier
//!
//! Assigns every clause exactly one [`ClauseKind`] by evaluating
//! [`ClassifierRule::ORDER`] and stopping at the first rule that matches.
//! Actionable clauses also get their verb phrase extracted.

use crate::config::EngineConfig;
use crate::lexicon::{
    is_dangling, lookup_verb, normalize_token, COMPLEMENTIZERS, CONNECTIVES, COPULAS,
    LEADING_FILLERS, LEAD_INS, MODALS, MODALS_WITH_TO, MODAL_ADVERBS, NEGATED_MODALS, NEGATIONS,
    PHRASE_BREAKS, PREPOSITIONS, SUBJECT_PRONOUNS,
};
use crate::types::{ClassifiedClause, Clause, ClassifierRule, ClauseKind, VerbCategory, VerbPhrase};

/// Classify clauses in order
#[must_use]
pub fn classify(clauses: Vec<Clause>, config: &EngineConfig) -> Vec<ClassifiedClause> {
    let classified: Vec<ClassifiedClause> = clauses
        .into_iter()
        .map(|clause| classify_clause(clause, config))
        .collect();

    tracing::debug!(
        "Classified {} clauses ({} actionable)",
        classified.len(),
        classified.iter().filter(|c| c.verb_phrase().is_some()).count()
    );
    classified
}

/// Classify a single clause
#[must_use]
pub fn classify_clause(clause: Clause, config: &EngineConfig) -> ClassifiedClause {
    let words: Vec<String> = clause.tokens.iter().map(|t| normalize_token(t)).collect();
    let ctx = RuleInput {
        clause: &clause,
        words: &words,
        phrase_cap: config.verb_phrase_tokens,
    };

    for rule in ClassifierRule::ORDER {
        if let Some(kind) = ctx.apply(rule) {
            return ClassifiedClause { clause, kind, rule };
        }
    }

    ClassifiedClause {
        clause,
        kind: ClauseKind::Irrelevant,
        rule: ClassifierRule::Fallthrough,
    }
}

struct RuleInput<'a> {
    clause: &'a Clause,
    words: &'a [String],
    phrase_cap: usize,
}

impl RuleInput<'_> {
    fn apply(&self, rule: ClassifierRule) -> Option<ClauseKind> {
        match rule {
            ClassifierRule::NoWords => self.no_words(),
            ClassifierRule::LeadingDirective => self.leading_directive(),
            ClassifierRule::ModalDirective => self.modal_directive(),
            ClassifierRule::InfinitiveVerb => self.infinitive_verb(),
            ClassifierRule::Copular => self.copular(),
            ClassifierRule::Fallthrough => Some(ClauseKind::Irrelevant),
        }
    }

    fn word(&self, i: usize) -> Option<&str> {
        self.words.get(i).map(String::as_str)
    }

    fn no_words(&self) -> Option<ClauseKind> {
        let has_word = self
            .words
            .iter()
            .any(|w| w.chars().any(char::is_alphabetic));
        (!has_word).then_some(ClauseKind::Irrelevant)
    }

    fn words_at(&self, i: usize, expected: &[&str]) -> bool {
        expected
            .iter()
            .enumerate()
            .all(|(k, w)| self.word(i + k) == Some(*w))
    }

    fn is_subject_pronoun(&self, i: usize) -> bool {
        self.word(i).is_some_and(|w| SUBJECT_PRONOUNS.contains(&w))
    }

    /// Skip fillers and lead-ins ("please", "make sure", "be sure to")
    fn skip_lead_ins(&self, mut i: usize) -> usize {
        loop {
            if self.word(i).is_some_and(|w| LEADING_FILLERS.contains(&w)) {
                i += 1;
            } else if let Some(lead) = LEAD_INS.iter().find(|lead| self.words_at(i, lead)) {
                i += lead.len();
            } else {
                return i;
            }
        }
    }

    fn leading_directive(&self) -> Option<ClauseKind> {
        let mut i = self.skip_lead_ins(0);
        // "you document the plan", "we never share keys"
        let verb_follows = self.word(i + 1).is_some_and(|w| {
            lookup_verb(w).is_some() || matches!(w, "never" | "don't" | "dont" | "do")
        });
        if self.is_subject_pronoun(i) && verb_follows {
            i += 1;
        }

        let negated = match self.word(i) {
            Some("never" | "don't" | "dont") => {
                i += 1;
                true
            }
            Some("do") if self.word(i + 1) == Some("not") => {
                i += 2;
                true
            }
            _ => false,
        };

        let word = self.word(i)?;
        if negated {
            if !is_verb_like(word) {
                return None;
            }
            return Some(self.actionable(i, VerbCategory::Prohibit, true));
        }

        let entry = lookup_verb(word)?;
        if entry.noun_ambiguous && self.reads_as_subject(i) {
            return None;
        }
        Some(self.actionable(i, entry.category, false))
    }

    /// "Test results are stored": an ambiguous verb followed closely by a
    /// copula or modal is the subject, not a directive.
    fn reads_as_subject(&self, i: usize) -> bool {
        [i + 1, i + 2].iter().any(|&j| {
            self.word(j).is_some_and(|w| {
                COPULAS.contains(&w) || MODALS.contains(&w) || NEGATED_MODALS.contains(&w)
            })
        })
    }

    fn modal_directive(&self) -> Option<ClauseKind> {
        for (m, word) in self.words.iter().enumerate() {
            let word = word.as_str();
            let (mut j, mut negated) = if MODALS.contains(&word) {
                (m + 1, false)
            } else if NEGATED_MODALS.contains(&word) {
                (m + 1, true)
            } else if MODALS_WITH_TO.contains(&word) && self.word(m + 1) == Some("to") {
                (m + 2, false)
            } else {
                continue;
            };

            while self.word(j).is_some_and(|w| MODAL_ADVERBS.contains(&w)) {
                j += 1;
            }
            if self.word(j).is_some_and(|w| NEGATIONS.contains(&w)) {
                negated = true;
                j += 1;
            }
            while self.word(j).is_some_and(|w| MODAL_ADVERBS.contains(&w)) {
                j += 1;
            }

            let Some(verb) = self.word(j) else {
                continue;
            };
            if COPULAS.contains(&verb) || !is_verb_like(verb) {
                continue;
            }

            let category = if negated {
                VerbCategory::Prohibit
            } else {
                lookup_verb(verb).map_or(VerbCategory::General, |e| e.category)
            };
            return Some(self.actionable(j, category, negated));
        }
        None
    }

    fn infinitive_verb(&self) -> Option<ClauseKind> {
        self.words.iter().enumerate().find_map(|(i, word)| {
            let entry = lookup_verb(word)?;
            let infinitive = i > 0 && self.word(i - 1) == Some("to");
            let after_subject = i > 0 && self.is_subject_pronoun(i - 1);
            (infinitive || after_subject || !entry.noun_ambiguous)
                .then(|| self.actionable(i, entry.category, false))
        })
    }

    fn copular(&self) -> Option<ClauseKind> {
        self.words
            .iter()
            .any(|w| COPULAS.contains(&w.as_str()))
            .then_some(ClauseKind::Descriptive)
    }

    fn actionable(&self, verb_index: usize, category: VerbCategory, negated: bool) -> ClauseKind {
        ClauseKind::Actionable(VerbPhrase {
            verb_index,
            category,
            negated,
            tokens: extract_phrase(&self.clause.tokens, self.words, verb_index, self.phrase_cap),
        })
    }
}

fn is_verb_like(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_alphabetic)
}

/// Verb plus its immediate object, capped and cut at subordinators or
/// a trailing comma.
///
/// A complementizer right after the verb is dropped ("Ensure that logs
/// are retained" reads "Ensure logs are retained"), a complement clause
/// ends at its first preposition, and the phrase never ends on a
/// conjunction, determiner or preposition.
fn extract_phrase(tokens: &[String], words: &[String], verb_index: usize, cap: usize) -> Vec<String> {
    let mut phrase: Vec<String> = Vec::new();
    let mut taken = 0;
    let mut copular = false;

    for (offset, token) in tokens.iter().enumerate().skip(verb_index) {
        if taken == cap {
            break;
        }
        let word = words[offset].as_str();
        if offset > verb_index {
            if PHRASE_BREAKS.contains(&word) || (copular && PREPOSITIONS.contains(&word)) {
                break;
            }
            if offset == verb_index + 1 && COMPLEMENTIZERS.contains(&word) {
                continue;
            }
        }
        taken += 1;
        copular |= COPULAS.contains(&word);

        let token = rewrite_connective(token);
        let ends_group = token.ends_with([',', ';', ':']);
        let cleaned = token
            .trim_end_matches(|c: char| matches!(c, ',' | ';' | ':'))
            .to_string();
        if !cleaned.is_empty() {
            phrase.push(cleaned);
        }
        if ends_group {
            break;
        }
    }

    while phrase.len() > 1 && phrase.last().is_some_and(|t| is_dangling(&normalize_token(t))) {
        phrase.pop();
    }
    phrase
}

/// Normalize connective shorthand ("&", "w/") to words
#[must_use]
pub fn rewrite_connective(token: &str) -> String {
    let lowered = token.to_lowercase();
    CONNECTIVES
        .iter()
        .find(|(from, _)| *from == lowered)
        .map_or_else(|| token.to_string(), |(_, to)| (*to).to_string())
}
