//! The ordered rule-matching stemming engine.
//!
//! For a token the engine walks the [`RuleTable`] in order. The first rule
//! that matches the whole lower-cased token *and* leaves a stem with a vowel
//! and more than one character wins. A rule that matches but leaves an
//! invalid stem is passed over. If nothing is accepted the lower-cased token
//! is returned unchanged, so stemming never fails.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::analysis::token_filter::stem::Stemmer;
use crate::stemmer::rule::{Rule, RuleTable};
use crate::stemmer::trace::{NoopTracer, RejectReason, StemTracer, TraceEvent};
use crate::stemmer::vowel::VowelDetector;

/// Smallest accepted stem length, in characters.
pub const MIN_STEM_CHARS: usize = 2;

/// Result of stemming one token, with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StemOutcome {
    /// The token as supplied.
    pub input: String,
    pub stem: String,
    /// Index of the accepted rule, `None` when the token was kept.
    pub rule: Option<usize>,
}

/// Applies a [`RuleTable`] and a [`VowelDetector`] to single tokens.
#[derive(Clone)]
pub struct StemEngine {
    rules: Arc<RuleTable>,
    detector: VowelDetector,
    tracer: Arc<dyn StemTracer>,
}

impl fmt::Debug for StemEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StemEngine")
            .field("rules", &self.rules.len())
            .field("tracing", &self.tracer.enabled())
            .finish()
    }
}

impl StemEngine {
    /// Create an engine with tracing disabled.
    pub fn new(rules: Arc<RuleTable>) -> Self {
        Self::with_tracer(rules, Arc::new(NoopTracer))
    }

    /// Create an engine reporting its decisions to `tracer`.
    pub fn with_tracer(rules: Arc<RuleTable>, tracer: Arc<dyn StemTracer>) -> Self {
        StemEngine {
            rules,
            detector: VowelDetector::new(),
            tracer,
        }
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn tracer(&self) -> &Arc<dyn StemTracer> {
        &self.tracer
    }

    /// Stem a single token.
    pub fn stem(&self, token: &str) -> String {
        self.stem_detailed(token).stem
    }

    /// Stem a single token and report which rule was accepted.
    pub fn stem_detailed(&self, token: &str) -> StemOutcome {
        let lowered = token.to_lowercase();
        let tracing = self.tracer.enabled();

        for rule in self.rules.iter() {
            let Some(candidate) = rule.split(&lowered) else {
                continue;
            };

            if tracing {
                self.tracer.record(TraceEvent::RuleMatched {
                    token: lowered.clone(),
                    rule: rule.index(),
                    pattern: rule.pattern().to_string(),
                    candidate: candidate.to_string(),
                });
            }

            match self.check(candidate) {
                Ok(()) => {
                    if tracing {
                        self.tracer.record(TraceEvent::CandidateAccepted {
                            token: lowered.clone(),
                            rule: rule.index(),
                            stem: candidate.to_string(),
                        });
                    }
                    return StemOutcome {
                        input: token.to_string(),
                        stem: candidate.to_string(),
                        rule: Some(rule.index()),
                    };
                }
                Err(reason) => {
                    if tracing {
                        self.reject(&lowered, rule, candidate, reason);
                    }
                }
            }
        }

        if tracing {
            self.tracer.record(TraceEvent::NoRuleAccepted {
                token: lowered.clone(),
            });
        }

        StemOutcome {
            input: token.to_string(),
            stem: lowered,
            rule: None,
        }
    }

    fn check(&self, candidate: &str) -> Result<(), RejectReason> {
        if candidate.chars().count() < MIN_STEM_CHARS {
            return Err(RejectReason::TooShort);
        }
        if !self.detector.is_valid_stem(candidate) {
            return Err(RejectReason::NoVowel);
        }
        Ok(())
    }

    fn reject(&self, token: &str, rule: &Rule, candidate: &str, reason: RejectReason) {
        self.tracer.record(TraceEvent::CandidateRejected {
            token: token.to_string(),
            rule: rule.index(),
            candidate: candidate.to_string(),
            reason,
        });
    }
}

impl Stemmer for StemEngine {
    fn stem(&self, word: &str) -> String {
        StemEngine::stem(self, word)
    }

    fn name(&self) -> &'static str {
        "croatian"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stemmer::trace::CollectingTracer;

    fn engine(source: &str) -> StemEngine {
        StemEngine::new(Arc::new(RuleTable::parse(source)))
    }

    #[test]
    fn test_first_accepted_rule_wins() {
        let preferred = engine(".+k a|i\n.+ ka|i\n");
        assert_eq!(preferred.stem("svakojaka"), "svakojak");

        let reversed = engine(".+ ka|i\n.+k a|i\n");
        assert_eq!(reversed.stem("svakojaka"), "svakoja");
    }

    #[test]
    fn test_rejected_candidate_falls_through_to_next_rule() {
        // ".+j" leaves "nj" (no vowel), ".+" leaves "njo".
        let engine = engine(".+j oj\n.+ j\n");
        let outcome = engine.stem_detailed("njoj");

        assert_eq!(outcome.stem, "njo");
        assert_eq!(outcome.rule, Some(1));
    }

    #[test]
    fn test_no_accepted_rule_returns_lowercased_token() {
        let engine = engine(".+j oj\n");
        let outcome = engine.stem_detailed("NJOJ");

        assert_eq!(outcome.input, "NJOJ");
        assert_eq!(outcome.stem, "njoj");
        assert_eq!(outcome.rule, None);
    }

    #[test]
    fn test_single_character_stem_is_rejected() {
        let engine = engine(". e|a\n");
        assert_eq!(engine.stem("je"), "je");
        assert_eq!(engine.stem("Da"), "da");
    }

    #[test]
    fn test_stem_length_counts_characters_not_bytes() {
        // "č" is two bytes but one character.
        let engine = engine(".+ a\n");
        assert_eq!(engine.stem("ča"), "ča");
    }

    #[test]
    fn test_syllabic_r_stem_is_accepted() {
        let engine = engine(".+ om|a\n");
        assert_eq!(engine.stem("trgom"), "trg");
    }

    #[test]
    fn test_empty_and_single_character_tokens() {
        let engine = StemEngine::new(Arc::new(RuleTable::bundled()));
        assert_eq!(engine.stem(""), "");
        assert_eq!(engine.stem("s"), "s");
        assert_eq!(engine.stem("S"), "s");
    }

    #[test]
    fn test_empty_table_keeps_tokens() {
        let engine = engine("");
        assert_eq!(engine.stem("Šuma"), "šuma");
    }

    #[test]
    fn test_trace_events() {
        let tracer = Arc::new(CollectingTracer::new());
        let rules = Arc::new(RuleTable::parse(".+j oj\n.+ j\n"));
        let engine = StemEngine::with_tracer(rules, tracer.clone());

        assert_eq!(engine.stem("Njoj"), "njo");

        let events = tracer.events();
        assert_eq!(events.len(), 4);
        assert!(matches!(
            &events[0],
            TraceEvent::RuleMatched { rule: 0, candidate, .. } if candidate == "nj"
        ));
        assert!(matches!(
            &events[1],
            TraceEvent::CandidateRejected {
                rule: 0,
                reason: RejectReason::NoVowel,
                ..
            }
        ));
        assert!(matches!(&events[2], TraceEvent::RuleMatched { rule: 1, .. }));
        assert!(matches!(&events[3], TraceEvent::CandidateAccepted { stem, .. } if stem == "njo"));
    }

    #[test]
    fn test_tracing_does_not_change_result() {
        let rules = Arc::new(RuleTable::bundled());
        let plain = StemEngine::new(rules.clone());
        let traced = StemEngine::with_tracer(rules, Arc::new(CollectingTracer::new()));

        for word in ["Striborovu", "začarana", "njoj", "je", "trgom", ""] {
            assert_eq!(plain.stem(word), traced.stem(word));
        }
    }

    #[test]
    fn test_stemmer_trait() {
        let engine = engine(".+m u|a\n");
        let stemmer: &dyn Stemmer = &engine;
        assert_eq!(stemmer.stem("šumu"), "šum");
        assert_eq!(stemmer.name(), "croatian");
    }
}
