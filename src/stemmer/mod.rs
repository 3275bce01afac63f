//! Rule-based stemming for Croatian.
//!
//! [`StemmerHr`] owns an immutable [`RuleTable`] and [`StopwordSet`], both
//! loaded once at construction. After that every operation is a pure
//! function of its input, so one instance can be shared across threads.
//!
//! # Examples
//!
//! ```
//! use stemmer_hr::StemmerHr;
//!
//! let stemmer = StemmerHr::bundled();
//!
//! assert_eq!(stemmer.stem("Striborovu"), "striborov");
//! assert_eq!(
//!     stemmer.stem_text("Zašao neki momak u šumu"),
//!     vec!["zaša", "nek", "momak", "u", "šum"]
//! );
//!
//! // Localized aliases behave identically.
//! assert_eq!(stemmer.korjenuj("začarana"), "začaran");
//! ```

pub mod engine;
pub mod rule;
pub mod stopwords;
pub mod trace;
pub mod vowel;

use std::sync::Arc;

use log::debug;
use rayon::prelude::*;

use crate::analysis::analyzer::{Analyzer, CroatianAnalyzer};
use crate::config::{StemmerConfig, StopwordCase};
use crate::error::Result;

pub use engine::{StemEngine, StemOutcome};
pub use rule::{Rule, RuleTable, SkippedLine};
pub use stopwords::StopwordSet;
pub use trace::{CollectingTracer, LogTracer, NoopTracer, StemTracer, TraceEvent};
pub use vowel::VowelDetector;

/// Croatian stemmer: a stemming engine plus the text pipeline around it.
#[derive(Debug)]
pub struct StemmerHr {
    engine: Arc<StemEngine>,
    stopwords: Arc<StopwordSet>,
    analyzer: CroatianAnalyzer,
}

impl StemmerHr {
    /// Build a stemmer from the default configuration.
    ///
    /// Fails if `etc/rules_simple.txt` or `etc/stop.txt` is missing.
    pub fn new() -> Result<Self> {
        Self::with_config(StemmerConfig::default())
    }

    /// Build a stemmer from `config`.
    ///
    /// With `explain` set, decisions are logged through [`LogTracer`].
    pub fn with_config(config: StemmerConfig) -> Result<Self> {
        let tracer: Arc<dyn StemTracer> = if config.explain {
            Arc::new(LogTracer)
        } else {
            Arc::new(NoopTracer)
        };
        Self::with_tracer(config, tracer)
    }

    /// Build a stemmer from `config`, reporting decisions to `tracer`.
    pub fn with_tracer(config: StemmerConfig, tracer: Arc<dyn StemTracer>) -> Result<Self> {
        config.validate()?;
        let rules = RuleTable::from_path(config.rules_path())?;
        let stopwords = StopwordSet::from_path(config.stopwords_path(), config.stopword_case)?;
        debug!(
            "Stemmer ready: {} rules, {} stopwords",
            rules.len(),
            stopwords.len()
        );
        Ok(Self::from_parts(rules, stopwords, tracer))
    }

    /// Assemble a stemmer from already loaded tables.
    pub fn from_parts(
        rules: RuleTable,
        stopwords: StopwordSet,
        tracer: Arc<dyn StemTracer>,
    ) -> Self {
        let engine = Arc::new(StemEngine::with_tracer(Arc::new(rules), tracer));
        let stopwords = Arc::new(stopwords);
        let analyzer = CroatianAnalyzer::new(engine.clone(), stopwords.clone());

        StemmerHr {
            engine,
            stopwords,
            analyzer,
        }
    }

    /// Stemmer over the rule table and stopword list compiled into the crate.
    pub fn bundled() -> Self {
        Self::from_parts(
            RuleTable::bundled(),
            StopwordSet::bundled(StopwordCase::AsWritten),
            Arc::new(NoopTracer),
        )
    }

    /// Stem a single token. Never fails; unmatched tokens come back lower-cased.
    pub fn stem(&self, token: &str) -> String {
        self.engine.stem(token)
    }

    /// Stem a single token and report the rule that produced the stem.
    pub fn stem_detailed(&self, token: &str) -> StemOutcome {
        self.engine.stem_detailed(token)
    }

    /// Tokenize `text` and stem every token that is not a stopword.
    pub fn stem_text(&self, text: &str) -> Vec<String> {
        self.analyzer.analyze(text).map(|token| token.text).collect()
    }

    /// Stem many documents in parallel. Output order follows input order.
    pub fn stem_texts<S>(&self, texts: &[S]) -> Vec<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.stem_text(text.as_ref()))
            .collect()
    }

    /// Alias of [`stem`](Self::stem).
    pub fn korjenuj(&self, token: &str) -> String {
        self.stem(token)
    }

    /// Alias of [`stem_text`](Self::stem_text).
    pub fn korjenuj_tekst(&self, text: &str) -> Vec<String> {
        self.stem_text(text)
    }

    pub fn engine(&self) -> &StemEngine {
        &self.engine
    }

    pub fn rules(&self) -> &RuleTable {
        self.engine.rules()
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn analyzer(&self) -> &CroatianAnalyzer {
        &self.analyzer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_words_from_the_tale() {
        let stemmer = StemmerHr::bundled();

        let cases = [
            ("Zašao", "zaša"),
            ("neki", "nek"),
            ("momak", "momak"),
            ("u", "u"),
            ("šumu", "šum"),
            ("Striborovu", "striborov"),
            ("nije", "nij"),
            ("znao", "zna"),
            ("ono", "on"),
            ("začarana", "začaran"),
            ("njoj", "njoj"),
            ("svakojaka", "svakojak"),
            ("čuda", "čud"),
            ("zbivaju", "zbiva"),
            ("Zbivala", "zbiva"),
            ("dobra", "dobr"),
            ("ali", "al"),
            ("naopaka", "naopak"),
            ("svakome", "svak"),
            ("po", "po"),
            ("zasluzi", "zasluz"),
        ];

        for (word, expected) in cases {
            assert_eq!(stemmer.stem(word), expected, "stemming {word}");
        }
    }

    #[test]
    fn test_aliases_match_canonical_names() {
        let stemmer = StemmerHr::bundled();
        let text = "I lije na uglu petrolejska lampa";

        assert_eq!(stemmer.korjenuj("Balada"), stemmer.stem("Balada"));
        assert_eq!(stemmer.korjenuj_tekst(text), stemmer.stem_text(text));
        assert_eq!(
            stemmer.stem_text(text),
            vec!["i", "lij", "na", "ugl", "petrolejsk", "lamp"]
        );
    }

    #[test]
    fn test_stem_detailed_reports_rule() {
        let stemmer = StemmerHr::bundled();

        let outcome = stemmer.stem_detailed("Striborovu");
        assert_eq!(outcome.stem, "striborov");
        let rule = stemmer.rules().get(outcome.rule.unwrap()).unwrap();
        assert_eq!(rule.stem_pattern(), ".+ov");

        assert_eq!(stemmer.stem_detailed("njoj").rule, None);
    }

    #[test]
    fn test_stem_texts_preserves_order() {
        let stemmer = StemmerHr::bundled();
        let texts = vec!["šumu Striborovu", "", "Bio je to dobar čovjek"];

        let stems = stemmer.stem_texts(&texts);

        assert_eq!(stems.len(), 3);
        assert_eq!(stems[0], vec!["šum", "striborov"]);
        assert!(stems[1].is_empty());
        assert_eq!(stems[2], vec!["je", "to", "dobar", "čovjek"]);
    }

    #[test]
    fn test_explain_tracer_receives_stopword_events() {
        let tracer = Arc::new(CollectingTracer::new());
        let stemmer = StemmerHr::from_parts(
            RuleTable::bundled(),
            StopwordSet::bundled(StopwordCase::AsWritten),
            tracer.clone(),
        );

        stemmer.stem_text("biti");

        assert_eq!(
            tracer.events(),
            vec![TraceEvent::StopwordSkipped {
                token: "biti".to_string()
            }]
        );
    }
}
