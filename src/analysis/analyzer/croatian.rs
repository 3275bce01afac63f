//! Croatian analyzer: lower-case, split into word runs, drop stopwords, stem.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::LowercaseCharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::stem::StemFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::config::StopwordCase;
use crate::stemmer::engine::StemEngine;
use crate::stemmer::rule::RuleTable;
use crate::stemmer::stopwords::StopwordSet;
use crate::stemmer::trace::StemTracer;

pub struct CroatianAnalyzer {
    inner: PipelineAnalyzer,
}

impl CroatianAnalyzer {
    /// Build the pipeline around an engine and a stopword set.
    ///
    /// Skipped stopwords are reported to the engine's tracer.
    pub fn new(engine: Arc<StemEngine>, stopwords: Arc<StopwordSet>) -> Self {
        let tracer: Arc<dyn StemTracer> = engine.tracer().clone();
        let analyzer = PipelineAnalyzer::new(Arc::new(RegexTokenizer::default()))
            .add_char_filter(Arc::new(LowercaseCharFilter::new()))
            .add_filter(Arc::new(StopFilter::shared(stopwords).with_tracer(tracer)))
            .add_filter(Arc::new(StemFilter::new(engine)))
            .with_name("croatian");

        Self { inner: analyzer }
    }

    /// Analyzer over the bundled rule table and stopword list.
    pub fn bundled() -> Self {
        Self::new(
            Arc::new(StemEngine::new(Arc::new(RuleTable::bundled()))),
            Arc::new(StopwordSet::bundled(StopwordCase::AsWritten)),
        )
    }

    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Analyzer for CroatianAnalyzer {
    fn analyze(&self, text: &str) -> TokenStream {
        self.inner.analyze(text)
    }

    fn name(&self) -> &str {
        "croatian"
    }
}

impl Debug for CroatianAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CroatianAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_croatian_analyzer() {
        let analyzer = CroatianAnalyzer::bundled();

        let tokens: Vec<Token> = analyzer.analyze("Zašao neki momak u šumu").collect();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();

        assert_eq!(texts, vec!["zaša", "nek", "momak", "u", "šum"]);
        assert_eq!(tokens[4].position, 4);
    }

    #[test]
    fn test_stopwords_are_removed() {
        let analyzer = CroatianAnalyzer::bundled();

        let texts: Vec<String> = analyzer
            .analyze("Bio je to dobar čovjek, a htio je biti još bolji.")
            .map(|t| t.text)
            .collect();

        assert_eq!(
            texts,
            vec!["je", "to", "dobar", "čovjek", "a", "je", "još", "bolj"]
        );
    }

    #[test]
    fn test_croatian_analyzer_name() {
        assert_eq!(CroatianAnalyzer::bundled().name(), "croatian");
    }
}
