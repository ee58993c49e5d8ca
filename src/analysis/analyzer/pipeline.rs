//! Turkish analysis pipeline.
//!
//! The pipeline runs the tokenizer on the raw text and then applies each
//! filter in the order it was added. Offsets always index the raw text:
//! normalization happens per token, after tokenization.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use durak::analysis::analyzer::Analyzer;
//! use durak::analysis::analyzer::pipeline::TurkishAnalyzer;
//! use durak::analysis::lemma::engine::{LemmaEngine, LemmaEngineConfig};
//!
//! let engine = Arc::new(LemmaEngine::turkish(LemmaEngineConfig::default()).unwrap());
//! let analyzer = TurkishAnalyzer::lemmatizing(engine).unwrap();
//! let tokens: Vec<_> = analyzer.analyze("KİTAPLAR Ankara ' da").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "kitap");
//! assert_eq!(tokens[1].text, "ankara");
//! assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (9, 20));
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::lemma::engine::LemmaEngine;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::lemma::LemmaFilter;
use crate::analysis::token_filter::lowercase::TurkishLowercaseFilter;
use crate::analysis::token_filter::reattach::SuffixReattacher;
use crate::analysis::tokenizer::{Tokenizer, TurkishTokenizer};
use crate::error::Result;

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct TurkishAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
}

impl TurkishAnalyzer {
    /// Create an analyzer with no filters.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        TurkishAnalyzer {
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Tokenize, reattach split clitics and fold case.
    pub fn standard() -> Result<Self> {
        Ok(Self::new(Arc::new(TurkishTokenizer::new()?))
            .add_filter(Arc::new(SuffixReattacher::new()))
            .add_filter(Arc::new(TurkishLowercaseFilter::new())))
    }

    /// The standard pipeline followed by lemmatization.
    pub fn lemmatizing(engine: Arc<LemmaEngine>) -> Result<Self> {
        Ok(Self::standard()?.add_filter(Arc::new(LemmaFilter::new(engine))))
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Filters in the order they run.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    /// Analyze `text` and collect the tokens.
    pub fn analyze_to_vec(&self, text: &str) -> Result<Vec<Token>> {
        Ok(self.analyze(text)?.collect())
    }
}

impl Analyzer for TurkishAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }
        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "turkish"
    }
}

impl std::fmt::Debug for TurkishAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TurkishAnalyzer")
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::lemma::engine::LemmaEngineConfig;
    use crate::analysis::token::TokenType;

    #[test]
    fn test_bare_tokenizer() {
        let analyzer = TurkishAnalyzer::new(Arc::new(TurkishTokenizer::default()));
        let tokens = analyzer.analyze_to_vec("Ankara ' da").unwrap();
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_standard_pipeline() {
        let analyzer = TurkishAnalyzer::standard().unwrap();
        let raw = "IĞDIR ' a gittik :D";
        let tokens = analyzer.analyze_to_vec(raw).unwrap();

        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["ığdır'a", "gittik", ":D"]);
        assert_eq!(tokens[0].token_type, TokenType::Clitic);
        assert_eq!(tokens[0].source_text(raw), "IĞDIR ' a");
    }

    #[test]
    fn test_lemmatizing_pipeline() {
        let engine = Arc::new(LemmaEngine::turkish(LemmaEngineConfig::default()).unwrap());
        let analyzer = TurkishAnalyzer::lemmatizing(engine).unwrap();
        let tokens = analyzer.analyze_to_vec("Evlerden geliyorum.").unwrap();

        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["ev", "gel", "."]);
    }

    #[test]
    fn test_empty_input() {
        let analyzer = TurkishAnalyzer::standard().unwrap();
        assert!(analyzer.analyze_to_vec("").unwrap().is_empty());
        assert!(analyzer.analyze_to_vec("   \n\t").unwrap().is_empty());
    }

    #[test]
    fn test_debug_lists_steps() {
        let analyzer = TurkishAnalyzer::standard().unwrap();
        let debug = format!("{analyzer:?}");
        assert!(debug.contains("suffix_reattacher"));
        assert!(debug.contains("turkish_lowercase"));
        assert_eq!(analyzer.filters().len(), 2);
    }
}
