//! Lemmatization: dictionary lookup, suffix-stripping fallback and the
//! engine that combines them.

pub mod dictionary;
pub mod engine;
pub mod metrics;

pub use dictionary::LemmaDictionary;
pub use engine::{LemmaEngine, LemmaEngineConfig, LemmaStrategy};
pub use metrics::MetricsSnapshot;

/// Trait for reducing a word to its lemma.
pub trait Lemmatizer: Send + Sync {
    /// Reduce `word` to its lemma. Unknown words come back unchanged or
    /// heuristically stripped, never as an error.
    fn lemmatize(&self, word: &str) -> String;

    /// Get the name of this lemmatizer.
    fn name(&self) -> &'static str;
}

impl Lemmatizer for LemmaDictionary {
    fn lemmatize(&self, word: &str) -> String {
        self.lookup(word).unwrap_or(word).to_string()
    }

    fn name(&self) -> &'static str {
        "dictionary"
    }
}
