//! Tiered lemmatization engine.
//!
//! The strategy is fixed at construction. The engine only holds immutable
//! shared resources plus atomic counters, so one instance can serve many
//! threads without locking.
//!
//! # Examples
//!
//! ```
//! use durak::analysis::lemma::engine::{LemmaEngine, LemmaEngineConfig};
//!
//! let engine = LemmaEngine::turkish(LemmaEngineConfig::default()).unwrap();
//! assert_eq!(engine.lemmatize("kitaplar"), "kitap");
//! assert_eq!(engine.lemmatize("masalardan"), "masa");
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::lemma::Lemmatizer;
use crate::analysis::lemma::dictionary::LemmaDictionary;
use crate::analysis::lemma::metrics::{LemmaMetrics, MetricsSnapshot};
use crate::analysis::morphology::catalog::SuffixCatalog;
use crate::analysis::morphology::stripper::{StripperConfig, SuffixStripper};
use crate::error::{DurakError, Result};

/// How the engine resolves a word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LemmaStrategy {
    /// Dictionary only; a miss returns the word unchanged.
    Lookup,
    /// Suffix stripping only.
    Heuristic,
    /// Dictionary first, suffix stripping on a miss.
    #[default]
    Hybrid,
}

impl LemmaStrategy {
    /// Lowercase name, as accepted by `FromStr`.
    pub fn as_str(&self) -> &'static str {
        match self {
            LemmaStrategy::Lookup => "lookup",
            LemmaStrategy::Heuristic => "heuristic",
            LemmaStrategy::Hybrid => "hybrid",
        }
    }

    fn uses_dictionary(self) -> bool {
        self != LemmaStrategy::Heuristic
    }
}

impl fmt::Display for LemmaStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LemmaStrategy {
    type Err = DurakError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lookup" => Ok(LemmaStrategy::Lookup),
            "heuristic" => Ok(LemmaStrategy::Heuristic),
            "hybrid" => Ok(LemmaStrategy::Hybrid),
            other => Err(DurakError::configuration(format!(
                "unknown lemmatization strategy '{other}', expected lookup, heuristic or hybrid"
            ))),
        }
    }
}

/// Configuration for [`LemmaEngine`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LemmaEngineConfig {
    pub strategy: LemmaStrategy,

    /// Settings for the suffix-stripping tier.
    pub stripper: StripperConfig,

    /// Collect call counts and timings.
    pub collect_metrics: bool,
}

impl LemmaEngineConfig {
    /// Default configuration with the given strategy.
    pub fn with_strategy(strategy: LemmaStrategy) -> Self {
        LemmaEngineConfig {
            strategy,
            ..Self::default()
        }
    }
}

/// Lemmatizer combining a [`LemmaDictionary`] and a [`SuffixStripper`].
#[derive(Debug)]
pub struct LemmaEngine {
    strategy: LemmaStrategy,
    dictionary: Arc<LemmaDictionary>,
    stripper: SuffixStripper,
    metrics: Option<LemmaMetrics>,
}

impl LemmaEngine {
    /// Build an engine over explicitly supplied resources.
    pub fn new(
        config: LemmaEngineConfig,
        dictionary: Arc<LemmaDictionary>,
        catalog: Arc<SuffixCatalog>,
    ) -> Result<Self> {
        let stripper =
            SuffixStripper::new(catalog, config.stripper)?.with_dictionary(Arc::clone(&dictionary));

        log::debug!(
            "Created lemma engine: strategy={}, dictionary={} entries, catalog={} rules",
            config.strategy,
            dictionary.len(),
            stripper.catalog().len()
        );

        Ok(LemmaEngine {
            strategy: config.strategy,
            dictionary,
            stripper,
            metrics: config.collect_metrics.then(LemmaMetrics::new),
        })
    }

    /// Build an engine over the built-in dictionary and catalog.
    pub fn turkish(config: LemmaEngineConfig) -> Result<Self> {
        Self::new(config, LemmaDictionary::turkish(), SuffixCatalog::turkish())
    }

    /// The strategy fixed at construction.
    pub fn strategy(&self) -> LemmaStrategy {
        self.strategy
    }

    /// Lemmatize a single word. The empty string comes back unchanged.
    pub fn lemmatize(&self, word: &str) -> String {
        if word.is_empty() {
            return String::new();
        }

        match &self.metrics {
            Some(metrics) => {
                let start = Instant::now();
                let lemma = self.resolve(word, Some(metrics));
                metrics.record_call(start.elapsed());
                lemma
            }
            None => self.resolve(word, None),
        }
    }

    /// Lemmatize many words in parallel, preserving input order.
    pub fn lemmatize_batch<S>(&self, words: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        words
            .par_iter()
            .map(|word| self.lemmatize(word.as_ref()))
            .collect()
    }

    /// Snapshot of the collected metrics.
    pub fn metrics(&self) -> Result<MetricsSnapshot> {
        self.metrics
            .as_ref()
            .map(LemmaMetrics::snapshot)
            .ok_or_else(|| {
                DurakError::configuration(
                    "metrics collection not enabled, build the engine with collect_metrics = true",
                )
            })
    }

    /// Reset all counters. Does nothing when metrics are disabled.
    pub fn reset_metrics(&self) {
        if let Some(metrics) = &self.metrics {
            metrics.reset();
        }
    }

    fn resolve(&self, word: &str, metrics: Option<&LemmaMetrics>) -> String {
        if self.strategy.uses_dictionary() {
            let start = metrics.map(|_| Instant::now());
            let found = self.dictionary.lookup(word);
            if let (Some(metrics), Some(start)) = (metrics, start) {
                metrics.record_lookup(found.is_some(), start.elapsed());
            }

            if let Some(lemma) = found {
                return lemma.to_string();
            }
            if self.strategy == LemmaStrategy::Lookup {
                return word.to_string();
            }
        }

        let start = metrics.map(|_| Instant::now());
        let root = self.stripper.strip_suffixes(word);
        if let (Some(metrics), Some(start)) = (metrics, start) {
            metrics.record_heuristic(start.elapsed());
        }
        root
    }
}

impl Lemmatizer for LemmaEngine {
    fn lemmatize(&self, word: &str) -> String {
        LemmaEngine::lemmatize(self, word)
    }

    fn name(&self) -> &'static str {
        "lemma_engine"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(strategy: LemmaStrategy) -> LemmaEngine {
        LemmaEngine::turkish(LemmaEngineConfig::with_strategy(strategy)).unwrap()
    }

    #[test]
    fn test_lookup_strategy() {
        let engine = engine(LemmaStrategy::Lookup);
        assert_eq!(engine.strategy(), LemmaStrategy::Lookup);
        assert_eq!(engine.lemmatize("kitaplar"), "kitap");
        assert_eq!(engine.lemmatize("masalar"), "masalar");
    }

    #[test]
    fn test_heuristic_strategy() {
        let engine = engine(LemmaStrategy::Heuristic);
        assert_eq!(engine.lemmatize("masalar"), "masa");
        // the heuristic over-strips where the dictionary knows better
        assert_eq!(engine.lemmatize("okuyor"), "ok");
    }

    #[test]
    fn test_hybrid_prefers_dictionary() {
        let engine = engine(LemmaStrategy::Hybrid);
        assert_eq!(engine.lemmatize("okuyor"), "oku");
        assert_eq!(engine.lemmatize("masalar"), "masa");
        assert_eq!(engine.lemmatize("kalem"), "kalem");
    }

    #[test]
    fn test_empty_word() {
        for strategy in [LemmaStrategy::Lookup, LemmaStrategy::Heuristic, LemmaStrategy::Hybrid] {
            assert_eq!(engine(strategy).lemmatize(""), "");
        }
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!("lookup".parse::<LemmaStrategy>().unwrap(), LemmaStrategy::Lookup);
        assert_eq!(" Hybrid ".parse::<LemmaStrategy>().unwrap(), LemmaStrategy::Hybrid);
        let err = "fuzzy".parse::<LemmaStrategy>().unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_invalid_stripper_config() {
        let config = LemmaEngineConfig {
            stripper: StripperConfig {
                min_root_length: 0,
                ..StripperConfig::default()
            },
            ..LemmaEngineConfig::default()
        };
        assert!(LemmaEngine::turkish(config).unwrap_err().is_configuration());
    }

    #[test]
    fn test_metrics() {
        let engine = LemmaEngine::turkish(LemmaEngineConfig {
            collect_metrics: true,
            ..LemmaEngineConfig::default()
        })
        .unwrap();

        engine.lemmatize("kitaplar");
        engine.lemmatize("masalar");
        engine.lemmatize("");

        let metrics = engine.metrics().unwrap();
        assert_eq!(metrics.total_calls, 2);
        assert_eq!(metrics.lookup_hits, 1);
        assert_eq!(metrics.lookup_misses, 1);
        assert_eq!(metrics.heuristic_calls, 1);
        assert_eq!(metrics.cache_hit_rate(), 0.5);

        engine.reset_metrics();
        assert_eq!(engine.metrics().unwrap().total_calls, 0);
    }

    #[test]
    fn test_metrics_disabled() {
        let engine = engine(LemmaStrategy::Hybrid);
        assert!(engine.metrics().unwrap_err().is_configuration());
        engine.reset_metrics();
    }

    #[test]
    fn test_batch_preserves_order() {
        let engine = engine(LemmaStrategy::Hybrid);
        let lemmas = engine.lemmatize_batch(&["kitaplar", "evlerden", "", "geliyorum"]);
        assert_eq!(lemmas, vec!["kitap", "ev", "", "gel"]);
    }

    #[test]
    fn test_shared_across_threads() {
        let engine = Arc::new(LemmaEngine::turkish(LemmaEngineConfig {
            collect_metrics: true,
            ..LemmaEngineConfig::default()
        })
        .unwrap());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = Arc::clone(&engine);
                std::thread::spawn(move || engine.lemmatize("evlerden"))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "ev");
        }
        assert_eq!(engine.metrics().unwrap().total_calls, 4);
    }

    #[test]
    fn test_config_serde() {
        let config: LemmaEngineConfig =
            serde_json::from_str(r#"{"strategy":"heuristic","stripper":{"strict":true}}"#).unwrap();
        assert_eq!(config.strategy, LemmaStrategy::Heuristic);
        assert!(config.stripper.strict);
        assert_eq!(config.stripper.min_root_length, 2);
        assert!(!config.collect_metrics);
    }
}
