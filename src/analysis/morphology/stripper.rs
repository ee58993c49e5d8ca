//! Greedy longest-suffix stripper.
//!
//! At each step the stripper takes the longest catalog suffix on the word's
//! tail that passes every gate, removes it and starts over on the remainder.
//! Gates run cheapest first: root length floor, vowel harmony, morphotactic
//! order. Strict mode adds a final dictionary check on the resulting root;
//! failing it rejects the whole strip.
//!
//! # Examples
//!
//! ```
//! use durak::analysis::morphology::stripper::strip_suffixes;
//!
//! assert_eq!(strip_suffixes("evlerden", false, 2, true).unwrap(), "ev");
//! assert_eq!(strip_suffixes("kitapler", false, 2, true).unwrap(), "kitapler");
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::lemma::Lemmatizer;
use crate::analysis::lemma::dictionary::LemmaDictionary;
use crate::analysis::morphology::catalog::{SuffixCatalog, SuffixRule};
use crate::analysis::morphology::morphotactics::{SuffixClass, is_valid_removal};
use crate::analysis::morphology::vowel_harmony::harmonizes_with;
use crate::analysis::normalizer::turkish_lowercase;
use crate::error::{DurakError, Result};

/// Configuration for [`SuffixStripper`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripperConfig {
    /// Only accept a strip whose final root is a dictionary entry.
    pub strict: bool,

    /// Shortest root (in characters) a strip may leave behind.
    pub min_root_length: usize,

    /// Require the root to harmonize with each removed suffix.
    pub check_harmony: bool,
}

impl Default for StripperConfig {
    fn default() -> Self {
        Self {
            strict: false,
            min_root_length: 2,
            check_harmony: true,
        }
    }
}

impl StripperConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.min_root_length == 0 {
            return Err(DurakError::configuration(
                "min_root_length must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Outcome of stripping a single word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripResult<'a> {
    /// The root. Equal to the input word when nothing was stripped.
    pub root: String,

    /// Removed suffixes, outermost first.
    pub consumed: Vec<&'a SuffixRule>,
}

impl StripResult<'_> {
    /// Whether at least one suffix was removed.
    pub fn is_stripped(&self) -> bool {
        !self.consumed.is_empty()
    }

    /// Classes of the removed suffixes in attachment order.
    pub fn attachment_order(&self) -> Vec<SuffixClass> {
        self.consumed.iter().rev().map(|rule| rule.class).collect()
    }
}

/// Suffix stripper over a shared catalog.
#[derive(Debug, Clone)]
pub struct SuffixStripper {
    catalog: Arc<SuffixCatalog>,
    dictionary: Option<Arc<LemmaDictionary>>,
    config: StripperConfig,
}

impl SuffixStripper {
    /// Create a stripper. Strict mode without a dictionary rejects every strip.
    pub fn new(catalog: Arc<SuffixCatalog>, config: StripperConfig) -> Result<Self> {
        config.validate()?;
        Ok(SuffixStripper {
            catalog,
            dictionary: None,
            config,
        })
    }

    /// Attach the dictionary consulted in strict mode.
    pub fn with_dictionary(mut self, dictionary: Arc<LemmaDictionary>) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    /// Stripper over the built-in catalog and seed dictionary.
    pub fn turkish(config: StripperConfig) -> Result<Self> {
        Ok(Self::new(SuffixCatalog::turkish(), config)?.with_dictionary(LemmaDictionary::turkish()))
    }

    /// The catalog this stripper draws candidates from.
    pub fn catalog(&self) -> &SuffixCatalog {
        &self.catalog
    }

    /// Strip `word` and report which suffixes were removed.
    pub fn strip<'a>(&'a self, word: &str) -> StripResult<'a> {
        let unchanged = || StripResult {
            root: word.to_string(),
            consumed: Vec::new(),
        };

        let folded = turkish_lowercase(word);
        let mut root = folded.as_str();
        let mut consumed: Vec<&'a SuffixRule> = Vec::new();
        let mut removed: Vec<SuffixClass> = Vec::new();

        while let Some(rule) = self.next_strip(root, &mut removed) {
            root = &root[..root.len() - rule.surface.len()];
            consumed.push(rule);
            log::trace!("{word}: stripped -{} ({}), root '{root}'", rule.surface, rule.class);
        }

        if consumed.is_empty() {
            return unchanged();
        }

        if self.config.strict {
            let known = self
                .dictionary
                .as_ref()
                .is_some_and(|dictionary| dictionary.contains_entry(root));
            if !known {
                log::trace!("{word}: root '{root}' not in dictionary, strip rejected");
                return unchanged();
            }
        }

        StripResult {
            root: root.to_string(),
            consumed,
        }
    }

    /// Strip `word` down to its root.
    pub fn strip_suffixes(&self, word: &str) -> String {
        self.strip(word).root
    }

    /// Find the first candidate on the tail of `root` that passes every gate.
    /// On success its class is appended to `removed`.
    fn next_strip<'a>(&'a self, root: &str, removed: &mut Vec<SuffixClass>) -> Option<&'a SuffixRule> {
        let root_len = root.chars().count();

        for rule in self.catalog.candidates(root) {
            let remaining = &root[..root.len() - rule.surface.len()];
            let floor = self.config.min_root_length.max(rule.min_root_length);
            if root_len - rule.char_len() < floor {
                continue;
            }

            if self.config.check_harmony && !harmonizes_with(remaining, &rule.surface, rule.harmony) {
                continue;
            }

            removed.push(rule.class);
            if is_valid_removal(removed) {
                return Some(rule);
            }
            removed.pop();
        }

        None
    }
}

impl Lemmatizer for SuffixStripper {
    fn lemmatize(&self, word: &str) -> String {
        self.strip_suffixes(word)
    }

    fn name(&self) -> &'static str {
        "suffix_stripper"
    }
}

/// Strip `word` with the built-in catalog. Strict mode consults the built-in
/// seed dictionary.
pub fn strip_suffixes(
    word: &str,
    strict: bool,
    min_root_length: usize,
    check_harmony: bool,
) -> Result<String> {
    let stripper = SuffixStripper::turkish(StripperConfig {
        strict,
        min_root_length,
        check_harmony,
    })?;
    Ok(stripper.strip_suffixes(word))
}
