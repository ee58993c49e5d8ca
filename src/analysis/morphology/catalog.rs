//! Ordered suffix catalog.
//!
//! The catalog is built once and shared read-only behind an `Arc`. Rules are
//! kept in the order they were supplied; that order breaks ties between
//! candidates of equal length.

use std::cmp::Reverse;
use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

use crate::analysis::morphology::morphotactics::SuffixClass;
use crate::analysis::morphology::vowel_harmony::HarmonyTemplate;
use crate::error::{DurakError, Result};

/// A single strippable suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixRule {
    /// Surface form, lowercase.
    pub surface: String,

    /// Harmony pattern of the suffix vowel.
    pub harmony: HarmonyTemplate,

    /// Morphotactic class.
    pub class: SuffixClass,

    /// Minimum root length (in characters) this suffix may leave behind.
    #[serde(default)]
    pub min_root_length: usize,
}

impl SuffixRule {
    /// Create a rule with no floor of its own.
    pub fn new(surface: impl Into<String>, harmony: HarmonyTemplate, class: SuffixClass) -> Self {
        SuffixRule {
            surface: surface.into(),
            harmony,
            class,
            min_root_length: 0,
        }
    }

    /// Require at least `min_root_length` characters before this suffix.
    /// The stripper applies the larger of this and its own floor.
    pub fn with_min_root_length(mut self, min_root_length: usize) -> Self {
        self.min_root_length = min_root_length;
        self
    }

    /// Length of the surface form in characters.
    pub fn char_len(&self) -> usize {
        self.surface.chars().count()
    }
}

use HarmonyTemplate::{FourWay, Invariant, TwoWay};
use SuffixClass::{
    Case, Clitic, Derivational, Negation, Person, Plural, Possessive, TenseAspect,
};

/// Built-in rule table: (surfaces, harmony, class, min root length).
const TURKISH_RULES: &[(&[&str], HarmonyTemplate, SuffixClass, usize)] = &[
    // plural
    (&["lar", "ler"], TwoWay, Plural, 0),
    // case
    (&["da", "de", "ta", "te"], TwoWay, Case, 0),
    (&["dan", "den", "tan", "ten"], TwoWay, Case, 0),
    (&["ya", "ye"], TwoWay, Case, 3),
    (&["nın", "nin", "nun", "nün"], FourWay, Case, 0),
    (&["la", "le", "yla", "yle"], TwoWay, Case, 3),
    // possessive
    (&["ımız", "imiz", "umuz", "ümüz"], FourWay, Possessive, 0),
    (&["ınız", "iniz", "unuz", "ünüz"], FourWay, Possessive, 0),
    (&["sı", "si", "su", "sü"], FourWay, Possessive, 3),
    // person and copula
    (&["um", "üm"], FourWay, Person, 3),
    (&["sun", "sün", "sın", "sin"], FourWay, Person, 3),
    (&["sunuz", "sünüz", "sınız", "siniz"], FourWay, Person, 0),
    (
        &["dır", "dir", "dur", "dür", "tır", "tir", "tur", "tür"],
        FourWay,
        Person,
        0,
    ),
    // tense, aspect, mood, infinitive
    (
        &["dı", "di", "du", "dü", "tı", "ti", "tu", "tü"],
        FourWay,
        TenseAspect,
        0,
    ),
    (
        &["dım", "dim", "dum", "düm", "tım", "tim", "tum", "tüm"],
        FourWay,
        TenseAspect,
        0,
    ),
    (
        &["dık", "dik", "duk", "dük", "tık", "tik", "tuk", "tük"],
        FourWay,
        TenseAspect,
        0,
    ),
    (&["ıyor", "iyor", "uyor", "üyor"], FourWay, TenseAspect, 0),
    (&["yor"], Invariant, TenseAspect, 0),
    (&["acak", "ecek", "yacak", "yecek"], TwoWay, TenseAspect, 0),
    (&["mış", "miş", "muş", "müş"], FourWay, TenseAspect, 0),
    (&["malı", "meli"], TwoWay, TenseAspect, 0),
    (&["mak", "mek"], TwoWay, TenseAspect, 0),
    // negation
    (&["ma", "me"], TwoWay, Negation, 3),
    // derivational
    (&["lık", "lik", "luk", "lük"], FourWay, Derivational, 0),
    (&["sız", "siz", "suz", "süz"], FourWay, Derivational, 0),
    (&["lı", "li", "lu", "lü"], FourWay, Derivational, 3),
    (&["cı", "ci", "cu", "cü", "çı", "çi", "çu", "çü"], FourWay, Derivational, 3),
    // relative clitic
    (&["ki"], Invariant, Clitic, 3),
];

static TURKISH_CATALOG: LazyLock<Arc<SuffixCatalog>> =
    LazyLock::new(|| Arc::new(SuffixCatalog::from_ordered(default_rules())));

fn default_rules() -> Vec<SuffixRule> {
    TURKISH_RULES
        .iter()
        .flat_map(|(surfaces, harmony, class, min_root_length)| {
            surfaces.iter().map(move |surface| {
                SuffixRule::new(*surface, *harmony, *class).with_min_root_length(*min_root_length)
            })
        })
        .collect()
}

/// Immutable, ordered set of suffix rules.
#[derive(Debug, Clone, Default)]
pub struct SuffixCatalog {
    rules: Vec<SuffixRule>,
    /// Rule indices ordered by surface length (descending), then catalog order.
    by_length: Vec<usize>,
}

impl SuffixCatalog {
    /// Build a catalog from pre-parsed rules.
    ///
    /// Surfaces are lowercased; an empty surface is a resource error.
    pub fn new(rules: Vec<SuffixRule>) -> Result<Self> {
        let mut rules = rules;
        for (index, rule) in rules.iter_mut().enumerate() {
            let surface = rule.surface.trim();
            if surface.is_empty() {
                return Err(DurakError::resource(format!(
                    "suffix rule {index} has an empty surface form"
                )));
            }
            rule.surface = crate::analysis::normalizer::turkish_lowercase(surface);
        }

        let catalog = Self::from_ordered(rules);
        log::debug!("Built suffix catalog with {} rules", catalog.len());
        Ok(catalog)
    }

    /// A catalog that never matches.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Shared handle to the built-in Turkish catalog.
    pub fn turkish() -> Arc<SuffixCatalog> {
        Arc::clone(&TURKISH_CATALOG)
    }

    fn from_ordered(rules: Vec<SuffixRule>) -> Self {
        let mut by_length: Vec<usize> = (0..rules.len()).collect();
        by_length.sort_by_key(|&index| (Reverse(rules[index].char_len()), index));
        SuffixCatalog { rules, by_length }
    }

    /// Rules matching the tail of `word`, longest first, ties in catalog order.
    ///
    /// A rule whose surface equals the whole word is not a candidate.
    pub fn candidates<'a>(&'a self, word: &str) -> impl Iterator<Item = &'a SuffixRule> {
        self.by_length
            .iter()
            .map(move |&index| &self.rules[index])
            .filter(move |rule| rule.surface.len() < word.len() && word.ends_with(&rule.surface))
    }

    /// Rules in catalog order.
    pub fn rules(&self) -> &[SuffixRule] {
        &self.rules
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the catalog has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
