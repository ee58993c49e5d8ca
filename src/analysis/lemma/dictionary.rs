//! Exact-match inflected form to lemma table.

use std::sync::{Arc, LazyLock};

use ahash::{AHashMap, AHashSet};

use crate::analysis::normalizer::turkish_lowercase;
use crate::error::{DurakError, Result};

/// Seed entries shipped with the crate.
const TURKISH_SEED: &[(&str, &str)] = &[
    ("kitaplar", "kitap"),
    ("kitabı", "kitap"),
    ("kitabım", "kitap"),
    ("geliyorum", "gel"),
    ("geldi", "gel"),
    ("gittim", "git"),
    ("gitti", "git"),
    ("gidiyor", "git"),
    ("gidiyorum", "git"),
    ("ağaçlar", "ağaç"),
    ("ağacı", "ağaç"),
    ("çocuklar", "çocuk"),
    ("çocuğu", "çocuk"),
    ("yapıyor", "yap"),
    ("yapıyorum", "yap"),
    ("okuyor", "oku"),
    ("okuyorum", "oku"),
    ("okudum", "oku"),
    ("evler", "ev"),
];

static TURKISH_DICTIONARY: LazyLock<Arc<LemmaDictionary>> = LazyLock::new(|| {
    let mut dictionary = LemmaDictionary::new();
    for (form, lemma) in TURKISH_SEED {
        dictionary.entries.insert(form.to_string(), lemma.to_string());
        dictionary.lemmas.insert(lemma.to_string());
    }
    Arc::new(dictionary)
});

/// Immutable surface-form to lemma mapping.
///
/// Keys are stored Turkish-folded. Lookups try the word as given first and
/// then its folded form, so `Kitaplar` and `KİTAPLAR` both resolve.
#[derive(Debug, Clone, Default)]
pub struct LemmaDictionary {
    entries: AHashMap<String, String>,
    lemmas: AHashSet<String>,
}

impl LemmaDictionary {
    /// Create an empty dictionary. It misses on every lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from pre-parsed `(form, lemma)` pairs.
    ///
    /// Repeating a pair is allowed. Mapping one form to two different lemmas,
    /// or an empty form or lemma, is a resource error.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut dictionary = Self::new();
        for (form, lemma) in pairs {
            let form = turkish_lowercase(form.as_ref().trim());
            let lemma = lemma.as_ref().trim();
            if form.is_empty() || lemma.is_empty() {
                return Err(DurakError::resource(format!(
                    "dictionary entry '{form}' -> '{lemma}' has an empty side"
                )));
            }

            if let Some(existing) = dictionary.entries.get(&form) {
                if existing != lemma {
                    return Err(DurakError::resource(format!(
                        "conflicting lemmas for '{form}': '{existing}' and '{lemma}'"
                    )));
                }
                continue;
            }

            dictionary.lemmas.insert(lemma.to_string());
            dictionary.entries.insert(form, lemma.to_string());
        }

        log::debug!("Built lemma dictionary with {} entries", dictionary.len());
        Ok(dictionary)
    }

    /// Shared handle to the built-in seed dictionary.
    pub fn turkish() -> Arc<LemmaDictionary> {
        Arc::clone(&TURKISH_DICTIONARY)
    }

    /// Look up the lemma of `word`.
    pub fn lookup(&self, word: &str) -> Option<&str> {
        if let Some(lemma) = self.entries.get(word) {
            return Some(lemma.as_str());
        }
        self.entries.get(&turkish_lowercase(word)).map(String::as_str)
    }

    /// Whether `word` is a known form or a known lemma.
    pub fn contains_entry(&self, word: &str) -> bool {
        if self.entries.contains_key(word) || self.lemmas.contains(word) {
            return true;
        }
        let folded = turkish_lowercase(word);
        self.entries.contains_key(&folded) || self.lemmas.contains(&folded)
    }

    /// Number of forms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no forms.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
