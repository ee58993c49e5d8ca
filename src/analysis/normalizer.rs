//! Turkish-aware case folding.
//!
//! Generic Unicode lowercasing gets two Turkish letters wrong: it maps `I` to
//! `i` (Turkish wants dotless `ı`) and `İ` to `i̇` (an `i` followed by a
//! combining dot). The normalizer applies the Turkish mapping for those two
//! letters and generic lowercasing for everything else.
//!
//! | lowercase | handle_turkish_i | behavior |
//! |---|---|---|
//! | false | false | identity |
//! | false | true | only `İ→i`, `I→ı` |
//! | true | false | generic lowercase (`I→i`) |
//! | true | true | full Turkish fold |
//!
//! Every mode maps one character to exactly one character, so character
//! offsets computed on the raw text stay valid on the normalized text.
//!
//! # Examples
//!
//! ```
//! use durak::analysis::normalizer::normalize;
//!
//! assert_eq!(normalize("İSTANBUL", true, true), "istanbul");
//! assert_eq!(normalize("IĞDIR", true, true), "ığdır");
//! assert_eq!(normalize("İSTANBUL", false, true), "iSTANBUL");
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for [`TurkishNormalizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Lowercase the text.
    pub lowercase: bool,

    /// Apply the Turkish dotted/dotless I mapping.
    pub handle_turkish_i: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            handle_turkish_i: true,
        }
    }
}

/// Normalizer holding a fixed mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TurkishNormalizer {
    config: NormalizerConfig,
}

impl TurkishNormalizer {
    /// Create a normalizer with the given configuration.
    pub fn new(config: NormalizerConfig) -> Self {
        TurkishNormalizer { config }
    }

    /// Normalize `text` according to the configured mode.
    pub fn normalize(&self, text: &str) -> String {
        normalize(text, self.config.lowercase, self.config.handle_turkish_i)
    }
}

/// Normalize `text` in a single pass.
pub fn normalize(text: &str, lowercase: bool, handle_turkish_i: bool) -> String {
    match (lowercase, handle_turkish_i) {
        (false, false) => text.to_string(),
        (false, true) => text
            .chars()
            .map(|c| match c {
                'İ' => 'i',
                'I' => 'ı',
                _ => c,
            })
            .collect(),
        (true, false) => {
            if text.is_ascii() {
                return text.to_ascii_lowercase();
            }
            fold(text, 'i')
        }
        (true, true) => fold(text, 'ı'),
    }
}

/// Full Turkish fold: `İ→i`, `I→ı`, everything else generic-lowercased.
pub fn turkish_lowercase(text: &str) -> String {
    normalize(text, true, true)
}

/// Lowercase with `capital_i` as the image of `I`. `İ` always becomes a plain
/// `i` so no combining dot is introduced.
fn fold(text: &str, capital_i: char) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            'İ' => out.push('i'),
            'I' => out.push(capital_i),
            c if c.is_lowercase() || !c.is_alphabetic() => out.push(c),
            c => out.extend(c.to_lowercase()),
        }
    }
    out
}
