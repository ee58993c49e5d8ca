//! Detached suffix reattachment.
//!
//! Noisy text often splits a clitic from its host with whitespace:
//! `Ankara ' da` instead of `Ankara'da`. The tokenizer leaves those as three
//! tokens; this filter merges them back when the trailing piece is a known
//! suffix and the pieces sit at most one character apart in the raw text.
//!
//! # Examples
//!
//! ```
//! use durak::analysis::token_filter::reattach::SuffixReattacher;
//! use durak::analysis::tokenizer::TurkishTokenizer;
//!
//! let tokens = TurkishTokenizer::default().tokenize_with_offsets("Ankara ' da kaldım");
//! let merged = SuffixReattacher::new().reattach(tokens);
//!
//! assert_eq!(merged[0].text, "Ankara'da");
//! assert_eq!((merged[0].start_offset, merged[0].end_offset), (0, 11));
//! assert_eq!(merged[1].text, "kaldım");
//! ```

use std::sync::{Arc, LazyLock};

use ahash::AHashSet;

use crate::analysis::normalizer::turkish_lowercase;
use crate::analysis::token::{IntoTokenStream, Token, TokenStream, TokenType};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Suffixes commonly found split from their host.
const DEFAULT_DETACHED_SUFFIXES: &[&str] = &[
    // locative and ablative
    "da", "de", "ta", "te", "dan", "den", "tan", "ten",
    // dative and accusative
    "a", "e", "ya", "ye", "ı", "i", "u", "ü", "yı", "yi", "yu", "yü",
    // genitive
    "ın", "in", "un", "ün", "nın", "nin", "nun", "nün",
    // instrumental
    "la", "le", "yla", "yle",
    // plural
    "lar", "ler",
    // relative
    "daki", "deki", "taki", "teki", "ki",
    // copula
    "dır", "dir", "dur", "dür", "tır", "tir", "tur", "tür",
];

/// Default detached-suffix vocabulary as a set.
pub static DEFAULT_DETACHED_SUFFIX_SET: LazyLock<AHashSet<String>> = LazyLock::new(|| {
    DEFAULT_DETACHED_SUFFIXES
        .iter()
        .map(|s| s.to_string())
        .collect()
});

/// Largest raw-text gap, in characters, allowed between merged pieces.
const MAX_GAP: usize = 1;

/// A filter that merges `host ' suffix` sequences into one clitic token.
#[derive(Clone, Debug)]
pub struct SuffixReattacher {
    suffixes: Arc<AHashSet<String>>,
    allow_bare: bool,
}

impl Default for SuffixReattacher {
    fn default() -> Self {
        Self::new()
    }
}

impl SuffixReattacher {
    /// Create a reattacher over the default vocabulary.
    pub fn new() -> Self {
        SuffixReattacher {
            suffixes: Arc::new(DEFAULT_DETACHED_SUFFIX_SET.clone()),
            allow_bare: false,
        }
    }

    /// Create a reattacher over a caller-supplied vocabulary.
    pub fn with_suffixes<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let suffixes: AHashSet<String> = suffixes
            .into_iter()
            .map(|s| turkish_lowercase(s.as_ref().trim()))
            .filter(|s| !s.is_empty())
            .collect();
        SuffixReattacher {
            suffixes: Arc::new(suffixes),
            allow_bare: false,
        }
    }

    /// Also merge `host suffix` with a single space and no apostrophe
    /// (`Ankara da` → `Ankarada`). Off by default: `da`/`de` are also a
    /// standalone conjunction.
    pub fn allow_bare(mut self, allow_bare: bool) -> Self {
        self.allow_bare = allow_bare;
        self
    }

    /// Check whether `text` (case-folded) is in the suffix vocabulary.
    pub fn is_known_suffix(&self, text: &str) -> bool {
        self.suffixes.contains(&turkish_lowercase(text))
    }

    /// Merge split clitics and renumber positions.
    pub fn reattach(&self, tokens: Vec<Token>) -> Vec<Token> {
        let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
        let mut i = 0;

        while i < tokens.len() {
            if let [host, apostrophe, suffix, ..] = &tokens[i..] {
                if is_host(host)
                    && is_apostrophe(apostrophe)
                    && self.is_suffix_token(suffix)
                    && gap(host, apostrophe) <= MAX_GAP
                    && gap(apostrophe, suffix) <= MAX_GAP
                {
                    out.push(merge(&[host, apostrophe, suffix], TokenType::Clitic));
                    i += 3;
                    continue;
                }
            }

            if self.allow_bare {
                if let [host, suffix, ..] = &tokens[i..] {
                    if is_host(host) && self.is_suffix_token(suffix) && gap(host, suffix) == 1 {
                        out.push(merge(&[host, suffix], host.token_type));
                        i += 2;
                        continue;
                    }
                }
            }

            out.push(tokens[i].clone());
            i += 1;
        }

        for (position, token) in out.iter_mut().enumerate() {
            token.position = position;
        }
        out
    }

    fn is_suffix_token(&self, token: &Token) -> bool {
        token.token_type == TokenType::Word && self.is_known_suffix(&token.text)
    }
}

fn is_host(token: &Token) -> bool {
    matches!(token.token_type, TokenType::Word | TokenType::Compound)
        && token.text.chars().next().is_some_and(char::is_alphabetic)
}

fn is_apostrophe(token: &Token) -> bool {
    token.token_type == TokenType::Punctuation && matches!(token.text.as_str(), "'" | "’")
}

/// Raw-text characters between `left` and `right`.
fn gap(left: &Token, right: &Token) -> usize {
    right.start_offset.saturating_sub(left.end_offset)
}

fn merge(parts: &[&Token], token_type: TokenType) -> Token {
    let text: String = parts.iter().map(|token| token.text.as_str()).collect();
    let first = parts[0];
    let last = parts[parts.len() - 1];
    Token::with_offsets(text, first.position, first.start_offset, last.end_offset)
        .with_token_type(token_type)
}

impl Filter for SuffixReattacher {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let tokens: Vec<Token> = tokens.collect();
        Ok(self.reattach(tokens).into_token_stream())
    }

    fn name(&self) -> &'static str {
        "suffix_reattacher"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::TurkishTokenizer;

    fn tokens(text: &str) -> Vec<Token> {
        TurkishTokenizer::default().tokenize_with_offsets(text)
    }

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_spaced_clitic_is_merged() {
        let merged = SuffixReattacher::new().reattach(tokens("Ankara ' da"));
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].text, "Ankara'da");
        assert_eq!((merged[0].start_offset, merged[0].end_offset), (0, 11));
        assert_eq!(merged[0].token_type, TokenType::Clitic);
    }

    #[test]
    fn test_one_sided_space_and_curly_apostrophe() {
        let merged = SuffixReattacher::new().reattach(tokens("İstanbul 'dan geldim"));
        assert_eq!(texts(&merged), vec!["İstanbul'dan", "geldim"]);
        assert_eq!(merged[1].position, 1);

        let merged = SuffixReattacher::new().reattach(tokens("Ankara ’ ya"));
        assert_eq!(texts(&merged), vec!["Ankara’ya"]);
    }

    #[test]
    fn test_unknown_suffix_stays_split() {
        let merged = SuffixReattacher::new().reattach(tokens("Ankara ' xyz"));
        assert_eq!(texts(&merged), vec!["Ankara", "'", "xyz"]);
    }

    #[test]
    fn test_wide_gap_stays_split() {
        let merged = SuffixReattacher::new().reattach(tokens("Ankara  '  da"));
        assert_eq!(texts(&merged), vec!["Ankara", "'", "da"]);
    }

    #[test]
    fn test_host_must_be_a_word() {
        let merged = SuffixReattacher::new().reattach(tokens("2023 ' te"));
        assert_eq!(texts(&merged), vec!["2023", "'", "te"]);

        let merged = SuffixReattacher::new().reattach(tokens("' da"));
        assert_eq!(texts(&merged), vec!["'", "da"]);
    }

    #[test]
    fn test_bare_merge_is_opt_in() {
        let input = tokens("Ankara da güzel");
        let merged = SuffixReattacher::new().reattach(input.clone());
        assert_eq!(texts(&merged), vec!["Ankara", "da", "güzel"]);

        let merged = SuffixReattacher::new().allow_bare(true).reattach(input);
        assert_eq!(texts(&merged), vec!["Ankarada", "güzel"]);
        assert_eq!((merged[0].start_offset, merged[0].end_offset), (0, 9));
    }

    #[test]
    fn test_custom_vocabulary() {
        let reattacher = SuffixReattacher::with_suffixes(["DAKİ", " "]);
        assert!(reattacher.is_known_suffix("daki"));
        assert!(!reattacher.is_known_suffix("da"));
    }

    #[test]
    fn test_filter_interface() {
        let reattacher = SuffixReattacher::new();
        let result: Vec<_> = reattacher
            .filter(Box::new(tokens("Ankara ' da kaldım .").into_iter()))
            .unwrap()
            .collect();
        assert_eq!(texts(&result), vec!["Ankara'da", "kaldım", "."]);
        let positions: Vec<_> = result.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }
}
