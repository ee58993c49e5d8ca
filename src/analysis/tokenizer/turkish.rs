//! Offset-preserving tokenizer for Turkish text.
//!
//! Segmentation is driven by one regular expression made of ordered pattern
//! classes. At every position the first class that matches claims the input,
//! and each class is greedy, so matching is strictly left to right with no
//! backtracking over a committed boundary:
//!
//! 1. URLs (`http://`, `https://`, `www.`) up to the next whitespace
//! 2. emoticons from a fixed set, longest first
//! 3. host + apostrophe + suffix, where the host is a word, a hyphenated
//!    compound or a number (`Ankara'da`, `Türk-İslam'ın`, `1.5'te`)
//! 4. numbers, decimals with `.` or `,`, numeric ranges (`10-15`)
//! 5. hyphenated compounds
//! 6. a run of word characters, or a single punctuation character
//!
//! Whitespace is never part of a token. A spaced clitic such as `Ankara ' da`
//! stays three tokens here; merging it is the job of
//! [`SuffixReattacher`](crate::analysis::token_filter::reattach::SuffixReattacher).

use std::cmp::Reverse;
use std::sync::{Arc, LazyLock};

use regex::{Captures, Regex};

use crate::analysis::normalizer::turkish_lowercase;
use crate::analysis::token::{IntoTokenStream, Token, TokenStream, TokenType};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{DurakError, Result};

const EYES: &[char] = &[':', ';', '=', '8'];
const NOSES: &[&str] = &["", "-", "^", "'"];
const MOUTHS: &[char] = &[')', 'D', 'P', 'O', 'o', '(', '[', '/', '\\'];
const EXTRA_EMOTICONS: &[&str] = &[":p", ":-p", ":|", "<3", "^_^", "^^"];

/// Emoticons recognised as atomic tokens: every eyes, nose, mouth
/// combination plus a few extras.
///
/// An `8` eye needs a nose, so `8)` and `8/` stay a number and punctuation.
pub static DEFAULT_EMOTICONS: LazyLock<Vec<String>> = LazyLock::new(|| {
    let mut emoticons = Vec::new();
    for &eyes in EYES {
        for &nose in NOSES {
            if eyes == '8' && nose.is_empty() {
                continue;
            }
            for &mouth in MOUTHS {
                emoticons.push(format!("{eyes}{nose}{mouth}"));
            }
        }
    }
    emoticons.extend(EXTRA_EMOTICONS.iter().map(|e| e.to_string()));
    emoticons
});

static DEFAULT_TOKENIZER: LazyLock<TurkishTokenizer> = LazyLock::new(TurkishTokenizer::default);

/// Tokenizer implementing the Turkish pattern classes.
#[derive(Clone, Debug)]
pub struct TurkishTokenizer {
    /// Compiled alternation of all pattern classes
    pattern: Arc<Regex>,
}

impl TurkishTokenizer {
    /// Create a tokenizer with the default emoticon set.
    pub fn new() -> Result<Self> {
        Self::with_emoticons(DEFAULT_EMOTICONS.iter())
    }

    /// Create a tokenizer with a custom emoticon set.
    pub fn with_emoticons<I, S>(emoticons: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut emoticons: Vec<String> = emoticons
            .into_iter()
            .map(|e| e.as_ref().trim().to_string())
            .filter(|e| !e.is_empty())
            .collect();
        emoticons.sort_by(|a, b| {
            Reverse(a.chars().count())
                .cmp(&Reverse(b.chars().count()))
                .then_with(|| a.cmp(b))
        });
        emoticons.dedup();

        let regex = Regex::new(&build_pattern(&emoticons))
            .map_err(|e| DurakError::configuration(format!("Invalid token pattern: {e}")))?;

        log::debug!("compiled tokenizer with {} emoticons", emoticons.len());

        Ok(TurkishTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Tokenize `text`, returning tokens with character offsets into `text`.
    pub fn tokenize_with_offsets(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut byte_cursor = 0;
        let mut char_cursor = 0;

        for caps in self.pattern.captures_iter(text) {
            let Some(mat) = caps.get(0) else {
                continue;
            };

            char_cursor += text[byte_cursor..mat.start()].chars().count();
            let char_len = mat.as_str().chars().count();

            tokens.push(
                Token::with_offsets(
                    mat.as_str(),
                    tokens.len(),
                    char_cursor,
                    char_cursor + char_len,
                )
                .with_token_type(Self::classify(&caps)),
            );

            char_cursor += char_len;
            byte_cursor = mat.end();
        }

        tokens
    }

    /// Tokenize `text` and Turkish-fold every token. Offsets still index the
    /// raw text.
    pub fn tokenize_normalized(&self, text: &str) -> Vec<Token> {
        self.tokenize_with_offsets(text)
            .into_iter()
            .map(|mut token| {
                token.text = turkish_lowercase(&token.text);
                token
            })
            .collect()
    }

    fn classify(caps: &Captures<'_>) -> TokenType {
        const GROUPS: [(&str, TokenType); 6] = [
            ("url", TokenType::Url),
            ("emoticon", TokenType::Emoticon),
            ("clitic", TokenType::Clitic),
            ("number", TokenType::Number),
            ("compound", TokenType::Compound),
            ("word", TokenType::Word),
        ];

        GROUPS
            .iter()
            .find(|(name, _)| caps.name(name).is_some())
            .map(|(_, token_type)| *token_type)
            .unwrap_or(TokenType::Punctuation)
    }
}

impl Default for TurkishTokenizer {
    fn default() -> Self {
        Self::new().expect("Default token pattern should be valid")
    }
}

impl Tokenizer for TurkishTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(self.tokenize_with_offsets(text).into_token_stream())
    }

    fn name(&self) -> &'static str {
        "turkish"
    }
}

fn build_pattern(emoticons: &[String]) -> String {
    let emoticon = if emoticons.is_empty() {
        // never matches
        r"[^\s\S]".to_string()
    } else {
        emoticons
            .iter()
            .map(|e| regex::escape(e))
            .collect::<Vec<_>>()
            .join("|")
    };

    [
        r"(?P<url>(?i:https?://|www\.)\S+)".to_string(),
        format!("(?P<emoticon>{emoticon})"),
        r"(?P<clitic>(?:\d+(?:[.,]\d+)*|\w+(?:-\w+)*)['’]\w+)".to_string(),
        r"(?P<number>\d+(?:[.,]\d+)*(?:[-–]\d+(?:[.,]\d+)*)?)".to_string(),
        r"(?P<compound>\w+(?:-\w+)+)".to_string(),
        r"(?P<word>\w+)".to_string(),
        r"(?P<punct>[^\w\s])".to_string(),
    ]
    .join("|")
}

/// Tokenize with the default tokenizer into `(token, start, end)` triples.
///
/// Offsets are character indices into `text`.
pub fn tokenize_with_offsets(text: &str) -> Vec<(String, usize, usize)> {
    DEFAULT_TOKENIZER
        .tokenize_with_offsets(text)
        .into_iter()
        .map(Token::into_triple)
        .collect()
}

/// Tokenize with the default tokenizer, Turkish-folding each token while
/// keeping offsets into the raw text.
pub fn tokenize_normalized(text: &str) -> Vec<(String, usize, usize)> {
    DEFAULT_TOKENIZER
        .tokenize_normalized(text)
        .into_iter()
        .map(Token::into_triple)
        .collect()
}

/// Tokenize with the default tokenizer, dropping offsets.
pub fn tokenize(text: &str) -> Vec<String> {
    DEFAULT_TOKENIZER
        .tokenize_with_offsets(text)
        .into_iter()
        .map(|token| token.text)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_clitic_is_one_token() {
        let tokenizer = TurkishTokenizer::new().unwrap();
        let tokens = tokenizer.tokenize_with_offsets("Ankara'da");

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "Ankara'da");
        assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (0, 9));
        assert_eq!(tokens[0].token_type, TokenType::Clitic);
    }

    #[test]
    fn test_spaced_clitic_stays_split() {
        let tokenizer = TurkishTokenizer::new().unwrap();
        let tokens = tokenizer.tokenize_with_offsets("ankara ' da");

        assert_eq!(texts(&tokens), vec!["ankara", "'", "da"]);
        assert_eq!(tokens[1].token_type, TokenType::Punctuation);
        assert_eq!((tokens[2].start_offset, tokens[2].end_offset), (9, 11));
    }

    #[test]
    fn test_url_and_emoticon() {
        let tokenizer = TurkishTokenizer::new().unwrap();
        let tokens =
            tokenizer.tokenize_with_offsets("Bak https://example.com/a?b=1 :) www.site.org :-D");

        assert_eq!(
            texts(&tokens),
            vec!["Bak", "https://example.com/a?b=1", ":)", "www.site.org", ":-D"]
        );
        assert_eq!(tokens[1].token_type, TokenType::Url);
        assert_eq!(tokens[2].token_type, TokenType::Emoticon);
        assert_eq!(tokens[4].token_type, TokenType::Emoticon);
    }

    #[test]
    fn test_emoticon_variants() {
        let tokenizer = TurkishTokenizer::new().unwrap();
        let tokens = tokenizer.tokenize_with_offsets(";D :o :[ =P :O ;( :'( 8-)");

        assert_eq!(
            texts(&tokens),
            vec![";D", ":o", ":[", "=P", ":O", ";(", ":'(", "8-)"]
        );
        assert!(tokens.iter().all(|t| t.token_type == TokenType::Emoticon));
    }

    #[test]
    fn test_bare_eight_is_not_an_emoticon() {
        let tokenizer = TurkishTokenizer::new().unwrap();
        let tokens = tokenizer.tokenize_with_offsets("(madde 8) 8/10");
        assert_eq!(texts(&tokens), vec!["(", "madde", "8", ")", "8", "/", "10"]);
    }

    #[test]
    fn test_clitic_on_compound_and_number_hosts() {
        let tokenizer = TurkishTokenizer::new().unwrap();
        let tokens = tokenizer.tokenize_with_offsets("Türk-İslam'ın e-posta'dan 1.5'te 2023'te");

        assert_eq!(
            texts(&tokens),
            vec!["Türk-İslam'ın", "e-posta'dan", "1.5'te", "2023'te"]
        );
        assert!(tokens.iter().all(|t| t.token_type == TokenType::Clitic));
        assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (0, 13));
    }

    #[test]
    fn test_numbers() {
        let tokenizer = TurkishTokenizer::new().unwrap();
        let tokens = tokenizer.tokenize_with_offsets("3,14 ile 1.000.000 ve 10-15 arası 2023.");

        assert_eq!(
            texts(&tokens),
            vec!["3,14", "ile", "1.000.000", "ve", "10-15", "arası", "2023", "."]
        );
        assert_eq!(tokens[0].token_type, TokenType::Number);
        assert_eq!(tokens[4].token_type, TokenType::Number);
    }

    #[test]
    fn test_compound_and_punctuation() {
        let tokenizer = TurkishTokenizer::new().unwrap();
        let tokens = tokenizer.tokenize_with_offsets("Türk-İslam sentezi, değil mi?");

        assert_eq!(
            texts(&tokens),
            vec!["Türk-İslam", "sentezi", ",", "değil", "mi", "?"]
        );
        assert_eq!(tokens[0].token_type, TokenType::Compound);
        assert_eq!(tokens[2].token_type, TokenType::Punctuation);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        let tokenizer = TurkishTokenizer::new().unwrap();
        assert!(tokenizer.tokenize_with_offsets("").is_empty());
        assert!(tokenizer.tokenize_with_offsets(" \t\n  ").is_empty());
    }

    #[test]
    fn test_offset_round_trip() {
        let tokenizer = TurkishTokenizer::new().unwrap();
        let samples = [
            "İstanbul'a gittik. Çok güzeldi :)",
            "  Öğrenciler   10-15 Mayıs'ta, www.meb.gov.tr adresinde!!",
            "Şişli’de 3,5 saat bekledik; ığdır-kars yolu kapalı <3",
            "ç ğ ı ö ş ü Ç Ğ İ Ö Ş Ü",
        ];

        for sample in samples {
            for token in tokenizer.tokenize_with_offsets(sample) {
                assert_eq!(token.source_text(sample), token.text, "in {sample:?}");
                assert!(!token.text.starts_with(char::is_whitespace));
                assert!(!token.text.ends_with(char::is_whitespace));
            }
        }
    }

    #[test]
    fn test_positions_are_sequential() {
        let tokenizer = TurkishTokenizer::new().unwrap();
        let tokens = tokenizer.tokenize_with_offsets("bir iki üç");
        let positions: Vec<_> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_tokenize_normalized_keeps_raw_offsets() {
        let raw = "İZMİR'de IŞIK";
        let tokens = tokenize_normalized(raw);

        assert_eq!(
            tokens,
            vec![
                ("izmir'de".to_string(), 0, 8),
                ("ışık".to_string(), 9, 13)
            ]
        );
    }

    #[test]
    fn test_custom_emoticons() {
        let tokenizer = TurkishTokenizer::with_emoticons(["xD"]).unwrap();
        let tokens = tokenizer.tokenize_with_offsets("harika xD :)");
        assert_eq!(texts(&tokens), vec!["harika", "xD", ":", ")"]);

        let none = TurkishTokenizer::with_emoticons(Vec::<String>::new()).unwrap();
        assert_eq!(texts(&none.tokenize_with_offsets(":)")), vec![":", ")"]);
    }

    #[test]
    fn test_free_functions() {
        assert_eq!(tokenize("Merhaba dünya!"), vec!["Merhaba", "dünya", "!"]);
        assert_eq!(
            tokenize_with_offsets("Merhaba dünya"),
            vec![
                ("Merhaba".to_string(), 0, 7),
                ("dünya".to_string(), 8, 13)
            ]
        );
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(TurkishTokenizer::new().unwrap().name(), "turkish");
    }
}
