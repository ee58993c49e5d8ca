//! Token types and utilities for text analysis.
//!
//! This module defines the unit that flows through the analysis pipeline: a
//! piece of text together with the span of the raw input it came from.
//!
//! Offsets are **character** indices, not byte indices, so callers working
//! with code-point based string APIs can slice the raw text directly. For every
//! token produced by a tokenizer, the characters `start_offset..end_offset` of
//! the raw input reproduce the token's pre-normalization text.
//!
//! # Examples
//!
//! ```
//! use durak::analysis::token::{Token, TokenType};
//!
//! let token = Token::with_offsets("Ankara'da", 0, 0, 9).with_token_type(TokenType::Clitic);
//! assert_eq!(token.source_text("Ankara'da kaldım"), "Ankara'da");
//! assert_eq!(token.char_len(), 9);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The character offset where this token starts in the raw text
    pub start_offset: usize,

    /// The character offset where this token ends in the raw text (exclusive)
    pub end_offset: usize,

    /// The pattern class that produced this token
    pub token_type: TokenType,
}

/// Token type classification.
///
/// Each variant names the tokenizer pattern class that claimed the span.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// `http://`, `https://` or `www.` span
    Url,
    /// Member of the emoticon set, e.g. `:)`
    Emoticon,
    /// Word with an attached apostrophe suffix, e.g. `Ankara'da`
    Clitic,
    /// Integer, decimal or numeric range, e.g. `3,14` or `10-15`
    Number,
    /// Hyphenated compound, e.g. `Türk-İslam`
    Compound,
    /// Plain run of word characters
    #[default]
    Word,
    /// Single punctuation or symbol character
    Punctuation,
}

impl TokenType {
    /// Get the lowercase name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Url => "url",
            TokenType::Emoticon => "emoticon",
            TokenType::Clitic => "clitic",
            TokenType::Number => "number",
            TokenType::Compound => "compound",
            TokenType::Word => "word",
            TokenType::Punctuation => "punctuation",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Token {
    /// Create a new token with the given text and position and empty offsets.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            token_type: TokenType::Word,
        }
    }

    /// Create a new token with text, position, and character offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            token_type: TokenType::Word,
        }
    }

    /// Set the token type.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }

    /// Number of characters in the token text.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Number of raw-text characters covered by the span.
    pub fn span_len(&self) -> usize {
        self.end_offset.saturating_sub(self.start_offset)
    }

    /// Check if the token text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Slice the raw text this token was produced from by its character span.
    ///
    /// Returns an empty string when the span lies outside `raw`.
    pub fn source_text<'a>(&self, raw: &'a str) -> &'a str {
        slice_chars(raw, self.start_offset, self.end_offset)
    }

    /// Convert into the `(text, start, end)` triple used at the API boundary.
    pub fn into_triple(self) -> (String, usize, usize) {
        (self.text, self.start_offset, self.end_offset)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Slice `text` by character indices `start..end`.
pub fn slice_chars(text: &str, start: usize, end: usize) -> &str {
    if start >= end {
        return "";
    }

    let mut indices = text.char_indices().map(|(i, _)| i).chain(Some(text.len()));
    let Some(byte_start) = indices.nth(start) else {
        return "";
    };
    match indices.nth(end - start - 1) {
        Some(byte_end) => &text[byte_start..byte_end],
        None => "",
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}
