//! Token filter implementations for token transformation.
//!
//! Filters take the token stream produced by a tokenizer and return a new
//! one. Every step of the analysis pipeline after tokenization is a filter.
//!
//! # Available Filters
//!
//! - [`lowercase::TurkishLowercaseFilter`] - Turkish-aware case folding
//! - [`reattach::SuffixReattacher`] - Repairs clitics split off by whitespace
//! - [`lemma::LemmaFilter`] - Replaces each word with its lemma
//!
//! # Examples
//!
//! ```
//! use durak::analysis::token::Token;
//! use durak::analysis::token_filter::Filter;
//! use durak::analysis::token_filter::lowercase::TurkishLowercaseFilter;
//!
//! let filter = TurkishLowercaseFilter::new();
//! let tokens = vec![Token::new("IĞDIR", 0), Token::new("İzmir", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "ığdır");
//! assert_eq!(filtered[1].text, "izmir");
//! ```
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → SuffixReattacher → TurkishLowercase → Lemma
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lemma;
pub mod lowercase;
pub mod reattach;

pub use lemma::LemmaFilter;
pub use lowercase::TurkishLowercaseFilter;
pub use reattach::SuffixReattacher;
