//! Analyzers combine a tokenizer with a chain of token filters.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that turn raw text into analyzed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod pipeline;

pub use pipeline::TurkishAnalyzer;
