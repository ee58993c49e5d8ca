//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of the analysis pipeline: they split raw text
//! into tokens that carry character offsets back into the input.
//!
//! # Examples
//!
//! ```
//! use durak::analysis::tokenizer::Tokenizer;
//! use durak::analysis::tokenizer::turkish::TurkishTokenizer;
//!
//! let tokenizer = TurkishTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("Ankara'da kaldım.").unwrap().collect();
//! assert_eq!(tokens[0].text, "Ankara'da");
//! assert_eq!(tokens.len(), 3);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a tokenizer can be shared between
/// threads behind an `Arc`.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod turkish;

pub use turkish::{TurkishTokenizer, tokenize, tokenize_normalized, tokenize_with_offsets};
