//! # Durak
//!
//! Turkish lexical normalization and lemmatization.
//!
//! ## Features
//!
//! - Turkish-aware case folding (`İ → i`, `I → ı`)
//! - Offset-preserving tokenization that keeps clitics, numbers, URLs and
//!   emoticons whole
//! - Reattachment of clitics split off by whitespace
//! - Vowel harmony and morphotactics aware suffix stripping
//! - Dictionary, heuristic and hybrid lemmatization
//! - Syllabification
//!
//! ## Example
//!
//! ```
//! use durak::analysis::lemma::{LemmaEngine, LemmaEngineConfig};
//! use durak::analysis::normalizer::normalize;
//! use durak::analysis::tokenizer::tokenize_with_offsets;
//!
//! assert_eq!(normalize("İSTANBUL", true, true), "istanbul");
//! assert_eq!(
//!     tokenize_with_offsets("Ankara'da"),
//!     vec![("Ankara'da".to_string(), 0, 9)]
//! );
//!
//! let engine = LemmaEngine::turkish(LemmaEngineConfig::default()).unwrap();
//! assert_eq!(engine.lemmatize("evlerden"), "ev");
//! ```

pub mod analysis;
pub mod cli;
pub mod error;

pub use error::{DurakError, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
