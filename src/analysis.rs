//! Text analysis for Turkish.
//!
//! Raw text flows through the [`normalizer`] and [`tokenizer`], then through
//! [`token_filter`]s such as suffix reattachment and lemmatization. The
//! [`morphology`] and [`lemma`] modules hold the word-level machinery.

pub mod analyzer;
pub mod lemma;
pub mod morphology;
pub mod normalizer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
