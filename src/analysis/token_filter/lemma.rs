//! Lemma filter implementation.

use std::sync::Arc;

use crate::analysis::lemma::Lemmatizer;
use crate::analysis::token::{TokenStream, TokenType};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that replaces word tokens with their lemma.
///
/// Words and compounds go through the lemmatizer. A clitic keeps only its
/// host (`Ankara'da` → `Ankara`), since the apostrophe already marks the
/// suffix boundary. Other token types pass through.
#[derive(Clone)]
pub struct LemmaFilter {
    lemmatizer: Arc<dyn Lemmatizer>,
}

impl std::fmt::Debug for LemmaFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LemmaFilter")
            .field("lemmatizer", &self.lemmatizer.name())
            .finish()
    }
}

impl LemmaFilter {
    /// Create a filter over any lemmatizer.
    pub fn new(lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        LemmaFilter { lemmatizer }
    }
}

impl Filter for LemmaFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let lemmatizer = Arc::clone(&self.lemmatizer);
        Ok(Box::new(tokens.map(move |mut token| {
            match token.token_type {
                TokenType::Word | TokenType::Compound => {
                    token.text = lemmatizer.lemmatize(&token.text);
                }
                TokenType::Clitic => {
                    if let Some(index) = token.text.find(['\'', '’']) {
                        token.text.truncate(index);
                    }
                }
                _ => {}
            }
            token
        })))
    }

    fn name(&self) -> &'static str {
        "lemma"
    }
}
