//! Turkish lowercase filter.

use crate::analysis::normalizer::{NormalizerConfig, TurkishNormalizer};
use crate::analysis::token::{TokenStream, TokenType};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that runs the Turkish normalizer over every token.
///
/// URLs and emoticons pass through untouched (`:D` stays `:D`). Offsets are
/// preserved: normalization never changes the character count.
#[derive(Clone, Debug, Default)]
pub struct TurkishLowercaseFilter {
    normalizer: TurkishNormalizer,
}

impl TurkishLowercaseFilter {
    /// Create a filter applying the full Turkish fold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter with a specific normalizer mode.
    pub fn with_config(config: NormalizerConfig) -> Self {
        TurkishLowercaseFilter {
            normalizer: TurkishNormalizer::new(config),
        }
    }
}

impl Filter for TurkishLowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let normalizer = self.normalizer;
        Ok(Box::new(tokens.map(move |mut token| {
            if !matches!(token.token_type, TokenType::Url | TokenType::Emoticon) {
                token.text = normalizer.normalize(&token.text);
            }
            token
        })))
    }

    fn name(&self) -> &'static str {
        "turkish_lowercase"
    }
}
