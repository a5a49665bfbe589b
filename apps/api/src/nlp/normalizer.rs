//! Text normalization: raw resume text in, clean lemmatized token stream out.

use crate::nlp::Lexicon;

/// Normalizes raw text into the space-joined token form the vectorizer was
/// fitted on. Pure and deterministic; the only state is the loaded `Lexicon`.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    lexicon: Lexicon,
}

impl TextNormalizer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Applies, in order: lowercasing, deletion of every character that is
    /// not an ASCII letter or whitespace, whitespace tokenization, stopword
    /// removal, and lemmatization. Tokens are rejoined with single spaces.
    ///
    /// Empty or whitespace-only input yields an empty string; that is a valid
    /// outcome, not an error.
    pub fn normalize(&self, text: &str) -> String {
        let cleaned: String = text
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
            .collect();

        cleaned
            .split_whitespace()
            .filter(|token| !self.lexicon.is_stopword(token))
            .map(|token| self.lexicon.lemmatize(token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
