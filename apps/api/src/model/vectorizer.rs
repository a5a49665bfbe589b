//! Pre-fitted TF-IDF vectorizer, deserialized from a JSON artifact.

use std::collections::HashMap;

use anyhow::{ensure, Result};
use serde::Deserialize;

/// Maps normalized text to a fixed-dimension feature vector: per-term counts
/// weighted by the fitted inverse-document-frequency vector, L2-normalized.
///
/// The vocabulary and idf weights come from training and are never mutated
/// here; `transform` is a total function over any input string. Terms outside
/// the vocabulary are ignored, so empty or fully out-of-vocabulary input maps
/// to the all-zero vector of the same dimension.
#[derive(Debug, Clone, Deserialize)]
pub struct TfidfVectorizer {
    /// Term -> feature column index.
    vocabulary: HashMap<String, usize>,
    /// Per-column inverse document frequency weights.
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Feature dimensionality, fixed by the artifact at load time.
    pub fn n_features(&self) -> usize {
        self.idf.len()
    }

    /// Checks internal consistency of the loaded artifact.
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.idf.is_empty(), "vectorizer artifact has no features");
        ensure!(
            !self.vocabulary.is_empty(),
            "vectorizer artifact has an empty vocabulary"
        );
        for (term, &index) in &self.vocabulary {
            ensure!(
                index < self.idf.len(),
                "vocabulary term {term:?} maps to column {index}, but idf has {} entries",
                self.idf.len()
            );
        }
        Ok(())
    }

    /// Transforms normalized text into the fitted feature space.
    pub fn transform(&self, normalized_text: &str) -> Vec<f64> {
        let mut features = vec![0.0; self.idf.len()];

        for token in normalized_text.split_whitespace() {
            if let Some(&index) = self.vocabulary.get(token) {
                features[index] += 1.0;
            }
        }

        for (value, idf) in features.iter_mut().zip(&self.idf) {
            *value *= idf;
        }

        let norm = features.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut features {
                *value /= norm;
            }
        }

        features
    }
}
