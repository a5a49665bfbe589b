//! The end-to-end classification pipeline.
//!
//! `ClassifyEngine` is the process-wide immutable context: the normalizer's
//! linguistic resources and the model artifacts, loaded once at startup and
//! shared read-only across requests. Each request allocates its own
//! text/feature values, so no locking is needed.

use anyhow::anyhow;

use crate::classify::ranking::{rank_distribution, RankedResult};
use crate::errors::AppError;
use crate::extract::{self, DocumentFormat};
use crate::model::ModelArtifacts;
use crate::nlp::TextNormalizer;

/// A classification of an uploaded document: the ranked result plus the
/// extracted text it was derived from (kept for the caller's preview).
#[derive(Debug)]
pub struct Classification {
    pub result: RankedResult,
    pub extracted_text: String,
}

pub struct ClassifyEngine {
    normalizer: TextNormalizer,
    artifacts: ModelArtifacts,
}

impl ClassifyEngine {
    pub fn new(normalizer: TextNormalizer, artifacts: ModelArtifacts) -> Self {
        Self {
            normalizer,
            artifacts,
        }
    }

    /// Normalize -> vectorize -> classify -> rank.
    ///
    /// Total over any input string once artifacts are loaded: empty text
    /// vectorizes to the zero vector and still yields a full distribution
    /// (the classifier's prior). The classifier's own top-1 prediction and
    /// the sort-based top entry are computed independently and cross-checked;
    /// a divergence is an internal error, never silently resolved.
    pub fn classify_text(&self, text: &str) -> Result<RankedResult, AppError> {
        let normalized = self.normalizer.normalize(text);
        let features = self.artifacts.vectorizer.transform(&normalized);

        let predicted = self.artifacts.classifier.predict(&features);
        let distribution = self.artifacts.classifier.predict_distribution(&features);
        let ranked = rank_distribution(distribution);

        if ranked.predicted_role != predicted {
            return Err(AppError::Internal(anyhow!(
                "classifier argmax ({predicted}) and ranked top entry ({}) diverged",
                ranked.predicted_role
            )));
        }

        Ok(ranked)
    }

    /// Extracts the document's text in its declared format, then classifies
    /// it. An empty-but-valid extraction (e.g. an image-only PDF) flows
    /// through and produces a low-confidence classification; only bytes that
    /// fail to parse as the declared format are rejected.
    pub fn classify_document(
        &self,
        bytes: &[u8],
        format: DocumentFormat,
    ) -> Result<Classification, AppError> {
        let extracted_text = extract::extract_text(bytes, format)?;
        let result = self.classify_text(&extracted_text)?;
        Ok(Classification {
            result,
            extracted_text,
        })
    }
}
