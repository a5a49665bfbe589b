//! Request/response models for the classification API.

use serde::{Deserialize, Serialize};

use crate::classify::ranking::RankedResult;

/// Number of extracted-text characters echoed back for file uploads.
pub const PREVIEW_CHARS: usize = 1000;

#[derive(Debug, Deserialize)]
pub struct ClassifyTextRequest {
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct RankedRole {
    pub role: String,
    pub probability: f64,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub predicted_role: String,
    /// All known roles, highest probability first.
    pub ranking: Vec<RankedRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_text_preview: Option<String>,
}

impl ClassifyResponse {
    /// Shapes a ranked result for display. Probabilities are rounded to
    /// three decimals here and only here; label selection upstream always
    /// works on the unrounded distribution, so the displayed percentages may
    /// not sum to exactly 100%.
    pub fn from_ranked(result: RankedResult, extracted_text_preview: Option<String>) -> Self {
        ClassifyResponse {
            predicted_role: result.predicted_role,
            ranking: result
                .ranking
                .into_iter()
                .map(|score| RankedRole {
                    role: score.role,
                    probability: round3(score.probability),
                })
                .collect(),
            extracted_text_preview,
        }
    }
}

fn round3(p: f64) -> f64 {
    (p * 1000.0).round() / 1000.0
}

/// First `max_chars` characters of the extracted text, on a char boundary.
pub fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RoleScore;

    fn ranked() -> RankedResult {
        RankedResult {
            predicted_role: "React_Developer".to_string(),
            ranking: vec![
                RoleScore {
                    role: "React_Developer".to_string(),
                    probability: 0.666_666_66,
                },
                RoleScore {
                    role: "SQL_Developer".to_string(),
                    probability: 0.333_333_33,
                },
            ],
        }
    }

    #[test]
    fn test_probabilities_rounded_to_three_decimals() {
        let response = ClassifyResponse::from_ranked(ranked(), None);
        assert_eq!(response.ranking[0].probability, 0.667);
        assert_eq!(response.ranking[1].probability, 0.333);
    }

    #[test]
    fn test_rounding_does_not_change_predicted_role() {
        let response = ClassifyResponse::from_ranked(ranked(), None);
        assert_eq!(response.predicted_role, "React_Developer");
        assert_eq!(response.ranking[0].role, "React_Developer");
    }

    #[test]
    fn test_preview_absent_for_pasted_text() {
        let response = ClassifyResponse::from_ranked(ranked(), None);
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("extracted_text_preview").is_none());
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let text = "é".repeat(2000);
        let p = preview(&text, PREVIEW_CHARS);
        assert_eq!(p.chars().count(), 1000);
    }

    #[test]
    fn test_preview_shorter_text_unchanged() {
        assert_eq!(preview("short resume", PREVIEW_CHARS), "short resume");
    }
}
