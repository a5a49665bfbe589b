//! Classifier abstraction and the multinomial logistic regression adapter.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// A single role's probability. Ordering context depends on the producer:
/// `predict_distribution` emits these in the classifier's native class order,
/// the ranking step re-emits them sorted by probability.
#[derive(Debug, Clone, Serialize)]
pub struct RoleScore {
    pub role: String,
    pub probability: f64,
}

/// Polymorphic classifier interface.
///
/// Two independent views over the same unrounded distribution: `predict`
/// returns the argmax label, `predict_distribution` the full per-class
/// probabilities. The pipeline cross-checks them against each other.
pub trait Classifier: Send + Sync {
    /// The fixed label set, in native class order.
    fn classes(&self) -> &[String];

    /// Highest-probability label; ties break toward the earlier class.
    fn predict(&self, features: &[f64]) -> String;

    /// Full probability distribution in native class order. Values sum to
    /// 1.0 within floating-point tolerance for every input.
    fn predict_distribution(&self, features: &[f64]) -> Vec<RoleScore>;
}

/// Multinomial logistic regression scored with a numerically stable softmax.
/// Deserialized from the classifier artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct SoftmaxRegression {
    classes: Vec<String>,
    /// One coefficient row per class, one column per feature.
    coefficients: Vec<Vec<f64>>,
    /// One intercept per class.
    intercepts: Vec<f64>,
}

impl SoftmaxRegression {
    /// Feature dimensionality expected by the coefficient matrix.
    pub fn n_features(&self) -> usize {
        self.coefficients.first().map_or(0, Vec::len)
    }

    /// Checks internal consistency of the loaded artifact.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.classes.len() >= 2,
            "classifier artifact needs at least two classes, found {}",
            self.classes.len()
        );
        ensure!(
            self.coefficients.len() == self.classes.len(),
            "classifier has {} coefficient rows for {} classes",
            self.coefficients.len(),
            self.classes.len()
        );
        ensure!(
            self.intercepts.len() == self.classes.len(),
            "classifier has {} intercepts for {} classes",
            self.intercepts.len(),
            self.classes.len()
        );
        let n_features = self.n_features();
        ensure!(n_features > 0, "classifier coefficient rows are empty");
        for (class, row) in self.classes.iter().zip(&self.coefficients) {
            ensure!(
                row.len() == n_features,
                "coefficient row for class {class:?} has {} columns, expected {n_features}",
                row.len()
            );
        }
        Ok(())
    }

    fn probabilities(&self, features: &[f64]) -> Vec<f64> {
        let scores: Vec<f64> = self
            .coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(row, intercept)| {
                row.iter().zip(features).map(|(w, x)| w * x).sum::<f64>() + intercept
            })
            .collect();

        // Shift by the max score before exponentiating to avoid overflow.
        let max_score = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = scores.iter().map(|s| (s - max_score).exp()).collect();
        let total: f64 = exps.iter().sum();
        exps.into_iter().map(|e| e / total).collect()
    }
}

impl Classifier for SoftmaxRegression {
    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn predict(&self, features: &[f64]) -> String {
        let probabilities = self.probabilities(features);
        let mut best = 0;
        for (index, p) in probabilities.iter().enumerate() {
            // Strict comparison keeps the earlier class on exact ties.
            if *p > probabilities[best] {
                best = index;
            }
        }
        self.classes[best].clone()
    }

    fn predict_distribution(&self, features: &[f64]) -> Vec<RoleScore> {
        self.classes
            .iter()
            .zip(self.probabilities(features))
            .map(|(class, probability)| RoleScore {
                role: class.clone(),
                probability,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> SoftmaxRegression {
        SoftmaxRegression {
            classes: vec![
                "Peoplesoft".to_string(),
                "React_Developer".to_string(),
                "SQL_Developer".to_string(),
            ],
            coefficients: vec![
                vec![2.0, -1.0, 0.0],
                vec![-1.0, 3.0, 0.5],
                vec![0.0, 0.0, 2.5],
            ],
            intercepts: vec![0.1, -0.2, 0.0],
        }
    }

    #[test]
    fn test_distribution_sums_to_one() {
        let m = model();
        for features in [
            vec![0.0, 0.0, 0.0],
            vec![1.0, 0.0, 0.0],
            vec![0.3, 0.5, 0.9],
            vec![-2.0, 4.0, 0.1],
        ] {
            let dist = m.predict_distribution(&features);
            let total: f64 = dist.iter().map(|s| s.probability).sum();
            assert!((total - 1.0).abs() < 1e-6, "sum was {total}");
        }
    }

    #[test]
    fn test_distribution_covers_fixed_label_set_every_call() {
        let m = model();
        for features in [vec![0.0, 0.0, 0.0], vec![9.0, 0.0, 0.0]] {
            let dist = m.predict_distribution(&features);
            let labels: Vec<&str> = dist.iter().map(|s| s.role.as_str()).collect();
            assert_eq!(labels, ["Peoplesoft", "React_Developer", "SQL_Developer"]);
        }
    }

    #[test]
    fn test_predict_matches_distribution_argmax() {
        let m = model();
        for features in [
            vec![1.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
            vec![0.0, 0.0, 0.0],
        ] {
            let dist = m.predict_distribution(&features);
            let argmax = dist
                .iter()
                .max_by(|a, b| a.probability.total_cmp(&b.probability))
                .unwrap();
            assert_eq!(m.predict(&features), argmax.role);
        }
    }

    #[test]
    fn test_zero_vector_produces_valid_distribution() {
        // Empty resume text: the intercepts act as the prior.
        let m = model();
        let dist = m.predict_distribution(&[0.0, 0.0, 0.0]);
        let total: f64 = dist.iter().map(|s| s.probability).sum();
        assert!((total - 1.0).abs() < 1e-6);
        assert!(dist.iter().all(|s| s.probability > 0.0));
        // Intercepts 0.1 > 0.0 > -0.2, so Peoplesoft is the zero-input prior.
        assert_eq!(m.predict(&[0.0, 0.0, 0.0]), "Peoplesoft");
    }

    #[test]
    fn test_ties_break_toward_earlier_class() {
        let m = SoftmaxRegression {
            classes: vec!["A".to_string(), "B".to_string()],
            coefficients: vec![vec![1.0], vec![1.0]],
            intercepts: vec![0.0, 0.0],
        };
        assert_eq!(m.predict(&[1.0]), "A");
    }

    #[test]
    fn test_validate_rejects_ragged_coefficients() {
        let mut m = model();
        m.coefficients[1].pop();
        assert!(m.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_intercept_count_mismatch() {
        let mut m = model();
        m.intercepts.pop();
        assert!(m.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_consistent_artifact() {
        assert!(model().validate().is_ok());
    }
}
