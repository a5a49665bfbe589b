//! Pure data-shaping step: orders the probability distribution for display.

use crate::model::RoleScore;

/// The distribution sorted descending by probability, with the top entry
/// exposed separately as the predicted role.
#[derive(Debug, Clone)]
pub struct RankedResult {
    pub predicted_role: String,
    pub ranking: Vec<RoleScore>,
}

/// Sorts a native-order distribution descending by probability. The sort is
/// stable, so equal probabilities keep the classifier's native class order.
/// Probabilities are passed through unrounded; presentation rounding belongs
/// to the response layer.
pub fn rank_distribution(distribution: Vec<RoleScore>) -> RankedResult {
    let mut ranking = distribution;
    ranking.sort_by(|a, b| b.probability.total_cmp(&a.probability));

    let predicted_role = ranking
        .first()
        .map(|top| top.role.clone())
        .unwrap_or_default();

    RankedResult {
        predicted_role,
        ranking,
    }
}
