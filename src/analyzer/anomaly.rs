use crate::model::{AnalyzerError, AnomalySeverity, CellId, DistributionSummary};
use std::collections::HashMap;

/// Cells whose density sits more than `k` standard deviations from the mean
/// of the supplied distribution.
///
/// A cell is flagged `High` when its density strictly exceeds
/// `mean + k * std_dev` and `Low` when it falls strictly below
/// `mean - k * std_dev`. The lower bound is not clamped to zero; since
/// density is never negative, a negative bound simply makes `Low`
/// unreachable for that distribution. With uniform densities the standard
/// deviation is zero and both comparisons are strict, so nothing is flagged.
pub fn find_density_anomalies(
    metrics: &HashMap<CellId, f64>,
    summary: &DistributionSummary,
    k: f64,
) -> Result<HashMap<CellId, AnomalySeverity>, AnalyzerError> {
    if !(k > 0.0 && k.is_finite()) {
        return Err(AnalyzerError::InvalidParameter(format!(
            "sigma multiplier k must be positive and finite, got {k}"
        )));
    }

    let high_bound = summary.mean + k * summary.std_dev;
    let low_bound = summary.mean - k * summary.std_dev;

    let mut flagged = HashMap::new();
    for (id, &density) in metrics {
        if density > high_bound {
            flagged.insert(id.clone(), AnomalySeverity::High);
        } else if density < low_bound {
            flagged.insert(id.clone(), AnomalySeverity::Low);
        }
    }
    Ok(flagged)
}
