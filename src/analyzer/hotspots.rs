use crate::model::{AnalyzerError, CellId};
use crate::utils::percentile;
use std::collections::{HashMap, HashSet};

/// Cells whose density strictly exceeds the value at `percentile_threshold`
/// over the full density distribution.
///
/// The threshold uses linear interpolation between order statistics, so the
/// result is deterministic for identical input. When every density is equal
/// the threshold equals that value and nothing strictly exceeds it, so the
/// set is empty.
pub fn find_hotspots(
    metrics: &HashMap<CellId, f64>,
    percentile_threshold: f64,
) -> Result<HashSet<CellId>, AnalyzerError> {
    if !(percentile_threshold > 0.0 && percentile_threshold < 100.0) {
        return Err(AnalyzerError::InvalidParameter(format!(
            "percentile_threshold must be in (0, 100), got {percentile_threshold}"
        )));
    }
    if metrics.is_empty() {
        return Ok(HashSet::new());
    }

    let mut densities: Vec<f64> = metrics.values().copied().collect();
    densities.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let threshold = percentile(&densities, percentile_threshold);

    Ok(metrics
        .iter()
        .filter(|&(_, &density)| density > threshold)
        .map(|(id, _)| id.clone())
        .collect())
}
