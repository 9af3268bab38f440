use crate::analyzer::{anomaly, clustering, hotspots};
use crate::config::AnalyzerConfig;
use crate::geometry::polygon_area;
use crate::model::{
    AnalyzerError, AnomalySeverity, CellId, Clustering, DensityReport, DistributionSummary,
    PartitionCell, Point,
};
use crate::utils::{mean, percentile, std_dev};
use chrono::Utc;
use std::collections::{HashMap, HashSet};
use tracing::info;

/// Trait defining the interface for a partition density analyzer.
///
/// Every method is a pure, single-shot computation over the snapshot it is
/// handed; nothing is cached or carried between calls.
pub trait DensityAnalysis {
    /// Point count divided by polygon area, per cell. Fails on the first
    /// cell whose polygon has non-positive area.
    fn calculate_density_metrics(
        &self,
        cells: &[PartitionCell],
    ) -> Result<HashMap<CellId, f64>, AnalyzerError>;

    /// Cells whose density strictly exceeds the given percentile of the
    /// density distribution.
    fn find_hotspots(
        &self,
        metrics: &HashMap<CellId, f64>,
        percentile_threshold: f64,
    ) -> Result<HashSet<CellId>, AnalyzerError>;

    /// DBSCAN over normalized point coordinates; see [`Clustering`].
    fn cluster_analysis(
        &self,
        points: &[Point],
        eps: f64,
        min_samples: usize,
    ) -> Result<Clustering, AnalyzerError>;

    /// Aggregate statistics over the density distribution, or `None` when
    /// there are no metrics to summarize.
    fn distribution_summary(
        &self,
        metrics: &HashMap<CellId, f64>,
    ) -> Option<DistributionSummary>;

    /// Cells more than `k` standard deviations from the mean density.
    fn find_density_anomalies(
        &self,
        metrics: &HashMap<CellId, f64>,
        summary: &DistributionSummary,
        k: f64,
    ) -> Result<HashMap<CellId, AnomalySeverity>, AnalyzerError>;
}

/// Stateless implementation of the density analyzer.
pub struct DensityAnalyzer;

impl DensityAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DensityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl DensityAnalysis for DensityAnalyzer {
    fn calculate_density_metrics(
        &self,
        cells: &[PartitionCell],
    ) -> Result<HashMap<CellId, f64>, AnalyzerError> {
        let mut metrics = HashMap::with_capacity(cells.len());
        for cell in cells {
            let area = polygon_area(&cell.boundary);
            if area <= 0.0 {
                return Err(AnalyzerError::InvalidGeometry {
                    cell_id: cell.id.clone(),
                    area,
                });
            }
            metrics.insert(cell.id.clone(), cell.point_count as f64 / area);
        }
        Ok(metrics)
    }

    fn find_hotspots(
        &self,
        metrics: &HashMap<CellId, f64>,
        percentile_threshold: f64,
    ) -> Result<HashSet<CellId>, AnalyzerError> {
        hotspots::find_hotspots(metrics, percentile_threshold)
    }

    fn cluster_analysis(
        &self,
        points: &[Point],
        eps: f64,
        min_samples: usize,
    ) -> Result<Clustering, AnalyzerError> {
        clustering::cluster_analysis(points, eps, min_samples)
    }

    fn distribution_summary(
        &self,
        metrics: &HashMap<CellId, f64>,
    ) -> Option<DistributionSummary> {
        if metrics.is_empty() {
            return None;
        }
        let mut densities: Vec<f64> = metrics.values().copied().collect();
        densities.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        Some(DistributionSummary {
            min: densities[0],
            max: densities[densities.len() - 1],
            mean: mean(&densities),
            std_dev: std_dev(&densities),
            q1: percentile(&densities, 25.0),
            median: percentile(&densities, 50.0),
            q3: percentile(&densities, 75.0),
            densities,
            computed_at: Utc::now(),
        })
    }

    fn find_density_anomalies(
        &self,
        metrics: &HashMap<CellId, f64>,
        summary: &DistributionSummary,
        k: f64,
    ) -> Result<HashMap<CellId, AnomalySeverity>, AnalyzerError> {
        anomaly::find_density_anomalies(metrics, summary, k)
    }
}

impl DensityAnalyzer {
    /// Runs the full per-cell pipeline (metrics, summary, hotspots,
    /// anomalies) with one configuration and bundles the results.
    /// Clustering stays a separate call since it consumes raw points
    /// rather than partition cells.
    pub fn analyze(
        &self,
        cells: &[PartitionCell],
        cfg: &AnalyzerConfig,
    ) -> Result<DensityReport, AnalyzerError> {
        let metrics = self.calculate_density_metrics(cells)?;
        let summary = self.distribution_summary(&metrics);
        let hotspots = self.find_hotspots(&metrics, cfg.hotspot_percentile)?;
        let anomalies = match &summary {
            Some(s) => self.find_density_anomalies(&metrics, s, cfg.anomaly_sigma)?,
            None => HashMap::new(),
        };

        info!(
            cells = cells.len(),
            hotspots = hotspots.len(),
            anomalies = anomalies.len(),
            "density analysis complete"
        );

        Ok(DensityReport {
            metrics,
            summary,
            hotspots,
            anomalies,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(id: &str, side: f64, count: u64) -> PartitionCell {
        PartitionCell::new(
            id,
            vec![
                Point::new(0.0, 0.0),
                Point::new(side, 0.0),
                Point::new(side, side),
                Point::new(0.0, side),
            ],
            count,
        )
    }

    #[test]
    fn density_is_count_over_area() {
        let analyzer = DensityAnalyzer::new();
        let metrics = analyzer
            .calculate_density_metrics(&[square("A", 2.0, 12), square("B", 1.0, 5)])
            .unwrap();
        assert!((metrics["A"] - 3.0).abs() < 1e-12);
        assert!((metrics["B"] - 5.0).abs() < 1e-12);
    }

    #[test]
    fn zero_point_count_gives_zero_density() {
        let analyzer = DensityAnalyzer::new();
        let metrics = analyzer
            .calculate_density_metrics(&[square("A", 3.0, 0)])
            .unwrap();
        assert_eq!(metrics["A"], 0.0);
    }

    #[test]
    fn degenerate_polygon_fails_the_whole_call() {
        let analyzer = DensityAnalyzer::new();
        let cells = vec![
            square("A", 1.0, 4),
            PartitionCell::new("B", vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)], 2),
        ];
        match analyzer.calculate_density_metrics(&cells) {
            Err(AnalyzerError::InvalidGeometry { cell_id, area }) => {
                assert_eq!(cell_id, "B");
                assert_eq!(area, 0.0);
            }
            other => panic!("expected InvalidGeometry, got {other:?}"),
        }
    }

    #[test]
    fn no_cells_is_a_soft_empty_result() {
        let analyzer = DensityAnalyzer::new();
        assert!(analyzer.calculate_density_metrics(&[]).unwrap().is_empty());
        assert!(analyzer.distribution_summary(&HashMap::new()).is_none());
    }

    #[test]
    fn single_value_summary_collapses() {
        let analyzer = DensityAnalyzer::new();
        let metrics = HashMap::from([("A".to_string(), 7.0)]);
        let summary = analyzer.distribution_summary(&metrics).unwrap();
        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.q1, 7.0);
        assert_eq!(summary.median, 7.0);
        assert_eq!(summary.q3, 7.0);
        assert_eq!(summary.min, 7.0);
        assert_eq!(summary.max, 7.0);
        assert_eq!(summary.densities, vec![7.0]);
    }

    #[test]
    fn summary_quartiles_over_known_distribution() {
        let analyzer = DensityAnalyzer::new();
        let metrics: HashMap<CellId, f64> = [1.0, 2.0, 3.0, 4.0, 5.0]
            .iter()
            .enumerate()
            .map(|(i, &d)| (format!("C{i}"), d))
            .collect();
        let summary = analyzer.distribution_summary(&metrics).unwrap();
        assert_eq!(summary.q1, 2.0);
        assert_eq!(summary.median, 3.0);
        assert_eq!(summary.q3, 4.0);
        assert_eq!(summary.mean, 3.0);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 5.0);
    }

    #[test]
    fn analyze_bundles_all_results() {
        let analyzer = DensityAnalyzer::new();
        let cells = vec![square("A", 1.0, 10), square("B", 1.0, 1), square("C", 1.0, 1)];
        let cfg = AnalyzerConfig {
            hotspot_percentile: 90.0,
            anomaly_sigma: 1.0,
            ..AnalyzerConfig::default()
        };
        let report = analyzer.analyze(&cells, &cfg).unwrap();

        assert_eq!(report.metrics.len(), 3);
        assert!(report.hotspots.contains("A"));
        assert_eq!(report.hotspots.len(), 1);
        assert_eq!(report.anomalies.get("A"), Some(&AnomalySeverity::High));
        let summary = report.summary.unwrap();
        assert!((summary.mean - 4.0).abs() < 1e-12);
    }

    #[test]
    fn analyze_with_no_cells_is_empty() {
        let analyzer = DensityAnalyzer::new();
        let report = analyzer.analyze(&[], &AnalyzerConfig::default()).unwrap();
        assert!(report.metrics.is_empty());
        assert!(report.summary.is_none());
        assert!(report.hotspots.is_empty());
        assert!(report.anomalies.is_empty());
    }
}
