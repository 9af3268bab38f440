// Core structs: PartitionCell, DistributionSummary, Clustering, DensityReport
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Opaque partition identifier, unique per cell within one snapshot.
pub type CellId = String;

/// Cluster label assigned to a point that belongs to no cluster.
pub const NOISE: i64 = -1;

/// A 2D coordinate. Used both as a polygon vertex and as a raw data point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Read-only snapshot of one spatial partition, as supplied by the grid
/// provider: identity, boundary polygon and current point assignment count.
#[derive(Debug, Clone, Serialize)]
pub struct PartitionCell {
    pub id: CellId,
    /// Ordered vertex ring. May or may not repeat the first vertex at the
    /// end; both forms describe the same closed polygon.
    pub boundary: Vec<Point>,
    pub point_count: u64,
}

impl PartitionCell {
    pub fn new(id: impl Into<CellId>, boundary: Vec<Point>, point_count: u64) -> Self {
        Self {
            id: id.into(),
            boundary,
            point_count,
        }
    }
}

/// Aggregate statistics over one set of density values.
///
/// `std_dev` is the population standard deviation (divide by n). Quartiles
/// use linear interpolation between order statistics.
#[derive(Debug, Clone, Serialize)]
pub struct DistributionSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// The per-cell density values the statistics were computed from,
    /// sorted ascending.
    pub densities: Vec<f64>,
    pub computed_at: DateTime<Utc>,
}

/// Direction in which a cell's density deviates from the distribution mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnomalySeverity {
    High,
    Low,
}

/// Result of a density-based clustering pass over raw points.
///
/// `labels` is index-aligned with the input: `labels[i]` is the cluster of
/// point `i`, or [`NOISE`]. `clusters` groups the same assignment by label
/// for convenience; noise indices are listed separately.
#[derive(Debug, Clone, Serialize)]
pub struct Clustering {
    pub labels: Vec<i64>,
    pub clusters: HashMap<i64, Vec<usize>>,
    pub noise: Vec<usize>,
}

impl Clustering {
    pub fn empty() -> Self {
        Self {
            labels: Vec::new(),
            clusters: HashMap::new(),
            noise: Vec::new(),
        }
    }

    /// Number of clusters found, not counting noise.
    pub fn cluster_count(&self) -> usize {
        self.clusters.len()
    }
}

/// Bundled output of a full per-cell analysis pass.
#[derive(Debug, Clone, Serialize)]
pub struct DensityReport {
    pub metrics: HashMap<CellId, f64>,
    pub summary: Option<DistributionSummary>,
    pub hotspots: HashSet<CellId>,
    pub anomalies: HashMap<CellId, AnomalySeverity>,
}

#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// A partition polygon with non-positive area poisons comparative
    /// density analysis, so the whole call fails rather than skipping it.
    #[error("invalid geometry for cell '{cell_id}': polygon area {area} is not positive")]
    InvalidGeometry { cell_id: CellId, area: f64 },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
