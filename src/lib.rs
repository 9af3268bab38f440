//! Spatial density analyzer for a storage engine's partitioning layer.
//!
//! Takes a snapshot of partition cells (polygon boundaries plus point
//! counts) and/or raw point coordinates from the grid provider and exposes
//! four independent, read-only analyses: per-cell density metrics,
//! percentile-based hotspot detection, DBSCAN cluster analysis over raw
//! points, and standard-deviation-band anomaly flagging. All results are
//! call-scoped plain data; nothing is persisted or cached between calls,
//! so the analyzer is safe to invoke concurrently on independent snapshots.

pub mod analyzer;
pub mod config;
pub mod geometry;
pub mod model;
pub mod normalizer;
pub mod utils;

pub use analyzer::{DensityAnalysis, DensityAnalyzer};
pub use config::{AnalyzerConfig, load_config};
pub use model::{
    AnalyzerError, AnomalySeverity, CellId, Clustering, DensityReport, DistributionSummary,
    NOISE, PartitionCell, Point,
};
