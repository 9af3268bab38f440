// Analyzer module: one submodule per analysis kind.

pub mod anomaly;
pub mod clustering;
pub mod density_analysis;
pub mod hotspots;

// Re-export the analyzer seam so callers don't reach into submodules.
pub use density_analysis::{DensityAnalysis, DensityAnalyzer};
