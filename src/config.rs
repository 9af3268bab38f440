use serde::Deserialize;
use std::fs;

/// Tuning knobs for a full analysis pass. All fields fall back to the
/// defaults below when absent from the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzerConfig {
    /// Percentile in (0, 100) above which a cell counts as a hotspot.
    #[serde(default = "default_hotspot_percentile")]
    pub hotspot_percentile: f64,
    /// DBSCAN neighborhood radius in normalized coordinate space.
    #[serde(default = "default_eps")]
    pub eps: f64,
    /// Minimum eps-neighborhood size (including the point itself) for a
    /// point to be a cluster core.
    #[serde(default = "default_min_samples")]
    pub min_samples: usize,
    /// Standard-deviation multiplier for density anomaly flagging.
    #[serde(default = "default_anomaly_sigma")]
    pub anomaly_sigma: f64,
}

fn default_hotspot_percentile() -> f64 {
    95.0
}

fn default_eps() -> f64 {
    0.05
}

fn default_min_samples() -> usize {
    4
}

fn default_anomaly_sigma() -> f64 {
    2.0
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            hotspot_percentile: default_hotspot_percentile(),
            eps: default_eps(),
            min_samples: default_min_samples(),
            anomaly_sigma: default_anomaly_sigma(),
        }
    }
}

pub fn load_config(path: &str) -> Result<AnalyzerConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AnalyzerConfig = serde_json::from_str(&content)?;
    Ok(config)
}
