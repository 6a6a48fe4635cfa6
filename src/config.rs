//! Application configuration, read from an optional JSON file.

use crate::charts::ChartConfig;
use crate::data::{OutlierPolicy, QuantileBounds};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Settings file looked up in the working directory.
pub const CONFIG_FILE: &str = "bankviz.json";

/// Dataset loaded at startup when nothing else is configured.
pub const DEFAULT_DATA_PATH: &str = "bank-full.csv";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Quantile bounds must satisfy 0 <= lower <= upper <= 1 (got {0}, {1})")]
    InvalidQuantiles(f64, f64),
    #[error("Chart size must be positive (got {0} x {1})")]
    InvalidChartSize(f64, f64),
    #[error("Chart margins must be non-negative")]
    InvalidMargin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub outlier_policy: OutlierPolicy,
    pub lower_quantile: f64,
    pub upper_quantile: f64,
    pub chart: ChartConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let bounds = QuantileBounds::default();
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            outlier_policy: OutlierPolicy::default(),
            lower_quantile: bounds.lower,
            upper_quantile: bounds.upper,
            chart: ChartConfig::default(),
        }
    }
}

impl AppConfig {
    /// Read and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read [`CONFIG_FILE`] if present, falling back to defaults.
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                log::info!("Using settings from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let (lower, upper) = (self.lower_quantile, self.upper_quantile);
        if !(0.0..=1.0).contains(&lower) || !(0.0..=1.0).contains(&upper) || lower > upper {
            return Err(ConfigError::InvalidQuantiles(lower, upper));
        }

        let chart = &self.chart;
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(chart.width) || !positive(chart.height) {
            return Err(ConfigError::InvalidChartSize(chart.width, chart.height));
        }
        let margin = chart.margin;
        if [margin.top, margin.right, margin.bottom, margin.left]
            .iter()
            .any(|v| !v.is_finite() || *v < 0.0)
        {
            return Err(ConfigError::InvalidMargin);
        }
        Ok(())
    }

    pub fn quantile_bounds(&self) -> QuantileBounds {
        QuantileBounds {
            lower: self.lower_quantile,
            upper: self.upper_quantile,
        }
    }
}
