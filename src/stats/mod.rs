//! Stats module - Quantiles, extents and descriptive statistics

mod calculator;

pub use calculator::{DimensionSummary, StatsCalculator};
