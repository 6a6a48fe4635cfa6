//! Statistics Calculator Module
//! Quantiles, extents and per-dimension descriptive statistics.

use crate::data::{BankRecord, Dimension};
use rayon::prelude::*;
use statrs::statistics::Statistics;

/// Descriptive statistics for one tracked dimension of the visible records.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionSummary {
    pub dimension: Dimension,
    pub count: usize,
    pub min: f64,
    pub p01: f64,
    pub median: f64,
    pub p99: f64,
    pub max: f64,
    pub mean: f64,
    pub std: f64,
}

impl DimensionSummary {
    fn empty(dimension: Dimension) -> Self {
        Self {
            dimension,
            count: 0,
            min: f64::NAN,
            p01: f64::NAN,
            median: f64::NAN,
            p99: f64::NAN,
            max: f64::NAN,
            mean: f64::NAN,
            std: f64::NAN,
        }
    }
}

/// Handles statistical calculations.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Numeric (non-NaN) values sorted ascending.
    pub fn sorted_numeric(values: impl IntoIterator<Item = f64>) -> Vec<f64> {
        let mut sorted: Vec<f64> = values.into_iter().filter(|v| !v.is_nan()).collect();
        sorted.sort_by(|a, b| a.total_cmp(b));
        sorted
    }

    /// Quantile with linear interpolation between order statistics.
    ///
    /// NaN values are ignored. With `n` numeric values the rank is
    /// `(n - 1) * p`; `p <= 0` or a single value yields the minimum and
    /// `p >= 1` yields the maximum. Returns `None` when nothing is numeric.
    pub fn quantile(values: &[f64], p: f64) -> Option<f64> {
        if p.is_nan() {
            return None;
        }
        let sorted = Self::sorted_numeric(values.iter().copied());
        Self::quantile_sorted(&sorted, p)
    }

    /// [`StatsCalculator::quantile`] for values already filtered and sorted.
    pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
        let n = sorted.len();
        if n == 0 || p.is_nan() {
            return None;
        }
        if p <= 0.0 || n < 2 {
            return Some(sorted[0]);
        }
        if p >= 1.0 {
            return Some(sorted[n - 1]);
        }

        let rank = (n - 1) as f64 * p;
        let lower = rank.floor() as usize;
        let low = sorted[lower];
        let high = sorted[(lower + 1).min(n - 1)];
        Some(low + (high - low) * (rank - lower as f64))
    }

    /// Minimum and maximum, skipping NaN.
    pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
        values
            .into_iter()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Compute descriptive statistics for one dimension.
    pub fn summarize(records: &[BankRecord], dimension: Dimension) -> DimensionSummary {
        let sorted = Self::sorted_numeric(records.iter().map(|r| r.value(dimension)));
        if sorted.is_empty() {
            return DimensionSummary::empty(dimension);
        }

        let std = if sorted.len() > 1 {
            sorted.iter().std_dev()
        } else {
            0.0
        };

        DimensionSummary {
            dimension,
            count: sorted.len(),
            min: sorted[0],
            p01: Self::quantile_sorted(&sorted, 0.01).unwrap_or(f64::NAN),
            median: Self::quantile_sorted(&sorted, 0.5).unwrap_or(f64::NAN),
            p99: Self::quantile_sorted(&sorted, 0.99).unwrap_or(f64::NAN),
            max: sorted[sorted.len() - 1],
            mean: sorted.iter().mean(),
            std,
        }
    }

    /// Compute summaries for all tracked dimensions in parallel, in axis order.
    pub fn summarize_all_parallel(records: &[BankRecord]) -> Vec<DimensionSummary> {
        Dimension::ALL
            .par_iter()
            .map(|&dimension| Self::summarize(records, dimension))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_quantile_interpolates() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(StatsCalculator::quantile(&values, 0.5), Some(3.0));
        assert!(approx(StatsCalculator::quantile(&values, 0.01).unwrap(), 1.04));
        assert!(approx(StatsCalculator::quantile(&values, 0.99).unwrap(), 4.96));
    }

    #[test]
    fn test_quantile_edges() {
        assert_eq!(StatsCalculator::quantile(&[], 0.5), None);
        assert_eq!(StatsCalculator::quantile(&[7.0], 0.99), Some(7.0));
        assert_eq!(StatsCalculator::quantile(&[3.0, 1.0, 2.0], 0.0), Some(1.0));
        assert_eq!(StatsCalculator::quantile(&[3.0, 1.0, 2.0], 1.0), Some(3.0));
        assert_eq!(StatsCalculator::quantile(&[1.0, 2.0], f64::NAN), None);
    }

    #[test]
    fn test_quantile_ignores_nan() {
        let values = [f64::NAN, 10.0, 0.0, f64::NAN];
        assert_eq!(StatsCalculator::quantile(&values, 0.5), Some(5.0));
        assert_eq!(StatsCalculator::quantile(&[f64::NAN], 0.5), None);
    }

    #[test]
    fn test_extent() {
        assert_eq!(
            StatsCalculator::extent(vec![3.0, f64::NAN, -2.0, 8.5]),
            Some((-2.0, 8.5))
        );
        assert_eq!(StatsCalculator::extent(vec![f64::NAN]), None);
        assert_eq!(StatsCalculator::extent(Vec::new()), None);
    }

    #[test]
    fn test_summaries_follow_axis_order() {
        let records: Vec<BankRecord> = (0..10)
            .map(|i| {
                BankRecord::new(
                    20.0 + i as f64,
                    100.0 * i as f64,
                    60.0,
                    1.0,
                    0.0,
                    -1.0,
                    "admin.",
                    "no",
                )
            })
            .collect();

        let summaries = StatsCalculator::summarize_all_parallel(&records);
        assert_eq!(summaries.len(), 6);
        assert_eq!(summaries[0].dimension, Dimension::Age);
        assert_eq!(summaries[0].count, 10);
        assert_eq!(summaries[0].min, 20.0);
        assert_eq!(summaries[0].max, 29.0);
        assert!(approx(summaries[0].mean, 24.5));
        assert!(approx(summaries[2].mean, 1.0));
        assert!(approx(summaries[2].std, 0.0));
    }

    #[test]
    fn test_summary_of_empty_view() {
        let summary = StatsCalculator::summarize(&[], Dimension::Balance);
        assert_eq!(summary.count, 0);
        assert!(summary.mean.is_nan());
    }
}
