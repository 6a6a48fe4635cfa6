//! Data Processor Module
//! Handles outlier trimming, job filtering and the wide-to-long reshape.

use super::record::{BankRecord, Dimension};
use crate::stats::StatsCalculator;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Value of the "all jobs" selection option.
pub const ALL_JOBS_VALUE: &str = "all";
/// Display text of the "all jobs" selection option.
pub const ALL_JOBS_LABEL: &str = "All Jobs";

/// How per-field percentile bounds are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutlierPolicy {
    /// Each field's bounds are computed on the output of the previous field's pass.
    #[default]
    Sequential,
    /// All bounds are computed on the input; a record must pass every field.
    Intersected,
}

/// Lower/upper quantiles used for trimming.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantileBounds {
    pub lower: f64,
    pub upper: f64,
}

impl Default for QuantileBounds {
    fn default() -> Self {
        Self {
            lower: 0.01,
            upper: 0.99,
        }
    }
}

/// Job selection: everything, or a single job category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum JobFilter {
    #[default]
    All,
    Job(String),
}

impl JobFilter {
    /// Parse a selection control value.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_JOBS_VALUE {
            JobFilter::All
        } else {
            JobFilter::Job(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            JobFilter::All => ALL_JOBS_VALUE,
            JobFilter::Job(job) => job,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            JobFilter::All => ALL_JOBS_LABEL,
            JobFilter::Job(job) => job,
        }
    }

    pub fn matches(&self, record: &BankRecord) -> bool {
        match self {
            JobFilter::All => true,
            JobFilter::Job(job) => record.job == *job,
        }
    }
}

/// A record's value on one dimension, tagged with its position in the set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlottedPoint {
    pub index: usize,
    pub dimension: Dimension,
    pub value: f64,
}

/// Handles data cleaning and transformation operations.
pub struct DataProcessor;

impl DataProcessor {
    /// Percentile bounds of one field, or `None` when the field has no numeric values.
    pub fn percentile_bounds(
        records: &[BankRecord],
        dimension: Dimension,
        bounds: QuantileBounds,
    ) -> Option<(f64, f64)> {
        let sorted = StatsCalculator::sorted_numeric(records.iter().map(|r| r.value(dimension)));
        let low = StatsCalculator::quantile_sorted(&sorted, bounds.lower)?;
        let high = StatsCalculator::quantile_sorted(&sorted, bounds.upper)?;
        Some((low, high))
    }

    fn within(value: f64, range: Option<(f64, f64)>) -> bool {
        // NaN compares false, so non-numeric values never pass
        range.is_some_and(|(low, high)| value >= low && value <= high)
    }

    /// Keep only records inside `[p_lower, p_upper]` on one field.
    pub fn trim_dimension(
        records: Vec<BankRecord>,
        dimension: Dimension,
        bounds: QuantileBounds,
    ) -> Vec<BankRecord> {
        let range = Self::percentile_bounds(&records, dimension, bounds);
        if let Some((low, high)) = range {
            log::debug!("{} bounds: [{}, {}]", dimension, low, high);
        }
        records
            .into_iter()
            .filter(|r| Self::within(r.value(dimension), range))
            .collect()
    }

    /// Drop records that are outliers on any tracked field.
    pub fn remove_outliers(
        records: Vec<BankRecord>,
        policy: OutlierPolicy,
        bounds: QuantileBounds,
    ) -> Vec<BankRecord> {
        let before = records.len();

        let cleaned: Vec<BankRecord> = match policy {
            OutlierPolicy::Sequential => Dimension::ALL
                .iter()
                .fold(records, |acc, &dimension| {
                    Self::trim_dimension(acc, dimension, bounds)
                }),
            OutlierPolicy::Intersected => {
                let ranges: Vec<(Dimension, Option<(f64, f64)>)> = Dimension::ALL
                    .iter()
                    .map(|&d| (d, Self::percentile_bounds(&records, d, bounds)))
                    .collect();
                records
                    .into_iter()
                    .filter(|r| {
                        ranges
                            .iter()
                            .all(|&(d, range)| Self::within(r.value(d), range))
                    })
                    .collect()
            }
        };

        log::info!(
            "Outlier removal ({:?}) kept {} of {} records",
            policy,
            cleaned.len(),
            before
        );
        cleaned
    }

    /// Distinct job values in first-seen order.
    pub fn unique_jobs(records: &[BankRecord]) -> Vec<String> {
        let mut seen = HashSet::new();
        records
            .iter()
            .filter(|r| seen.insert(r.job.as_str()))
            .map(|r| r.job.clone())
            .collect()
    }

    /// Selection control options: `(value, label)` with a leading "all" entry.
    pub fn job_options(jobs: &[String]) -> Vec<(String, String)> {
        std::iter::once((ALL_JOBS_VALUE.to_string(), ALL_JOBS_LABEL.to_string()))
            .chain(jobs.iter().map(|j| (j.clone(), j.clone())))
            .collect()
    }

    /// Records matching the job filter, order preserved.
    pub fn filter_by_job(records: &[BankRecord], filter: &JobFilter) -> Vec<BankRecord> {
        match filter {
            JobFilter::All => records.to_vec(),
            JobFilter::Job(_) => records.iter().filter(|r| filter.matches(r)).cloned().collect(),
        }
    }

    /// Transform records to long format: one point per record per dimension.
    pub fn stack_to_long(records: &[BankRecord]) -> Vec<PlottedPoint> {
        Dimension::ALL
            .iter()
            .flat_map(move |&dimension| {
                records.iter().enumerate().map(move |(index, r)| PlottedPoint {
                    index,
                    dimension,
                    value: r.value(dimension),
                })
            })
            .collect()
    }

    /// Group long-format points back by record, each group in axis order.
    pub fn group_by_record(points: &[PlottedPoint]) -> BTreeMap<usize, Vec<PlottedPoint>> {
        let mut groups: BTreeMap<usize, Vec<PlottedPoint>> = BTreeMap::new();
        for point in points {
            groups.entry(point.index).or_default().push(*point);
        }
        for group in groups.values_mut() {
            group.sort_by_key(|p| p.dimension.ordinal());
        }
        groups
    }
}
