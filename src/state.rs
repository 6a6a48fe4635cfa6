//! Application State
//! Holds the cleaned dataset and the view derived from the job selection.

use crate::charts::{ChartConfig, ParallelChart};
use crate::data::{BankRecord, DataProcessor, JobFilter};
use crate::stats::{DimensionSummary, StatsCalculator};

/// Cleaned dataset plus everything derived from the current job selection.
///
/// The visible view is a pure function of `(dataset, selection)`: every
/// selection change rebuilds the chart and summaries from scratch.
pub struct AppState {
    /// Outlier-trimmed records, read-only after load.
    dataset: Vec<BankRecord>,

    /// Distinct jobs in first-seen order.
    jobs: Vec<String>,

    /// Current job selection.
    selection: JobFilter,

    /// Records passing the current selection.
    visible: Vec<BankRecord>,

    /// Chart geometry for `visible`.
    chart: ParallelChart,

    /// Per-dimension statistics for `visible`.
    summaries: Vec<DimensionSummary>,

    config: ChartConfig,
}

impl AppState {
    /// Ingest a cleaned dataset and show all jobs.
    pub fn new(dataset: Vec<BankRecord>, config: ChartConfig) -> Self {
        let jobs = DataProcessor::unique_jobs(&dataset);
        let mut state = Self {
            dataset,
            jobs,
            selection: JobFilter::All,
            visible: Vec::new(),
            chart: ParallelChart::build(&[], &config),
            summaries: Vec::new(),
            config,
        };
        state.refresh();
        state
    }

    /// Switch the job selection and rebuild the view.
    pub fn select_job(&mut self, selection: JobFilter) {
        self.selection = selection;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.visible = DataProcessor::filter_by_job(&self.dataset, &self.selection);
        self.chart = ParallelChart::build(&self.visible, &self.config);
        self.summaries = StatsCalculator::summarize_all_parallel(&self.visible);
        log::debug!(
            "View '{}': {} of {} records",
            self.selection.label(),
            self.visible.len(),
            self.dataset.len()
        );
    }

    pub fn dataset(&self) -> &[BankRecord] {
        &self.dataset
    }

    pub fn jobs(&self) -> &[String] {
        &self.jobs
    }

    /// `(value, label)` pairs for the selection control, "all" first.
    pub fn job_options(&self) -> Vec<(String, String)> {
        DataProcessor::job_options(&self.jobs)
    }

    pub fn selection(&self) -> &JobFilter {
        &self.selection
    }

    pub fn visible(&self) -> &[BankRecord] {
        &self.visible
    }

    pub fn chart(&self) -> &ParallelChart {
        &self.chart
    }

    pub fn summaries(&self) -> &[DimensionSummary] {
        &self.summaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dimension;

    fn dataset() -> Vec<BankRecord> {
        vec![
            BankRecord::new(30.0, 100.0, 120.0, 1.0, 0.0, -1.0, "admin", "yes"),
            BankRecord::new(50.0, 3000.0, 600.0, 4.0, 3.0, 200.0, "blue-collar", "no"),
            BankRecord::new(40.0, 700.0, 240.0, 2.0, 1.0, 100.0, "admin", "no"),
        ]
    }

    #[test]
    fn test_initial_state_shows_all_jobs() {
        let state = AppState::new(dataset(), ChartConfig::default());
        assert_eq!(state.selection(), &JobFilter::All);
        assert_eq!(state.visible().len(), 3);
        assert_eq!(state.chart().lines.len(), 3);
        assert_eq!(state.jobs(), &["admin".to_string(), "blue-collar".to_string()]);
        assert_eq!(state.job_options().len(), 3);
    }

    #[test]
    fn test_select_job_recomputes_scales() {
        let mut state = AppState::new(dataset(), ChartConfig::default());
        assert_eq!(state.chart().scale(Dimension::Age).domain, (30.0, 50.0));

        state.select_job(JobFilter::Job("admin".into()));
        assert_eq!(state.visible().len(), 2);
        assert_eq!(state.chart().lines.len(), 2);
        assert_eq!(state.chart().scale(Dimension::Age).domain, (30.0, 40.0));
        assert_eq!(state.summaries()[0].count, 2);

        state.select_job(JobFilter::All);
        assert_eq!(state.chart().scale(Dimension::Age).domain, (30.0, 50.0));
    }

    #[test]
    fn test_reselecting_is_idempotent() {
        let mut state = AppState::new(dataset(), ChartConfig::default());
        state.select_job(JobFilter::Job("blue-collar".into()));
        let first = state.chart().clone();
        state.select_job(JobFilter::Job("blue-collar".into()));
        assert_eq!(state.chart(), &first);
    }

    #[test]
    fn test_unknown_job_yields_empty_view() {
        let mut state = AppState::new(dataset(), ChartConfig::default());
        state.select_job(JobFilter::Job("student".into()));
        assert!(state.visible().is_empty());
        assert!(state.chart().is_empty());
    }
}
