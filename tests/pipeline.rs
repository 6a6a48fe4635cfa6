//! Integration tests for the load → clean → view → render pipeline

use bankviz::data::{OutlierPolicy, QuantileBounds, ORANGE, STEELBLUE};
use bankviz::{
    load_and_clean, AppState, ChartConfig, DataLoader, DataProcessor, Dimension, JobFilter,
    ParallelChart, StaticChartRenderer,
};
use std::io::Write;
use tempfile::NamedTempFile;

const HEADER: &str =
    "\"age\";\"job\";\"marital\";\"balance\";\"duration\";\"campaign\";\"pdays\";\"previous\";\"y\"";

fn write_row(file: &mut NamedTempFile, i: usize, job: &str, balance: i64, y: &str) {
    let pdays: i64 = if i % 3 == 0 { -1 } else { (i % 300) as i64 };
    writeln!(
        file,
        "{};\"{}\";\"married\";{};{};{};{};{};\"{}\"",
        20 + i % 50,
        job,
        balance,
        60 + (i * 37) % 900,
        1 + i % 6,
        pdays,
        i % 4,
        y
    )
    .unwrap();
}

/// 400 regular rows alternating admin / blue-collar, plus one admin row
/// with an extreme balance.
fn create_test_csv() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", HEADER).unwrap();

    for i in 0..400 {
        let job = if i % 2 == 0 { "admin" } else { "blue-collar" };
        let y = if i % 5 == 0 { "yes" } else { "no" };
        let balance = ((i * 131) % 5000) as i64 - 500;
        write_row(&mut file, i, job, balance, y);
    }
    write_row(&mut file, 10, "admin", 10_000_000, "no");

    file
}

#[test]
fn test_end_to_end_pipeline() {
    let file = create_test_csv();

    let raw = DataLoader::load_records(file.path()).unwrap();
    assert_eq!(raw.len(), 401);

    let cleaned = load_and_clean(
        file.path(),
        OutlierPolicy::Sequential,
        QuantileBounds::default(),
    )
    .unwrap();
    assert!(!cleaned.is_empty());
    assert!(cleaned.len() < raw.len());

    // Extreme balance is gone even though its other fields are typical
    assert!(cleaned.iter().all(|r| r.balance < 10_000_000.0));

    // Duration is in minutes and colors follow the outcome
    assert!(cleaned.iter().all(|r| r.duration >= 1.0 && r.duration <= 16.0));
    for record in &cleaned {
        let expected = if record.y == "yes" { STEELBLUE } else { ORANGE };
        assert_eq!(record.color, expected);
    }
}

#[test]
fn test_retained_values_within_sequential_bounds() {
    let file = create_test_csv();
    let bounds = QuantileBounds::default();
    let raw = DataLoader::load_records(file.path()).unwrap();
    let cleaned = DataProcessor::remove_outliers(raw.clone(), OutlierPolicy::Sequential, bounds);

    // Replay the passes and check the final set against every pass's bounds
    let mut current = raw;
    for dimension in Dimension::ALL {
        let (low, high) = DataProcessor::percentile_bounds(&current, dimension, bounds).unwrap();
        assert!(cleaned
            .iter()
            .all(|r| r.value(dimension) >= low && r.value(dimension) <= high));
        current = DataProcessor::trim_dimension(current, dimension, bounds);
    }
    assert_eq!(current, cleaned);
}

#[test]
fn test_job_filter_scenario() {
    let file = create_test_csv();
    let cleaned = load_and_clean(
        file.path(),
        OutlierPolicy::Sequential,
        QuantileBounds::default(),
    )
    .unwrap();
    let admin_count = cleaned.iter().filter(|r| r.job == "admin").count();

    // Row 0 (admin) holds the lowest balance and is trimmed, so blue-collar
    // is the first job seen in the cleaned data
    let mut state = AppState::new(cleaned.clone(), ChartConfig::default());
    assert_eq!(state.jobs(), &["blue-collar".to_string(), "admin".to_string()]);

    state.select_job(JobFilter::Job("admin".to_string()));
    assert_eq!(state.visible().len(), admin_count);
    assert_eq!(state.chart().lines.len(), admin_count);

    // Domains come from the admin subset only
    for dimension in Dimension::ALL {
        let values = state.visible().iter().map(|r| r.value(dimension));
        let min = values.clone().fold(f64::INFINITY, f64::min);
        let max = values.fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(state.chart().scale(dimension).domain, (min, max));
    }

    // Admin rows have even ages only; the full view also spans odd ages up
    // to 69, so its age domain is wider
    assert!(state.visible().iter().all(|r| r.age as i64 % 2 == 0));
    let full = ParallelChart::build(&cleaned, &ChartConfig::default());
    assert_ne!(
        full.scale(Dimension::Age).domain,
        state.chart().scale(Dimension::Age).domain
    );
}

#[test]
fn test_render_twice_is_identical() {
    let file = create_test_csv();
    let cleaned = load_and_clean(
        file.path(),
        OutlierPolicy::Sequential,
        QuantileBounds::default(),
    )
    .unwrap();
    let state = AppState::new(cleaned, ChartConfig::default());

    let first = StaticChartRenderer::render_svg_string(state.chart()).unwrap();
    let second = StaticChartRenderer::render_svg_string(state.chart()).unwrap();
    assert_eq!(first, second);
    assert!(first.contains("Days Since Last Contact"));
}

#[test]
fn test_intersected_policy_keeps_at_least_sequential() {
    let file = create_test_csv();
    let bounds = QuantileBounds::default();
    let raw = DataLoader::load_records(file.path()).unwrap();

    let sequential = DataProcessor::remove_outliers(raw.clone(), OutlierPolicy::Sequential, bounds);
    let intersected = DataProcessor::remove_outliers(raw, OutlierPolicy::Intersected, bounds);

    assert!(!sequential.is_empty());
    assert!(intersected.iter().all(|r| r.balance < 10_000_000.0));
    assert!(intersected.len() >= sequential.len());
}
