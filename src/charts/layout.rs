//! Parallel Coordinates Layout
//! Turns a record set into renderer-independent geometry: one scale per
//! dimension, one polyline per record, axes with ticks, and legend entries.
//!
//! Coordinates are in chart pixels: x grows to the right, y grows downward
//! and `0` is the top of the plotting area (margins excluded).

use super::scale::{LinearScale, PointScale};
use crate::data::{BankRecord, DataProcessor, Dimension, Outcome, Rgb};
use crate::stats::StatsCalculator;
use serde::{Deserialize, Serialize};

/// Space around the plotting area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Chart geometry settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    /// Outer padding of the axis positions, in steps.
    pub axis_padding: f64,
    /// Approximate tick count per axis.
    pub ticks: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 450.0,
            margin: Margin {
                top: 50.0,
                right: 80.0,
                bottom: 30.0,
                left: 50.0,
            },
            axis_padding: 0.4,
            ticks: 8,
        }
    }
}

impl ChartConfig {
    /// Full drawing size including margins.
    pub fn outer_size(&self) -> (u32, u32) {
        (
            (self.width + self.margin.left + self.margin.right).round() as u32,
            (self.height + self.margin.top + self.margin.bottom).round() as u32,
        )
    }
}

/// One record's polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLine {
    pub index: usize,
    pub color: Rgb,
    /// One vertex per dimension, left to right.
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub y: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisGeometry {
    pub dimension: Dimension,
    pub label: &'static str,
    pub x: f64,
    pub ticks: Vec<Tick>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub color: Rgb,
    pub label: &'static str,
    pub x: f64,
    pub y: f64,
}

/// Everything needed to draw one parallel-coordinates chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ParallelChart {
    pub config: ChartConfig,
    pub scales: Vec<(Dimension, LinearScale)>,
    pub lines: Vec<ChartLine>,
    pub axes: Vec<AxisGeometry>,
    pub legend: Vec<LegendEntry>,
}

/// Legend offset from the top-right corner of the plotting area.
const LEGEND_INSET: f64 = 40.0;
const LEGEND_ROW: f64 = 20.0;

impl ParallelChart {
    /// Build the chart for the given records. Scales are derived from these
    /// records only.
    pub fn build(records: &[BankRecord], config: &ChartConfig) -> Self {
        let scales: Vec<(Dimension, LinearScale)> = Dimension::ALL
            .iter()
            .map(|&dimension| {
                let domain = StatsCalculator::extent(records.iter().map(|r| r.value(dimension)))
                    .unwrap_or((0.0, 0.0));
                (
                    dimension,
                    LinearScale::new(domain, (config.height, 0.0)),
                )
            })
            .collect();

        let x = PointScale::new(Dimension::ALL.len(), (0.0, config.width), config.axis_padding);

        let points = DataProcessor::stack_to_long(records);
        let lines = DataProcessor::group_by_record(&points)
            .into_iter()
            .map(|(index, group)| ChartLine {
                index,
                color: records[index].color,
                points: group
                    .iter()
                    .map(|p| {
                        let ordinal = p.dimension.ordinal();
                        (x.position(ordinal), scales[ordinal].1.map(p.value))
                    })
                    .collect(),
            })
            .collect();

        let axes = scales
            .iter()
            .map(|&(dimension, scale)| AxisGeometry {
                dimension,
                label: dimension.label(),
                x: x.position(dimension.ordinal()),
                ticks: scale
                    .ticks(config.ticks)
                    .into_iter()
                    .map(|value| Tick {
                        y: scale.map(value),
                        text: scale.tick_format(value, config.ticks),
                    })
                    .collect(),
            })
            .collect();

        let legend = Outcome::ALL
            .iter()
            .enumerate()
            .map(|(row, outcome)| LegendEntry {
                color: outcome.color(),
                label: outcome.label(),
                x: config.width - LEGEND_INSET,
                y: LEGEND_INSET + row as f64 * LEGEND_ROW,
            })
            .collect();

        Self {
            config: *config,
            scales,
            lines,
            axes,
            legend,
        }
    }

    pub fn scale(&self, dimension: Dimension) -> &LinearScale {
        &self.scales[dimension.ordinal()].1
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DataProcessor, JobFilter, ORANGE, STEELBLUE};

    fn records() -> Vec<BankRecord> {
        vec![
            BankRecord::new(25.0, 100.0, 60.0, 1.0, 0.0, -1.0, "admin", "yes"),
            BankRecord::new(45.0, 900.0, 300.0, 3.0, 2.0, 180.0, "blue-collar", "no"),
            BankRecord::new(35.0, 500.0, 120.0, 2.0, 1.0, 90.0, "admin", "no"),
            BankRecord::new(60.0, 2500.0, 600.0, 5.0, 4.0, 300.0, "blue-collar", "yes"),
        ]
    }

    #[test]
    fn test_one_line_per_record_with_six_vertices() {
        let chart = ParallelChart::build(&records(), &ChartConfig::default());
        assert_eq!(chart.lines.len(), 4);
        assert!(chart.lines.iter().all(|l| l.points.len() == 6));
        assert_eq!(chart.lines[0].color, STEELBLUE);
        assert_eq!(chart.lines[1].color, ORANGE);

        let xs: Vec<f64> = chart.lines[0].points.iter().map(|p| p.0).collect();
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_extremes_map_to_plot_edges() {
        let config = ChartConfig::default();
        let chart = ParallelChart::build(&records(), &config);

        // Youngest record sits at the bottom of the age axis, oldest at the top
        assert_eq!(chart.lines[0].points[0].1, config.height);
        assert_eq!(chart.lines[3].points[0].1, 0.0);
        assert_eq!(chart.scale(Dimension::Age).domain, (25.0, 60.0));
    }

    #[test]
    fn test_scales_follow_filtered_subset() {
        let all = records();
        let admin = DataProcessor::filter_by_job(&all, &JobFilter::Job("admin".into()));
        let chart = ParallelChart::build(&admin, &ChartConfig::default());

        assert_eq!(chart.lines.len(), 2);
        assert_eq!(chart.scale(Dimension::Balance).domain, (100.0, 500.0));
        assert_eq!(chart.scale(Dimension::Duration).domain, (1.0, 2.0));
    }

    #[test]
    fn test_build_is_idempotent() {
        let data = records();
        let config = ChartConfig::default();
        assert_eq!(
            ParallelChart::build(&data, &config),
            ParallelChart::build(&data, &config)
        );
    }

    #[test]
    fn test_axes_and_legend() {
        let config = ChartConfig::default();
        let chart = ParallelChart::build(&records(), &config);

        assert_eq!(chart.axes.len(), 6);
        assert_eq!(chart.axes[2].label, "Call Duration (min)");
        assert!(chart.axes.iter().all(|a| !a.ticks.is_empty()));
        assert!(chart
            .axes
            .iter()
            .flat_map(|a| a.ticks.iter())
            .all(|t| t.y >= 0.0 && t.y <= config.height));

        assert_eq!(chart.legend.len(), 2);
        assert_eq!(chart.legend[0].label, "Subscribed");
        assert_eq!((chart.legend[0].x, chart.legend[0].y), (960.0, 40.0));
        assert_eq!(chart.legend[1].y, 60.0);
    }

    #[test]
    fn test_empty_view() {
        let chart = ParallelChart::build(&[], &ChartConfig::default());
        assert!(chart.is_empty());
        assert_eq!(chart.axes.len(), 6);
        assert_eq!(ChartConfig::default().outer_size(), (1130, 530));
    }
}
