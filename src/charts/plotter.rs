//! Chart Plotter Module
//! Draws a [`ParallelChart`] interactively using egui_plot.

use super::layout::ParallelChart;
use crate::data::{Rgb, NEUTRAL_GRAY};
use crate::stats::DimensionSummary;
use egui::{Align2, Color32, RichText};
use egui_plot::{Line, Plot, PlotPoint, PlotPoints, Text};

const BACKGROUND_ALPHA: u8 = 26; // ~0.1 opacity
const FOREGROUND_ALPHA: u8 = 102; // ~0.4 opacity
const TICK_LENGTH: f64 = 6.0;

pub fn color32(color: Rgb, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.0, color.1, color.2, alpha)
}

/// Creates the interactive parallel-coordinates view.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Chart y grows downward; plot y grows upward.
    fn flip(chart: &ParallelChart, (x, y): (f64, f64)) -> [f64; 2] {
        [x, chart.config.height - y]
    }

    /// Draw both line layers, the axes and their labels.
    pub fn draw_parallel_chart(ui: &mut egui::Ui, chart: &ParallelChart, height: f32) {
        let chart_height = chart.config.height;

        Plot::new("parallel_coordinates")
            .height(height)
            .show_axes(false)
            .show_grid(false)
            .allow_zoom(true)
            .allow_drag(true)
            .allow_scroll(false)
            .include_x(0.0)
            .include_x(chart.config.width)
            .include_y(0.0)
            .include_y(chart_height + 20.0)
            .show(ui, |plot_ui| {
                let background = color32(NEUTRAL_GRAY, BACKGROUND_ALPHA);
                for line in &chart.lines {
                    let points: PlotPoints =
                        line.points.iter().map(|&p| Self::flip(chart, p)).collect();
                    plot_ui.line(Line::new(points).color(background).width(0.5));
                }

                for line in &chart.lines {
                    let points: PlotPoints =
                        line.points.iter().map(|&p| Self::flip(chart, p)).collect();
                    plot_ui.line(
                        Line::new(points)
                            .color(color32(line.color, FOREGROUND_ALPHA))
                            .width(0.8),
                    );
                }

                for axis in &chart.axes {
                    plot_ui.line(
                        Line::new(PlotPoints::from(vec![
                            [axis.x, 0.0],
                            [axis.x, chart_height],
                        ]))
                        .color(Color32::BLACK)
                        .width(1.0),
                    );

                    for tick in &axis.ticks {
                        let y = chart_height - tick.y;
                        plot_ui.line(
                            Line::new(PlotPoints::from(vec![
                                [axis.x - TICK_LENGTH, y],
                                [axis.x, y],
                            ]))
                            .color(Color32::BLACK)
                            .width(1.0),
                        );
                        plot_ui.text(
                            Text::new(
                                PlotPoint::new(axis.x - TICK_LENGTH - 2.0, y),
                                RichText::new(&tick.text).size(10.0),
                            )
                            .anchor(Align2::RIGHT_CENTER)
                            .color(Color32::GRAY),
                        );
                    }

                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(axis.x, chart_height + 10.0),
                            RichText::new(axis.label).size(11.0).strong(),
                        )
                        .anchor(Align2::CENTER_BOTTOM),
                    );
                }
            });
    }

    /// Horizontal legend row: color swatch plus meaning.
    pub fn draw_legend(ui: &mut egui::Ui, chart: &ParallelChart) {
        ui.horizontal(|ui| {
            for entry in &chart.legend {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                ui.painter()
                    .circle_filled(rect.center(), 6.0, color32(entry.color, 255));
                ui.label(RichText::new(entry.label).size(13.0));
                ui.add_space(12.0);
            }
        });
    }

    /// Draw per-dimension summary table
    pub fn draw_summary_table(ui: &mut egui::Ui, summaries: &[DimensionSummary]) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new("dimension_summary_table")
                    .striped(true)
                    .min_col_width(55.0)
                    .spacing([8.0, 4.0])
                    .show(ui, |ui| {
                        for header in [
                            "Dimension", "N", "Min", "P01", "Median", "P99", "Max", "Mean",
                            "Std",
                        ] {
                            ui.label(RichText::new(header).strong().size(11.0));
                        }
                        ui.end_row();

                        for s in summaries {
                            ui.label(RichText::new(s.dimension.label()).size(11.0));
                            ui.label(RichText::new(s.count.to_string()).size(11.0));
                            for value in [s.min, s.p01, s.median, s.p99, s.max, s.mean, s.std] {
                                let text = if value.is_nan() {
                                    "-".to_string()
                                } else {
                                    format!("{:.2}", value)
                                };
                                ui.label(RichText::new(text).size(11.0));
                            }
                            ui.end_row();
                        }
                    });
            });
    }
}
