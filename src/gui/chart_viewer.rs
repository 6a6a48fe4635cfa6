//! Chart Viewer Widget
//! Central panel: title, legend, interactive chart and summary table.

use crate::charts::ChartPlotter;
use crate::state::AppState;
use egui::{Color32, RichText, ScrollArea};

const CHART_HEIGHT: f32 = 520.0;

/// Displays the current view of an [`AppState`].
#[derive(Default)]
pub struct ChartViewer;

impl ChartViewer {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&self, ui: &mut egui::Ui, state: Option<&AppState>) {
        let Some(state) = state else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.label(
                    RichText::new(format!(
                        "Bank Marketing: {} ({} records)",
                        state.selection().label(),
                        state.visible().len()
                    ))
                    .size(18.0)
                    .strong()
                    .color(Color32::from_rgb(70, 130, 180)),
                );
                ui.add_space(8.0);

                ChartPlotter::draw_legend(ui, state.chart());
                ui.add_space(10.0);

                if state.chart().is_empty() {
                    ui.label(RichText::new("No records match this job").size(14.0));
                } else {
                    ChartPlotter::draw_parallel_chart(ui, state.chart(), CHART_HEIGHT);
                }

                ui.add_space(10.0);
                ChartPlotter::draw_summary_table(ui, state.summaries());
            });
    }
}
