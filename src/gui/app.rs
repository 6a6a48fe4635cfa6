//! BankViz Main Application
//! Main window with control panel and chart viewer.

use crate::charts::StaticChartRenderer;
use crate::config::AppConfig;
use crate::data::{self, BankRecord};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use crate::state::AppState;
use anyhow::Context;
use egui::SidePanel;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::thread;

/// CSV loading result from background thread
enum LoadResult {
    Complete {
        records: Vec<BankRecord>,
        path: PathBuf,
    },
    Error(String),
}

#[derive(Debug, Clone, Copy)]
enum ExportFormat {
    Svg,
    Png,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Svg => "svg",
            ExportFormat::Png => "png",
        }
    }
}

/// Main application window.
pub struct BankVizApp {
    config: AppConfig,
    state: Option<AppState>,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,

    // Async CSV loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl BankVizApp {
    /// Create the app and start loading the configured dataset.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let mut app = Self {
            config,
            state: None,
            control_panel: ControlPanel::new(),
            chart_viewer: ChartViewer::new(),
            load_rx: None,
            is_loading: false,
        };
        let path = app.config.data_path.clone();
        app.start_loading(path);
        app
    }

    /// Load and clean a dataset in a background thread.
    fn start_loading(&mut self, path: PathBuf) {
        if self.is_loading {
            return; // Already loading
        }

        self.control_panel.settings.csv_path = Some(path.clone());
        self.control_panel
            .set_status(&format!("Loading {}...", path.display()));
        self.control_panel.is_busy = true;
        self.is_loading = true;

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        let policy = self.config.outlier_policy;
        let bounds = self.config.quantile_bounds();

        thread::spawn(move || {
            let result = match data::load_and_clean(&path, policy, bounds) {
                Ok(records) => LoadResult::Complete { records, path },
                Err(e) => LoadResult::Error(e.to_string()),
            };
            let _ = tx.send(result);
        });
    }

    /// Handle CSV file selection
    fn handle_browse_csv(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv", "txt"])
            .pick_file()
        {
            self.start_loading(path);
        }
    }

    /// Check for CSV loading results
    fn check_load_results(&mut self) {
        let Some(rx) = self.load_rx.take() else {
            return;
        };

        match rx.try_recv() {
            Ok(LoadResult::Complete { records, path }) => {
                let state = AppState::new(records, self.config.chart);
                self.control_panel.update_jobs(state.job_options());
                self.control_panel
                    .update_counts(state.visible().len(), state.dataset().len());
                self.control_panel.set_status(&format!(
                    "Loaded {} records, {} jobs from {}",
                    state.dataset().len(),
                    state.jobs().len(),
                    path.display()
                ));
                self.state = Some(state);
                self.finish_loading();
            }
            Ok(LoadResult::Error(error)) => {
                log::error!("Failed to load data: {}", error);
                self.control_panel.set_status(&format!("Error: {}", error));
                self.finish_loading();
            }
            Err(std::sync::mpsc::TryRecvError::Empty) => {
                self.load_rx = Some(rx);
            }
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                self.control_panel
                    .set_status("Error: loader stopped unexpectedly");
                self.finish_loading();
            }
        }
    }

    fn finish_loading(&mut self) {
        self.is_loading = false;
        self.control_panel.is_busy = false;
    }

    /// Redraw after a job selection change
    fn handle_job_changed(&mut self) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        state.select_job(self.control_panel.settings.selection.clone());
        self.control_panel
            .update_counts(state.visible().len(), state.dataset().len());
    }

    /// Export the current view, then open it with the system viewer
    fn handle_export(&mut self, format: ExportFormat) {
        let Some(state) = self.state.as_ref() else {
            self.control_panel.set_status("No chart to export");
            return;
        };

        let file_name = format!(
            "bank_parallel_{}.{}",
            state.selection().value(),
            format.extension()
        );
        let Some(output_path) = rfd::FileDialog::new()
            .add_filter(format.extension().to_uppercase(), &[format.extension()])
            .set_file_name(file_name)
            .save_file()
        else {
            return; // User cancelled
        };

        match Self::export_chart(state, format, &output_path) {
            Ok(()) => {
                self.control_panel
                    .set_status(&format!("Chart saved to {}", output_path.display()));
                if let Err(e) = open::that(&output_path) {
                    log::warn!("Could not open {}: {}", output_path.display(), e);
                }
            }
            Err(e) => {
                log::error!("Export failed: {:#}", e);
                self.control_panel.set_status(&format!("Error: {:#}", e));
            }
        }
    }

    fn export_chart(state: &AppState, format: ExportFormat, path: &Path) -> anyhow::Result<()> {
        match format {
            ExportFormat::Svg => StaticChartRenderer::render_svg_file(state.chart(), path),
            ExportFormat::Png => StaticChartRenderer::render_png_file(state.chart(), path),
        }
        .with_context(|| format!("writing {}", path.display()))
    }
}

impl eframe::App for BankVizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background results
        self.check_load_results();

        // Request repaint while loading
        if self.is_loading {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(280.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui);

                    match action {
                        ControlPanelAction::BrowseCsv => self.handle_browse_csv(),
                        ControlPanelAction::JobChanged => self.handle_job_changed(),
                        ControlPanelAction::ExportSvg => self.handle_export(ExportFormat::Svg),
                        ControlPanelAction::ExportPng => self.handle_export(ExportFormat::Png),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui, self.state.as_ref());
        });
    }
}
