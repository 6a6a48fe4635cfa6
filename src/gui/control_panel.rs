//! Control Panel Widget
//! Left side panel with data source, job selection and export controls.

use crate::data::JobFilter;
use egui::{Color32, ComboBox, RichText};
use std::path::PathBuf;

/// User settings for the current session
#[derive(Default, Clone)]
pub struct UserSettings {
    pub csv_path: Option<PathBuf>,
    pub selection: JobFilter,
}

/// Left side control panel.
pub struct ControlPanel {
    pub settings: UserSettings,
    /// `(value, label)` options, "all" first.
    pub job_options: Vec<(String, String)>,
    pub visible_count: usize,
    pub total_count: usize,
    pub status: String,
    pub is_busy: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            settings: UserSettings::default(),
            job_options: Vec::new(),
            visible_count: 0,
            total_count: 0,
            status: "Ready".to_string(),
            is_busy: false,
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the job options after a dataset load
    pub fn update_jobs(&mut self, options: Vec<(String, String)>) {
        self.job_options = options;
        self.settings.selection = JobFilter::All;
    }

    pub fn update_counts(&mut self, visible: usize, total: usize) {
        self.visible_count = visible;
        self.total_count = total;
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📊 BankViz")
                    .size(22.0)
                    .color(Color32::from_rgb(70, 130, 180)),
            );
            ui.label(
                RichText::new("Bank Marketing Campaign")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Source Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let path_text = self
                        .settings
                        .csv_path
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "No file selected".to_string());

                    ui.label(RichText::new(&path_text).size(12.0).color(
                        if self.settings.csv_path.is_some() {
                            ui.visuals().text_color()
                        } else {
                            Color32::GRAY
                        },
                    ));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add_enabled_ui(!self.is_busy, |ui| {
                            if ui.button("📂 Browse").clicked() {
                                action = ControlPanelAction::BrowseCsv;
                            }
                        });
                    });
                });
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Job Filter Section =====
        ui.label(RichText::new("🔧 Job Filter").size(14.0).strong());
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.add_sized([80.0, 20.0], egui::Label::new("Job:"));
            ComboBox::from_id_salt("job_filter")
                .width(180.0)
                .selected_text(self.settings.selection.label())
                .show_ui(ui, |ui| {
                    for (value, label) in &self.job_options {
                        let selected = self.settings.selection.value() == value;
                        if ui.selectable_label(selected, label).clicked() && !selected {
                            self.settings.selection = JobFilter::from_value(value);
                            action = ControlPanelAction::JobChanged;
                        }
                    }
                });
        });

        ui.add_space(5.0);
        ui.label(
            RichText::new(format!(
                "Showing {} of {} records",
                self.visible_count, self.total_count
            ))
            .size(11.0)
            .color(Color32::GRAY),
        );

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Export Buttons =====
        ui.vertical_centered(|ui| {
            let export_enabled = !self.is_busy && self.total_count > 0;
            ui.add_enabled_ui(export_enabled, |ui| {
                let svg_button = egui::Button::new(RichText::new("🖼 Export SVG").size(14.0))
                    .min_size(egui::vec2(150.0, 30.0));
                if ui.add(svg_button).clicked() {
                    action = ControlPanelAction::ExportSvg;
                }

                ui.add_space(8.0);

                let png_button = egui::Button::new(RichText::new("🖼 Export PNG").size(14.0))
                    .min_size(egui::vec2(150.0, 30.0));
                if ui.add(png_button).clicked() {
                    action = ControlPanelAction::ExportPng;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status Section =====
        ui.label(RichText::new("📊 Status").size(14.0).strong());
        ui.add_space(5.0);

        if self.is_busy {
            ui.spinner();
        }

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Loaded") || self.status.contains("saved") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    BrowseCsv,
    JobChanged,
    ExportSvg,
    ExportPng,
}
