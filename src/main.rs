//! BankViz - Bank Marketing Parallel Coordinates Viewer
//!
//! Desktop entry point: loads settings and opens the main window.

use bankviz::gui::BankVizApp;
use bankviz::AppConfig;
use eframe::egui;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = AppConfig::load_or_default();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([1000.0, 600.0])
            .with_title("BankViz"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "BankViz",
        options,
        Box::new(|cc| Ok(Box::new(BankVizApp::new(cc, config)))),
    )
}
