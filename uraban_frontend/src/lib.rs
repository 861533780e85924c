pub mod app;

use eframe::{self, egui};

pub use app::BoardApp;

/// Launches the egui application with default window options.
pub fn run_frontend() -> Result<(), eframe::Error> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Uraban",
        native_options,
        Box::new(|cc| Ok(Box::new(BoardApp::new(cc)))),
    )
}
