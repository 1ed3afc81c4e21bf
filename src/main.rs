#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use drawing_studio::{PaintApp, StudioConfig};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = StudioConfig::load();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Simple Drawing Studio")
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Simple Drawing Studio",
        native_options,
        Box::new(move |cc| Ok(Box::new(PaintApp::new(cc, &config)?))),
    )
}
