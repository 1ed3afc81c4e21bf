use egui::Color32;

use crate::PaintApp;
use crate::color::{color_name, format_rgb};
use crate::tools::ToolSettings;

/// What the status bar is currently reporting besides the tool summary
#[derive(Debug, Clone, PartialEq, Default)]
pub enum StatusMessage {
    #[default]
    Summary,
    /// The eyedropper just picked this color
    Picked(Color32),
    /// Reminder shown after choosing the color picker button
    PickerHint,
    /// Outcome of a file operation or a failed command
    Note(String),
}

pub fn status_text(settings: &ToolSettings, message: &StatusMessage) -> String {
    let tool = settings.tool.status_name();
    let size = settings.brush_width();
    match message {
        StatusMessage::Summary => {
            let color = color_name(settings.color()).unwrap_or("Custom");
            format!("Tool: {} | Color: {} | Brush Size: {}", tool, color, size)
        }
        StatusMessage::Picked(color) => {
            format!("Picked Color - {} | Tool: {} | Brush Size: {}", format_rgb(*color), tool, size)
        }
        StatusMessage::PickerHint => format!("Color Picker: Click on canvas to pick a color | Tool: {}", tool),
        StatusMessage::Note(note) => format!("{} | Tool: {} | Brush Size: {}", note, tool, size),
    }
}

pub fn status_bar(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.label(status_text(app.settings(), app.status()));
    });
}
