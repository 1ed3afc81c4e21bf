use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::shape::ShapeKind;

mod settings;
pub use settings::{ToolSettings, MAX_BRUSH_WIDTH, MIN_BRUSH_WIDTH};

/// Every tool the canvas can dispatch pointer gestures to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Brush,
    Eraser,
    ColorPicker,
    Line,
    Rectangle,
    Oval,
    Triangle,
    Diamond,
}

impl Tool {
    /// Tools offered in the tool drop-down
    pub const PAINT_TOOLS: [Tool; 3] = [Tool::Brush, Tool::Eraser, Tool::ColorPicker];

    /// Tools offered as shape buttons
    pub const SHAPE_TOOLS: [Tool; 5] = [
        Tool::Line,
        Tool::Rectangle,
        Tool::Oval,
        Tool::Triangle,
        Tool::Diamond,
    ];

    /// Brush tools write straight into the raster while the pointer moves
    pub fn is_brush_tool(&self) -> bool {
        matches!(self, Tool::Brush | Tool::Eraser)
    }

    /// Shape tools preview while dragging and commit a shape on release
    pub fn is_shape_tool(&self) -> bool {
        self.shape_kind().is_some()
    }

    pub fn shape_kind(&self) -> Option<ShapeKind> {
        match self {
            Tool::Line => Some(ShapeKind::Line),
            Tool::Rectangle => Some(ShapeKind::Rectangle),
            Tool::Oval => Some(ShapeKind::Oval),
            Tool::Triangle => Some(ShapeKind::Triangle),
            Tool::Diamond => Some(ShapeKind::Diamond),
            Tool::Brush | Tool::Eraser | Tool::ColorPicker => None,
        }
    }

    /// Human readable name for buttons and menus
    pub fn label(&self) -> &'static str {
        match self {
            Tool::Brush => "Brush",
            Tool::Eraser => "Eraser",
            Tool::ColorPicker => "Color Picker",
            Tool::Line => "Line",
            Tool::Rectangle => "Rectangle",
            Tool::Oval => "Oval",
            Tool::Triangle => "Triangle",
            Tool::Diamond => "Diamond",
        }
    }

    /// Name shown in the status bar
    pub fn status_name(&self) -> &'static str {
        match self {
            Tool::Brush => "BRUSH",
            Tool::Eraser => "ERASER",
            Tool::ColorPicker => "COLOR_PICKER",
            _ => self.shape_kind().map(|k| k.name()).unwrap_or("BRUSH"),
        }
    }

    /// Color this tool actually lays down given the selected color
    pub fn stroke_color(&self, selected: Color32) -> Color32 {
        match self {
            Tool::Eraser => crate::raster::BACKGROUND,
            _ => selected,
        }
    }
}
