use egui::Color32;
use serde::{Deserialize, Serialize};

use super::Tool;

pub const MIN_BRUSH_WIDTH: u32 = 1;
pub const MAX_BRUSH_WIDTH: u32 = 10;

/// The user's current drawing choices.
///
/// Persisted between runs so the app reopens with the same tool, color and width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredSettings")]
pub struct ToolSettings {
    pub tool: Tool,
    /// Stored as plain RGB so the settings survive without egui's serde support
    color: [u8; 3],
    brush_width: u32,
}

/// On-disk shape of [`ToolSettings`], validated on the way in
#[derive(Deserialize)]
#[serde(default)]
struct StoredSettings {
    tool: Tool,
    color: [u8; 3],
    brush_width: u32,
}

impl Default for StoredSettings {
    fn default() -> Self {
        let defaults = ToolSettings::default();
        Self {
            tool: defaults.tool,
            color: defaults.color,
            brush_width: defaults.brush_width,
        }
    }
}

impl From<StoredSettings> for ToolSettings {
    fn from(stored: StoredSettings) -> Self {
        let [r, g, b] = stored.color;
        ToolSettings::new(stored.tool, Color32::from_rgb(r, g, b), stored.brush_width)
    }
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            tool: Tool::Brush,
            color: [0, 0, 0],
            brush_width: 3,
        }
    }
}

impl ToolSettings {
    pub fn new(tool: Tool, color: Color32, brush_width: u32) -> Self {
        let mut settings = Self {
            tool,
            ..Self::default()
        };
        settings.set_color(color);
        settings.set_brush_width(brush_width);
        settings
    }

    pub fn color(&self) -> Color32 {
        let [r, g, b] = self.color;
        Color32::from_rgb(r, g, b)
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = [color.r(), color.g(), color.b()];
    }

    pub fn brush_width(&self) -> u32 {
        self.brush_width
    }

    /// Set the brush width, clamped to the supported range
    pub fn set_brush_width(&mut self, width: u32) {
        self.brush_width = width.clamp(MIN_BRUSH_WIDTH, MAX_BRUSH_WIDTH);
    }

    /// Color the active tool paints with
    pub fn paint_color(&self) -> Color32 {
        self.tool.stroke_color(self.color())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ToolSettings::default();
        assert_eq!(settings.tool, Tool::Brush);
        assert_eq!(settings.color(), Color32::BLACK);
        assert_eq!(settings.brush_width(), 3);
    }

    #[test]
    fn test_brush_width_is_clamped() {
        let mut settings = ToolSettings::default();
        settings.set_brush_width(0);
        assert_eq!(settings.brush_width(), MIN_BRUSH_WIDTH);
        settings.set_brush_width(42);
        assert_eq!(settings.brush_width(), MAX_BRUSH_WIDTH);
    }

    #[test]
    fn test_settings_survive_json() {
        let settings = ToolSettings::new(Tool::Oval, Color32::from_rgb(255, 200, 0), 7);
        let json = serde_json::to_string(&settings).unwrap();
        let restored: ToolSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, settings);
    }

    #[test]
    fn test_stored_width_is_clamped_on_load() {
        let restored: ToolSettings =
            serde_json::from_str(r#"{"tool":"Brush","color":[0,0,0],"brush_width":250}"#).unwrap();
        assert_eq!(restored.brush_width(), MAX_BRUSH_WIDTH);

        let restored: ToolSettings = serde_json::from_str(r#"{"brush_width":0}"#).unwrap();
        assert_eq!(restored.brush_width(), MIN_BRUSH_WIDTH);
        assert_eq!(restored.tool, Tool::Brush);
        assert_eq!(restored.color(), Color32::BLACK);
    }
}
