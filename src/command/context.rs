use crate::canvas::DrawingCanvas;
use crate::tools::ToolSettings;

/// Context for command execution, providing access to the canvas
/// and the current tool settings.
#[derive(Debug)]
pub struct CommandContext<'a> {
    /// The canvas being edited
    pub canvas: &'a mut DrawingCanvas,
    /// Tool, color and brush width chosen in the toolbar
    pub settings: &'a mut ToolSettings,
}

impl<'a> CommandContext<'a> {
    pub fn new(canvas: &'a mut DrawingCanvas, settings: &'a mut ToolSettings) -> Self {
        Self { canvas, settings }
    }
}
