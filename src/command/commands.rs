use std::path::PathBuf;

use egui::Color32;

use super::{CommandContext, CommandError, CommandResult};
use crate::tools::{MAX_BRUSH_WIDTH, MIN_BRUSH_WIDTH, Tool};

/// Commands issued by the toolbar and keyboard shortcuts
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Change the active tool
    SetTool(Tool),

    /// Change the drawing color
    SetColor(Color32),

    /// Change the brush width used by brush, eraser and shapes
    SetBrushWidth(u32),

    /// Step back to the snapshot taken before the last action
    Undo,

    /// Re-apply the last undone action
    Redo,

    /// Wipe the canvas to white and drop every shape
    Clear,

    /// Write the flattened drawing as PNG
    Save(PathBuf),

    /// Replace the drawing with an image from disk
    Load(PathBuf),
}

impl Command {
    /// Short label for logs and status messages
    pub fn name(&self) -> &'static str {
        match self {
            Command::SetTool(_) => "Set Tool",
            Command::SetColor(_) => "Set Color",
            Command::SetBrushWidth(_) => "Set Brush Width",
            Command::Undo => "Undo",
            Command::Redo => "Redo",
            Command::Clear => "Clear",
            Command::Save(_) => "Save",
            Command::Load(_) => "Load",
        }
    }

    pub fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        match self {
            Command::SetTool(tool) => {
                if ctx.settings.tool != *tool {
                    log::info!("Tool changed: {:?} -> {:?}", ctx.settings.tool, tool);
                    ctx.canvas.cancel_gesture();
                    ctx.settings.tool = *tool;
                }
                Ok(())
            }
            Command::SetColor(color) => {
                ctx.settings.set_color(*color);
                Ok(())
            }
            Command::SetBrushWidth(width) => {
                if !(MIN_BRUSH_WIDTH..=MAX_BRUSH_WIDTH).contains(width) {
                    return Err(CommandError::InvalidParameters(format!(
                        "brush width {} outside {}..={}",
                        width, MIN_BRUSH_WIDTH, MAX_BRUSH_WIDTH
                    )));
                }
                ctx.settings.set_brush_width(*width);
                Ok(())
            }
            Command::Undo => {
                if ctx.canvas.undo() {
                    Ok(())
                } else {
                    Err(CommandError::InvalidState("undo"))
                }
            }
            Command::Redo => {
                if ctx.canvas.redo() {
                    Ok(())
                } else {
                    Err(CommandError::InvalidState("redo"))
                }
            }
            Command::Clear => {
                ctx.canvas.clear();
                Ok(())
            }
            Command::Save(path) => {
                ctx.canvas.save_to(path)?;
                Ok(())
            }
            Command::Load(path) => {
                ctx.canvas.load_from(path)?;
                Ok(())
            }
        }
    }
}
