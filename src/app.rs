use std::path::PathBuf;

use eframe::egui::{self, Key, KeyboardShortcut, Modifiers};

use crate::canvas::{CanvasResponse, DrawingCanvas};
use crate::color::color_from_name;
use crate::command::{Command, CommandContext, CommandError};
use crate::components::{ColorDialog, DialogOutcome};
use crate::config::StudioConfig;
use crate::error::StudioResult;
use crate::file_handler::{FileHandler, with_png_extension};
use crate::input::{InputEvent, InputHandler};
use crate::panels::{self, StatusMessage};
use crate::renderer::Renderer;
use crate::tools::{Tool, ToolSettings};

const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);
const REDO_SHIFT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);

/// The drawing studio window.
///
/// Only the tool settings survive a restart; the drawing itself is saved
/// explicitly as PNG.
#[derive(Debug)]
pub struct PaintApp {
    canvas: DrawingCanvas,
    settings: ToolSettings,
    renderer: Renderer,
    input_handler: InputHandler,
    file_handler: FileHandler,
    color_dialog: ColorDialog,
    status: StatusMessage,
    /// Entry displayed in the tool drop-down, reset to Brush by the shape buttons
    tool_choice: Tool,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: &StudioConfig) -> StudioResult<Self> {
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value::<ToolSettings>(storage, eframe::APP_KEY))
            .unwrap_or_else(|| {
                ToolSettings::new(Tool::Brush, color_from_name(&config.color), config.brush_width)
            });
        log::info!("Starting with {:?}", settings);

        Self::with_settings(config, settings)
    }

    /// Build the app without a window, e.g. for tests
    pub fn with_settings(config: &StudioConfig, settings: ToolSettings) -> StudioResult<Self> {
        let tool_choice = if settings.tool.is_shape_tool() {
            Tool::Brush
        } else {
            settings.tool
        };

        Ok(Self {
            canvas: DrawingCanvas::new(config.canvas_width, config.canvas_height)?,
            settings,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            file_handler: FileHandler::new(),
            color_dialog: ColorDialog::new(),
            status: StatusMessage::Summary,
            tool_choice,
        })
    }

    pub fn canvas(&self) -> &DrawingCanvas {
        &self.canvas
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn status(&self) -> &StatusMessage {
        &self.status
    }

    pub fn tool_choice(&self) -> Tool {
        self.tool_choice
    }

    pub fn input_handler_mut(&mut self) -> &mut InputHandler {
        &mut self.input_handler
    }

    /// Run a command against the canvas and report failures in the status bar
    pub fn execute_command(&mut self, command: Command) {
        log::debug!("Executing command: {}", command.name());
        let mut ctx = CommandContext::new(&mut self.canvas, &mut self.settings);
        match command.execute(&mut ctx) {
            Ok(()) => match &command {
                Command::SetTool(_) | Command::SetColor(_) | Command::SetBrushWidth(_) => {
                    self.status = StatusMessage::Summary;
                }
                Command::Save(path) => {
                    self.status = StatusMessage::Note(format!("Saved {}", with_png_extension(path).display()));
                }
                Command::Load(path) => {
                    self.status = StatusMessage::Note(format!("Loaded {}", path.display()));
                }
                Command::Undo | Command::Redo | Command::Clear => {}
            },
            Err(CommandError::InvalidState(what)) => {
                log::debug!("Nothing to {}", what);
            }
            Err(err) => {
                log::error!("{} failed: {}", command.name(), err);
                self.status = StatusMessage::Note(format!("{} failed: {}", command.name(), err));
            }
        }
    }

    /// Feed one pointer event to the canvas
    pub fn handle_canvas_event(&mut self, event: InputEvent) {
        if let CanvasResponse::ColorPicked(color) = self.canvas.handle_event(event, &self.settings) {
            log::info!("Picked color at {:?}: {:?}", event.pos(), color);
            self.execute_command(Command::SetColor(color));
            self.status = StatusMessage::Picked(color);
        }
    }

    /// Entry chosen in the tool drop-down
    pub fn select_tool_choice(&mut self, tool: Tool) {
        self.tool_choice = tool;
        self.execute_command(Command::SetTool(tool));
    }

    /// One of the shape buttons was pressed
    pub fn select_shape_tool(&mut self, tool: Tool) {
        self.tool_choice = Tool::Brush;
        self.execute_command(Command::SetTool(tool));
    }

    /// The dedicated color picker button was pressed
    pub fn select_picker_button(&mut self) {
        self.select_tool_choice(Tool::ColorPicker);
        self.status = StatusMessage::PickerHint;
    }

    pub fn open_color_dialog(&mut self) {
        self.color_dialog.open();
    }

    /// Grow the canvas to cover the visible area
    pub fn fit_canvas(&mut self, width: u32, height: u32) {
        if let Err(err) = self.canvas.ensure_size(width, height) {
            log::warn!("Could not resize canvas: {}", err);
        }
    }

    pub fn render_canvas(&mut self, ctx: &egui::Context, painter: &egui::Painter, rect: egui::Rect) {
        self.renderer.update_texture(ctx, &mut self.canvas, &self.settings);
        self.renderer.render(painter, rect);
    }

    pub fn save_with_dialog(&mut self) {
        let picked = rfd::FileDialog::new()
            .set_title("Save Drawing")
            .add_filter("PNG Images", &["png"])
            .set_file_name("drawing.png")
            .save_file();
        if let Some(path) = picked {
            self.execute_command(Command::Save(path));
        }
    }

    pub fn load_with_dialog(&mut self) {
        let picked = rfd::FileDialog::new()
            .set_title("Load Image")
            .add_filter("PNG Images", &["png"])
            .pick_file();
        if let Some(path) = picked {
            self.execute_command(Command::Load(path));
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Shift variant first, COMMAND+Z alone also matches it logically
        let (redo, undo) = ctx.input_mut(|i| {
            let redo = i.consume_shortcut(&REDO_SHIFT) || i.consume_shortcut(&REDO);
            let undo = i.consume_shortcut(&UNDO);
            (redo, undo)
        });
        if undo {
            self.execute_command(Command::Undo);
        }
        if redo {
            self.execute_command(Command::Redo);
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        self.file_handler.preview_files_being_dropped(ctx);
        if self.file_handler.check_for_dropped_files(ctx) {
            let dropped: Option<PathBuf> = self.file_handler.take_dropped_image();
            if let Some(path) = dropped {
                self.execute_command(Command::Load(path));
            }
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        self.handle_dropped_files(ctx);

        panels::tools_panel(self, ctx);
        panels::status_bar(self, ctx);
        panels::central_panel(self, ctx);

        if let Some(DialogOutcome::Accepted(color)) = self.color_dialog.show(ctx) {
            self.execute_command(Command::SetColor(color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::CanvasPoint;
    use egui::Color32;

    fn app() -> PaintApp {
        PaintApp::with_settings(&StudioConfig::default(), ToolSettings::default()).unwrap()
    }

    #[test]
    fn test_shape_button_resets_tool_choice() {
        let mut app = app();
        app.select_tool_choice(Tool::Eraser);
        assert_eq!(app.tool_choice(), Tool::Eraser);

        app.select_shape_tool(Tool::Triangle);
        assert_eq!(app.settings().tool, Tool::Triangle);
        assert_eq!(app.tool_choice(), Tool::Brush);
    }

    #[test]
    fn test_picker_button_selects_picker_entry() {
        let mut app = app();
        app.select_shape_tool(Tool::Oval);
        app.select_picker_button();
        assert_eq!(app.settings().tool, Tool::ColorPicker);
        assert_eq!(app.tool_choice(), Tool::ColorPicker);
        assert_eq!(app.status(), &StatusMessage::PickerHint);
    }

    #[test]
    fn test_picked_color_becomes_current() {
        let mut app = app();
        app.select_tool_choice(Tool::ColorPicker);
        let pos = CanvasPoint::new(5, 5);
        app.handle_canvas_event(InputEvent::PointerDown { pos });
        app.handle_canvas_event(InputEvent::PointerUp { pos });
        app.handle_canvas_event(InputEvent::Click { pos });

        assert_eq!(app.settings().color(), Color32::WHITE);
        assert_eq!(app.status(), &StatusMessage::Picked(Color32::WHITE));
    }

    #[test]
    fn test_failed_load_reports_in_status() {
        let mut app = app();
        app.execute_command(Command::Load(PathBuf::from("/no/such/drawing.png")));
        assert!(matches!(app.status(), StatusMessage::Note(note) if note.starts_with("Load failed")));
    }
}
