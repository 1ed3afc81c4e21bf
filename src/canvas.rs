use std::path::{Path, PathBuf};

use egui::Color32;

use crate::error::StudioResult;
use crate::file_handler;
use crate::geometry::CanvasPoint;
use crate::history::History;
use crate::input::InputEvent;
use crate::raster::{BACKGROUND, RasterBuffer};
use crate::shape::Shape;
use crate::state::EditorState;
use crate::tools::{Tool, ToolSettings};

/// What the caller should do after the canvas handled an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CanvasResponse {
    /// Nothing visible changed
    #[default]
    Ignored,
    /// The canvas needs repainting
    Redraw,
    /// The eyedropper sampled a color
    ColorPicked(Color32),
}

/// The drawing surface: a persistent raster with vector shapes layered on top.
///
/// Brush and eraser gestures write into the raster as the pointer moves.
/// Shape tools only preview while dragging and append a [`Shape`] on release.
/// Every mutating gesture first records a snapshot in the [`History`].
#[derive(Debug)]
pub struct DrawingCanvas {
    raster: RasterBuffer,
    shapes: Vec<Shape>,
    history: History,
    state: EditorState,
    /// Set whenever what the canvas shows has changed since the last upload
    dirty: bool,
}

impl DrawingCanvas {
    /// Create a blank white canvas
    pub fn new(width: u32, height: u32) -> StudioResult<Self> {
        Ok(Self {
            raster: RasterBuffer::new(width, height)?,
            shapes: Vec::new(),
            history: History::new(),
            state: EditorState::Idle,
            dirty: true,
        })
    }

    pub fn raster(&self) -> &RasterBuffer {
        &self.raster
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Return and reset the dirty flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Dispatch one pointer event to the active tool
    pub fn handle_event(&mut self, event: InputEvent, settings: &ToolSettings) -> CanvasResponse {
        match event {
            InputEvent::PointerDown { pos } => self.on_pointer_down(pos, settings),
            InputEvent::PointerMove { pos } => self.on_pointer_move(pos),
            InputEvent::PointerUp { pos } => self.on_pointer_up(pos, settings),
            InputEvent::Click { pos } => {
                if settings.tool != Tool::ColorPicker {
                    return CanvasResponse::Ignored;
                }
                match self.pick_color(pos) {
                    Some(color) => CanvasResponse::ColorPicked(color),
                    None => CanvasResponse::Ignored,
                }
            }
        }
    }

    fn on_pointer_down(&mut self, pos: CanvasPoint, settings: &ToolSettings) -> CanvasResponse {
        if !self.state.is_idle() {
            log::warn!("Pointer pressed during {} gesture, abandoning it", self.state.name());
            self.cancel_gesture();
        }

        let width = settings.brush_width();
        match settings.tool {
            tool if tool.is_brush_tool() => {
                if tool == Tool::Eraser {
                    // Topmost shape under the pointer is deleted outright
                    if let Some(index) = self.shapes.iter().rposition(|s| s.contains(pos)) {
                        self.save_state();
                        let removed = self.shapes.remove(index);
                        log::debug!("Eraser removed {:?} at {:?}", removed.kind(), pos);
                        self.dirty = true;
                        return CanvasResponse::Redraw;
                    }
                }
                self.save_state();
                self.enter(EditorState::Painting {
                    last: pos,
                    color: settings.paint_color(),
                    width,
                });
            }
            Tool::ColorPicker => self.enter(EditorState::Picking { at: pos }),
            tool => {
                if let Some(kind) = tool.shape_kind() {
                    self.enter(EditorState::Shaping {
                        kind,
                        start: pos,
                        current: pos,
                    });
                }
            }
        }
        CanvasResponse::Ignored
    }

    fn on_pointer_move(&mut self, pos: CanvasPoint) -> CanvasResponse {
        match self.state {
            EditorState::Painting { last, color, width } => {
                self.raster.stroke_segment(last, pos, color, width as f32);
                self.enter(EditorState::Painting { last: pos, color, width });
                self.dirty = true;
                CanvasResponse::Redraw
            }
            EditorState::Shaping { kind, start, .. } => {
                self.enter(EditorState::Shaping {
                    kind,
                    start,
                    current: pos,
                });
                self.dirty = true;
                CanvasResponse::Redraw
            }
            EditorState::Picking { .. } => {
                self.state = EditorState::Picking { at: pos };
                CanvasResponse::Ignored
            }
            EditorState::Idle => CanvasResponse::Ignored,
        }
    }

    fn on_pointer_up(&mut self, pos: CanvasPoint, settings: &ToolSettings) -> CanvasResponse {
        let previous = self.state;
        self.enter(EditorState::Idle);

        match previous {
            EditorState::Shaping { kind, start, .. } => {
                self.save_state();
                self.shapes.push(Shape::new(
                    kind,
                    start,
                    pos,
                    settings.color(),
                    settings.brush_width(),
                ));
                self.dirty = true;
                CanvasResponse::Redraw
            }
            _ => CanvasResponse::Ignored,
        }
    }

    fn enter(&mut self, next: EditorState) {
        if let Err(err) = self.state.transition_to(next) {
            log::warn!("Ignoring canvas transition: {}", err);
        }
    }

    /// Drop whatever gesture is in progress, including any shape preview
    pub fn cancel_gesture(&mut self) {
        if self.state.is_shaping() {
            self.dirty = true;
        }
        self.enter(EditorState::Idle);
    }

    fn save_state(&mut self) {
        self.history.save_state(&self.raster, &self.shapes);
    }

    /// Color of the flattened drawing at `pos`, `None` off the canvas
    pub fn pick_color(&self, pos: CanvasPoint) -> Option<Color32> {
        if !pos.is_within(self.width(), self.height()) {
            return None;
        }
        self.composite().pixel(pos)
    }

    /// Restore the state before the last action. Returns false if there was none.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.raster, &self.shapes) {
            Some(snapshot) => {
                self.restore(snapshot.raster, snapshot.shapes);
                true
            }
            None => false,
        }
    }

    /// Re-apply the last undone action. Returns false if there was none.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.raster, &self.shapes) {
            Some(snapshot) => {
                self.restore(snapshot.raster, snapshot.shapes);
                true
            }
            None => false,
        }
    }

    fn restore(&mut self, raster: RasterBuffer, shapes: Vec<Shape>) {
        self.cancel_gesture();
        self.raster = raster;
        self.shapes = shapes;
        self.dirty = true;
    }

    /// Wipe the raster back to white and remove every shape
    pub fn clear(&mut self) {
        self.cancel_gesture();
        self.save_state();
        self.raster.fill(BACKGROUND);
        self.shapes.clear();
        self.dirty = true;
        log::info!("Canvas cleared");
    }

    /// Grow the raster so it covers a `width` x `height` viewport
    pub fn ensure_size(&mut self, width: u32, height: u32) -> StudioResult<()> {
        if self.raster.grow_to(width, height)? {
            self.dirty = true;
        }
        Ok(())
    }

    /// Raster with every committed shape drawn over it, in insertion order
    pub fn composite(&self) -> RasterBuffer {
        let mut composite = self.raster.clone();
        for shape in &self.shapes {
            shape.draw(&mut composite);
        }
        composite
    }

    /// What the screen shows: the composite plus the live shape preview
    pub fn frame(&self, settings: &ToolSettings) -> RasterBuffer {
        let mut frame = self.composite();
        if let Some((kind, start, current)) = self.state.shape_preview() {
            Shape::new(kind, start, current, settings.color(), settings.brush_width()).draw(&mut frame);
        }
        frame
    }

    /// Save the flattened drawing as PNG, returning the path written
    pub fn save_to(&self, path: &Path) -> StudioResult<PathBuf> {
        file_handler::save_png(path, &self.composite())
    }

    /// Replace the drawing with an image from disk.
    ///
    /// The image is placed at the top-left corner of a cleared canvas. On error
    /// the canvas is left untouched.
    pub fn load_from(&mut self, path: &Path) -> StudioResult<()> {
        let image = file_handler::load_png(path)?;

        self.cancel_gesture();
        self.save_state();
        self.raster.fill(BACKGROUND);
        self.shapes.clear();
        self.raster.draw_image(&image);
        self.dirty = true;
        Ok(())
    }
}
