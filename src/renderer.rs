use eframe::egui::{self, Color32, Rect, TextureHandle, TextureOptions};

use crate::canvas::DrawingCanvas;
use crate::tools::ToolSettings;

/// Uploads the canvas frame to the GPU and paints it
#[derive(Default)]
pub struct Renderer {
    texture: Option<TextureHandle>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("texture", &self.texture.as_ref().map(|t| t.size()))
            .finish()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once a frame has been uploaded
    pub fn has_texture(&self) -> bool {
        self.texture.is_some()
    }

    /// Re-upload the canvas if it changed since the last frame
    pub fn update_texture(&mut self, ctx: &egui::Context, canvas: &mut DrawingCanvas, settings: &ToolSettings) {
        if !canvas.take_dirty() && self.texture.is_some() {
            return;
        }

        let image = canvas.frame(settings).to_color_image();
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::NEAREST),
            None => {
                self.texture = Some(ctx.load_texture("drawing_canvas", image, TextureOptions::NEAREST));
            }
        }
    }

    /// Paint the canvas at its natural size, anchored at the top-left of `rect`
    pub fn render(&self, painter: &egui::Painter, rect: Rect) {
        painter.rect_filled(rect, 0.0, Color32::from_gray(200));

        let Some(texture) = &self.texture else {
            return;
        };
        let image_rect = Rect::from_min_size(rect.min, texture.size_vec2());
        painter.image(
            texture.id(),
            image_rect,
            Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            Color32::WHITE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::CanvasPoint;
    use crate::input::InputEvent;
    use crate::tools::Tool;

    #[test]
    fn test_renderer_creation() {
        let renderer = Renderer::new();
        assert!(!renderer.has_texture());
    }

    #[test]
    fn test_texture_follows_canvas() {
        let ctx = egui::Context::default();
        let mut renderer = Renderer::new();
        let mut canvas = DrawingCanvas::new(64, 48).unwrap();
        let settings = ToolSettings::new(Tool::Line, Color32::RED, 2);

        renderer.update_texture(&ctx, &mut canvas, &settings);
        assert!(renderer.has_texture());
        assert!(!canvas.is_dirty());

        canvas.handle_event(InputEvent::PointerDown { pos: CanvasPoint::new(1, 1) }, &settings);
        canvas.handle_event(InputEvent::PointerMove { pos: CanvasPoint::new(30, 30) }, &settings);
        assert!(canvas.is_dirty());
        renderer.update_texture(&ctx, &mut canvas, &settings);
        assert!(!canvas.is_dirty());
    }

    #[test]
    fn test_render_basics() {
        let ctx = egui::Context::default();
        let mut renderer = Renderer::new();
        let mut canvas = DrawingCanvas::new(10, 10).unwrap();
        renderer.update_texture(&ctx, &mut canvas, &ToolSettings::default());

        let rect = Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        let painter = egui::Painter::new(ctx.clone(), egui::LayerId::background(), rect);
        renderer.render(&painter, rect);
    }
}
