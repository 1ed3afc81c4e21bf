use egui::{Color32, ColorImage};
use image::{Rgb, RgbImage, RgbaImage};
use tiny_skia::{
    BlendMode, ColorU8, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, PixmapPaint, Stroke, Transform,
};

use crate::error::{StudioError, StudioResult};
use crate::geometry::CanvasPoint;

/// Color every fresh or cleared pixel starts out as
pub const BACKGROUND: Color32 = Color32::WHITE;

/// Persistent, always-opaque pixel surface that brush strokes write into.
///
/// Cloning copies the pixel data, which is what history snapshots rely on.
#[derive(Clone)]
pub struct RasterBuffer {
    pixmap: Pixmap,
}

impl std::fmt::Debug for RasterBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterBuffer")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl PartialEq for RasterBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.width() == other.width()
            && self.height() == other.height()
            && self.pixmap.data() == other.pixmap.data()
    }
}

impl RasterBuffer {
    /// Create a white buffer of the given size
    pub fn new(width: u32, height: u32) -> StudioResult<Self> {
        let mut pixmap = Pixmap::new(width, height)
            .ok_or(StudioError::InvalidDimensions { width, height })?;
        pixmap.fill(to_skia(BACKGROUND));
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Color of a single pixel, `None` outside the buffer
    pub fn pixel(&self, point: CanvasPoint) -> Option<Color32> {
        if !point.is_within(self.width(), self.height()) {
            return None;
        }
        self.pixmap.pixel(point.x as u32, point.y as u32).map(|p| {
            let c = p.demultiply();
            Color32::from_rgb(c.red(), c.green(), c.blue())
        })
    }

    /// Overwrite every pixel with `color`
    pub fn fill(&mut self, color: Color32) {
        self.pixmap.fill(to_skia(color));
    }

    /// Stroke a straight segment with round caps and joins
    pub fn stroke_segment(&mut self, from: CanvasPoint, to: CanvasPoint, color: Color32, width: f32) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x as f32, from.y as f32);
        pb.line_to(to.x as f32, to.y as f32);
        if let Some(path) = pb.finish() {
            self.stroke_path(&path, color, width);
        }
    }

    pub(crate) fn stroke_path(&mut self, path: &Path, color: Color32, width: f32) {
        let mut paint = Paint::default();
        paint.set_color_rgba8(color.r(), color.g(), color.b(), 255);
        paint.anti_alias = true;

        let stroke = Stroke {
            width: width.max(1.0),
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };

        self.pixmap
            .stroke_path(path, &paint, &stroke, Transform::identity(), None);
    }

    /// Grow the buffer so it covers at least `width` x `height`.
    ///
    /// Existing pixels keep their position; the new area is background.
    /// Returns true if the buffer changed size.
    pub fn grow_to(&mut self, width: u32, height: u32) -> StudioResult<bool> {
        let new_width = self.width().max(width);
        let new_height = self.height().max(height);
        if new_width == self.width() && new_height == self.height() {
            return Ok(false);
        }

        let mut grown = RasterBuffer::new(new_width, new_height)?;
        let copy = PixmapPaint {
            blend_mode: BlendMode::Source,
            ..PixmapPaint::default()
        };
        grown
            .pixmap
            .draw_pixmap(0, 0, self.pixmap.as_ref(), &copy, Transform::identity(), None);

        log::debug!(
            "Raster grown from {}x{} to {}x{}",
            self.width(),
            self.height(),
            new_width,
            new_height
        );
        *self = grown;
        Ok(true)
    }

    /// Composite an image over the buffer with its top-left at the origin.
    ///
    /// Parts of the image outside the buffer are dropped.
    pub fn draw_image(&mut self, image: &RgbaImage) {
        let Some(mut source) = Pixmap::new(image.width(), image.height()) else {
            return;
        };
        for (dst, src) in source.pixels_mut().iter_mut().zip(image.pixels()) {
            let [r, g, b, a] = src.0;
            *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
        }

        self.pixmap.draw_pixmap(
            0,
            0,
            source.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }

    /// Flatten into an 8-bit RGB image
    pub fn to_rgb_image(&self) -> RgbImage {
        let mut out = RgbImage::new(self.width(), self.height());
        for (dst, src) in out.pixels_mut().zip(self.pixmap.pixels()) {
            let c = src.demultiply();
            *dst = Rgb([c.red(), c.green(), c.blue()]);
        }
        out
    }

    /// Convert into an image egui can upload as a texture
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_premultiplied(
            [self.width() as usize, self.height() as usize],
            self.pixmap.data(),
        )
    }
}

fn to_skia(color: Color32) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r(), color.g(), color.b(), 255)
}
