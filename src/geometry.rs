use egui::{Pos2, Rect};

/// Integer position on the canvas, relative to its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CanvasPoint {
    pub x: i32,
    pub y: i32,
}

impl CanvasPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Convert a screen position into canvas space, rounding to the nearest pixel
    pub fn from_screen(pos: Pos2, canvas_rect: Rect) -> Self {
        let local = pos - canvas_rect.min;
        Self {
            x: local.x.round() as i32,
            y: local.y.round() as i32,
        }
    }

    /// True if the point addresses a pixel of a `width` x `height` surface
    pub fn is_within(&self, width: u32, height: u32) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as i64) < width as i64 && (self.y as i64) < height as i64
    }
}

impl From<(i32, i32)> for CanvasPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box with its origin at the minimum corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl BoundingBox {
    /// Box spanned by two opposite corners, in any order
    pub fn from_corners(a: CanvasPoint, b: CanvasPoint) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Inclusive containment test against the box grown by `padding` on every side
    pub fn contains_padded(&self, point: CanvasPoint, padding: i32) -> bool {
        point.x >= self.x - padding
            && point.x <= self.right() + padding
            && point.y >= self.y - padding
            && point.y <= self.bottom() + padding
    }
}
