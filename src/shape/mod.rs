use egui::Color32;
use serde::{Deserialize, Serialize};
use tiny_skia::{Path, PathBuilder};

mod common;

pub use common::HIT_PADDING;

use crate::geometry::{BoundingBox, CanvasPoint};
use crate::raster::RasterBuffer;
use crate::tools::Tool;

/// The closed set of primitives the shape tools produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Line,
    Rectangle,
    Oval,
    Triangle,
    Diamond,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Line,
        ShapeKind::Rectangle,
        ShapeKind::Oval,
        ShapeKind::Triangle,
        ShapeKind::Diamond,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Line => "LINE",
            ShapeKind::Rectangle => "RECTANGLE",
            ShapeKind::Oval => "OVAL",
            ShapeKind::Triangle => "TRIANGLE",
            ShapeKind::Diamond => "DIAMOND",
        }
    }
}

/// Geometric outline a shape strokes when drawn
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    Segment(CanvasPoint, CanvasPoint),
    Rectangle(BoundingBox),
    Ellipse(BoundingBox),
    Polygon(Vec<CanvasPoint>),
}

impl Outline {
    /// Build the rasterizer path for this outline
    pub(crate) fn to_path(&self) -> Option<Path> {
        match self {
            Outline::Segment(a, b) => segment_path(*a, *b),
            Outline::Rectangle(bounds) => polygon_path(&common::box_corners(bounds)),
            Outline::Ellipse(bounds) => {
                if bounds.width == 0 || bounds.height == 0 {
                    // A flat ellipse collapses onto its diagonal
                    return segment_path(
                        CanvasPoint::new(bounds.x, bounds.y),
                        CanvasPoint::new(bounds.right(), bounds.bottom()),
                    );
                }
                let rect = tiny_skia::Rect::from_xywh(
                    bounds.x as f32,
                    bounds.y as f32,
                    bounds.width as f32,
                    bounds.height as f32,
                )?;
                PathBuilder::from_oval(rect)
            }
            Outline::Polygon(points) => polygon_path(points),
        }
    }
}

fn segment_path(a: CanvasPoint, b: CanvasPoint) -> Option<Path> {
    let mut pb = PathBuilder::new();
    pb.move_to(a.x as f32, a.y as f32);
    pb.line_to(b.x as f32, b.y as f32);
    pb.finish()
}

fn polygon_path(points: &[CanvasPoint]) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x as f32, first.y as f32);
    for p in rest {
        pb.line_to(p.x as f32, p.y as f32);
    }
    pb.close();
    pb.finish()
}

/// A committed vector primitive living on top of the raster.
///
/// Every kind shares the same two-point representation: the pointer
/// position where the drag began and where it was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    kind: ShapeKind,
    start: CanvasPoint,
    end: CanvasPoint,
    color: Color32,
    stroke_width: u32,
}

impl Shape {
    pub fn new(kind: ShapeKind, start: CanvasPoint, end: CanvasPoint, color: Color32, stroke_width: u32) -> Self {
        Self {
            kind,
            start,
            end,
            color,
            stroke_width,
        }
    }

    /// Build the shape a tool would commit, `None` for non-shape tools
    pub fn from_tool(
        tool: Tool,
        start: CanvasPoint,
        end: CanvasPoint,
        color: Color32,
        stroke_width: u32,
    ) -> Option<Self> {
        tool.shape_kind()
            .map(|kind| Self::new(kind, start, end, color, stroke_width))
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn start(&self) -> CanvasPoint {
        self.start
    }

    pub fn end(&self) -> CanvasPoint {
        self.end
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn stroke_width(&self) -> u32 {
        self.stroke_width
    }

    /// Box spanned by the two defining points
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::from_corners(self.start, self.end)
    }

    /// Hit test used by the eraser: bounds grown by stroke width + 5 pixels
    pub fn contains(&self, point: CanvasPoint) -> bool {
        self.bounds()
            .contains_padded(point, common::hit_padding(self.stroke_width))
    }

    pub fn outline(&self) -> Outline {
        match self.kind {
            ShapeKind::Line => Outline::Segment(self.start, self.end),
            ShapeKind::Rectangle => Outline::Rectangle(self.bounds()),
            ShapeKind::Oval => Outline::Ellipse(self.bounds()),
            ShapeKind::Triangle => {
                Outline::Polygon(common::triangle_vertices(self.start, self.end).to_vec())
            }
            ShapeKind::Diamond => {
                Outline::Polygon(common::diamond_vertices(self.start, self.end).to_vec())
            }
        }
    }

    /// Stroke the outline into the raster
    pub fn draw(&self, raster: &mut RasterBuffer) {
        match self.outline().to_path() {
            Some(path) => raster.stroke_path(&path, self.color, self.stroke_width as f32),
            None => log::trace!("Skipping degenerate {} outline", self.kind.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_per_kind() {
        let start = CanvasPoint::new(10, 10);
        let end = CanvasPoint::new(30, 20);

        let line = Shape::new(ShapeKind::Line, start, end, Color32::BLACK, 1);
        assert_eq!(line.outline(), Outline::Segment(start, end));

        let rect = Shape::new(ShapeKind::Rectangle, end, start, Color32::BLACK, 1);
        assert_eq!(
            rect.outline(),
            Outline::Rectangle(BoundingBox { x: 10, y: 10, width: 20, height: 10 })
        );

        let tri = Shape::new(ShapeKind::Triangle, start, end, Color32::BLACK, 1);
        assert_eq!(
            tri.outline(),
            Outline::Polygon(vec![start, end, CanvasPoint::new(-10, 20)])
        );
    }

    #[test]
    fn test_degenerate_outlines_still_build_paths() {
        let p = CanvasPoint::new(5, 5);
        let flat_oval = Outline::Ellipse(BoundingBox { x: 5, y: 5, width: 0, height: 12 });
        assert!(flat_oval.to_path().is_some());
        assert!(Outline::Rectangle(BoundingBox { x: 1, y: 1, width: 8, height: 8 }).to_path().is_some());
        assert!(Outline::Polygon(vec![]).to_path().is_none());
        let _ = Outline::Segment(p, p).to_path();
    }

    #[test]
    fn test_from_tool_only_for_shape_tools() {
        let a = CanvasPoint::new(0, 0);
        let b = CanvasPoint::new(5, 5);
        assert!(Shape::from_tool(Tool::Oval, a, b, Color32::RED, 2).is_some());
        assert!(Shape::from_tool(Tool::Brush, a, b, Color32::RED, 2).is_none());
        assert!(Shape::from_tool(Tool::ColorPicker, a, b, Color32::RED, 2).is_none());
    }
}
