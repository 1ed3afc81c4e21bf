use crate::geometry::{BoundingBox, CanvasPoint};

/// Extra slack, on top of the stroke width, granted to hit tests
pub const HIT_PADDING: i32 = 5;

/// Padding applied around a shape's bounds when hit testing
pub(crate) fn hit_padding(stroke_width: u32) -> i32 {
    stroke_width as i32 + HIT_PADDING
}

/// Vertices of the triangle spanned by a drag from `start` to `end`.
///
/// The apex sits at the start point and the base is mirrored around it.
pub(crate) fn triangle_vertices(start: CanvasPoint, end: CanvasPoint) -> [CanvasPoint; 3] {
    [
        start,
        end,
        CanvasPoint::new(start.x + (start.x - end.x), end.y),
    ]
}

/// Vertices of the diamond inscribed in the drag box, clockwise from the top
pub(crate) fn diamond_vertices(start: CanvasPoint, end: CanvasPoint) -> [CanvasPoint; 4] {
    let cx = (start.x + end.x) / 2;
    let cy = (start.y + end.y) / 2;
    let half_width = (end.x - start.x).abs() / 2;
    let half_height = (end.y - start.y).abs() / 2;
    [
        CanvasPoint::new(cx, cy - half_height),
        CanvasPoint::new(cx + half_width, cy),
        CanvasPoint::new(cx, cy + half_height),
        CanvasPoint::new(cx - half_width, cy),
    ]
}

/// Corners of a box, clockwise from the top-left
pub(crate) fn box_corners(bounds: &BoundingBox) -> [CanvasPoint; 4] {
    [
        CanvasPoint::new(bounds.x, bounds.y),
        CanvasPoint::new(bounds.right(), bounds.y),
        CanvasPoint::new(bounds.right(), bounds.bottom()),
        CanvasPoint::new(bounds.x, bounds.bottom()),
    ]
}
