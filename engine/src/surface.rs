//! The drawing-context seam between the engine and a concrete raster.

use crate::color::Color;
use crate::geometry::{Point, Rect};

/// Strokes always use round caps and round joins.
pub const LINE_CAP: &str = "round";
pub const LINE_JOIN: &str = "round";

/// Everything a rebind pushes into the drawing context, applied as one unit
/// together with [`LINE_CAP`] and [`LINE_JOIN`].
#[derive(Clone, Debug, PartialEq)]
pub struct BrushConfig {
    pub global_alpha: f64,
    pub stroke_style: Color,
    pub line_width: f64,
}

/// A 2D drawing context the engine can paint into and erase from.
///
/// Implementations keep whatever brush was last applied and use it for every
/// later `stroke_segment` until the next `apply_brush`.
pub trait Surface {
    fn apply_brush(&mut self, brush: &BrushConfig);

    /// Start a new path with the pen at `at`.
    fn begin_path(&mut self, at: Point);

    /// Stroke a single segment with the current brush. Segments stroked
    /// earlier are never re-stroked.
    fn stroke_segment(&mut self, from: Point, to: Point);

    fn close_path(&mut self);

    /// Reset every pixel in `rect` to full transparency.
    fn clear_rect(&mut self, rect: Rect);
}
