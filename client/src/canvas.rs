use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use scribble_engine::{BrushConfig, Point, Rect, Surface, LINE_CAP, LINE_JOIN};

/// `Surface` over the board's 2D context.
///
/// Every segment is its own begin/move/line/stroke, so a later brush never
/// restrokes what an earlier segment already painted.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the 2D context and scale it so one unit is one CSS pixel.
    /// The canvas must already have its final bitmap size: resizing a canvas
    /// resets its context.
    pub fn new(canvas: &HtmlCanvasElement, dpr: f64) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Missing canvas context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
        Ok(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn apply_brush(&mut self, brush: &BrushConfig) {
        self.ctx.set_line_cap(LINE_CAP);
        self.ctx.set_line_join(LINE_JOIN);
        self.ctx.set_global_alpha(brush.global_alpha);
        self.ctx.set_stroke_style_str(brush.stroke_style.as_str());
        self.ctx.set_line_width(brush.line_width);
    }

    fn begin_path(&mut self, at: Point) {
        self.ctx.begin_path();
        self.ctx.move_to(at.x, at.y);
    }

    fn stroke_segment(&mut self, from: Point, to: Point) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.ctx.clear_rect(rect.x, rect.y, rect.width, rect.height);
    }
}
