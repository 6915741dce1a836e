//! Software raster surface.
//!
//! Pixels are stored as premultiplied RGBA in `f32`, one entry per pixel, row
//! major. Coverage is sampled once at each pixel center, so edges are hard.
//! Every stroked segment composites source-over exactly once at the bound
//! `global_alpha`; overlapping caps of consecutive segments therefore build up,
//! as they do on a browser canvas when segments are stroked one by one.

use crate::color::Color;
use crate::geometry::{distance_to_segment, Point, Rect};
use crate::style::StyleState;
use crate::surface::{BrushConfig, Surface};

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;

const FALLBACK_RGB: [u8; 3] = [0, 0, 0];

pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<[f32; 4]>,
    brush: BrushConfig,
    rgb: [f32; 3],
    path_open: bool,
}

impl Raster {
    /// A fully transparent surface. The brush starts as the default style's
    /// brush until the engine binds its own.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let brush = StyleState::default().brush();
        let rgb = resolve_rgb(&brush.stroke_style);
        Self {
            width,
            height,
            pixels: vec![[0.0; 4]; width as usize * height as usize],
            brush,
            rgb,
            path_open: false,
        }
    }

    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn brush(&self) -> &BrushConfig {
        &self.brush
    }

    /// Whether a path was begun and not yet closed.
    #[must_use]
    pub fn path_open(&self) -> bool {
        self.path_open
    }

    /// Straight (non-premultiplied) RGBA at `(x, y)`, 8 bits per channel.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let [r, g, b, a] = *self.pixels.get(self.index(x, y)?)?;
        if a <= 0.0 {
            return Some([0, 0, 0, 0]);
        }
        Some([
            to_byte(r / a),
            to_byte(g / a),
            to_byte(b / a),
            to_byte(a),
        ])
    }

    #[must_use]
    pub fn painted_pixels(&self) -> usize {
        self.pixels.iter().filter(|pixel| pixel[3] > 0.0).count()
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    fn composite(&mut self, x: u32, y: u32) {
        let Some(index) = self.index(x, y) else {
            return;
        };
        let alpha = self.brush.global_alpha.clamp(0.0, 1.0) as f32;
        let src = [
            self.rgb[0] * alpha,
            self.rgb[1] * alpha,
            self.rgb[2] * alpha,
            alpha,
        ];
        let dst = &mut self.pixels[index];
        for channel in 0..4 {
            dst[channel] = src[channel] + dst[channel] * (1.0 - alpha);
        }
    }
}

impl Surface for Raster {
    fn apply_brush(&mut self, brush: &BrushConfig) {
        self.rgb = resolve_rgb(&brush.stroke_style);
        self.brush = brush.clone();
    }

    fn begin_path(&mut self, _at: Point) {
        self.path_open = true;
    }

    fn stroke_segment(&mut self, from: Point, to: Point) {
        let radius = self.brush.line_width / 2.0;
        if !radius.is_finite() || radius <= 0.0 {
            return;
        }
        let min_x = (from.x.min(to.x) - radius).floor().max(0.0);
        let min_y = (from.y.min(to.y) - radius).floor().max(0.0);
        let max_x = (from.x.max(to.x) + radius).ceil().min(f64::from(self.width));
        let max_y = (from.y.max(to.y) + radius).ceil().min(f64::from(self.height));
        if min_x >= max_x || min_y >= max_y {
            return;
        }
        for y in min_y as u32..max_y as u32 {
            for x in min_x as u32..max_x as u32 {
                let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                if distance_to_segment(center, from, to) <= radius {
                    self.composite(x, y);
                }
            }
        }
    }

    fn close_path(&mut self) {
        self.path_open = false;
    }

    fn clear_rect(&mut self, rect: Rect) {
        let rect = rect.normalized();
        if !rect.x.is_finite() || !rect.y.is_finite() {
            return;
        }
        let start_x = (rect.x - 0.5).ceil().max(0.0);
        let start_y = (rect.y - 0.5).ceil().max(0.0);
        let end_x = (rect.x + rect.width - 0.5).ceil().min(f64::from(self.width));
        let end_y = (rect.y + rect.height - 0.5).ceil().min(f64::from(self.height));
        if start_x >= end_x || start_y >= end_y {
            return;
        }
        for y in start_y as u32..end_y as u32 {
            for x in start_x as u32..end_x as u32 {
                if let Some(index) = self.index(x, y) {
                    self.pixels[index] = [0.0; 4];
                }
            }
        }
    }
}

fn resolve_rgb(color: &Color) -> [f32; 3] {
    let [r, g, b] = color.to_rgb().unwrap_or(FALLBACK_RGB);
    [
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
    ]
}

fn to_byte(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
