//! Brush and eraser configuration.
//!
//! `StyleState` is the single source of truth for how the next paint or erase
//! operation looks. It only changes through [`StyleAction`]s, which the UI
//! controls emit; the engine decides what each change means for the surface.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::surface::BrushConfig;

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

pub const STROKE_WIDTH_RANGE: (f64, f64) = (3.0, 30.0);
pub const OPACITY_RANGE: (f64, f64) = (0.01, 0.5);
pub const ERASER_SIZE_RANGE: (f64, f64) = (5.0, 50.0);

pub const DEFAULT_STROKE_WIDTH: f64 = 10.0;
pub const DEFAULT_OPACITY: f64 = 0.4;
pub const DEFAULT_ERASER_SIZE: f64 = 10.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleState {
    pub color: Color,
    pub stroke_width: f64,
    pub opacity: f64,
    pub eraser_enabled: bool,
    pub eraser_size: f64,
}

impl Default for StyleState {
    fn default() -> Self {
        Self {
            color: Color::default(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            opacity: DEFAULT_OPACITY,
            eraser_enabled: false,
            eraser_size: DEFAULT_ERASER_SIZE,
        }
    }
}

/// A configuration change coming from one of the controls.
///
/// Numeric values are passed through as given; the sliders already constrain
/// them to their ranges.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleAction {
    SetColor(Color),
    SetStrokeWidth(f64),
    SetOpacity(f64),
    ToggleEraser,
    SetEraserSize(f64),
}

impl StyleAction {
    /// Whether applying this action changes the bound brush.
    #[must_use]
    pub fn affects_brush(&self) -> bool {
        matches!(
            self,
            StyleAction::SetColor(_) | StyleAction::SetStrokeWidth(_) | StyleAction::SetOpacity(_)
        )
    }
}

/// Coerce range-input text to a number. Non-numeric or non-finite text
/// yields `None` and the caller keeps the previous value.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}

impl StyleState {
    pub fn apply(&mut self, action: StyleAction) {
        match action {
            StyleAction::SetColor(color) => self.color = color,
            StyleAction::SetStrokeWidth(width) => self.stroke_width = width,
            StyleAction::SetOpacity(opacity) => self.opacity = opacity,
            StyleAction::ToggleEraser => self.eraser_enabled = !self.eraser_enabled,
            StyleAction::SetEraserSize(size) => self.eraser_size = size,
        }
    }

    /// The brush bundle a rebind applies to the surface.
    #[must_use]
    pub fn brush(&self) -> BrushConfig {
        BrushConfig {
            global_alpha: self.opacity,
            stroke_style: self.color.clone(),
            line_width: self.stroke_width,
        }
    }

    /// Eraser side length in whole pixels, truncated toward zero.
    #[must_use]
    pub fn eraser_side(&self) -> i64 {
        self.eraser_size.trunc() as i64
    }

    #[must_use]
    pub fn eraser_label(&self) -> &'static str {
        if self.eraser_enabled {
            "Disable Eraser"
        } else {
            "Enable Eraser"
        }
    }
}
