//! Pointer gesture state machine.
//!
//! A gesture runs from pointer-down to pointer-up (or cancel). Its mode is
//! latched at pointer-down from `eraser_enabled` and never changes while the
//! gesture lasts. Brush style is not latched: every configuration change that
//! touches color, width or opacity rebinds the surface immediately, so the
//! next segment of an in-progress stroke already uses it. Eraser size is read
//! on every erase move.

use crate::geometry::{normalize_point, Point, Rect};
use crate::style::{StyleAction, StyleState};
use crate::surface::Surface;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Paint,
    Erase,
}

/// The live gesture, if any.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// Painting; `anchor` is where the next segment starts.
    Painting { anchor: Point },
    Erasing,
}

impl Gesture {
    #[must_use]
    pub fn mode(&self) -> Option<Mode> {
        match self {
            Gesture::Idle => None,
            Gesture::Painting { .. } => Some(Mode::Paint),
            Gesture::Erasing => Some(Mode::Erase),
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Gesture::Idle)
    }
}

/// What a pointer event did to the surface.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    None,
    Began(Mode),
    Segment { from: Point, to: Point },
    Cleared(Rect),
    Ended(Mode),
}

/// Owns the surface, the style and the gesture state.
///
/// Construction binds the initial brush, so a surface is always configured
/// before the first pointer event can reach it.
pub struct DrawingEngine<S: Surface> {
    surface: S,
    style: StyleState,
    gesture: Gesture,
}

impl<S: Surface> DrawingEngine<S> {
    pub fn new(surface: S, style: StyleState) -> Self {
        let mut engine = Self {
            surface,
            style,
            gesture: Gesture::Idle,
        };
        engine.rebind();
        engine
    }

    #[must_use]
    pub fn style(&self) -> &StyleState {
        &self.style
    }

    #[must_use]
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mode the next gesture would start in.
    #[must_use]
    pub fn next_mode(&self) -> Mode {
        if self.style.eraser_enabled {
            Mode::Erase
        } else {
            Mode::Paint
        }
    }

    // --- Configuration ---

    /// Apply a control change. Brush changes are pushed to the surface before
    /// this returns.
    pub fn configure(&mut self, action: StyleAction) {
        let rebind = action.affects_brush();
        log::debug!("style {action:?}");
        self.style.apply(action);
        if rebind {
            self.rebind();
        }
    }

    /// Reapply the full brush to the surface.
    pub fn rebind(&mut self) {
        let brush = self.style.brush();
        log::trace!(
            "rebind color={} width={} alpha={}",
            brush.stroke_style,
            brush.line_width,
            brush.global_alpha
        );
        self.surface.apply_brush(&brush);
    }

    // --- Pointer events ---

    pub fn pointer_down(&mut self, point: Point) -> Effect {
        let Some(point) = normalize_point(point) else {
            return Effect::None;
        };
        if self.gesture.is_active() {
            log::debug!("pointer down ignored, gesture already active");
            return Effect::None;
        }
        let mode = self.next_mode();
        match mode {
            Mode::Paint => {
                self.surface.begin_path(point);
                self.gesture = Gesture::Painting { anchor: point };
            }
            Mode::Erase => {
                self.gesture = Gesture::Erasing;
            }
        }
        log::debug!("gesture begin mode={mode:?} at ({}, {})", point.x, point.y);
        Effect::Began(mode)
    }

    pub fn pointer_move(&mut self, point: Point) -> Effect {
        let Some(point) = normalize_point(point) else {
            return Effect::None;
        };
        match self.gesture {
            Gesture::Idle => Effect::None,
            Gesture::Painting { anchor } => {
                self.surface.stroke_segment(anchor, point);
                self.gesture = Gesture::Painting { anchor: point };
                Effect::Segment {
                    from: anchor,
                    to: point,
                }
            }
            Gesture::Erasing => {
                let rect = Rect::centered_square(point, self.style.eraser_side());
                self.surface.clear_rect(rect);
                Effect::Cleared(rect)
            }
        }
    }

    pub fn pointer_up(&mut self) -> Effect {
        let Some(mode) = self.gesture.mode() else {
            return Effect::None;
        };
        if mode == Mode::Paint {
            self.surface.close_path();
        }
        self.gesture = Gesture::Idle;
        let effect = Effect::Ended(mode);
        log::debug!("gesture end {effect:?}");
        effect
    }

    /// The pointer was lost (capture released, browser cancel). Ends the
    /// gesture the same way a pointer-up does.
    pub fn pointer_cancel(&mut self) -> Effect {
        if self.gesture.is_active() {
            log::debug!("gesture cancelled");
        }
        self.pointer_up()
    }
}
