//! Drawing core for the scribble board.
//!
//! Everything in this crate is independent of the browser: the host feeds
//! pointer events and configuration actions into a [`DrawingEngine`], and the
//! engine issues raster operations against whatever [`Surface`] it was built
//! with. The wasm client supplies a canvas-backed surface; tests use the
//! software [`Raster`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Pointer gesture state machine and brush rebinding |
//! | [`style`] | Brush and eraser configuration (`StyleState`, `StyleAction`) |
//! | [`surface`] | The drawing-context trait and the brush bundle it receives |
//! | [`raster`] | Software RGBA surface with source-over compositing |
//! | [`color`] | CSS color text and its resolution to RGB |
//! | [`geometry`] | Points, rectangles, segment distance |
//! | [`config`] | JSON session configuration |

pub mod color;
pub mod config;
pub mod engine;
pub mod geometry;
pub mod raster;
pub mod style;
pub mod surface;

pub use color::Color;
pub use config::{Config, ConfigError};
pub use engine::{DrawingEngine, Effect, Gesture, Mode};
pub use geometry::{Point, Rect};
pub use raster::Raster;
pub use style::{StyleAction, StyleState};
pub use surface::{BrushConfig, Surface, LINE_CAP, LINE_JOIN};
