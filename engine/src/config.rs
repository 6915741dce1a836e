//! Session configuration.
//!
//! The page may embed a JSON object on the canvas element to override the
//! surface size or the initial style. Every field is optional:
//!
//! ```json
//! { "width": 800, "height": 600, "style": { "color": "#1f1f1f", "strokeWidth": 6 } }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::style::StyleState;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("surface size {width}x{height} is too large")]
    TooLarge { width: u32, height: u32 },
}

/// Upper bound on either surface dimension, in device pixels.
pub const MAX_DIMENSION: u32 = 8192;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Surface width in pixels; 0 means the element's laid-out width.
    pub width: u32,
    /// Surface height in pixels; 0 means the element's laid-out height.
    pub height: u32,
    pub style: StyleState,
}

impl Config {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(text)?;
        if config.width > MAX_DIMENSION || config.height > MAX_DIMENSION {
            return Err(ConfigError::TooLarge {
                width: config.width,
                height: config.height,
            });
        }
        Ok(config)
    }

    /// Resolve the surface size against the element's own size, filling in
    /// whichever dimension was left at 0.
    #[must_use]
    pub fn surface_size(&self, element_width: u32, element_height: u32) -> (u32, u32) {
        let width = if self.width == 0 {
            element_width
        } else {
            self.width
        };
        let height = if self.height == 0 {
            element_height
        } else {
            self.height
        };
        (width.min(MAX_DIMENSION), height.min(MAX_DIMENSION))
    }
}

/// Whether a page query string asks for verbose logging.
pub fn debug_enabled(search: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .any(|pair| matches!(pair, "debug=1" | "debug=true" | "log=1" | "log=true"))
}
