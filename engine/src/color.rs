use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

pub const DEFAULT_COLOR: &str = "red";

/// Brush color as the CSS text the color picker produced.
///
/// The value is opaque to the engine: it is handed to the surface as-is.
/// [`Color::to_rgb`] resolves it for surfaces that rasterize themselves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Color(String);

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            return Self::default();
        }
        Self(value)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve `#rgb`, `#rrggbb` or a CSS color keyword.
    #[must_use]
    pub fn to_rgb(&self) -> Option<[u8; 3]> {
        let text = self.0.trim();
        let rgb = if text.starts_with('#') {
            Srgb::<u8>::from_str(text).ok()?
        } else {
            palette::named::from_str(&text.to_ascii_lowercase())?
        };
        Some([rgb.red, rgb.green, rgb.blue])
    }

    /// `#rrggbb` form, the only value a color input accepts.
    #[must_use]
    pub fn to_hex(&self) -> Option<String> {
        let [r, g, b] = self.to_rgb()?;
        Some(format!("#{r:02x}{g:02x}{b:02x}"))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self(DEFAULT_COLOR.to_string())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.0
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
