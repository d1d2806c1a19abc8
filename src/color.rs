//! Color model and alpha blending
//!
//! Colors use linear-normalized sRGB channels in `[0, 1]`. A [`Paint`] is a
//! color plus an opacity; blending a paint over an opaque base produces the
//! effective opaque color every downstream computation works with.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error for malformed color input (bad hex string, out-of-range channel)
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidColorInput {
    #[error("invalid hex color {0:?}: expected #RRGGBB")]
    BadHexFormat(String),
    #[error("invalid hex color {0:?}: non-hex digit")]
    BadHexDigit(String),
}

/// An opaque color with channels in `[0, 1]`
///
/// Channel values outside `[0, 1]` are a caller error; nothing here clamps.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Create a color from channel values in `[0, 1]`
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Parse from a `#RRGGBB` hex string
    ///
    /// Only the six-digit opaque form is accepted; translucency belongs on
    /// [`Paint`], not on the color itself.
    pub fn from_hex(s: &str) -> Result<Self, InvalidColorInput> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| InvalidColorInput::BadHexFormat(s.to_string()))?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(InvalidColorInput::BadHexFormat(s.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| f64::from(v) / 255.0)
                .map_err(|_| InvalidColorInput::BadHexDigit(s.to_string()))
        };

        Ok(Color {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Format as `#rrggbb` (lowercase; display code uppercases where needed)
    pub fn to_hex(self) -> String {
        let byte = |c: f64| (c * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
    }
}

fn default_opacity() -> f64 {
    1.0
}

/// A translucent fill: a color plus an opacity in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    pub color: Color,
    /// Opacity in `[0, 1]`; absent in serialized form means fully opaque
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

impl Paint {
    /// An opaque paint
    pub const fn solid(color: Color) -> Self {
        Self {
            color,
            opacity: 1.0,
        }
    }

    /// A paint with explicit opacity
    pub const fn with_opacity(color: Color, opacity: f64) -> Self {
        Self { color, opacity }
    }

    /// Standard "over" composite against a fully opaque base
    ///
    /// Per channel: `paint.c * opacity + base.c * (1 - opacity)`. Inputs in
    /// `[0, 1]` guarantee the output stays in `[0, 1]`, so no clamping.
    pub fn blend_over(self, base: Color) -> Color {
        let mix = |c: f64, b: f64| c * self.opacity + b * (1.0 - self.opacity);
        Color {
            r: mix(self.color.r, base.r),
            g: mix(self.color.g, base.g),
            b: mix(self.color.b, base.b),
        }
    }

    /// Swatch label for header tiles: uppercased `#RRGGBB`, with a ` NN%`
    /// suffix when the paint is translucent
    pub fn swatch_label(self) -> String {
        let hex = self.color.to_hex();
        if self.opacity < 1.0 {
            format!("{} {}%", hex, (self.opacity * 100.0).round() as u32).to_uppercase()
        } else {
            hex.to_uppercase()
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::solid(color)
    }
}
