//! RGBA colors for the canvas palettes.

use serde::{Deserialize, Serialize};

/// RGBA color representation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Builds an opaque color from a packed `0xRRGGBB` value.
    pub const fn from_u32(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Same color with alpha taken from a `0.0..=1.0` opacity.
    ///
    /// The opacity is floored onto the byte range, so `0.5` maps to `127`.
    #[must_use]
    pub fn with_opacity(self, opacity: f64) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let a = (opacity.clamp(0.0, 1.0) * 255.0).floor() as u8;
        Self { a, ..self }
    }

    /// Alpha as a `0.0..=1.0` fraction.
    pub fn opacity(self) -> f64 {
        f64::from(self.a) / 255.0
    }

    /// `rgba(r,g,b,a)` with a fractional alpha.
    pub fn to_css_rgba(self) -> String {
        format!(
            "rgba({},{},{},{:.3})",
            self.r,
            self.g,
            self.b,
            self.opacity()
        )
    }
}
