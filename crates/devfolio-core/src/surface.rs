//! Immediate-mode drawing target shared by the background animations.
//!
//! The client implements [`Surface`] over a `CanvasRenderingContext2d`. Tests
//! draw into a [`RecordingSurface`] and inspect the emitted operations.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Viewport dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f64 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

/// Horizontal text anchoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
}

/// Font description for [`Surface::fill_text`].
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub size_px: f64,
    pub family: &'static str,
    pub align: TextAlign,
}

impl Font {
    pub const SANS: &'static str = "'Inter', sans-serif";
    pub const MONO: &'static str = "'Courier New', monospace";

    pub fn sans(size_px: f64) -> Self {
        Self {
            size_px,
            family: Self::SANS,
            align: TextAlign::Start,
        }
    }

    pub fn mono_centered(size_px: f64) -> Self {
        Self {
            size_px,
            family: Self::MONO,
            align: TextAlign::Center,
        }
    }

    /// CSS shorthand, e.g. `14px 'Inter', sans-serif`.
    pub fn css(&self) -> String {
        format!("{}px {}", self.size_px, self.family)
    }
}

/// 2D immediate-mode drawing primitives.
///
/// Transform and alpha state is stacked with [`save`](Surface::save) /
/// [`restore`](Surface::restore), as on an HTML canvas.
pub trait Surface {
    /// Current drawable size.
    fn viewport(&self) -> Viewport;

    /// Wipes the whole drawable area.
    fn clear(&mut self);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, radians: f64);
    fn set_alpha(&mut self, alpha: f64);

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color);
    fn fill_polygon(&mut self, points: &[(f64, f64)], color: Color);
    fn stroke_polyline(&mut self, points: &[(f64, f64)], color: Color, width: f64);
    fn stroke_gradient_line(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        from_color: Color,
        to_color: Color,
        width: f64,
    );
    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &Font, color: Color);
}

/// A single recorded drawing call.
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DrawOp {
    Clear,
    Save,
    Restore,
    Translate(f64, f64),
    Rotate(f64),
    Alpha(f64),
    Circle {
        x: f64,
        y: f64,
        radius: f64,
        color: Color,
    },
    Rect {
        width: f64,
        height: f64,
        color: Color,
    },
    Polygon { points: usize, color: Color },
    Polyline { points: usize, color: Color },
    GradientLine {
        from: (f64, f64),
        to: (f64, f64),
        from_color: Color,
    },
    Text { text: String, color: Color },
}

/// Surface that records every call instead of drawing.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub viewport: Viewport,
    pub ops: Vec<DrawOp>,
}

#[cfg(test)]
impl RecordingSurface {
    pub(crate) fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ops: Vec::new(),
        }
    }

    pub(crate) fn count(&self, pred: impl Fn(&DrawOp) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn save(&mut self) {
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(DrawOp::Restore);
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::Translate(x, y));
    }

    fn rotate(&mut self, radians: f64) {
        self.ops.push(DrawOp::Rotate(radians));
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.ops.push(DrawOp::Alpha(alpha));
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
        self.ops.push(DrawOp::Circle {
            x,
            y,
            radius,
            color,
        });
    }

    fn fill_rect(&mut self, _x: f64, _y: f64, width: f64, height: f64, color: Color) {
        self.ops.push(DrawOp::Rect {
            width,
            height,
            color,
        });
    }

    fn fill_polygon(&mut self, points: &[(f64, f64)], color: Color) {
        self.ops.push(DrawOp::Polygon {
            points: points.len(),
            color,
        });
    }

    fn stroke_polyline(&mut self, points: &[(f64, f64)], color: Color, _width: f64) {
        self.ops.push(DrawOp::Polyline {
            points: points.len(),
            color,
        });
    }

    fn stroke_gradient_line(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        from_color: Color,
        _to_color: Color,
        _width: f64,
    ) {
        self.ops.push(DrawOp::GradientLine {
            from,
            to,
            from_color,
        });
    }

    fn fill_text(&mut self, text: &str, _x: f64, _y: f64, _font: &Font, color: Color) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            color,
        });
    }
}
