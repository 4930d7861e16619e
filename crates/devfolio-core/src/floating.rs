//! Floating shapes and code glyphs behind the hero section.

use crate::animation::{Animation, object_count};
use crate::color::Color;
use crate::drift::Drift;
use crate::random::RandomSource;
use crate::surface::{Font, Surface, Viewport};

pub const SHAPES_PER_PX: f64 = 0.02;
pub const MAX_SHAPES: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
    Diamond,
    /// A short code glyph such as `{}`.
    Code(&'static str),
}

/// Palette entry a floating element is stamped from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeTemplate {
    pub kind: ShapeKind,
    pub color: u32,
    pub base_size: f64,
}

impl ShapeTemplate {
    const fn new(kind: ShapeKind, color: u32, base_size: f64) -> Self {
        Self {
            kind,
            color,
            base_size,
        }
    }
}

/// Code glyphs carry no base size of their own; they scale from this font size.
const GLYPH_BASE_SIZE: f64 = 16.0;

pub const TEMPLATES: [ShapeTemplate; 8] = [
    ShapeTemplate::new(ShapeKind::Circle, 0x8B_5CF6, 15.0),
    ShapeTemplate::new(ShapeKind::Square, 0xEC_4899, 12.0),
    ShapeTemplate::new(ShapeKind::Triangle, 0x3B_82F6, 18.0),
    ShapeTemplate::new(ShapeKind::Diamond, 0x10_B981, 14.0),
    ShapeTemplate::new(ShapeKind::Code("<>"), 0x63_66F1, GLYPH_BASE_SIZE),
    ShapeTemplate::new(ShapeKind::Code("{}"), 0xF5_9E0B, GLYPH_BASE_SIZE),
    ShapeTemplate::new(ShapeKind::Code("()"), 0xEF_4444, GLYPH_BASE_SIZE),
    ShapeTemplate::new(ShapeKind::Code("[]"), 0x8B_5CF6, GLYPH_BASE_SIZE),
];

#[derive(Debug, Clone, PartialEq)]
pub struct FloatingShape {
    pub kind: ShapeKind,
    pub drift: Drift,
    pub color: Color,
    pub size: f64,
    pub opacity: f64,
}

impl FloatingShape {
    fn stamp(template: &ShapeTemplate, viewport: Viewport, rng: &mut dyn RandomSource) -> Self {
        let x = rng.range(0.0, viewport.width);
        let y = rng.range(0.0, viewport.height);
        let size = template.base_size * rng.range(0.8, 1.3);
        let speed = rng.range(0.2, 0.7);
        let vx = speed * rng.sign();
        let vy = speed * rng.sign();
        let rotation = rng.range(0.0, 360.0);
        let rotation_speed = (rng.next_unit() - 0.5) * 0.5;
        let opacity = rng.range(0.1, 0.4);
        Self {
            kind: template.kind,
            drift: Drift::new(x, y, vx, vy).with_rotation(rotation, rotation_speed),
            color: Color::from_u32(template.color),
            size,
            opacity,
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let s = self.size;
        surface.save();
        surface.translate(self.drift.x, self.drift.y);
        surface.rotate(self.drift.rotation.to_radians());
        surface.set_alpha(self.opacity);
        match self.kind {
            ShapeKind::Circle => surface.fill_circle(0.0, 0.0, s, self.color),
            ShapeKind::Square => surface.fill_rect(-s / 2.0, -s / 2.0, s, s, self.color),
            ShapeKind::Triangle => {
                surface.fill_polygon(&[(0.0, -s), (s, s), (-s, s)], self.color);
            }
            ShapeKind::Diamond => {
                surface.fill_polygon(&[(0.0, -s), (s, 0.0), (0.0, s), (-s, 0.0)], self.color);
            }
            ShapeKind::Code(text) => {
                surface.fill_text(text, 0.0, 0.0, &Font::mono_centered(s), self.color);
            }
        }
        surface.restore();
    }
}

#[derive(Debug, Clone)]
pub struct FloatingShapes {
    shapes: Vec<FloatingShape>,
    viewport: Viewport,
}

impl FloatingShapes {
    pub fn spawn(viewport: Viewport, rng: &mut dyn RandomSource) -> Self {
        let count = object_count(viewport.width, SHAPES_PER_PX, MAX_SHAPES);
        let shapes = (0..count)
            .map(|_| {
                let template = &TEMPLATES[rng.index(TEMPLATES.len())];
                FloatingShape::stamp(template, viewport, rng)
            })
            .collect();
        Self { shapes, viewport }
    }

    pub fn shapes(&self) -> &[FloatingShape] {
        &self.shapes
    }
}

impl Animation for FloatingShapes {
    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn step(&mut self, _rng: &mut dyn RandomSource) {
        let viewport = self.viewport;
        for shape in &mut self.shapes {
            shape.drift.advance(viewport);
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        for shape in &self.shapes {
            shape.draw(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{Scripted, seeded};
    use crate::surface::{DrawOp, RecordingSurface};

    const VIEW: Viewport = Viewport::new(1024.0, 768.0);

    #[test]
    fn test_count_is_capped() {
        let mut rng = seeded(1);
        assert_eq!(FloatingShapes::spawn(VIEW, &mut rng).shapes().len(), 20);
        let wide = Viewport::new(1920.0, 1080.0);
        assert_eq!(FloatingShapes::spawn(wide, &mut rng).shapes().len(), MAX_SHAPES);
    }

    #[test]
    fn test_scripted_stamp() {
        // template index 0.30 * 8 = 2 -> triangle, then x, y, size, speed,
        // sign x, sign y, rotation, rotation speed, opacity
        let mut rng = Scripted::new(&[0.30, 0.5, 0.25, 0.0, 1.0 - 1e-12, 0.9, 0.1, 0.5, 1.0, 0.0]);
        let shapes = FloatingShapes::spawn(Viewport::new(50.0, 40.0), &mut rng);
        let shape = &shapes.shapes()[0];

        assert_eq!(shape.kind, ShapeKind::Triangle);
        assert!((shape.drift.x - 25.0).abs() < 1e-9);
        assert!((shape.drift.y - 10.0).abs() < 1e-9);
        assert!((shape.size - 18.0 * 0.8).abs() < 1e-9);
        assert!((shape.drift.vx - 0.7).abs() < 1e-6);
        assert!((shape.drift.vy + 0.7).abs() < 1e-6);
        assert!((shape.drift.rotation - 180.0).abs() < 1e-9);
        assert!((shape.drift.rotation_speed - 0.25).abs() < 1e-9);
        assert!((shape.opacity - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_shapes_stay_on_screen() {
        let mut rng = seeded(21);
        let mut shapes = FloatingShapes::spawn(VIEW, &mut rng);
        for _ in 0..5_000 {
            shapes.step(&mut rng);
        }
        for s in shapes.shapes() {
            assert!(s.drift.within(VIEW), "escaped: {:?}", s.drift);
        }
    }

    #[test]
    fn test_resize_keeps_every_shape() {
        let mut rng = seeded(4);
        let mut shapes = FloatingShapes::spawn(VIEW, &mut rng);
        let before = shapes.shapes().to_vec();
        shapes.resize(Viewport::new(300.0, 200.0));
        assert_eq!(shapes.shapes(), before.as_slice());
    }

    #[test]
    fn test_draw_wraps_each_shape_in_save_restore() {
        let mut rng = seeded(8);
        let shapes = FloatingShapes::spawn(VIEW, &mut rng);
        let mut surface = RecordingSurface::new(VIEW);
        shapes.draw(&mut surface);

        let n = shapes.shapes().len();
        assert_eq!(surface.count(|op| matches!(op, DrawOp::Save)), n);
        assert_eq!(surface.count(|op| matches!(op, DrawOp::Restore)), n);
        assert_eq!(surface.count(|op| matches!(op, DrawOp::Alpha(_))), n);
    }
}
