//! Particle network background.
//!
//! Small colored dots drift across the surface, push away from the pointer
//! and are linked by fading lines whenever two of them come close.

use crate::animation::{Animation, object_count};
use crate::color::Color;
use crate::drift::Drift;
use crate::random::RandomSource;
use crate::surface::{Font, Surface, Viewport};

/// Particles per pixel of viewport width.
pub const PARTICLES_PER_PX: f64 = 0.05;
pub const MAX_PARTICLES: usize = 100;
/// Upper bound of the connection threshold.
pub const MAX_CONNECTION_DISTANCE: f64 = 150.0;
pub const INTERACTION_RADIUS: f64 = 100.0;
pub const MAX_SPEED: f64 = 1.0;
const INITIAL_SPEED: f64 = 0.3;
const REPULSION: f64 = 0.02;
const CONNECTION_OPACITY: f64 = 0.8;
const CONNECTION_WIDTH: f64 = 0.5;

/// Tech brand colors.
pub const TECH_COLORS: [u32; 11] = [
    0x61_DAFB, // React
    0x31_78C6, // TypeScript
    0xF7_DF1E, // JavaScript
    0x33_9933, // Node.js
    0xE3_4F26, // HTML
    0x15_72B6, // CSS
    0x76_4ABC, // Redux
    0xFF_9900, // AWS
    0x24_96ED, // Docker
    0x2A_42D0, // Figma
    0x70_55CC, // theme purple
];

pub const TECH_NAMES: [&str; 6] = [
    "React",
    "TypeScript",
    "JavaScript",
    "Node.js",
    "HTML/CSS",
    "Redux",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub drift: Drift,
    pub size: f64,
    pub color: Color,
    pub opacity: f64,
}

/// Undirected link between particles `a < b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
}

impl Connection {
    /// Line opacity, `0.8` when touching and fading to `0` at the threshold.
    pub fn opacity(&self, threshold: f64) -> f64 {
        ((1.0 - self.distance / threshold) * CONNECTION_OPACITY).max(0.0)
    }
}

/// A tech name flashed for a single frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TechFlash {
    pub text: &'static str,
    pub x: f64,
    pub y: f64,
    pub size_px: f64,
    pub alpha: f64,
}

#[derive(Debug, Clone)]
pub struct ParticleNetwork {
    particles: Vec<Particle>,
    connections: Vec<Connection>,
    flashes: Vec<TechFlash>,
    viewport: Viewport,
    connection_distance: f64,
    pointer: (f64, f64),
}

impl ParticleNetwork {
    pub fn spawn(viewport: Viewport, rng: &mut dyn RandomSource) -> Self {
        let count = object_count(viewport.width, PARTICLES_PER_PX, MAX_PARTICLES);
        let particles = (0..count)
            .map(|_| {
                let size = rng.range(1.0, 4.0);
                let x = rng.range(0.0, viewport.width);
                let y = rng.range(0.0, viewport.height);
                let vx = (rng.next_unit() - 0.5) * INITIAL_SPEED;
                let vy = (rng.next_unit() - 0.5) * INITIAL_SPEED;
                let color = Color::from_u32(TECH_COLORS[rng.index(TECH_COLORS.len())]);
                let opacity = rng.range(0.2, 0.7);
                Particle {
                    drift: Drift::new(x, y, vx, vy),
                    size,
                    color,
                    opacity,
                }
            })
            .collect();

        tracing::debug!(count, "particle network spawned");

        Self {
            particles,
            connections: Vec::new(),
            flashes: Vec::new(),
            viewport,
            connection_distance: connection_distance(viewport.width),
            pointer: (0.0, 0.0),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn connection_distance(&self) -> f64 {
        self.connection_distance
    }

    pub fn flashes(&self) -> &[TechFlash] {
        &self.flashes
    }

    /// Indices linked to particle `i`, in either direction.
    #[cfg(test)]
    pub(crate) fn neighbours(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        self.connections.iter().filter_map(move |c| {
            if c.a == i {
                Some(c.b)
            } else if c.b == i {
                Some(c.a)
            } else {
                None
            }
        })
    }

    fn repel(&mut self) {
        let (px, py) = self.pointer;
        for p in &mut self.particles {
            let dx = px - p.drift.x;
            let dy = py - p.drift.y;
            let distance = dx.hypot(dy);
            if distance < INTERACTION_RADIUS {
                let force = (INTERACTION_RADIUS - distance) / INTERACTION_RADIUS;
                p.drift.vx -= dx * force * REPULSION;
                p.drift.vy -= dy * force * REPULSION;
            }
            p.drift.clamp_speed(MAX_SPEED);
        }
    }

    fn rebuild_connections(&mut self) {
        self.connections.clear();
        for (i, p) in self.particles.iter().enumerate() {
            for (j, q) in self.particles.iter().enumerate().skip(i + 1) {
                let distance = p.drift.distance_to(q.drift.x, q.drift.y);
                if distance < self.connection_distance {
                    self.connections.push(Connection {
                        a: i,
                        b: j,
                        distance,
                    });
                }
            }
        }
    }

    fn roll_flashes(&mut self, rng: &mut dyn RandomSource) {
        let Viewport { width, height } = self.viewport;
        let visible = (rng.index(4) + 1).min(3);
        self.flashes.clear();
        for _ in 0..visible {
            let text = TECH_NAMES[rng.index(TECH_NAMES.len())];
            let x = rng.range(0.0, width * 0.8) + width * 0.1;
            let y = rng.range(0.0, height * 0.8) + height * 0.1;
            #[allow(clippy::cast_precision_loss)]
            let size_px = rng.index(14) as f64 + 10.0;
            let alpha = rng.range(0.05, 0.25);
            self.flashes.push(TechFlash {
                text,
                x,
                y,
                size_px,
                alpha,
            });
        }
    }
}

/// Connection threshold for a viewport width: `min(150, width * 0.15)`.
pub fn connection_distance(width: f64) -> f64 {
    MAX_CONNECTION_DISTANCE.min(width * 0.15)
}

impl Animation for ParticleNetwork {
    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer = (x, y);
    }

    fn step(&mut self, rng: &mut dyn RandomSource) {
        self.repel();
        let viewport = self.viewport;
        for p in &mut self.particles {
            p.drift.advance(viewport);
        }
        self.rebuild_connections();
        self.roll_flashes(rng);
    }

    fn draw(&self, surface: &mut dyn Surface) {
        for c in &self.connections {
            let p = &self.particles[c.a];
            let q = &self.particles[c.b];
            let opacity = c.opacity(self.connection_distance);
            surface.stroke_gradient_line(
                (p.drift.x, p.drift.y),
                (q.drift.x, q.drift.y),
                p.color.with_opacity(opacity),
                q.color.with_opacity(opacity),
                CONNECTION_WIDTH,
            );
        }

        for p in &self.particles {
            surface.fill_circle(
                p.drift.x,
                p.drift.y,
                p.size,
                p.color.with_opacity(p.opacity),
            );
        }

        for flash in &self.flashes {
            surface.fill_text(
                flash.text,
                flash.x,
                flash.y,
                &Font::sans(flash.size_px),
                Color::WHITE.with_opacity(flash.alpha),
            );
        }
    }
}
