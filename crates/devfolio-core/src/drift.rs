//! Linear drift with boundary reflection, shared by the 2D backgrounds.

use serde::{Deserialize, Serialize};

use crate::surface::Viewport;

/// Kinematic state of a drifting object.
///
/// Rotation is in degrees; speeds are per frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Drift {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub rotation: f64,
    pub rotation_speed: f64,
}

impl Drift {
    pub fn new(x: f64, y: f64, vx: f64, vy: f64) -> Self {
        Self {
            x,
            y,
            vx,
            vy,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation: f64, rotation_speed: f64) -> Self {
        self.rotation = rotation;
        self.rotation_speed = rotation_speed;
        self
    }

    /// Moves one frame and reflects off the viewport edges.
    pub fn advance(&mut self, viewport: Viewport) {
        self.x += self.vx;
        self.y += self.vy;
        reflect_axis(&mut self.x, &mut self.vx, viewport.width);
        reflect_axis(&mut self.y, &mut self.vy, viewport.height);
        self.rotation = (self.rotation + self.rotation_speed).rem_euclid(360.0);
    }

    /// Clamps each velocity component to `[-max, max]`.
    pub fn clamp_speed(&mut self, max: f64) {
        self.vx = self.vx.clamp(-max, max);
        self.vy = self.vy.clamp(-max, max);
    }

    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        (self.x - x).hypot(self.y - y)
    }

    #[cfg(test)]
    pub(crate) fn within(&self, viewport: Viewport) -> bool {
        (0.0..=viewport.width).contains(&self.x) && (0.0..=viewport.height).contains(&self.y)
    }
}

/// Reflects one coordinate at `0` and `extent`.
///
/// A crossing made during this step is mirrored back inside. An object that
/// is already outside (the viewport shrank under it) only has its velocity
/// pointed back inward, so it drifts into view instead of jumping.
fn reflect_axis(pos: &mut f64, vel: &mut f64, extent: f64) {
    let extent = extent.max(0.0);
    if *pos < 0.0 {
        if *pos - *vel >= 0.0 {
            *pos = (-*pos).min(extent);
        }
        *vel = vel.abs();
    } else if *pos > extent {
        if *pos - *vel <= extent {
            *pos = (2.0 * extent - *pos).max(0.0);
        }
        *vel = -vel.abs();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Viewport = Viewport::new(100.0, 50.0);

    #[test]
    fn test_reflects_at_right_edge() {
        let mut d = Drift::new(99.5, 10.0, 1.0, 0.0);
        d.advance(VIEW);
        assert!((d.x - 99.5).abs() < 1e-9);
        assert!(d.vx < 0.0);
    }

    #[test]
    fn test_reflects_at_top_edge() {
        let mut d = Drift::new(10.0, 0.2, 0.0, -0.7);
        d.advance(VIEW);
        assert!((d.y - 0.5).abs() < 1e-9);
        assert!(d.vy > 0.0);
    }

    #[test]
    fn test_stays_within_bounds_over_many_frames() {
        let mut bodies = vec![
            Drift::new(1.0, 1.0, -0.9, 0.4),
            Drift::new(99.0, 49.0, 0.7, 0.7),
            Drift::new(50.0, 25.0, -1.0, -1.0),
            Drift::new(0.0, 50.0, 0.3, 1.0),
        ];
        for _ in 0..10_000 {
            for b in &mut bodies {
                b.advance(VIEW);
                assert!(b.within(VIEW), "escaped: {b:?}");
            }
        }
    }

    #[test]
    fn test_outside_after_shrink_drifts_back() {
        let mut d = Drift::new(180.0, 10.0, 0.5, 0.0);
        d.advance(VIEW);
        assert!(d.vx < 0.0);
        let start = d.x;
        for _ in 0..10 {
            d.advance(VIEW);
        }
        assert!(d.x < start);
    }

    #[test]
    fn test_rotation_wraps() {
        let mut d = Drift::new(10.0, 10.0, 0.0, 0.0).with_rotation(359.9, 0.25);
        d.advance(VIEW);
        assert!((d.rotation - 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_clamp_speed() {
        let mut d = Drift::new(0.0, 0.0, 3.0, -2.5);
        d.clamp_speed(1.0);
        assert_eq!((d.vx, d.vy), (1.0, -1.0));
    }
}
