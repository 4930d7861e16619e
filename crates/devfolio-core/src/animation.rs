//! Per-frame render loop shared by the background animations.
//!
//! A [`RenderLoop`] is either inactive or active. Activation happens once when
//! the host surface is mounted, deactivation once when it is removed; while
//! active every [`frame`](RenderLoop::frame) steps the model, clears the whole
//! surface and redraws it.

use crate::random::RandomSource;
use crate::surface::{Surface, Viewport};

/// A decorative model driven one display frame at a time.
pub trait Animation {
    /// The drawable area changed size. Object positions are left as they are.
    fn resize(&mut self, viewport: Viewport);

    /// Pointer position in surface coordinates.
    fn pointer_moved(&mut self, _x: f64, _y: f64) {}

    /// Advances the model by one frame.
    fn step(&mut self, rng: &mut dyn RandomSource);

    /// Draws the current state. The surface has already been cleared.
    fn draw(&self, surface: &mut dyn Surface);

    /// Drops any graphics resources the model allocated.
    fn release(&mut self) {}
}

/// Number of objects to spawn for a viewport width: `min(cap, floor(width * per_px))`.
pub fn object_count(width: f64, per_px: f64, cap: usize) -> usize {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (width.max(0.0) * per_px).floor() as usize;
    n.min(cap)
}

/// Render loop lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopPhase {
    /// Not mounted: no listeners, no frame request pending.
    #[default]
    Inactive,
    /// Mounted: listeners registered, one frame request always pending.
    Active,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LoopError {
    #[error("render loop is already active")]
    AlreadyActive,
}

/// Owns an animation model and gates it behind the two-state lifecycle.
#[derive(Debug)]
pub struct RenderLoop<A, R> {
    phase: LoopPhase,
    animation: Option<A>,
    rng: R,
    frames: u64,
}

impl<A: Animation, R: RandomSource> RenderLoop<A, R> {
    pub fn new(rng: R) -> Self {
        Self {
            phase: LoopPhase::Inactive,
            animation: None,
            rng,
            frames: 0,
        }
    }

    /// Installs the model built by `build` and goes active.
    ///
    /// Rejected while already active, in which case `build` is not called.
    pub fn activate(
        &mut self,
        viewport: Viewport,
        build: impl FnOnce(Viewport, &mut dyn RandomSource) -> A,
    ) -> Result<(), LoopError> {
        if self.phase == LoopPhase::Active {
            return Err(LoopError::AlreadyActive);
        }
        self.animation = Some(build(viewport, &mut self.rng));
        self.phase = LoopPhase::Active;
        self.frames = 0;
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            "render loop activated"
        );
        Ok(())
    }

    /// Steps and redraws once. Returns whether another frame should be requested.
    pub fn frame(&mut self, surface: &mut dyn Surface) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };
        animation.step(&mut self.rng);
        surface.clear();
        animation.draw(surface);
        self.frames += 1;
        true
    }

    pub fn resize(&mut self, viewport: Viewport) {
        if let Some(animation) = self.animation.as_mut() {
            animation.resize(viewport);
        }
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        if let Some(animation) = self.animation.as_mut() {
            animation.pointer_moved(x, y);
        }
    }

    /// Releases the model and goes inactive. Calling it again does nothing.
    pub fn deactivate(&mut self) {
        if let Some(mut animation) = self.animation.take() {
            animation.release();
            tracing::debug!(frames = self.frames, "render loop deactivated");
        }
        self.phase = LoopPhase::Inactive;
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    pub fn animation(&self) -> Option<&A> {
        self.animation.as_ref()
    }

    /// Frames drawn since the last activation.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::Scripted;
    use crate::surface::{DrawOp, RecordingSurface};

    #[derive(Debug, Default)]
    struct Counter {
        steps: u32,
        viewport: Viewport,
        pointer: Option<(f64, f64)>,
        released: bool,
    }

    impl Animation for Counter {
        fn resize(&mut self, viewport: Viewport) {
            self.viewport = viewport;
        }

        fn pointer_moved(&mut self, x: f64, y: f64) {
            self.pointer = Some((x, y));
        }

        fn step(&mut self, _rng: &mut dyn RandomSource) {
            self.steps += 1;
        }

        fn draw(&self, surface: &mut dyn Surface) {
            surface.fill_rect(0.0, 0.0, 1.0, 1.0, crate::color::Color::WHITE);
        }

        fn release(&mut self) {
            self.released = true;
        }
    }

    fn build(viewport: Viewport, _rng: &mut dyn RandomSource) -> Counter {
        Counter {
            viewport,
            ..Counter::default()
        }
    }

    #[test]
    fn test_inactive_loop_draws_nothing() {
        let mut lp: RenderLoop<Counter, _> = RenderLoop::new(Scripted::constant(0.5));
        let mut surface = RecordingSurface::new(Viewport::new(10.0, 10.0));

        assert_eq!(lp.phase(), LoopPhase::Inactive);
        assert!(!lp.frame(&mut surface));
        assert!(surface.ops.is_empty());
    }

    #[test]
    fn test_frame_clears_then_draws() {
        let mut lp = RenderLoop::new(Scripted::constant(0.5));
        lp.activate(Viewport::new(10.0, 10.0), build).unwrap();
        let mut surface = RecordingSurface::new(Viewport::new(10.0, 10.0));

        assert!(lp.frame(&mut surface));
        assert!(lp.frame(&mut surface));

        assert_eq!(surface.ops[0], DrawOp::Clear);
        assert_eq!(surface.count(|op| matches!(op, DrawOp::Clear)), 2);
        assert_eq!(lp.animation().unwrap().steps, 2);
        assert_eq!(lp.frames(), 2);
    }

    #[test]
    fn test_double_activation_rejected() {
        let mut lp = RenderLoop::new(Scripted::constant(0.5));
        lp.activate(Viewport::new(10.0, 10.0), build).unwrap();

        let err = lp
            .activate(Viewport::new(20.0, 20.0), |_, _| panic!("must not rebuild"))
            .unwrap_err();
        assert_eq!(err, LoopError::AlreadyActive);
        assert_eq!(lp.animation().unwrap().viewport, Viewport::new(10.0, 10.0));
    }

    #[test]
    fn test_deactivate_releases_and_is_idempotent() {
        let mut lp = RenderLoop::new(Scripted::constant(0.5));
        lp.activate(Viewport::new(10.0, 10.0), build).unwrap();
        lp.deactivate();
        lp.deactivate();

        assert_eq!(lp.phase(), LoopPhase::Inactive);
        assert!(lp.animation().is_none());

        let mut surface = RecordingSurface::new(Viewport::new(10.0, 10.0));
        assert!(!lp.frame(&mut surface));

        // Reactivation after a full cycle is allowed.
        assert!(lp.activate(Viewport::new(5.0, 5.0), build).is_ok());
    }

    #[test]
    fn test_resize_and_pointer_forwarded() {
        let mut lp = RenderLoop::new(Scripted::constant(0.5));
        lp.activate(Viewport::new(10.0, 10.0), build).unwrap();
        lp.resize(Viewport::new(30.0, 40.0));
        lp.pointer_moved(3.0, 4.0);

        let anim = lp.animation().unwrap();
        assert_eq!(anim.viewport, Viewport::new(30.0, 40.0));
        assert_eq!(anim.pointer, Some((3.0, 4.0)));
    }

    #[test]
    fn test_object_count() {
        assert_eq!(object_count(1920.0, 0.05, 100), 96);
        assert_eq!(object_count(2400.0, 0.05, 100), 100);
        assert_eq!(object_count(1920.0, 0.02, 25), 25);
        assert_eq!(object_count(375.0, 0.02, 25), 7);
        assert_eq!(object_count(-5.0, 0.02, 25), 0);
    }
}
