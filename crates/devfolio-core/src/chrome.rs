//! Page chrome derived from the scroll position.

pub const HEADER_OPAQUE_AFTER: f64 = 50.0;
pub const SCROLL_TOP_AFTER: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollChrome {
    pub header_opaque: bool,
    pub show_scroll_top: bool,
}

impl ScrollChrome {
    pub fn from_offset(y: f64) -> Self {
        Self {
            header_opaque: y > HEADER_OPAQUE_AFTER,
            show_scroll_top: y > SCROLL_TOP_AFTER,
        }
    }
}

/// Whether a vertical span `[top, bottom]` (relative to the viewport top)
/// overlaps a viewport `viewport_height` tall.
pub fn intersects_viewport(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height && bottom >= 0.0
}

/// One-way flag for reveal-on-scroll animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealLatch(bool);

impl RevealLatch {
    /// Latches once the span is seen; returns the current state.
    pub fn observe(&mut self, top: f64, bottom: f64, viewport_height: f64) -> bool {
        self.0 |= intersects_viewport(top, bottom, viewport_height);
        self.0
    }

    pub fn revealed(self) -> bool {
        self.0
    }
}
