//! Browser-backed implementations of the core traits.

pub mod clock;
pub mod email;

pub use clock::BrowserClock;
pub use email::EmailJsSender;
