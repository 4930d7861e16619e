//! Page chrome around the sections.

mod footer;
mod header;
mod scroll_to_top;

pub use footer::{Footer, social_icon};
pub use header::Header;
pub use scroll_to_top::ScrollToTop;
