mod use_canvas_animation;
mod use_scroll_offset;
mod use_timeout;

pub use use_canvas_animation::{CanvasMount, use_canvas_animation};
pub use use_scroll_offset::{use_reveal_on_scroll, use_scroll_chrome};
pub use use_timeout::use_timeout_when;
