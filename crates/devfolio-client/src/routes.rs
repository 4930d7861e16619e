//! Application routes.

use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    /// The single portfolio page.
    #[at("/")]
    Home,
    /// Shown after a panic, see [`crate::pages::set_panic_hook`].
    #[at("/panic")]
    Panic,
    #[not_found]
    #[at("/404")]
    NotFound,
}
