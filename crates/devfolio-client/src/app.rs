//! Main application component.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::ToastProvider;
use crate::pages::{HomePage, NotFoundPage, PanicPage};
use crate::routes::Route;

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Panic => html! { <PanicPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

/// Root application component with router and toast context.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <Switch<Route> render={switch} />
            </ToastProvider>
        </BrowserRouter>
    }
}
