use yew::prelude::*;
use yew_icons::{Icon, IconData};

use crate::hooks::use_scroll_chrome;
use crate::util::scroll_to_top;

/// Floating button that appears once the page is scrolled down.
#[function_component(ScrollToTop)]
pub fn scroll_to_top_button() -> Html {
    let chrome = use_scroll_chrome();
    let onclick = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <button
            class={classes!("scroll-top", (!chrome.show_scroll_top).then_some("hidden"))}
            aria-label="Scroll to top"
            {onclick}
        >
            <Icon data={IconData::LUCIDE_ARROW_UP} width={"20px"} height={"20px"} />
        </button>
    }
}
