//! Fixed navigation bar.

use devfolio_core::content::NAV_ITEMS;
use yew::prelude::*;
use yew_icons::{Icon, IconData};

use crate::hooks::use_scroll_chrome;

#[function_component(Header)]
pub fn header() -> Html {
    let chrome = use_scroll_chrome();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let links = |onclick: Option<Callback<MouseEvent>>| {
        NAV_ITEMS
            .iter()
            .map(|item| {
                html! {
                    <a key={item.name} href={format!("#{}", item.section)} onclick={onclick.clone()}>
                        { item.name }
                    </a>
                }
            })
            .collect::<Html>()
    };

    html! {
        <header class={classes!("site-header", chrome.header_opaque.then_some("scrolled"))}>
            <div class="container header-inner">
                <a class="brand text-gradient" href="#home">
                    { "Dev" }<span class="brand-suffix">{ "Portfolio" }</span>
                </a>

                <nav class="desktop-nav">{ links(None) }</nav>

                <button class="menu-toggle" aria-label="Toggle menu" onclick={toggle_menu}>
                    if *menu_open {
                        <Icon data={IconData::LUCIDE_X} width={"24px"} height={"24px"} />
                    } else {
                        <Icon data={IconData::LUCIDE_MENU} width={"24px"} height={"24px"} />
                    }
                </button>

                if *menu_open {
                    <div class="mobile-nav">
                        <nav>{ links(Some(close_menu)) }</nav>
                    </div>
                }
            </div>
        </header>
    }
}
