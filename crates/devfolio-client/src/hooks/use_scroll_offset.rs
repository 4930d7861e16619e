//! Scroll-driven page state.

use std::cell::RefCell;
use std::rc::Rc;

use devfolio_core::{RevealLatch, ScrollChrome};
use gloo::events::EventListener;
use yew::prelude::*;

fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Header and scroll-to-top visibility for the current scroll position.
#[hook]
pub fn use_scroll_chrome() -> ScrollChrome {
    let chrome = use_state_eq(|| ScrollChrome::from_offset(scroll_y()));

    {
        let chrome = chrome.clone();
        use_effect_with((), move |()| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "scroll", move |_| {
                    chrome.set(ScrollChrome::from_offset(scroll_y()));
                })
            });
            move || drop(listener)
        });
    }

    *chrome
}

/// Becomes `true` once the referenced element has entered the viewport, and stays so.
#[hook]
pub fn use_reveal_on_scroll(node: NodeRef) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with(node, move |node| {
            let latch = Rc::new(RefCell::new(RevealLatch::default()));
            let check = {
                let node = node.clone();
                move || {
                    let Some(element) = node.cast::<web_sys::Element>() else {
                        return;
                    };
                    let Some(height) = web_sys::window()
                        .and_then(|w| w.inner_height().ok())
                        .and_then(|h| h.as_f64())
                    else {
                        return;
                    };
                    let rect = element.get_bounding_client_rect();
                    if latch.borrow_mut().observe(rect.top(), rect.bottom(), height) {
                        revealed.set(true);
                    }
                }
            };

            check();
            let listener = web_sys::window()
                .map(|window| EventListener::new(&window, "scroll", move |_| check()));
            move || drop(listener)
        });
    }

    *revealed
}
