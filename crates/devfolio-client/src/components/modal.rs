//! Dialog overlay used for project details, uploads and the resume preview.

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_icons::{Icon, IconData};

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub state: UseStateHandle<bool>,
    pub children: Children,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    /// Additional CSS classes for the dialog panel.
    #[prop_or_default]
    pub class: Classes,
}

/// Dialog that closes from its close button, the Escape key or a backdrop click.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let is_open = props.state.clone();

    let close = {
        let is_open = is_open.clone();
        Callback::from(move |()| is_open.set(false))
    };

    {
        let close = close.clone();
        use_effect_with(*is_open, move |open| {
            let listener = open
                .then(|| web_sys::window().and_then(|w| w.document()))
                .flatten()
                .map(|document| {
                    EventListener::new(&document, "keydown", move |event| {
                        let is_escape = event
                            .dyn_ref::<web_sys::KeyboardEvent>()
                            .is_some_and(|e| e.key() == "Escape");
                        if is_escape {
                            close.emit(());
                        }
                    })
                });
            move || drop(listener)
        });
    }

    if !*is_open {
        return html! {};
    }

    let on_overlay_click = close.reform(|_: MouseEvent| ());
    let on_panel_click = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_close_click = close.reform(|_: MouseEvent| ());

    html! {
        <div class="modal-overlay" onclick={on_overlay_click}>
            <div class={classes!("modal", props.class.clone())} role="dialog" onclick={on_panel_click}>
                <div class="modal-header">
                    if let Some(title) = &props.title {
                        <h3 class="modal-title">{ title.clone() }</h3>
                    }
                    <button class="modal-close-btn" aria-label="Close" onclick={on_close_click}>
                        <Icon data={IconData::LUCIDE_X} width={"18px"} height={"18px"} />
                    </button>
                </div>
                <div class="modal-content">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
