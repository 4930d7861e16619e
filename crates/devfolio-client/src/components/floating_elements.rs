//! Drifting shapes and code glyphs behind the hero.

use devfolio_core::FloatingShapes;
use yew::prelude::*;

use crate::hooks::{CanvasMount, use_canvas_animation};

#[function_component(FloatingElements)]
pub fn floating_elements() -> Html {
    let canvas_ref = use_node_ref();
    use_canvas_animation(CanvasMount::Window(canvas_ref.clone()), FloatingShapes::spawn);

    html! {
        <canvas ref={canvas_ref} class="background-canvas floating-elements" />
    }
}
