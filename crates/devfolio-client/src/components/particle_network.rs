//! Interactive particle network behind the skills section.

use devfolio_core::ParticleNetwork as Network;
use yew::prelude::*;

use crate::hooks::{CanvasMount, use_canvas_animation};

#[function_component(ParticleNetwork)]
pub fn particle_network() -> Html {
    let canvas_ref = use_node_ref();
    use_canvas_animation(CanvasMount::Window(canvas_ref.clone()), Network::spawn);

    html! {
        <canvas ref={canvas_ref} class="background-canvas particle-network" />
    }
}
