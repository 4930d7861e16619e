//! Rotating tech globe behind the resume section.
//!
//! The hook creates the globe's canvas inside the container and removes it on
//! unmount, together with the scene's meshes.

use devfolio_core::Globe as GlobeModel;
use yew::prelude::*;

use crate::hooks::{CanvasMount, use_canvas_animation};

#[function_component(Globe)]
pub fn globe() -> Html {
    let container_ref = use_node_ref();
    use_canvas_animation(CanvasMount::Container(container_ref.clone()), GlobeModel::spawn);

    html! {
        <div ref={container_ref} class="globe-container" aria-hidden="true" />
    }
}
