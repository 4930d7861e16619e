use gloo::timers::callback::Timeout;
use yew::prelude::*;

/// Fires `on_elapsed` once, `millis` after `active` turns true.
///
/// The timer is cancelled when `active` goes false or the component unmounts.
#[hook]
pub fn use_timeout_when(active: bool, millis: u32, on_elapsed: Callback<()>) {
    use_effect_with((active, millis), move |&(active, millis)| {
        let timeout = active.then(|| Timeout::new(millis, move || on_elapsed.emit(())));
        move || drop(timeout)
    });
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Properties, PartialEq)]
    struct CountdownProps {
        active: bool,
        fired: Rc<Cell<u32>>,
    }

    #[function_component(Countdown)]
    fn countdown(props: &CountdownProps) -> Html {
        let fired = props.fired.clone();
        use_timeout_when(
            props.active,
            30,
            Callback::from(move |()| fired.set(fired.get() + 1)),
        );
        html! {}
    }

    fn mount(active: bool) -> (yew::AppHandle<Countdown>, Rc<Cell<u32>>) {
        let root = gloo::utils::document().create_element("div").unwrap();
        gloo::utils::body().append_child(&root).unwrap();
        let fired = Rc::new(Cell::new(0));
        let props = CountdownProps {
            active,
            fired: fired.clone(),
        };
        let handle = yew::Renderer::<Countdown>::with_root_and_props(root, props).render();
        (handle, fired)
    }

    #[wasm_bindgen_test]
    async fn test_fires_once_after_delay() {
        let (_handle, fired) = mount(true);

        TimeoutFuture::new(5).await;
        assert_eq!(fired.get(), 0);

        TimeoutFuture::new(100).await;
        assert_eq!(fired.get(), 1);
    }

    #[wasm_bindgen_test]
    async fn test_inactive_never_fires() {
        let (_handle, fired) = mount(false);
        TimeoutFuture::new(100).await;
        assert_eq!(fired.get(), 0);
    }

    #[wasm_bindgen_test]
    async fn test_unmount_cancels() {
        let (handle, fired) = mount(true);
        TimeoutFuture::new(5).await;
        handle.destroy();

        TimeoutFuture::new(100).await;
        assert_eq!(fired.get(), 0);
    }
}
