//! Drives a [`devfolio_core::Animation`] on a canvas with `requestAnimationFrame`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use devfolio_core::random::seeded;
use devfolio_core::{Animation, RandomSource, RenderLoop, Surface, Viewport};
use gloo::events::EventListener;
use rand_chacha::ChaCha8Rng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

use crate::canvas::{CanvasSurface, element_viewport, window_viewport};

/// Where the animation draws.
#[derive(Clone, PartialEq)]
pub enum CanvasMount {
    /// An existing `<canvas>` that fills the window.
    Window(NodeRef),
    /// A container the hook fills with a canvas of its own, removed again on unmount.
    Container(NodeRef),
}

type Shared<A> = Rc<RefCell<(RenderLoop<A, ChaCha8Rng>, CanvasSurface)>>;

fn clock_seed() -> u64 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let jitter = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let now = js_sys::Date::now() as u64;
    now ^ (jitter << 32)
}

/// Canvas to draw on and whether the hook created it.
fn acquire_canvas(mount: &CanvasMount) -> Option<(web_sys::HtmlCanvasElement, bool)> {
    match mount {
        CanvasMount::Window(node) => Some((node.cast::<web_sys::HtmlCanvasElement>()?, false)),
        CanvasMount::Container(node) => {
            let container = node.cast::<web_sys::Element>()?;
            let canvas = web_sys::window()?
                .document()?
                .create_element("canvas")
                .ok()?
                .dyn_into::<web_sys::HtmlCanvasElement>()
                .ok()?;
            container.append_child(&canvas).ok()?;
            Some((canvas, true))
        }
    }
}

fn mount_viewport(mount: &CanvasMount) -> Option<Viewport> {
    match mount {
        CanvasMount::Window(_) => window_viewport(),
        CanvasMount::Container(node) => node.cast::<web_sys::Element>().map(|e| element_viewport(&e)),
    }
}

/// Runs the animation built by `build` while the component is mounted.
///
/// Without a canvas or a 2D context nothing is registered and nothing is drawn.
#[hook]
pub fn use_canvas_animation<A, F>(mount: CanvasMount, build: F)
where
    A: Animation + 'static,
    F: Fn(Viewport, &mut dyn RandomSource) -> A + 'static,
{
    use_effect_with(mount, move |mount| {
        let mount = mount.clone();

        let started = acquire_canvas(&mount).and_then(|(canvas, owned)| {
            let Some(surface) = CanvasSurface::new(canvas.clone()) else {
                if owned {
                    canvas.remove();
                }
                return None;
            };
            Some((surface, owned))
        });

        let Some((mut surface, owned_canvas)) = started else {
            tracing::debug!("no drawing surface, animation skipped");
            return Box::new(|| ()) as Box<dyn FnOnce()>;
        };

        let viewport = mount_viewport(&mount).unwrap_or_else(|| surface.viewport());
        surface.resize(viewport);

        let mut render_loop = RenderLoop::new(seeded(clock_seed()));
        if let Err(e) = render_loop.activate(viewport, &build) {
            tracing::warn!(error = %e, "animation not started");
            return Box::new(|| ()) as Box<dyn FnOnce()>;
        }
        let shared: Shared<A> = Rc::new(RefCell::new((render_loop, surface)));

        let frame_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let closure: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

        {
            let shared = shared.clone();
            let frame_id = frame_id.clone();
            let closure_clone = closure.clone();
            *closure.borrow_mut() = Some(Closure::new(move |_timestamp: f64| {
                let keep_going = {
                    let mut guard = shared.borrow_mut();
                    let (render_loop, surface) = &mut *guard;
                    render_loop.frame(surface)
                };
                if !keep_going {
                    return;
                }
                if let (Some(window), Some(cb)) = (web_sys::window(), closure_clone.borrow().as_ref()) {
                    frame_id.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
                }
            }));
        }

        if let (Some(window), Some(cb)) = (web_sys::window(), closure.borrow().as_ref()) {
            frame_id.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
        }

        let resize_listener = web_sys::window().map(|window| {
            let shared = shared.clone();
            let mount = mount.clone();
            EventListener::new(&window, "resize", move |_| {
                let Some(viewport) = mount_viewport(&mount) else {
                    return;
                };
                let mut guard = shared.borrow_mut();
                let (render_loop, surface) = &mut *guard;
                surface.resize(viewport);
                render_loop.resize(viewport);
            })
        });

        let pointer_listener = {
            let shared = shared.clone();
            let canvas = shared.borrow().1.canvas().clone();
            let target = canvas.clone();
            EventListener::new(&target, "mousemove", move |event| {
                let Some(event) = event.dyn_ref::<web_sys::MouseEvent>() else {
                    return;
                };
                let rect = canvas.get_bounding_client_rect();
                let x = f64::from(event.client_x()) - rect.left();
                let y = f64::from(event.client_y()) - rect.top();
                shared.borrow_mut().0.pointer_moved(x, y);
            })
        };

        Box::new(move || {
            if let (Some(id), Some(window)) = (frame_id.take(), web_sys::window()) {
                let _ = window.cancel_animation_frame(id);
            }
            closure.borrow_mut().take();
            drop(resize_listener);
            drop(pointer_listener);

            let mut guard = shared.borrow_mut();
            guard.0.deactivate();
            if owned_canvas {
                guard.1.canvas().remove();
            }
        }) as Box<dyn FnOnce()>
    });
}

#[cfg(test)]
mod tests {
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Default)]
    struct Counters {
        built: Cell<u32>,
        steps: Cell<u32>,
        resizes: Cell<u32>,
        released: Cell<u32>,
    }

    fn bump(cell: &Cell<u32>) {
        cell.set(cell.get() + 1);
    }

    struct Ticker(Rc<Counters>);

    impl Animation for Ticker {
        fn resize(&mut self, _viewport: Viewport) {
            bump(&self.0.resizes);
        }

        fn step(&mut self, _rng: &mut dyn RandomSource) {
            bump(&self.0.steps);
        }

        fn draw(&self, _surface: &mut dyn Surface) {}

        fn release(&mut self) {
            bump(&self.0.released);
        }
    }

    #[derive(Clone, Copy, PartialEq)]
    enum Target {
        /// A plain `<div>` handed over where a canvas is expected.
        NotACanvas,
        Container,
    }

    #[derive(Properties)]
    struct HostProps {
        target: Target,
        counters: Rc<Counters>,
    }

    impl PartialEq for HostProps {
        fn eq(&self, other: &Self) -> bool {
            self.target == other.target && Rc::ptr_eq(&self.counters, &other.counters)
        }
    }

    #[function_component(Host)]
    fn host(props: &HostProps) -> Html {
        let node = use_node_ref();
        let mount = match props.target {
            Target::NotACanvas => CanvasMount::Window(node.clone()),
            Target::Container => CanvasMount::Container(node.clone()),
        };
        let counters = props.counters.clone();
        use_canvas_animation(mount, move |_: Viewport, _: &mut dyn RandomSource| {
            bump(&counters.built);
            Ticker(counters.clone())
        });
        html! { <div ref={node} style="width: 200px; height: 100px;" /> }
    }

    fn mount(target: Target) -> (yew::AppHandle<Host>, web_sys::Element, Rc<Counters>) {
        let root = gloo::utils::document().create_element("div").unwrap();
        gloo::utils::body().append_child(&root).unwrap();
        let counters = Rc::new(Counters::default());
        let props = HostProps {
            target,
            counters: counters.clone(),
        };
        let handle = yew::Renderer::<Host>::with_root_and_props(root.clone(), props).render();
        (handle, root, counters)
    }

    fn fire_resize() {
        let event = web_sys::Event::new("resize").unwrap();
        gloo::utils::window().dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    async fn test_missing_canvas_registers_nothing() {
        let (handle, root, counters) = mount(Target::NotACanvas);
        TimeoutFuture::new(50).await;

        fire_resize();
        TimeoutFuture::new(50).await;

        assert_eq!(counters.built.get(), 0);
        assert_eq!(counters.steps.get(), 0);
        assert_eq!(counters.resizes.get(), 0);
        assert!(root.query_selector("canvas").unwrap().is_none());

        handle.destroy();
        assert_eq!(counters.released.get(), 0);
    }

    #[wasm_bindgen_test]
    async fn test_unmount_stops_frames_and_removes_owned_canvas() {
        let (handle, root, counters) = mount(Target::Container);
        TimeoutFuture::new(100).await;

        assert_eq!(counters.built.get(), 1);
        let canvas = root.query_selector("canvas").unwrap().expect("owned canvas");
        fire_resize();
        assert_eq!(counters.resizes.get(), 1);

        handle.destroy();
        TimeoutFuture::new(20).await;
        let steps = counters.steps.get();
        assert_eq!(counters.released.get(), 1);
        assert!(canvas.parent_node().is_none());

        fire_resize();
        TimeoutFuture::new(100).await;
        assert_eq!(counters.steps.get(), steps);
        assert_eq!(counters.resizes.get(), 1);
    }
}
