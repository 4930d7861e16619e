//! Transient notifications.

use std::rc::Rc;

use yew::prelude::*;

/// How long a toast stays up unless dismissed.
const TOAST_DURATION_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub title: AttrValue,
    pub description: AttrValue,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn info(title: impl Into<AttrValue>, description: impl Into<AttrValue>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn error(title: impl Into<AttrValue>, description: impl Into<AttrValue>) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            ..Self::info(title, description)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ToastQueue {
    next_id: u32,
    items: Vec<(u32, Toast)>,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(toast) => {
                next.items.push((next.next_id, toast));
                next.next_id = next.next_id.wrapping_add(1);
            }
            ToastAction::Dismiss(id) => next.items.retain(|(i, _)| *i != id),
        }
        Rc::new(next)
    }
}

impl ToastQueue {
    pub fn items(&self) -> &[(u32, Toast)] {
        &self.items
    }

    fn last_id(&self) -> u32 {
        self.next_id.wrapping_sub(1)
    }
}

/// Handle for raising toasts from anywhere under [`ToastProvider`].
#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    queue: UseReducerHandle<ToastQueue>,
}

impl ToastHandle {
    pub fn show(&self, toast: Toast) {
        self.queue.dispatch(ToastAction::Push(toast));
    }

    pub fn dismiss(&self, id: u32) {
        self.queue.dispatch(ToastAction::Dismiss(id));
    }
}

/// Returns the toast handle, or `None` outside a [`ToastProvider`].
#[hook]
pub fn use_toast() -> Option<ToastHandle> {
    use_context::<ToastHandle>()
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let handle = ToastHandle {
        queue: queue.clone(),
    };

    // Every new toast schedules its own dismissal.
    {
        let handle = handle.clone();
        use_effect_with(queue.next_id, move |_| {
            if let Some((id, _)) = handle.queue.items().last() {
                let id = *id;
                if id == handle.queue.last_id() {
                    let handle = handle.clone();
                    gloo::timers::callback::Timeout::new(TOAST_DURATION_MS, move || {
                        handle.dismiss(id);
                    })
                    .forget();
                }
            }
        });
    }

    html! {
        <ContextProvider<ToastHandle> context={handle.clone()}>
            { for props.children.iter() }
            <ol class="toast-viewport">
                { for queue.items().iter().map(|(id, toast)| {
                    let id = *id;
                    let on_dismiss = {
                        let handle = handle.clone();
                        Callback::from(move |_: MouseEvent| handle.dismiss(id))
                    };
                    let class = classes!(
                        "toast",
                        (toast.variant == ToastVariant::Destructive).then_some("toast-destructive")
                    );
                    html! {
                        <li key={id} {class} role="status">
                            <div class="toast-body">
                                <div class="toast-title">{ toast.title.clone() }</div>
                                <div class="toast-description">{ toast.description.clone() }</div>
                            </div>
                            <button class="toast-close" aria-label="Dismiss" onclick={on_dismiss}>{ "×" }</button>
                        </li>
                    }
                }) }
            </ol>
        </ContextProvider<ToastHandle>>
    }
}
