use std::rc::Rc;

use devfolio_core::config::CONTACT_EMAIL;
use devfolio_core::contact::{SENT_DISPLAY_MS, deliver};
use devfolio_core::content::{CONTACT_INFO, SOCIAL_LINKS};
use devfolio_core::{
    ContactError, ContactFlow, ContactForm, EmailConfig, Field, SubmitPhase, TemplateParams,
};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_icons::{Icon, IconData};

use super::SectionHeading;
use crate::components::layout::social_icon;
use crate::components::{Toast, use_toast};
use crate::hooks::use_timeout_when;
use crate::services::EmailJsSender;

/// A delivery the page still has to perform.
#[derive(Clone, Debug, PartialEq)]
struct Outgoing {
    seq: u32,
    params: TemplateParams,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct ContactState {
    form: ContactForm,
    flow: ContactFlow,
    outgoing: Option<Outgoing>,
    submissions: u32,
}

enum ContactAction {
    Edit(Field, String),
    Submit,
    Delivered(Result<(), ContactError>),
    SentElapsed,
}

impl Reducible for ContactState {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Edit(field, value) => match field {
                Field::Name => next.form.name = value,
                Field::Email => next.form.email = value,
                Field::Message => next.form.message = value,
            },
            ContactAction::Submit => match next.flow.begin(&next.form, CONTACT_EMAIL) {
                Ok(params) => {
                    next.submissions = next.submissions.wrapping_add(1);
                    next.outgoing = Some(Outgoing {
                        seq: next.submissions,
                        params,
                    });
                }
                Err(ContactError::Busy) => return self,
                Err(e) => tracing::debug!(error = %e, "contact form rejected"),
            },
            ContactAction::Delivered(result) => {
                next.flow.finish(&result);
                next.outgoing = None;
                if result.is_ok() {
                    next.form = ContactForm::default();
                }
            }
            ContactAction::SentElapsed => next.flow.sent_elapsed(),
        }
        Rc::new(next)
    }
}

fn field_input(state: &UseReducerHandle<ContactState>, field: Field) -> Callback<InputEvent> {
    let dispatcher = state.dispatcher();
    Callback::from(move |e: InputEvent| {
        let value = e
            .target_dyn_into::<HtmlInputElement>()
            .map(|input| input.value())
            .or_else(|| e.target_dyn_into::<HtmlTextAreaElement>().map(|area| area.value()));
        if let Some(value) = value {
            dispatcher.dispatch(ContactAction::Edit(field, value));
        }
    })
}

fn sent_toast() -> Toast {
    Toast::info(
        "Message sent successfully!",
        "Thank you for reaching out. I'll get back to you soon.",
    )
}

fn failed_toast() -> Toast {
    Toast::error(
        "Failed to send message",
        "There was an error sending your message. Please try again later.",
    )
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let state = use_reducer(ContactState::default);
    let toast = use_toast();
    let phase = state.flow.phase();

    // The confirmation stays up for a fixed time, then the form unlocks.
    use_timeout_when(
        phase == SubmitPhase::Sent,
        SENT_DISPLAY_MS,
        state.dispatcher().to_callback().reform(|()| ContactAction::SentElapsed),
    );

    // Each accepted submission is delivered exactly once.
    {
        let dispatcher = state.dispatcher();
        use_effect_with(state.outgoing.clone(), move |outgoing| {
            if let Some(Outgoing { params, .. }) = outgoing.clone() {
                wasm_bindgen_futures::spawn_local(async move {
                    let result = match EmailConfig::from_env() {
                        Ok(config) => deliver(&EmailJsSender, &config, &params).await,
                        Err(e) => {
                            tracing::error!(error = %e, "email service is not configured");
                            Err(ContactError::Delivery(e.to_string()))
                        }
                    };
                    if let Some(toast) = toast.as_ref() {
                        toast.show(if result.is_ok() { sent_toast() } else { failed_toast() });
                    }
                    dispatcher.dispatch(ContactAction::Delivered(result));
                });
            }
        });
    }

    let on_submit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatcher.dispatch(ContactAction::Submit);
        })
    };

    let errors = state.flow.errors();
    let error_text = |field| {
        errors
            .get(field)
            .map(|e| html! { <p class="field-error">{ e.to_string() }</p> })
    };

    let submit_label = match phase {
        SubmitPhase::Idle => html! {
            <>
                <Icon data={IconData::LUCIDE_SEND} width={"16px"} height={"16px"} />
                { "Send Message" }
            </>
        },
        SubmitPhase::Pending => html! { <><span class="spinner" />{ "Sending..." }</> },
        SubmitPhase::Sent => html! {
            <>
                <Icon data={IconData::LUCIDE_CHECK} width={"16px"} height={"16px"} />
                { "Sent!" }
            </>
        },
    };

    html! {
        <section id="contact" class="section contact">
            <div class="container">
                <SectionHeading
                    title="Get In Touch"
                    subtitle="Have a project in mind or want to discuss potential opportunities? Feel free to reach out using the form below."
                />

                <div class="contact-grid">
                    <div class="card">
                        <h3>{ "Send a Message" }</h3>
                        <form class="contact-form" onsubmit={on_submit} novalidate={true}>
                            <label for="contact-name">{ "Name" }</label>
                            <input id="contact-name" placeholder="Your name"
                                class={classes!(errors.get(Field::Name).is_some().then_some("invalid"))}
                                value={state.form.name.clone()} oninput={field_input(&state, Field::Name)} />
                            { error_text(Field::Name) }

                            <label for="contact-email">{ "Email" }</label>
                            <input id="contact-email" type="email" placeholder="your@email.com"
                                class={classes!(errors.get(Field::Email).is_some().then_some("invalid"))}
                                value={state.form.email.clone()} oninput={field_input(&state, Field::Email)} />
                            { error_text(Field::Email) }

                            <label for="contact-message">{ "Message" }</label>
                            <textarea id="contact-message" rows="5" placeholder="Your message..."
                                class={classes!(errors.get(Field::Message).is_some().then_some("invalid"))}
                                value={state.form.message.clone()} oninput={field_input(&state, Field::Message)} />
                            { error_text(Field::Message) }

                            <button type="submit" class="btn-primary wide" disabled={!state.flow.can_submit()}>
                                { submit_label }
                            </button>
                        </form>
                    </div>

                    <div class="contact-info">
                        <h3>{ "Contact Information" }</h3>
                        <div class="info-row">
                            <span class="icon-bubble"><Icon data={IconData::LUCIDE_MAIL} width={"20px"} height={"20px"} /></span>
                            <div>
                                <p class="muted small">{ "Email" }</p>
                                <a href={format!("mailto:{}", CONTACT_INFO.email)}>{ CONTACT_INFO.email }</a>
                            </div>
                        </div>
                        <div class="info-row">
                            <span class="icon-bubble"><Icon data={IconData::LUCIDE_PHONE} width={"20px"} height={"20px"} /></span>
                            <div>
                                <p class="muted small">{ "Phone" }</p>
                                <a href={CONTACT_INFO.phone_href}>{ CONTACT_INFO.phone }</a>
                            </div>
                        </div>
                        <div class="info-row">
                            <span class="icon-bubble"><Icon data={IconData::LUCIDE_MAP_PIN} width={"20px"} height={"20px"} /></span>
                            <div>
                                <p class="muted small">{ "Location" }</p>
                                <p>{ CONTACT_INFO.location }</p>
                            </div>
                        </div>

                        <h4>{ "Connect With Me" }</h4>
                        <div class="social-row">
                            { for SOCIAL_LINKS.iter().map(|link| html! {
                                <a key={link.label} href={link.url} target="_blank" rel="noreferrer"
                                    class="social-bubble" aria-label={link.label}>
                                    <Icon data={social_icon(link.kind)} width={"20px"} height={"20px"} />
                                </a>
                            }) }
                        </div>

                        <div class="availability">
                            <h4>{ "Current Availability" }</h4>
                            <p class="muted">{ CONTACT_INFO.availability }</p>
                            <span class="available"><span class="pulse-dot" />{ "Available for hire" }</span>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    fn filled() -> Rc<ContactState> {
        let state = Rc::new(ContactState::default());
        let state = state.reduce(ContactAction::Edit(Field::Name, "Jane".into()));
        let state = state.reduce(ContactAction::Edit(Field::Email, "jane@x.com".into()));
        state.reduce(ContactAction::Edit(
            Field::Message,
            "Hello, this is long enough".into(),
        ))
    }

    #[wasm_bindgen_test]
    fn test_success_clears_fields_then_unlocks() {
        let state = filled().reduce(ContactAction::Submit);
        assert_eq!(state.flow.phase(), SubmitPhase::Pending);
        assert!(state.outgoing.is_some());

        let state = state.reduce(ContactAction::Delivered(Ok(())));
        assert_eq!(state.flow.phase(), SubmitPhase::Sent);
        assert_eq!(state.form, ContactForm::default());
        assert_eq!(state.outgoing, None);

        let state = state.reduce(ContactAction::SentElapsed);
        assert!(state.flow.can_submit());
    }

    #[wasm_bindgen_test]
    fn test_submit_while_pending_queues_nothing_new() {
        let first = filled().reduce(ContactAction::Submit);
        let queued = first.outgoing.clone();
        assert_eq!(queued.as_ref().map(|o| o.seq), Some(1));

        let second = Rc::clone(&first).reduce(ContactAction::Submit);
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(second.outgoing, queued);
        assert_eq!(second.submissions, 1);
    }

    #[wasm_bindgen_test]
    fn test_invalid_submit_records_errors_without_delivery() {
        let state = Rc::new(ContactState::default()).reduce(ContactAction::Submit);
        assert_eq!(state.flow.phase(), SubmitPhase::Idle);
        assert_eq!(state.outgoing, None);
        assert!(state.flow.errors().get(Field::Name).is_some());
    }

    #[wasm_bindgen_test]
    fn test_resubmitting_same_text_is_a_new_delivery() {
        let state = filled().reduce(ContactAction::Submit);
        let state = state.reduce(ContactAction::Delivered(Err(ContactError::Delivery(
            "HTTP 500".into(),
        ))));
        let state = state.reduce(ContactAction::Submit);
        assert_eq!(state.outgoing.as_ref().map(|o| o.seq), Some(2));
    }

    #[wasm_bindgen_test]
    fn test_failure_keeps_fields() {
        let state = filled().reduce(ContactAction::Submit);
        let state = state.reduce(ContactAction::Delivered(Err(ContactError::Delivery(
            "HTTP 500".into(),
        ))));

        assert_eq!(state.flow.phase(), SubmitPhase::Idle);
        assert_eq!(state.form.name, "Jane");
        assert_eq!(state.form.message, "Hello, this is long enough");
    }
}
