use devfolio_core::content;
use yew::prelude::*;
use yew_icons::{Icon, IconData};

use crate::components::FloatingElements;
use crate::util::scroll_to_section;

fn go_to(section: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| scroll_to_section(section))
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="home" class="hero">
            <FloatingElements />
            <div class="container hero-content">
                <span class="badge-outline fade-in">{ content::ROLE_BADGE }</span>
                <h1 class="fade-in delay-100">
                    <span>{ "Hello, I'm " }</span>
                    <span class="text-gradient">{ content::OWNER_NAME }</span>
                </h1>
                <p class="hero-tagline fade-in delay-200">{ content::TAGLINE }</p>
                <div class="hero-actions fade-in delay-300">
                    <button class="btn-primary" onclick={go_to("projects")}>{ "View My Work" }</button>
                    <button class="btn-outline" onclick={go_to("contact")}>{ "Contact Me" }</button>
                </div>
            </div>
            <button class="hero-scroll-hint" aria-label="Scroll to about" onclick={go_to("about")}>
                <Icon data={IconData::LUCIDE_ARROW_DOWN} width={"20px"} height={"20px"} />
            </button>
        </section>
    }
}
