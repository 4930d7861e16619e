//! Page sections, in navigation order.

mod about;
mod contact;
mod experience;
mod hero;
mod projects;
mod resume;
mod skills;

pub use about::About;
pub use contact::Contact;
pub use experience::Experience;
pub use hero::Hero;
pub use projects::Projects;
pub use resume::Resume;
pub use skills::Skills;

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
}

/// Centered gradient title with a muted subtitle.
#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="section-heading">
            <h2 class="text-gradient fade-in">{ props.title.clone() }</h2>
            <p class="muted fade-in delay-100">{ props.subtitle.clone() }</p>
        </div>
    }
}
