use devfolio_core::content::{OTHER_TOOLS, SkillFilter, filter_skills};
use yew::prelude::*;

use super::SectionHeading;
use crate::components::ParticleNetwork;
use crate::hooks::use_reveal_on_scroll;

#[function_component(Skills)]
pub fn skills() -> Html {
    let section_ref = use_node_ref();
    let revealed = use_reveal_on_scroll(section_ref.clone());
    let filter = use_state(SkillFilter::default);

    let buttons = SkillFilter::options().map(|option| {
        let onclick = {
            let filter = filter.clone();
            Callback::from(move |_: MouseEvent| filter.set(option))
        };
        html! {
            <button
                key={option.to_string()}
                class={classes!("filter-pill", (*filter == option).then_some("active"))}
                {onclick}
            >
                { option.to_string() }
            </button>
        }
    });

    let cards = filter_skills(*filter).into_iter().enumerate().map(|(i, skill)| {
        html! {
            <div
                key={skill.name}
                class={classes!("skill-card", revealed.then_some("fade-in"))}
                style={format!("animation-delay: {}ms", i * 100 + 300)}
            >
                <div class="skill-head">
                    <span class="skill-icon">{ skill.icon }</span>
                    <h4>{ skill.name }</h4>
                    <span class="skill-level">{ format!("{}%", skill.level) }</span>
                </div>
                <div class="progress" role="progressbar" aria-valuenow={skill.level.to_string()}>
                    <div class="progress-fill" style={format!("width: {}%", skill.level)} />
                </div>
            </div>
        }
    });

    html! {
        <section id="skills" ref={section_ref} class="section skills">
            <ParticleNetwork />
            <div class="container">
                <SectionHeading
                    title="Skills & Tech Stack"
                    subtitle="A comprehensive overview of my technical skills, programming languages, and tools I've mastered throughout my career."
                />
                <div class="filter-row">{ for buttons }</div>
                <div class="skill-grid">{ for cards }</div>

                <div class="other-tools">
                    <h3>{ "Other Tools & Technologies" }</h3>
                    <div class="tool-row">
                        { for OTHER_TOOLS.iter().map(|tool| html! { <span key={*tool} class="tool-pill">{ *tool }</span> }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
