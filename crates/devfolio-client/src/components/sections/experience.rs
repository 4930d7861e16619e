use devfolio_core::content::EXPERIENCE;
use yew::prelude::*;
use yew_icons::{Icon, IconData};

use super::SectionHeading;

#[function_component(Experience)]
pub fn experience() -> Html {
    let job = &EXPERIENCE;

    html! {
        <section id="experience" class="section experience">
            <div class="container narrow">
                <SectionHeading
                    title="Professional Experience"
                    subtitle="My most recent professional role and key accomplishments."
                />

                <article class="experience-card fade-in">
                    <header class="experience-head">
                        <h3>{ job.role }</h3>
                        <span class="experience-duration">
                            <Icon data={IconData::LUCIDE_CALENDAR} width={"16px"} height={"16px"} />
                            { job.duration }
                        </span>
                    </header>

                    <div class="experience-company">
                        <Icon data={IconData::LUCIDE_BRIEFCASE} width={"18px"} height={"18px"} />
                        <span>{ job.company }</span>
                    </div>

                    <p class="experience-description">{ job.description }</p>

                    <h4>{ "Key Achievements" }</h4>
                    <ul class="achievement-grid">
                        { for job.achievements.iter().map(|a| html! {
                            <li key={*a}><span class="tick">{ "✓" }</span><span>{ *a }</span></li>
                        }) }
                    </ul>

                    <a href={job.link} target="_blank" rel="noopener noreferrer" class="btn-primary">
                        <Icon data={IconData::LUCIDE_EXTERNAL_LINK} width={"16px"} height={"16px"} />
                        <span>{ "Contribution Link" }</span>
                    </a>
                </article>
            </div>
        </section>
    }
}
