use devfolio_core::content::{self, ABOUT_HIGHLIGHTS, ABOUT_PARAGRAPHS, INTERESTS};
use yew::prelude::*;
use yew_icons::{Icon, IconData};

use super::SectionHeading;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="section about">
            <div class="container">
                <SectionHeading
                    title="About Me"
                    subtitle="Get to know more about my journey, passion for coding, and what drives me as a software engineer."
                />

                <div class="about-grid">
                    <div class="about-portrait">
                        <img src={content::PROFILE_IMAGE} alt="profile" />
                        <span class="portrait-star"><Icon data={IconData::LUCIDE_STAR} width={"20px"} height={"20px"} /></span>
                        <span class="portrait-heart"><Icon data={IconData::LUCIDE_HEART} width={"16px"} height={"16px"} /></span>
                    </div>

                    <div class="about-text">
                        <h3>{ "Hi, I'm " }<span class="text-gradient">{ content::OWNER_NAME }</span></h3>
                        { for ABOUT_PARAGRAPHS.iter().map(|p| html! { <p class="muted">{ *p }</p> }) }
                        <ul class="highlights">
                            { for ABOUT_HIGHLIGHTS.iter().map(|point| html! {
                                <li key={*point}>
                                    <Icon data={IconData::LUCIDE_CHECK} width={"18px"} height={"18px"} />
                                    <span class="muted">{ *point }</span>
                                </li>
                            }) }
                        </ul>
                        <a href="#contact" class="btn-primary">{ "Let's Connect" }</a>
                    </div>
                </div>

                <div class="interest-grid">
                    { for INTERESTS.iter().enumerate().map(|(i, card)| html! {
                        <div key={card.title} class={classes!("card", "fade-in", format!("delay-{}", i * 100))}>
                            <h4>{ card.title }</h4>
                            <p class="muted">{ card.body }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
