use devfolio_core::content::RESUME_PATH;
use yew::prelude::*;
use yew_icons::{Icon, IconData};

use super::SectionHeading;
use crate::components::{Globe, Modal};
use crate::util::open_in_new_tab;

#[function_component(Resume)]
pub fn resume() -> Html {
    let preview_open = use_state(|| false);

    let on_download = Callback::from(|_: MouseEvent| open_in_new_tab(RESUME_PATH));
    let on_preview = {
        let preview_open = preview_open.clone();
        Callback::from(move |_: MouseEvent| preview_open.set(true))
    };

    html! {
        <section id="resume" class="section resume">
            <Globe />
            <div class="container narrow">
                <SectionHeading
                    title="Resume"
                    subtitle="Download my resume to learn more about my education, work experience, and qualifications."
                />

                <div class="resume-card fade-in delay-200">
                    <div class="resume-summary">
                        <span class="icon-bubble">
                            <Icon data={IconData::LUCIDE_FILE_TEXT} width={"28px"} height={"28px"} />
                        </span>
                        <div>
                            <h3>{ "My Professional Resume" }</h3>
                            <p class="muted">{ "Default resume available for download and preview" }</p>
                        </div>
                    </div>
                    <div class="resume-actions">
                        <button class="btn-primary" onclick={on_download}>
                            <Icon data={IconData::LUCIDE_DOWNLOAD} width={"16px"} height={"16px"} />
                            <span>{ "Download" }</span>
                        </button>
                        <button class="btn-outline" onclick={on_preview}>
                            <Icon data={IconData::LUCIDE_EYE} width={"16px"} height={"16px"} />
                            <span>{ "Preview" }</span>
                        </button>
                    </div>
                </div>

                <p class="muted center fade-in delay-300">
                    { "Want to discuss how my experience can benefit your company? " }
                    <a href="#contact" class="link">{ "Contact me" }</a>
                </p>
            </div>

            <Modal state={preview_open} class="modal-document">
                <iframe src={RESUME_PATH} class="resume-frame" title="Resume Preview" />
            </Modal>
        </section>
    }
}
