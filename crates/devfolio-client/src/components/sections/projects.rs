use devfolio_core::{NewProject, Project, ProjectCatalog};
use yew::prelude::*;
use yew_icons::{Icon, IconData};

use super::SectionHeading;
use crate::components::{Modal, ProjectUploadForm, Toast, use_toast};
use crate::services::BrowserClock;

fn tech_tags(project: &Project) -> Html {
    html! {
        <div class="tag-row">
            { for project.tech_stack.iter().map(|tech| html! {
                <span key={tech.clone()} class="tag">{ tech.clone() }</span>
            }) }
        </div>
    }
}

fn project_details(project: &Project) -> Html {
    html! {
        <div class="project-details">
            <div class="media">
                <img src={project.image_or_fallback().to_string()} alt={project.name.clone()} />
            </div>
            <p class="muted">{ project.description.clone() }</p>
            { tech_tags(project) }
            <div class="link-row">
                if let Some(url) = &project.github_url {
                    <a href={url.clone()} target="_blank" rel="noopener noreferrer" class="btn-outline">
                        <Icon data={IconData::LUCIDE_GITHUB} width={"16px"} height={"16px"} />
                        <span>{ "View Code" }</span>
                    </a>
                }
                if let Some(url) = &project.demo_url {
                    <a href={url.clone()} target="_blank" rel="noopener noreferrer" class="btn-primary">
                        <Icon data={IconData::LUCIDE_EXTERNAL_LINK} width={"16px"} height={"16px"} />
                        <span>{ "Live Demo" }</span>
                    </a>
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: Project,
    index: usize,
    on_details: Callback<Project>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;
    let on_details = {
        let project = project.clone();
        props.on_details.reform(move |_: MouseEvent| project.clone())
    };

    html! {
        <article class="project-card fade-in" style={format!("animation-delay: {}ms", props.index * 100)}>
            <div class="media">
                <img src={project.image_or_fallback().to_string()} alt={project.name.clone()} />
                if project.featured {
                    <span class="featured-badge">{ "Featured" }</span>
                }
            </div>
            <div class="card-body">
                <h3>{ project.name.clone() }</h3>
                <p class="muted clamp">{ project.description.clone() }</p>
                { tech_tags(project) }
            </div>
            <footer class="card-footer">
                <button class="btn-ghost" onclick={on_details}>
                    <Icon data={IconData::LUCIDE_EYE} width={"16px"} height={"16px"} />
                    { "Details" }
                </button>
                <div class="icon-links">
                    if let Some(url) = &project.github_url {
                        <a href={url.clone()} target="_blank" rel="noopener noreferrer" aria-label="Source code">
                            <Icon data={IconData::LUCIDE_GITHUB} width={"18px"} height={"18px"} />
                        </a>
                    }
                    if let Some(url) = &project.demo_url {
                        <a href={url.clone()} target="_blank" rel="noopener noreferrer" aria-label="Live demo">
                            <Icon data={IconData::LUCIDE_EXTERNAL_LINK} width={"18px"} height={"18px"} />
                        </a>
                    }
                </div>
            </footer>
        </article>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let catalog = use_state(ProjectCatalog::default);
    let active = use_state(|| None::<Project>);
    let details_open = use_state(|| false);
    let upload_open = use_state(|| false);
    let toast = use_toast();

    let on_details = {
        let active = active.clone();
        let details_open = details_open.clone();
        Callback::from(move |project: Project| {
            active.set(Some(project));
            details_open.set(true);
        })
    };

    let on_add = {
        let catalog = catalog.clone();
        let upload_open = upload_open.clone();
        Callback::from(move |project: NewProject| {
            let name = project.name.clone();
            let mut next = (*catalog).clone();
            next.add(project, &BrowserClock);
            catalog.set(next);
            upload_open.set(false);
            if let Some(toast) = toast.as_ref() {
                toast.show(Toast::info("Project added", format!("\"{name}\" is now in the showcase.")));
            }
        })
    };

    let open_upload = {
        let upload_open = upload_open.clone();
        Callback::from(move |_: MouseEvent| upload_open.set(true))
    };

    let title = active.as_ref().map(|p| AttrValue::from(p.name.clone()));

    html! {
        <section id="projects" class="section projects">
            <div class="container">
                <SectionHeading
                    title="Projects"
                    subtitle="A selection of my recent work and personal projects that showcase my skills and experience."
                />
                <div class="section-actions">
                    <button class="btn-outline" onclick={open_upload}>
                        <Icon data={IconData::LUCIDE_PLUS} width={"16px"} height={"16px"} />
                        { "Add Project" }
                    </button>
                </div>

                <div class="project-grid">
                    { for catalog.projects().iter().enumerate().map(|(index, project)| html! {
                        <ProjectCard
                            key={project.id.clone()}
                            project={project.clone()}
                            {index}
                            on_details={on_details.clone()}
                        />
                    }) }
                </div>
            </div>

            <Modal state={details_open} {title} class="modal-wide">
                if let Some(project) = &*active {
                    { project_details(project) }
                }
            </Modal>

            <Modal state={upload_open} title="Add New Project">
                <ProjectUploadForm onsubmit={on_add} />
            </Modal>
        </section>
    }
}
