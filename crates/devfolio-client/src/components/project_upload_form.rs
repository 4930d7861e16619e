//! Form for appending a project to the catalog.

use devfolio_core::{CatalogError, NewProject, ProjectDraft};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProjectUploadFormProps {
    pub onsubmit: Callback<NewProject>,
}

type Setter = fn(&mut ProjectDraft, String);

fn edit(draft: &UseStateHandle<ProjectDraft>, set: Setter) -> Callback<InputEvent> {
    let draft = draft.clone();
    Callback::from(move |e: InputEvent| {
        let value = e
            .target_dyn_into::<HtmlInputElement>()
            .map(|input| input.value())
            .or_else(|| e.target_dyn_into::<HtmlTextAreaElement>().map(|area| area.value()));
        if let Some(value) = value {
            let mut next = (*draft).clone();
            set(&mut next, value);
            draft.set(next);
        }
    })
}

#[function_component(ProjectUploadForm)]
pub fn project_upload_form(props: &ProjectUploadFormProps) -> Html {
    let draft = use_state(ProjectDraft::default);
    let error = use_state(|| None::<CatalogError>);

    let on_submit = {
        let draft = draft.clone();
        let error = error.clone();
        let onsubmit = props.onsubmit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match draft.to_new_project() {
                Ok(project) => {
                    onsubmit.emit(project);
                    draft.set(ProjectDraft::default());
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
        })
    };

    let on_reset = {
        let draft = draft.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            draft.set(ProjectDraft::default());
            error.set(None);
        })
    };

    let on_featured = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*draft).clone();
                next.featured = input.checked();
                draft.set(next);
            }
        })
    };

    html! {
        <form class="upload-form" onsubmit={on_submit}>
            <label for="project-name">{ "Project Name*" }</label>
            <input id="project-name" required={true} placeholder="My Awesome Project"
                value={draft.name.clone()} oninput={edit(&draft, |d, v| d.name = v)} />

            <label for="project-description">{ "Description*" }</label>
            <textarea id="project-description" required={true}
                placeholder="Briefly describe your project and its key features..."
                value={draft.description.clone()} oninput={edit(&draft, |d, v| d.description = v)} />

            <label for="project-image">{ "Image URL" }</label>
            <input id="project-image" placeholder="https://example.com/image.jpg"
                value={draft.image_url.clone()} oninput={edit(&draft, |d, v| d.image_url = v)} />
            <p class="hint">{ "Leave blank to use a default image. For best results, use a 16:9 aspect ratio." }</p>

            <label for="project-stack">{ "Technologies Used*" }</label>
            <input id="project-stack" required={true} placeholder="React, Node.js, MongoDB (comma-separated)"
                value={draft.tech_stack.clone()} oninput={edit(&draft, |d, v| d.tech_stack = v)} />

            <div class="form-row">
                <div>
                    <label for="project-github">{ "GitHub URL" }</label>
                    <input id="project-github" placeholder="https://github.com/username/repo"
                        value={draft.github_url.clone()} oninput={edit(&draft, |d, v| d.github_url = v)} />
                </div>
                <div>
                    <label for="project-demo">{ "Live Demo URL" }</label>
                    <input id="project-demo" placeholder="https://myproject.com"
                        value={draft.demo_url.clone()} oninput={edit(&draft, |d, v| d.demo_url = v)} />
                </div>
            </div>

            <label class="checkbox">
                <input type="checkbox" checked={draft.featured} onchange={on_featured} />
                { "Mark as featured project" }
            </label>

            if let Some(e) = *error {
                <p class="field-error">{ e.to_string() }</p>
            }

            <div class="form-actions">
                <button type="button" class="btn-outline" onclick={on_reset}>{ "Reset" }</button>
                <button type="submit" class="btn-primary">{ "Add Project" }</button>
            </div>
        </form>
    }
}
