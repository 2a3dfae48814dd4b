use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::tag::TagPill;
use crate::content::Project;

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: &'static Project,
    pub on_open: Callback<&'static Project>,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;

    let open = {
        let on_open = props.on_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_open.emit(project);
        })
    };

    html! {
        <article class="project-card" onclick={open}>
            <header>
                <h3 class="project-card-title">
                    {project.title}
                    <span class="external-icon">{"↗"}</span>
                </h3>
                <p class="muted">{project.blurb}</p>
            </header>
            <div class="project-card-image">
                <img src={project.image} alt={project.title} loading="lazy" />
            </div>
            <div class="tag-row">
                { for project.tags.iter().map(|tag| html! { <TagPill key={*tag} label={*tag} /> }) }
            </div>
        </article>
    }
}
