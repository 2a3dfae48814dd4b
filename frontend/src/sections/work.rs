use log::info;
use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::case_study::CaseStudy;
use crate::components::project_card::ProjectCard;
use crate::content::{section, Project};
use crate::state::{tag_universe, Filter, WorkState};

#[function_component(Work)]
pub fn work() -> Html {
    let state = use_state(WorkState::default);

    let select_filter = |filter: Filter| {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            info!("Filtering projects by {}", filter.label());
            let mut next = (*state).clone();
            next.set_filter(filter);
            state.set(next);
        })
    };

    let open_detail = {
        let state = state.clone();
        Callback::from(move |project: &'static Project| {
            info!("Opening case study {}", project.id);
            let mut next = (*state).clone();
            next.open_detail(project);
            state.set(next);
        })
    };

    let close_detail = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let mut next = (*state).clone();
            next.close_detail();
            state.set(next);
        })
    };

    let selected = state.filter();
    let projects = state.filtered();

    html! {
        <section id={section::WORK} class="section">
            <div class="container">
                <div class="work-header">
                    <div>
                        <h2 class="section-title">{"Selected Work"}</h2>
                        <p class="muted">{"A few recent builds across local service niches."}</p>
                    </div>
                    <div class="work-filters">
                        { for tag_universe().iter().map(|filter| html! {
                            <button
                                key={filter.label()}
                                class={classes!("button", "small", if *filter == selected { "primary" } else { "outline" })}
                                onclick={select_filter(*filter)}
                            >
                                {filter.label()}
                            </button>
                        }) }
                    </div>
                </div>
                <div class="work-grid">
                    { for projects.into_iter().map(|project| html! {
                        <ProjectCard key={project.id} project={project} on_open={open_detail.clone()} />
                    }) }
                </div>
            </div>
            <CaseStudy project={state.active()} on_close={close_detail} />

            <style>
                {r#"
                .work-header {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: flex-end;
                    justify-content: space-between;
                    gap: 1rem;
                }

                .work-filters {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }

                .work-grid {
                    display: grid;
                    gap: 1.5rem;
                    margin-top: 2rem;
                }

                .project-card {
                    border: 1px solid #e5e7eb;
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                    cursor: pointer;
                    transition: box-shadow 0.2s ease;
                }

                .project-card:hover {
                    box-shadow: 0 10px 24px rgba(0, 0, 0, 0.12);
                }

                .project-card-title {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .project-card-image {
                    aspect-ratio: 16 / 9;
                    overflow: hidden;
                    border-radius: 0.75rem;
                }

                .project-card-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                @media (min-width: 768px) {
                    .work-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (min-width: 1024px) {
                    .work-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn renders_every_project_and_no_overlay_by_default() {
        let html = ServerRenderer::<Work>::new().render().await;

        assert_eq!(html.matches("class=\"project-card\"").count(), PROJECTS.len());
        for project in PROJECTS {
            assert!(html.contains(project.title), "missing card {}", project.id);
        }
        assert!(!html.contains("case-study-backdrop"));
    }

    #[tokio::test]
    async fn renders_one_button_per_filter() {
        let html = ServerRenderer::<Work>::new().render().await;

        for filter in tag_universe() {
            assert!(html.contains(&format!(">{}<", filter.label())), "missing {:?}", filter);
        }
        assert_eq!(html.matches("button small primary").count(), 1);
    }
}
