use log::info;
use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::tag::TagPill;
use crate::content::Project;

#[derive(Properties, PartialEq)]
pub struct CaseStudyProps {
    pub project: Option<&'static Project>,
    pub on_close: Callback<()>,
}

/// Detail overlay for the active project. Renders nothing when no project is
/// active.
#[function_component(CaseStudy)]
pub fn case_study(props: &CaseStudyProps) -> Html {
    let Some(project) = props.project else {
        return html! {};
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            info!("Closing case study {}", project.id);
            on_close.emit(());
        })
    };

    html! {
        <div class="case-study-backdrop" onclick={close.clone()}>
            // Clicks inside the panel must not reach the backdrop.
            <div class="case-study-panel" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="case-study-header">
                    <div class="case-study-title">{project.title}</div>
                    <button class="case-study-close" aria-label="Close" onclick={close}>{"×"}</button>
                </div>
                <div class="case-study-body">
                    <img src={project.image} alt={project.title} />
                    <div>
                        <div class="muted">{"Role"}</div>
                        <div class="case-study-role">{project.role}</div>
                        <div class="muted">{"Stack"}</div>
                        <div class="tag-row">
                            { for project.stack.iter().map(|label| html! { <TagPill key={*label} label={*label} /> }) }
                        </div>
                        <div class="muted">{"Outcomes"}</div>
                        <ul class="case-study-outcomes">
                            { for project.outcomes.iter().map(|outcome| html! { <li key={*outcome}>{*outcome}</li> }) }
                        </ul>
                        <a href={project.url} target="_blank" rel="noreferrer" class="case-study-link">
                            {"Visit live site ↗"}
                        </a>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .case-study-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    background: rgba(0, 0, 0, 0.5);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                }

                .case-study-panel {
                    background: #ffffff;
                    border-radius: 1rem;
                    max-width: 48rem;
                    width: 100%;
                    overflow: hidden;
                    animation: case-study-in 0.2s ease-out;
                }

                @keyframes case-study-in {
                    from { opacity: 0; transform: translateY(12px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                .case-study-header {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1rem 1.5rem;
                    border-bottom: 1px solid #e5e7eb;
                }

                .case-study-title {
                    font-weight: 600;
                }

                .case-study-close {
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    cursor: pointer;
                }

                .case-study-body {
                    display: grid;
                    gap: 1.5rem;
                    padding: 1.5rem;
                }

                .case-study-body img {
                    width: 100%;
                    height: 14rem;
                    object-fit: cover;
                    border-radius: 0.75rem;
                }

                .case-study-role {
                    font-weight: 500;
                    margin-bottom: 0.75rem;
                }

                .case-study-outcomes {
                    list-style: disc;
                    margin: 0.25rem 0 0 1.25rem;
                }

                .case-study-link {
                    display: inline-block;
                    margin-top: 1rem;
                    color: #2563eb;
                }

                @media (min-width: 768px) {
                    .case-study-body {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;
    use yew::ServerRenderer;

    async fn render(project: Option<&'static Project>) -> String {
        ServerRenderer::<CaseStudy>::with_props(move || CaseStudyProps {
            project,
            on_close: Callback::from(|_: ()| ()),
        })
        .render()
        .await
    }

    #[tokio::test]
    async fn renders_nothing_without_active_project() {
        let html = render(None).await;
        assert!(!html.contains("case-study-backdrop"));
        assert!(!html.contains("case-study-panel"));
        assert!(!html.contains("<div"));
    }

    #[tokio::test]
    async fn renders_project_details_in_order() {
        let project = PROJECTS.iter().find(|p| p.id == "Restaurant-example").unwrap();
        let html = render(Some(project)).await;

        assert!(html.contains("case-study-backdrop"));
        assert!(html.contains("Restaurant Example — Dining"));
        assert!(html.contains(project.role));
        assert!(html.contains("_blank"));
        assert!(html.contains(project.url));
        for label in project.stack {
            assert!(html.contains(label), "missing stack label {}", label);
        }

        let positions: Vec<usize> = project
            .outcomes
            .iter()
            .map(|outcome| html.find(outcome).expect("outcome rendered"))
            .collect();
        assert_eq!(positions.len(), 3);
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
