use yew::prelude::*;

use crate::content::{section, PROCESS_STEPS};

#[function_component(Process)]
pub fn process() -> Html {
    html! {
        <section id={section::PROCESS} class="section tinted">
            <div class="container">
                <h2 class="section-title">{"Process"}</h2>
                <p class="muted">{"Simple, collaborative, and transparent from day one."}</p>
                <div class="process-grid">
                    { for PROCESS_STEPS.iter().enumerate().map(|(idx, step)| html! {
                        <div key={step.title} class="card">
                            <div class="card-content">
                                <h3 class="process-step-title">
                                    <span class="process-step-number">{idx + 1}</span>
                                    {step.title}
                                </h3>
                                <p class="muted small">{step.text}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .process-grid {
                    display: grid;
                    gap: 1rem;
                    margin-top: 2rem;
                }

                .process-step-title {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .process-step-number {
                    font-size: 1.25rem;
                    font-weight: 700;
                }

                @media (min-width: 768px) {
                    .process-grid {
                        grid-template-columns: repeat(4, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}
