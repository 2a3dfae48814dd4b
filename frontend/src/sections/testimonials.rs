use yew::prelude::*;

use crate::content::{section, TESTIMONIALS};

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section id={section::TESTIMONIALS} class="section">
            <div class="container">
                <h2 class="section-title">{"Nice words"}</h2>
                <p class="muted">{"A few notes from clients."}</p>
                <div class="testimonial-grid">
                    { for TESTIMONIALS.iter().map(|t| html! {
                        <div key={t.name} class="card">
                            <div class="card-content">
                                <p class="testimonial-quote">{format!("“{}”", t.quote)}</p>
                                <div class="muted small">{format!("{} — {}", t.name, t.role)}</div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .testimonial-grid {
                    display: grid;
                    gap: 1.5rem;
                    margin-top: 2rem;
                }

                .testimonial-quote {
                    font-size: 1.125rem;
                    line-height: 1.7;
                    margin-bottom: 1rem;
                }

                @media (min-width: 768px) {
                    .testimonial-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
