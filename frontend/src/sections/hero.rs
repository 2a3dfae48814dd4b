use yew::prelude::*;

use crate::components::tag::TagPill;
use crate::content::{section, HERO_HIGHLIGHTS, HERO_IMAGE, HERO_TAGS};
use crate::scroll::scroll_callback;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id={section::HOME} class="hero">
            <div class="container two-columns">
                <div>
                    <h1 class="hero-title">
                        {"Professional, modern websites for local businesses"}
                    </h1>
                    <p class="muted">
                        {"Built to attract customers with clean design, strong SEO, and easy management."}
                    </p>
                    <div class="button-row">
                        <button class="button primary" onclick={scroll_callback(section::WORK)}>
                            {"See my work ›"}
                        </button>
                        <button class="button outline" onclick={scroll_callback(section::CONTACT)}>
                            {"Get a quote"}
                        </button>
                    </div>
                    <div class="hero-highlights muted">
                        { for HERO_HIGHLIGHTS.iter().map(|highlight| html! {
                            <div key={*highlight}>{"✓ "}{*highlight}</div>
                        }) }
                    </div>
                </div>
                <div class="card">
                    <img class="hero-image" src={HERO_IMAGE} alt="Portfolio preview" />
                    <div class="card-content">
                        <div class="muted small">{"Recent project"}</div>
                        <div class="strong">{"Booking experience redesign boosted conversions"}</div>
                        <div class="tag-row">
                            { for HERO_TAGS.iter().map(|tag| html! { <TagPill key={*tag} label={*tag} /> }) }
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    padding-top: 7rem;
                }

                .hero-title {
                    font-size: 2.25rem;
                    font-weight: 700;
                    letter-spacing: -0.02em;
                    animation: hero-rise 0.4s ease-out;
                }

                @keyframes hero-rise {
                    from { opacity: 0; transform: translateY(10px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                .hero-highlights {
                    margin-top: 1.5rem;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                    font-size: 0.875rem;
                }

                .hero-image {
                    width: 100%;
                    height: 16rem;
                    object-fit: cover;
                }

                @media (min-width: 768px) {
                    .hero {
                        padding-top: 9rem;
                    }

                    .hero-title {
                        font-size: 3rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
