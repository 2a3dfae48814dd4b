use yew::prelude::*;

use crate::content::{section, ABOUT_FACTS};

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={section::ABOUT} class="section">
            <div class="container two-columns">
                <div>
                    <h2 class="section-title">{"About me"}</h2>
                    <p class="muted">
                        {"I’m Marvin, a web developer in Hickory, NC. I help small businesses get modern, fast websites that bring real results — more calls, bookings, and sales. I keep things simple: clear process, clean code, and friendly communication."}
                    </p>
                    <div class="button-row">
                        <a class="text-link" href={format!("#{}", section::WORK)}>{"View projects ›"}</a>
                        <a class="text-link" href={format!("#{}", section::CONTACT)}>{"Contact me ›"}</a>
                    </div>
                </div>
                <div class="card">
                    <div class="card-content">
                        <ul class="about-facts">
                            { for ABOUT_FACTS.iter().map(|fact| html! {
                                <li key={fact.label}>
                                    <span class="muted">{format!("{}:", fact.label)}</span>
                                    <br/>
                                    {fact.value}
                                </li>
                            }) }
                        </ul>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .about-facts {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                    font-size: 0.875rem;
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }
                "#}
            </style>
        </section>
    }
}
