use yew::prelude::*;

use crate::config;
use crate::content::{field, section, CONTACT_DETAILS};

/// Contact section. Submission is a plain form POST picked up by the form
/// host; nothing here handles the response.
#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id={section::CONTACT} class="section tinted">
            <div class="container two-columns">
                <div>
                    <h2 class="section-title">{"Let’s build something"}</h2>
                    <p class="muted">
                        {"Tell me a bit about your business and what you need. I’ll reply within 24 hours."}
                    </p>
                    <div class="contact-details muted small">
                        { for CONTACT_DETAILS.iter().map(|detail| html! { <div key={*detail}>{*detail}</div> }) }
                    </div>
                </div>
                <div class="card">
                    <div class="card-content">
                        <form
                            class="contact-form"
                            name={config::CONTACT_FORM_NAME}
                            method="POST"
                            action={config::form_action()}
                            data-netlify="true"
                        >
                            <input type="hidden" name={field::FORM_NAME} value={config::CONTACT_FORM_NAME} />
                            <label>
                                <span class="small">{"Name"}</span>
                                <input name={field::NAME} placeholder="Your name" required={true} />
                            </label>
                            <label>
                                <span class="small">{"Email"}</span>
                                <input type="email" name={field::EMAIL} placeholder="you@example.com" required={true} />
                            </label>
                            <label>
                                <span class="small">{"Project Type"}</span>
                                <input name={field::PROJECT} placeholder="e.g., Barbershop site, Restaurant, Trades" />
                            </label>
                            <label>
                                <span class="small">{"Message"}</span>
                                <textarea
                                    name={field::MESSAGE}
                                    placeholder="What do you need? Goals, timeline, examples…"
                                    rows="5"
                                />
                            </label>
                            <button type="submit" class="button primary full-width">{"Send message"}</button>
                        </form>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .contact-details {
                    margin-top: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .contact-form label {
                    display: flex;
                    flex-direction: column;
                    gap: 0.25rem;
                }

                .contact-form input,
                .contact-form textarea {
                    border: 1px solid #e5e7eb;
                    border-radius: 0.5rem;
                    padding: 0.5rem 0.75rem;
                    font: inherit;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use crate::config::CONTACT_FORM_NAME;
    use crate::content::CONTACT_FORM_FIELDS;

    // The static twin the form host scans at deploy time.
    const INDEX_HTML: &str = include_str!("../../index.html");

    #[test]
    fn static_twin_registers_the_form() {
        assert!(INDEX_HTML.contains(&format!("name=\"{}\"", CONTACT_FORM_NAME)));
        assert!(INDEX_HTML.contains("netlify"));
    }

    #[test]
    fn static_twin_declares_every_posted_field() {
        for name in CONTACT_FORM_FIELDS {
            assert!(
                INDEX_HTML.contains(&format!("name=\"{}\"", name)),
                "index.html is missing field {}",
                name
            );
        }
    }
}
