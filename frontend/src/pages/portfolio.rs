use yew::prelude::*;

use crate::components::nav::Navbar;
use crate::content::section;
use crate::sections::{
    about::About, contact::Contact, footer::Footer, hero::Hero, process::Process,
    testimonials::Testimonials, work::Work,
};

/// Section anchors in the order the page renders them.
pub const SECTION_IDS: &[&str] = &[
    section::HOME,
    section::WORK,
    section::PROCESS,
    section::TESTIMONIALS,
    section::ABOUT,
    section::CONTACT,
];

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    html! {
        <div class="portfolio-page">
            <Navbar />
            <main>
                <Hero />
                <Work />
                <Process />
                <Testimonials />
                <About />
                <Contact />
            </main>
            <Footer />

            <style>
                {r#"
                .portfolio-page {
                    min-height: 100vh;
                    background: #ffffff;
                    color: #111827;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }

                .container {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }

                .two-columns {
                    display: grid;
                    gap: 2.5rem;
                    align-items: center;
                }

                .section {
                    padding: 5rem 0;
                }

                .section.tinted {
                    background: rgba(243, 244, 246, 0.5);
                }

                .section-title {
                    font-size: 1.875rem;
                    font-weight: 700;
                    letter-spacing: -0.02em;
                    margin-bottom: 0.5rem;
                }

                .muted {
                    color: #6b7280;
                }

                .small {
                    font-size: 0.875rem;
                }

                .strong {
                    font-weight: 600;
                }

                .card {
                    border: 1px solid #e5e7eb;
                    border-radius: 0.75rem;
                    overflow: hidden;
                    background: #ffffff;
                }

                .card-content {
                    padding: 1.5rem;
                }

                .button-row {
                    margin-top: 1.5rem;
                    display: flex;
                    gap: 0.75rem;
                }

                .button {
                    border-radius: 0.5rem;
                    padding: 0.5rem 1rem;
                    font: inherit;
                    cursor: pointer;
                    border: 1px solid #111827;
                }

                .button.small {
                    padding: 0.25rem 0.75rem;
                    font-size: 0.875rem;
                }

                .button.primary {
                    background: #111827;
                    color: #ffffff;
                }

                .button.outline {
                    background: transparent;
                    color: #111827;
                }

                .button.ghost {
                    background: transparent;
                    border-color: transparent;
                    font-size: 1.25rem;
                }

                .button.full-width {
                    width: 100%;
                }

                .text-link {
                    color: #2563eb;
                    text-decoration: none;
                }

                .tag-row {
                    margin-top: 0.75rem;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }

                .tag-pill {
                    display: inline-flex;
                    align-items: center;
                    border: 1px solid #e5e7eb;
                    border-radius: 9999px;
                    padding: 0.125rem 0.5rem;
                    font-size: 0.75rem;
                    color: #6b7280;
                }

                @media (min-width: 768px) {
                    .two-columns {
                        grid-template-columns: 1fr 1fr;
                    }

                    .section {
                        padding: 6rem 0;
                    }

                    .section-title {
                        font-size: 2.25rem;
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
    use crate::content::{CONTACT_LINK, NAV};

    #[test]
    fn every_nav_link_points_at_a_rendered_section() {
        for link in NAV {
            assert!(SECTION_IDS.contains(&link.id), "no section #{}", link.id);
        }
        assert!(SECTION_IDS.contains(&CONTACT_LINK.id));
    }

    #[test]
    fn section_ids_are_unique() {
        for (i, id) in SECTION_IDS.iter().enumerate() {
            assert!(!SECTION_IDS[i + 1..].contains(id), "#{} used twice", id);
        }
    }

    #[test]
    fn nav_follows_page_order() {
        let positions: Vec<usize> = NAV
            .iter()
            .map(|link| SECTION_IDS.iter().position(|id| *id == link.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
