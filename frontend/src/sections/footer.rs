use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::content::{BRAND, FOOTER_LINKS};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container site-footer-content">
                <div class="muted small">
                    {format!("© {} {}. All rights reserved.", year, BRAND)}
                </div>
                <div class="site-footer-links small">
                    { for FOOTER_LINKS.iter().map(|link| {
                        if link.external {
                            html! {
                                <a key={link.label} href={link.href} target="_blank" rel="noopener noreferrer">
                                    {link.label}
                                </a>
                            }
                        } else {
                            html! { <a key={link.label} href={link.href}>{link.label}</a> }
                        }
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    padding: 2.5rem 0;
                    border-top: 1px solid #e5e7eb;
                }

                .site-footer-content {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }

                .site-footer-links {
                    display: flex;
                    gap: 1rem;
                }

                .site-footer-links a:hover {
                    opacity: 0.8;
                }

                @media (min-width: 768px) {
                    .site-footer-content {
                        flex-direction: row;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
