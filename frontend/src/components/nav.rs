use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content::{NavLink, BRAND, CONTACT_LINK, NAV};
use crate::scroll::{scroll_callback, scroll_to};
use crate::state::MenuState;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu = use_state(MenuState::default);

    let open_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut next = *menu;
            next.open();
            menu.set(next);
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set(MenuState::Closed);
        })
    };

    // Mobile entries close the menu before scrolling.
    let activate = |link: &'static NavLink| {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut next = *menu;
            let target = next.activate(link);
            menu.set(next);
            scroll_to(target);
        })
    };

    html! {
        <div class="site-nav">
            <div class="site-nav-content">
                <div class="site-nav-brand">{BRAND}</div>
                <div class="site-nav-links">
                    { for NAV.iter().map(|link| html! {
                        <button key={link.id} class="site-nav-link" onclick={scroll_callback(link.id)}>
                            {link.label}
                        </button>
                    }) }
                </div>
                <div class="site-nav-cta">
                    <button class="button primary" onclick={scroll_callback(CONTACT_LINK.id)}>
                        {"Let’s talk →"}
                    </button>
                </div>
                <button class="burger-menu" aria-label="Menu" onclick={open_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            {
                if menu.is_open() {
                    html! {
                        <div class="mobile-menu">
                            { for NAV.iter().map(|link| html! {
                                <button key={link.id} class="mobile-menu-link" onclick={activate(link)}>
                                    {link.label}
                                </button>
                            }) }
                            <button class="mobile-menu-link" onclick={activate(&CONTACT_LINK)}>
                                {CONTACT_LINK.label}
                            </button>
                            <div class="mobile-menu-footer">
                                <button class="button ghost" aria-label="Close menu" onclick={close_menu}>
                                    {"×"}
                                </button>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .site-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 40;
                    background: rgba(255, 255, 255, 0.7);
                    backdrop-filter: blur(8px);
                    border-bottom: 1px solid #e5e7eb;
                }

                .site-nav-content {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0.75rem 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .site-nav-brand {
                    font-weight: 600;
                    letter-spacing: -0.01em;
                }

                .site-nav-links {
                    display: none;
                    gap: 1.5rem;
                    font-size: 0.875rem;
                }

                .site-nav-link,
                .mobile-menu-link {
                    background: none;
                    border: none;
                    cursor: pointer;
                    font: inherit;
                }

                .site-nav-link:hover {
                    opacity: 0.7;
                }

                .site-nav-cta {
                    display: none;
                }

                .burger-menu {
                    display: flex;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }

                .burger-menu span {
                    display: block;
                    width: 22px;
                    height: 2px;
                    background: currentColor;
                }

                .mobile-menu {
                    border-top: 1px solid #e5e7eb;
                    background: #ffffff;
                }

                .mobile-menu-link {
                    display: block;
                    width: 100%;
                    text-align: left;
                    padding: 0.75rem 1rem;
                }

                .mobile-menu-link:hover {
                    background: #f3f4f6;
                }

                .mobile-menu-footer {
                    display: flex;
                    justify-content: flex-end;
                    padding: 0.5rem 1rem;
                }

                @media (min-width: 768px) {
                    .site-nav-links {
                        display: flex;
                    }

                    .site-nav-cta {
                        display: block;
                    }

                    .burger-menu,
                    .mobile-menu {
                        display: none;
                    }
                }
                "#}
            </style>
        </div>
    }
}
