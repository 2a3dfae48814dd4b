use yew::prelude::*;
use log::info;

mod config;
mod content;
mod scroll;
mod state;
mod components {
    pub mod case_study;
    pub mod nav;
    pub mod project_card;
    pub mod tag;
}
mod sections {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod process;
    pub mod testimonials;
    pub mod work;
}
mod pages {
    pub mod portfolio;
}

use pages::portfolio::Portfolio;

#[function_component]
fn App() -> Html {
    html! {
        <Portfolio />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
