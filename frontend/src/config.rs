use log::Level;

pub const CONTACT_FORM_NAME: &str = "contact";

#[cfg(debug_assertions)]
pub fn form_action() -> &'static str {
    "http://localhost:8888/"  // netlify dev serves form submissions locally
}

#[cfg(not(debug_assertions))]
pub fn form_action() -> &'static str {
    "/"  // Production: the form host intercepts POSTs to the page path
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
