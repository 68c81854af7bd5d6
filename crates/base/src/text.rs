//! Texts shown on every rendition of the page.

use crate::backend_url_env;

pub const GREETING: &str = "Hello World";

pub const WAVE: &str = "👋";

pub const DESCRIPTION: &str =
    "This page is live. Click the button to call the backend API and get its own hello.";

pub const CALL_BUTTON: &str = "Call Backend /api/hello";

pub const CALL_BUTTON_LOADING: &str = "Calling API...";

pub const SUCCESS_PREFIX: &str = "Backend says: ";

pub const MISSING_BACKEND_URL: &str =
    concat!("Backend URL is not set. Please provide ", backend_url_env!(), " to call the API.");

pub const MISSING_BACKEND_URL_TIP: &str = concat!(
    "Tip: Set ",
    backend_url_env!(),
    " so the frontend can reach the API. Once set, restart and call again."
);

#[must_use]
pub fn success_panel(message: &str) -> String { format!("{SUCCESS_PREFIX}{message}") }
