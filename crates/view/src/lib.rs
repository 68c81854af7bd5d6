mod base_url;
mod reply;
mod state;

pub use hello_page_base::text;

pub use self::{
    base_url::BaseUrl,
    reply::{interpret_reply, ReplyError},
    state::{Dispatch, Outcome, Phase, ViewState},
};

/// Path appended to the base URL for the single backend call.
pub const HELLO_API_PATH: &str = "/api/hello";
