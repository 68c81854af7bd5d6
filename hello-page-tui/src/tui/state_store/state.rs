use hello_page_view::{BaseUrl, ViewState};

/// State holds the state of the application
#[derive(Debug, Clone, Default)]
pub struct State {
    view: ViewState,

    base_url: Option<BaseUrl>,
}

impl State {
    pub fn new(base_url: Option<BaseUrl>) -> Self { Self { view: ViewState::default(), base_url } }

    pub const fn view(&self) -> &ViewState { &self.view }

    pub fn view_mut(&mut self) -> &mut ViewState { &mut self.view }

    pub const fn base_url(&self) -> Option<&BaseUrl> { self.base_url.as_ref() }

    pub const fn is_configured(&self) -> bool { self.base_url.is_some() }
}
