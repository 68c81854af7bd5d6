use hello_page_view::BaseUrl;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct BackendConfig {
    pub base_url: Option<String>,
}

impl BackendConfig {
    pub fn base_url(&self) -> Option<BaseUrl> { self.base_url.as_deref().and_then(BaseUrl::new) }
}
