use std::future::Future;

use snafu::ResultExt;

use crate::{error, error::Result};

/// The single backend call the page can make.
pub trait HelloApi {
    /// Issues `GET url` and returns the text for the success panel.
    fn hello(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

#[derive(Clone, Debug)]
pub struct Client {
    client: reqwest::Client,
}

impl Client {
    /// # Errors
    ///
    /// Fails when the TLS backend cannot be initialized.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(hello_page_base::user_agent())
            .build()
            .context(error::BuildClientSnafu)?;
        Ok(Self { client })
    }
}

impl HelloApi for Client {
    async fn hello(&self, url: &str) -> Result<String> {
        tracing::debug!("Sending request to {url}");
        let resp = self.client.get(url).send().await.context(error::SendRequestSnafu)?;
        let status = resp.status();
        tracing::debug!("Response code: {status}");
        if !status.is_success() {
            return Err(hello_page_view::ReplyError::Status { status: status.as_u16() }.into());
        }

        let body = resp.bytes().await.context(error::ReadBodySnafu)?;
        hello_page_view::interpret_reply(status.as_u16(), &body).map_err(error::Error::from)
    }
}
