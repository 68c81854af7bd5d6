use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Could not build HTTP client, error: {source}"))]
    BuildClient { source: reqwest::Error },

    #[snafu(display("{source}"))]
    SendRequest { source: reqwest::Error },

    #[snafu(display("Could not read response body, error: {source}"))]
    ReadBody { source: reqwest::Error },

    #[snafu(display("{source}"))]
    Reply { source: hello_page_view::ReplyError },
}

impl From<hello_page_view::ReplyError> for Error {
    fn from(source: hello_page_view::ReplyError) -> Self { Self::Reply { source } }
}
