use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Could not create tokio runtime, error: {source}"))]
    InitializeTokioRuntime { source: std::io::Error },

    #[snafu(display("Error occurs while running lifecycle manager, error: {source}"))]
    LifecycleManager { source: sigfinn::Error },

    #[snafu(display("{source}"))]
    Client { source: hello_page_client::Error },

    #[snafu(display("{source}"))]
    Ui { source: crate::tui::ui::Error },

    #[snafu(display("{source}"))]
    StateStore { source: crate::tui::state_store::Error },
}

impl From<hello_page_client::Error> for Error {
    fn from(source: hello_page_client::Error) -> Self { Self::Client { source } }
}

impl From<crate::tui::ui::Error> for Error {
    fn from(source: crate::tui::ui::Error) -> Self { Self::Ui { source } }
}

impl From<crate::tui::state_store::Error> for Error {
    fn from(source: crate::tui::state_store::Error) -> Self { Self::StateStore { source } }
}
