use crate::{text, BaseUrl};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
}

/// What the caller must do after [`ViewState::begin_call`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// Issue `GET url`, then feed the result back through [`ViewState::resolve`].
    Request { url: String },
    /// No base URL is configured, the error is already set.
    MissingConfiguration,
    /// A call is already in flight.
    InFlight,
}

/// Result of one backend call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Message(String),
    Failure(String),
}

impl<E> From<Result<String, E>> for Outcome
where
    E: std::fmt::Display,
{
    fn from(result: Result<String, E>) -> Self {
        match result {
            Ok(message) => Self::Message(message),
            Err(err) => Self::Failure(err.to_string()),
        }
    }
}

/// ViewState holds everything the page displays
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    greeting: String,

    api_message: Option<String>,

    phase: Phase,

    error: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self { Self::new(text::GREETING) }
}

impl ViewState {
    pub fn new<S: Into<String>>(greeting: S) -> Self {
        Self { greeting: greeting.into(), api_message: None, phase: Phase::Idle, error: None }
    }

    #[must_use]
    pub fn greeting(&self) -> &str { &self.greeting }

    #[must_use]
    pub fn api_message(&self) -> Option<&str> { self.api_message.as_deref() }

    #[must_use]
    pub fn error(&self) -> Option<&str> { self.error.as_deref() }

    #[must_use]
    pub const fn phase(&self) -> Phase { self.phase }

    #[must_use]
    pub fn loading(&self) -> bool { self.phase == Phase::Loading }

    /// Label of the call button for the current phase.
    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.loading() {
            text::CALL_BUTTON_LOADING
        } else {
            text::CALL_BUTTON
        }
    }

    /// Idle -> Loading, unless the base URL is missing or a call is in flight.
    pub fn begin_call(&mut self, base_url: Option<&BaseUrl>) -> Dispatch {
        let Some(base_url) = base_url else {
            self.error = Some(text::MISSING_BACKEND_URL.to_string());
            return Dispatch::MissingConfiguration;
        };

        if self.loading() {
            return Dispatch::InFlight;
        }

        self.phase = Phase::Loading;
        self.error = None;
        Dispatch::Request { url: base_url.hello_endpoint() }
    }

    /// Loading -> Idle. Returns `false` and leaves the state untouched when no call is in flight.
    pub fn resolve(&mut self, outcome: Outcome) -> bool {
        if !self.loading() {
            return false;
        }

        match outcome {
            Outcome::Message(message) => self.api_message = Some(message),
            Outcome::Failure(error) => self.error = Some(error),
        }
        self.phase = Phase::Idle;
        true
    }
}
