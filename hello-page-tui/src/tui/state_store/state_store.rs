use futures::{Stream, StreamExt};
use hello_page_client::HelloApi;
use hello_page_view::{BaseUrl, Dispatch, Outcome};
use snafu::OptionExt;
use tokio::sync::mpsc;

use crate::tui::state_store::{error, Action, Error, State};

/// Why [`StateStore::serve`] returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exit {
    /// The user asked to quit.
    Requested,
    /// The shutdown signal fired or every action sender is gone.
    Stopped,
}

#[derive(Debug)]
pub struct StateStore<Api> {
    state_tx: mpsc::UnboundedSender<State>,

    base_url: Option<BaseUrl>,

    api: Api,
}

impl<Api> StateStore<Api>
where
    Api: HelloApi + Clone + Send + Sync + 'static,
{
    pub fn new(base_url: Option<BaseUrl>, api: Api) -> (Self, mpsc::UnboundedReceiver<State>) {
        let (state_tx, state_rx) = mpsc::unbounded_channel();
        (Self { state_tx, base_url, api }, state_rx)
    }

    pub async fn serve<S>(
        self,
        mut action_rx: mpsc::UnboundedReceiver<Action>,
        mut shutdown: S,
    ) -> Result<Exit, Error>
    where
        S: Stream<Item = ()> + Unpin,
    {
        let mut state = State::new(self.base_url.clone());

        // The initial state once
        self.state_tx.send(state.clone()).ok().context(error::StateReceiverClosedSnafu)?;

        // completed calls come back through here
        let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel::<Outcome>();

        let exit = loop {
            tokio::select! {
                action = action_rx.recv() => match action {
                    Some(Action::Shutdown) => break Exit::Requested,
                    Some(Action::CallBackend) => {
                        match state.view_mut().begin_call(self.base_url.as_ref()) {
                            Dispatch::Request { url } => {
                                self.spawn_call(url, outcome_tx.clone());
                            }
                            Dispatch::MissingConfiguration => {
                                tracing::warn!("Backend base URL is not set, skip calling the API");
                            }
                            Dispatch::InFlight => {
                                tracing::debug!("A call is already in flight, ignore it");
                                continue;
                            }
                        }
                    }
                    None => break Exit::Stopped,
                },
                Some(outcome) = outcome_rx.recv() => {
                    if !state.view_mut().resolve(outcome) {
                        continue;
                    }
                },
                // Catch and handle interrupt signal to gracefully shutdown
                Some(()) = shutdown.next() => {
                    break Exit::Stopped;
                }
            }

            self.state_tx.send(state.clone()).ok().context(error::StateReceiverClosedSnafu)?;
        };

        // The UI Manager may already be gone
        let _unused = self.state_tx.send(state);

        Ok(exit)
    }

    fn spawn_call(&self, url: String, outcome_tx: mpsc::UnboundedSender<Outcome>) {
        tracing::info!("Calling backend at {url}");
        let api = self.api.clone();
        drop(tokio::spawn(async move {
            let result = api.hello(&url).await;
            match result {
                Ok(ref message) => tracing::info!("Backend replied: {message}"),
                Err(ref err) => tracing::warn!("Failed to call backend at {url}, error: {err}"),
            }
            let _unused = outcome_tx.send(Outcome::from(result));
        }));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use hello_page_client::HelloApi;
    use hello_page_view::{text, BaseUrl, ReplyError};
    use tokio::sync::{mpsc, Notify};

    use crate::tui::state_store::{Action, Exit, State, StateStore};

    #[derive(Clone)]
    struct FakeApi {
        calls: Arc<AtomicUsize>,

        urls: Arc<std::sync::Mutex<Vec<String>>>,

        reply: Result<String, u16>,

        gate: Option<Arc<Notify>>,
    }

    impl FakeApi {
        fn new(reply: Result<String, u16>) -> Self {
            Self { calls: Arc::default(), urls: Arc::default(), reply, gate: None }
        }

        fn gated(reply: Result<String, u16>, gate: Arc<Notify>) -> Self {
            Self { gate: Some(gate), ..Self::new(reply) }
        }

        fn calls(&self) -> usize { self.calls.load(Ordering::SeqCst) }
    }

    impl HelloApi for FakeApi {
        async fn hello(&self, url: &str) -> hello_page_client::Result<String> {
            let _ = self.calls.fetch_add(1, Ordering::SeqCst);
            self.urls.lock().unwrap().push(url.to_string());
            if let Some(ref gate) = self.gate {
                gate.notified().await;
            }
            self.reply.clone().map_err(|status| ReplyError::Status { status }.into())
        }
    }

    struct Harness {
        action_tx: mpsc::UnboundedSender<Action>,
        state_rx: mpsc::UnboundedReceiver<State>,
        join_handle: tokio::task::JoinHandle<Result<Exit, crate::tui::state_store::Error>>,
    }

    impl Harness {
        fn start(base_url: Option<&str>, api: FakeApi) -> Self {
            let (store, state_rx) = StateStore::new(base_url.and_then(BaseUrl::new), api);
            let (action_tx, action_rx) = mpsc::unbounded_channel();
            let join_handle =
                tokio::spawn(store.serve(action_rx, futures::stream::pending::<()>()));
            Self { action_tx, state_rx, join_handle }
        }

        async fn next_state(&mut self) -> State { self.state_rx.recv().await.unwrap() }

        async fn shutdown(self) -> Exit {
            self.action_tx.send(Action::Shutdown).unwrap();
            self.join_handle.await.unwrap().unwrap()
        }
    }

    #[tokio::test]
    async fn test_missing_base_url_never_calls_backend() {
        let api = FakeApi::new(Ok("hi".to_string()));
        let mut harness = Harness::start(None, api.clone());

        let initial = harness.next_state().await;
        assert!(!initial.is_configured());
        assert!(!initial.view().loading());

        harness.action_tx.send(Action::CallBackend).unwrap();
        let state = harness.next_state().await;
        assert_eq!(state.view().error(), Some(text::MISSING_BACKEND_URL));
        assert!(!state.view().loading());
        assert_eq!(state.view().api_message(), None);

        assert_eq!(harness.shutdown().await, Exit::Requested);
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn test_successful_call() {
        let api = FakeApi::new(Ok("hi".to_string()));
        let mut harness = Harness::start(Some("http://backend.test/"), api.clone());
        let _initial = harness.next_state().await;

        harness.action_tx.send(Action::CallBackend).unwrap();
        let loading = harness.next_state().await;
        assert!(loading.view().loading());
        assert_eq!(loading.view().error(), None);

        let done = harness.next_state().await;
        assert!(!done.view().loading());
        assert_eq!(done.view().api_message(), Some("hi"));
        assert_eq!(done.view().error(), None);

        assert_eq!(harness.shutdown().await, Exit::Requested);
        assert_eq!(api.calls(), 1);
        assert_eq!(*api.urls.lock().unwrap(), vec!["http://backend.test/api/hello".to_string()]);
    }

    #[tokio::test]
    async fn test_failed_call() {
        let api = FakeApi::new(Err(500));
        let mut harness = Harness::start(Some("http://backend.test"), api);
        let _initial = harness.next_state().await;

        harness.action_tx.send(Action::CallBackend).unwrap();
        assert!(harness.next_state().await.view().loading());

        let done = harness.next_state().await;
        assert!(!done.view().loading());
        assert_eq!(done.view().error(), Some("Request failed: 500"));
        assert_eq!(done.view().api_message(), None);

        let _ = harness.shutdown().await;
    }

    #[tokio::test]
    async fn test_call_while_loading_is_ignored() {
        let gate = Arc::new(Notify::new());
        let api = FakeApi::gated(Ok("slow".to_string()), gate.clone());
        let mut harness = Harness::start(Some("http://backend.test"), api.clone());
        let _initial = harness.next_state().await;

        harness.action_tx.send(Action::CallBackend).unwrap();
        assert!(harness.next_state().await.view().loading());

        harness.action_tx.send(Action::CallBackend).unwrap();
        harness.action_tx.send(Action::CallBackend).unwrap();

        // wait for the request task to park on the gate
        while api.calls() == 0 {
            tokio::task::yield_now().await;
        }
        gate.notify_one();

        let done = harness.next_state().await;
        assert!(!done.view().loading());
        assert_eq!(done.view().api_message(), Some("slow"));

        let _ = harness.shutdown().await;
        assert_eq!(api.calls(), 1);
    }

    #[tokio::test]
    async fn test_stops_when_actions_are_gone() {
        let mut harness = Harness::start(None, FakeApi::new(Ok(String::new())));
        let _initial = harness.next_state().await;

        let Harness { action_tx, join_handle, .. } = harness;
        drop(action_tx);
        assert_eq!(join_handle.await.unwrap().unwrap(), Exit::Stopped);
    }
}
