pub mod state_store;
pub mod ui;

use std::{future::Future, pin::Pin};

use futures::FutureExt;
use hello_page_client::{Client, HelloApi};
use hello_page_view::BaseUrl;
use sigfinn::{ExitStatus, LifecycleManager, Shutdown};
use snafu::ResultExt;
use tokio::sync::mpsc;

use self::{
    state_store::{Action, Exit, State, StateStore},
    ui::UiManager,
};
use crate::{error, Error};

pub async fn run(base_url: Option<BaseUrl>) -> Result<(), Error> {
    let client = Client::new()?;
    let (ui_manager, action_rx) = UiManager::new();
    let (state_store, state_rx) = StateStore::new(base_url, client);

    let lifecycle_manager = LifecycleManager::<Error>::new();
    let handle = lifecycle_manager.handle();
    let _handle = lifecycle_manager
        .spawn("UI Manager", create_ui_manager_future(ui_manager, state_rx))
        .spawn("State Store", create_state_store_future(state_store, action_rx, handle));

    if let Err(err) = lifecycle_manager.serve().await.context(error::LifecycleManagerSnafu)? {
        tracing::error!("{err}");
        Err(err)
    } else {
        Ok(())
    }
}

fn create_ui_manager_future(
    ui_manager: UiManager,
    state_rx: mpsc::UnboundedReceiver<State>,
) -> impl FnOnce(Shutdown) -> Pin<Box<dyn Future<Output = ExitStatus<Error>> + Send>> {
    move |shutdown_signal| {
        async move {
            let result = ui_manager.serve(state_rx, shutdown_signal.into_stream()).await;
            match result {
                Ok(()) => {
                    tracing::info!("Stopped UI Manager gracefully");
                    ExitStatus::Success
                }
                Err(err) => ExitStatus::Error(Error::from(err)),
            }
        }
        .boxed()
    }
}

fn create_state_store_future<Api>(
    state_store: StateStore<Api>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    handle: sigfinn::Handle<Error>,
) -> impl FnOnce(Shutdown) -> Pin<Box<dyn Future<Output = ExitStatus<Error>> + Send>>
where
    Api: HelloApi + Clone + Send + Sync + 'static,
{
    move |shutdown_signal| {
        async move {
            let result = state_store.serve(action_rx, shutdown_signal.into_stream()).await;
            match result {
                Ok(exit) => {
                    if exit == Exit::Requested {
                        // the user asked to quit, bring the UI Manager down as well
                        handle.shutdown();
                    }
                    tracing::info!("Stopped State Store gracefully");
                    ExitStatus::Success
                }
                Err(err) => ExitStatus::Error(Error::from(err)),
            }
        }
        .boxed()
    }
}
