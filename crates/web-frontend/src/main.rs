use std::rc::Rc;

use gloo_net::http::Request;
use hello_page_view::{text, BaseUrl, Dispatch, Outcome, ViewState};
use yew::prelude::*;

/// Injected at build time, e.g. `HELLO_PAGE_BACKEND_URL=http://localhost:8000 trunk build`.
const BACKEND_URL: Option<&str> = option_env!(hello_page_base::backend_url_env!());

/// A request the reducer has decided to send.
#[derive(Clone, Debug, PartialEq, Eq)]
struct PendingCall {
    id: u64,

    url: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct PageState {
    view: ViewState,

    pending: Option<PendingCall>,

    calls: u64,
}

enum PageAction {
    Call(Option<BaseUrl>),
    Resolve(Outcome),
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            PageAction::Call(base_url) => match next.view.begin_call(base_url.as_ref()) {
                Dispatch::Request { url } => {
                    next.calls += 1;
                    next.pending = Some(PendingCall { id: next.calls, url });
                }
                Dispatch::MissingConfiguration => {}
                Dispatch::InFlight => return self,
            },
            PageAction::Resolve(outcome) => {
                if !next.view.resolve(outcome) {
                    return self;
                }
                next.pending = None;
            }
        }
        Rc::new(next)
    }
}

async fn call_backend(url: &str) -> Result<String, String> {
    let resp = Request::get(url).send().await.map_err(|err| err.to_string())?;
    let status = resp.status();
    if !resp.ok() {
        return Err(hello_page_view::ReplyError::Status { status }.to_string());
    }
    let body = resp.binary().await.map_err(|err| err.to_string())?;
    hello_page_view::interpret_reply(status, &body).map_err(|err| err.to_string())
}

#[function_component]
fn App() -> Html {
    let base_url = use_memo((), |()| BACKEND_URL.and_then(BaseUrl::new));
    let page = use_reducer(PageState::default);

    {
        // one request per `PendingCall` the reducer hands out
        let dispatcher = page.dispatcher();
        use_effect_with(page.pending.clone(), move |pending| {
            if let Some(PendingCall { url, .. }) = pending.clone() {
                wasm_bindgen_futures::spawn_local(async move {
                    let outcome = Outcome::from(call_backend(&url).await);
                    dispatcher.dispatch(PageAction::Resolve(outcome));
                });
            }
            || ()
        });
    }

    let onclick = {
        let base_url = base_url.clone();
        let dispatcher = page.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(PageAction::Call((*base_url).clone())))
    };

    let view = &page.view;
    html! {
        <div class="page">
            <div class="card">
                <h1>{ format!("{} {}", view.greeting(), text::WAVE) }</h1>
                <p>{ text::DESCRIPTION }</p>

                <div class="actions">
                    <button class="call-button" {onclick} disabled={view.loading()}>
                        { view.button_label() }
                    </button>

                    if let Some(message) = view.api_message().filter(|message| !message.is_empty()) {
                        <div class="notice success">
                            { text::SUCCESS_PREFIX }<strong>{ message.to_string() }</strong>
                        </div>
                    }

                    if let Some(error) = view.error() {
                        <div class="notice error">{ error.to_string() }</div>
                    }

                    if base_url.is_none() {
                        <div class="notice tip">{ text::MISSING_BACKEND_URL_TIP }</div>
                    }
                </div>
            </div>
        </div>
    }
}

fn main() { let _render = yew::Renderer::<App>::new().render(); }
