//! Global Application State
//!
//! Reactive state management using Leptos signals. Only the client, the
//! navigation state and the success toast are global; every page owns its model.

use leptos::*;
use saro::{ClientResult, Navigation, PageId};
use serde_json::Value;
use std::future::Future;
use std::rc::Rc;

use crate::api::{build_client, Client};

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Shared client, built once from the resolved base URL
    pub client: Rc<Client>,
    /// Active page and sidebar visibility
    pub nav: RwSignal<Navigation>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Navigation callback handed to pages through context
pub type Navigate = Callback<PageId>;

/// Provide global state and the navigation callback to the component tree
pub fn provide_global_state() -> GlobalState {
    let state = GlobalState {
        client: Rc::new(build_client()),
        nav: create_rw_signal(Navigation::new()),
        success: create_rw_signal(None),
    };

    let nav = state.nav;
    let navigate: Navigate = Callback::new(move |page: PageId| {
        nav.update(|nav| {
            nav.navigate_to(page);
        });
    });

    provide_context(state.clone());
    provide_context(navigate);
    state
}

impl GlobalState {
    pub fn active(&self) -> PageId {
        self.nav.with(|nav| nav.active())
    }

    pub fn is_configured(&self) -> bool {
        self.client.base().is_configured()
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }
}

/// Run a page's mount-time fetch and apply it, unless the page unmounted first.
pub fn mount_fetch<P, D, Fut>(page: RwSignal<P>, fetch: Fut, apply: fn(&mut P, D))
where
    P: 'static,
    D: 'static,
    Fut: Future<Output = D> + 'static,
{
    spawn_local(async move {
        let data = fetch.await;
        if page.try_update(|p| apply(p, data)).is_none() {
            web_sys::console::debug_1(&"Discarded response for an unmounted page".into());
        }
    });
}

/// Run one page operation: `begin` validates and returns the request body,
/// `send` issues it and `finish` stores the outcome.
pub fn run_request<P, R, Fut>(
    page: RwSignal<P>,
    begin: impl FnOnce(&mut P) -> Option<R>,
    send: impl FnOnce(R) -> Fut + 'static,
    finish: impl FnOnce(&mut P, ClientResult<Value>) + 'static,
) where
    P: 'static,
    R: 'static,
    Fut: Future<Output = ClientResult<Value>> + 'static,
{
    let Some(request) = page.try_update(begin).flatten() else {
        return;
    };
    spawn_local(async move {
        let result = send(request).await;
        page.try_update(|p| finish(p, result));
    });
}

/// Run a multi-request operation on a copy of the page model and store the
/// copy back when it completes.
pub fn run_on_copy<P, F, Fut>(page: RwSignal<P>, op: F)
where
    P: Clone + 'static,
    F: FnOnce(P) -> Fut + 'static,
    Fut: Future<Output = P> + 'static,
{
    let Some(copy) = page.try_get_untracked() else {
        return;
    };
    spawn_local(async move {
        let updated = op(copy).await;
        page.try_set(updated);
    });
}
