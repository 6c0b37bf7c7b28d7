//! Global Application State
//!
//! Reactive state management using Leptos signals.

use a2p_academy::api::{ApiClient, SessionUser};
use leptos::*;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Shared backend client
    pub client: ApiClient,
    /// Signed-in user, `None` while signed out or unknown
    pub user: RwSignal<Option<SessionUser>>,
    /// Result of the page-load health probe (`None` until it finishes)
    pub backend_online: RwSignal<Option<bool>>,
}

impl GlobalState {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            user: create_rw_signal(None),
            backend_online: create_rw_signal(None),
        }
    }

    /// Run the page-load checks: session lookup and backend health probe
    pub fn refresh(&self) {
        let client = self.client.clone();
        let user = self.user;
        spawn_local(async move {
            user.set(client.current_user().await);
        });

        let client = self.client.clone();
        let online = self.backend_online;
        spawn_local(async move {
            let up = client.check_backend_status().await;
            if up {
                web_sys::console::log_1(&"✅ Backend connected".into());
            } else {
                web_sys::console::warn_1(&"⚠️ Backend not responding".into());
            }
            online.set(Some(up));
        });
    }
}

/// Create and provide global state
pub fn provide_global_state(client: ApiClient) -> GlobalState {
    let state = GlobalState::new(client);
    provide_context(state.clone());
    state
}
