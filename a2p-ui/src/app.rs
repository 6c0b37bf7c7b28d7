//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::Header;
use crate::pages::{Admin, Contact, Home, Register};
use crate::state::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_global_state(api::build_client());

    // Page load: session check and backend health probe
    state.refresh();

    view! {
        <Router>
            <Header />

            <main>
                <Routes>
                    <Route path="/" view=Home />
                    <Route path="/register" view=Register />
                    <Route path="/contact" view=Contact />
                    <Route path="/admin" view=Admin />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>

            <Footer />
        </Router>
    }
}

/// Footer with the backend status
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<crate::state::GlobalState>().expect("GlobalState not found");

    view! {
        <footer>
            <p>"© A2P Academy"</p>
            {move || match state.backend_online.get() {
                Some(true) => view! { <span class="status online">"Backend online"</span> }.into_view(),
                Some(false) => view! { <span class="status offline">"Backend offline"</span> }.into_view(),
                None => view! {}.into_view(),
            }}
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href="/" class="btn-primary">"Back to Home"</A>
        </div>
    }
}
