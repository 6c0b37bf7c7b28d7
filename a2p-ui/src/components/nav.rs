//! Navigation Component
//!
//! Site header with the scroll shadow, hamburger menu, active-link marking
//! and the user badge.

use a2p_academy::behavior::nav::{current_page, is_active_link, NavMenu};
use a2p_academy::behavior::scroll::{ScrollTracker, RESTING_SHADOW};
use leptos::*;
use leptos_router::*;

use crate::state::GlobalState;

const LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/register", "Register"),
    ("/contact", "Contact"),
    ("/admin", "Admin"),
];

/// Site header; its shadow deepens once the page scrolls past the threshold
#[component]
pub fn Header() -> impl IntoView {
    let tracker = store_value(ScrollTracker::new());
    let shadow = create_rw_signal(RESTING_SHADOW);

    let handle = window_event_listener(ev::scroll, move |_| {
        let y = window().scroll_y().unwrap_or(0.0);
        let mut frame = None;
        tracker.update_value(|t| frame = Some(t.update(y)));
        if let Some(frame) = frame {
            shadow.set(frame.shadow);
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <header style:box-shadow=move || shadow.get()>
            <Nav />
        </header>
    }
}

/// Navigation bar
#[component]
pub fn Nav() -> impl IntoView {
    let menu = create_rw_signal(NavMenu::new());
    let location = use_location();
    let page = move || current_page(&location.pathname.get()).to_string();

    view! {
        <nav>
            <A href="/" class="logo">"A2P Academy"</A>

            <button
                class=move || format!("nav-toggle {}", menu.get().menu_class())
                aria-label="Toggle navigation"
                on:click=move |_| menu.update(|m| {
                    m.toggle();
                })
            >
                {move || {
                    menu.get()
                        .hamburger()
                        .into_iter()
                        .map(|bar| view! {
                            <span style:transform=bar.transform style:opacity=bar.opacity />
                        })
                        .collect_view()
                }}
            </button>

            <ul class=move || menu.get().menu_class()>
                {LINKS
                    .iter()
                    .map(|&(href, label)| view! {
                        <li>
                            <a
                                href=href
                                class=move || if is_active_link(href, &page()) { "active" } else { "" }
                                on:click=move |_| menu.update(|m| m.close())
                            >
                                {label}
                            </a>
                        </li>
                    })
                    .collect_view()}
            </ul>

            <UserBadge />
        </nav>
    }
}

/// Signed-in user with a logout button, or the Google sign-in button
#[component]
fn UserBadge() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let user = state.user;

    move || {
        let client = state.client.clone();
        match user.get() {
            Some(user) => {
                let name = user.display_name().to_string();
                view! {
                    <div class="user-badge">
                        {user.picture.clone().map(|src| view! {
                            <img class="user-avatar" src=src alt=name.clone() />
                        })}
                        <span class="user-name">{name.clone()}</span>
                        <button
                            class="logout-btn"
                            on:click=move |_| {
                                let client = client.clone();
                                spawn_local(async move { client.logout().await });
                            }
                        >
                            "Logout"
                        </button>
                    </div>
                }
                .into_view()
            }
            None => view! {
                <button id="google-login-btn" class="login-btn" on:click=move |_| client.login()>
                    "Sign in with Google"
                </button>
            }
            .into_view(),
        }
    }
}
