//! Hero Parallax Cards
//!
//! Image cards that tilt with the mouse position across the viewport.

use a2p_academy::behavior::parallax::{card_transform, NEUTRAL_TRANSFORM};
use leptos::*;

#[derive(Clone, Copy)]
pub struct HeroCard {
    pub icon: &'static str,
    pub title: &'static str,
}

#[component]
pub fn ParallaxCards(cards: &'static [HeroCard]) -> impl IntoView {
    let transform = create_rw_signal(NEUTRAL_TRANSFORM.to_string());

    let handle = window_event_listener(ev::mousemove, move |ev| {
        let window = window();
        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        transform.set(card_transform(
            ev.client_x() as f64,
            ev.client_y() as f64,
            width,
            height,
        ));
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="hero-cards">
            {cards
                .iter()
                .map(|card| view! {
                    <div class="image-card" style:transform=move || transform.get()>
                        <span class="image-card-icon">{card.icon}</span>
                        <span class="image-card-title">{card.title}</span>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
