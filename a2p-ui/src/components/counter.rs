//! Stat Counter
//!
//! Counts up to the stat's number once it scrolls into view.

use a2p_academy::behavior::counter::{CounterAnimation, FRAME_MS};
use gloo_timers::future::TimeoutFuture;
use leptos::*;
use web_sys::Element;

use crate::dom::observe_visible;

#[component]
pub fn StatCounter(
    /// Final display text, e.g. "500+"
    #[prop(into)]
    value: String,
    #[prop(into)]
    label: String,
) -> impl IntoView {
    let text = create_rw_signal(value.clone());
    let node_ref = create_node_ref::<html::Div>();

    node_ref.on_load(move |el| {
        let target: Element = (*el).clone().into();
        request_animation_frame(move || {
            observe_visible(&[target], None, true, move |_| {
                if let Some(animation) = CounterAnimation::from_text(&value) {
                    spawn_local(run_counter(animation, text));
                }
            });
        });
    });

    view! {
        <div class="stat-card">
            <div class="stat-number" node_ref=node_ref>{move || text.get()}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}

async fn run_counter(mut animation: CounterAnimation, text: RwSignal<String>) {
    loop {
        TimeoutFuture::new(FRAME_MS).await;
        let frame = animation.tick();
        // the component was unmounted
        if text.try_set(frame.text).is_some() || frame.done {
            break;
        }
    }
}
