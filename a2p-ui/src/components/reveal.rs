//! Scroll Reveal
//!
//! Cards inside a [`RevealScope`] start hidden and slide into place the
//! first time they enter the viewport.

use a2p_academy::behavior::reveal::{reveal_selector, HIDDEN, REVEALED, REVEAL_THRESHOLD, REVEAL_TRANSITION};
use leptos::*;
use web_sys::Element;

use crate::dom::{observe_visible, query_all, set_style};

/// Container whose matching descendants get the reveal treatment
#[component]
pub fn RevealScope(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    let node_ref = create_node_ref::<html::Div>();

    node_ref.on_load(move |el| {
        let root: Element = (*el).clone().into();
        // children are attached after the container itself
        request_animation_frame(move || install_scroll_reveal(&root));
    });

    view! {
        <div class=class node_ref=node_ref>
            {children()}
        </div>
    }
}

fn install_scroll_reveal(root: &Element) {
    let cards = query_all(root, &reveal_selector());
    for card in &cards {
        set_style(card, "opacity", HIDDEN.opacity);
        set_style(card, "transform", HIDDEN.transform);
        set_style(card, "transition", REVEAL_TRANSITION);
    }

    observe_visible(&cards, Some(REVEAL_THRESHOLD), false, |card| {
        set_style(card, "opacity", REVEALED.opacity);
        set_style(card, "transform", REVEALED.transform);
    });
}
