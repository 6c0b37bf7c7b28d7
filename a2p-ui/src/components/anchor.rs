use leptos::*;
use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// In-page `#anchor` link that scrolls its target smoothly into view
#[component]
pub fn SmoothAnchor(
    /// Selector of the target, e.g. `#programs`
    href: &'static str,
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        if let Ok(Some(target)) = document().query_selector(href) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
