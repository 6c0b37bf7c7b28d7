use a2p_academy::behavior::stars::{generate_stars, DEFAULT_STAR_COUNT};
use leptos::*;

/// Field of randomly placed floating stars behind the hero
#[component]
pub fn Stars(#[prop(default = DEFAULT_STAR_COUNT)] count: usize) -> impl IntoView {
    let stars = generate_stars(count, js_sys::Math::random);

    view! {
        <div class="stars">
            {stars
                .into_iter()
                .map(|star| view! { <div class="star" style=star.style() /> })
                .collect_view()}
        </div>
    }
}
