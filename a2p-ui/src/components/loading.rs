//! Loading Component
//!
//! Loading spinner and skeleton rows.

use leptos::*;

/// Section loading spinner
#[component]
pub fn Loading(#[prop(into, optional)] label: String) -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading-spinner" />
            <span>{label}</span>
        </div>
    }
}

/// Skeleton rows for a table that is still loading
#[component]
pub fn TableSkeleton(#[prop(default = 3)] rows: usize) -> impl IntoView {
    view! {
        <div class="table-skeleton">
            {(0..rows).map(|_| view! { <div class="skeleton-row" /> }).collect_view()}
        </div>
    }
}
