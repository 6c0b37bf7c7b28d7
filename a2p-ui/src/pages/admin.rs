//! Admin Page
//!
//! Registrations and inquiries received by the backend, plus the backend
//! origin setting.

use a2p_academy::api::{Inquiry, Registration};
use leptos::*;

use crate::api;
use crate::components::{Loading, TableSkeleton};
use crate::state::GlobalState;

#[component]
pub fn Admin() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let client = state.client.clone();
    let registrations = create_local_resource(
        || (),
        move |_| {
            let client = client.clone();
            async move { client.fetch_registrations().await.map_err(|e| e.to_string()) }
        },
    );

    let client = state.client.clone();
    let inquiries = create_local_resource(
        || (),
        move |_| {
            let client = client.clone();
            async move { client.fetch_inquiries().await.map_err(|e| e.to_string()) }
        },
    );

    view! {
        <div class="admin">
            <div class="admin-header">
                <h1>"Admin"</h1>
                <button
                    class="btn-secondary"
                    on:click=move |_| {
                        registrations.refetch();
                        inquiries.refetch();
                    }
                >
                    "Refresh"
                </button>
            </div>

            <section class="admin-section">
                <h2>"Registrations"</h2>
                <Suspense fallback=|| view! { <Loading label="Loading registrations..." /> <TableSkeleton /> }>
                    {move || registrations.get().map(|result| match result {
                        Err(e) => view! { <p class="load-error">"Failed to load registrations: " {e}</p> }.into_view(),
                        Ok(rows) if rows.is_empty() => view! { <p class="empty">"No registrations yet."</p> }.into_view(),
                        Ok(rows) => view! { <RegistrationTable rows=rows /> }.into_view(),
                    })}
                </Suspense>
            </section>

            <section class="admin-section">
                <h2>"Inquiries"</h2>
                <Suspense fallback=|| view! { <Loading label="Loading inquiries..." /> <TableSkeleton /> }>
                    {move || inquiries.get().map(|result| match result {
                        Err(e) => view! { <p class="load-error">"Failed to load inquiries: " {e}</p> }.into_view(),
                        Ok(rows) if rows.is_empty() => view! { <p class="empty">"No inquiries yet."</p> }.into_view(),
                        Ok(rows) => view! { <InquiryTable rows=rows /> }.into_view(),
                    })}
                </Suspense>
            </section>

            <BackendSettings />
        </div>
    }
}

#[component]
fn RegistrationTable(rows: Vec<Registration>) -> impl IntoView {
    view! {
        <table class="admin-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Phone"</th>
                    <th>"Course"</th>
                    <th>"Status"</th>
                    <th>"Submitted"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|r| {
                        let when = submitted(
                            r.submitted_at().map(|dt| dt.format("%Y-%m-%d %H:%M").to_string()),
                            r.created_at.clone(),
                        );
                        view! {
                            <tr>
                                <td>{r.id}</td>
                                <td>{cell(r.full_name)}</td>
                                <td>{cell(r.email)}</td>
                                <td>{cell(r.phone)}</td>
                                <td>{cell(r.course)}</td>
                                <td>{cell(r.status)}</td>
                                <td>{when}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[component]
fn InquiryTable(rows: Vec<Inquiry>) -> impl IntoView {
    view! {
        <table class="admin-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Subject"</th>
                    <th>"Message"</th>
                    <th>"Status"</th>
                    <th>"Submitted"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|r| {
                        let when = submitted(
                            r.submitted_at().map(|dt| dt.format("%Y-%m-%d %H:%M").to_string()),
                            r.created_at.clone(),
                        );
                        view! {
                            <tr>
                                <td>{r.id}</td>
                                <td>{cell(r.name)}</td>
                                <td>{cell(r.email)}</td>
                                <td>{cell(r.subject)}</td>
                                <td>{cell(r.message)}</td>
                                <td>{cell(r.status)}</td>
                                <td>{when}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

/// Backend origin override stored in local storage
#[component]
fn BackendSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (url, set_url) = create_signal(api::get_api_base());

    let save = move |_| {
        api::set_api_base(url.get_untracked().trim());
        // the client is built once per page load
        let _ = window().location().reload();
    };

    view! {
        <section class="admin-section backend-settings">
            <h2>"Backend"</h2>
            <p class="backend-status">
                {move || match state.backend_online.get() {
                    Some(true) => "Connected",
                    Some(false) => "Not responding",
                    None => "Checking...",
                }}
            </p>
            <input
                type="url"
                prop:value=move || url.get()
                on:input=move |ev| set_url.set(event_target_value(&ev))
            />
            <button class="btn-secondary" on:click=save>"Save"</button>
        </section>
    }
}

fn cell(value: Option<String>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or_else(|| "-".to_string())
}

/// Formatted submission time, the raw value when it does not parse
fn submitted(parsed: Option<String>, raw: Option<String>) -> String {
    parsed.or(raw).unwrap_or_else(|| "-".to_string())
}
