//! Backend Access
//!
//! Backend origin selection and the browser page host. Requests themselves
//! go through the shared [`ApiClient`].

mod host;

pub use host::WindowHost;

use a2p_academy::api::{ApiClient, ClientConfig, DEFAULT_API_BASE};

/// Local storage key holding an override for the backend origin
pub const API_BASE_KEY: &str = "a2p_api_base";

/// Get the backend origin from local storage or use the default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten());

    normalize_api_base(stored.as_deref())
}

/// Set the backend origin in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_BASE_KEY, url);
        }
    }
}

/// Client bound to the current backend origin and the browser window
pub fn build_client() -> ApiClient {
    ApiClient::new(ClientConfig::new(get_api_base()), WindowHost)
}

fn normalize_api_base(stored: Option<&str>) -> String {
    match stored.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
        _ => DEFAULT_API_BASE.to_string(),
    }
}
