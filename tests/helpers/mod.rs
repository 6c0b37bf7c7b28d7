//! Shared test fixtures: a mock academy backend and a page host that records
//! every side effect the client performs.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use a2p_academy::api::{ApiClient, ClientConfig, PageHost};
use serde_json::Value;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// An address nothing listens on
pub const UNREACHABLE: &str = "http://127.0.0.1:1";

/// Side effect observed by [`RecordingHost`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Alert(String),
    Navigate(String),
    Reload,
}

/// Page host that remembers every call
#[derive(Clone, Default)]
pub struct RecordingHost {
    events: Arc<Mutex<Vec<HostEvent>>>,
}

impl RecordingHost {
    pub fn events(&self) -> Vec<HostEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                HostEvent::Alert(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: HostEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl PageHost for RecordingHost {
    fn alert(&self, message: &str) {
        self.push(HostEvent::Alert(message.to_string()));
    }

    fn navigate(&self, url: &str) {
        self.push(HostEvent::Navigate(url.to_string()));
    }

    fn reload(&self) {
        self.push(HostEvent::Reload);
    }
}

/// Mock academy backend
pub struct MockBackend {
    pub server: MockServer,
}

impl MockBackend {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Client pointed at this backend plus a handle on its recorded effects
    pub fn client(&self) -> (ApiClient, RecordingHost) {
        client_for(&self.uri())
    }

    /// Answer `verb path` with `status` and a JSON body
    pub async fn respond_json(&self, verb: &str, route: &str, status: u16, body: Value) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Answer `verb path` with `status` and a raw, non-JSON body
    pub async fn respond_text(&self, verb: &str, route: &str, status: u16, body: &str) {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }
}

pub fn client_for(base_url: &str) -> (ApiClient, RecordingHost) {
    let host = RecordingHost::default();
    let client = ApiClient::new(ClientConfig::new(base_url), host.clone());
    (client, host)
}
