//! Academy Backend API Client
//!
//! HTTP client for the academy backend. Two layers of operations:
//!
//! - explicit methods (`session`, `fetch_registrations`, `health`, `submit`)
//!   that return a [`ClientResult`] so callers can tell "empty" from "failed"
//! - page-level methods (`current_user`, `all_registrations`,
//!   `submit_registration`, `check_backend_status`, ...) that never fail:
//!   every error becomes a benign fallback plus a log line or an alert
//!
//! Nothing is retried and no timeout is applied.

use std::sync::Arc;

use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::dto::{
    decode_listing, decode_session, error_message, FormData, HealthStatus, Inquiry,
    LogoutResponse, Registration, SessionUser, Submission,
};
use super::error::{ClientError, ClientResult};
use super::host::PageHost;

/// Default backend origin
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

const LOGIN_PATH: &str = "/auth/google";
const LOGOUT_PATH: &str = "/auth/logout";
const USER_PATH: &str = "/auth/user";
const REGISTER_PATH: &str = "/api/register";
const CONTACT_PATH: &str = "/api/contact";
const REGISTRATIONS_PATH: &str = "/api/registrations";
const INQUIRIES_PATH: &str = "/api/inquiries";
const HEALTH_PATH: &str = "/api/health";

/// User-facing messages for one kind of form submission
struct FormMessages {
    accepted: &'static str,
    rejected: &'static str,
    failed: &'static str,
    log_label: &'static str,
}

const REGISTRATION_MESSAGES: FormMessages = FormMessages {
    accepted: "✅ Registration successful! We will contact you soon.",
    rejected: "Registration failed",
    failed: "❌ Error submitting registration",
    log_label: "Registration error",
};

const CONTACT_MESSAGES: FormMessages = FormMessages {
    accepted: "✅ Thank you! Your inquiry has been received. We will contact you soon.",
    rejected: "Failed to submit inquiry",
    failed: "❌ Error submitting inquiry",
    log_label: "Contact error",
};

/// Where the client sends its requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin without trailing slash (e.g. "http://localhost:5000")
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Build a config from user input, rejecting anything that is not an
    /// absolute http(s) URL
    pub fn parse(base_url: &str) -> ClientResult<Self> {
        let url = Url::parse(base_url.trim())
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;

        match url.scheme() {
            "http" | "https" => Ok(Self::new(base_url)),
            other => Err(ClientError::InvalidBaseUrl(format!(
                "{}: unsupported scheme `{}`",
                base_url, other
            ))),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

/// Academy backend client
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
    host: Arc<dyn PageHost>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client for `config.base_url` whose alerts, navigation and
    /// reloads go through `host`
    pub fn new(config: ClientConfig, host: impl PageHost + 'static) -> Self {
        Self::with_http_client(Client::new(), config, host)
    }

    /// Create a client on top of an existing connection pool
    pub fn with_http_client(
        http: Client,
        config: ClientConfig,
        host: impl PageHost + 'static,
    ) -> Self {
        Self {
            http,
            config,
            host: Arc::new(host),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    // ============================================
    // Authentication
    // ============================================

    /// Backend-hosted Google sign-in entry point
    pub fn login_url(&self) -> String {
        self.url(LOGIN_PATH)
    }

    /// Leave the page for the backend's Google sign-in flow
    pub fn login(&self) {
        let url = self.login_url();
        tracing::info!(url = %url, "Redirecting to sign-in");
        self.host.navigate(&url);
    }

    /// End the backend session and reload the page once the backend confirms.
    ///
    /// Failures are logged only.
    pub async fn logout(&self) {
        match self.try_logout().await {
            Ok(true) => self.host.reload(),
            Ok(false) => tracing::warn!("Logout was not confirmed by the backend"),
            Err(e) => tracing::error!(error = %e, "Logout error"),
        }
    }

    async fn try_logout(&self) -> ClientResult<bool> {
        // The status code is ignored; only the body's `success` flag counts.
        let response = self.get(LOGOUT_PATH).await?;
        let body: LogoutResponse = read_json(response).await?;
        Ok(body.success)
    }

    /// Current session, distinguishing "not signed in" (`Ok(None)`) from a
    /// failed check (`Err`)
    pub async fn session(&self) -> ClientResult<Option<SessionUser>> {
        let response = self.get(USER_PATH).await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(status_error(status, response).await);
        }

        let body: Value = read_json(response).await?;
        decode_session(body)
    }

    /// Signed-in user, or `None` when signed out *or* when the check failed
    pub async fn current_user(&self) -> Option<SessionUser> {
        match self.session().await {
            Ok(user) => user,
            Err(e) => {
                tracing::error!(error = %e, "Error getting user");
                None
            }
        }
    }

    // ============================================
    // Forms
    // ============================================

    /// POST a form to `path` without any user-facing side effect.
    ///
    /// Non-2xx answers become [`ClientError::Status`] carrying the body's
    /// `error`/`message`.
    pub async fn submit(&self, path: &str, form: &FormData) -> ClientResult<Value> {
        let (status, body) = self.post_json(path, form).await?;

        if status.is_success() {
            Ok(body)
        } else {
            Err(ClientError::Status {
                status: status.as_u16(),
                message: error_message(&body).unwrap_or_else(|| reason(status)),
            })
        }
    }

    /// Submit the registration form, alerting the user with the outcome
    pub async fn submit_registration(&self, form: &FormData) -> Submission {
        self.submit_form(REGISTER_PATH, form, &REGISTRATION_MESSAGES)
            .await
    }

    /// Submit the contact form, alerting the user with the outcome
    pub async fn submit_contact(&self, form: &FormData) -> Submission {
        self.submit_form(CONTACT_PATH, form, &CONTACT_MESSAGES).await
    }

    async fn submit_form(
        &self,
        path: &str,
        form: &FormData,
        messages: &FormMessages,
    ) -> Submission {
        match self.post_json(path, form).await {
            Ok((status, data)) if status.is_success() => {
                tracing::info!(path, status = status.as_u16(), "Form accepted");
                self.host.alert(messages.accepted);
                Submission::Accepted { data }
            }
            Ok((status, body)) => {
                let error =
                    error_message(&body).unwrap_or_else(|| messages.rejected.to_string());
                tracing::warn!(path, status = status.as_u16(), error = %error, "Form rejected");
                self.host.alert(&format!("❌ {}", error));
                Submission::Rejected { error }
            }
            Err(e) => {
                tracing::error!(path, error = %e, "{}", messages.log_label);
                self.host.alert(messages.failed);
                Submission::Rejected {
                    error: e.to_string(),
                }
            }
        }
    }

    // ============================================
    // Admin listings
    // ============================================

    pub async fn fetch_registrations(&self) -> ClientResult<Vec<Registration>> {
        self.fetch_listing(REGISTRATIONS_PATH, "registrations")
            .await
    }

    pub async fn fetch_inquiries(&self) -> ClientResult<Vec<Inquiry>> {
        self.fetch_listing(INQUIRIES_PATH, "inquiries").await
    }

    /// All registrations, or an empty list if they could not be fetched
    pub async fn all_registrations(&self) -> Vec<Registration> {
        self.fetch_registrations().await.unwrap_or_else(|e| {
            tracing::error!(error = %e, "Error fetching registrations");
            Vec::new()
        })
    }

    /// All inquiries, or an empty list if they could not be fetched
    pub async fn all_inquiries(&self) -> Vec<Inquiry> {
        self.fetch_inquiries().await.unwrap_or_else(|e| {
            tracing::error!(error = %e, "Error fetching inquiries");
            Vec::new()
        })
    }

    async fn fetch_listing<T: DeserializeOwned>(
        &self,
        path: &str,
        key: &str,
    ) -> ClientResult<Vec<T>> {
        let response = self.get(path).await?;
        let status = response.status();

        if !status.is_success() {
            return Err(status_error(status, response).await);
        }

        let body: Value = read_json(response).await?;
        decode_listing(body, key)
    }

    // ============================================
    // Health
    // ============================================

    /// Decoded health report; non-2xx is an error
    pub async fn health(&self) -> ClientResult<HealthStatus> {
        let response = self.get(HEALTH_PATH).await?;
        let status = response.status();

        if !status.is_success() {
            return Err(status_error(status, response).await);
        }

        read_json(response).await
    }

    /// `true` iff the health endpoint answers 2xx. Logs only.
    pub async fn check_backend_status(&self) -> bool {
        match self.get(HEALTH_PATH).await {
            Ok(response) if response.status().is_success() => {
                tracing::info!("✅ Backend is running");
                true
            }
            Ok(response) => {
                tracing::warn!(
                    status = response.status().as_u16(),
                    "⚠️ Backend answered the health check with an error"
                );
                false
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "⚠️ Backend is not running. Please start the backend server."
                );
                false
            }
        }
    }

    // ============================================
    // Transport
    // ============================================

    async fn get(&self, path: &str) -> ClientResult<Response> {
        let url = self.url(path);
        tracing::debug!(method = "GET", url = %url, "Sending request");
        Ok(self.http.get(&url).send().await?)
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<(StatusCode, Value)> {
        let url = self.url(path);
        tracing::debug!(method = "POST", url = %url, "Sending request");

        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status();
        let body = read_json(response).await?;
        Ok((status, body))
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
}

async fn status_error(status: StatusCode, response: Response) -> ClientError {
    let message = match read_json::<Value>(response).await {
        Ok(body) => error_message(&body).unwrap_or_else(|| reason(status)),
        Err(_) => reason(status),
    };

    ClientError::Status {
        status: status.as_u16(),
        message,
    }
}

fn reason(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Unknown status")
        .to_string()
}
