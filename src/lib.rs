//! # A2P Academy
//!
//! Client side of the A2P Academy registration website.
//!
//! ## Modules
//!
//! - [`api`]: HTTP client for the academy backend, normalizing every outcome
//!   into a uniform result instead of raising
//! - [`behavior`]: logic behind the cosmetic page behaviors (navigation
//!   toggle, form validation, scroll reveal, counters, parallax, stars,
//!   header shadow)
//! - [`config`]: TOML configuration with environment overrides (`cli` feature)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use a2p_academy::api::{ApiClient, ClientConfig, NullHost};
//! use a2p_academy::FormData;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = ApiClient::new(ClientConfig::default(), NullHost);
//!
//!     if client.check_backend_status().await {
//!         let mut form = FormData::new();
//!         form.insert("full_name".into(), "Ada Lovelace".into());
//!         form.insert("email".into(), "ada@example.com".into());
//!         form.insert("course".into(), "A2P Foundations".into());
//!
//!         let outcome = client.submit_registration(&form).await;
//!         println!("accepted: {}", outcome.is_success());
//!     }
//! }
//! ```

pub mod api;
pub mod behavior;
#[cfg(feature = "cli")]
pub mod config;

pub use api::{
    ApiClient, ClientConfig, ClientError, FormData, HealthStatus, Inquiry, NullHost, PageHost,
    Registration, SessionUser, Submission,
};

pub use behavior::{
    counter::CounterAnimation,
    form::{validate_form, FormField},
    nav::NavMenu,
    scroll::ScrollTracker,
    stars::Star,
};

#[cfg(feature = "cli")]
pub use config::{Config, ConfigError, LoggingConfig};
