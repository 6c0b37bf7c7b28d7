//! A2P Academy Backend API
//!
//! Client for the academy backend at a single configurable origin.
//!
//! # Endpoints
//!
//! ## Auth
//! - `GET /auth/google` - Google sign-in (full-page redirect)
//! - `GET /auth/logout` - End the session
//! - `GET /auth/user` - Current session user
//!
//! ## Forms
//! - `POST /api/register` - Student registration
//! - `POST /api/contact` - Contact inquiry
//!
//! ## Admin
//! - `GET /api/registrations` - All registrations
//! - `GET /api/inquiries` - All inquiries
//!
//! ## Health
//! - `GET /api/health` - Backend health probe

pub mod client;
pub mod dto;
pub mod error;
pub mod host;

pub use client::{ApiClient, ClientConfig, DEFAULT_API_BASE};
pub use dto::{FormData, HealthStatus, Inquiry, Registration, SessionUser, Submission};
pub use error::{ClientError, ClientResult};
pub use host::{NullHost, PageHost};
