//! Pages
//!
//! Top-level page components for each route.

pub mod admin;
pub mod contact;
pub mod home;
pub mod register;

pub use admin::Admin;
pub use contact::Contact;
pub use home::Home;
pub use register::Register;
