//! Page Behaviors
//!
//! Logic behind the site's cosmetic effects, kept free of any DOM handle so
//! it can be exercised natively. The `a2p-ui` crate binds each of these to
//! elements and browser events.
//!
//! Every behavior owns its own state; none of them talks to another or to
//! the API client.

pub mod counter;
pub mod form;
pub mod nav;
pub mod parallax;
pub mod reveal;
pub mod scroll;
pub mod stars;
