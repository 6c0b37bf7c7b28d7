//! UI Components
//!
//! Reusable Leptos components for the academy pages.

pub mod anchor;
pub mod counter;
pub mod form;
pub mod loading;
pub mod nav;
pub mod parallax;
pub mod reveal;
pub mod stars;

pub use anchor::SmoothAnchor;
pub use counter::StatCounter;
pub use form::{FormKind, FormView};
pub use loading::{Loading, TableSkeleton};
pub use nav::Header;
pub use parallax::{HeroCard, ParallaxCards};
pub use reveal::RevealScope;
pub use stars::Stars;
