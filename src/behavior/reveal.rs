//! Scroll Reveal
//!
//! Cards start hidden and slide up into place the first time they intersect
//! the viewport.

/// Elements that get the reveal treatment
pub const REVEAL_SELECTORS: &[&str] = &[
    ".card-3d",
    ".featured-card",
    ".showcase-card",
    ".selection-item",
    ".stat-card",
];

/// Fraction of an element that must be visible before it is revealed
pub const REVEAL_THRESHOLD: f64 = 0.1;

pub const REVEAL_TRANSITION: &str = "all 0.8s cubic-bezier(0.4, 0, 0.2, 1)";

/// Inline style values for one reveal state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStyle {
    pub opacity: &'static str,
    pub transform: &'static str,
}

pub const HIDDEN: RevealStyle = RevealStyle {
    opacity: "0",
    transform: "translateY(30px)",
};

pub const REVEALED: RevealStyle = RevealStyle {
    opacity: "1",
    transform: "translateY(0)",
};

/// Comma-joined selector for `querySelectorAll`
pub fn reveal_selector() -> String {
    REVEAL_SELECTORS.join(", ")
}

/// Style an element should carry given whether it has been seen yet
pub fn style_for(seen: bool) -> RevealStyle {
    if seen {
        REVEALED
    } else {
        HIDDEN
    }
}
