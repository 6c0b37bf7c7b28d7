//! Navigation Menu
//!
//! Hamburger toggle state and active-link detection.

/// CSS class applied to the menu and the toggle button while open
pub const ACTIVE_CLASS: &str = "active";

/// Page assumed when the path has no final segment
pub const INDEX_PAGE: &str = "index.html";

/// Inline style for one bar of the hamburger icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarStyle {
    pub transform: &'static str,
    pub opacity: &'static str,
}

const CLOSED_BARS: [BarStyle; 3] = [
    BarStyle { transform: "none", opacity: "1" },
    BarStyle { transform: "none", opacity: "1" },
    BarStyle { transform: "none", opacity: "1" },
];

const OPEN_BARS: [BarStyle; 3] = [
    BarStyle { transform: "rotate(45deg) translateY(10px)", opacity: "1" },
    BarStyle { transform: "none", opacity: "0" },
    BarStyle { transform: "rotate(-45deg) translateY(-10px)", opacity: "1" },
];

/// Open/closed state of the mobile navigation menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu; returns the new state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu (a link inside it was followed)
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Class for the menu list and toggle button
    pub fn menu_class(&self) -> &'static str {
        if self.open {
            ACTIVE_CLASS
        } else {
            ""
        }
    }

    /// Styles for the three hamburger bars (forms an X while open)
    pub fn hamburger(&self) -> [BarStyle; 3] {
        if self.open {
            OPEN_BARS
        } else {
            CLOSED_BARS
        }
    }
}

/// Last segment of a location path, or [`INDEX_PAGE`] when there is none
pub fn current_page(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(page) if !page.is_empty() => page,
        _ => INDEX_PAGE,
    }
}

/// Whether a nav link pointing at `href` should be highlighted on
/// `current_page`
pub fn is_active_link(href: &str, current_page: &str) -> bool {
    let href = href.trim_start_matches('/');
    let href = if href.is_empty() { INDEX_PAGE } else { href };
    let current = if current_page.is_empty() {
        INDEX_PAGE
    } else {
        current_page
    };
    href == current
}
