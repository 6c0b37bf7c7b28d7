//! Header Scroll Shadow
//!
//! Deepens the header shadow once the page has scrolled past a threshold.

/// Scroll offset (px) beyond which the header is considered scrolled
pub const SCROLLED_THRESHOLD: f64 = 100.0;

pub const RESTING_SHADOW: &str = "0 10px 40px rgba(230, 57, 70, 0.15)";
pub const SCROLLED_SHADOW: &str = "0 15px 50px rgba(230, 57, 70, 0.2)";

/// Result of one scroll event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFrame {
    pub shadow: &'static str,
    /// Offset change since the previous event (positive = scrolling down)
    pub delta: f64,
}

/// Last seen scroll offset, owned by the header component
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollTracker {
    last_y: f64,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_y(&self) -> f64 {
        self.last_y
    }

    /// Record the current offset and compute the header's shadow
    pub fn update(&mut self, scroll_y: f64) -> ScrollFrame {
        let delta = scroll_y - self.last_y;
        self.last_y = scroll_y;

        ScrollFrame {
            shadow: shadow_for(scroll_y),
            delta,
        }
    }
}

pub fn shadow_for(scroll_y: f64) -> &'static str {
    if scroll_y > SCROLLED_THRESHOLD {
        SCROLLED_SHADOW
    } else {
        RESTING_SHADOW
    }
}
