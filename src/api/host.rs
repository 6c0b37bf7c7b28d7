//! Page Host
//!
//! The side effects the API client performs on the page it runs in: blocking
//! alerts, full-page navigation and reloads. The browser UI implements this
//! with `window`, the terminal client with stdout.

/// Side-effect seam between the API client and its embedding page
pub trait PageHost: Send + Sync {
    /// Show a blocking, user-facing message
    fn alert(&self, message: &str);

    /// Replace the current page with `url`
    fn navigate(&self, url: &str);

    /// Reload the current page
    fn reload(&self);
}

/// Host that performs no side effects
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHost;

impl PageHost for NullHost {
    fn alert(&self, message: &str) {
        tracing::debug!(message, "alert suppressed");
    }

    fn navigate(&self, url: &str) {
        tracing::debug!(url, "navigation suppressed");
    }

    fn reload(&self) {
        tracing::debug!("reload suppressed");
    }
}
