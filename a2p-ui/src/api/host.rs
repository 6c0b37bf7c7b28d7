use a2p_academy::api::PageHost;

/// Page host backed by the browser `window`
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHost;

impl PageHost for WindowHost {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn navigate(&self, url: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                web_sys::console::error_1(&e);
            }
        }
    }

    fn reload(&self) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                web_sys::console::error_1(&e);
            }
        }
    }
}
