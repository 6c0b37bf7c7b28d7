//! DOM Helpers
//!
//! Thin wrappers over `IntersectionObserver` and inline styles used by the
//! scroll-driven components.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry};

/// Call `on_visible` for each target as it enters the viewport.
///
/// With `once`, a target is unobserved after its first intersection.
pub fn observe_visible(
    targets: &[Element],
    threshold: Option<f64>,
    once: bool,
    on_visible: impl Fn(&Element) + 'static,
) -> Option<IntersectionObserver> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                on_visible(&target);
                if once {
                    observer.unobserve(&target);
                }
            }
        },
    );

    let init = web_sys::IntersectionObserverInit::new();
    if let Some(threshold) = threshold {
        init.set_threshold(&JsValue::from_f64(threshold));
    }

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            for target in targets {
                observer.observe(target);
            }
            // the observer keeps calling back for the lifetime of the page
            callback.forget();
            Some(observer)
        }
        Err(e) => {
            web_sys::console::error_1(&e);
            None
        }
    }
}

/// All elements under `root` matching `selector`
pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Set an inline style property, ignoring elements without a style object
pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property(property, value);
    }
}
