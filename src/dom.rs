//! Thin helpers over web-sys for the bits yew does not render itself:
//! the document body, observers and animation frames.

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    js_sys, window, Element, Event, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions,
};

use crate::state::detail::{Item, ATTR_NAME};

pub fn set_body_overflow(value: &str) {
    match window().and_then(|w| w.document()).and_then(|d| d.body()) {
        Some(body) => {
            let _ = body.style().set_property("overflow", value);
        }
        None => warn!("No document body, cannot set overflow"),
    }
}

/// Reads the item from the nearest card around the event target.
/// `None` when the trigger does not sit inside a card.
pub fn enclosing_item(event: &Event) -> Option<Item> {
    let target: Element = event.target()?.dyn_into().ok()?;
    let card = target.closest(&format!("[{}]", ATTR_NAME)).ok().flatten()?;
    Some(Item::from_attributes(|key| card.get_attribute(key)))
}

pub fn scroll_to(selector: &str) {
    let section = window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(selector).ok().flatten());
    let Some(section) = section else {
        warn!("Scroll target {} not found", selector);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Runs `f` on the next animation frame, or right away when there is no window.
pub fn next_frame(f: impl FnOnce() + 'static) {
    let Some(window) = window() else {
        f();
        return;
    };
    let callback = Closure::once_into_js(f);
    if window.request_animation_frame(callback.unchecked_ref()).is_err() {
        warn!("requestAnimationFrame failed");
    }
}

/// `(scroll_y, document height, viewport height)`.
pub fn scroll_metrics() -> Option<(f64, f64, f64)> {
    let window = window()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    let height = window.document()?.body()?.scroll_height() as f64;
    Some((scroll_y, height, viewport))
}

/// Fires a callback the first time an element becomes visible enough, then
/// stops observing. Dropping it disconnects the observer.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    pub fn observe_once(
        element: &Element,
        threshold: f64,
        on_visible: impl FnOnce() + 'static,
    ) -> Option<Self> {
        let mut on_visible = Some(on_visible);
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let intersecting = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting());
                if !intersecting {
                    return;
                }
                observer.disconnect();
                if let Some(on_visible) = on_visible.take() {
                    on_visible();
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| warn!("IntersectionObserver unavailable: {:?}", e))
                .ok()?;
        observer.observe(element);

        Some(VisibilityObserver {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
