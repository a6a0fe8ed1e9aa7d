use gloo_events::EventListener;
use wasm_bindgen::JsValue;
use web_sys::{window, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::navigation::Anchor;
use crate::theme::Theme;

const FALLBACK_VIEWPORT: (f64, f64) = (1280.0, 720.0);

fn css_pixels(value: Result<JsValue, JsValue>) -> Option<f64> {
    value.ok()?.as_f64().filter(|px| *px > 0.0)
}

pub fn viewport_size() -> (f64, f64) {
    let (fallback_width, fallback_height) = FALLBACK_VIEWPORT;
    window().map_or(FALLBACK_VIEWPORT, |win| {
        (
            css_pixels(win.inner_width()).unwrap_or(fallback_width),
            css_pixels(win.inner_height()).unwrap_or(fallback_height),
        )
    })
}

pub fn scroll_offset() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn scroll_to_anchor(anchor: Anchor) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(anchor.id()))
    else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_top() {
    let Some(win) = window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

pub fn apply_theme(theme: Theme) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// Listens on `window`; dropping the listener detaches it.
pub fn on_window(event: &'static str, handler: impl FnMut(&Event) + 'static) -> Option<EventListener> {
    window().map(|win| EventListener::new(&win, event, handler))
}
