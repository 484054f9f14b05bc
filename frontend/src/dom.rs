//! Thin DOM access. Every helper gives up quietly when the browser object it
//! needs is missing, so a failed lookup only costs a visual effect.

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::content::Tab;
use crate::layout::{self, SliderGeometry};

pub fn viewport_width() -> Option<f64> {
    window()?.inner_width().ok()?.as_f64()
}

pub fn scroll_y() -> Option<f64> {
    window()?.scroll_y().ok()
}

pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.set_property("overflow", "")
    };
    if result.is_err() {
        warn!("Failed to update body overflow");
    }
}

/// Smooth-scrolls so the element with `id` sits below the fixed header.
/// Returns false when there is no such element.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(window) = window() else {
        return false;
    };
    let Some(element) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        debug!("No scroll target #{}", id);
        return false;
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let top = layout::scroll_target(element.get_bounding_client_rect().top(), scroll_y);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

pub fn measure_tab_button(tab: Tab) -> Option<SliderGeometry> {
    let selector = format!("button[data-tab=\"{}\"]", tab.id());
    let button = window()?
        .document()?
        .query_selector(&selector)
        .ok()??
        .dyn_into::<HtmlElement>()
        .ok()?;
    Some(SliderGeometry::from_button(button.client_width(), button.offset_left()))
}

pub fn set_style_var(element: &HtmlElement, name: &str, value: &str) {
    if element.style().set_property(name, value).is_err() {
        warn!("Failed to set {} on element", name);
    }
}

pub fn request_frame(callback: &Closure<dyn FnMut(f64)>) -> Option<i32> {
    window()?
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()
}

pub fn cancel_frame(id: i32) {
    let Some(window) = window() else {
        return;
    };
    if window.cancel_animation_frame(id).is_err() {
        warn!("Failed to cancel animation frame {}", id);
    }
}
