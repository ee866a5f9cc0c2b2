use askra_core::motion::{SectionBand, Theme};
use askra_core::slider::Bounds;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::NodeRef;

/// A `window` event listener that is removed when dropped. Effects keep one
/// alive and drop it from their destructor.
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn Fn()>,
}

impl WindowListener {
    pub fn new(event: &'static str, handler: impl Fn() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::<dyn Fn()>::new(handler);
        if let Err(e) = window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            log::warn!("Could not listen for {}: {:?}", event, e);
            return None;
        }
        Some(Self { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        }
    }
}

pub fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Locks or releases page scrolling (used while the preloader covers the page).
pub fn set_scroll_locked(locked: bool) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let value = if locked { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", value);
    }
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Horizontal extent of a mounted element, in viewport coordinates.
pub fn element_bounds(node: &NodeRef) -> Option<Bounds> {
    let rect = node.cast::<web_sys::Element>()?.get_bounding_client_rect();
    Some(Bounds::new(rect.left(), rect.width()))
}

/// Top of a mounted element relative to the viewport, and its height.
pub fn element_extent(node: &NodeRef) -> Option<(f64, f64)> {
    let rect = node.cast::<web_sys::Element>()?.get_bounding_client_rect();
    Some((rect.top(), rect.height()))
}

/// Measures the declared sections that are present on the page, in document
/// coordinates. Missing ids are skipped.
pub fn measure_sections(sections: &[SectionDecl]) -> Vec<SectionBand<'static>> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let offset = scroll_y();
    sections
        .iter()
        .filter_map(|&(id, theme)| {
            let rect = document.get_element_by_id(id)?.get_bounding_client_rect();
            Some(SectionBand {
                id,
                top: rect.top() + offset,
                height: rect.height(),
                theme,
            })
        })
        .collect()
}

/// A page section that floating chrome reacts to: element id and its theme.
pub type SectionDecl = (&'static str, Theme);
