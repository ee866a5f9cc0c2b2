use std::cell::RefCell;
use std::rc::Rc;

use askra_core::motion::{self, Theme};
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::{Closure, JsValue};
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::dom::{self, SectionDecl, WindowListener};

/// Milliseconds to wait after the last resize before re-checking the width.
const RESIZE_DEBOUNCE_MS: u32 = 100;

/// True while the viewport is narrower than the mobile breakpoint.
#[hook]
pub fn use_is_mobile() -> bool {
    let is_mobile = use_state_eq(|| motion::is_mobile_width(dom::viewport_width()));
    {
        let is_mobile = is_mobile.clone();
        use_effect_with_deps(
            move |_| {
                is_mobile.set(motion::is_mobile_width(dom::viewport_width()));
                let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
                let listener = WindowListener::new("resize", {
                    let pending = pending.clone();
                    move || {
                        let is_mobile = is_mobile.clone();
                        // Replacing the timeout cancels the previous one.
                        *pending.borrow_mut() = Some(Timeout::new(RESIZE_DEBOUNCE_MS, move || {
                            is_mobile.set(motion::is_mobile_width(dom::viewport_width()));
                        }));
                    }
                });
                move || {
                    drop(listener);
                    pending.borrow_mut().take();
                }
            },
            (),
        );
    }
    *is_mobile
}

/// Current `window.scrollY`, updated on scroll.
#[hook]
pub fn use_scroll_y() -> f64 {
    let scroll_y = use_state_eq(dom::scroll_y);
    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(
            move |_| {
                scroll_y.set(dom::scroll_y());
                let listener = WindowListener::new("scroll", move || scroll_y.set(dom::scroll_y()));
                move || drop(listener)
            },
            (),
        );
    }
    *scroll_y
}

/// Id of the declared section under the navigation bar. Keeps the last answer
/// while no section covers the probe point.
#[hook]
pub fn use_active_section(sections: &'static [SectionDecl]) -> Option<&'static str> {
    let active = use_state_eq(|| sections.first().map(|&(id, _)| id));
    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::new("scroll", move || {
                    let bands = dom::measure_sections(sections);
                    if let Some(id) = motion::active_section(&bands, dom::scroll_y()) {
                        active.set(Some(id));
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }
    *active
}

/// Distance from the viewport bottom at which floating controls sit.
const FLOATING_CONTROL_OFFSET: f64 = 60.0;

/// Theme of the declared section behind the bottom-right floating controls.
#[hook]
pub fn use_section_theme(sections: &'static [SectionDecl]) -> Theme {
    let theme = use_state_eq(Theme::default);
    {
        let theme = theme.clone();
        use_effect_with_deps(
            move |_| {
                let update = move || {
                    let bands = dom::measure_sections(sections);
                    let probe = dom::scroll_y() + dom::viewport_height() - FLOATING_CONTROL_OFFSET;
                    theme.set(motion::theme_at(&bands, probe).unwrap_or_default());
                };
                update();
                let listener = WindowListener::new("scroll", update);
                move || drop(listener)
            },
            (),
        );
    }
    *theme
}

/// Becomes true once the element has been `threshold` visible, and stays true.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64) -> bool {
    let visible = use_state_eq(|| false);
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut observer: Option<IntersectionObserver> = None;
                let mut callback: Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>> = None;

                if let Some(element) = node.cast::<web_sys::Element>() {
                    let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new({
                        let visible = visible.clone();
                        move |entries: js_sys::Array, observer: IntersectionObserver| {
                            let hit = entries
                                .iter()
                                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                                .any(|entry| entry.is_intersecting());
                            if hit {
                                visible.set(true);
                                observer.disconnect();
                            }
                        }
                    });
                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(threshold));
                    match IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options) {
                        Ok(created) => {
                            created.observe(&element);
                            observer = Some(created);
                            callback = Some(on_intersect);
                        }
                        Err(e) => {
                            log::warn!("IntersectionObserver unavailable: {:?}", e);
                            visible.set(true);
                        }
                    }
                }

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            node,
        );
    }
    *visible
}

/// Scroll progress of an element through the viewport, in `[0, 1]`.
#[hook]
pub fn use_section_progress(node: NodeRef) -> f64 {
    // Re-render on scroll; the element is measured during render.
    let _scroll_y = use_scroll_y();
    dom::element_extent(&node)
        .map(|(top, height)| motion::section_progress(top, height, dom::viewport_height()))
        .unwrap_or(0.0)
}
