#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::model::WindowRect;

const FALLBACK_VIEWPORT: WindowRect = WindowRect {
    x: 0,
    y: 0,
    w: 1024,
    h: 768,
};

pub(super) fn viewport_rect() -> WindowRect {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_VIEWPORT.w);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_VIEWPORT.h);

            return WindowRect {
                x: 0,
                y: 0,
                w: width.max(1),
                h: height.max(1),
            };
        }
    }

    FALLBACK_VIEWPORT
}

pub(super) fn now_ms() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0)
    }
}

pub(super) fn focus_element_by_id(element_id: &'static str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        // The overlay mounts in the same tick as the state change; focus on the next one.
        let callback = Closure::once_into_js(move || {
            let element = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(element_id))
                .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok());
            if let Some(element) = element {
                let _ = element.focus();
            }
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = element_id;
}

/// Whether the event target lies inside the element with `element_id`.
///
/// Answers `true` when the DOM cannot be inspected so callers never act on a guess.
pub(super) fn event_within_element(ev: &web_sys::MouseEvent, element_id: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(element_id))
        else {
            return true;
        };
        let Some(node) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
            return true;
        };
        element.contains(Some(&node))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (ev, element_id);
        true
    }
}
