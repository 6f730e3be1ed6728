//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Reducer semantics stay pure; anything that touches the DOM, the clock, or timers goes through
//! [`DesktopHostContext`].

mod host_ui;

use std::time::Duration;

use leptos::set_timeout;

use crate::{
    geometry::{canvas_scale, logical_viewport},
    model::WindowRect,
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

/// DOM id of the lightbox overlay root.
pub const LIGHTBOX_DOM_ID: &str = "desktop-lightbox";

#[derive(Debug, Clone, Copy, Default)]
/// Browser-backed environment queries and effect execution for the desktop runtime.
pub struct DesktopHostContext;

impl DesktopHostContext {
    /// Browser viewport in CSS pixels (1024x768 outside the browser).
    pub fn viewport_rect(&self) -> WindowRect {
        host_ui::viewport_rect()
    }

    /// Browser viewport converted to logical canvas units for a design canvas `design_width` wide.
    pub fn logical_viewport_rect(&self, design_width: i32) -> WindowRect {
        let viewport = self.viewport_rect();
        let scale = canvas_scale(f64::from(viewport.w), f64::from(design_width));
        logical_viewport(viewport, scale)
    }

    /// Wall-clock milliseconds used for the drag click cooldown.
    pub fn now_ms(&self) -> u64 {
        host_ui::now_ms()
    }

    /// Whether `ev` was dispatched from inside the element with `element_id`.
    pub fn event_within_element(&self, ev: &web_sys::MouseEvent, element_id: &str) -> bool {
        host_ui::event_within_element(ev, element_id)
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::ScheduleDragCooldownExpiry { delay_ms } => {
                let host = *self;
                set_timeout(
                    move || {
                        runtime.dispatch_action(DesktopAction::ExpireDragCooldown {
                            now_ms: host.now_ms(),
                        });
                    },
                    Duration::from_millis(u64::from(delay_ms)),
                );
            }
            RuntimeEffect::FocusLightbox => host_ui::focus_element_by_id(LIGHTBOX_DOM_ID),
        }
    }
}
