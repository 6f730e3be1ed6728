//! Desktop shell UI composition and interaction surfaces.

mod content;
mod lightbox;
mod loading;
mod project;
mod window;

use std::time::Duration;

use leptos::*;
use system_ui::{CanvasLabel, DesktopBackdrop, DesktopCanvas, DesktopRoot, DesktopWindowLayer};

use self::{lightbox::Lightbox, loading::LoadingSplash, window::DesktopWindow};

use crate::{
    geometry::{canvas_scale, canvas_style, render_order},
    layout::category_headers,
    model::{DesktopState, PointerPosition, WindowId},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

/// Open windows in collection order.
///
/// DOM order stays fixed so moving a window up the stack never re-parents its node (which would
/// drop pointer capture and pause videos). Inline `z-index` then reproduces [`render_order`].
fn mounted_window_ids(state: &DesktopState) -> Vec<WindowId> {
    state
        .windows
        .iter()
        .filter(|w| w.is_open)
        .map(|w| w.id.clone())
        .collect()
}

fn expanded_window_ids(state: &DesktopState) -> Vec<WindowId> {
    state
        .windows
        .iter()
        .filter(|w| w.is_open && w.is_expanded)
        .map(|w| w.id.clone())
        .collect()
}

fn current_scale(runtime: DesktopRuntimeContext) -> f64 {
    let viewport = runtime.host.get_value().viewport_rect();
    let design_width = runtime.config.with_value(|config| config.design_width);
    canvas_scale(f64::from(viewport.w), f64::from(design_width))
}

#[component]
/// Renders the desktop canvas, its windows, and the lightbox once the loading splash has elapsed.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let config = runtime.config.get_value();
    let loading = create_rw_signal(config.loading_splash_ms > 0);
    let scale = create_rw_signal(current_scale(runtime));

    if loading.get_untracked() {
        set_timeout(
            move || loading.set(false),
            Duration::from_millis(u64::from(config.loading_splash_ms)),
        );
    }

    let resize_listener = window_event_listener(ev::resize, move |_| {
        scale.set(current_scale(runtime));
    });
    let outside_press_listener = window_event_listener(ev::pointerdown, move |ev| {
        let host = runtime.host.get_value();
        for window_id in state.with_untracked(expanded_window_ids) {
            if !host.event_within_element(&ev, &window_id.dom_id()) {
                runtime.dispatch_action(DesktopAction::DismissExpanded { window_id });
            }
        }
    });
    on_cleanup(move || {
        resize_listener.remove();
        outside_press_listener.remove();
    });

    let on_pointer_move = Callback::new(move |ev: web_sys::PointerEvent| {
        if runtime.interaction.with_untracked(|ui| ui.drag.is_dragging()) {
            runtime.dispatch_action(DesktopAction::UpdateDrag {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    });
    let on_pointer_end = Callback::new(move |_: web_sys::PointerEvent| {
        if runtime.interaction.with_untracked(|ui| ui.drag.is_dragging()) {
            runtime.dispatch_action(DesktopAction::EndDrag {
                now_ms: runtime.host.get_value().now_ms(),
            });
        }
    });

    let headers = store_value(
        runtime
            .catalog
            .with_value(|catalog| category_headers(catalog, &config)),
    );

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <LoadingSplash /> }>
            <DesktopRoot
                id="desktop-shell-root"
                on_pointermove=on_pointer_move
                on_pointerup=on_pointer_end
            >
                <DesktopBackdrop>
                    <DesktopCanvas style=Signal::derive(move || canvas_style(scale.get(), &config))>
                        {headers
                            .get_value()
                            .into_iter()
                            .map(|header| {
                                view! {
                                    <CanvasLabel style=format!(
                                        "left:{}px;top:{}px;",
                                        header.position.x,
                                        header.position.y
                                    )>
                                        {header.label}
                                    </CanvasLabel>
                                }
                            })
                            .collect_view()}
                        <DesktopWindowLayer>
                            <For
                                each=move || state.with(mounted_window_ids)
                                key=|window_id| window_id.0.clone()
                                let:window_id
                            >
                                <DesktopWindow window_id=window_id />
                            </For>
                        </DesktopWindowLayer>
                    </DesktopCanvas>
                </DesktopBackdrop>
                <Lightbox />
            </DesktopRoot>
        </Show>
    }
}

/// Whether `window_id` currently paints above every other open window.
fn is_top_window(state: &DesktopState, window_id: &WindowId) -> bool {
    render_order(state)
        .last()
        .map(|w| &w.id == window_id)
        .unwrap_or(false)
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}
