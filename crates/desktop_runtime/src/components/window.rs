use super::*;
use crate::{
    geometry::{effective_rect, window_style},
    model::WindowKind,
};
use system_ui::{
    Icon, IconName, IconSize, Text, TextRole, WindowBody, WindowControlButton, WindowControls,
    WindowFrame, WindowTitle, WindowTitleBar,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use super::{content::StaticWindowContent, project::ProjectWindowContent};

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

#[cfg(target_arch = "wasm32")]
fn pressed_window_control(ev: &web_sys::PointerEvent) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest("button").ok().flatten())
        .is_some()
}

#[cfg(not(target_arch = "wasm32"))]
fn pressed_window_control(_: &web_sys::PointerEvent) -> bool {
    false
}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let config = runtime.config.get_value();
    let dom_id = window_id.dom_id();
    let id = store_value(window_id);

    let window = create_memo(move |_| {
        runtime
            .state
            .with(|state| id.with_value(|id| state.window(id).cloned()))
    });
    let focused = Signal::derive(move || {
        runtime
            .state
            .with(|state| id.with_value(|id| is_top_window(state, id)))
    });
    let dragging = Signal::derive(move || {
        runtime
            .interaction
            .with(|ui| id.with_value(|id| ui.drag.dragged_window() == Some(id)))
    });
    let minimized =
        Signal::derive(move || window.with(|w| w.as_ref().is_some_and(|w| w.is_minimized)));
    let expanded =
        Signal::derive(move || window.with(|w| w.as_ref().is_some_and(|w| w.is_expanded)));
    let style = Signal::derive(move || {
        window.with(|w| {
            w.as_ref()
                .map(|w| window_style(effective_rect(w, &config), w.z_index))
                .unwrap_or_default()
        })
    });
    let title = Signal::derive(move || {
        window.with(|w| w.as_ref().map(|w| w.title.clone()).unwrap_or_default())
    });

    let focus = Callback::new(move |_: web_sys::PointerEvent| {
        if !focused.get_untracked() {
            runtime.dispatch_action(DesktopAction::FocusWindow {
                window_id: id.get_value(),
            });
        }
    });
    let begin_move = Callback::new(move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) || pressed_window_control(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::BeginDrag {
            window_id: id.get_value(),
            pointer: pointer_from_pointer_event(&ev),
            scale: current_scale(runtime),
        });
    });
    let minimize = Callback::new(move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::ToggleMinimize {
            window_id: id.get_value(),
        });
    });
    let close = Callback::new(move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::CloseWindow {
            window_id: id.get_value(),
        });
    });
    let activate = Callback::new(move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(DesktopAction::ActivateWindowBody {
            window_id: id.get_value(),
            now_ms: runtime.host.get_value().now_ms(),
            viewport: runtime.logical_viewport(),
        });
    });

    let kind = window.with_untracked(|w| w.as_ref().map(|w| w.kind.clone()));

    view! {
        <WindowFrame
            id=dom_id
            style=style
            aria_label=title
            focused=focused
            minimized=minimized
            expanded=expanded
            dragging=dragging
            on_pointerdown=focus
        >
            <WindowTitleBar on_pointerdown=begin_move>
                <WindowTitle>
                    <Text role=TextRole::Label>{move || title.get()}</Text>
                </WindowTitle>
                <WindowControls>
                    <WindowControlButton
                        aria_label=Signal::derive(move || {
                            let label = if minimized.get() {
                                "Restore window"
                            } else {
                                "Minimize window"
                            };
                            label.to_string()
                        })
                        on_click=minimize
                    >
                        {move || {
                            let icon = if minimized.get() {
                                IconName::WindowRestore
                            } else {
                                IconName::WindowMinimize
                            };
                            view! { <Icon icon size=IconSize::Xs /> }
                        }}
                    </WindowControlButton>
                    <WindowControlButton
                        aria_label="Close window"
                        on_click=close
                    >
                        <Icon icon=IconName::Dismiss size=IconSize::Xs />
                    </WindowControlButton>
                </WindowControls>
            </WindowTitleBar>
            <WindowBody hidden=minimized on_click=activate>
                {kind.map(|kind| window_content(kind, id.get_value(), expanded))}
            </WindowBody>
        </WindowFrame>
    }
}

fn window_content(kind: WindowKind, window_id: WindowId, expanded: Signal<bool>) -> View {
    match kind {
        WindowKind::Project { project_id } => view! {
            <ProjectWindowContent window_id project_id expanded />
        }
        .into_view(),
        kind => view! { <StaticWindowContent kind /> }.into_view(),
    }
}
