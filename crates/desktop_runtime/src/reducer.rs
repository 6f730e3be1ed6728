//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use crate::{
    config::DesktopConfig,
    geometry::{canvas_drag_limit, effective_rect},
    model::{DesktopState, InteractionState, PointerPosition, WindowId, WindowPosition, WindowRect},
    window_manager,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Raise a window to the top of the stack.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Close a window for the rest of the session.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Minimize or restore a window.
    ToggleMinimize {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Expand or collapse a window.
    ToggleExpand {
        /// Window to toggle.
        window_id: WindowId,
        /// Target expanded state.
        expand: bool,
        /// Visible viewport in logical canvas units, used to place an expanding window.
        viewport: WindowRect,
    },
    /// Move a window to an explicit logical position.
    MoveWindow {
        /// Window to move.
        window_id: WindowId,
        /// New top-left corner.
        position: WindowPosition,
    },
    /// Begin dragging a window by its title bar.
    BeginDrag {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
        /// Canvas scale at drag start.
        scale: f64,
    },
    /// Update an in-progress drag.
    UpdateDrag {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Release the active drag and start the click cooldown.
    EndDrag {
        /// Host clock at release.
        now_ms: u64,
    },
    /// Leave the click cooldown if it has elapsed.
    ExpireDragCooldown {
        /// Host clock when the expiry timer fired.
        now_ms: u64,
    },
    /// A window body was clicked.
    ActivateWindowBody {
        /// Clicked window.
        window_id: WindowId,
        /// Host clock at the click.
        now_ms: u64,
        /// Visible viewport in logical canvas units.
        viewport: WindowRect,
    },
    /// A pointer press landed outside an expanded window.
    DismissExpanded {
        /// Expanded window to collapse.
        window_id: WindowId,
    },
    /// Show media full-screen.
    OpenLightbox {
        /// Media path to display.
        src: String,
    },
    /// Hide the lightbox.
    CloseLightbox,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Dispatch [`DesktopAction::ExpireDragCooldown`] after `delay_ms`.
    ScheduleDragCooldownExpiry {
        /// Delay before the expiry check.
        delay_ms: u32,
    },
    /// Move keyboard focus into the lightbox so Escape reaches it.
    FocusLightbox,
}

/// Applies a [`DesktopAction`] and collects the side effects it requests.
///
/// Actions that reference unknown or closed windows leave both states untouched and emit nothing.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    config: &DesktopConfig,
    action: DesktopAction,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::FocusWindow { window_id } => {
            window_manager::focus(state, &window_id);
        }
        DesktopAction::CloseWindow { window_id } => {
            if window_manager::close(state, &window_id)
                && interaction.drag.dragged_window() == Some(&window_id)
            {
                interaction.drag = Default::default();
            }
        }
        DesktopAction::ToggleMinimize { window_id } => {
            window_manager::toggle_minimize(state, &window_id);
        }
        DesktopAction::ToggleExpand {
            window_id,
            expand,
            viewport,
        } => {
            window_manager::toggle_expand(state, &window_id, expand, viewport, config);
        }
        DesktopAction::MoveWindow {
            window_id,
            position,
        } => {
            window_manager::move_to(state, &window_id, position);
        }
        DesktopAction::BeginDrag {
            window_id,
            pointer,
            scale,
        } => {
            let Some(position) = state
                .window(&window_id)
                .filter(|w| w.is_open)
                .map(|w| w.position)
            else {
                return effects;
            };
            window_manager::focus(state, &window_id);
            interaction.drag.begin(window_id, pointer, position, scale);
        }
        DesktopAction::UpdateDrag { pointer } => {
            let limit = interaction
                .drag
                .dragged_window()
                .and_then(|id| state.window(id))
                .map(|w| canvas_drag_limit(effective_rect(w, config), config));
            if let Some(limit) = limit {
                if let Some((window_id, position)) = interaction.drag.update(pointer, limit) {
                    window_manager::move_to(state, &window_id, position);
                }
            }
        }
        DesktopAction::EndDrag { now_ms } => {
            if let Some((window_id, position)) =
                interaction.drag.end(now_ms, config.drag_click_cooldown_ms)
            {
                window_manager::move_to(state, &window_id, position);
                effects.push(RuntimeEffect::ScheduleDragCooldownExpiry {
                    delay_ms: config.drag_click_cooldown_ms,
                });
            }
        }
        DesktopAction::ExpireDragCooldown { now_ms } => {
            interaction.drag.expire(now_ms);
        }
        DesktopAction::ActivateWindowBody {
            window_id,
            now_ms,
            viewport,
        } => {
            window_manager::activate_body(
                state,
                &interaction.drag,
                &window_id,
                now_ms,
                viewport,
                config,
            );
        }
        DesktopAction::DismissExpanded { window_id } => {
            window_manager::dismiss_expanded(state, &window_id);
        }
        DesktopAction::OpenLightbox { src } => {
            state.lightbox = Some(src);
            effects.push(RuntimeEffect::FocusLightbox);
        }
        DesktopAction::CloseLightbox => {
            state.lightbox = None;
        }
    }

    effects
}
