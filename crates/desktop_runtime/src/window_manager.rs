//! Window-manager transitions over [`DesktopState`].
//!
//! Every operation is total: unknown ids and closed windows are no-ops. Each returns `true` when
//! the collection changed so callers can skip redundant signal writes.

use crate::{
    config::DesktopConfig,
    drag::DragGesture,
    geometry::smart_place,
    model::{DesktopState, WindowId, WindowPosition, WindowRect},
};

/// Raises `window_id` above every other record, open or closed.
///
/// When the stack has run out of headroom it is first renumbered by [`normalize_window_stack`].
pub fn focus(state: &mut DesktopState, window_id: &WindowId) -> bool {
    if state.window(window_id).filter(|w| w.is_open).is_none() {
        return false;
    }
    if state.max_z_index() == u32::MAX {
        normalize_window_stack(state);
    }
    let next_z = state.max_z_index() + 1;
    let Some(window) = state.open_window_mut(window_id) else {
        return false;
    };
    window.z_index = next_z;
    true
}

/// Renumbers every record to `1..=n`, keeping the current stacking order.
///
/// Ties keep collection order, matching [`crate::geometry::render_order`].
pub fn normalize_window_stack(state: &mut DesktopState) {
    let mut order: Vec<usize> = (0..state.windows.len()).collect();
    order.sort_by_key(|&idx| state.windows[idx].z_index);
    for (rank, idx) in order.into_iter().enumerate() {
        state.windows[idx].z_index = rank as u32 + 1;
    }
}

/// Closes `window_id` for the rest of the session. Other fields are left as they were.
pub fn close(state: &mut DesktopState, window_id: &WindowId) -> bool {
    let Some(window) = state.open_window_mut(window_id) else {
        return false;
    };
    window.is_open = false;
    true
}

/// Flips the minimized flag. Minimizing also collapses an expanded window.
pub fn toggle_minimize(state: &mut DesktopState, window_id: &WindowId) -> bool {
    let Some(window) = state.open_window_mut(window_id) else {
        return false;
    };
    window.is_minimized = !window.is_minimized;
    if window.is_minimized {
        window.is_expanded = false;
    }
    true
}

/// Sets the expanded flag.
///
/// Expanding a minimized window is a no-op; it has to be restored first. Expanding also focuses the window and clamps its position so the expanded footprint fits
/// `viewport` (logical units) inset by the configured edge padding. Collapsing keeps the position.
pub fn toggle_expand(
    state: &mut DesktopState,
    window_id: &WindowId,
    expand: bool,
    viewport: WindowRect,
    config: &DesktopConfig,
) -> bool {
    let Some(window) = state.open_window_mut(window_id) else {
        return false;
    };
    if expand && window.is_minimized {
        return false;
    }
    window.is_expanded = expand;
    if !expand {
        return true;
    }

    window.position = smart_place(
        window.position,
        config.expanded_size(),
        viewport,
        config.edge_padding,
    );
    focus(state, window_id)
}

/// Moves `window_id` to `position` without clamping.
pub fn move_to(state: &mut DesktopState, window_id: &WindowId, position: WindowPosition) -> bool {
    let Some(window) = state.open_window_mut(window_id) else {
        return false;
    };
    if window.position == position {
        return false;
    }
    window.position = position;
    true
}

/// Handles a click on a window body: focus, then expand collapsed project windows.
///
/// Ignored while a drag is active or its click cooldown has not elapsed.
pub fn activate_body(
    state: &mut DesktopState,
    drag: &DragGesture,
    window_id: &WindowId,
    now_ms: u64,
    viewport: WindowRect,
    config: &DesktopConfig,
) -> bool {
    if drag.suppresses_click(now_ms) {
        return false;
    }
    let Some(window) = state.window(window_id).filter(|w| w.is_open) else {
        return false;
    };
    let expands = window.kind.is_project() && !window.is_expanded && !window.is_minimized;

    let focused = focus(state, window_id);
    if expands {
        toggle_expand(state, window_id, true, viewport, config)
    } else {
        focused
    }
}

/// Collapses `window_id` after a pointer press outside it.
///
/// Suppressed while the lightbox is open, since the lightbox sits outside every window.
pub fn dismiss_expanded(state: &mut DesktopState, window_id: &WindowId) -> bool {
    if state.lightbox.is_some() {
        return false;
    }
    let Some(window) = state.open_window_mut(window_id) else {
        return false;
    };
    if !window.is_expanded {
        return false;
    }
    window.is_expanded = false;
    true
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{PointerPosition, WindowKind, WindowRecord, WindowSize};

    const VIEWPORT: WindowRect = WindowRect {
        x: 0,
        y: 0,
        w: 1024,
        h: 768,
    };

    fn record(id: &str, kind: WindowKind, z_index: u32) -> WindowRecord {
        WindowRecord {
            id: WindowId::from(id),
            title: id.to_string(),
            kind,
            is_open: true,
            is_minimized: false,
            is_expanded: false,
            z_index,
            position: WindowPosition { x: 900, y: 600 },
            size: WindowSize { w: 320, h: 240 },
        }
    }

    fn project(id: &str, z_index: u32) -> WindowRecord {
        record(
            id,
            WindowKind::Project {
                project_id: id.to_string(),
            },
            z_index,
        )
    }

    fn state() -> DesktopState {
        DesktopState {
            windows: vec![
                record("profile", WindowKind::Profile, 10),
                project("p1", 1),
                project("p2", 2),
            ],
            lightbox: None,
        }
    }

    fn id(raw: &str) -> WindowId {
        WindowId::from(raw)
    }

    #[test]
    fn unknown_ids_leave_state_unchanged() {
        let mut state = state();
        let before = state.clone();
        let ghost = id("ghost");
        let config = DesktopConfig::default();

        assert!(!focus(&mut state, &ghost));
        assert!(!close(&mut state, &ghost));
        assert!(!toggle_minimize(&mut state, &ghost));
        assert!(!toggle_expand(&mut state, &ghost, true, VIEWPORT, &config));
        assert!(!move_to(&mut state, &ghost, WindowPosition { x: 1, y: 1 }));
        assert!(!dismiss_expanded(&mut state, &ghost));
        assert_eq!(state, before);
    }

    #[test]
    fn focus_yields_strict_maximum_including_closed_windows() {
        let mut state = state();
        state.windows[0].is_open = false;
        state.windows[0].z_index = 50;

        assert!(focus(&mut state, &id("p1")));
        let p1 = state.window(&id("p1")).expect("p1");
        assert_eq!(p1.z_index, 51);
        assert!(state
            .windows
            .iter()
            .filter(|w| w.id != p1.id)
            .all(|w| w.z_index < p1.z_index));
    }

    #[test]
    fn closed_windows_reject_every_operation() {
        let mut state = state();
        assert!(close(&mut state, &id("p1")));
        let before = state.clone();
        let config = DesktopConfig::default();

        assert!(!close(&mut state, &id("p1")));
        assert!(!focus(&mut state, &id("p1")));
        assert!(!toggle_minimize(&mut state, &id("p1")));
        assert!(!toggle_expand(&mut state, &id("p1"), true, VIEWPORT, &config));
        assert!(!move_to(&mut state, &id("p1"), WindowPosition { x: 0, y: 0 }));
        assert_eq!(state, before);
    }

    #[test]
    fn minimize_collapses_and_second_toggle_keeps_expanded_flag() {
        let mut state = state();
        state.windows[1].is_expanded = true;

        assert!(toggle_minimize(&mut state, &id("p1")));
        let p1 = state.window(&id("p1")).expect("p1");
        assert!(p1.is_minimized);
        assert!(!p1.is_expanded);

        assert!(toggle_minimize(&mut state, &id("p1")));
        let p1 = state.window(&id("p1")).expect("p1");
        assert!(!p1.is_minimized);
        assert!(!p1.is_expanded);
    }

    #[test]
    fn expand_focuses_and_places_then_collapse_keeps_position() {
        let mut state = state();
        let config = DesktopConfig::default();

        assert!(toggle_expand(&mut state, &id("p1"), true, VIEWPORT, &config));
        let p1 = state.window(&id("p1")).expect("p1").clone();
        assert!(p1.is_expanded);
        assert_eq!(p1.position, WindowPosition { x: 204, y: 148 });
        assert_eq!(state.top_window_id(), Some(&id("p1")));

        assert!(toggle_expand(&mut state, &id("p1"), false, VIEWPORT, &config));
        let collapsed = state.window(&id("p1")).expect("p1");
        assert!(!collapsed.is_expanded);
        assert_eq!(collapsed.position, p1.position);
    }

    #[test]
    fn expanding_a_minimized_window_is_ignored() {
        let mut state = state();
        let config = DesktopConfig::default();
        toggle_minimize(&mut state, &id("p1"));
        let before = state.clone();

        assert!(!toggle_expand(&mut state, &id("p1"), true, VIEWPORT, &config));
        assert_eq!(state, before);
        let p1 = state.window(&id("p1")).expect("p1");
        assert!(p1.is_minimized);
        assert!(!p1.is_expanded);
    }

    #[test]
    fn focus_renumbers_a_saturated_stack() {
        let mut state = state();
        state.windows[0].z_index = u32::MAX;
        state.windows[2].is_open = false;

        assert!(focus(&mut state, &id("p1")));
        let z: Vec<u32> = state.windows.iter().map(|w| w.z_index).collect();
        assert_eq!(z, vec![3, 4, 2]);
        assert_eq!(state.top_window_id(), Some(&id("p1")));
    }

    #[test]
    fn normalize_keeps_order_and_breaks_ties_by_collection_order() {
        let mut state = state();
        state.windows[0].z_index = 7;
        state.windows[1].z_index = 7;
        state.windows[2].z_index = 2;

        normalize_window_stack(&mut state);
        let z: Vec<u32> = state.windows.iter().map(|w| w.z_index).collect();
        assert_eq!(z, vec![2, 3, 1]);
    }

    #[test]
    fn move_to_reports_no_change_for_same_position() {
        let mut state = state();
        assert!(!move_to(&mut state, &id("p2"), WindowPosition { x: 900, y: 600 }));
        assert!(move_to(&mut state, &id("p2"), WindowPosition { x: -40, y: 5 }));
        assert_eq!(
            state.window(&id("p2")).expect("p2").position,
            WindowPosition { x: -40, y: 5 }
        );
    }

    #[test]
    fn body_click_expands_collapsed_project_only() {
        let mut state = state();
        let config = DesktopConfig::default();
        let idle = DragGesture::Idle;

        assert!(activate_body(&mut state, &idle, &id("profile"), 0, VIEWPORT, &config));
        assert!(!state.window(&id("profile")).expect("profile").is_expanded);
        assert_eq!(state.top_window_id(), Some(&id("profile")));

        assert!(activate_body(&mut state, &idle, &id("p2"), 0, VIEWPORT, &config));
        assert!(state.window(&id("p2")).expect("p2").is_expanded);
        assert_eq!(state.top_window_id(), Some(&id("p2")));
    }

    #[test]
    fn body_click_leaves_minimized_project_collapsed() {
        let mut state = state();
        let config = DesktopConfig::default();
        toggle_minimize(&mut state, &id("p1"));

        assert!(activate_body(
            &mut state,
            &DragGesture::Idle,
            &id("p1"),
            0,
            VIEWPORT,
            &config
        ));
        assert!(!state.window(&id("p1")).expect("p1").is_expanded);
    }

    #[test]
    fn body_click_is_ignored_during_drag_and_cooldown() {
        let mut state = state();
        let config = DesktopConfig::default();
        let before = state.clone();

        let mut drag = DragGesture::Idle;
        drag.begin(
            id("p1"),
            PointerPosition { x: 0, y: 0 },
            WindowPosition { x: 900, y: 600 },
            1.0,
        );
        assert!(!activate_body(&mut state, &drag, &id("p1"), 0, VIEWPORT, &config));

        drag.end(100, config.drag_click_cooldown_ms);
        assert!(!activate_body(&mut state, &drag, &id("p1"), 120, VIEWPORT, &config));
        assert_eq!(state, before);

        assert!(activate_body(&mut state, &drag, &id("p1"), 150, VIEWPORT, &config));
    }

    #[test]
    fn dismiss_collapses_unless_lightbox_is_open() {
        let mut state = state();
        state.windows[1].is_expanded = true;
        state.lightbox = Some("/projects/p1/p1-1.jpg".to_string());

        assert!(!dismiss_expanded(&mut state, &id("p1")));
        assert!(state.window(&id("p1")).expect("p1").is_expanded);

        state.lightbox = None;
        assert!(dismiss_expanded(&mut state, &id("p1")));
        assert!(!state.window(&id("p1")).expect("p1").is_expanded);
        assert!(!dismiss_expanded(&mut state, &id("p1")));
    }
}
