//! Drag gesture tracking and the click debounce that follows a drag.
//!
//! A window body click right after a drag must not be read as "click to expand". The gesture moves
//! through `Idle -> Dragging -> Cooldown -> Idle`, and body clicks are ignored in the middle two
//! states.

use crate::model::{PointerPosition, WindowId, WindowPosition};

#[derive(Debug, Clone, PartialEq)]
/// An active drag of one window.
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub position_start: WindowPosition,
    /// Latest logical position produced by [`DragGesture::update`].
    pub position: WindowPosition,
    /// Canvas scale at drag start; pointer deltas are divided by it.
    pub scale: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragGesture {
    #[default]
    Idle,
    Dragging(DragSession),
    /// Drag released; clicks stay suppressed until `until_ms`.
    Cooldown { until_ms: u64 },
}

impl DragGesture {
    /// Starts dragging `window_id` from its current logical `position`.
    pub fn begin(
        &mut self,
        window_id: WindowId,
        pointer: PointerPosition,
        position: WindowPosition,
        scale: f64,
    ) {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };
        *self = Self::Dragging(DragSession {
            window_id,
            pointer_start: pointer,
            position_start: position,
            position,
            scale,
        });
    }

    /// Tracks pointer movement and returns the dragged window's new logical position.
    ///
    /// The result is clamped to `[0, max]` on each axis so the window stays on the canvas.
    pub fn update(
        &mut self,
        pointer: PointerPosition,
        max: WindowPosition,
    ) -> Option<(WindowId, WindowPosition)> {
        let Self::Dragging(session) = self else {
            return None;
        };
        let dx = f64::from(pointer.x - session.pointer_start.x) / session.scale;
        let dy = f64::from(pointer.y - session.pointer_start.y) / session.scale;
        session.position = WindowPosition {
            x: (session.position_start.x + dx.round() as i32).clamp(0, max.x.max(0)),
            y: (session.position_start.y + dy.round() as i32).clamp(0, max.y.max(0)),
        };
        Some((session.window_id.clone(), session.position))
    }

    /// Releases the drag and enters cooldown. Returns the final position to commit.
    pub fn end(&mut self, now_ms: u64, cooldown_ms: u32) -> Option<(WindowId, WindowPosition)> {
        let Self::Dragging(session) = std::mem::take(self) else {
            return None;
        };
        *self = Self::Cooldown {
            until_ms: now_ms.saturating_add(u64::from(cooldown_ms)),
        };
        Some((session.window_id, session.position))
    }

    /// Returns to `Idle` once the cooldown has elapsed. Returns `true` when the state changed.
    pub fn expire(&mut self, now_ms: u64) -> bool {
        match self {
            Self::Cooldown { until_ms } if now_ms >= *until_ms => {
                *self = Self::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Whether a window body click at `now_ms` should be ignored.
    pub fn suppresses_click(&self, now_ms: u64) -> bool {
        match self {
            Self::Idle => false,
            Self::Dragging(_) => true,
            Self::Cooldown { until_ms } => now_ms < *until_ms,
        }
    }

    pub fn dragged_window(&self) -> Option<&WindowId> {
        match self {
            Self::Dragging(session) => Some(&session.window_id),
            _ => None,
        }
    }
}
