use std::fmt;

use serde::{Deserialize, Serialize};

use crate::drag::DragGesture;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Stable string identifier of a desktop window (`"profile"`, `"project-p1"`, ...).
pub struct WindowId(pub String);

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id of the window that presents catalog project `project_id`.
    pub fn for_project(project_id: &str) -> Self {
        Self(format!("project-{project_id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// DOM id of the window's root element, used for outside-click detection.
    pub fn dom_id(&self) -> String {
        format!("desktop-window-{}", self.0)
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// What a window renders. Project windows hold a lookup key into the catalog.
pub enum WindowKind {
    Profile,
    Awards,
    Contact,
    Experience,
    Location,
    Project { project_id: String },
}

impl WindowKind {
    pub fn is_project(&self) -> bool {
        matches!(self, Self::Project { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Top-left corner in logical canvas coordinates.
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub w: i32,
    pub h: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn at(position: WindowPosition, size: WindowSize) -> Self {
        Self {
            x: position.x,
            y: position.y,
            w: size.w,
            h: size.h,
        }
    }

    pub fn right(self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(self) -> i32 {
        self.y + self.h
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One managed window. Records are created once at startup and never removed.
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    pub kind: WindowKind,
    pub is_open: bool,
    pub is_minimized: bool,
    pub is_expanded: bool,
    pub z_index: u32,
    pub position: WindowPosition,
    pub size: WindowSize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// The full window collection plus the overlay state that gates outside-click handling.
pub struct DesktopState {
    pub windows: Vec<WindowRecord>,
    /// Media path shown in the full-screen lightbox, if open.
    pub lightbox: Option<String>,
}

impl DesktopState {
    pub fn window(&self, window_id: &WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.id == window_id)
    }

    /// Mutable access to an open window; closed windows accept no further operations.
    pub fn open_window_mut(&mut self, window_id: &WindowId) -> Option<&mut WindowRecord> {
        self.windows
            .iter_mut()
            .find(|w| &w.id == window_id && w.is_open)
    }

    /// Largest stacking key across every record, open or closed.
    pub fn max_z_index(&self) -> u32 {
        self.windows.iter().map(|w| w.z_index).max().unwrap_or(0)
    }

    /// Open window currently holding the highest stacking key.
    pub fn top_window_id(&self) -> Option<&WindowId> {
        self.windows
            .iter()
            .filter(|w| w.is_open)
            .max_by_key(|w| w.z_index)
            .map(|w| &w.id)
    }

    pub fn open_count(&self) -> usize {
        self.windows.iter().filter(|w| w.is_open).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Pointer location in browser client pixels.
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Transient pointer state kept apart from the window collection.
pub struct InteractionState {
    pub drag: DragGesture,
}
