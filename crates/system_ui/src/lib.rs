//! Shared UI primitive library for the portfolio desktop.
//!
//! The crate owns reusable Leptos primitives, a small inline icon set, and the
//! stable `data-ui-*` DOM contract consumed by the desktop stylesheet. Views in
//! the runtime compose these primitives instead of emitting ad hoc control
//! markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Badge, Button, ButtonSize, ButtonVariant, CanvasLabel, DesktopBackdrop, DesktopCanvas,
    DesktopRoot, DesktopWindowLayer, EmptyState, GalleryNav, Heading, MediaPlaceholder, Overlay,
    TagList, Text, TextRole, TextTone, WindowBody, WindowControlButton, WindowControls,
    WindowFrame, WindowTitle, WindowTitleBar,
};
