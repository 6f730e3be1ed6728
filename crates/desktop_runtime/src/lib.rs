//! Desktop window manager for the portfolio site: window state, the reducer that drives it, and
//! the Leptos shell that renders it onto a scaled design canvas.

pub mod components;
pub mod config;
pub mod drag;
mod effect_executor;
pub mod geometry;
pub mod host;
pub mod layout;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::{ConfigError, DesktopConfig};
pub use layout::initial_desktop_state;
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
