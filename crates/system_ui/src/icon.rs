//! Inline SVG icon set used by window chrome and gallery controls.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Named icons available to shared primitives.
pub enum IconName {
    /// Title bar minimize glyph.
    WindowMinimize,
    /// Title bar restore glyph for minimized windows.
    WindowRestore,
    /// Close/dismiss glyph.
    Dismiss,
    /// Previous item.
    ChevronLeft,
    /// Next item.
    ChevronRight,
    /// Email link.
    Mail,
    /// External profile link.
    Link,
}

impl IconName {
    /// Stable token written to `data-ui-icon`.
    pub fn token(self) -> &'static str {
        match self {
            Self::WindowMinimize => "window-minimize",
            Self::WindowRestore => "window-restore",
            Self::Dismiss => "dismiss",
            Self::ChevronLeft => "chevron-left",
            Self::ChevronRight => "chevron-right",
            Self::Mail => "mail",
            Self::Link => "link",
        }
    }

    fn path(self) -> &'static str {
        match self {
            Self::WindowMinimize => "M4 12h16",
            Self::WindowRestore => "M5 5h14v14H5z",
            Self::Dismiss => "M6 6l12 12M18 6L6 18",
            Self::ChevronLeft => "M15 5l-7 7 7 7",
            Self::ChevronRight => "M9 5l7 7-7 7",
            Self::Mail => "M3 6h18v12H3zM3 6l9 7 9-7",
            Self::Link => "M10 14l4-4M8 16a3 3 0 010-4l2-2M16 8a3 3 0 010 4l-2 2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon sizing tokens.
pub enum IconSize {
    /// 12px.
    Xs,
    /// 16px.
    #[default]
    Sm,
    /// 20px.
    Md,
    /// 28px.
    Lg,
}

impl IconSize {
    /// Edge length in CSS pixels.
    pub fn px(self) -> u32 {
        match self {
            Self::Xs => 12,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 28,
        }
    }
}

#[component]
/// Renders a stroked inline SVG icon. Icons are decorative and hidden from assistive tech.
pub fn Icon(icon: IconName, #[prop(optional)] size: IconSize) -> impl IntoView {
    let px = size.px();
    view! {
        <svg
            width=px
            height=px
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
        >
            <path d=icon.path() />
        </svg>
    }
}
