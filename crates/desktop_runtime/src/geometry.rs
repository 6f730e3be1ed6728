//! Pure projections from window records to rendered geometry.
//!
//! Nothing here mutates state; views recompute these on every render.

use crate::{
    config::DesktopConfig,
    model::{DesktopState, WindowPosition, WindowRecord, WindowRect, WindowSize},
};

/// Rectangle a window occupies on the canvas given its current flags.
///
/// Minimized windows collapse to the title bar and keep the width they would otherwise have.
pub fn effective_rect(record: &WindowRecord, config: &DesktopConfig) -> WindowRect {
    let size = if record.is_expanded {
        config.expanded_size()
    } else {
        record.size
    };
    let h = if record.is_minimized {
        config.title_bar_height
    } else {
        size.h
    };
    WindowRect::at(record.position, WindowSize { w: size.w, h })
}

/// Open windows in paint order (lowest `z_index` first). Ties keep collection order.
pub fn render_order(state: &DesktopState) -> Vec<&WindowRecord> {
    let mut open: Vec<&WindowRecord> = state.windows.iter().filter(|w| w.is_open).collect();
    open.sort_by_key(|w| w.z_index);
    open
}

/// Uniform canvas scale for a viewport: `min(viewport / design, 1)`.
///
/// Non-positive or non-finite inputs yield `1.0`.
pub fn canvas_scale(viewport_width: f64, design_width: f64) -> f64 {
    if !(viewport_width.is_finite() && design_width.is_finite())
        || viewport_width <= 0.0
        || design_width <= 0.0
    {
        return 1.0;
    }
    (viewport_width / design_width).min(1.0)
}

/// Converts a browser-pixel viewport into logical canvas units at `scale`.
pub fn logical_viewport(viewport_px: WindowRect, scale: f64) -> WindowRect {
    if !(scale.is_finite() && scale > 0.0) {
        return viewport_px;
    }
    let to_logical = |value: i32| (f64::from(value) / scale).round() as i32;
    WindowRect {
        x: to_logical(viewport_px.x),
        y: to_logical(viewport_px.y),
        w: to_logical(viewport_px.w),
        h: to_logical(viewport_px.h),
    }
}

/// Clamps `position` so a `footprint`-sized box stays within the viewport inset by `padding`.
///
/// Positions already inside are returned unchanged. When the viewport is too small for the
/// footprint on an axis, that axis pins to the padding edge.
pub fn smart_place(
    position: WindowPosition,
    footprint: WindowSize,
    viewport: WindowRect,
    padding: i32,
) -> WindowPosition {
    let min_x = viewport.x + padding;
    let min_y = viewport.y + padding;
    let max_x = viewport.right() - padding - footprint.w;
    let max_y = viewport.bottom() - padding - footprint.h;
    WindowPosition {
        x: position.x.min(max_x).max(min_x),
        y: position.y.min(max_y).max(min_y),
    }
}

/// Largest top-left a window of `rect` size may take while staying on the design canvas.
pub fn canvas_drag_limit(rect: WindowRect, config: &DesktopConfig) -> WindowPosition {
    WindowPosition {
        x: (config.design_width - rect.w).max(0),
        y: (config.design_height - rect.h).max(0),
    }
}

/// Inline style for the scaled canvas element.
pub fn canvas_style(scale: f64, config: &DesktopConfig) -> String {
    format!(
        "width:{}px;height:{}px;transform:scale({scale});transform-origin:0 0;",
        config.design_width, config.design_height
    )
}

/// Inline style placing a window at its effective rectangle.
pub fn window_style(rect: WindowRect, z_index: u32) -> String {
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
        rect.x, rect.y, rect.w, rect.h, z_index
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{WindowId, WindowKind};

    fn record(id: &str, z_index: u32) -> WindowRecord {
        WindowRecord {
            id: WindowId::from(id),
            title: id.to_string(),
            kind: WindowKind::Awards,
            is_open: true,
            is_minimized: false,
            is_expanded: false,
            z_index,
            position: WindowPosition { x: 10, y: 20 },
            size: WindowSize { w: 280, h: 310 },
        }
    }

    #[test]
    fn effective_rect_covers_each_mode() {
        let config = DesktopConfig::default();
        let mut win = record("a", 1);
        assert_eq!(
            effective_rect(&win, &config),
            WindowRect {
                x: 10,
                y: 20,
                w: 280,
                h: 310
            }
        );

        win.is_expanded = true;
        assert_eq!(effective_rect(&win, &config).w, 800);
        assert_eq!(effective_rect(&win, &config).h, 600);

        win.is_expanded = false;
        win.is_minimized = true;
        assert_eq!(
            effective_rect(&win, &config),
            WindowRect {
                x: 10,
                y: 20,
                w: 280,
                h: 40
            }
        );
    }

    #[test]
    fn render_order_skips_closed_and_keeps_ties_stable() {
        let mut closed = record("closed", 99);
        closed.is_open = false;
        let state = DesktopState {
            windows: vec![record("b", 10), closed, record("a", 1), record("c", 10)],
            lightbox: None,
        };
        let ids: Vec<&str> = render_order(&state)
            .into_iter()
            .map(|w| w.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn canvas_scale_never_exceeds_one() {
        assert_eq!(canvas_scale(1160.0, 2320.0), 0.5);
        assert_eq!(canvas_scale(3000.0, 2320.0), 1.0);
        assert_eq!(canvas_scale(0.0, 2320.0), 1.0);
        assert_eq!(canvas_scale(1000.0, -1.0), 1.0);
        assert_eq!(canvas_scale(f64::NAN, 2320.0), 1.0);
    }

    #[test]
    fn logical_viewport_undoes_scale() {
        let px = WindowRect {
            x: 0,
            y: 0,
            w: 1160,
            h: 700,
        };
        assert_eq!(
            logical_viewport(px, 0.5),
            WindowRect {
                x: 0,
                y: 0,
                w: 2320,
                h: 1400
            }
        );
        assert_eq!(logical_viewport(px, 0.0), px);
    }

    #[test]
    fn smart_place_clamps_overflow_and_keeps_inside_positions() {
        let viewport = WindowRect {
            x: 0,
            y: 0,
            w: 1024,
            h: 768,
        };
        let footprint = WindowSize { w: 800, h: 600 };
        assert_eq!(
            smart_place(WindowPosition { x: 900, y: 600 }, footprint, viewport, 20),
            WindowPosition { x: 204, y: 148 }
        );
        assert_eq!(
            smart_place(WindowPosition { x: 100, y: 50 }, footprint, viewport, 20),
            WindowPosition { x: 100, y: 50 }
        );
        assert_eq!(
            smart_place(WindowPosition { x: -50, y: 0 }, footprint, viewport, 20),
            WindowPosition { x: 20, y: 20 }
        );
    }

    #[test]
    fn smart_place_pins_to_padding_when_viewport_is_too_small() {
        let viewport = WindowRect {
            x: 0,
            y: 0,
            w: 600,
            h: 400,
        };
        assert_eq!(
            smart_place(
                WindowPosition { x: 300, y: 300 },
                WindowSize { w: 800, h: 600 },
                viewport,
                20
            ),
            WindowPosition { x: 20, y: 20 }
        );
    }

    #[test]
    fn styles_render_pixels() {
        let config = DesktopConfig::default();
        assert_eq!(
            canvas_style(0.5, &config),
            "width:2320px;height:1400px;transform:scale(0.5);transform-origin:0 0;"
        );
        assert_eq!(
            window_style(
                WindowRect {
                    x: 1,
                    y: 2,
                    w: 3,
                    h: 4
                },
                7
            ),
            "left:1px;top:2px;width:3px;height:4px;z-index:7;"
        );
    }
}
