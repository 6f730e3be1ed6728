use desktop_runtime::{
    geometry::render_order, initial_desktop_state, reduce_desktop, window_manager, DesktopAction,
    DesktopConfig, DesktopState, InteractionState, PointerPosition, RuntimeEffect, WindowId,
    WindowPosition, WindowRect,
};
use pretty_assertions::assert_eq;

const LAPTOP: WindowRect = WindowRect {
    x: 0,
    y: 0,
    w: 1024,
    h: 768,
};

fn desktop() -> DesktopState {
    let catalog = portfolio_content::load_catalog().expect("bundled catalog");
    initial_desktop_state(&catalog, &DesktopConfig::default())
}

#[test]
fn closing_focusing_and_expanding_keep_the_stack_consistent() {
    let config = DesktopConfig::default();
    let mut state = desktop();
    assert_eq!(render_order(&state).len(), 15);

    assert!(window_manager::close(&mut state, &WindowId::from("awards")));
    assert_eq!(render_order(&state).len(), 14);

    let p1 = WindowId::for_project("p1");
    assert!(window_manager::focus(&mut state, &p1));
    let p1_z = state.window(&p1).expect("p1 window").z_index;
    assert!(state
        .windows
        .iter()
        .filter(|w| w.id != p1)
        .all(|w| w.z_index < p1_z));
    let awards = state.window(&WindowId::from("awards")).expect("awards window");
    assert!(!awards.is_open);
    assert!(awards.z_index < p1_z);

    window_manager::move_to(&mut state, &p1, WindowPosition { x: 900, y: 600 });
    assert!(window_manager::toggle_expand(
        &mut state, &p1, true, LAPTOP, &config
    ));
    let window = state.window(&p1).expect("p1 window");
    assert!(window.is_expanded);
    assert_eq!(window.position, WindowPosition { x: 204, y: 148 });
    assert_eq!(render_order(&state).last().map(|w| &w.id), Some(&p1));
}

#[test]
fn drag_then_click_expands_only_after_cooldown() {
    let config = DesktopConfig::default();
    let mut state = desktop();
    let mut ui = InteractionState::default();
    let p2 = WindowId::for_project("p2");
    let start = state.window(&p2).expect("p2 window").position;

    reduce_desktop(
        &mut state,
        &mut ui,
        &config,
        DesktopAction::BeginDrag {
            window_id: p2.clone(),
            pointer: PointerPosition { x: 100, y: 100 },
            scale: 1.0,
        },
    );
    reduce_desktop(
        &mut state,
        &mut ui,
        &config,
        DesktopAction::UpdateDrag {
            pointer: PointerPosition { x: 130, y: 90 },
        },
    );
    let effects = reduce_desktop(
        &mut state,
        &mut ui,
        &config,
        DesktopAction::EndDrag { now_ms: 1_000 },
    );
    assert_eq!(
        effects,
        vec![RuntimeEffect::ScheduleDragCooldownExpiry {
            delay_ms: config.drag_click_cooldown_ms
        }]
    );
    let moved = state.window(&p2).expect("p2 window").position;
    assert_eq!(
        moved,
        WindowPosition {
            x: start.x + 30,
            y: start.y - 10
        }
    );

    let click = |now_ms| DesktopAction::ActivateWindowBody {
        window_id: p2.clone(),
        now_ms,
        viewport: LAPTOP,
    };
    reduce_desktop(&mut state, &mut ui, &config, click(1_020));
    assert!(!state.window(&p2).expect("p2 window").is_expanded);

    reduce_desktop(
        &mut state,
        &mut ui,
        &config,
        DesktopAction::ExpireDragCooldown { now_ms: 1_050 },
    );
    reduce_desktop(&mut state, &mut ui, &config, click(1_060));
    assert!(state.window(&p2).expect("p2 window").is_expanded);
}

#[test]
fn outside_press_collapses_unless_lightbox_is_open() {
    let config = DesktopConfig::default();
    let mut state = desktop();
    let mut ui = InteractionState::default();
    let p3 = WindowId::for_project("p3");

    reduce_desktop(
        &mut state,
        &mut ui,
        &config,
        DesktopAction::ToggleExpand {
            window_id: p3.clone(),
            expand: true,
            viewport: LAPTOP,
        },
    );
    let effects = reduce_desktop(
        &mut state,
        &mut ui,
        &config,
        DesktopAction::OpenLightbox {
            src: "media/p3/site.jpg".to_string(),
        },
    );
    assert_eq!(effects, vec![RuntimeEffect::FocusLightbox]);

    reduce_desktop(
        &mut state,
        &mut ui,
        &config,
        DesktopAction::DismissExpanded {
            window_id: p3.clone(),
        },
    );
    assert!(state.window(&p3).expect("p3 window").is_expanded);

    reduce_desktop(&mut state, &mut ui, &config, DesktopAction::CloseLightbox);
    let placed = state.window(&p3).expect("p3 window").position;
    reduce_desktop(
        &mut state,
        &mut ui,
        &config,
        DesktopAction::DismissExpanded {
            window_id: p3.clone(),
        },
    );
    let window = state.window(&p3).expect("p3 window");
    assert!(!window.is_expanded);
    assert_eq!(window.position, placed);
}
