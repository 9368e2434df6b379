//! Docking Engine Integration Tests
//!
//! Drives the engine through in-memory windows the way a platform window
//! layer would: every move notification goes through `drag_did_move`, and
//! the returned origin is applied to the subject.

use std::cell::Cell;
use std::rc::Rc;

use amp_docking::{
    DockingConfig, DockingEngine, FrameStore, MemoryFrameStore, MemoryScreen, MemoryWindow,
    PlatformWindow, Rect, Vec2, WindowId, WindowRole,
};

const MAIN: WindowId = 1;
const EQ: WindowId = 2;
const PLAYLIST: WindowId = 3;
const BROWSER: WindowId = 4;

fn engine_on(screen: Rect) -> DockingEngine {
    DockingEngine::new(DockingConfig::default(), Rc::new(MemoryScreen::new(screen)))
}

fn engine() -> DockingEngine {
    engine_on(Rect::new(0.0, 0.0, 1920.0, 1080.0))
}

fn add(engine: &DockingEngine, id: WindowId, role: WindowRole, frame: Rect) -> Rc<MemoryWindow> {
    let window = Rc::new(MemoryWindow::new(frame));
    engine.register_window(id, role, window.clone()).unwrap();
    window
}

/// Move the subject the way the platform does after asking the engine
fn drag_to(engine: &DockingEngine, id: WindowId, window: &MemoryWindow, candidate: Vec2) -> Vec2 {
    let origin = engine.drag_did_move(id, candidate);
    window.move_to(window.frame().with_origin(origin));
    origin
}

/// Main with the equalizer docked directly below it
fn main_and_eq(engine: &DockingEngine) -> (Rc<MemoryWindow>, Rc<MemoryWindow>) {
    let main = add(engine, MAIN, WindowRole::Main, Rect::new(500.0, 500.0, 275.0, 116.0));
    let eq = add(engine, EQ, WindowRole::Equalizer, Rect::new(500.0, 384.0, 275.0, 116.0));
    (main, eq)
}

#[test]
fn test_screen_edge_snap_example() {
    let engine = engine();
    let a = add(&engine, MAIN, WindowRole::Main, Rect::new(100.0, 500.0, 200.0, 100.0));

    engine.drag_will_start(MAIN, true);
    assert_eq!(drag_to(&engine, MAIN, &a, Vec2::new(5.0, 500.0)), Vec2::new(0.0, 500.0));
    engine.drag_did_finish(MAIN);

    assert_eq!(a.frame(), Rect::new(0.0, 500.0, 200.0, 100.0));
    assert!(!engine.is_dragging());
}

#[test]
fn test_edge_to_edge_docking_example() {
    let engine = engine();
    let a = add(&engine, MAIN, WindowRole::Main, Rect::new(800.0, 500.0, 200.0, 100.0));
    let b = add(&engine, PLAYLIST, WindowRole::Playlist, Rect::new(300.0, 500.0, 200.0, 100.0));

    engine.drag_will_start(MAIN, true);
    assert_eq!(drag_to(&engine, MAIN, &a, Vec2::new(498.0, 500.0)), Vec2::new(500.0, 500.0));
    engine.drag_did_finish(MAIN);

    assert_eq!(b.frame_writes(), 0);
    // Now docked: the next drag takes the playlist along
    assert_eq!(engine.docked_group(MAIN), vec![PLAYLIST]);
}

#[test]
fn test_docked_group_moves_together() {
    let engine = engine();
    let (main, eq) = main_and_eq(&engine);

    engine.drag_will_start(MAIN, false);
    assert_eq!(drag_to(&engine, MAIN, &main, Vec2::new(600.0, 600.0)), Vec2::new(600.0, 600.0));
    engine.drag_did_finish(MAIN);

    assert_eq!(eq.frame(), Rect::new(600.0, 484.0, 275.0, 116.0));
    assert_eq!(eq.frame_writes(), 1);
    assert_eq!(eq.animated_writes(), 0);
}

#[test]
fn test_reentrant_notifications_do_not_cascade() {
    let engine = Rc::new(engine());
    let (main, eq) = main_and_eq(&engine);

    // The platform reports every programmatic frame change back as a move
    let callbacks = Rc::new(Cell::new(0usize));
    {
        let engine = Rc::clone(&engine);
        let callbacks = Rc::clone(&callbacks);
        eq.on_frame_change(move |frame| {
            callbacks.set(callbacks.get() + 1);
            let origin = engine.drag_did_move(EQ, frame.origin());
            assert_eq!(origin, frame.origin());
        });
    }

    engine.drag_will_start(MAIN, false);
    for step in 1..=3 {
        let target = Vec2::new(500.0 + 40.0 * step as f32, 500.0);
        drag_to(&engine, MAIN, &main, target);
        assert_eq!(eq.frame_writes(), step);
    }
    engine.drag_did_finish(MAIN);

    assert_eq!(callbacks.get(), 3);
    assert_eq!(eq.frame().origin(), Vec2::new(620.0, 384.0));
    assert!(!engine.is_applying_programmatic_change());
}

#[test]
fn test_rapid_moves_do_not_drift() {
    let engine = engine();
    let (main, eq) = main_and_eq(&engine);

    engine.drag_will_start(MAIN, false);
    for i in 0..1000u32 {
        let candidate = Vec2::new(
            400.0 + ((i * 37) % 300) as f32,
            300.0 + ((i * 53) % 400) as f32,
        );
        let origin = drag_to(&engine, MAIN, &main, candidate);
        assert_eq!(eq.frame().origin(), origin + Vec2::new(0.0, -116.0));
    }
    drag_to(&engine, MAIN, &main, Vec2::new(700.0, 650.0));
    engine.drag_did_finish(MAIN);

    assert_eq!(main.frame(), Rect::new(700.0, 650.0, 275.0, 116.0));
    assert_eq!(eq.frame(), Rect::new(700.0, 534.0, 275.0, 116.0));
    assert_eq!(eq.frame_writes(), 1001);
}

#[test]
fn test_title_bar_drag_undocks_past_threshold() {
    let engine = engine();
    let (main, eq) = main_and_eq(&engine);

    engine.drag_will_start(MAIN, true);

    // 29px from the start: still docked
    drag_to(&engine, MAIN, &main, Vec2::new(529.0, 500.0));
    assert_eq!(eq.frame(), Rect::new(529.0, 384.0, 275.0, 116.0));
    assert_eq!(eq.frame_writes(), 1);

    // 31px from the start: the group is left behind
    let origin = drag_to(&engine, MAIN, &main, Vec2::new(531.0, 500.0));
    assert!(!engine.drag_session().unwrap().has_docked());
    assert_eq!(eq.frame_writes(), 1);

    // The equalizer is now a snap target again; main lines back up with it
    assert_eq!(origin, Vec2::new(529.0, 500.0));
    engine.drag_did_finish(MAIN);
}

#[test]
fn test_interior_drag_never_undocks() {
    let engine = engine();
    let (main, eq) = main_and_eq(&engine);

    engine.drag_will_start(MAIN, false);
    drag_to(&engine, MAIN, &main, Vec2::new(900.0, 700.0));
    engine.drag_did_finish(MAIN);

    assert!(eq.frame_writes() > 0);
    assert_eq!(eq.frame().origin(), Vec2::new(900.0, 584.0));
}

#[test]
fn test_move_without_start_drags_group() {
    let engine = engine();
    let (main, eq) = main_and_eq(&engine);

    drag_to(&engine, MAIN, &main, Vec2::new(600.0, 600.0));

    assert!(engine.is_dragging());
    assert!(!engine.drag_session().unwrap().is_title_bar_drag());
    assert_eq!(eq.frame().origin(), Vec2::new(600.0, 484.0));
}

#[test]
fn test_hidden_docked_window_is_skipped() {
    let engine = engine();
    let (main, eq) = main_and_eq(&engine);

    engine.drag_will_start(MAIN, false);
    eq.set_visible(false);
    drag_to(&engine, MAIN, &main, Vec2::new(600.0, 600.0));

    assert_eq!(eq.frame_writes(), 0);
    assert_eq!(eq.frame().origin(), Vec2::new(500.0, 384.0));
}

#[test]
fn test_closed_docked_window_is_skipped() {
    let engine = engine();
    let (main, eq) = main_and_eq(&engine);

    engine.drag_will_start(MAIN, false);
    assert!(engine.unregister_window(EQ));
    assert_eq!(drag_to(&engine, MAIN, &main, Vec2::new(600.0, 600.0)), Vec2::new(600.0, 600.0));

    assert_eq!(eq.frame_writes(), 0);
    assert_eq!(engine.visible_windows(), vec![MAIN]);
}

#[test]
fn test_non_dockable_subject_moves_alone() {
    let engine = engine();
    let (_main, eq) = main_and_eq(&engine);
    let browser = add(&engine, BROWSER, WindowRole::Browser, Rect::new(775.0, 400.0, 400.0, 216.0));

    engine.drag_will_start(BROWSER, true);
    drag_to(&engine, BROWSER, &browser, Vec2::new(1000.0, 300.0));
    engine.drag_did_finish(BROWSER);

    assert_eq!(eq.frame_writes(), 0);
    assert_eq!(engine.docked_group(MAIN), vec![EQ]);
}

#[test]
fn test_default_layout_example() {
    let store = Rc::new(MemoryFrameStore::new());
    store.store_frame(WindowRole::Main, "{{10, 10}, {275, 116}}");
    store.store_frame(WindowRole::Equalizer, "{{10, 200}, {275, 116}}");

    let engine = engine_on(Rect::new(0.0, 0.0, 1440.0, 900.0)).with_frame_store(store.clone());
    let main = add(&engine, MAIN, WindowRole::Main, Rect::new(10.0, 10.0, 275.0, 116.0));
    let eq = add(&engine, EQ, WindowRole::Equalizer, Rect::new(10.0, 200.0, 275.0, 116.0));

    engine.snap_to_default_positions();

    assert_eq!(main.frame().origin(), Vec2::new(582.5, 392.0));
    assert_eq!(eq.frame().origin(), Vec2::new(582.5, 276.0));
    assert!(store.is_empty());
    assert_eq!(store.load_frame(WindowRole::Main), None);
    assert_eq!(main.animated_writes(), 0);
}

#[test]
fn test_layout_changes_are_not_treated_as_drags() {
    let engine = Rc::new(engine_on(Rect::new(0.0, 0.0, 1440.0, 900.0)));
    let (main, eq) = main_and_eq(&engine);
    for window in [&main, &eq] {
        let engine = Rc::clone(&engine);
        window.on_frame_change(move |frame| {
            engine.drag_did_move(MAIN, frame.origin());
        });
    }

    engine.snap_to_default_positions();

    assert!(!engine.is_dragging());
    assert_eq!(main.frame_writes(), 1);
    assert_eq!(eq.frame_writes(), 1);
}

#[test]
fn test_animated_layout_when_configured() {
    let config = DockingConfig {
        animate_layout: true,
        ..DockingConfig::default()
    };
    let screen = Rc::new(MemoryScreen::new(Rect::new(0.0, 0.0, 1440.0, 900.0)));
    let engine = DockingEngine::new(config, screen);
    let main = add(&engine, MAIN, WindowRole::Main, Rect::new(10.0, 10.0, 275.0, 116.0));

    engine.snap_to_default_positions();
    assert_eq!(main.animated_writes(), 1);
}

#[test]
fn test_double_size_round_trip() {
    let engine = engine();
    let (main, eq) = main_and_eq(&engine);
    let pl = add(&engine, PLAYLIST, WindowRole::Playlist, Rect::new(500.0, 152.0, 275.0, 232.0));
    let browser = add(&engine, BROWSER, WindowRole::Browser, Rect::new(775.0, 400.0, 400.0, 216.0));

    engine.apply_double_size(true);
    assert_eq!(engine.scale_factor(), 2.0);
    assert_eq!(main.frame(), Rect::new(500.0, 384.0, 550.0, 232.0));
    assert_eq!(eq.frame(), Rect::new(500.0, 152.0, 550.0, 232.0));
    assert_eq!(pl.frame(), Rect::new(500.0, -312.0, 550.0, 464.0));
    assert_eq!(browser.frame(), Rect::new(1050.0, 400.0, 400.0, 216.0));

    engine.apply_double_size(false);
    assert_eq!(engine.scale_factor(), 1.0);
    assert_eq!(main.frame(), Rect::new(500.0, 500.0, 275.0, 116.0));
    assert_eq!(eq.frame(), Rect::new(500.0, 384.0, 275.0, 116.0));
    assert_eq!(pl.frame(), Rect::new(500.0, 152.0, 275.0, 232.0));
    assert_eq!(browser.frame(), Rect::new(775.0, 400.0, 400.0, 216.0));
}

#[test]
fn test_double_size_with_window_hidden_during_toggle() {
    let engine = engine();
    let (main, eq) = main_and_eq(&engine);

    eq.set_visible(false);
    engine.apply_double_size(true);
    assert_eq!(main.frame(), Rect::new(500.0, 384.0, 550.0, 232.0));
    assert_eq!(eq.frame_writes(), 0);

    eq.set_visible(true);
    engine.apply_double_size(false);
    assert_eq!(main.frame(), Rect::new(500.0, 500.0, 275.0, 116.0));
    assert_eq!(eq.frame(), Rect::new(500.0, 384.0, 275.0, 116.0));

    // Both windows now scale together again
    engine.apply_double_size(true);
    assert_eq!(eq.frame(), Rect::new(500.0, 152.0, 550.0, 232.0));
}

#[test]
fn test_double_size_waits_for_main_window() {
    let engine = engine();
    let (main, eq) = main_and_eq(&engine);

    main.set_visible(false);
    engine.apply_double_size(true);
    assert_eq!(engine.scale_factor(), 1.0);
    assert_eq!(eq.frame_writes(), 0);

    main.set_visible(true);
    engine.apply_double_size(true);
    assert_eq!(engine.scale_factor(), 2.0);
    assert_eq!(eq.frame(), Rect::new(500.0, 152.0, 550.0, 232.0));
}

#[test]
fn test_double_size_ends_active_drag() {
    let engine = engine();
    let (_main, _eq) = main_and_eq(&engine);

    engine.drag_will_start(MAIN, true);
    engine.apply_double_size(true);
    assert!(!engine.is_dragging());
}

#[test]
fn test_resnap_after_display_change() {
    let screen = Rc::new(MemoryScreen::new(Rect::new(0.0, 0.0, 1920.0, 1080.0)));
    let engine = DockingEngine::new(DockingConfig::default(), screen.clone());
    let main = add(&engine, MAIN, WindowRole::Main, Rect::new(1160.0, 500.0, 275.0, 116.0));
    assert_eq!(engine.snap_window_in_place(MAIN), None);

    screen.set_bounds(Rect::new(0.0, 0.0, 1440.0, 900.0));
    main.reset_counters();
    assert_eq!(engine.snap_window_in_place(MAIN), Some(Vec2::new(1165.0, 500.0)));
    assert_eq!(main.frame_writes(), 1);
    assert!(!engine.is_dragging());
}

#[test]
fn test_duplicate_registration_rejected() {
    let engine = engine();
    add(&engine, MAIN, WindowRole::Main, Rect::new(0.0, 0.0, 275.0, 116.0));
    let other = Rc::new(MemoryWindow::new(Rect::new(0.0, 0.0, 275.0, 116.0)));
    assert!(engine.register_window(MAIN, WindowRole::Playlist, other).is_err());
}
