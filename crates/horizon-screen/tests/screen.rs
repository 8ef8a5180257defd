//! Integration tests for screen lifecycle, drawing, tooltips and resizing.

mod common;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use horizon_screen::{
    HostEvent, KeyboardModifiers, MouseButton, Panel, Screen, ScreenConfig, WidgetBase,
};
use horizon_screen_core::{Color, ManualClock, Point, Rect, ScreenError, Size};

use common::{CallLog, Harness, MockHost, MockRenderer, Probe};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn test_construction_configures_host() {
    let h = Harness::with_config(
        ScreenConfig::new("Sized")
            .with_size(Size::new(640.0, 480.0))
            .with_background(Color::from_rgba(0.2, 0.3, 0.4, 0.5)),
    );
    assert_eq!(h.screen.host().titles, vec!["Sized".to_string()]);
    assert_eq!(h.screen.host().visibility, vec![true]);
    assert_eq!(h.screen.size(), Size::new(640.0, 480.0));
    assert_eq!(h.screen.framebuffer_size(), Size::new(1280.0, 960.0));
    assert!(approx(h.screen.pixel_ratio(), 2.0));
    assert_eq!(h.screen.background(), Color::from_rgba(0.2, 0.3, 0.4, 1.0));

    let root = h.screen.root();
    assert_eq!(h.screen.tree().base(root).unwrap().size(), Size::new(640.0, 480.0));
}

#[test]
fn test_invalid_config_is_rejected() {
    let log = CallLog::default();
    let result = Screen::new(
        MockHost::new(Rc::clone(&log)),
        MockRenderer::new(Rc::clone(&log)),
        ScreenConfig::new("Bad").with_tooltip_max_opacity(2.0),
        ManualClock::new(),
    );
    assert!(matches!(result, Err(ScreenError::InvalidConfig(_))));
}

#[test]
fn test_caption_and_visibility_only_change_on_difference() {
    let mut h = Harness::new();
    h.screen.set_caption("Test");
    h.screen.set_visible(true);
    assert_eq!(h.screen.host().titles, vec!["Test".to_string()]);
    assert_eq!(h.screen.host().visibility, vec![true]);

    h.screen.set_caption("Renamed");
    h.screen.set_visible(false);
    assert_eq!(h.screen.caption(), "Renamed");
    assert_eq!(
        h.screen.host().titles,
        vec!["Test".to_string(), "Renamed".to_string()]
    );
    assert_eq!(h.screen.host().visibility, vec![true, false]);
}

#[test]
fn test_drop_releases_renderer_before_host() {
    let Harness { screen, log, .. } = Harness::new();
    log.borrow_mut().clear();
    drop(screen);
    assert_eq!(
        *log.borrow(),
        vec!["renderer.release".to_string(), "host.destroy".to_string()]
    );
}

#[test]
fn test_drop_can_leave_host_alive() {
    let Harness {
        mut screen, log, ..
    } = Harness::with_config(ScreenConfig::new("Embedded").with_shutdown_host_on_drop(false));
    assert!(!screen.shutdown_host_on_drop());
    screen.set_shutdown_host_on_drop(false);
    log.borrow_mut().clear();
    drop(screen);
    assert_eq!(*log.borrow(), vec!["renderer.release".to_string()]);
}

// ============================================================================
// Drawing
// ============================================================================

#[test]
fn test_frame_order() {
    let mut h = Harness::new();
    let log = Rc::clone(&h.log);
    h.screen
        .set_draw_contents_callback(move |_renderer| log.borrow_mut().push("contents".into()));
    h.log.borrow_mut().clear();

    h.screen.draw_all();
    assert_eq!(
        *h.log.borrow(),
        vec![
            "renderer.clear",
            "contents",
            "renderer.begin_frame",
            "renderer.end_frame",
            "host.swap_buffers",
        ]
    );
    assert_eq!(h.screen.renderer().frames, vec![(Size::new(800.0, 600.0), 2.0)]);
}

#[test]
fn test_hidden_screen_still_presents() {
    let mut h = Harness::new();
    h.screen.set_visible(false);
    h.screen.draw_all();
    assert_eq!(h.screen.renderer().clears.len(), 1);
    assert!(h.screen.renderer().frames.is_empty());
    assert_eq!(h.screen.host().swaps, 1);
}

#[test]
fn test_tooltip_fades_in_after_idle_delay() {
    let mut h = Harness::new();
    let root = h.screen.root();
    h.screen
        .add_widget(
            root,
            WidgetBase::new()
                .with_position(Point::new(100.0, 100.0))
                .with_size(Size::new(40.0, 20.0))
                .with_tooltip("Save"),
            Panel,
        )
        .unwrap();
    h.move_to(110.0, 105.0);

    h.clock.advance(Duration::from_millis(400));
    h.screen.draw_all();
    assert!(h.screen.renderer().tooltips.is_empty());

    h.clock.advance(Duration::from_millis(350));
    h.screen.draw_all();
    let tooltips = &h.screen.renderer().tooltips;
    assert_eq!(tooltips.len(), 1);
    let bubble = &tooltips[0];
    assert_eq!(bubble.text, "Save");
    assert!(approx(bubble.opacity, 0.4));
    assert_eq!(bubble.text_origin, Point::new(90.0, 130.0));
    assert_eq!(bubble.wrap_width, 150.0);
    assert_eq!(bubble.bubble, Rect::new(86.0, 126.0, 68.0, 24.0));

    h.clock.advance(Duration::from_secs(2));
    h.screen.draw_all();
    assert!(approx(h.screen.renderer().tooltips[1].opacity, 0.8));

    // Any interaction restarts the delay.
    h.move_to(112.0, 105.0);
    h.screen.draw_all();
    assert_eq!(h.screen.renderer().tooltips.len(), 2);
}

#[test]
fn test_no_tooltip_without_text() {
    let mut h = Harness::new();
    let root = h.screen.root();
    h.screen
        .add_widget(
            root,
            WidgetBase::new().with_size(Size::new(100.0, 100.0)),
            Panel,
        )
        .unwrap();
    h.move_to(50.0, 50.0);
    h.clock.advance(Duration::from_secs(5));
    h.screen.draw_all();
    assert!(h.screen.renderer().tooltips.is_empty());
}

// ============================================================================
// Resizing
// ============================================================================

#[test]
fn test_degenerate_resize_is_ignored() {
    let mut h = Harness::new();
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    h.screen.set_resize_callback(move |size| {
        sink.borrow_mut().push(size);
        true
    });

    h.screen.host_mut().logical = Size::ZERO;
    h.screen.host_mut().framebuffer = Size::ZERO;
    assert!(!h.screen.resize(0, 0));
    assert!(calls.borrow().is_empty());
    assert_eq!(h.screen.size(), Size::new(800.0, 600.0));

    h.screen.host_mut().logical = Size::new(1024.0, 768.0);
    h.screen.host_mut().framebuffer = Size::new(2048.0, 1536.0);
    assert!(h.screen.handle_host_event(HostEvent::FramebufferSize {
        width: 2048,
        height: 1536,
    }));
    assert_eq!(*calls.borrow(), vec![Size::new(2048.0, 1536.0)]);
    assert_eq!(h.screen.size(), Size::new(1024.0, 768.0));
    assert!(approx(h.screen.pixel_ratio(), 2.0));

    let root = h.screen.root();
    assert_eq!(h.screen.tree().base(root).unwrap().size(), Size::new(1024.0, 768.0));
}

#[test]
fn test_resize_with_one_zero_dimension_is_applied() {
    let mut h = Harness::new();
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    h.screen.set_resize_callback(move |size| {
        sink.borrow_mut().push(size);
        true
    });

    h.screen.host_mut().logical = Size::new(800.0, 0.0);
    h.screen.host_mut().framebuffer = Size::new(1600.0, 0.0);
    h.clock.advance(Duration::from_secs(3));
    assert!(h.screen.resize(1600, 0));
    assert_eq!(h.screen.idle_time(), Duration::ZERO);
    assert_eq!(*calls.borrow(), vec![Size::new(1600.0, 0.0)]);
    assert_eq!(h.screen.size(), Size::new(800.0, 0.0));
    assert_eq!(h.screen.framebuffer_size(), Size::new(1600.0, 0.0));

    let root = h.screen.root();
    assert_eq!(h.screen.tree().base(root).unwrap().size(), Size::new(800.0, 0.0));
}

#[test]
fn test_resize_without_callback() {
    let mut h = Harness::new();
    assert!(!h.screen.resize(1600, 1200));
}

// ============================================================================
// Windows
// ============================================================================

#[test]
fn test_center_window() {
    let mut h = Harness::new();
    let root = h.screen.root();
    let window = h
        .screen
        .add_window(WidgetBase::window(false).with_size(Size::new(200.0, 100.0)), Panel)
        .unwrap();
    let label = h.screen.add_widget(root, WidgetBase::new(), Panel).unwrap();

    h.screen.center_window(window).unwrap();
    assert_eq!(
        h.screen.tree().base(window).unwrap().position(),
        Point::new(300.0, 250.0)
    );
    assert_eq!(h.screen.center_window(label), Err(ScreenError::NotAWindow(label)));
}

#[test]
fn test_dispose_window_releases_focus_and_drag() {
    let mut h = Harness::new();
    let journal = h.journal.clone();
    let root = h.screen.root();
    let window = h
        .screen
        .add_window(
            WidgetBase::window(false).with_size(Size::new(200.0, 200.0)),
            Probe::passive("window", &journal),
        )
        .unwrap();
    let field = h
        .screen
        .add_widget(
            window,
            WidgetBase::new()
                .with_size(Size::new(100.0, 20.0))
                .with_focusable(true),
            Probe::new("field", &journal),
        )
        .unwrap();
    let label = h.screen.add_widget(root, WidgetBase::new(), Panel).unwrap();

    h.move_to(10.0, 10.0);
    h.screen.pointer_button(MouseButton::Left, true, KeyboardModifiers::NONE);
    assert_eq!(h.screen.drag_widget(), Some(field));
    assert_eq!(h.screen.focus_path(), &[field, window]);

    assert_eq!(h.screen.dispose_window(root), Err(ScreenError::RootWidget));
    assert_eq!(h.screen.dispose_window(label), Err(ScreenError::NotAWindow(label)));

    h.clear_journal();
    h.screen.dispose_window(window).unwrap();
    assert!(h.screen.focus_path().is_empty());
    assert!(!h.screen.drag_active());
    assert!(!h.screen.tree().contains(field));
    assert_eq!(h.seen("field"), vec![common::Seen::Focus(false)]);
    assert_eq!(
        h.screen.dispose_window(window),
        Err(ScreenError::InvalidWidget(window))
    );

    // Routing keeps working afterwards.
    assert!(!h.move_to(20.0, 20.0));
    assert!(!h.screen.char('q'));
}

#[test]
fn test_remove_unrelated_widget_keeps_focus() {
    let mut h = Harness::new();
    let root = h.screen.root();
    let window = h
        .screen
        .add_window(WidgetBase::window(false).with_size(Size::new(50.0, 50.0)), Panel)
        .unwrap();
    let other = h.screen.add_widget(root, WidgetBase::new(), Panel).unwrap();
    h.screen.update_focus(Some(window));

    h.screen.remove_widget(other).unwrap();
    assert_eq!(h.screen.focus_path(), &[window]);
}

#[test]
fn test_debug_tree_lists_widgets() {
    let mut h = Harness::new();
    h.screen
        .add_window(
            WidgetBase::window(true)
                .with_position(Point::new(10.0, 20.0))
                .with_size(Size::new(30.0, 40.0)),
            Panel,
        )
        .unwrap();
    let dump = h.screen.debug_tree();
    assert!(dump.contains("Screen"));
    assert!(dump.contains("ModalWindow"));
    assert!(dump.contains("(10, 20) 30x40"));
    h.screen.log_tree();
}
