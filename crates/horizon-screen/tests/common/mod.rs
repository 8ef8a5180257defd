//! Shared fixtures for screen integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use horizon_screen::{
    CursorIcon, EventContext, HostWindow, KeyEvent, MouseButtonEvent, MouseDragEvent,
    MouseMotionEvent, Renderer, Screen, ScreenConfig, ScrollEvent, TooltipBubble, Widget,
};
use horizon_screen_core::{Color, ManualClock, Point, Rect, Size};

/// Ordered record of host and renderer calls shared by both mocks.
pub type CallLog = Rc<RefCell<Vec<String>>>;

pub struct MockHost {
    pub logical: Size,
    pub framebuffer: Size,
    pub titles: Vec<String>,
    pub visibility: Vec<bool>,
    pub cursors: Vec<CursorIcon>,
    pub swaps: usize,
    pub log: CallLog,
}

impl MockHost {
    pub fn new(log: CallLog) -> Self {
        Self {
            logical: Size::new(800.0, 600.0),
            framebuffer: Size::new(1600.0, 1200.0),
            titles: Vec::new(),
            visibility: Vec::new(),
            cursors: Vec::new(),
            swaps: 0,
            log,
        }
    }
}

impl HostWindow for MockHost {
    fn logical_size(&self) -> Size {
        self.logical
    }

    fn framebuffer_size(&self) -> Size {
        self.framebuffer
    }

    fn set_size(&mut self, size: Size) {
        self.logical = size;
        self.framebuffer = Size::new(size.width * 2.0, size.height * 2.0);
    }

    fn set_title(&mut self, title: &str) {
        self.titles.push(title.to_string());
    }

    fn set_visible(&mut self, visible: bool) {
        self.visibility.push(visible);
    }

    fn set_cursor(&mut self, cursor: CursorIcon) {
        self.cursors.push(cursor);
    }

    fn swap_buffers(&mut self) {
        self.swaps += 1;
        self.log.borrow_mut().push("host.swap_buffers".into());
    }

    fn destroy(&mut self) {
        self.log.borrow_mut().push("host.destroy".into());
    }
}

pub struct MockRenderer {
    pub clears: Vec<Color>,
    pub frames: Vec<(Size, f32)>,
    pub tooltips: Vec<TooltipBubble>,
    pub log: CallLog,
}

impl MockRenderer {
    pub fn new(log: CallLog) -> Self {
        Self {
            clears: Vec::new(),
            frames: Vec::new(),
            tooltips: Vec::new(),
            log,
        }
    }
}

impl Renderer for MockRenderer {
    fn clear(&mut self, color: Color) {
        self.clears.push(color);
        self.log.borrow_mut().push("renderer.clear".into());
    }

    fn begin_frame(&mut self, size: Size, pixel_ratio: f32) {
        self.frames.push((size, pixel_ratio));
        self.log.borrow_mut().push("renderer.begin_frame".into());
    }

    fn end_frame(&mut self) {
        self.log.borrow_mut().push("renderer.end_frame".into());
    }

    fn text_box_bounds(&mut self, origin: Point, _width: f32, _text: &str) -> Rect {
        Rect::from_origin_size(origin, Size::new(60.0, 16.0))
    }

    fn draw_tooltip(&mut self, bubble: &TooltipBubble) {
        self.tooltips.push(bubble.clone());
    }

    fn release(&mut self) {
        self.log.borrow_mut().push("renderer.release".into());
    }
}

// ============================================================================
// Recording widget
// ============================================================================

/// What a [`Probe`] saw.
#[derive(Debug, Clone, PartialEq)]
pub enum Seen {
    Button { pos: Point, pressed: bool },
    Motion,
    Drag { pos: Point, rel: Point },
    Enter(bool),
    Scroll,
    Key,
    Char(char),
    Focus(bool),
}

pub type Journal = Rc<RefCell<Vec<(&'static str, Seen)>>>;

/// Records every event it receives under its name.
pub struct Probe {
    name: &'static str,
    journal: Journal,
    consume: bool,
}

impl Probe {
    pub fn new(name: &'static str, journal: &Journal) -> Self {
        Self {
            name,
            journal: Rc::clone(journal),
            consume: true,
        }
    }

    /// A probe that records events but never consumes them.
    pub fn passive(name: &'static str, journal: &Journal) -> Self {
        Self {
            consume: false,
            ..Self::new(name, journal)
        }
    }

    fn record(&self, seen: Seen) {
        self.journal.borrow_mut().push((self.name, seen));
    }
}

impl Widget for Probe {
    fn mouse_button_event(
        &mut self,
        _ctx: &mut EventContext<'_>,
        event: &MouseButtonEvent,
    ) -> bool {
        self.record(Seen::Button {
            pos: event.pos,
            pressed: event.pressed,
        });
        self.consume
    }

    fn mouse_motion_event(
        &mut self,
        _ctx: &mut EventContext<'_>,
        _event: &MouseMotionEvent,
    ) -> bool {
        self.record(Seen::Motion);
        false
    }

    fn mouse_drag_event(&mut self, _ctx: &mut EventContext<'_>, event: &MouseDragEvent) -> bool {
        self.record(Seen::Drag {
            pos: event.pos,
            rel: event.rel,
        });
        self.consume
    }

    fn mouse_enter_event(&mut self, _ctx: &mut EventContext<'_>, entered: bool) -> bool {
        self.record(Seen::Enter(entered));
        false
    }

    fn scroll_event(&mut self, _ctx: &mut EventContext<'_>, _event: &ScrollEvent) -> bool {
        self.record(Seen::Scroll);
        self.consume
    }

    fn keyboard_event(&mut self, _ctx: &mut EventContext<'_>, _event: &KeyEvent) -> bool {
        self.record(Seen::Key);
        self.consume
    }

    fn keyboard_character_event(&mut self, _ctx: &mut EventContext<'_>, ch: char) -> bool {
        self.record(Seen::Char(ch));
        self.consume
    }

    fn focus_event(&mut self, _ctx: &mut EventContext<'_>, focused: bool) -> bool {
        self.record(Seen::Focus(focused));
        true
    }
}

// ============================================================================
// Screen setup
// ============================================================================

pub type TestScreen = Screen<MockHost, MockRenderer>;

pub struct Harness {
    pub screen: TestScreen,
    pub clock: ManualClock,
    pub log: CallLog,
    pub journal: Journal,
}

impl Harness {
    /// A visible 800x600 screen (1600x1200 framebuffer) with no pointer offset.
    pub fn new() -> Self {
        Self::with_config(ScreenConfig::new("Test").with_pointer_offset(Point::ZERO))
    }

    pub fn with_config(config: ScreenConfig) -> Self {
        init_tracing();
        let log = CallLog::default();
        let clock = ManualClock::new();
        let screen = Screen::new(
            MockHost::new(Rc::clone(&log)),
            MockRenderer::new(Rc::clone(&log)),
            config,
            clock.clone(),
        )
        .unwrap();
        Self {
            screen,
            clock,
            log,
            journal: Journal::default(),
        }
    }

    /// Events recorded for one probe, in order.
    pub fn seen(&self, name: &str) -> Vec<Seen> {
        self.journal
            .borrow()
            .iter()
            .filter(|(probe, _)| *probe == name)
            .map(|(_, seen)| seen.clone())
            .collect()
    }

    pub fn clear_journal(&self) {
        self.journal.borrow_mut().clear();
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> bool {
        self.screen.pointer_move(f64::from(x), f64::from(y))
    }
}

/// Route test logs through the test writer. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
