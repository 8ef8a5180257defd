//! Horizon Screen - input routing and window stacking for retained-mode UIs.
//!
//! A [`Screen`] receives raw input from a host window and routes it into a
//! tree of widgets:
//!
//! - **Pointer input** is hit-tested front to back, or delivered exclusively
//!   to the widget holding drag capture
//! - **Keyboard input** travels along the focus path maintained by
//!   [`FocusStack`]
//! - **Modal windows** swallow pointer input outside their bounds
//!   ([`ModalGate`])
//! - **Window order** is managed by [`ZOrderManager`], which keeps popups in
//!   front of the windows they are anchored to
//! - **Tooltips** fade in after an idle delay ([`TooltipTimer`])
//!
//! The host supplies a [`HostWindow`] and a [`Renderer`]; the screen never
//! touches a windowing system or graphics API itself.
//!
//! # Example
//!
//! ```ignore
//! use horizon_screen::{Panel, Screen, ScreenConfig, WidgetBase};
//! use horizon_screen_core::{Size, SystemClock};
//!
//! let mut screen = Screen::new(host, renderer, ScreenConfig::new("Demo"), SystemClock::new())?;
//! let window = screen.add_window(
//!     WidgetBase::window(false).with_size(Size::new(320.0, 240.0)),
//!     Panel,
//! )?;
//! screen.center_window(window)?;
//!
//! loop {
//!     for event in host_events() {
//!         screen.handle_host_event(event);
//!     }
//!     screen.draw_all();
//! }
//! ```

pub mod focus;
pub mod host;
pub mod modal;
pub mod screen;
pub mod tooltip;
pub mod widget;
pub mod z_order;

pub use focus::FocusStack;
pub use host::{HostEvent, HostWindow, Renderer};
pub use modal::ModalGate;
pub use screen::{Screen, ScreenConfig};
pub use tooltip::{TooltipBubble, TooltipTimer};
pub use widget::{
    EventContext, KeyAction, KeyCode, KeyEvent, KeyboardModifiers, MouseButton,
    MouseButtonEvent, MouseButtons, MouseDragEvent, MouseMotionEvent, PaintContext, Panel,
    ScrollEvent, Widget, WidgetBase, WidgetKind, WidgetTree,
};
pub use z_order::ZOrderManager;

pub use cursor_icon::CursorIcon;
pub use horizon_screen_core::{
    Clock, Color, ManualClock, Point, Rect, Result, ScreenError, Size, SystemClock, WidgetId,
};
