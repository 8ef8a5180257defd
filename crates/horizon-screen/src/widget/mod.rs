//! Widget system for Horizon Screen.
//!
//! This module provides everything the screen needs to know about widgets:
//!
//! - [`WidgetBase`] and [`WidgetKind`]: geometry, focus flags and the
//!   structural role (plain widget, window, popup) of a widget
//! - [`Widget`]: the input and paint handlers a widget implements
//! - [`WidgetTree`]: the arena owning all widgets of a screen
//! - [`EventDispatcher`]: hit testing and generic pointer descent
//! - Event payloads such as [`MouseButtonEvent`] and [`KeyEvent`]

mod base;
mod dispatcher;
mod events;
mod traits;
mod tree;

pub use base::{WidgetBase, WidgetKind};
pub use dispatcher::{DispatchResult, EventDispatcher};
pub use events::{
    KeyAction, KeyCode, KeyEvent, KeyboardModifiers, MouseButton, MouseButtonEvent,
    MouseButtons, MouseDragEvent, MouseMotionEvent, ScrollEvent,
};
pub use traits::{EventContext, PaintContext, Panel, Widget};
pub use tree::WidgetTree;
