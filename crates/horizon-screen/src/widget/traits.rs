//! Core widget trait definitions.
//!
//! This module defines the [`Widget`] trait, the set of handlers the screen
//! routes input to.
//!
//! # Key Types
//!
//! - [`Widget`] - Input and paint handlers for a UI element
//! - [`EventContext`] - Identity and base state passed to every handler
//! - [`PaintContext`] - Rendering context passed to [`Widget::paint`]
//! - [`Panel`] - A widget with no behaviour of its own, used for the root
//!   and for plain containers
//!
//! # Related Types
//!
//! - [`super::WidgetBase`] - Geometry, focus and kind of a widget
//! - [`super::WidgetTree`] - Storage that owns widgets and their bases
//! - [`super::EventDispatcher`] - Generic descent through the tree

use horizon_screen_core::{Rect, WidgetId};

use super::base::WidgetBase;
use super::events::{
    KeyEvent, MouseButtonEvent, MouseDragEvent, MouseMotionEvent, ScrollEvent,
};
use crate::host::Renderer;

/// Context passed to every [`Widget`] handler.
///
/// Gives read access to the widget's own [`WidgetBase`] and lets a handler
/// ask the screen to move keyboard focus to it once dispatch has finished.
pub struct EventContext<'a> {
    id: WidgetId,
    base: &'a WidgetBase,
    focus_requested: bool,
}

impl<'a> EventContext<'a> {
    pub(crate) fn new(id: WidgetId, base: &'a WidgetBase) -> Self {
        Self {
            id,
            base,
            focus_requested: false,
        }
    }

    /// The ID of the widget handling the event.
    #[inline]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// The widget's base state.
    #[inline]
    pub fn base(&self) -> &WidgetBase {
        self.base
    }

    /// Ask for this widget to receive keyboard focus.
    ///
    /// The request is applied after the current event has been dispatched.
    pub fn request_focus(&mut self) {
        self.focus_requested = true;
    }

    /// Whether [`request_focus`](Self::request_focus) was called.
    #[inline]
    pub fn focus_requested(&self) -> bool {
        self.focus_requested
    }
}

/// Context provided during widget painting.
///
/// Wraps the renderer and the widget's absolute rectangle. Passed to
/// [`Widget::paint`].
pub struct PaintContext<'a> {
    renderer: &'a mut dyn Renderer,
    rect: Rect,
    focused: bool,
}

impl<'a> PaintContext<'a> {
    /// Create a new paint context.
    pub fn new(renderer: &'a mut dyn Renderer, rect: Rect, focused: bool) -> Self {
        Self {
            renderer,
            rect,
            focused,
        }
    }

    /// The renderer to draw with.
    #[inline]
    pub fn renderer(&mut self) -> &mut dyn Renderer {
        &mut *self.renderer
    }

    /// The widget's rectangle in absolute coordinates.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Whether the widget is on the focus path.
    #[inline]
    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

/// Input and paint handlers for a UI element.
///
/// Every handler has a default implementation that ignores the event and
/// returns `false`. Return `true` to mark the event as consumed and stop it
/// from propagating further.
///
/// Geometry, visibility and focus state live in the widget's
/// [`WidgetBase`], which the tree stores alongside the widget. Handlers see
/// it through [`EventContext::base`].
///
/// # Example
///
/// ```ignore
/// use horizon_screen::widget::{EventContext, MouseButtonEvent, Widget};
///
/// struct Button {
///     clicks: u32,
/// }
///
/// impl Widget for Button {
///     fn mouse_button_event(
///         &mut self,
///         ctx: &mut EventContext<'_>,
///         event: &MouseButtonEvent,
///     ) -> bool {
///         if !event.pressed {
///             self.clicks += 1;
///         }
///         ctx.request_focus();
///         true
///     }
/// }
/// ```
pub trait Widget {
    /// A mouse button was pressed or released over the widget.
    fn mouse_button_event(
        &mut self,
        _ctx: &mut EventContext<'_>,
        _event: &MouseButtonEvent,
    ) -> bool {
        false
    }

    /// The pointer moved over the widget without drag capture.
    fn mouse_motion_event(
        &mut self,
        _ctx: &mut EventContext<'_>,
        _event: &MouseMotionEvent,
    ) -> bool {
        false
    }

    /// The pointer moved while this widget holds drag capture.
    fn mouse_drag_event(&mut self, _ctx: &mut EventContext<'_>, _event: &MouseDragEvent) -> bool {
        false
    }

    /// The pointer entered (`entered == true`) or left the widget.
    fn mouse_enter_event(&mut self, _ctx: &mut EventContext<'_>, _entered: bool) -> bool {
        false
    }

    /// The user scrolled over the widget.
    fn scroll_event(&mut self, _ctx: &mut EventContext<'_>, _event: &ScrollEvent) -> bool {
        false
    }

    /// A key event reached the widget through the focus path.
    fn keyboard_event(&mut self, _ctx: &mut EventContext<'_>, _event: &KeyEvent) -> bool {
        false
    }

    /// A typed character reached the widget through the focus path.
    fn keyboard_character_event(&mut self, _ctx: &mut EventContext<'_>, _ch: char) -> bool {
        false
    }

    /// The widget joined (`focused == true`) or left the focus path.
    fn focus_event(&mut self, _ctx: &mut EventContext<'_>, _focused: bool) -> bool {
        false
    }

    /// Draw the widget. Children are drawn afterwards by the screen.
    fn paint(&self, _ctx: &mut PaintContext<'_>) {}
}

/// A widget with no behaviour of its own.
///
/// Used for the root of every tree and for plain containers and windows
/// whose children do all the work.
#[derive(Debug, Clone, Copy, Default)]
pub struct Panel;

impl Widget for Panel {}
