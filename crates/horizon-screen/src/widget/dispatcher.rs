//! Event dispatching and hit testing for widgets.
//!
//! This module provides the generic descent the screen uses when no drag
//! capture or focus routing applies:
//! - Hit testing (front-most visible widget under a point)
//! - Mouse button and scroll descent
//! - Mouse motion descent with enter/leave notifications
//!
//! # Event Flow
//!
//! Pointer events enter at a widget with a position in that widget's parent
//! coordinates:
//!
//! 1. **Children**: Visible children are visited front to back (last child
//!    first). Each child that contains the point receives the event with
//!    the point converted into the child's parent space. The first child
//!    that returns `true` stops the descent.
//!
//! 2. **Widget Handler**: If no child consumed the event, the widget's own
//!    handler is called.
//!
//! 3. **Focus Requests**: Handlers may call
//!    [`EventContext::request_focus`](super::EventContext::request_focus),
//!    and a primary-button press requests focus for the deepest focusable
//!    widget on the hit path, even when a non-focusable child consumed it.
//!    The deepest request wins and is reported in the [`DispatchResult`]
//!    for the screen to apply.

use horizon_screen_core::logging::targets;
use horizon_screen_core::{Point, WidgetId};

use super::events::{MouseButton, MouseButtonEvent, MouseMotionEvent, ScrollEvent};
use super::tree::WidgetTree;

/// Result of dispatching an event into the widget tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchResult {
    /// Whether some widget consumed the event.
    pub handled: bool,
    /// The widget that should receive keyboard focus, if any.
    pub focus_request: Option<WidgetId>,
}

impl DispatchResult {
    fn request(&mut self, id: WidgetId) {
        self.focus_request.get_or_insert(id);
    }
}

/// Event dispatcher for the widget tree.
///
/// Provides the generic pointer descent and hit testing. Drag capture,
/// keyboard routing and focus changes are handled by the screen.
pub struct EventDispatcher;

impl EventDispatcher {
    /// Find the widget at a given point.
    ///
    /// # Arguments
    ///
    /// * `tree` - The widget tree.
    /// * `id` - The widget to start the search from.
    /// * `point` - The point in `id`'s parent coordinates (screen
    ///   coordinates when starting from the root).
    ///
    /// # Returns
    ///
    /// The front-most visible descendant containing the point, else `id`
    /// itself if it contains the point, else `None`.
    pub fn find_widget(tree: &WidgetTree, id: WidgetId, point: Point) -> Option<WidgetId> {
        let base = tree.base(id)?;
        let local = point - base.position();

        for &child in tree.children(id).iter().rev() {
            let Some(child_base) = tree.base(child) else {
                continue;
            };
            if child_base.is_visible() && child_base.contains(local) {
                return Self::find_widget(tree, child, local);
            }
        }

        base.contains(point).then_some(id)
    }

    /// Deliver a mouse button event by generic descent.
    pub fn mouse_button_event(
        tree: &mut WidgetTree,
        id: WidgetId,
        event: &MouseButtonEvent,
    ) -> DispatchResult {
        let mut result = DispatchResult::default();
        let handled = Self::button_recursive(tree, id, event, &mut result);
        let result = DispatchResult { handled, ..result };
        tracing::trace!(
            target: targets::ROUTER,
            button = ?event.button,
            pressed = event.pressed,
            handled = result.handled,
            "button dispatched"
        );
        result
    }

    fn button_recursive(
        tree: &mut WidgetTree,
        id: WidgetId,
        event: &MouseButtonEvent,
        result: &mut DispatchResult,
    ) -> bool {
        let Some(base) = tree.base(id) else {
            return false;
        };
        let local = event.pos - base.position();
        let click_focus =
            base.is_focusable() && event.pressed && event.button == MouseButton::Left;
        let children = tree.children(id).to_vec();

        let child_event = MouseButtonEvent {
            pos: local,
            ..*event
        };
        for &child in children.iter().rev() {
            let hit = tree
                .base(child)
                .is_some_and(|b| b.is_visible() && b.contains(local));
            if hit && Self::button_recursive(tree, child, &child_event, result) {
                // A consuming child still leaves its focusable ancestors on the hit path.
                if click_focus {
                    result.request(id);
                }
                return true;
            }
        }

        let (handled, requested) = tree
            .with_widget(id, |widget, ctx| widget.mouse_button_event(ctx, event))
            .unwrap_or((false, false));
        if requested || click_focus {
            result.request(id);
        }
        handled
    }

    /// Deliver pointer motion by generic descent, sending enter/leave
    /// notifications to children whose containment changed.
    pub fn mouse_motion_event(
        tree: &mut WidgetTree,
        id: WidgetId,
        event: &MouseMotionEvent,
    ) -> DispatchResult {
        let mut result = DispatchResult::default();
        let handled = Self::motion_recursive(tree, id, event, &mut result);
        DispatchResult { handled, ..result }
    }

    fn motion_recursive(
        tree: &mut WidgetTree,
        id: WidgetId,
        event: &MouseMotionEvent,
        result: &mut DispatchResult,
    ) -> bool {
        let Some(base) = tree.base(id) else {
            return false;
        };
        let origin = base.position();
        let local = event.pos - origin;
        let previous = event.pos - event.rel - origin;
        let children = tree.children(id).to_vec();

        let child_event = MouseMotionEvent {
            pos: local,
            ..*event
        };
        for &child in children.iter().rev() {
            let Some(child_base) = tree.base(child) else {
                continue;
            };
            if !child_base.is_visible() {
                continue;
            }
            let contained = child_base.contains(local);
            let was_contained = child_base.contains(previous);

            if contained != was_contained {
                if let Some(child_base) = tree.base_mut(child) {
                    child_base.set_hovered(contained);
                }
                let requested = tree
                    .with_widget(child, |widget, ctx| widget.mouse_enter_event(ctx, contained))
                    .is_some_and(|(_, requested)| requested);
                if requested {
                    result.request(child);
                }
                tracing::trace!(
                    target: targets::ROUTER,
                    ?child,
                    entered = contained,
                    "enter/leave"
                );
            }

            if (contained || was_contained)
                && Self::motion_recursive(tree, child, &child_event, result)
            {
                return true;
            }
        }

        let (handled, requested) = tree
            .with_widget(id, |widget, ctx| widget.mouse_motion_event(ctx, event))
            .unwrap_or((false, false));
        if requested {
            result.request(id);
        }
        handled
    }

    /// Deliver a scroll event to the front-most widget under the point.
    pub fn scroll_event(
        tree: &mut WidgetTree,
        id: WidgetId,
        event: &ScrollEvent,
    ) -> DispatchResult {
        let mut result = DispatchResult::default();
        let handled = Self::scroll_recursive(tree, id, event, &mut result);
        DispatchResult { handled, ..result }
    }

    fn scroll_recursive(
        tree: &mut WidgetTree,
        id: WidgetId,
        event: &ScrollEvent,
        result: &mut DispatchResult,
    ) -> bool {
        let Some(base) = tree.base(id) else {
            return false;
        };
        let local = event.pos - base.position();
        let children = tree.children(id).to_vec();

        let child_event = ScrollEvent {
            pos: local,
            ..*event
        };
        for &child in children.iter().rev() {
            let hit = tree
                .base(child)
                .is_some_and(|b| b.is_visible() && b.contains(local));
            if hit && Self::scroll_recursive(tree, child, &child_event, result) {
                return true;
            }
        }

        let (handled, requested) = tree
            .with_widget(id, |widget, ctx| widget.scroll_event(ctx, event))
            .unwrap_or((false, false));
        if requested {
            result.request(id);
        }
        handled
    }
}
