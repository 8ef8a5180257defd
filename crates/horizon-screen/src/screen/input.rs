//! Input routing for [`Screen`].

use std::path::PathBuf;

use horizon_screen_core::logging::{span_names, targets};
use horizon_screen_core::{PerfSpan, Point, WidgetId};

use super::Screen;
use crate::host::{HostEvent, HostWindow, Renderer};
use crate::modal::ModalGate;
use crate::widget::{
    DispatchResult, EventDispatcher, KeyAction, KeyCode, KeyEvent, KeyboardModifiers,
    MouseButton, MouseButtonEvent, MouseDragEvent, MouseMotionEvent, ScrollEvent,
};

impl<H: HostWindow, R: Renderer> Screen<H, R> {
    /// Route a raw host callback to the matching handler.
    pub fn handle_host_event(&mut self, event: HostEvent) -> bool {
        let _span = PerfSpan::new(span_names::HOST_EVENT);
        match event {
            HostEvent::CursorPos { x, y } => self.pointer_move(x, y),
            HostEvent::MouseButton {
                button,
                pressed,
                modifiers,
            } => self.pointer_button(button, pressed, modifiers),
            HostEvent::Key {
                key,
                scancode,
                action,
                modifiers,
            } => self.key(key, scancode, action, modifiers),
            HostEvent::Char { ch } => self.char(ch),
            HostEvent::Scroll { x, y } => self.scroll(x, y),
            HostEvent::FramebufferSize { width, height } => self.resize(width, height),
            HostEvent::Drop { paths } => self.drop_files(&paths),
        }
    }

    /// The pointer moved to `(x, y)` in raw host coordinates.
    ///
    /// The configured pointer offset is applied first. While a widget holds
    /// drag capture, the motion goes to that widget only, relative to its
    /// absolute position, wherever the pointer is. Otherwise the motion is
    /// dispatched through the tree with enter/leave notifications.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.touch();
        let pos = Point::new(x as f32, y as f32) + self.pointer_offset;
        let rel = pos - self.mouse_pos;

        let handled = match self.drag {
            Some(captured) => self.deliver_drag(captured, pos, rel),
            None => {
                let hovered = self.find_widget(pos);
                self.update_cursor(hovered);
                let event = MouseMotionEvent {
                    pos,
                    rel,
                    buttons: self.buttons,
                    modifiers: self.modifiers,
                };
                let root = self.tree.root();
                let result = EventDispatcher::mouse_motion_event(&mut self.tree, root, &event);
                self.apply(result)
            }
        };

        self.mouse_pos = pos;
        tracing::trace!(target: targets::ROUTER, x = pos.x, y = pos.y, handled, "pointer moved");
        handled
    }

    fn deliver_drag(&mut self, captured: WidgetId, pos: Point, rel: Point) -> bool {
        let Some(origin) = self.tree.absolute_position(captured) else {
            tracing::debug!(
                target: targets::ROUTER,
                ?captured,
                "drag target vanished, releasing capture"
            );
            self.drag = None;
            return false;
        };
        let event = MouseDragEvent {
            pos: pos - origin,
            rel,
            buttons: self.buttons,
            modifiers: self.modifiers,
        };
        let (handled, requested) = self
            .tree
            .with_widget(captured, |widget, ctx| widget.mouse_drag_event(ctx, &event))
            .unwrap_or((false, false));
        self.apply(DispatchResult {
            handled,
            focus_request: requested.then_some(captured),
        })
    }

    /// A mouse button changed state at the current pointer position.
    ///
    /// Order of work:
    /// 1. Drop the event if a modal window owns focus and the pointer is outside it
    /// 2. Update the held button mask
    /// 3. On a release away from the drag target, send that target its own release
    /// 4. Start drag capture on a primary press over a non-root widget (which
    ///    clears the focus path), or end it on any other transition
    /// 5. Dispatch the event through the tree and apply any focus request
    pub fn pointer_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
        modifiers: KeyboardModifiers,
    ) -> bool {
        self.modifiers = modifiers;
        self.touch();

        if ModalGate::blocks(&self.tree, self.focus.path(), self.mouse_pos) {
            return false;
        }

        if pressed {
            self.buttons.insert(button);
        } else {
            self.buttons.remove(button);
        }

        let root = self.tree.root();
        let target = self.find_widget(self.mouse_pos);

        if let Some(captured) = self.drag {
            if !pressed && target != Some(captured) {
                self.release_capture(captured, button, modifiers);
            }
        }

        self.update_cursor(target);

        if pressed && button == MouseButton::Left {
            self.drag = target.filter(|&widget| widget != root);
            if let Some(captured) = self.drag {
                tracing::debug!(target: targets::ROUTER, ?captured, "drag started");
                self.focus.clear(&mut self.tree);
            }
        } else if let Some(captured) = self.drag.take() {
            tracing::debug!(target: targets::ROUTER, ?captured, "drag ended");
        }

        let event = MouseButtonEvent {
            pos: self.mouse_pos,
            button,
            pressed,
            modifiers,
        };
        let result = EventDispatcher::mouse_button_event(&mut self.tree, root, &event);
        self.apply(result)
    }

    /// Send a release to the drag target, in its parent's coordinates.
    fn release_capture(
        &mut self,
        captured: WidgetId,
        button: MouseButton,
        modifiers: KeyboardModifiers,
    ) {
        let parent_origin = self
            .tree
            .parent(captured)
            .and_then(|parent| self.tree.absolute_position(parent))
            .unwrap_or(Point::ZERO);
        let event = MouseButtonEvent {
            pos: self.mouse_pos - parent_origin,
            button,
            pressed: false,
            modifiers,
        };
        tracing::trace!(target: targets::ROUTER, ?captured, "synthetic release for drag target");
        self.tree
            .with_widget(captured, |widget, ctx| widget.mouse_button_event(ctx, &event));
    }

    /// The user scrolled at the current pointer position.
    ///
    /// Subject to the same modal rule as button events.
    pub fn scroll(&mut self, dx: f64, dy: f64) -> bool {
        self.touch();
        if ModalGate::blocks(&self.tree, self.focus.path(), self.mouse_pos) {
            return false;
        }
        let event = ScrollEvent {
            pos: self.mouse_pos,
            delta: Point::new(dx as f32, dy as f32),
        };
        let root = self.tree.root();
        let result = EventDispatcher::scroll_event(&mut self.tree, root, &event);
        self.apply(result)
    }

    /// A key changed state. Delivered along the focus path, leaf first.
    pub fn key(
        &mut self,
        key: KeyCode,
        scancode: u32,
        action: KeyAction,
        modifiers: KeyboardModifiers,
    ) -> bool {
        self.touch();
        let event = KeyEvent {
            key,
            scancode,
            action,
            modifiers,
        };
        let handled = self.focus.key_event(&mut self.tree, &event);
        tracing::trace!(target: targets::ROUTER, ?key, ?action, handled, "key routed");
        handled
    }

    /// A character was typed. Delivered along the focus path, leaf first.
    pub fn char(&mut self, ch: char) -> bool {
        self.touch();
        let handled = self.focus.char_event(&mut self.tree, ch);
        tracing::trace!(target: targets::ROUTER, ?ch, handled, "character routed");
        handled
    }

    /// The host reported a framebuffer resize.
    ///
    /// Sizes are re-read from the host. Only a state where all four
    /// dimensions are zero (e.g. while minimised) is ignored; a size with a
    /// single zero dimension is still applied.
    /// Otherwise the stored sizes are updated and the resize callback is
    /// invoked with the framebuffer size.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        let framebuffer = self.host.framebuffer_size();
        let logical = self.host.logical_size();
        if framebuffer.is_zero() && logical.is_zero() {
            tracing::debug!(target: targets::ROUTER, width, height, "ignoring degenerate resize");
            return false;
        }

        self.framebuffer_size = framebuffer;
        self.size = logical;
        self.pixel_ratio = crate::host::pixel_ratio(framebuffer, logical);
        let root = self.tree.root();
        if let Some(base) = self.tree.base_mut(root) {
            base.set_size(logical);
        }
        self.touch();

        tracing::debug!(
            target: targets::ROUTER,
            width = framebuffer.width,
            height = framebuffer.height,
            "resized"
        );
        match self.resize_callback.as_mut() {
            Some(callback) => callback(framebuffer),
            None => false,
        }
    }

    /// Files were dropped onto the window.
    pub fn drop_files(&mut self, paths: &[PathBuf]) -> bool {
        tracing::debug!(target: targets::ROUTER, count = paths.len(), "files dropped");
        match self.drop_callback.as_mut() {
            Some(callback) => callback(paths),
            None => false,
        }
    }

    fn update_cursor(&mut self, hovered: Option<WidgetId>) {
        let Some(cursor) = hovered.and_then(|id| self.tree.base(id)).map(|base| base.cursor())
        else {
            return;
        };
        if cursor != self.cursor {
            self.cursor = cursor;
            self.host.set_cursor(cursor);
            tracing::trace!(target: targets::ROUTER, ?cursor, "cursor changed");
        }
    }

    fn apply(&mut self, result: DispatchResult) -> bool {
        if let Some(id) = result.focus_request {
            self.focus.update_focus(&mut self.tree, Some(id));
        }
        result.handled
    }
}
