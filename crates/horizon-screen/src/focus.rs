//! Focus path management.
//!
//! This module provides [`FocusStack`], which tracks the chain of widgets
//! from the focused leaf up to its top-level window.
//!
//! # Focus Path
//!
//! The path is stored leaf first and never contains the root widget, so its
//! last entry is always a direct child of the root (normally a window).
//! Focusing the root is the same as clearing focus.
//!
//! # Focus Change Events
//!
//! When focus changes, the stack computes the difference between the old
//! and new paths:
//! 1. Widgets only in the old path are unflagged and receive
//!    `focus_event(false)`, in old path order
//! 2. Widgets only in the new path are flagged and receive
//!    `focus_event(true)`, in new path order
//! 3. Widgets in both paths receive nothing
//!
//! If the new path ends at a window, the window is raised with
//! [`ZOrderManager::move_to_front`].
//!
//! # Usage
//!
//! ```ignore
//! let mut focus = FocusStack::new();
//! focus.update_focus(&mut tree, Some(text_field));
//! assert_eq!(focus.top_level(), Some(window));
//!
//! focus.update_focus(&mut tree, None);
//! assert!(focus.is_empty());
//! ```

use horizon_screen_core::logging::targets;
use horizon_screen_core::WidgetId;

use crate::widget::{KeyEvent, WidgetTree};
use crate::z_order::ZOrderManager;

/// Tracks the focus path of a widget tree.
#[derive(Debug, Clone, Default)]
pub struct FocusStack {
    /// Leaf first, excluding the root.
    path: Vec<WidgetId>,
}

impl FocusStack {
    /// Create an empty focus stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current focus path, leaf first.
    #[inline]
    pub fn path(&self) -> &[WidgetId] {
        &self.path
    }

    /// Whether nothing is focused.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The focused leaf widget.
    #[inline]
    pub fn focused(&self) -> Option<WidgetId> {
        self.path.first().copied()
    }

    /// The outermost entry of the path, a direct child of the root.
    #[inline]
    pub fn top_level(&self) -> Option<WidgetId> {
        self.path.last().copied()
    }

    /// Whether `id` is on the focus path.
    pub fn contains(&self, id: WidgetId) -> bool {
        self.path.contains(&id)
    }

    /// Move focus to `target` and all of its ancestors.
    ///
    /// `None`, the root, or an unknown ID clear the path.
    ///
    /// # Returns
    ///
    /// The window that was raised to the front, if any.
    pub fn update_focus(
        &mut self,
        tree: &mut WidgetTree,
        target: Option<WidgetId>,
    ) -> Option<WidgetId> {
        let new_path = target.map(|id| tree.path_to_root(id)).unwrap_or_default();
        let old_path = std::mem::replace(&mut self.path, new_path);

        for &id in old_path.iter().filter(|id| !self.path.contains(id)) {
            Self::notify(tree, id, false);
        }
        for &id in self.path.iter().filter(|id| !old_path.contains(id)) {
            Self::notify(tree, id, true);
        }

        tracing::debug!(
            target: targets::FOCUS,
            focused = ?self.focused(),
            depth = self.path.len(),
            "focus updated"
        );

        let window = self
            .top_level()
            .filter(|&top| tree.base(top).is_some_and(|base| base.kind().is_window()))?;
        ZOrderManager::move_to_front(tree, window).then_some(window)
    }

    /// Clear the focus path, notifying every entry.
    pub fn clear(&mut self, tree: &mut WidgetTree) {
        if !self.path.is_empty() {
            self.update_focus(tree, None);
        }
    }

    /// Deliver a key event along the focus path, leaf first.
    ///
    /// Only entries still flagged as focused are offered the event. Stops at
    /// the first widget that handles it.
    pub fn key_event(&self, tree: &mut WidgetTree, event: &KeyEvent) -> bool {
        self.deliver(tree, |tree, id| {
            tree.with_widget(id, |widget, ctx| widget.keyboard_event(ctx, event))
                .is_some_and(|(handled, _)| handled)
        })
    }

    /// Deliver a typed character along the focus path, leaf first.
    pub fn char_event(&self, tree: &mut WidgetTree, ch: char) -> bool {
        self.deliver(tree, |tree, id| {
            tree.with_widget(id, |widget, ctx| widget.keyboard_character_event(ctx, ch))
                .is_some_and(|(handled, _)| handled)
        })
    }

    fn deliver(
        &self,
        tree: &mut WidgetTree,
        mut send: impl FnMut(&mut WidgetTree, WidgetId) -> bool,
    ) -> bool {
        for &id in &self.path {
            let focused = tree.base(id).is_some_and(|base| base.has_focus());
            if focused && send(tree, id) {
                tracing::trace!(target: targets::FOCUS, ?id, "keyboard input handled");
                return true;
            }
        }
        false
    }

    fn notify(tree: &mut WidgetTree, id: WidgetId, focused: bool) {
        let Some(base) = tree.base_mut(id) else {
            return;
        };
        base.set_focused(focused);
        tree.with_widget(id, |widget, ctx| widget.focus_event(ctx, focused));
        tracing::trace!(target: targets::FOCUS, ?id, focused, "focus event");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use horizon_screen_core::Size;

    use super::*;
    use crate::widget::{
        EventContext, KeyAction, KeyCode, KeyboardModifiers, Panel, Widget, WidgetBase,
    };

    type Log = Rc<RefCell<Vec<(&'static str, bool)>>>;

    struct FocusProbe {
        name: &'static str,
        log: Log,
        handles_keys: bool,
    }

    impl Widget for FocusProbe {
        fn focus_event(&mut self, _ctx: &mut EventContext<'_>, focused: bool) -> bool {
            self.log.borrow_mut().push((self.name, focused));
            true
        }

        fn keyboard_event(&mut self, _ctx: &mut EventContext<'_>, _event: &KeyEvent) -> bool {
            self.log.borrow_mut().push((self.name, true));
            self.handles_keys
        }
    }

    struct Fixture {
        tree: WidgetTree,
        log: Log,
        window: WidgetId,
        field: WidgetId,
        other_window: WidgetId,
        other_field: WidgetId,
    }

    fn probe(log: &Log, name: &'static str) -> FocusProbe {
        FocusProbe {
            name,
            log: log.clone(),
            handles_keys: false,
        }
    }

    fn fixture() -> Fixture {
        let log = Log::default();
        let mut tree = WidgetTree::new(Size::new(800.0, 600.0));
        let root = tree.root();
        let window = tree.insert(root, WidgetBase::window(false), probe(&log, "window")).unwrap();
        let field = tree.insert(window, WidgetBase::new(), probe(&log, "field")).unwrap();
        let other_window = tree
            .insert(root, WidgetBase::window(false), probe(&log, "other_window"))
            .unwrap();
        let other_field = tree
            .insert(other_window, WidgetBase::new(), probe(&log, "other_field"))
            .unwrap();
        Fixture {
            tree,
            log,
            window,
            field,
            other_window,
            other_field,
        }
    }

    #[test]
    fn test_path_is_ancestor_chain() {
        let mut f = fixture();
        let mut focus = FocusStack::new();
        let raised = focus.update_focus(&mut f.tree, Some(f.field));

        assert_eq!(focus.path(), &[f.field, f.window]);
        assert_eq!(raised, Some(f.window));
        assert_eq!(f.tree.children(f.tree.root()).last(), Some(&f.window));
        assert!(f.tree.base(f.field).unwrap().has_focus());
        assert_eq!(*f.log.borrow(), vec![("field", true), ("window", true)]);
    }

    #[test]
    fn test_switch_sends_path_difference() {
        let mut f = fixture();
        let mut focus = FocusStack::new();
        focus.update_focus(&mut f.tree, Some(f.field));
        f.log.borrow_mut().clear();

        focus.update_focus(&mut f.tree, Some(f.window));
        assert_eq!(focus.path(), &[f.window]);
        assert_eq!(*f.log.borrow(), vec![("field", false)]);
        f.log.borrow_mut().clear();

        focus.update_focus(&mut f.tree, Some(f.other_field));
        assert_eq!(
            *f.log.borrow(),
            vec![("window", false), ("other_field", true), ("other_window", true)]
        );
        assert!(!f.tree.base(f.window).unwrap().has_focus());
        assert_eq!(focus.top_level(), Some(f.other_window));
    }

    #[test]
    fn test_none_and_root_clear_path() {
        let mut f = fixture();
        let mut focus = FocusStack::new();
        focus.update_focus(&mut f.tree, Some(f.other_field));
        f.log.borrow_mut().clear();

        assert_eq!(focus.update_focus(&mut f.tree, None), None);
        assert!(focus.is_empty());
        assert_eq!(*f.log.borrow(), vec![("other_field", false), ("other_window", false)]);

        focus.update_focus(&mut f.tree, Some(f.field));
        let root = f.tree.root();
        focus.update_focus(&mut f.tree, Some(root));
        assert!(focus.is_empty());
    }

    #[test]
    fn test_key_event_stops_at_first_handler() {
        let mut f = fixture();
        let root = f.tree.root();
        let keyed = f
            .tree
            .insert(
                root,
                WidgetBase::window(false),
                FocusProbe {
                    name: "keyed",
                    log: f.log.clone(),
                    handles_keys: true,
                },
            )
            .unwrap();
        let leaf = f.tree.insert(keyed, WidgetBase::new(), probe(&f.log, "leaf")).unwrap();

        let mut focus = FocusStack::new();
        focus.update_focus(&mut f.tree, Some(leaf));
        f.log.borrow_mut().clear();

        let event = KeyEvent {
            key: KeyCode(65),
            scancode: 30,
            action: KeyAction::Press,
            modifiers: KeyboardModifiers::NONE,
        };
        assert!(focus.key_event(&mut f.tree, &event));
        assert_eq!(*f.log.borrow(), vec![("leaf", true), ("keyed", true)]);
    }

    #[test]
    fn test_key_event_without_focus_is_unhandled() {
        let mut f = fixture();
        let focus = FocusStack::new();
        assert!(!focus.char_event(&mut f.tree, 'x'));
    }

    #[test]
    fn test_plain_top_level_is_not_raised() {
        let mut tree = WidgetTree::new(Size::new(100.0, 100.0));
        let root = tree.root();
        let plain = tree.insert(root, WidgetBase::new(), Panel).unwrap();
        tree.insert(root, WidgetBase::window(false), Panel).unwrap();

        let mut focus = FocusStack::new();
        assert_eq!(focus.update_focus(&mut tree, Some(plain)), None);
        assert_eq!(tree.children(root).first(), Some(&plain));
    }
}
