//! Widget tree storage.
//!
//! [`WidgetTree`] owns every widget of a screen in a slot map keyed by
//! [`WidgetId`]. Parent links and child lists are plain IDs, so a reference
//! to a removed widget simply fails to resolve instead of dangling.
//!
//! Children are ordered back to front: the last child is drawn last and is
//! the first candidate for hit-testing.

use horizon_screen_core::logging::targets;
use horizon_screen_core::{Point, Result, ScreenError, Size, TreeSource, WidgetId};
use slotmap::SlotMap;

use super::base::WidgetBase;
use super::traits::{EventContext, Panel, Widget};

struct Node {
    base: WidgetBase,
    widget: Box<dyn Widget>,
    parent: Option<WidgetId>,
    children: Vec<WidgetId>,
}

/// Arena that owns a screen's widgets.
///
/// The tree is created with a root [`Panel`] which can never be removed.
pub struct WidgetTree {
    nodes: SlotMap<WidgetId, Node>,
    root: WidgetId,
}

impl WidgetTree {
    /// Create a tree whose root covers `size`.
    pub fn new(size: Size) -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node {
            base: WidgetBase::new().with_size(size),
            widget: Box::new(Panel),
            parent: None,
            children: Vec::new(),
        });
        Self { nodes, root }
    }

    /// The root widget.
    #[inline]
    pub fn root(&self) -> WidgetId {
        self.root
    }

    /// Number of widgets, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree only holds its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Whether `id` refers to a live widget.
    #[inline]
    pub fn contains(&self, id: WidgetId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Add a widget as the front-most child of `parent`.
    pub fn insert(
        &mut self,
        parent: WidgetId,
        base: WidgetBase,
        widget: impl Widget + 'static,
    ) -> Result<WidgetId> {
        self.insert_boxed(parent, base, Box::new(widget))
    }

    /// Add an already boxed widget as the front-most child of `parent`.
    pub fn insert_boxed(
        &mut self,
        parent: WidgetId,
        base: WidgetBase,
        widget: Box<dyn Widget>,
    ) -> Result<WidgetId> {
        if !self.nodes.contains_key(parent) {
            return Err(ScreenError::InvalidWidget(parent));
        }
        let kind = base.kind();
        let id = self.nodes.insert(Node {
            base,
            widget,
            parent: Some(parent),
            children: Vec::new(),
        });
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.push(id);
        }
        tracing::debug!(target: targets::TREE, ?id, ?parent, kind = kind.name(), "widget inserted");
        Ok(id)
    }

    /// Remove a widget and its whole subtree.
    ///
    /// Returns the removed IDs, the widget itself first.
    pub fn remove(&mut self, id: WidgetId) -> Result<Vec<WidgetId>> {
        if id == self.root {
            return Err(ScreenError::RootWidget);
        }
        if !self.nodes.contains_key(id) {
            return Err(ScreenError::InvalidWidget(id));
        }

        if let Some(parent) = self.parent(id) {
            if let Some(node) = self.nodes.get_mut(parent) {
                node.children.retain(|&child| child != id);
            }
        }

        let mut removed = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.remove(current) {
                stack.extend(node.children.iter().rev());
                removed.push(current);
            }
        }
        tracing::debug!(target: targets::TREE, ?id, count = removed.len(), "subtree removed");
        Ok(removed)
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// The base state of a widget.
    #[inline]
    pub fn base(&self, id: WidgetId) -> Option<&WidgetBase> {
        self.nodes.get(id).map(|node| &node.base)
    }

    /// Mutable base state of a widget.
    #[inline]
    pub fn base_mut(&mut self, id: WidgetId) -> Option<&mut WidgetBase> {
        self.nodes.get_mut(id).map(|node| &mut node.base)
    }

    /// The widget's handlers.
    pub fn widget(&self, id: WidgetId) -> Option<&dyn Widget> {
        self.nodes.get(id).map(|node| node.widget.as_ref())
    }

    /// The parent of a widget. `None` for the root and for unknown IDs.
    #[inline]
    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.nodes.get(id).and_then(|node| node.parent)
    }

    /// Children of a widget, back to front. Empty for unknown IDs.
    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        self.nodes
            .get(id)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    /// Whether `id` is `ancestor` or lies inside its subtree.
    pub fn is_within(&self, id: WidgetId, ancestor: WidgetId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    /// The chain from `id` up to, but excluding, the root.
    ///
    /// Empty for the root itself and for unknown IDs.
    pub fn path_to_root(&self, id: WidgetId) -> Vec<WidgetId> {
        let mut path = Vec::new();
        if !self.contains(id) {
            return path;
        }
        let mut current = Some(id);
        while let Some(node) = current {
            if node == self.root {
                break;
            }
            path.push(node);
            current = self.parent(node);
        }
        path
    }

    /// The direct child of the root that contains `id`.
    pub fn top_level(&self, id: WidgetId) -> Option<WidgetId> {
        self.path_to_root(id).last().copied()
    }

    /// Position of a widget in screen coordinates.
    pub fn absolute_position(&self, id: WidgetId) -> Option<Point> {
        let mut node = self.nodes.get(id)?;
        let mut position = node.base.position();
        while let Some(parent) = node.parent {
            node = self.nodes.get(parent)?;
            position += node.base.position();
        }
        Some(position)
    }

    /// Move a widget to the front of its parent's child list.
    ///
    /// Returns `false` for the root and for unknown IDs.
    pub fn move_to_front(&mut self, id: WidgetId) -> bool {
        let Some(parent) = self.parent(id) else {
            return false;
        };
        let Some(node) = self.nodes.get_mut(parent) else {
            return false;
        };
        let Some(index) = node.children.iter().position(|&child| child == id) else {
            return false;
        };
        let child = node.children.remove(index);
        node.children.push(child);
        true
    }

    /// Run `f` against a widget's handlers with a fresh [`EventContext`].
    ///
    /// Returns the handler's result and whether it requested focus, or
    /// `None` if the widget does not exist.
    pub(crate) fn with_widget<R>(
        &mut self,
        id: WidgetId,
        f: impl FnOnce(&mut dyn Widget, &mut EventContext<'_>) -> R,
    ) -> Option<(R, bool)> {
        let Node { base, widget, .. } = self.nodes.get_mut(id)?;
        let mut ctx = EventContext::new(id, base);
        let result = f(widget.as_mut(), &mut ctx);
        Some((result, ctx.focus_requested()))
    }
}

impl TreeSource for WidgetTree {
    type Id = WidgetId;

    fn label(&self, id: WidgetId) -> String {
        let Some(base) = self.base(id) else {
            return "<removed>".to_string();
        };
        let pos = base.position();
        let size = base.size();
        let mut label = format!("({}, {}) {}x{}", pos.x, pos.y, size.width, size.height);
        if !base.is_visible() {
            label.push_str(" hidden");
        }
        if base.has_focus() {
            label.push_str(" focused");
        }
        if !base.tooltip().is_empty() {
            label.push_str(&format!(" tooltip={:?}", base.tooltip()));
        }
        label
    }

    fn kind(&self, id: WidgetId) -> &'static str {
        if id == self.root {
            return "Screen";
        }
        self.base(id).map_or("Widget", |base| base.kind().name())
    }

    fn children(&self, id: WidgetId) -> Vec<WidgetId> {
        WidgetTree::children(self, id).to_vec()
    }
}
