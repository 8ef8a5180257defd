//! Window stacking order.
//!
//! The children of the root widget are the top-level windows, ordered back
//! to front. [`ZOrderManager`] raises a window to the front and keeps every
//! popup anchored to it (directly or through other popups) in front of its
//! anchor.

use horizon_screen_core::logging::targets;
use horizon_screen_core::WidgetId;

use crate::widget::WidgetTree;

/// Raises windows while keeping popups above their anchors.
///
/// # Example
///
/// ```ignore
/// // [other, window, popup] -> [other, window, popup] stays consistent
/// // [popup, window, other] -> [other, window, popup]
/// ZOrderManager::move_to_front(&mut tree, window);
/// ```
pub struct ZOrderManager;

impl ZOrderManager {
    /// Move `window` to the front of the root's children, followed by every
    /// popup chained to it.
    ///
    /// Popups are promoted repeatedly until a full scan finds none behind
    /// its anchor, so chains of any depth end up in front of their anchor
    /// in anchor order.
    ///
    /// # Returns
    ///
    /// `false` if `window` is not a direct child of the root; the order is
    /// left untouched in that case.
    pub fn move_to_front(tree: &mut WidgetTree, window: WidgetId) -> bool {
        if window == tree.root() || tree.parent(window) != Some(tree.root()) {
            tracing::warn!(target: targets::Z_ORDER, ?window, "not a top-level widget, ignoring");
            return false;
        }
        let mut promoted = Vec::new();
        Self::promote(tree, window, &mut promoted);
        tracing::debug!(
            target: targets::Z_ORDER,
            ?window,
            popups = promoted.len() - 1,
            "window moved to front"
        );
        true
    }

    fn promote(tree: &mut WidgetTree, window: WidgetId, promoted: &mut Vec<WidgetId>) {
        promoted.push(window);
        tree.move_to_front(window);

        loop {
            let root = tree.root();
            let order = tree.children(root);
            let Some(base_index) = order.iter().position(|&child| child == window) else {
                return;
            };
            let behind = order[..base_index].iter().copied().find(|&child| {
                !promoted.contains(&child)
                    && tree
                        .base(child)
                        .is_some_and(|base| base.kind().anchor() == Some(window))
            });
            match behind {
                Some(popup) => {
                    tracing::trace!(
                        target: targets::Z_ORDER,
                        ?popup,
                        anchor = ?window,
                        "promoting popup"
                    );
                    Self::promote(tree, popup, promoted);
                }
                None => return,
            }
        }
    }

    /// Check that no popup sits behind its anchor among the root's children.
    pub fn is_consistent(tree: &WidgetTree) -> bool {
        let order = tree.children(tree.root());
        order.iter().enumerate().all(|(index, &child)| {
            let anchor = tree.base(child).and_then(|base| base.kind().anchor());
            match anchor.and_then(|anchor| order.iter().position(|&id| id == anchor)) {
                Some(anchor_index) => anchor_index < index,
                None => true,
            }
        })
    }
}
