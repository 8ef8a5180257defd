//! Modal input blocking.
//!
//! While the top-level entry of the focus path is a modal window, pointer
//! buttons and scrolling outside that window are dropped before they reach
//! any widget. [`ModalGate`] implements that containment rule.

use horizon_screen_core::logging::targets;
use horizon_screen_core::{Point, Rect, WidgetId};

use crate::widget::WidgetTree;

/// Decides whether pointer input must be dropped because of a modal window.
pub struct ModalGate;

impl ModalGate {
    /// The modal window currently owning the focus path, if any.
    pub fn active_modal(tree: &WidgetTree, focus_path: &[WidgetId]) -> Option<WidgetId> {
        let top = *focus_path.last()?;
        tree.base(top)
            .is_some_and(|base| base.kind().is_modal())
            .then_some(top)
    }

    /// Check whether input at `point` (screen coordinates) is blocked.
    pub fn blocks(tree: &WidgetTree, focus_path: &[WidgetId], point: Point) -> bool {
        let Some(modal) = Self::active_modal(tree, focus_path) else {
            return false;
        };
        let (Some(origin), Some(base)) = (tree.absolute_position(modal), tree.base(modal)) else {
            return false;
        };
        let blocked = !Rect::from_origin_size(origin, base.size()).contains(point);
        if blocked {
            tracing::debug!(
                target: targets::ROUTER,
                ?modal,
                x = point.x,
                y = point.y,
                "input outside modal window dropped"
            );
        }
        blocked
    }
}

#[cfg(test)]
mod tests {
    use horizon_screen_core::Size;

    use super::*;
    use crate::widget::{Panel, WidgetBase};

    fn tree_with(modal: bool) -> (WidgetTree, WidgetId, WidgetId) {
        let mut tree = WidgetTree::new(Size::new(800.0, 600.0));
        let root = tree.root();
        let window = tree
            .insert(
                root,
                WidgetBase::window(modal)
                    .with_position(Point::new(100.0, 100.0))
                    .with_size(Size::new(200.0, 100.0)),
                Panel,
            )
            .unwrap();
        let button = tree.insert(window, WidgetBase::new(), Panel).unwrap();
        (tree, window, button)
    }

    #[test]
    fn test_modal_blocks_outside() {
        let (tree, window, button) = tree_with(true);
        let path = [button, window];
        assert_eq!(ModalGate::active_modal(&tree, &path), Some(window));
        assert!(ModalGate::blocks(&tree, &path, Point::new(50.0, 50.0)));
        assert!(!ModalGate::blocks(&tree, &path, Point::new(150.0, 150.0)));
    }

    #[test]
    fn test_non_modal_never_blocks() {
        let (tree, window, button) = tree_with(false);
        assert!(!ModalGate::blocks(&tree, &[button, window], Point::new(50.0, 50.0)));
        assert!(!ModalGate::blocks(&tree, &[], Point::new(50.0, 50.0)));
    }
}
