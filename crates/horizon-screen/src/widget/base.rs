//! Widget base implementation.
//!
//! This module provides `WidgetBase`, the state the screen controller needs
//! to know about every widget: geometry, visibility, focus flags, cursor,
//! tooltip text and the widget's [`WidgetKind`].

use cursor_icon::CursorIcon;
use horizon_screen_core::{Point, Rect, Size, WidgetId};

/// Structural role of a widget, queried instead of downcasting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetKind {
    /// An ordinary widget.
    #[default]
    Plain,
    /// A top-level window. Modal windows block pointer input outside themselves
    /// while they own the focus path.
    Window {
        /// Whether the window is modal.
        modal: bool,
    },
    /// A popup window anchored to a parent window.
    ///
    /// The anchor is a non-owning reference: if the anchor is removed the
    /// popup is simply no longer promoted along with it.
    Popup {
        /// The window this popup is attached to.
        anchor: Option<WidgetId>,
    },
}

impl WidgetKind {
    /// Whether this widget is a window (popups are windows too).
    #[inline]
    pub fn is_window(&self) -> bool {
        !matches!(self, Self::Plain)
    }

    /// Whether this widget is a modal window.
    #[inline]
    pub fn is_modal(&self) -> bool {
        matches!(self, Self::Window { modal: true })
    }

    /// Whether this widget is a popup.
    #[inline]
    pub fn is_popup(&self) -> bool {
        matches!(self, Self::Popup { .. })
    }

    /// The anchor window of a popup.
    #[inline]
    pub fn anchor(&self) -> Option<WidgetId> {
        match self {
            Self::Popup { anchor } => *anchor,
            _ => None,
        }
    }

    /// Short name used in debug dumps.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Plain => "Widget",
            Self::Window { modal: false } => "Window",
            Self::Window { modal: true } => "ModalWindow",
            Self::Popup { .. } => "Popup",
        }
    }
}

/// The base state shared by all widgets.
///
/// Widget implementations never own a `WidgetBase` themselves; the
/// [`WidgetTree`](super::WidgetTree) stores one next to each widget and hands
/// a shared reference to the widget's handlers through
/// [`EventContext`](super::EventContext).
///
/// # Example
///
/// ```ignore
/// use horizon_screen::widget::WidgetBase;
///
/// let base = WidgetBase::window(false)
///     .with_position(Point::new(40.0, 40.0))
///     .with_size(Size::new(200.0, 120.0))
///     .with_tooltip("Settings");
/// ```
#[derive(Debug, Clone)]
pub struct WidgetBase {
    /// Position relative to the parent.
    position: Point,

    /// Size of the widget.
    size: Size,

    /// Whether the widget is visible.
    visible: bool,

    /// Whether a left click should focus this widget.
    focusable: bool,

    /// Whether the widget is on the focus path.
    focused: bool,

    /// Whether the pointer is currently over this widget.
    hovered: bool,

    /// Cursor shown while the pointer is over this widget.
    cursor: CursorIcon,

    /// Tooltip text, empty for none.
    tooltip: String,

    /// Structural role.
    kind: WidgetKind,
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetBase {
    /// Create a plain, visible, non-focusable widget base.
    pub fn new() -> Self {
        Self {
            position: Point::ZERO,
            size: Size::ZERO,
            visible: true,
            focusable: false,
            focused: false,
            hovered: false,
            cursor: CursorIcon::Default,
            tooltip: String::new(),
            kind: WidgetKind::Plain,
        }
    }

    /// Create a base for a top-level window. Windows are focusable.
    pub fn window(modal: bool) -> Self {
        Self {
            focusable: true,
            kind: WidgetKind::Window { modal },
            ..Self::new()
        }
    }

    /// Create a base for a popup attached to `anchor`.
    pub fn popup(anchor: Option<WidgetId>) -> Self {
        Self {
            focusable: true,
            kind: WidgetKind::Popup { anchor },
            ..Self::new()
        }
    }

    /// Set the position relative to the parent.
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Set the size.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Set the tooltip text.
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = tooltip.into();
        self
    }

    /// Set the hover cursor.
    pub fn with_cursor(mut self, cursor: CursorIcon) -> Self {
        self.cursor = cursor;
        self
    }

    /// Set whether a left click focuses this widget.
    pub fn with_focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    /// Set the initial visibility.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Position relative to the parent.
    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Move the widget within its parent.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Size of the widget.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Resize the widget.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Rectangle in parent coordinates.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    /// Check whether a point in parent coordinates lies inside the widget.
    pub fn contains(&self, point: Point) -> bool {
        self.rect().contains(point)
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Whether the widget is visible.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the widget.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Whether a left click focuses this widget.
    #[inline]
    pub fn is_focusable(&self) -> bool {
        self.focusable
    }

    /// Set whether a left click focuses this widget.
    pub fn set_focusable(&mut self, focusable: bool) {
        self.focusable = focusable;
    }

    /// Whether the widget is on the focus path.
    #[inline]
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Whether the pointer is over this widget.
    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub(crate) fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Cursor shown while the pointer is over this widget.
    #[inline]
    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    /// Change the hover cursor.
    pub fn set_cursor(&mut self, cursor: CursorIcon) {
        self.cursor = cursor;
    }

    /// Tooltip text, empty for none.
    #[inline]
    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    /// Change the tooltip text.
    pub fn set_tooltip(&mut self, tooltip: impl Into<String>) {
        self.tooltip = tooltip.into();
    }

    /// Structural role.
    #[inline]
    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    /// Re-anchor a popup. Has no effect on other kinds.
    pub fn set_anchor(&mut self, anchor: Option<WidgetId>) {
        if let WidgetKind::Popup { anchor: current } = &mut self.kind {
            *current = anchor;
        }
    }
}
