//! Widget identifiers.
//!
//! Widgets are stored in an arena (see `horizon_screen::widget::WidgetTree`)
//! and referenced everywhere else by [`WidgetId`]. Parent links, popup anchors,
//! the focus path and the drag target all hold ids rather than owning
//! pointers, so a widget that has been removed simply stops resolving.

use slotmap::new_key_type;

new_key_type! {
    /// A unique identifier for a widget in a widget tree.
    ///
    /// `WidgetId`s are stable handles that remain valid while the widget is
    /// part of its tree. They become invalid when the widget is removed; a
    /// removed id is never reused for a different widget.
    pub struct WidgetId;
}

impl WidgetId {
    /// Convert the WidgetId to a raw u64 value.
    ///
    /// This is useful for interop with external systems that need a numeric ID.
    /// The raw value can be converted back using [`WidgetId::from_raw`].
    #[inline]
    pub fn as_raw(self) -> u64 {
        use slotmap::Key;
        self.data().as_ffi()
    }

    /// Create a WidgetId from a raw u64 value.
    ///
    /// Note: This does not check if the WidgetId exists in any tree.
    #[inline]
    pub fn from_raw(raw: u64) -> Self {
        Self::from(slotmap::KeyData::from_ffi(raw))
    }
}
