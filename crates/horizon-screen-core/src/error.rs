//! Error types for Horizon Screen.
//!
//! Input routing never fails: unhandled or degenerate events are absorbed
//! and reported through `bool` return values. Errors only arise from
//! structural operations on the widget tree and from configuration.

use thiserror::Error;

use crate::id::WidgetId;

/// The main error type for Horizon Screen operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScreenError {
    /// The widget ID is unknown or the widget has already been removed.
    #[error("invalid or removed widget: {0:?}")]
    InvalidWidget(WidgetId),

    /// The operation is not permitted on the root widget.
    #[error("operation not permitted on the root widget")]
    RootWidget,

    /// The widget exists but is not a window.
    #[error("widget {0:?} is not a window")]
    NotAWindow(WidgetId),

    /// The screen configuration was rejected.
    #[error("invalid screen configuration: {0}")]
    InvalidConfig(String),
}

/// A specialized Result type for Horizon Screen operations.
pub type Result<T> = std::result::Result<T, ScreenError>;
