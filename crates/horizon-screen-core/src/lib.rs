//! Core types for Horizon Screen.
//!
//! This crate provides the leaf building blocks shared by the screen
//! controller in `horizon-screen`:
//!
//! - **Identifiers**: [`WidgetId`], an arena key used for every non-owning
//!   widget reference (parents, popup anchors, focus path, drag target)
//! - **Geometry**: [`Point`], [`Size`], [`Rect`] and [`Color`]
//! - **Time**: the [`Clock`] trait with [`SystemClock`] and [`ManualClock`]
//! - **Errors**: [`ScreenError`] and the [`Result`] alias
//! - **Logging**: `tracing` targets and the [`TreeFormatter`] debug dump
//!
//! # Clock Example
//!
//! ```
//! use std::time::Duration;
//! use horizon_screen_core::{Clock, ManualClock};
//!
//! let clock = ManualClock::new();
//! clock.advance(Duration::from_millis(500));
//! assert_eq!(clock.now().as_secs_f32(), 0.5);
//! ```

mod clock;
mod error;
mod geometry;
mod id;
pub mod logging;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Result, ScreenError};
pub use geometry::{Color, Point, Rect, Size};
pub use id::WidgetId;
pub use logging::{PerfSpan, TreeFormatOptions, TreeFormatter, TreeSource, TreeStyle};
