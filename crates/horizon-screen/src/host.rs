//! Host window and renderer collaborators.
//!
//! The screen never talks to a windowing system or a graphics API
//! directly. Instead the host application implements two small traits:
//!
//! - [`HostWindow`]: the native window (sizes, title, visibility, cursor,
//!   buffer swaps and destruction)
//! - [`Renderer`]: the vector drawing context (frame brackets, clearing,
//!   text measurement and the tooltip bubble)
//!
//! Raw window callbacks are handed to the screen as [`HostEvent`] values
//! through [`Screen::handle_host_event`](crate::Screen::handle_host_event).
//!
//! # Usage
//!
//! ```ignore
//! // In your winit event handler:
//! match event {
//!     WindowEvent::CursorMoved { position, .. } => {
//!         screen.handle_host_event(HostEvent::CursorPos {
//!             x: position.x,
//!             y: position.y,
//!         });
//!     }
//!     WindowEvent::DroppedFile(path) => {
//!         screen.handle_host_event(HostEvent::Drop { paths: vec![path] });
//!     }
//!     _ => {}
//! }
//! ```

use std::path::PathBuf;

use cursor_icon::CursorIcon;
use horizon_screen_core::{Color, Point, Rect, Size};

use crate::tooltip::TooltipBubble;
use crate::widget::{KeyAction, KeyCode, KeyboardModifiers, MouseButton};

/// The native window a screen is attached to.
pub trait HostWindow {
    /// Window size in logical pixels.
    fn logical_size(&self) -> Size;

    /// Framebuffer size in physical pixels.
    fn framebuffer_size(&self) -> Size;

    /// Request a new logical size.
    fn set_size(&mut self, size: Size);

    /// Change the window title.
    fn set_title(&mut self, title: &str);

    /// Show or hide the window.
    fn set_visible(&mut self, visible: bool);

    /// Change the pointer cursor shape.
    fn set_cursor(&mut self, cursor: CursorIcon);

    /// Present the rendered frame.
    fn swap_buffers(&mut self);

    /// Destroy the native window. Called at most once, when the screen is dropped.
    fn destroy(&mut self);
}

/// The drawing context used to render widgets and tooltips.
pub trait Renderer {
    /// Clear the framebuffer.
    fn clear(&mut self, color: Color);

    /// Begin a frame of the given logical size.
    fn begin_frame(&mut self, size: Size, pixel_ratio: f32);

    /// Finish the current frame.
    fn end_frame(&mut self);

    /// Measure `text` wrapped at `width`, laid out with its top-left corner at `origin`.
    ///
    /// Returns the bounds in absolute coordinates.
    fn text_box_bounds(&mut self, origin: Point, width: f32, text: &str) -> Rect;

    /// Draw a tooltip bubble.
    fn draw_tooltip(&mut self, bubble: &TooltipBubble);

    /// Release the underlying graphics context. Called once, before the host
    /// window is destroyed.
    fn release(&mut self);
}

/// A raw host callback, expressed as data.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// The cursor moved, in uncalibrated window coordinates.
    CursorPos {
        /// Horizontal position.
        x: f64,
        /// Vertical position.
        y: f64,
    },
    /// A mouse button changed state.
    MouseButton {
        /// The button.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
        /// Held modifiers.
        modifiers: KeyboardModifiers,
    },
    /// A key changed state.
    Key {
        /// Host key code.
        key: KeyCode,
        /// Platform scan code.
        scancode: u32,
        /// Press, release or repeat.
        action: KeyAction,
        /// Held modifiers.
        modifiers: KeyboardModifiers,
    },
    /// A character was typed.
    Char {
        /// The typed character.
        ch: char,
    },
    /// The scroll wheel or trackpad scrolled.
    Scroll {
        /// Horizontal amount.
        x: f64,
        /// Vertical amount.
        y: f64,
    },
    /// The framebuffer was resized.
    FramebufferSize {
        /// New framebuffer width.
        width: u32,
        /// New framebuffer height.
        height: u32,
    },
    /// Files were dropped onto the window.
    Drop {
        /// The dropped paths.
        paths: Vec<PathBuf>,
    },
}

/// Callback invoked after a non-degenerate resize with the framebuffer size.
/// Returns whether the resize was handled.
pub type ResizeCallback = Box<dyn FnMut(Size) -> bool>;

/// Callback invoked with dropped file paths. Returns whether the drop was handled.
pub type DropCallback = Box<dyn FnMut(&[PathBuf]) -> bool>;

/// Hook invoked before widgets are drawn, for custom background content.
pub type DrawContentsCallback = Box<dyn FnMut(&mut dyn Renderer)>;

/// Compute the framebuffer to logical pixel ratio, falling back to 1.0 for
/// degenerate sizes.
pub fn pixel_ratio(framebuffer: Size, logical: Size) -> f32 {
    if logical.width > 0.0 && framebuffer.width > 0.0 {
        framebuffer.width / logical.width
    } else {
        1.0
    }
}
