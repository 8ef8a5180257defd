//! Widget-specific event types.
//!
//! This module defines the input payloads delivered to [`Widget`](super::Widget)
//! handlers together with the button, modifier and key types shared with the
//! host layer.
//!
//! # Coordinate Conventions
//!
//! Generic pointer events (button, motion, scroll) carry their position in
//! the coordinate space of the receiving widget's *parent*, so a widget can
//! compare it directly against its own position. Subtract
//! [`WidgetBase::position`](super::WidgetBase::position) to obtain
//! widget-local coordinates.
//!
//! Drag events are different: they are delivered straight to the captured
//! widget and already carry widget-local coordinates.

use horizon_screen_core::Point;

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        shift: false,
        control: true,
        alt: false,
        meta: false,
    };

    /// Alt modifier only.
    pub const ALT: Self = Self {
        shift: false,
        control: false,
        alt: true,
        meta: false,
    };

    /// Build modifiers from a host bitmask (shift = 1, control = 2, alt = 4, meta = 8).
    pub fn from_bits(bits: u8) -> Self {
        Self {
            shift: bits & 0x1 != 0,
            control: bits & 0x2 != 0,
            alt: bits & 0x4 != 0,
            meta: bits & 0x8 != 0,
        }
    }

    /// The modifiers as a bitmask, using the layout of [`from_bits`](Self::from_bits).
    pub fn bits(&self) -> u8 {
        u8::from(self.shift)
            | u8::from(self.control) << 1
            | u8::from(self.alt) << 2
            | u8::from(self.meta) << 3
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    /// Primary button (usually left). Starts drag capture.
    Left = 0,
    /// Secondary button (usually right).
    Right = 1,
    /// Middle button (scroll wheel click).
    Middle = 2,
    /// Additional button 1 (e.g., browser back).
    Button4 = 3,
    /// Additional button 2 (e.g., browser forward).
    Button5 = 4,
}

impl MouseButton {
    /// Bit used for this button in a [`MouseButtons`] mask.
    #[inline]
    pub fn mask(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of mouse buttons currently held, as a bitmask (`1 << button`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct MouseButtons(u8);

impl MouseButtons {
    /// No buttons held.
    pub const NONE: Self = Self(0);

    /// Mark a button as held.
    #[inline]
    pub fn insert(&mut self, button: MouseButton) {
        self.0 |= button.mask();
    }

    /// Mark a button as released.
    #[inline]
    pub fn remove(&mut self, button: MouseButton) {
        self.0 &= !button.mask();
    }

    /// Check whether a button is held.
    #[inline]
    pub fn contains(&self, button: MouseButton) -> bool {
        self.0 & button.mask() != 0
    }

    /// Check whether no button is held.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// The raw bitmask.
    #[inline]
    pub fn bits(&self) -> u8 {
        self.0
    }
}

/// Host-specific key code.
///
/// The screen never interprets key codes; they are passed through to the
/// focused widgets unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCode(pub u32);

/// What happened to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// The key went down.
    Press,
    /// The key came up.
    Release,
    /// The key is held and the platform generated an auto-repeat.
    Repeat,
}

/// Mouse button press or release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseButtonEvent {
    /// Position in the receiving widget's parent coordinates.
    pub pos: Point,
    /// The button that changed state.
    pub button: MouseButton,
    /// `true` for a press, `false` for a release.
    pub pressed: bool,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

/// Pointer motion without capture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseMotionEvent {
    /// Position in the receiving widget's parent coordinates.
    pub pos: Point,
    /// Movement since the previous pointer position.
    pub rel: Point,
    /// Mouse buttons currently held.
    pub buttons: MouseButtons,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

/// Pointer motion delivered to the widget holding drag capture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseDragEvent {
    /// Position relative to the widget's absolute top-left corner.
    pub pos: Point,
    /// Movement since the previous pointer position.
    pub rel: Point,
    /// Mouse buttons currently held.
    pub buttons: MouseButtons,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

/// Scroll wheel or trackpad scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEvent {
    /// Position in the receiving widget's parent coordinates.
    pub pos: Point,
    /// Scroll amount along each axis.
    pub delta: Point,
}

/// Key press, release or repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Host key code.
    pub key: KeyCode,
    /// Platform scan code.
    pub scancode: u32,
    /// What happened to the key.
    pub action: KeyAction,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}
