//! Time sources for interaction tracking.
//!
//! The screen stamps every input event with the current time so it can
//! measure how long the pointer has been idle (used by the tooltip timer).
//! Time is expressed as a [`Duration`] since an arbitrary per-clock epoch.
//!
//! - [`SystemClock`] reads the monotonic system clock.
//! - [`ManualClock`] only moves when told to, which makes frame-by-frame
//!   behavior reproducible in tests and in hosts that drive their own time.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// A monotonic source of "now".
pub trait Clock {
    /// Time elapsed since this clock's epoch. Must never decrease.
    fn now(&self) -> Duration;
}

/// Monotonic wall clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    /// Create a clock whose epoch is the current instant.
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

/// A clock that only advances when explicitly told to.
///
/// Clones share the same underlying time, so a test can keep one handle
/// while the screen owns another.
///
/// ```
/// use std::time::Duration;
/// use horizon_screen_core::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let handle = clock.clone();
/// handle.advance(Duration::from_millis(750));
/// assert_eq!(clock.now(), Duration::from_millis(750));
/// ```
#[derive(Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Create a clock positioned at its epoch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Jump to an absolute time. Times earlier than the current one are ignored.
    pub fn set(&self, to: Duration) {
        if to > self.now.get() {
            self.now.set(to);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

impl fmt::Debug for ManualClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualClock")
            .field("now", &self.now.get())
            .finish()
    }
}
