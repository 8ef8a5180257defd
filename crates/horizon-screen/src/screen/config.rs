//! Screen configuration and builder.
//!
//! This module provides `ScreenConfig`, a builder for the options a
//! [`Screen`](super::Screen) is created with.

use std::time::Duration;

use horizon_screen_core::{Color, Point, Result, ScreenError, Size};

use crate::tooltip::TooltipTimer;

/// Configuration for creating a screen.
///
/// # Example
///
/// ```ignore
/// use horizon_screen::ScreenConfig;
///
/// let config = ScreenConfig::new("Editor")
///     .with_size(Size::new(1280.0, 720.0))
///     .with_pointer_offset(Point::ZERO)
///     .with_tooltip_delay(Duration::from_millis(800));
///
/// let screen = Screen::new(host, renderer, config, SystemClock::new())?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenConfig {
    /// Window caption.
    caption: String,
    /// Logical size requested from the host at creation, if any.
    size: Option<Size>,
    /// Whether the window starts visible.
    visible: bool,
    /// Calibration added to raw host pointer coordinates.
    pointer_offset: Point,
    /// Idle time before tooltips appear.
    tooltip_delay: Duration,
    /// Duration of the tooltip fade-in.
    tooltip_fade: Duration,
    /// Opacity reached at the end of the fade-in.
    tooltip_max_opacity: f32,
    /// Wrap width of tooltip text.
    tooltip_width: f32,
    /// Clear color used before drawing each frame.
    background: Color,
    /// Whether the host window is destroyed when the screen is dropped.
    shutdown_host_on_drop: bool,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

impl ScreenConfig {
    /// Create a configuration with the given caption and default settings.
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            size: None,
            visible: true,
            pointer_offset: Point::new(-1.0, -2.0),
            tooltip_delay: Duration::from_millis(500),
            tooltip_fade: Duration::from_millis(500),
            tooltip_max_opacity: 0.8,
            tooltip_width: 150.0,
            background: Color::default(),
            shutdown_host_on_drop: true,
        }
    }

    /// Set the caption.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    /// Request a logical size from the host when the screen is created.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the initial visibility.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Set the calibration added to raw pointer coordinates.
    ///
    /// The default of `(-1, -2)` compensates for the window border of the
    /// GLFW backend.
    pub fn with_pointer_offset(mut self, offset: Point) -> Self {
        self.pointer_offset = offset;
        self
    }

    /// Set the idle time before tooltips appear.
    pub fn with_tooltip_delay(mut self, delay: Duration) -> Self {
        self.tooltip_delay = delay;
        self
    }

    /// Set the duration of the tooltip fade-in.
    pub fn with_tooltip_fade(mut self, fade: Duration) -> Self {
        self.tooltip_fade = fade;
        self
    }

    /// Set the opacity reached at the end of the fade-in.
    pub fn with_tooltip_max_opacity(mut self, opacity: f32) -> Self {
        self.tooltip_max_opacity = opacity;
        self
    }

    /// Set the wrap width of tooltip text.
    pub fn with_tooltip_width(mut self, width: f32) -> Self {
        self.tooltip_width = width;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set whether dropping the screen destroys the host window.
    pub fn with_shutdown_host_on_drop(mut self, shutdown: bool) -> Self {
        self.shutdown_host_on_drop = shutdown;
        self
    }

    /// Get the caption.
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Get the requested size.
    pub fn size(&self) -> Option<Size> {
        self.size
    }

    /// Get the initial visibility.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Get the pointer calibration offset.
    pub fn pointer_offset(&self) -> Point {
        self.pointer_offset
    }

    /// Get the tooltip wrap width.
    pub fn tooltip_width(&self) -> f32 {
        self.tooltip_width
    }

    /// Get the background color.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Get whether dropping the screen destroys the host window.
    pub fn shutdown_host_on_drop(&self) -> bool {
        self.shutdown_host_on_drop
    }

    /// Build the tooltip timer described by this configuration.
    pub fn tooltip_timer(&self) -> TooltipTimer {
        TooltipTimer::new(self.tooltip_delay, self.tooltip_fade, self.tooltip_max_opacity)
    }

    /// Check the configuration for values the screen cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.tooltip_fade.is_zero() {
            return Err(ScreenError::InvalidConfig(
                "tooltip fade must be positive".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.tooltip_max_opacity) {
            return Err(ScreenError::InvalidConfig(format!(
                "tooltip opacity {} is outside [0, 1]",
                self.tooltip_max_opacity
            )));
        }
        if self.tooltip_width.is_nan() || self.tooltip_width <= 0.0 {
            return Err(ScreenError::InvalidConfig(format!(
                "tooltip width {} must be positive",
                self.tooltip_width
            )));
        }
        if let Some(size) = self.size {
            if [size.width, size.height].iter().any(|v| v.is_nan() || *v < 0.0) {
                return Err(ScreenError::InvalidConfig(format!(
                    "screen size {}x{} is negative",
                    size.width, size.height
                )));
            }
        }
        if !(self.pointer_offset.x.is_finite() && self.pointer_offset.y.is_finite()) {
            return Err(ScreenError::InvalidConfig(
                "pointer offset must be finite".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScreenConfig::new("Demo");
        assert_eq!(config.caption(), "Demo");
        assert_eq!(config.pointer_offset(), Point::new(-1.0, -2.0));
        assert_eq!(config.tooltip_width(), 150.0);
        assert!(config.shutdown_host_on_drop());
        assert_eq!(config.tooltip_timer(), TooltipTimer::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_tooltip_settings() {
        let zero_fade = ScreenConfig::default().with_tooltip_fade(Duration::ZERO);
        assert!(matches!(zero_fade.validate(), Err(ScreenError::InvalidConfig(_))));

        let opacity = ScreenConfig::default().with_tooltip_max_opacity(1.5);
        assert!(opacity.validate().is_err());

        let width = ScreenConfig::default().with_tooltip_width(0.0);
        assert!(width.validate().is_err());

        let nan_width = ScreenConfig::default().with_tooltip_width(f32::NAN);
        assert!(nan_width.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_size() {
        let config = ScreenConfig::default().with_size(Size::new(-1.0, 10.0));
        assert!(config.validate().is_err());
    }
}
