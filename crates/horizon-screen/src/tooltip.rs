//! Delayed tooltip presentation.
//!
//! Tooltips are a pure function of the time since the last user
//! interaction: nothing is scheduled. Each frame the screen asks the
//! [`TooltipTimer`] for an opacity and, when it is positive, lays out a
//! [`TooltipBubble`] under the hovered widget.

use std::time::Duration;

use horizon_screen_core::{Point, Rect, Size};

/// Gap between the bottom edge of a widget and its tooltip text.
const TOOLTIP_OFFSET: f32 = 10.0;
/// Padding between the text bounds and the bubble outline.
const BUBBLE_PADDING: f32 = 4.0;
/// Corner radius of the bubble.
const BUBBLE_RADIUS: f32 = 3.0;
/// Half width of the arrow pointing at the widget.
const ARROW_HALF_WIDTH: f32 = 7.0;
/// Height of the arrow above the text bounds.
const ARROW_HEIGHT: f32 = 10.0;

/// Idle-time tracker for tooltip fade-in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipTimer {
    delay: Duration,
    fade: Duration,
    max_opacity: f32,
}

impl Default for TooltipTimer {
    fn default() -> Self {
        Self::new(Duration::from_millis(500), Duration::from_millis(500), 0.8)
    }
}

impl TooltipTimer {
    /// Create a timer that starts fading in after `delay`, reaching
    /// `max_opacity` after a further `fade`.
    pub fn new(delay: Duration, fade: Duration, max_opacity: f32) -> Self {
        Self {
            delay,
            fade,
            max_opacity,
        }
    }

    /// Whether a tooltip should be shown after `elapsed` idle time.
    #[inline]
    pub fn is_due(&self, elapsed: Duration) -> bool {
        elapsed > self.delay
    }

    /// Tooltip opacity after `elapsed` idle time.
    ///
    /// Zero up to the delay, then linear up to the maximum opacity.
    pub fn opacity(&self, elapsed: Duration) -> f32 {
        if !self.is_due(elapsed) {
            return 0.0;
        }
        let progress = if self.fade.is_zero() {
            1.0
        } else {
            (elapsed - self.delay).as_secs_f32() / self.fade.as_secs_f32()
        };
        progress.min(1.0) * self.max_opacity
    }
}

/// Geometry and content of a tooltip ready to be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipBubble {
    /// Tooltip text.
    pub text: String,
    /// Top-left corner of the wrapped text box.
    pub text_origin: Point,
    /// Wrap width of the text box.
    pub wrap_width: f32,
    /// Background bubble.
    pub bubble: Rect,
    /// Corner radius of the bubble.
    pub corner_radius: f32,
    /// Arrow triangle: tip first, then the two base corners.
    pub arrow: [Point; 3],
    /// Opacity of the whole tooltip.
    pub opacity: f32,
}

impl TooltipBubble {
    /// Where a widget's tooltip text is laid out: centred horizontally and
    /// just below the widget.
    pub fn anchor(widget_position: Point, widget_size: Size) -> Point {
        widget_position
            + Point::new(
                widget_size.width / 2.0,
                widget_size.height + TOOLTIP_OFFSET,
            )
    }

    /// Lay out a tooltip from the measured bounds of its text at `anchor`.
    pub fn layout(
        text: impl Into<String>,
        anchor: Point,
        wrap_width: f32,
        text_bounds: Rect,
        opacity: f32,
    ) -> Self {
        let half = text_bounds.width() / 2.0;
        let bubble = Rect::new(
            text_bounds.left() - half,
            text_bounds.top(),
            text_bounds.width(),
            text_bounds.height(),
        )
        .inflate(BUBBLE_PADDING);

        let tip_x = text_bounds.center().x - half;
        let base_y = text_bounds.top() + 1.0;
        let arrow = [
            Point::new(tip_x, text_bounds.top() - ARROW_HEIGHT),
            Point::new(tip_x + ARROW_HALF_WIDTH, base_y),
            Point::new(tip_x - ARROW_HALF_WIDTH, base_y),
        ];

        Self {
            text: text.into(),
            text_origin: Point::new(anchor.x - half, anchor.y),
            wrap_width,
            bubble,
            corner_radius: BUBBLE_RADIUS,
            arrow,
            opacity,
        }
    }
}
