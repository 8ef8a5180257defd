//! Frame drawing for [`Screen`].

use horizon_screen_core::logging::{span_names, targets};
use horizon_screen_core::{PerfSpan, Point, Rect, WidgetId};

use super::Screen;
use crate::host::{HostWindow, Renderer};
use crate::tooltip::TooltipBubble;
use crate::widget::{PaintContext, WidgetTree};

impl<H: HostWindow, R: Renderer> Screen<H, R> {
    /// Draw a complete frame and present it.
    ///
    /// Clears with the background color, runs the draw-contents hook,
    /// draws the widgets and any due tooltip, then swaps buffers.
    pub fn draw_all(&mut self) {
        let _span = PerfSpan::new(span_names::FRAME);
        self.renderer.clear(self.background);
        if let Some(callback) = self.draw_contents_callback.as_mut() {
            callback(&mut self.renderer);
        }
        self.draw_widgets();
        self.host.swap_buffers();
    }

    /// Draw the widget tree and tooltip. Skipped while the screen is hidden.
    fn draw_widgets(&mut self) {
        if !self.visible {
            return;
        }

        self.framebuffer_size = self.host.framebuffer_size();
        self.size = self.host.logical_size();
        self.pixel_ratio = crate::host::pixel_ratio(self.framebuffer_size, self.size);

        self.renderer.begin_frame(self.size, self.pixel_ratio);
        paint_subtree(&self.tree, self.tree.root(), Point::ZERO, &mut self.renderer);
        self.draw_tooltip();
        self.renderer.end_frame();
    }

    fn draw_tooltip(&mut self) {
        let elapsed = self.idle_time();
        if !self.tooltip_timer.is_due(elapsed) {
            return;
        }
        let Some(widget) = self.find_widget(self.mouse_pos) else {
            return;
        };
        let (Some(base), Some(position)) =
            (self.tree.base(widget), self.tree.absolute_position(widget))
        else {
            return;
        };
        if base.tooltip().is_empty() {
            return;
        }

        let anchor = TooltipBubble::anchor(position, base.size());
        let bounds = self
            .renderer
            .text_box_bounds(anchor, self.tooltip_width, base.tooltip());
        let opacity = self.tooltip_timer.opacity(elapsed);
        let bubble =
            TooltipBubble::layout(base.tooltip(), anchor, self.tooltip_width, bounds, opacity);
        tracing::trace!(target: targets::TOOLTIP, ?widget, opacity, "drawing tooltip");
        self.renderer.draw_tooltip(&bubble);
    }
}

/// Paint `id` and its visible descendants back to front.
fn paint_subtree(
    tree: &WidgetTree,
    id: WidgetId,
    parent_origin: Point,
    renderer: &mut dyn Renderer,
) {
    let (Some(base), Some(widget)) = (tree.base(id), tree.widget(id)) else {
        return;
    };
    if !base.is_visible() {
        return;
    }
    let origin = parent_origin + base.position();
    let mut ctx = PaintContext::new(
        &mut *renderer,
        Rect::from_origin_size(origin, base.size()),
        base.has_focus(),
    );
    widget.paint(&mut ctx);
    for &child in tree.children(id) {
        paint_subtree(tree, child, origin, renderer);
    }
}
