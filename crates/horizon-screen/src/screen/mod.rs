//! The screen controller.
//!
//! A [`Screen`] sits between a host window and a widget tree. It owns:
//!
//! - the [`WidgetTree`] whose root children are the top-level windows,
//!   ordered back to front
//! - the [`FocusStack`] (focus path)
//! - the drag capture, held button mask, modifiers and pointer position
//! - the "last interaction" timestamp that drives tooltips
//!
//! Raw host input enters through the routing methods (`pointer_move`,
//! `pointer_button`, `scroll`, `key`, `char`, `resize`, `drop_files`) or
//! through [`Screen::handle_host_event`]. Each returns whether some widget
//! or callback handled the event.
//!
//! # Lifetime
//!
//! The host owns its screen directly; there is no global registry mapping
//! native windows to screens. Dropping a screen releases the renderer first
//! and then, when configured, destroys the host window.
//!
//! # Threading
//!
//! A screen is single-threaded. The host must deliver events and draw
//! frames from one thread, one call at a time.

mod config;
mod draw;
mod input;

pub use config::ScreenConfig;

use std::path::PathBuf;
use std::time::Duration;

use cursor_icon::CursorIcon;
use horizon_screen_core::logging::targets;
use horizon_screen_core::{
    Clock, Color, Point, Result, ScreenError, Size, TreeFormatter, WidgetId,
};

use crate::focus::FocusStack;
use crate::host::{DrawContentsCallback, DropCallback, HostWindow, Renderer, ResizeCallback};
use crate::tooltip::TooltipTimer;
use crate::widget::{
    EventDispatcher, KeyboardModifiers, MouseButtons, Widget, WidgetBase, WidgetTree,
};
use crate::z_order::ZOrderManager;

/// Routes host input into a widget tree and manages focus and window order.
///
/// # Example
///
/// ```ignore
/// use horizon_screen::{Screen, ScreenConfig, WidgetBase, Panel};
/// use horizon_screen_core::SystemClock;
///
/// let mut screen = Screen::new(host, renderer, ScreenConfig::new("Demo"), SystemClock::new())?;
/// let window = screen.add_window(WidgetBase::window(false).with_size(Size::new(300.0, 200.0)), Panel)?;
/// screen.center_window(window)?;
///
/// // In the host event loop:
/// screen.handle_host_event(event);
/// screen.draw_all();
/// ```
pub struct Screen<H: HostWindow, R: Renderer> {
    host: H,
    renderer: R,
    clock: Box<dyn Clock>,

    tree: WidgetTree,
    focus: FocusStack,

    /// Widget holding drag capture. Drag is active exactly when this is set.
    drag: Option<WidgetId>,
    buttons: MouseButtons,
    modifiers: KeyboardModifiers,
    mouse_pos: Point,
    cursor: CursorIcon,
    last_interaction: Duration,

    caption: String,
    background: Color,
    visible: bool,
    size: Size,
    framebuffer_size: Size,
    pixel_ratio: f32,

    pointer_offset: Point,
    tooltip_timer: TooltipTimer,
    tooltip_width: f32,
    shutdown_host_on_drop: bool,

    resize_callback: Option<ResizeCallback>,
    drop_callback: Option<DropCallback>,
    draw_contents_callback: Option<DrawContentsCallback>,
}

impl<H: HostWindow, R: Renderer> Screen<H, R> {
    /// Create a screen attached to `host`.
    ///
    /// Applies the configured size, caption and visibility to the host, then
    /// sizes the root widget to the host's logical size.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenError::InvalidConfig`] if the configuration is rejected.
    pub fn new(
        mut host: H,
        renderer: R,
        config: ScreenConfig,
        clock: impl Clock + 'static,
    ) -> Result<Self> {
        config.validate()?;

        if let Some(size) = config.size() {
            host.set_size(size);
        }
        host.set_title(config.caption());
        host.set_visible(config.visible());

        let size = host.logical_size();
        let framebuffer_size = host.framebuffer_size();
        let last_interaction = clock.now();

        tracing::debug!(
            target: targets::HOST,
            caption = config.caption(),
            width = size.width,
            height = size.height,
            "screen created"
        );

        Ok(Self {
            host,
            renderer,
            clock: Box::new(clock),
            tree: WidgetTree::new(size),
            focus: FocusStack::new(),
            drag: None,
            buttons: MouseButtons::NONE,
            modifiers: KeyboardModifiers::NONE,
            mouse_pos: Point::ZERO,
            cursor: CursorIcon::Default,
            last_interaction,
            caption: config.caption().to_string(),
            background: config.background().with_alpha(1.0),
            visible: config.visible(),
            size,
            framebuffer_size,
            pixel_ratio: crate::host::pixel_ratio(framebuffer_size, size),
            pointer_offset: config.pointer_offset(),
            tooltip_timer: config.tooltip_timer(),
            tooltip_width: config.tooltip_width(),
            shutdown_host_on_drop: config.shutdown_host_on_drop(),
            resize_callback: None,
            drop_callback: None,
            draw_contents_callback: None,
        })
    }

    // =========================================================================
    // Collaborators
    // =========================================================================

    /// The host window.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host window.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access to the renderer.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// The widget tree.
    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    /// Mutable access to the widget tree.
    ///
    /// Prefer [`remove_widget`](Self::remove_widget) and
    /// [`dispose_window`](Self::dispose_window) for removals so that focus
    /// and drag capture are released.
    pub fn tree_mut(&mut self) -> &mut WidgetTree {
        &mut self.tree
    }

    /// The root widget.
    pub fn root(&self) -> WidgetId {
        self.tree.root()
    }

    // =========================================================================
    // Window properties
    // =========================================================================

    /// The window caption.
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Change the window caption. The host is only updated on change.
    pub fn set_caption(&mut self, caption: impl Into<String>) {
        let caption = caption.into();
        if self.caption != caption {
            self.host.set_title(&caption);
            self.caption = caption;
        }
    }

    /// The background color.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Change the background color. The alpha channel is forced to 1.
    pub fn set_background(&mut self, color: Color) {
        self.background = color.with_alpha(1.0);
    }

    /// Whether the window is visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the window. The host is only updated on change.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.host.set_visible(visible);
        }
    }

    /// Logical size of the screen.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Resize the screen and its host window.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
        if let Some(root) = self.tree.base_mut(self.tree.root()) {
            root.set_size(size);
        }
        self.host.set_size(size);
    }

    /// Framebuffer size last read from the host.
    pub fn framebuffer_size(&self) -> Size {
        self.framebuffer_size
    }

    /// Framebuffer to logical pixel ratio.
    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    /// Whether dropping the screen destroys the host window.
    pub fn shutdown_host_on_drop(&self) -> bool {
        self.shutdown_host_on_drop
    }

    /// Set whether dropping the screen destroys the host window.
    pub fn set_shutdown_host_on_drop(&mut self, shutdown: bool) {
        self.shutdown_host_on_drop = shutdown;
    }

    // =========================================================================
    // Input state
    // =========================================================================

    /// Last calibrated pointer position.
    pub fn mouse_position(&self) -> Point {
        self.mouse_pos
    }

    /// Mouse buttons currently held.
    pub fn mouse_buttons(&self) -> MouseButtons {
        self.buttons
    }

    /// Modifiers of the last button event.
    pub fn modifiers(&self) -> KeyboardModifiers {
        self.modifiers
    }

    /// Cursor shape last sent to the host.
    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    /// Whether a widget holds drag capture.
    pub fn drag_active(&self) -> bool {
        self.drag.is_some()
    }

    /// The widget holding drag capture.
    pub fn drag_widget(&self) -> Option<WidgetId> {
        self.drag
    }

    /// The focus path, leaf first, excluding the root.
    pub fn focus_path(&self) -> &[WidgetId] {
        self.focus.path()
    }

    /// Time since the last user interaction.
    pub fn idle_time(&self) -> Duration {
        self.clock.now().saturating_sub(self.last_interaction)
    }

    /// Find the front-most visible widget at a screen position.
    pub fn find_widget(&self, point: Point) -> Option<WidgetId> {
        EventDispatcher::find_widget(&self.tree, self.tree.root(), point)
    }

    fn touch(&mut self) {
        self.last_interaction = self.clock.now();
    }

    // =========================================================================
    // Callbacks
    // =========================================================================

    /// Set the handler called after non-degenerate resizes with the framebuffer size.
    pub fn set_resize_callback(&mut self, callback: impl FnMut(Size) -> bool + 'static) {
        self.resize_callback = Some(Box::new(callback));
    }

    /// Set the handler called with dropped file paths.
    pub fn set_drop_callback(&mut self, callback: impl FnMut(&[PathBuf]) -> bool + 'static) {
        self.drop_callback = Some(Box::new(callback));
    }

    /// Set the hook called every frame before widgets are drawn.
    pub fn set_draw_contents_callback(
        &mut self,
        callback: impl FnMut(&mut dyn Renderer) + 'static,
    ) {
        self.draw_contents_callback = Some(Box::new(callback));
    }

    // =========================================================================
    // Tree structure, focus and stacking
    // =========================================================================

    /// Add a widget as the front-most child of `parent`.
    pub fn add_widget(
        &mut self,
        parent: WidgetId,
        base: WidgetBase,
        widget: impl Widget + 'static,
    ) -> Result<WidgetId> {
        self.tree.insert(parent, base, widget)
    }

    /// Add a top-level window in front of all others.
    pub fn add_window(
        &mut self,
        base: WidgetBase,
        widget: impl Widget + 'static,
    ) -> Result<WidgetId> {
        let root = self.tree.root();
        self.tree.insert(root, base, widget)
    }

    /// Move keyboard focus to `widget` and its ancestors.
    ///
    /// `None` clears the focus path. If the path ends at a window, the
    /// window is raised to the front.
    pub fn update_focus(&mut self, widget: Option<WidgetId>) {
        self.focus.update_focus(&mut self.tree, widget);
    }

    /// Raise a top-level window, keeping its popups in front of it.
    ///
    /// Returns `false` if `window` is not a direct child of the root.
    pub fn move_window_to_front(&mut self, window: WidgetId) -> bool {
        ZOrderManager::move_to_front(&mut self.tree, window)
    }

    /// Place a window at the centre of the screen.
    pub fn center_window(&mut self, window: WidgetId) -> Result<()> {
        let screen_size = self.size;
        let base = self
            .tree
            .base_mut(window)
            .ok_or(ScreenError::InvalidWidget(window))?;
        if !base.kind().is_window() {
            return Err(ScreenError::NotAWindow(window));
        }
        let size = base.size();
        base.set_position(Point::new(
            (screen_size.width - size.width) / 2.0,
            (screen_size.height - size.height) / 2.0,
        ));
        Ok(())
    }

    /// Remove a window and everything inside it.
    ///
    /// If any part of the window is on the focus path, the whole focus path
    /// is cleared. If it holds drag capture, the capture is released.
    ///
    /// # Errors
    ///
    /// Fails for unknown IDs, the root, and widgets that are not windows.
    pub fn dispose_window(&mut self, window: WidgetId) -> Result<()> {
        let base = self.tree.base(window).ok_or(ScreenError::InvalidWidget(window))?;
        if window == self.tree.root() {
            return Err(ScreenError::RootWidget);
        }
        if !base.kind().is_window() {
            return Err(ScreenError::NotAWindow(window));
        }
        self.remove_widget(window)
    }

    /// Remove any widget and its subtree, releasing focus and drag capture
    /// that refer into it.
    pub fn remove_widget(&mut self, id: WidgetId) -> Result<()> {
        if id == self.tree.root() {
            return Err(ScreenError::RootWidget);
        }
        if !self.tree.contains(id) {
            return Err(ScreenError::InvalidWidget(id));
        }

        let tree = &self.tree;
        if self.focus.path().iter().any(|&entry| tree.is_within(entry, id)) {
            self.focus.clear(&mut self.tree);
        }
        if self.drag.is_some_and(|captured| self.tree.is_within(captured, id)) {
            tracing::debug!(target: targets::ROUTER, ?id, "drag capture released by removal");
            self.drag = None;
        }
        self.tree.remove(id)?;
        Ok(())
    }

    // =========================================================================
    // Debugging
    // =========================================================================

    /// A formatted dump of the widget tree.
    pub fn debug_tree(&self) -> String {
        TreeFormatter::new().format(&self.tree, self.tree.root())
    }

    /// Emit the widget tree dump at debug level.
    pub fn log_tree(&self) {
        for line in self.debug_tree().lines() {
            tracing::debug!(target: targets::TREE, "{line}");
        }
    }
}

impl<H: HostWindow, R: Renderer> Drop for Screen<H, R> {
    fn drop(&mut self) {
        tracing::debug!(
            target: targets::HOST,
            destroy_host = self.shutdown_host_on_drop,
            "tearing down screen"
        );
        self.renderer.release();
        if self.shutdown_host_on_drop {
            self.host.destroy();
        }
    }
}
