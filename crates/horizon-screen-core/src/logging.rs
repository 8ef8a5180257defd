//! Logging and debugging facilities for Horizon Screen.
//!
//! This module provides:
//! - Target and span names used with the `tracing` crate
//! - Debug visualization for widget trees
//! - Performance tracing hooks for profiling
//!
//! # Tracing Integration
//!
//! Horizon Screen uses the `tracing` crate for instrumentation and never
//! installs a subscriber itself. To see logs, install one in your host:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_screen::focus=debug,horizon_screen::router=trace")
//!     .init();
//! ```
//!
//! # Debug Visualization
//!
//! Any hierarchy implementing [`TreeSource`] can be rendered with
//! [`TreeFormatter`]:
//!
//! ```ignore
//! let formatter = TreeFormatter::new();
//! println!("{}", formatter.format(&tree, tree.root()));
//! ```

use std::fmt::{self, Write as FmtWrite};

/// Span names used throughout Horizon Screen for tracing.
///
/// These constants can be used to filter traces for specific subsystems.
pub mod span_names {
    /// Per-frame drawing span.
    pub const FRAME: &str = "horizon_screen::frame";
    /// Raw host event routing span.
    pub const HOST_EVENT: &str = "horizon_screen::host_event";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Input routing (pointer, button, scroll, key, resize).
    pub const ROUTER: &str = "horizon_screen::router";
    /// Focus path changes.
    pub const FOCUS: &str = "horizon_screen::focus";
    /// Window stacking order.
    pub const Z_ORDER: &str = "horizon_screen::z_order";
    /// Tooltip presentation.
    pub const TOOLTIP: &str = "horizon_screen::tooltip";
    /// Host window and render context lifecycle.
    pub const HOST: &str = "horizon_screen::host";
    /// Widget tree structure changes.
    pub const TREE: &str = "horizon_screen::tree";
}

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Plain indentation, matching a simple two-space debug dump.
    Indented,
}

/// Configuration for tree debug output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to show node IDs.
    pub show_ids: bool,
    /// Whether to show node kinds.
    pub show_kinds: bool,
    /// Maximum depth to traverse (None for unlimited).
    pub max_depth: Option<usize>,
    /// Indent size for each level.
    pub indent_size: usize,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_ids: true,
            show_kinds: true,
            max_depth: None,
            indent_size: 2,
        }
    }
}

impl TreeFormatOptions {
    /// Create options for minimal output.
    pub fn minimal() -> Self {
        Self {
            show_ids: false,
            show_kinds: false,
            ..Default::default()
        }
    }
}

/// A hierarchy that can be rendered by [`TreeFormatter`].
pub trait TreeSource {
    /// Node handle type.
    type Id: Copy + fmt::Debug;

    /// Human-readable description of a node (name, geometry, ...).
    fn label(&self, id: Self::Id) -> String;

    /// Short kind name, shown when [`TreeFormatOptions::show_kinds`] is set.
    fn kind(&self, id: Self::Id) -> &'static str;

    /// Children of a node, back to front.
    fn children(&self, id: Self::Id) -> Vec<Self::Id>;
}

/// Debug utility for visualizing trees.
#[derive(Debug, Clone, Default)]
pub struct TreeFormatter {
    options: TreeFormatOptions,
}

impl TreeFormatter {
    /// Create a new formatter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter with custom options.
    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Format the subtree rooted at `root`.
    pub fn format<S: TreeSource>(&self, source: &S, root: S::Id) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_subtree(source, root, 0, true, &mut output);
        output
    }

    fn write_subtree<S: TreeSource, W: FmtWrite>(
        &self,
        source: &S,
        id: S::Id,
        depth: usize,
        is_last: bool,
        output: &mut W,
    ) -> fmt::Result {
        if let Some(max) = self.options.max_depth {
            if depth > max {
                return Ok(());
            }
        }

        output.write_str(&self.build_prefix(depth, is_last))?;
        output.write_str(&source.label(id))?;
        if self.options.show_ids {
            write!(output, " [{id:?}]")?;
        }
        if self.options.show_kinds {
            write!(output, " ({})", source.kind(id))?;
        }
        output.write_char('\n')?;

        let children = source.children(id);
        let child_count = children.len();
        for (i, child_id) in children.into_iter().enumerate() {
            self.write_subtree(source, child_id, depth + 1, i + 1 == child_count, output)?;
        }
        Ok(())
    }

    /// Build the prefix string for a tree node.
    fn build_prefix(&self, depth: usize, is_last: bool) -> String {
        if depth == 0 {
            return String::new();
        }

        let indent = " ".repeat(self.options.indent_size);
        match self.options.style {
            TreeStyle::Indented => indent.repeat(depth),
            TreeStyle::Ascii | TreeStyle::Unicode => {
                let (branch, tee, corner) = if self.options.style == TreeStyle::Ascii {
                    ("|", "+--", "`--")
                } else {
                    ("\u{2502}", "\u{251c}\u{2500}\u{2500}", "\u{2514}\u{2500}\u{2500}")
                };
                let mut prefix = String::new();
                for _ in 0..(depth - 1) {
                    prefix.push_str(branch);
                    prefix.push_str(&indent);
                }
                prefix.push_str(if is_last { corner } else { tee });
                prefix.push(' ');
                prefix
            }
        }
    }
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations such as a frame.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::trace_span!(target: "horizon_screen::perf", "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}
