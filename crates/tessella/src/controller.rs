//! Layout-pass controller owning the resolved responsive state.

use tessella_core::{distribute, ColumnSet, LayoutError, Viewport, ViewportSource};

use crate::columns::render_columns;
use crate::node::VNode;
use crate::props::{GutterValue, MasonryProps};

/// The resolved responsive snapshot driving one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Number of columns, always at least one
    pub columns: u32,
    /// Gutter between columns
    pub gutter: GutterValue,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            columns: 2,
            gutter: GutterValue::Px(0.0),
        }
    }
}

/// Drives recalculation of the responsive layout state.
///
/// The host rendering layer reports lifecycle and viewport signals through
/// [`start`](MasonryController::start), [`notify_resize`](MasonryController::notify_resize),
/// [`data_changed`](MasonryController::data_changed) and
/// [`stop`](MasonryController::stop). Recomputation never runs inside the
/// raw signal handler; it is deferred to [`settle`](MasonryController::settle),
/// which the host calls at its next quiescent point, so bursts of signals
/// coalesce into one pass.
#[derive(Debug)]
pub struct MasonryController<S> {
    props: MasonryProps,
    source: S,
    config: LayoutConfig,
    last_width: Option<Viewport>,
    pending: bool,
    listening: bool,
}

impl<S: ViewportSource> MasonryController<S> {
    /// Create a controller over a viewport source.
    pub fn new(props: MasonryProps, source: S) -> Self {
        Self {
            props,
            source,
            config: LayoutConfig::default(),
            last_width: None,
            pending: false,
            listening: false,
        }
    }

    /// Begin observing the viewport and schedule the initial pass.
    pub fn start(&mut self) {
        self.listening = true;
        self.pending = true;
    }

    /// Viewport resize signal. Ignored after [`stop`](MasonryController::stop).
    pub fn notify_resize(&mut self) {
        if self.listening {
            self.pending = true;
        }
    }

    /// The host finished updating externally-owned data; schedule a pass.
    pub fn data_changed(&mut self) {
        if self.listening {
            self.pending = true;
        }
    }

    /// Run a pending pass.
    ///
    /// Samples the viewport once and skips recomputation when the width is
    /// unchanged (resize signals fire on height changes too). Returns
    /// `true` when the resolved configuration was recomputed, in which case
    /// the host re-renders.
    pub fn settle(&mut self) -> bool {
        if !self.pending {
            return false;
        }
        self.pending = false;

        let width = Viewport::from_sample(self.source.width());
        if self.last_width == Some(width) {
            return false;
        }
        self.last_width = Some(width);

        // Both fields resolve against the same sample and land together.
        self.config = LayoutConfig {
            columns: self.props.resolved_columns(width),
            gutter: self.props.resolved_gutter(width),
        };
        true
    }

    /// Stop observing the viewport and drop any pending pass.
    pub fn stop(&mut self) {
        self.listening = false;
        self.pending = false;
    }

    /// The last resolved configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// The props this controller resolves against.
    pub fn props(&self) -> &MasonryProps {
        &self.props
    }

    /// Distribute `children` into columns under the current configuration.
    pub fn layout<'a>(&self, children: &'a [VNode]) -> Result<ColumnSet<'a, VNode>, LayoutError> {
        distribute(
            children,
            self.config.columns as usize,
            self.props.resolve_slot,
        )
    }

    /// Build the rendered column tree for `children`.
    pub fn render(&self, children: &[VNode]) -> Result<VNode, LayoutError> {
        render_columns(&self.props, &self.config, children)
    }
}
