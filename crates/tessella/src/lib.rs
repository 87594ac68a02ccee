//! Tessella - responsive masonry columns for Vue-style renderers.
//!
//! Distributes an ordered list of child nodes into N columns, where N and
//! the inter-column gutter vary by viewport breakpoint, and re-resolves on
//! resize.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                 Host renderer                     │
//! │   (mount / update / resize / unmount signals)     │
//! └──────────────────────────────────────────────────┘
//!                         │
//!                         ▼
//! ┌──────────────────────────────────────────────────┐
//! │              MasonryController                    │
//! │   (viewport sampling, width-change gate,          │
//! │    resolved LayoutConfig snapshot)                │
//! └──────────────────────────────────────────────────┘
//!           │                           │
//!           ▼                           ▼
//! ┌───────────────────┐       ┌───────────────────┐
//! │   tessella_core   │       │   column builder   │
//! │   (breakpoints,   │       │   (VNode tree,     │
//! │    distributor)   │       │    CSS styles)     │
//! └───────────────────┘       └───────────────────┘
//! ```
//!
//! The controller is renderer-agnostic: the host calls [`MasonryController::start`]
//! on mount, [`MasonryController::notify_resize`] from its resize listener,
//! [`MasonryController::data_changed`] after updates, [`MasonryController::settle`]
//! at its next quiescent point, and [`MasonryController::stop`] on teardown.

pub mod columns;
pub mod controller;
pub mod node;
pub mod props;
pub mod style;

pub use columns::render_columns;
pub use controller::{LayoutConfig, MasonryController};
pub use node::{NodeKind, VNode};
pub use props::{ColumnValue, GutterValue, MasonryProps};
pub use style::{column_style, container_style, style_attr, Declaration, Declarations};

// Core seams callers wire against.
pub use tessella_core::{
    distribute, ColumnItem, ColumnSet, FixedViewport, Headless, LayoutError, MinWidth,
    ResponsiveValue, Viewport, ViewportSource,
};

/// Tessella version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
