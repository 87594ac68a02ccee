//! Tessella core - breakpoint resolution and masonry column distribution.
//!
//! The algorithmic half of the Tessella masonry layout: responsive
//! configuration values keyed by viewport breakpoints, a viewport width
//! model with a headless fallback, and the round-robin distributor that
//! partitions an ordered item collection into column buckets.
//!
//! Rendering stays out of this crate. Items reach the distributor through
//! the [`ColumnItem`] trait, so any rendering layer that can answer "does
//! this entry occupy a slot?" and "what are its children?" can use it.

pub mod distribute;
pub mod error;
pub mod responsive;
pub mod viewport;

pub use distribute::{distribute, ColumnItem, ColumnSet};
pub use error::LayoutError;
pub use responsive::{MinWidth, ResponsiveValue};
pub use viewport::{FixedViewport, Headless, Viewport, ViewportSource};

/// Tessella core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
