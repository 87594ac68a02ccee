//! Error types for layout computation.

use thiserror::Error;

/// Errors produced while computing a column layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The distributor was handed a column count the clamped configuration
    /// path can never produce.
    #[error("column count must be at least 1 (got {0})")]
    InvalidColumnCount(usize),
}
