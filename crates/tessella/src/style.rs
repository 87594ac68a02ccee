//! Inline style computation for the container and column wrappers.

use compact_str::{format_compact, CompactString};
use smallvec::{smallvec, SmallVec};

/// A single CSS declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// CSS property name
    pub property: &'static str,
    /// CSS value
    pub value: CompactString,
}

impl Declaration {
    /// Create a declaration.
    pub fn new(property: &'static str, value: impl Into<CompactString>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}

/// An inline declaration list.
pub type Declarations = SmallVec<[Declaration; 8]>;

/// Declarations for the flex container wrapping all columns.
///
/// The negative left margin cancels the first column's gutter border so the
/// columns sit flush with the container edge.
pub fn container_style(gutter: &str) -> Declarations {
    smallvec![
        Declaration::new("display", "flex"),
        Declaration::new("margin-left", format_compact!("-{gutter}")),
    ]
}

/// Declarations for one column wrapper.
///
/// Each column takes an equal percentage of the container width and carries
/// the gutter as a transparent left border inside its own box.
pub fn column_style(columns: u32, gutter: &str) -> Declarations {
    smallvec![
        Declaration::new("box-sizing", "border-box"),
        Declaration::new("background-clip", "padding-box"),
        Declaration::new("width", format_compact!("{}%", 100.0 / columns as f64)),
        Declaration::new("border", "0 solid transparent"),
        Declaration::new("border-left-width", gutter),
    ]
}

/// Serialize a declaration list into a `style` attribute value.
pub fn style_attr(declarations: &Declarations) -> CompactString {
    let mut out = CompactString::default();
    for (i, declaration) in declarations.iter().enumerate() {
        if i > 0 {
            out.push(';');
        }
        out.push_str(declaration.property);
        out.push(':');
        out.push_str(&declaration.value);
    }
    out
}
