//! Component prop surface and prop scalar coercion.

use compact_str::{format_compact, CompactString};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tessella_core::{ResponsiveValue, Viewport};

/// A column-count scalar as the host may supply it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnValue {
    /// A numeric column count
    Count(f64),
    /// A raw string, coerced numerically when possible
    Other(CompactString),
}

impl ColumnValue {
    /// Coerce to a usable column count, clamping to at least one column.
    ///
    /// Zero, negative, fractional, and non-numeric input all land on a
    /// positive integer, which keeps the distributor and the
    /// percentage-width computation away from zero.
    pub fn to_count(&self) -> u32 {
        let n = match self {
            ColumnValue::Count(n) => *n,
            ColumnValue::Other(raw) => raw.trim().parse::<f64>().unwrap_or(f64::NAN),
        };
        // f64::max ignores NaN, so non-numeric input lands on the clamp.
        n.floor().max(1.0) as u32
    }
}

impl Default for ColumnValue {
    fn default() -> Self {
        ColumnValue::Count(2.0)
    }
}

/// A gutter scalar: bare numbers are pixels, strings may carry units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GutterValue {
    /// A bare number of pixels
    Px(f64),
    /// A CSS length, `px`-suffixed when it turns out to be unitless
    Length(CompactString),
}

impl GutterValue {
    /// Render the CSS value, suffixing `px` onto unitless input.
    pub fn css(&self) -> CompactString {
        match self {
            GutterValue::Px(n) => format_compact!("{n}px"),
            GutterValue::Length(raw) => {
                let trimmed = raw.trim();
                if trimmed.parse::<f64>().is_ok() {
                    format_compact!("{trimmed}px")
                } else {
                    raw.clone()
                }
            }
        }
    }
}

impl Default for GutterValue {
    fn default() -> Self {
        GutterValue::Px(0.0)
    }
}

/// Props accepted by the masonry component.
///
/// Field names match the camelCase prop names the Vue side declares, so a
/// serialized prop object deserializes directly.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MasonryProps {
    /// Tag for the container element
    pub tag: CompactString,
    /// Column count, uniform or per-breakpoint
    pub cols: ResponsiveValue<ColumnValue>,
    /// Gutter size, uniform or per-breakpoint
    pub gutter: ResponsiveValue<GutterValue>,
    /// Whether to attach the built-in inline styles
    pub css: bool,
    /// Tag for each column element
    pub column_tag: CompactString,
    /// Class applied to each column element
    pub column_class: CompactString,
    /// Attributes applied to each column element
    pub column_attr: FxHashMap<CompactString, CompactString>,
    /// Descend into a lone wrapping fragment before distributing
    pub resolve_slot: bool,
}

impl Default for MasonryProps {
    fn default() -> Self {
        Self {
            tag: CompactString::const_new("div"),
            cols: ResponsiveValue::Uniform(ColumnValue::default()),
            gutter: ResponsiveValue::Uniform(GutterValue::default()),
            css: true,
            column_tag: CompactString::const_new("div"),
            column_class: CompactString::const_new(""),
            column_attr: FxHashMap::default(),
            resolve_slot: false,
        }
    }
}

impl MasonryProps {
    /// Parse props from a JSON payload, the shape a Vue host supplies.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Resolve the column count at a viewport width, clamped to at least
    /// one column.
    pub fn resolved_columns(&self, viewport: Viewport) -> u32 {
        const FALLBACK: ColumnValue = ColumnValue::Count(0.0);
        self.cols.resolve_or(viewport, &FALLBACK).to_count()
    }

    /// Resolve the gutter at a viewport width, defaulting to no gutter.
    pub fn resolved_gutter(&self, viewport: Viewport) -> GutterValue {
        const FALLBACK: GutterValue = GutterValue::Px(0.0);
        self.gutter.resolve_or(viewport, &FALLBACK).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_clamps_to_one() {
        assert_eq!(ColumnValue::Count(0.0).to_count(), 1);
        assert_eq!(ColumnValue::Count(-3.0).to_count(), 1);
        assert_eq!(ColumnValue::Other(CompactString::const_new("abc")).to_count(), 1);
    }

    #[test]
    fn test_count_coercion() {
        assert_eq!(ColumnValue::Count(3.0).to_count(), 3);
        assert_eq!(ColumnValue::Count(3.9).to_count(), 3);
        assert_eq!(ColumnValue::Other(CompactString::const_new("4")).to_count(), 4);
        assert_eq!(ColumnValue::Other(CompactString::const_new(" 5 ")).to_count(), 5);
    }

    #[test]
    fn test_gutter_css() {
        assert_eq!(GutterValue::Px(10.0).css(), "10px");
        assert_eq!(GutterValue::Px(7.5).css(), "7.5px");
        assert_eq!(GutterValue::Length(CompactString::const_new("1rem")).css(), "1rem");
        assert_eq!(GutterValue::Length(CompactString::const_new("16")).css(), "16px");
    }

    #[test]
    fn test_defaults() {
        let props = MasonryProps::default();
        assert_eq!(props.tag, "div");
        assert_eq!(props.resolved_columns(Viewport::Px(1024)), 2);
        assert_eq!(props.resolved_gutter(Viewport::Px(1024)), GutterValue::Px(0.0));
        assert!(props.css);
        assert!(!props.resolve_slot);
    }

    #[test]
    fn test_from_json() {
        let props = MasonryProps::from_json(
            r#"{
                "cols": {"0": 1, "768": 3, "1200": "4"},
                "gutter": {"0": 8, "1200": "1rem"},
                "columnTag": "section",
                "columnClass": "masonry-column",
                "columnAttr": {"data-test": "col"},
                "resolveSlot": true,
                "css": false
            }"#,
        )
        .unwrap();

        assert_eq!(props.resolved_columns(Viewport::Px(500)), 1);
        assert_eq!(props.resolved_columns(Viewport::Px(800)), 3);
        assert_eq!(props.resolved_columns(Viewport::Px(1400)), 4);
        assert_eq!(props.resolved_gutter(Viewport::Px(500)).css(), "8px");
        assert_eq!(props.resolved_gutter(Viewport::Px(1400)).css(), "1rem");
        assert_eq!(props.column_tag, "section");
        assert_eq!(props.column_class, "masonry-column");
        assert_eq!(
            props.column_attr.get("data-test").map(|v| v.as_str()),
            Some("col")
        );
        assert!(props.resolve_slot);
        assert!(!props.css);
    }

    #[test]
    fn test_fallback_when_below_all_breakpoints() {
        let props = MasonryProps::from_json(r#"{"cols": {"768": 3}}"#).unwrap();
        // No qualifying threshold resolves to the zero fallback, which the
        // clamp lifts to a single column.
        assert_eq!(props.resolved_columns(Viewport::Px(320)), 1);
    }
}
