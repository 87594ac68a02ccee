//! Responsive configuration values keyed by viewport breakpoints.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::viewport::Viewport;

/// A minimum-viewport-width breakpoint key in CSS pixels.
///
/// Accepts both numbers and numeric strings when deserializing, since JSON
/// object keys always arrive as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinWidth(pub u32);

impl From<u32> for MinWidth {
    fn from(px: u32) -> Self {
        MinWidth(px)
    }
}

impl fmt::Display for MinWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for MinWidth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.0)
    }
}

impl<'de> Deserialize<'de> for MinWidth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MinWidthVisitor;

        impl<'de> Visitor<'de> for MinWidthVisitor {
            type Value = MinWidth;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a minimum viewport width in pixels")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<MinWidth, E> {
                u32::try_from(v)
                    .map(MinWidth)
                    .map_err(|_| E::custom(format!("minimum width {v} out of range")))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<MinWidth, E> {
                u32::try_from(v)
                    .map(MinWidth)
                    .map_err(|_| E::custom(format!("minimum width {v} out of range")))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<MinWidth, E> {
                v.trim()
                    .parse::<u32>()
                    .map(MinWidth)
                    .map_err(|_| E::custom(format!("invalid minimum width `{v}`")))
            }
        }

        deserializer.deserialize_any(MinWidthVisitor)
    }
}

/// A configuration value that may vary by viewport width.
///
/// Mirrors the prop shapes a Vue-side caller supplies: either a bare value
/// applied at every width, or a mapping from minimum-width thresholds to
/// values (`{ "0": 2, "768": 3, "1200": 4 }`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponsiveValue<T> {
    /// One value for every viewport width.
    Uniform(T),
    /// Values keyed by minimum viewport width.
    Breakpoints(BTreeMap<MinWidth, T>),
}

impl<T> ResponsiveValue<T> {
    /// Build a breakpoint mapping from `(min_width, value)` pairs.
    pub fn breakpoints(pairs: impl IntoIterator<Item = (u32, T)>) -> Self {
        ResponsiveValue::Breakpoints(
            pairs
                .into_iter()
                .map(|(min_width, value)| (MinWidth(min_width), value))
                .collect(),
        )
    }

    /// Resolve against a viewport width.
    ///
    /// A uniform value resolves to itself at every width. A breakpoint
    /// mapping selects the value at the largest threshold the width
    /// satisfies; `None` when no threshold qualifies or the mapping is
    /// empty.
    pub fn resolve(&self, viewport: Viewport) -> Option<&T> {
        match self {
            ResponsiveValue::Uniform(value) => Some(value),
            ResponsiveValue::Breakpoints(map) => map
                .iter()
                .rev()
                .find(|(min_width, _)| viewport.meets(min_width.0))
                .map(|(_, value)| value),
        }
    }

    /// Resolve against a viewport width, falling back when no breakpoint
    /// qualifies.
    pub fn resolve_or<'a>(&'a self, viewport: Viewport, fallback: &'a T) -> &'a T {
        self.resolve(viewport).unwrap_or(fallback)
    }
}

impl<T> From<T> for ResponsiveValue<T> {
    fn from(value: T) -> Self {
        ResponsiveValue::Uniform(value)
    }
}
