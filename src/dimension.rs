//! Requested display size, read from the `width`/`height` query parameters.
//!
//! Each axis is handled independently:
//!
//! | Input | Result |
//! |---|---|
//! | parameter missing, empty or ASCII whitespace | axis absent |
//! | `"300"` | 300 |
//! | `"299.9"` | 299 (truncated) |
//! | `"99999"` | clamped to max |
//! | `"0"`, `"-5"`, `"abc"` | clamped to min |
//!
//! When both axes are absent there is no [`Dimension`] at all and the request
//! is left alone. Otherwise the dimension renders as `{width}x{height}`, with an
//! absent axis rendered as an empty side: `300x`, `x50`.

use crate::config::SizerConfig;
use crate::query::QueryParams;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Query parameter carrying the requested width.
pub const WIDTH_PARAM: &str = "width";
/// Query parameter carrying the requested height.
pub const HEIGHT_PARAM: &str = "height";

/// Inclusive pixel range for one axis. A bound left out of a config table
/// keeps its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AxisBounds {
    pub min: u32,
    pub max: u32,
}

impl AxisBounds {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Coerce a raw parameter value to a pixel count within the bounds.
    ///
    /// Returns `None` for an empty (or ASCII-whitespace-only) value. Anything
    /// that does not parse as a number lands on `min`, including values padded
    /// with non-ASCII whitespace such as U+00A0.
    pub fn coerce(&self, raw: &str) -> Option<u32> {
        let raw = raw.trim_matches(|c: char| c.is_ascii_whitespace());
        if raw.is_empty() {
            return None;
        }
        let pixels = match raw.parse::<f64>() {
            // max-then-min rather than clamp: unvalidated bounds must not panic
            Ok(n) if !n.is_nan() => n
                .trunc()
                .max(f64::from(self.min))
                .min(f64::from(self.max)) as u32,
            _ => self.min,
        };
        Some(pixels)
    }
}

impl Default for AxisBounds {
    fn default() -> Self {
        Self::new(4, 4096)
    }
}

/// Requested size after clamping. At least one axis is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimension {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl Dimension {
    /// The `{width}x{height}` filename token.
    pub fn token(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(w) = self.width {
            write!(f, "{w}")?;
        }
        f.write_str("x")?;
        if let Some(h) = self.height {
            write!(f, "{h}")?;
        }
        Ok(())
    }
}

/// Read and clamp `width`/`height`. `None` when neither axis is usable.
pub fn extract_dimension<Q: QueryParams + ?Sized>(
    query: &Q,
    config: &SizerConfig,
) -> Option<Dimension> {
    let width = query
        .get_value(WIDTH_PARAM)
        .and_then(|raw| config.width.coerce(raw));
    let height = query
        .get_value(HEIGHT_PARAM)
        .and_then(|raw| config.height.coerce(raw));

    if width.is_none() && height.is_none() {
        return None;
    }
    Some(Dimension { width, height })
}
