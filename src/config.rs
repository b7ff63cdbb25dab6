//! Rewriter configuration.
//!
//! The rewriter never reads globals: every transform takes a [`SizerConfig`]
//! by reference. At the edge the stock defaults are usually compiled in; the
//! local harness can load overrides from `sizer.toml`.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! # Extensions eligible for rewriting (compared case-insensitively)
//! extensions = ["jpg", "jpeg", "png", "webp", "gif", "avif", "tif", "tiff", "svg"]
//!
//! [width]
//! min = 4
//! max = 4096
//!
//! [height]
//! min = 4
//! max = 4096
//! ```
//!
//! Config files are sparse: override just the values you want. Unknown keys
//! are rejected to catch typos early.

use crate::dimension::AxisBounds;
use crate::extension::DEFAULT_EXTENSIONS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name looked up by [`load_config`].
pub const CONFIG_FILE: &str = "sizer.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Immutable settings for one rewriter instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SizerConfig {
    /// Allow-listed extensions, without the leading dot.
    pub extensions: Vec<String>,
    /// Bounds applied to the `width` parameter.
    pub width: AxisBounds,
    /// Bounds applied to the `height` parameter.
    pub height: AxisBounds,
}

impl Default for SizerConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            width: AxisBounds::default(),
            height: AxisBounds::default(),
        }
    }
}

impl SizerConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "extensions must not be empty".into(),
            ));
        }
        if let Some(bad) = self
            .extensions
            .iter()
            .find(|e| e.is_empty() || e.contains('.') || e.contains('/'))
        {
            return Err(ConfigError::Validation(format!(
                "extensions entry {bad:?} must be a bare extension like \"jpg\""
            )));
        }
        validate_axis("width", &self.width)?;
        validate_axis("height", &self.height)?;
        Ok(())
    }
}

fn validate_axis(name: &str, bounds: &AxisBounds) -> Result<(), ConfigError> {
    if bounds.min == 0 {
        return Err(ConfigError::Validation(format!("{name}.min must be at least 1")));
    }
    if bounds.min > bounds.max {
        return Err(ConfigError::Validation(format!(
            "{name}.min ({}) must not exceed {name}.max ({})",
            bounds.min, bounds.max
        )));
    }
    Ok(())
}

// =============================================================================
// Config loading
// =============================================================================

/// Load config from `sizer.toml` in the given directory.
///
/// A missing file yields the stock defaults. Present values override the
/// defaults field by field (serde `default` on both levels), unknown keys are
/// rejected, and the result is validated.
pub fn load_config(dir: &Path) -> Result<SizerConfig, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    let config = if config_path.exists() {
        toml::from_str(&fs::read_to_string(&config_path)?)?
    } else {
        SizerConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `sizer.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Edge Image Sizer Configuration
# ==============================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Request paths ending in one of these extensions are eligible for rewriting.
# Compared case-insensitively; write them without the leading dot.
# A list here replaces the default list entirely.
extensions = ["jpg", "jpeg", "png", "webp", "gif", "avif", "tif", "tiff", "svg"]

# ---------------------------------------------------------------------------
# Bounds for the ?width= parameter, in pixels (inclusive).
# Larger values are clamped to max; smaller or non-numeric values to min.
# ---------------------------------------------------------------------------
[width]
min = 4
max = 4096

# ---------------------------------------------------------------------------
# Bounds for the ?height= parameter, in pixels (inclusive).
# ---------------------------------------------------------------------------
[height]
min = 4
max = 4096
"##
}
