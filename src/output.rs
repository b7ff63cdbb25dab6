//! Human-readable output for the local harness.
//!
//! # Output Format
//!
//! ## Rewrite
//!
//! ```text
//! /img/photo.jpg → /img/photo_300x200.jpg
//! ```
//!
//! ```text
//! /index.html (unchanged: extension not allow-listed)
//! ```
//!
//! ## Config
//!
//! ```text
//! Extensions: jpg, jpeg, png, webp, gif, avif, tif, tiff, svg
//! Width:      4..=4096
//! Height:     4..=4096
//! ```
//!
//! Each `format_*` function returns lines for testability; `print_*` wrappers
//! write them to stdout.

use crate::config::SizerConfig;
use crate::rewrite::Rewrite;

/// Describe the outcome of rewriting `uri`.
pub fn format_rewrite(uri: &str, outcome: &Rewrite) -> Vec<String> {
    match outcome {
        Rewrite::Rewritten(new_uri) => vec![format!("{uri} → {new_uri}")],
        Rewrite::Unchanged(reason) => vec![format!("{uri} (unchanged: {reason})")],
    }
}

pub fn print_rewrite(uri: &str, outcome: &Rewrite) {
    for line in format_rewrite(uri, outcome) {
        println!("{line}");
    }
}

/// Summarize an effective config.
pub fn format_config(config: &SizerConfig) -> Vec<String> {
    vec![
        format!("Extensions: {}", config.extensions.join(", ")),
        format!("Width:      {}..={}", config.width.min, config.width.max),
        format!("Height:     {}..={}", config.height.min, config.height.max),
    ]
}

pub fn print_config(config: &SizerConfig) {
    for line in format_config(config) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::AxisBounds;
    use crate::rewrite::PassThrough;

    #[test]
    fn rewritten_shows_arrow() {
        let lines = format_rewrite("/a/b.jpg", &Rewrite::Rewritten("/a/b_1x2.jpg".into()));
        assert_eq!(lines, vec!["/a/b.jpg → /a/b_1x2.jpg"]);
    }

    #[test]
    fn unchanged_shows_reason() {
        let lines = format_rewrite("/a/b", &Rewrite::Unchanged(PassThrough::NoFilename));
        assert_eq!(lines, vec!["/a/b (unchanged: no filename extension)"]);
    }

    #[test]
    fn config_summary() {
        let config = SizerConfig {
            extensions: vec!["png".into(), "svg".into()],
            width: AxisBounds::new(8, 800),
            height: AxisBounds::new(4, 4096),
        };
        let lines = format_config(&config);
        assert_eq!(lines[0], "Extensions: png, svg");
        assert_eq!(lines[1], "Width:      8..=800");
        assert_eq!(lines[2], "Height:     4..=4096");
    }
}
