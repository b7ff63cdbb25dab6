//! The viewer-request rewrite pipeline.
//!
//! ```text
//! parse path ──no match──────────────┐
//!     │                              │
//! allow-listed? ──no─────────────────┤
//!     │                              ├──> Unchanged(reason)
//! width/height present? ──no─────────┘
//!     │
//! {directory}/{stem}_{w}x{h}.{extension} ──> Rewritten(uri)
//! ```
//!
//! Every stage has exactly one way to bail out, and bailing out always means
//! "leave the request alone". Nothing here can fail.
//!
//! The transform is not idempotent: feeding `/a/b_100x.jpg?width=100` back in
//! produces `/a/b_100x_100x.jpg`. Hosts run it once per viewer request.

use crate::config::SizerConfig;
use crate::dimension::extract_dimension;
use crate::extension::is_allowed_extension;
use crate::path::parse_uri_path;
use crate::query::QueryParams;
use std::fmt;

/// Why a request was passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassThrough {
    /// The path has no `/`, or its last segment has no extension.
    NoFilename,
    /// The extension is not on the allow-list.
    ExtensionNotAllowed,
    /// Neither `width` nor `height` carried a value.
    NoDimensions,
}

impl fmt::Display for PassThrough {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFilename => f.write_str("no filename extension"),
            Self::ExtensionNotAllowed => f.write_str("extension not allow-listed"),
            Self::NoDimensions => f.write_str("no width or height"),
        }
    }
}

/// Outcome of [`rewrite_uri`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    Rewritten(String),
    Unchanged(PassThrough),
}

impl Rewrite {
    /// The new URI, if one was produced.
    pub fn uri(&self) -> Option<&str> {
        match self {
            Self::Rewritten(uri) => Some(uri),
            Self::Unchanged(_) => None,
        }
    }

    /// Apply the outcome to a request URI in place. Returns whether it changed.
    pub fn apply_to(self, uri: &mut String) -> bool {
        match self {
            Self::Rewritten(new_uri) => {
                *uri = new_uri;
                true
            }
            Self::Unchanged(_) => false,
        }
    }
}

/// Compute the sized URI for a request path and its query parameters.
pub fn rewrite_uri<Q: QueryParams + ?Sized>(
    uri: &str,
    query: &Q,
    config: &SizerConfig,
) -> Rewrite {
    let outcome = run_pipeline(uri, query, config);
    match &outcome {
        Rewrite::Rewritten(new_uri) => tracing::debug!(%uri, %new_uri, "rewrote request uri"),
        Rewrite::Unchanged(reason) => tracing::debug!(%uri, %reason, "request passed through"),
    }
    outcome
}

fn run_pipeline<Q: QueryParams + ?Sized>(uri: &str, query: &Q, config: &SizerConfig) -> Rewrite {
    let Some(parsed) = parse_uri_path(uri) else {
        return Rewrite::Unchanged(PassThrough::NoFilename);
    };
    if !is_allowed_extension(parsed.extension, &config.extensions) {
        return Rewrite::Unchanged(PassThrough::ExtensionNotAllowed);
    }
    let Some(dimension) = extract_dimension(query, config) else {
        return Rewrite::Unchanged(PassThrough::NoDimensions);
    };
    Rewrite::Rewritten(parsed.with_suffix(&dimension.token()))
}
