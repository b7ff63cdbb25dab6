//! # Edge Image Sizer
//!
//! A viewer-request rewriter for CloudFront. Requests for images that carry
//! `width`/`height` query parameters get the size embedded in the filename,
//! so the origin (or a resizing layer behind it) can serve a pre-sized variant:
//!
//! ```text
//! /img/photo.jpg?width=300&height=200  →  /img/photo_300x200.jpg
//! ```
//!
//! It never touches pixels. It only computes the canonical name of the variant.
//!
//! # Pipeline
//!
//! ```text
//! 1. Parse      uri        →  directory / stem . extension
//! 2. Filter     extension  →  allow-listed?
//! 3. Extract    query      →  clamped width × height
//! 4. Rewrite               →  {directory}/{stem}_{w}x{h}.{extension}
//! ```
//!
//! Any "no" along the way returns the request untouched. The transform is a
//! pure function of the request and a [`config::SizerConfig`], so every
//! invocation is independent and safe to run with unbounded concurrency.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`path`] | Split the request path on its last `/` and last `.` |
//! | [`extension`] | Case-insensitive image extension allow-list |
//! | [`query`] | [`query::QueryParams`] over raw query strings and pre-parsed query objects |
//! | [`dimension`] | Read, coerce and clamp `width`/`height` into a `{w}x{h}` token |
//! | [`rewrite`] | The pipeline itself, reporting why a request passed through |
//! | [`edge`] | Lambda@Edge and CloudFront Functions event envelopes |
//! | [`config`] | `sizer.toml` loading, merging over stock defaults, validation |
//! | [`output`] | Formatting for the local harness binary |
//!
//! # Design Decisions
//!
//! ## One Transform, Two Hosts
//!
//! Lambda@Edge passes the query as a raw string; CloudFront Functions passes a
//! pre-parsed object. Both are adapted to [`query::QueryParams`] so the rewrite
//! logic exists once. The event types in [`edge`] keep every field they do not
//! understand, and only `uri` is ever written.
//!
//! ## Malformed Sizes Clamp, They Don't Fail
//!
//! `?width=abc` produces `_4x`, the smallest allowed size, rather than a pass
//! through or an error. Out-of-range values clamp to the nearest bound. A
//! request is only left alone when neither parameter has a value.
//!
//! ## Not Idempotent
//!
//! Running the transform on its own output appends a second suffix. The host
//! invokes it once per viewer request, so this is left as is.

pub mod config;
pub mod dimension;
pub mod edge;
pub mod extension;
pub mod output;
pub mod path;
pub mod query;
pub mod rewrite;

pub use config::SizerConfig;
pub use rewrite::{PassThrough, Rewrite, rewrite_uri};

#[cfg(test)]
pub(crate) mod test_helpers;
