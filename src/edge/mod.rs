//! CloudFront event envelopes.
//!
//! | Host | Module | Request location | Query shape |
//! |---|---|---|---|
//! | Lambda@Edge | [`lambda`] | `Records[0].cf.request` | raw string |
//! | CloudFront Functions | [`function`] | `request` | `{ name: { value } }` object |
//!
//! Both handlers return the request object they were given with, at most, its
//! `uri` replaced. Every other field is carried through the typed structs via
//! `#[serde(flatten)]` maps, so headers, cookies, `clientIp`, `querystring`
//! (even when `null`) and anything AWS adds later survive unchanged.
//!
//! Equality is semantic, not byte-for-byte. `uri` is always serialized first;
//! the remaining keys keep the host's order (`serde_json` `preserve_order`).
//! A request whose `uri` was already its first key therefore round-trips
//! byte-identical on pass-through.
//!
//! A pass-through is never an error. The only errors are envelopes that do not
//! look like either host event at all.

pub mod function;
pub mod lambda;

use crate::config::SizerConfig;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EventError {
    #[error("malformed event: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("event has no Records")]
    NoRecords,
    #[error("request.querystring has an unexpected type")]
    InvalidQuerystring,
    #[error("event has neither `Records` nor `request`; not a viewer-request event")]
    UnrecognizedShape,
}

/// Which host produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventShape {
    LambdaEdge,
    CloudFrontFunction,
}

impl EventShape {
    /// Detect the host from the top-level keys of an event.
    pub fn detect(event: &Value) -> Result<Self, EventError> {
        let object = event.as_object().ok_or(EventError::UnrecognizedShape)?;
        if object.contains_key("Records") {
            Ok(Self::LambdaEdge)
        } else if object.contains_key("request") {
            Ok(Self::CloudFrontFunction)
        } else {
            Err(EventError::UnrecognizedShape)
        }
    }
}

/// Handle an untyped event from either host and return the request object.
pub fn handle_event_json(event: Value, config: &SizerConfig) -> Result<Value, EventError> {
    let request = match EventShape::detect(&event)? {
        EventShape::LambdaEdge => {
            let event: lambda::LambdaEdgeEvent = serde_json::from_value(event)?;
            serde_json::to_value(lambda::handle_viewer_request(event, config)?)?
        }
        EventShape::CloudFrontFunction => {
            let event: function::FunctionEvent = serde_json::from_value(event)?;
            serde_json::to_value(function::handle_viewer_request(event, config)?)?
        }
    };
    Ok(request)
}
