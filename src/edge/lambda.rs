//! Lambda@Edge viewer-request events.
//!
//! ```json
//! {
//!   "Records": [{
//!     "cf": {
//!       "config": { "distributionId": "EDFDVBD6EXAMPLE", "eventType": "viewer-request" },
//!       "request": {
//!         "clientIp": "203.0.113.178",
//!         "method": "GET",
//!         "uri": "/img/photo.jpg",
//!         "querystring": "width=300&height=200",
//!         "headers": { "host": [{ "key": "Host", "value": "d111111abcdef8.cloudfront.net" }] }
//!       }
//!     }
//!   }]
//! }
//! ```
//!
//! The handler returns `Records[0].cf.request`, which Lambda@Edge forwards to
//! the origin.

use super::EventError;
use crate::config::SizerConfig;
use crate::query::RawQueryString;
use crate::rewrite::rewrite_uri;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LambdaEdgeEvent {
    #[serde(rename = "Records")]
    pub records: Vec<LambdaEdgeRecord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LambdaEdgeRecord {
    pub cf: CloudFrontRecord,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudFrontRecord {
    pub request: LambdaEdgeRequest,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The request object. Only `uri` is ever modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LambdaEdgeRequest {
    pub uri: String,
    /// querystring, headers, method, clientIp, origin, body... carried
    /// through as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LambdaEdgeRequest {
    /// Raw query string without the leading `?`.
    ///
    /// Absent and `null` read as empty. Any other non-string is a broken
    /// envelope.
    pub fn querystring(&self) -> Result<&str, EventError> {
        match self.extra.get("querystring") {
            None | Some(Value::Null) => Ok(""),
            Some(Value::String(query)) => Ok(query),
            Some(_) => Err(EventError::InvalidQuerystring),
        }
    }
}

/// Rewrite the first record's request and return it.
pub fn handle_viewer_request(
    event: LambdaEdgeEvent,
    config: &SizerConfig,
) -> Result<LambdaEdgeRequest, EventError> {
    let mut request = event
        .records
        .into_iter()
        .next()
        .map(|record| record.cf.request)
        .ok_or(EventError::NoRecords)?;

    let query = RawQueryString::parse(request.querystring()?);
    rewrite_uri(&request.uri, &query, config).apply_to(&mut request.uri);
    Ok(request)
}
