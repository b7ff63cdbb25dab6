//! CloudFront Functions viewer-request events.
//!
//! ```json
//! {
//!   "version": "1.0",
//!   "context": { "eventType": "viewer-request", "requestId": "..." },
//!   "viewer": { "ip": "198.51.100.11" },
//!   "request": {
//!     "method": "GET",
//!     "uri": "/img/photo.jpg",
//!     "querystring": { "width": { "value": "300" }, "height": { "value": "200" } },
//!     "headers": {},
//!     "cookies": {}
//!   }
//! }
//! ```

use super::EventError;
use crate::config::SizerConfig;
use crate::query::StructuredQuery;
use crate::rewrite::rewrite_uri;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionEvent {
    pub request: FunctionRequest,
    /// version, context, viewer...
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The request object. Only `uri` is ever modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionRequest {
    pub uri: String,
    /// querystring, method, headers, cookies... carried through as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FunctionRequest {
    /// The query object, decoded for reading. Absent and `null` read as empty.
    pub fn querystring(&self) -> Result<StructuredQuery, EventError> {
        match self.extra.get("querystring") {
            None | Some(Value::Null) => Ok(StructuredQuery::default()),
            Some(query) => {
                StructuredQuery::deserialize(query).map_err(|_| EventError::InvalidQuerystring)
            }
        }
    }
}

/// Rewrite the event's request and return it.
pub fn handle_viewer_request(
    event: FunctionEvent,
    config: &SizerConfig,
) -> Result<FunctionRequest, EventError> {
    let mut request = event.request;
    let query = request.querystring()?;
    rewrite_uri(&request.uri, &query, config).apply_to(&mut request.uri);
    Ok(request)
}
