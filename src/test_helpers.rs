//! Shared test fixtures: realistic host events built around a URI and query.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let event = lambda_event("/img/photo.jpg", "width=300");
//! let event = function_event("/img/photo.jpg", &[("width", "300")]);
//! ```

use serde_json::{Map, Value, json};

// =========================================================================
// Lambda@Edge
// =========================================================================

/// A full Lambda@Edge viewer-request event with headers, config and clientIp.
pub fn lambda_event(uri: &str, querystring: &str) -> Value {
    json!({
        "Records": [{
            "cf": {
                "config": {
                    "distributionDomainName": "d111111abcdef8.cloudfront.net",
                    "distributionId": "EDFDVBD6EXAMPLE",
                    "eventType": "viewer-request",
                    "requestId": "4TyzHTaYWb1GX1qTfsHhEqV6HUDd_BzoBZnwfnvQc_1oF26ClkoUSEQ=="
                },
                "request": {
                    "clientIp": "203.0.113.178",
                    "headers": {
                        "host": [{ "key": "Host", "value": "d111111abcdef8.cloudfront.net" }],
                        "user-agent": [{ "key": "User-Agent", "value": "curl/8.4.0" }],
                        "accept": [{ "key": "Accept", "value": "image/avif,image/webp,*/*" }]
                    },
                    "method": "GET",
                    "querystring": querystring,
                    "uri": uri
                }
            }
        }]
    })
}

// =========================================================================
// CloudFront Functions
// =========================================================================

/// A full CloudFront Functions viewer-request event. Repeated names in
/// `params` produce a `multiValue` entry like CloudFront does.
pub fn function_event(uri: &str, params: &[(&str, &str)]) -> Value {
    json!({
        "version": "1.0",
        "context": {
            "distributionDomainName": "d111111abcdef8.cloudfront.net",
            "distributionId": "EDFDVBD6EXAMPLE",
            "eventType": "viewer-request",
            "requestId": "EXAMPLEntjQpEXAMPLE_SG5Z-EXAMPLEPmPfEXAMPLEu3EqEXAMPLE=="
        },
        "viewer": { "ip": "198.51.100.11" },
        "request": {
            "method": "GET",
            "uri": uri,
            "querystring": structured_querystring(params),
            "headers": {
                "host": { "value": "www.example.com" },
                "accept": { "value": "image/avif,image/webp,*/*" }
            },
            "cookies": {
                "session": { "value": "abc123" }
            }
        }
    })
}

fn structured_querystring(params: &[(&str, &str)]) -> Value {
    let mut object = Map::new();
    for (name, value) in params {
        match object.get_mut(*name) {
            None => {
                object.insert(name.to_string(), json!({ "value": value }));
            }
            Some(entry) => {
                if entry.get("multiValue").is_none() {
                    let first = entry["value"].clone();
                    entry["multiValue"] = json!([{ "value": first }]);
                }
                if let Some(values) = entry["multiValue"].as_array_mut() {
                    values.push(json!({ "value": value }));
                }
            }
        }
    }
    Value::Object(object)
}
