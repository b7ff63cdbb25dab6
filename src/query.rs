//! Query parameter access for both host event shapes.
//!
//! Lambda@Edge hands over the raw query string (`width=300&height=200`), while
//! CloudFront Functions hands over a pre-parsed object keyed by parameter name.
//! The [`QueryParams`] trait hides the difference so dimension extraction is
//! written once.
//!
//! | Shape | Adapter | Source |
//! |---|---|---|
//! | A | [`RawQueryString`] | `request.querystring` as a string |
//! | B | [`StructuredQuery`] | `request.querystring` as `{ name: { value, multiValue? } }` |

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Read-only lookup of query parameters by name.
///
/// Names are matched exactly (case-sensitive). When a parameter repeats, the
/// first value wins.
pub trait QueryParams {
    fn get_value(&self, name: &str) -> Option<&str>;
}

/// Shape A: a decoded `application/x-www-form-urlencoded` query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawQueryString {
    pairs: Vec<(String, String)>,
}

impl RawQueryString {
    /// Decode `key=value&...`, percent escapes and `+` as space.
    ///
    /// A single leading `?` is ignored. Pairs without `=` decode to an empty
    /// value, matching `URLSearchParams`.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        Self { pairs }
    }
}

impl QueryParams for RawQueryString {
    fn get_value(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// One entry of a CloudFront Functions query/header/cookie object.
///
/// Only `value` is read. `multiValue`, `attributes` and anything else the
/// host sends stay in `extra` exactly as received, `null`s included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryValue {
    /// First (or only) value.
    pub value: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl QueryValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            extra: Map::new(),
        }
    }
}

/// Shape B: a pre-parsed query object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructuredQuery(pub BTreeMap<String, QueryValue>);

impl QueryParams for StructuredQuery {
    fn get_value(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(|entry| entry.value.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StructuredQuery {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), QueryValue::new(v)))
                .collect(),
        )
    }
}
