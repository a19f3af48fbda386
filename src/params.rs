//! Request parameters sent to the search server.
//!
//! [`Parameters`] keeps insertion order so that a request is rendered the same
//! way every time. Most keys are unique and are written with
//! [`Parameters::set`]; multi-valued keys such as `facet.field` use
//! [`Parameters::append`].

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Query string key for the query expression.
pub const QUERY: &str = "q";
/// Query string key for the result limit.
pub const ROWS: &str = "rows";
/// Query string key for the paging offset.
pub const START: &str = "start";
/// Query string key for sorting.
pub const SORT: &str = "sort";
/// Query string key for the returned field list.
pub const FIELD_LIST: &str = "fl";
/// Query string key for filter queries.
pub const FILTER_QUERY: &str = "fq";
/// Query string key enabling faceting.
pub const FACET: &str = "facet";
/// Query string key naming a facet field.
pub const FACET_FIELD: &str = "facet.field";
/// Query string key holding a facet query.
pub const FACET_QUERY: &str = "facet.query";
/// Query string key for the maximum number of values per facet field.
pub const FACET_LIMIT: &str = "facet.limit";
/// Query string key for the minimum count of a returned facet value.
pub const FACET_MIN_COUNT: &str = "facet.mincount";
/// Query string key enabling highlighting.
pub const HIGHLIGHT: &str = "hl";
/// Query string key naming the highlighted fields.
pub const HIGHLIGHT_FIELDS: &str = "hl.fl";
/// Query string key for the markup placed before a highlighted term.
pub const HIGHLIGHT_PRE: &str = "hl.simple.pre";
/// Query string key for the markup placed after a highlighted term.
pub const HIGHLIGHT_POST: &str = "hl.simple.post";
/// Query string key for the snippet size.
pub const HIGHLIGHT_FRAGMENT_SIZE: &str = "hl.fragsize";
/// Query string key for the number of snippets per field.
pub const HIGHLIGHT_SNIPPETS: &str = "hl.snippets";

/// An ordered list of request parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameters {
    pairs: Vec<(String, String)>,
}

impl Parameters {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Parameters { pairs: Vec::new() }
    }

    /// Set `key` to `value`, replacing every existing value of `key`.
    ///
    /// A replaced key keeps the position of its first occurrence.
    pub fn set<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| *k == key) {
            Some(pos) => {
                self.pairs[pos].1 = value;
                let mut index = 0;
                self.pairs.retain(|(k, _)| {
                    let keep = index <= pos || *k != key;
                    index += 1;
                    keep
                });
            }
            None => self.pairs.push((key, value)),
        }
    }

    /// Add another value for `key`, keeping the existing ones.
    pub fn append<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Get the first value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Get every value of `key`, in insertion order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Check if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Remove every value of `key`.
    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    /// Iterate over the pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Get the raw pairs.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Get the number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render as a percent-encoded query string (without the leading `?`).
    pub fn to_query_string(&self) -> String {
        // A sequence of string pairs always serializes.
        serde_urlencoded::to_string(&self.pairs).unwrap_or_default()
    }
}

impl Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Parameters::new();
        for (k, v) in iter {
            params.append(k, v);
        }
        params
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = &'a (String, String);
    type IntoIter = std::slice::Iter<'a, (String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
