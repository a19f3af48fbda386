//! Typed result sets and the parsers that produce them.

pub mod xml;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use self::xml::XmlResultParser;

/// Status information from the response header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseHeader {
    /// Zero on success.
    pub status: i32,
    /// Server-side query time in milliseconds.
    pub query_time: u64,
}

/// A value of a facet field and the number of matching documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetValue {
    /// The field value.
    pub value: String,
    /// Number of documents with this value.
    pub count: u64,
}

impl FacetValue {
    /// Create a new facet value.
    pub fn new<S: Into<String>>(value: S, count: u64) -> Self {
        FacetValue {
            value: value.into(),
            count,
        }
    }
}

/// Highlight snippets of one document, keyed by field name.
pub type DocumentHighlights = HashMap<String, Vec<String>>;

/// The documents and metadata returned for a query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResults<D> {
    /// The documents, in server order.
    pub documents: Vec<D>,
    /// Total number of matching documents.
    pub num_found: u64,
    /// Offset of the first returned document.
    pub start: u64,
    /// Maximum score, when scores were requested.
    pub max_score: Option<f32>,
    /// Response header.
    pub header: ResponseHeader,
    /// Facet field counts, keyed by field, values in server order.
    pub facet_fields: HashMap<String, Vec<FacetValue>>,
    /// Facet query counts, keyed by the query text.
    pub facet_queries: HashMap<String, u64>,
    /// Highlight snippets, keyed by unique key.
    pub highlights: HashMap<String, DocumentHighlights>,
}

impl<D> QueryResults<D> {
    /// Create results holding only `documents`.
    pub fn new(documents: Vec<D>) -> Self {
        QueryResults {
            num_found: documents.len() as u64,
            documents,
            start: 0,
            max_score: None,
            header: ResponseHeader::default(),
            facet_fields: HashMap::new(),
            facet_queries: HashMap::new(),
            highlights: HashMap::new(),
        }
    }

    /// Get the number of returned documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if no documents were returned.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Iterate over the documents.
    pub fn iter(&self) -> std::slice::Iter<'_, D> {
        self.documents.iter()
    }

    /// Get the counts of a facet field.
    pub fn facet_field(&self, field: &str) -> Option<&[FacetValue]> {
        self.facet_fields.get(field).map(|v| v.as_slice())
    }

    /// Get the count of a facet query.
    pub fn facet_query(&self, query: &str) -> Option<u64> {
        self.facet_queries.get(query).copied()
    }

    /// Get the highlight snippets of the document with the given unique key.
    pub fn highlights_for(&self, key: &str) -> Option<&DocumentHighlights> {
        self.highlights.get(key)
    }
}

impl<D> Default for QueryResults<D> {
    fn default() -> Self {
        QueryResults::new(Vec::new())
    }
}

impl<D> FromIterator<D> for QueryResults<D> {
    fn from_iter<I: IntoIterator<Item = D>>(iter: I) -> Self {
        QueryResults::new(iter.into_iter().collect())
    }
}

impl<D> IntoIterator for QueryResults<D> {
    type Item = D;
    type IntoIter = std::vec::IntoIter<D>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.into_iter()
    }
}

impl<'a, D> IntoIterator for &'a QueryResults<D> {
    type Item = &'a D;
    type IntoIter = std::slice::Iter<'a, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}

/// Trait for decoding a raw response body into typed results.
pub trait ResultParser<D>: Send + Sync {
    /// Parse a response body.
    fn parse(&self, response: &str) -> Result<QueryResults<D>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_results() {
        let results: QueryResults<i32> = vec![1, 2, 3].into_iter().collect();
        assert_eq!(results.len(), 3);
        assert_eq!(results.num_found, 3);
        assert_eq!(results.iter().copied().sum::<i32>(), 6);
    }

    #[test]
    fn test_facet_lookup() {
        let mut results: QueryResults<()> = QueryResults::default();
        results
            .facet_fields
            .insert("cat".to_string(), vec![FacetValue::new("book", 4)]);
        results.facet_queries.insert("id:[1 TO 5]".to_string(), 2);

        assert!(results.is_empty());
        assert_eq!(results.facet_field("cat").map(|v| v.len()), Some(1));
        assert_eq!(results.facet_query("id:[1 TO 5]"), Some(2));
        assert_eq!(results.facet_query("missing"), None);
    }
}
