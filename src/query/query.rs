//! Base query trait and the raw query type.

use std::fmt::{self, Debug, Display};

use serde::{Deserialize, Serialize};

/// Trait for anything that can be sent to the server as a query expression.
pub trait Query: Send + Sync + Debug {
    /// Render this query in Solr query syntax.
    fn to_query_string(&self) -> String;

    /// Clone this query.
    fn clone_box(&self) -> Box<dyn Query>;
}

impl Clone for Box<dyn Query> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// A query given as literal Solr syntax, passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolrQuery {
    query: String,
}

impl SolrQuery {
    /// Create a new raw query.
    pub fn new<S: Into<String>>(query: S) -> Self {
        SolrQuery {
            query: query.into(),
        }
    }

    /// The query matching every document (`*:*`).
    pub fn all() -> Self {
        SolrQuery::new("*:*")
    }

    /// Get the query text.
    pub fn as_str(&self) -> &str {
        &self.query
    }
}

impl Query for SolrQuery {
    fn to_query_string(&self) -> String {
        self.query.clone()
    }

    fn clone_box(&self) -> Box<dyn Query> {
        Box::new(self.clone())
    }
}

impl Display for SolrQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.query)
    }
}

impl From<&str> for SolrQuery {
    fn from(query: &str) -> Self {
        SolrQuery::new(query)
    }
}

impl From<String> for SolrQuery {
    fn from(query: String) -> Self {
        SolrQuery::new(query)
    }
}
