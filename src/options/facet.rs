//! Facet requests.
//!
//! A facet is either a field whose distinct values are counted
//! ([`FacetFieldQuery`]) or a query whose matches are counted
//! ([`FacetSubQuery`]). Both enable faceting on the request and add one
//! multi-valued parameter each.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::params::{FACET, FACET_FIELD, FACET_LIMIT, FACET_MIN_COUNT, FACET_QUERY, Parameters};
use crate::query::Query;

/// Ordering of the values of a facet field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacetSort {
    /// Highest count first.
    Count,
    /// Lexicographic by value.
    Index,
}

impl Display for FacetSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacetSort::Count => f.write_str("count"),
            FacetSort::Index => f.write_str("index"),
        }
    }
}

/// Count the distinct values of a field.
///
/// Per-field settings are sent as `f.<field>.facet.<setting>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetFieldQuery {
    /// The field to facet on.
    pub field: String,
    /// Only count values starting with this prefix.
    pub prefix: Option<String>,
    /// Ordering of the returned values.
    pub sort: Option<FacetSort>,
    /// Maximum number of values; negative means unlimited.
    pub limit: Option<i64>,
    /// Offset into the value list, for paging.
    pub offset: Option<usize>,
    /// Minimum count for a value to be returned.
    pub min_count: Option<usize>,
    /// Also count documents without a value.
    pub missing: Option<bool>,
}

impl FacetFieldQuery {
    /// Create a new facet field query.
    pub fn new<S: Into<String>>(field: S) -> Self {
        FacetFieldQuery {
            field: field.into(),
            prefix: None,
            sort: None,
            limit: None,
            offset: None,
            min_count: None,
            missing: None,
        }
    }

    /// Set the value prefix.
    pub fn prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set the value ordering.
    pub fn sort(mut self, sort: FacetSort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Set the maximum number of values.
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the value offset.
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Set the minimum count.
    pub fn min_count(mut self, min_count: usize) -> Self {
        self.min_count = Some(min_count);
        self
    }

    /// Set whether documents without a value are counted.
    pub fn missing(mut self, missing: bool) -> Self {
        self.missing = Some(missing);
        self
    }

    fn apply(&self, params: &mut Parameters) {
        params.append(FACET_FIELD, self.field.as_str());

        let key = |name: &str| format!("f.{}.facet.{}", self.field, name);
        if let Some(prefix) = &self.prefix {
            params.set(key("prefix"), prefix.as_str());
        }
        if let Some(sort) = self.sort {
            params.set(key("sort"), sort.to_string());
        }
        if let Some(limit) = self.limit {
            params.set(key("limit"), limit.to_string());
        }
        if let Some(offset) = self.offset {
            params.set(key("offset"), offset.to_string());
        }
        if let Some(min_count) = self.min_count {
            params.set(key("mincount"), min_count.to_string());
        }
        if let Some(missing) = self.missing {
            params.set(key("missing"), missing.to_string());
        }
    }
}

/// Count the documents matching a query.
#[derive(Debug, Clone)]
pub struct FacetSubQuery {
    query: Box<dyn Query>,
}

impl FacetSubQuery {
    /// Create a new facet query.
    pub fn new(query: Box<dyn Query>) -> Self {
        FacetSubQuery { query }
    }

    /// Get the query.
    pub fn query(&self) -> &dyn Query {
        self.query.as_ref()
    }
}

/// A single facet request.
#[derive(Debug, Clone)]
pub enum FacetQuery {
    /// Count the distinct values of a field.
    Field(FacetFieldQuery),
    /// Count the documents matching a query.
    Query(FacetSubQuery),
}

impl FacetQuery {
    /// Facet on `field` with default settings.
    pub fn field<S: Into<String>>(field: S) -> Self {
        FacetQuery::Field(FacetFieldQuery::new(field))
    }

    /// Facet on the matches of `query`.
    pub fn query<Q: Query + 'static>(query: Q) -> Self {
        FacetQuery::Query(FacetSubQuery::new(Box::new(query)))
    }

    /// Add this facet's parameters, turning faceting on.
    pub fn apply(&self, params: &mut Parameters) {
        params.set(FACET, "true");
        match self {
            FacetQuery::Field(field) => field.apply(params),
            FacetQuery::Query(sub) => params.append(FACET_QUERY, sub.query.to_query_string()),
        }
    }
}

impl From<FacetFieldQuery> for FacetQuery {
    fn from(query: FacetFieldQuery) -> Self {
        FacetQuery::Field(query)
    }
}

/// Settings that apply to every facet field of a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetSettings {
    /// Maximum number of values per field (`facet.limit`).
    pub limit: Option<i64>,
    /// Minimum count for a value to be returned (`facet.mincount`).
    pub min_count: Option<usize>,
}

impl FacetSettings {
    /// Add the settings that are present.
    pub fn apply(&self, params: &mut Parameters) {
        if let Some(limit) = self.limit {
            params.set(FACET_LIMIT, limit.to_string());
        }
        if let Some(min_count) = self.min_count {
            params.set(FACET_MIN_COUNT, min_count.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{QueryByRange, SolrQuery};

    #[test]
    fn test_field_facet() {
        let mut params = Parameters::new();
        FacetQuery::field("Id").apply(&mut params);

        assert_eq!(params.get(FACET), Some("true"));
        assert_eq!(params.get_all(FACET_FIELD), vec!["Id"]);
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_query_facet() {
        let mut params = Parameters::new();
        FacetQuery::query(SolrQuery::new("id:[1 TO 5]")).apply(&mut params);
        FacetQuery::query(QueryByRange::new("price", 0, 10)).apply(&mut params);

        assert_eq!(params.get(FACET), Some("true"));
        assert_eq!(
            params.get_all(FACET_QUERY),
            vec!["id:[1 TO 5]", "price:[0 TO 10]"]
        );
        assert_eq!(params.get_all(FACET).len(), 1);
    }

    #[test]
    fn test_per_field_settings() {
        let facet = FacetFieldQuery::new("cat")
            .prefix("el")
            .sort(FacetSort::Index)
            .limit(-1)
            .offset(20)
            .min_count(2)
            .missing(true);
        let mut params = Parameters::new();
        FacetQuery::from(facet).apply(&mut params);

        assert_eq!(params.get("f.cat.facet.prefix"), Some("el"));
        assert_eq!(params.get("f.cat.facet.sort"), Some("index"));
        assert_eq!(params.get("f.cat.facet.limit"), Some("-1"));
        assert_eq!(params.get("f.cat.facet.offset"), Some("20"));
        assert_eq!(params.get("f.cat.facet.mincount"), Some("2"));
        assert_eq!(params.get("f.cat.facet.missing"), Some("true"));
    }

    #[test]
    fn test_global_settings() {
        let mut params = Parameters::new();
        FacetSettings::default().apply(&mut params);
        assert!(params.is_empty());

        FacetSettings {
            limit: Some(5),
            min_count: Some(1),
        }
        .apply(&mut params);
        assert_eq!(params.get(FACET_LIMIT), Some("5"));
        assert_eq!(params.get(FACET_MIN_COUNT), Some("1"));
    }
}
