//! Boolean combinations of queries.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::query::query::Query;
use crate::query::term::QueryByField;

/// Operator joining the criteria of a [`MultipleCriteriaQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Every criterion must match.
    And,
    /// At least one criterion must match.
    Or,
}

impl Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::And => f.write_str("AND"),
            Operator::Or => f.write_str("OR"),
        }
    }
}

/// A parenthesized group of queries joined by one operator.
///
/// Criteria that render to an empty string are skipped; a query with no
/// remaining criteria renders as the empty string.
#[derive(Debug, Clone)]
pub struct MultipleCriteriaQuery {
    /// The grouped queries.
    criteria: Vec<Box<dyn Query>>,
    /// The joining operator.
    operator: Operator,
}

impl MultipleCriteriaQuery {
    /// Create a new empty group.
    pub fn new(operator: Operator) -> Self {
        MultipleCriteriaQuery {
            criteria: Vec::new(),
            operator,
        }
    }

    /// Create an `AND` group from the given queries.
    pub fn all_of(criteria: Vec<Box<dyn Query>>) -> Self {
        MultipleCriteriaQuery {
            criteria,
            operator: Operator::And,
        }
    }

    /// Create an `OR` group from the given queries.
    pub fn any_of(criteria: Vec<Box<dyn Query>>) -> Self {
        MultipleCriteriaQuery {
            criteria,
            operator: Operator::Or,
        }
    }

    /// Add a criterion.
    pub fn add(mut self, query: Box<dyn Query>) -> Self {
        self.criteria.push(query);
        self
    }

    /// Get the operator.
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Get the number of criteria.
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Check if the group has no criteria.
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

impl Query for MultipleCriteriaQuery {
    fn to_query_string(&self) -> String {
        let parts: Vec<String> = self
            .criteria
            .iter()
            .map(|q| q.to_query_string())
            .filter(|s| !s.is_empty())
            .collect();

        if parts.is_empty() {
            return String::new();
        }

        let separator = format!(" {} ", self.operator);
        format!("({})", parts.join(&separator))
    }

    fn clone_box(&self) -> Box<dyn Query> {
        Box::new(self.clone())
    }
}

/// A query matching documents whose `field` equals any of the given values.
///
/// Renders as `(field:a OR field:b ...)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryInList {
    /// The field to search in.
    field: String,
    /// Accepted values.
    values: Vec<String>,
}

impl QueryInList {
    /// Create a new in-list query.
    pub fn new<F, I, V>(field: F, values: I) -> Self
    where
        F: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        QueryInList {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Get the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Get the values.
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl Query for QueryInList {
    fn to_query_string(&self) -> String {
        let criteria = self
            .values
            .iter()
            .map(|v| Box::new(QueryByField::new(self.field.as_str(), v.as_str())) as Box<dyn Query>)
            .collect();
        MultipleCriteriaQuery::any_of(criteria).to_query_string()
    }

    fn clone_box(&self) -> Box<dyn Query> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::query::SolrQuery;
    use crate::query::range::QueryByRange;

    #[test]
    fn test_and_group() {
        let query = MultipleCriteriaQuery::new(Operator::And)
            .add(Box::new(QueryByField::new("cat", "book")))
            .add(Box::new(QueryByRange::new("price", 1, 5)));

        assert_eq!(query.len(), 2);
        assert_eq!(query.to_query_string(), "(cat:book AND price:[1 TO 5])");
    }

    #[test]
    fn test_empty_criteria_are_skipped() {
        let query = MultipleCriteriaQuery::any_of(vec![
            Box::new(SolrQuery::new("")),
            Box::new(SolrQuery::new("a:1")),
        ]);
        assert_eq!(query.to_query_string(), "(a:1)");

        let empty = MultipleCriteriaQuery::new(Operator::Or);
        assert!(empty.is_empty());
        assert_eq!(empty.to_query_string(), "");
    }

    #[test]
    fn test_nested_groups() {
        let inner = MultipleCriteriaQuery::any_of(vec![
            Box::new(QueryByField::new("a", "1")),
            Box::new(QueryByField::new("a", "2")),
        ]);
        let outer = MultipleCriteriaQuery::all_of(vec![
            Box::new(inner),
            Box::new(QueryByField::new("b", "x y")),
        ]);
        assert_eq!(outer.to_query_string(), "((a:1 OR a:2) AND b:\"x y\")");
    }

    #[test]
    fn test_in_list() {
        let query = QueryInList::new("id", ["123", "456", "567"]);
        assert_eq!(query.to_query_string(), "(id:123 OR id:456 OR id:567)");
        assert_eq!(query.values().len(), 3);

        let empty = QueryInList::new("id", Vec::<String>::new());
        assert_eq!(empty.to_query_string(), "");
    }
}
