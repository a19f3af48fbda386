//! Field query implementation for matching a single field value.

use crate::query::escape::{escape_term, quote_phrase};
use crate::query::query::Query;

/// A query that matches documents whose `field` contains `value`.
///
/// Values containing whitespace are sent as a quoted phrase, anything else is
/// escaped term by term. Use [`QueryByField::raw`] when the value is already
/// valid query syntax (wildcards, fuzzy suffixes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryByField {
    /// The field to search in.
    field: String,
    /// The value to search for.
    value: String,
    /// Whether the value is escaped before rendering.
    escape: bool,
}

impl QueryByField {
    /// Create a new field query with escaping.
    pub fn new<F, V>(field: F, value: V) -> Self
    where
        F: Into<String>,
        V: Into<String>,
    {
        QueryByField {
            field: field.into(),
            value: value.into(),
            escape: true,
        }
    }

    /// Create a field query whose value is rendered verbatim.
    pub fn raw<F, V>(field: F, value: V) -> Self
    where
        F: Into<String>,
        V: Into<String>,
    {
        QueryByField {
            field: field.into(),
            value: value.into(),
            escape: false,
        }
    }

    /// Get the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Get the value.
    pub fn value(&self) -> &str {
        &self.value
    }

    fn render_value(&self) -> String {
        if !self.escape {
            self.value.clone()
        } else if self.value.is_empty() || self.value.chars().any(char::is_whitespace) {
            quote_phrase(&self.value)
        } else {
            escape_term(&self.value)
        }
    }
}

impl Query for QueryByField {
    fn to_query_string(&self) -> String {
        format!("{}:{}", self.field, self.render_value())
    }

    fn clone_box(&self) -> Box<dyn Query> {
        Box::new(self.clone())
    }
}
