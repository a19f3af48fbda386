//! Range query implementation for querying within value ranges.

use std::fmt::Display;

use crate::query::query::Query;

/// Bound type for range queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bound {
    /// Inclusive bound, rendered with `[` / `]`.
    Included(String),
    /// Exclusive bound, rendered with `{` / `}`.
    Excluded(String),
    /// Open end, rendered as an inclusive `*`.
    Unbounded,
}

impl Bound {
    /// Create an inclusive bound.
    pub fn included<T: Display>(value: T) -> Self {
        Bound::Included(value.to_string())
    }

    /// Create an exclusive bound.
    pub fn excluded<T: Display>(value: T) -> Self {
        Bound::Excluded(value.to_string())
    }

    fn value(&self) -> &str {
        match self {
            Bound::Included(v) | Bound::Excluded(v) => v,
            Bound::Unbounded => "*",
        }
    }

    fn is_exclusive(&self) -> bool {
        matches!(self, Bound::Excluded(_))
    }
}

/// A query that matches documents with field values within a range.
///
/// Bounds are rendered verbatim, so dates (`2008-01-01T00:00:00Z`) and date
/// math (`NOW-1DAY`) can be used directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryByRange {
    /// The field to search in.
    field: String,
    /// Lower bound of the range.
    lower: Bound,
    /// Upper bound of the range.
    upper: Bound,
}

impl QueryByRange {
    /// Create an inclusive range `field:[from TO to]`.
    pub fn new<F, T>(field: F, from: T, to: T) -> Self
    where
        F: Into<String>,
        T: Display,
    {
        QueryByRange {
            field: field.into(),
            lower: Bound::included(from),
            upper: Bound::included(to),
        }
    }

    /// Create an exclusive range `field:{from TO to}`.
    pub fn exclusive<F, T>(field: F, from: T, to: T) -> Self
    where
        F: Into<String>,
        T: Display,
    {
        QueryByRange {
            field: field.into(),
            lower: Bound::excluded(from),
            upper: Bound::excluded(to),
        }
    }

    /// Create a range with explicit bounds.
    pub fn with_bounds<F: Into<String>>(field: F, lower: Bound, upper: Bound) -> Self {
        QueryByRange {
            field: field.into(),
            lower,
            upper,
        }
    }

    /// Get the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Get the lower bound.
    pub fn lower(&self) -> &Bound {
        &self.lower
    }

    /// Get the upper bound.
    pub fn upper(&self) -> &Bound {
        &self.upper
    }
}

impl Query for QueryByRange {
    fn to_query_string(&self) -> String {
        let open = if self.lower.is_exclusive() { '{' } else { '[' };
        let close = if self.upper.is_exclusive() { '}' } else { ']' };
        format!(
            "{}:{}{} TO {}{}",
            self.field,
            open,
            self.lower.value(),
            self.upper.value(),
            close
        )
    }

    fn clone_box(&self) -> Box<dyn Query> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inclusive_range() {
        let query = QueryByRange::new("id", 1, 5);
        assert_eq!(query.to_query_string(), "id:[1 TO 5]");
    }

    #[test]
    fn test_exclusive_range() {
        let query = QueryByRange::exclusive("price", 10.5, 20.0);
        assert_eq!(query.to_query_string(), "price:{10.5 TO 20}");
    }

    #[test]
    fn test_open_and_mixed_bounds() {
        let query = QueryByRange::with_bounds("date", Bound::included("NOW-1DAY"), Bound::Unbounded);
        assert_eq!(query.to_query_string(), "date:[NOW-1DAY TO *]");

        let query = QueryByRange::with_bounds("size", Bound::Unbounded, Bound::excluded(100));
        assert_eq!(query.to_query_string(), "size:[* TO 100}");
        assert_eq!(query.upper(), &Bound::Excluded("100".to_string()));
    }
}
