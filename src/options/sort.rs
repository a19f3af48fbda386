//! Result ordering.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SolrError};

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Order {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Asc => f.write_str("asc"),
            Order::Desc => f.write_str("desc"),
        }
    }
}

impl FromStr for Order {
    type Err = SolrError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Order::Asc),
            "desc" => Ok(Order::Desc),
            other => Err(SolrError::query(format!("unknown sort order: {other}"))),
        }
    }
}

/// A field and the direction to sort it in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    /// The field to sort on.
    pub field: String,
    /// The direction.
    pub order: Order,
}

impl SortOrder {
    /// Sort ascending on `field`.
    pub fn new<S: Into<String>>(field: S) -> Self {
        SortOrder {
            field: field.into(),
            order: Order::Asc,
        }
    }

    /// Sort on `field` in the given direction.
    pub fn with_order<S: Into<String>>(field: S, order: Order) -> Self {
        SortOrder {
            field: field.into(),
            order,
        }
    }

    /// Parse `"field"` or `"field asc|desc"`.
    pub fn parse(s: &str) -> Result<Self> {
        let mut parts = s.split_whitespace();
        let field = parts
            .next()
            .ok_or_else(|| SolrError::query("empty sort clause"))?;
        let order = match parts.next() {
            Some(order) => order.parse()?,
            None => Order::Asc,
        };
        if parts.next().is_some() {
            return Err(SolrError::query(format!("invalid sort clause: {s}")));
        }
        Ok(SortOrder::with_order(field, order))
    }

    /// Parse a comma-separated list of sort clauses.
    pub fn parse_list(s: &str) -> Result<Vec<Self>> {
        s.split(',')
            .filter(|clause| !clause.trim().is_empty())
            .map(SortOrder::parse)
            .collect()
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.order)
    }
}

/// How results are ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderBy {
    /// Sort by fields, the first one taking precedence.
    Fields(Vec<SortOrder>),
    /// Shuffle the matching documents on the client.
    Random,
}

impl OrderBy {
    /// Render the value of the `sort` parameter.
    ///
    /// Returns `None` for random ordering and for an empty field list.
    pub fn to_sort_param(&self) -> Option<String> {
        match self {
            OrderBy::Fields(orders) if !orders.is_empty() => Some(
                orders
                    .iter()
                    .map(|o| o.to_string())
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            _ => None,
        }
    }
}

impl From<SortOrder> for OrderBy {
    fn from(order: SortOrder) -> Self {
        OrderBy::Fields(vec![order])
    }
}

impl From<Vec<SortOrder>> for OrderBy {
    fn from(orders: Vec<SortOrder>) -> Self {
        OrderBy::Fields(orders)
    }
}
