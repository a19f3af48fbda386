//! Field value types for decoded documents.
//!
//! [`FieldValue`] mirrors the value elements of the server's XML response
//! format:
//!
//! - `str` - [`FieldValue::Text`]
//! - `int`, `long` - [`FieldValue::Integer`]
//! - `float`, `double` - [`FieldValue::Float`]
//! - `bool` - [`FieldValue::Boolean`]
//! - `date` - [`FieldValue::DateTime`]
//! - `arr` - [`FieldValue::Array`] (multi-valued fields)
//! - `null` - [`FieldValue::Null`]
//!
//! ```
//! use solr_query::document::FieldValue;
//!
//! let value = FieldValue::from_xml("int", "42").unwrap();
//! assert_eq!(value.as_integer(), Some(42));
//! assert_eq!(value.to_key_string(), Some("42".to_string()));
//! ```

use std::fmt::{self, Display};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SolrError};

/// Represents a value of a document field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Text value
    Text(String),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Boolean(bool),
    /// DateTime value
    DateTime(DateTime<Utc>),
    /// Multi-valued field
    Array(Vec<FieldValue>),
    /// Null value
    Null,
}

impl FieldValue {
    /// Decode a scalar value element (`str`, `int`, ...) from its text.
    pub fn from_xml(tag: &str, text: &str) -> Result<Self> {
        match tag {
            "str" => Ok(FieldValue::Text(text.to_string())),
            "int" | "long" | "short" | "byte" => text
                .trim()
                .parse::<i64>()
                .map(FieldValue::Integer)
                .map_err(|e| SolrError::parse(format!("invalid {tag} value {text:?}: {e}"))),
            "float" | "double" => text
                .trim()
                .parse::<f64>()
                .map(FieldValue::Float)
                .map_err(|e| SolrError::parse(format!("invalid {tag} value {text:?}: {e}"))),
            "bool" => match text.trim() {
                "true" => Ok(FieldValue::Boolean(true)),
                "false" => Ok(FieldValue::Boolean(false)),
                other => Err(SolrError::parse(format!("invalid bool value {other:?}"))),
            },
            "date" => DateTime::parse_from_rfc3339(text.trim())
                .map(|dt| FieldValue::DateTime(dt.with_timezone(&Utc)))
                .map_err(|e| SolrError::parse(format!("invalid date value {text:?}: {e}"))),
            "null" => Ok(FieldValue::Null),
            other => Err(SolrError::parse(format!("unknown value type <{other}>"))),
        }
    }

    /// Convert to text if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            FieldValue::Text(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Get the value as a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            FieldValue::Float(f) => Some(*f),
            FieldValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Convert to boolean.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            FieldValue::Text(s) => match s.to_lowercase().as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// Get the value as a timestamp.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::DateTime(dt) => Some(*dt),
            FieldValue::Text(s) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            _ => None,
        }
    }

    /// Get the values of a multi-valued field.
    pub fn as_array(&self) -> Option<&[FieldValue]> {
        match self {
            FieldValue::Array(values) => Some(values),
            _ => None,
        }
    }

    /// Render a scalar value the way it is written in a query.
    ///
    /// Arrays and nulls have no single query form and yield `None`.
    pub fn to_key_string(&self) -> Option<String> {
        match self {
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Integer(i) => Some(i.to_string()),
            FieldValue::Float(f) => Some(f.to_string()),
            FieldValue::Boolean(b) => Some(b.to_string()),
            FieldValue::DateTime(dt) => Some(dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            FieldValue::Array(_) | FieldValue::Null => None,
        }
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Array(values) => {
                let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", rendered.join(", "))
            }
            FieldValue::Null => f.write_str("null"),
            scalar => f.write_str(&scalar.to_key_string().unwrap_or_default()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}
