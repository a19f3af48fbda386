//! Document structure and the typed-document trait.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::document::field_value::FieldValue;
use crate::error::Result;

/// A type that search results can be decoded into.
///
/// The unique key is what the randomized ordering uses to fetch documents
/// back by identifier, so it must be a field the server can query on. Keys
/// are read from the raw response, so `from_document` is only called with
/// the fields a normal query returns.
pub trait SolrDocument: Sized {
    /// Name of the unique-key field.
    fn unique_key_field() -> &'static str {
        "id"
    }

    /// Value of the unique key, rendered as it appears in a query.
    fn unique_key(&self) -> Option<String>;

    /// Build a typed document from its decoded fields.
    fn from_document(document: Document) -> Result<Self>;
}

/// A decoded document: field names mapped to their values.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct Document {
    /// The field values for this document
    fields: HashMap<String, FieldValue>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Document {
            fields: HashMap::new(),
        }
    }

    /// Add a field value to the document.
    pub fn add_field<S: Into<String>>(&mut self, name: S, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    /// Get a field value from the document.
    pub fn get_field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Check if the document has a field.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Remove a field from the document.
    pub fn remove_field(&mut self, name: &str) -> Option<FieldValue> {
        self.fields.remove(name)
    }

    /// Get all field names, sorted.
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.fields.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Get all field values.
    pub fn fields(&self) -> &HashMap<String, FieldValue> {
        &self.fields
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Create a builder for constructing documents.
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::new()
    }
}

impl SolrDocument for Document {
    fn unique_key(&self) -> Option<String> {
        self.get_field(Self::unique_key_field())
            .and_then(FieldValue::to_key_string)
    }

    fn from_document(document: Document) -> Result<Self> {
        Ok(document)
    }
}

/// A builder for constructing documents in a fluent manner.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    /// Create a new document builder.
    pub fn new() -> Self {
        DocumentBuilder {
            document: Document::new(),
        }
    }

    /// Add a text field to the document.
    pub fn add_text<S: Into<String>, T: Into<String>>(mut self, name: S, value: T) -> Self {
        self.document.add_field(name, FieldValue::Text(value.into()));
        self
    }

    /// Add an integer field to the document.
    pub fn add_integer<S: Into<String>>(mut self, name: S, value: i64) -> Self {
        self.document.add_field(name, FieldValue::Integer(value));
        self
    }

    /// Add a float field to the document.
    pub fn add_float<S: Into<String>>(mut self, name: S, value: f64) -> Self {
        self.document.add_field(name, FieldValue::Float(value));
        self
    }

    /// Add a boolean field to the document.
    pub fn add_boolean<S: Into<String>>(mut self, name: S, value: bool) -> Self {
        self.document.add_field(name, FieldValue::Boolean(value));
        self
    }

    /// Add a datetime field to the document.
    pub fn add_datetime<S: Into<String>>(
        mut self,
        name: S,
        value: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        self.document.add_field(name, FieldValue::DateTime(value));
        self
    }

    /// Add a field with a generic value.
    pub fn add_field<S: Into<String>>(mut self, name: S, value: FieldValue) -> Self {
        self.document.add_field(name, value);
        self
    }

    /// Build the final document.
    pub fn build(self) -> Document {
        self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let doc = Document::builder()
            .add_integer("id", 123)
            .add_text("name", "Solr in Action")
            .add_boolean("inStock", true)
            .build();

        assert_eq!(doc.len(), 3);
        assert_eq!(doc.field_names(), vec!["id", "inStock", "name"]);
        assert_eq!(doc.get_field("name").and_then(|v| v.as_text()), Some("Solr in Action"));
    }

    #[test]
    fn test_unique_key() {
        let doc = Document::builder().add_integer("id", 123).build();
        assert_eq!(Document::unique_key_field(), "id");
        assert_eq!(doc.unique_key(), Some("123".to_string()));

        let keyless = Document::builder().add_text("name", "x").build();
        assert_eq!(keyless.unique_key(), None);
    }

    #[test]
    fn test_remove_field() {
        let mut doc = Document::builder().add_text("a", "1").build();
        assert!(doc.has_field("a"));
        assert_eq!(doc.remove_field("a"), Some(FieldValue::Text("1".to_string())));
        assert!(doc.is_empty());
    }
}
