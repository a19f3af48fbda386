//! Documents returned by the search server.
//!
//! Decoded documents are field maps ([`Document`]); application types opt in
//! to typed results by implementing [`SolrDocument`].

#[allow(clippy::module_inception)]
pub mod document;
pub mod field_value;

// Re-export commonly used types
pub use self::document::{Document, DocumentBuilder, SolrDocument};
pub use self::field_value::FieldValue;
