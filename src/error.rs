//! Error types for the solr-query library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`SolrError`] enum. Errors raised by a connection or a result parser are
//! passed through the query executer untouched.
//!
//! # Examples
//!
//! ```
//! use solr_query::error::{Result, SolrError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SolrError::parse("unexpected end of response"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for solr-query operations.
#[derive(Error, Debug)]
pub enum SolrError {
    /// Transport failures (connect, timeout, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success HTTP status.
    #[error("HTTP status {code}: {body}")]
    Status { code: u16, body: String },

    /// The server answered 2xx but reported a failure in its response header.
    #[error("Server error (status {status}): {message}")]
    Server { status: i32, message: String },

    /// Malformed or unexpected response content.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Low-level XML decoding errors
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// A decoded document could not be mapped into the target type.
    #[error("Document error: {0}")]
    Document(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid query construction
    #[error("Query error: {0}")]
    Query(String),

    /// I/O errors (config files, terminal output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with SolrError.
pub type Result<T> = std::result::Result<T, SolrError>;

impl SolrError {
    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        SolrError::Parse(msg.into())
    }

    /// Create a new document mapping error.
    pub fn document<S: Into<String>>(msg: S) -> Self {
        SolrError::Document(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SolrError::Config(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        SolrError::Query(msg.into())
    }

    /// Create a new HTTP status error.
    pub fn status<S: Into<String>>(code: u16, body: S) -> Self {
        SolrError::Status {
            code,
            body: body.into(),
        }
    }

    /// Create a new server-reported error.
    pub fn server<S: Into<String>>(status: i32, message: S) -> Self {
        SolrError::Server {
            status,
            message: message.into(),
        }
    }
}
