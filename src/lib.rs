//! # solr-query
//!
//! A typed query client for Solr-compatible search servers.
//!
//! ## Features
//!
//! - Typed query builders with escaping
//! - Sorting, field selection, paging and filter queries
//! - Field and query facets, highlighting
//! - Client-side random ordering
//! - XML response decoding into typed documents
//! - Pluggable connection, parser and randomizer

pub mod cli;
pub mod client;
pub mod config;
pub mod connection;
pub mod document;
pub mod error;
pub mod executer;
pub mod options;
pub mod params;
pub mod query;
pub mod randomizer;
pub mod results;

pub mod prelude {
    pub use crate::client::SolrClient;
    pub use crate::config::ClientConfig;
    pub use crate::connection::{Connection, HttpConnection};
    pub use crate::document::{Document, FieldValue, SolrDocument};
    pub use crate::error::{Result, SolrError};
    pub use crate::executer::QueryExecuter;
    pub use crate::options::{
        FacetFieldQuery, FacetQuery, FacetSettings, FacetSort, HighlightOptions, Order, OrderBy,
        QueryOptions, SortOrder,
    };
    pub use crate::params::Parameters;
    pub use crate::query::{
        MultipleCriteriaQuery, Query, QueryByField, QueryByRange, QueryInList, SolrQuery,
    };
    pub use crate::randomizer::{ListRandomizer, ThreadRngRandomizer};
    pub use crate::results::{QueryResults, ResultParser, XmlResultParser};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
