//! Ready-to-use client wiring the HTTP connection, the XML parser and the
//! thread-RNG randomizer from a [`ClientConfig`].

use crate::config::ClientConfig;
use crate::connection::HttpConnection;
use crate::document::{Document, SolrDocument};
use crate::error::Result;
use crate::executer::QueryExecuter;
use crate::options::QueryOptions;
use crate::params::Parameters;
use crate::query::Query;
use crate::results::QueryResults;

/// A search client for documents of type `D`.
///
/// ```no_run
/// use solr_query::prelude::*;
///
/// let client: SolrClient = SolrClient::new(&ClientConfig::new("http://localhost:8983/solr/books"))?;
/// let results = client.query(
///     &QueryByField::new("author", "Ursula Le Guin"),
///     &QueryOptions::new().rows(5).sort_by(vec![SortOrder::new("title")]),
/// )?;
/// for doc in &results {
///     println!("{:?}", doc.get_field("title"));
/// }
/// # Ok::<(), SolrError>(())
/// ```
pub struct SolrClient<D = Document> {
    executer: QueryExecuter<D>,
}

impl<D: SolrDocument + 'static> SolrClient<D> {
    /// Create a client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let connection = HttpConnection::new(config)?;
        let executer = QueryExecuter::new(connection)
            .with_select_path(config.select_path.clone())
            .with_default_rows(config.default_rows);
        Ok(SolrClient { executer })
    }

    /// Wrap an already configured executer.
    pub fn from_executer(executer: QueryExecuter<D>) -> Self {
        SolrClient { executer }
    }

    /// Run a query.
    pub fn query(&self, query: &dyn Query, options: &QueryOptions) -> Result<QueryResults<D>> {
        self.executer.execute(query, options)
    }

    /// Run a query with default options.
    pub fn query_all(&self, query: &dyn Query) -> Result<QueryResults<D>> {
        self.executer.execute(query, &QueryOptions::default())
    }

    /// Show the parameters a query would be sent with.
    pub fn parameters(&self, query: &dyn Query, options: &QueryOptions) -> Parameters {
        self.executer.build_parameters(query, options)
    }

    /// Get the underlying executer.
    pub fn executer(&self) -> &QueryExecuter<D> {
        &self.executer
    }
}
