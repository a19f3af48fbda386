//! Query executer: turns a query and its options into request parameters,
//! sends them through a [`Connection`] and decodes the body with a
//! [`ResultParser`].
//!
//! The executer never touches the network or the response format itself.
//! Errors from either collaborator are returned unchanged.
//!
//! # Random ordering
//!
//! The server has no random sort, so [`OrderBy::Random`] is realized in two
//! round trips:
//!
//! 1. fetch the unique key of every matching document (`fl=<key>`,
//!    `rows=2147483647`);
//! 2. shuffle those keys on the client, keep the first `rows` of them and
//!    fetch them with `q=(key:a OR key:b ...)`.
//!
//! The first response is decoded as plain [`Document`]s, so a typed document
//! only ever has to be built from a full response.
//!
//! The documents of the second response are put back into the shuffled order.

use std::collections::HashMap;

use log::debug;

use crate::connection::Connection;
use crate::document::{Document, FieldValue, SolrDocument};
use crate::error::Result;
use crate::options::QueryOptions;
use crate::params::{FIELD_LIST, FILTER_QUERY, Parameters, QUERY, ROWS, SORT, START};
use crate::query::{Query, QueryInList};
use crate::randomizer::{ListRandomizer, ThreadRngRandomizer};
use crate::results::{QueryResults, ResultParser, XmlResultParser};

/// Path of the standard search handler.
pub const SELECT_PATH: &str = "/select";

/// Rows requested when neither the options nor the executer say otherwise.
pub const DEFAULT_ROWS: usize = 10;

/// Rows requested when every match is wanted.
pub const UNLIMITED_ROWS: i32 = i32::MAX;

/// Executes queries against the search server.
pub struct QueryExecuter<D> {
    connection: Box<dyn Connection>,
    parser: Box<dyn ResultParser<D>>,
    key_parser: Box<dyn ResultParser<Document>>,
    randomizer: Box<dyn ListRandomizer<String>>,
    select_path: String,
    default_rows: usize,
}

impl<D: SolrDocument + 'static> QueryExecuter<D> {
    /// Create an executer using the XML parser and the thread-RNG randomizer.
    pub fn new<C: Connection + 'static>(connection: C) -> Self {
        QueryExecuter {
            connection: Box::new(connection),
            parser: Box::new(XmlResultParser::<D>::new()),
            key_parser: Box::new(XmlResultParser::<Document>::new()),
            randomizer: Box::new(ThreadRngRandomizer),
            select_path: SELECT_PATH.to_string(),
            default_rows: DEFAULT_ROWS,
        }
    }
}

impl<D: SolrDocument> QueryExecuter<D> {
    /// Replace the result parser.
    pub fn with_parser<P: ResultParser<D> + 'static>(mut self, parser: P) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// Replace the parser of the key-only first pass of random ordering.
    pub fn with_key_parser<P: ResultParser<Document> + 'static>(mut self, parser: P) -> Self {
        self.key_parser = Box::new(parser);
        self
    }

    /// Replace the randomizer used to shuffle unique keys.
    pub fn with_randomizer<R: ListRandomizer<String> + 'static>(mut self, randomizer: R) -> Self {
        self.randomizer = Box::new(randomizer);
        self
    }

    /// Set the rows requested when the options do not say.
    pub fn with_default_rows(mut self, rows: usize) -> Self {
        self.default_rows = rows;
        self
    }

    /// Set the path of the search handler.
    pub fn with_select_path<S: Into<String>>(mut self, path: S) -> Self {
        self.select_path = path.into();
        self
    }

    /// Get the rows requested when the options do not say.
    pub fn default_rows(&self) -> usize {
        self.default_rows
    }

    /// Get the path of the search handler.
    pub fn select_path(&self) -> &str {
        &self.select_path
    }

    /// Build the parameters of a single request for `query` and `options`.
    ///
    /// Random ordering contributes no `sort`; [`QueryExecuter::execute`]
    /// handles it with its own requests.
    pub fn build_parameters(&self, query: &dyn Query, options: &QueryOptions) -> Parameters {
        let mut params = Parameters::new();
        params.set(QUERY, query.to_query_string());
        params.set(
            ROWS,
            options.rows.unwrap_or(self.default_rows).to_string(),
        );
        if let Some(start) = options.start {
            params.set(START, start.to_string());
        }
        if let Some(sort) = options.order_by.as_ref().and_then(|o| o.to_sort_param()) {
            params.set(SORT, sort);
        }
        self.apply_options(&mut params, options);
        params
    }

    /// Execute `query` and decode the response.
    pub fn execute(&self, query: &dyn Query, options: &QueryOptions) -> Result<QueryResults<D>> {
        if options.is_random_order() {
            return self.execute_random(query, options);
        }
        let params = self.build_parameters(query, options);
        self.send(&params)
    }

    /// Options that do not depend on the ordering strategy.
    fn apply_options(&self, params: &mut Parameters, options: &QueryOptions) {
        if !options.fields.is_empty() {
            params.set(FIELD_LIST, options.fields.join(","));
        }
        for filter in &options.filter_queries {
            params.append(FILTER_QUERY, filter.to_query_string());
        }
        for facet in &options.facet_queries {
            facet.apply(params);
        }
        if !options.facet_queries.is_empty() {
            options.facet_settings.apply(params);
        }
        if let Some(highlight) = &options.highlight {
            highlight.apply(params);
        }
    }

    fn send(&self, params: &Parameters) -> Result<QueryResults<D>> {
        let body = self.connection.get(&self.select_path, params)?;
        self.parser.parse(&body)
    }

    fn execute_random(&self, query: &dyn Query, options: &QueryOptions) -> Result<QueryResults<D>> {
        let key_field = D::unique_key_field();

        let mut key_params = Parameters::new();
        key_params.set(QUERY, query.to_query_string());
        key_params.set(ROWS, UNLIMITED_ROWS.to_string());
        key_params.set(FIELD_LIST, key_field);
        for filter in &options.filter_queries {
            key_params.append(FILTER_QUERY, filter.to_query_string());
        }

        let body = self.connection.get(&self.select_path, &key_params)?;
        let candidates = self.key_parser.parse(&body)?;
        let total = candidates.num_found;
        let mut keys: Vec<String> = candidates
            .documents
            .iter()
            .filter_map(|d| d.get_field(key_field))
            .filter_map(FieldValue::to_key_string)
            .collect();

        self.randomizer.randomize(&mut keys);
        let rows = options.rows.unwrap_or(self.default_rows);
        debug!(
            "random ordering: {} candidates, fetching {}",
            keys.len(),
            keys.len().min(rows)
        );
        keys.truncate(rows);

        if keys.is_empty() {
            return Ok(QueryResults {
                num_found: total,
                header: candidates.header,
                ..Default::default()
            });
        }

        let narrowed = QueryInList::new(key_field, keys.iter().cloned());
        let mut params = Parameters::new();
        params.set(QUERY, narrowed.to_query_string());
        params.set(ROWS, keys.len().to_string());
        self.apply_options(&mut params, options);

        let mut results = self.send(&params)?;

        // Documents missing from the key list (no key returned) go last.
        let position: HashMap<&str, usize> = keys
            .iter()
            .enumerate()
            .map(|(i, k)| (k.as_str(), i))
            .collect();
        results.documents.sort_by_cached_key(|d| {
            d.unique_key()
                .and_then(|k| position.get(k.as_str()).copied())
                .unwrap_or(usize::MAX)
        });
        results.num_found = total;

        Ok(results)
    }
}
