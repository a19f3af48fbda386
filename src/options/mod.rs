//! Options shaping a search request.
//!
//! [`QueryOptions`] is a bag of independent settings. Each setting that is
//! present contributes its own parameters to the outgoing request; absent
//! settings contribute nothing.

pub mod facet;
pub mod highlight;
pub mod sort;

use crate::query::Query;

pub use self::facet::{FacetFieldQuery, FacetQuery, FacetSettings, FacetSort, FacetSubQuery};
pub use self::highlight::HighlightOptions;
pub use self::sort::{Order, OrderBy, SortOrder};

/// Options for a single search request.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// Maximum number of documents to return.
    pub rows: Option<usize>,
    /// Offset of the first returned document.
    pub start: Option<usize>,
    /// Result ordering.
    pub order_by: Option<OrderBy>,
    /// Fields to return for each document; empty means the server default.
    pub fields: Vec<String>,
    /// Filter queries restricting the result set without affecting scores.
    pub filter_queries: Vec<Box<dyn Query>>,
    /// Facets to compute.
    pub facet_queries: Vec<FacetQuery>,
    /// Settings shared by every facet field.
    pub facet_settings: FacetSettings,
    /// Highlighting settings.
    pub highlight: Option<HighlightOptions>,
}

impl QueryOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of documents to return.
    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Set the offset of the first returned document.
    pub fn start(mut self, start: usize) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the result ordering.
    pub fn order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = Some(order_by);
        self
    }

    /// Sort by the given fields, in order.
    pub fn sort_by(mut self, orders: Vec<SortOrder>) -> Self {
        self.order_by = Some(OrderBy::Fields(orders));
        self
    }

    /// Return documents in random order.
    pub fn random_order(mut self) -> Self {
        self.order_by = Some(OrderBy::Random);
        self
    }

    /// Set the fields to return.
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Add a filter query.
    pub fn filter(mut self, query: Box<dyn Query>) -> Self {
        self.filter_queries.push(query);
        self
    }

    /// Add a facet.
    pub fn facet(mut self, facet: FacetQuery) -> Self {
        self.facet_queries.push(facet);
        self
    }

    /// Set the settings shared by every facet field.
    pub fn facet_settings(mut self, settings: FacetSettings) -> Self {
        self.facet_settings = settings;
        self
    }

    /// Set the highlighting settings.
    pub fn highlight(mut self, highlight: HighlightOptions) -> Self {
        self.highlight = Some(highlight);
        self
    }

    /// Check if results are requested in random order.
    pub fn is_random_order(&self) -> bool {
        matches!(self.order_by, Some(OrderBy::Random))
    }
}
