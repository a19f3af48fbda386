//! Command line argument parsing for the solr-query CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::options::{FacetQuery, HighlightOptions, QueryOptions, SortOrder};
use crate::query::SolrQuery;

/// solr-query - run typed searches against a Solr-compatible server
#[derive(Parser, Debug, Clone)]
#[command(name = "solr-query")]
#[command(about = "Run searches against a Solr-compatible search server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SolrQueryArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Client configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Base URL of the core (overrides the configuration and SOLR_URL)
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SolrQueryArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search the server
    Search(SearchArgs),
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Query in Solr syntax
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Maximum number of results to return
    #[arg(short, long)]
    pub rows: Option<usize>,

    /// Offset of the first result
    #[arg(long)]
    pub start: Option<usize>,

    /// Sort clauses, e.g. "price desc,name asc"
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Return results in random order
    #[arg(long, conflicts_with = "sort")]
    pub random: bool,

    /// Fields to return (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub fields: Vec<String>,

    /// Filter query (repeatable)
    #[arg(long = "filter", value_name = "QUERY")]
    pub filters: Vec<String>,

    /// Field to facet on (repeatable)
    #[arg(long = "facet-field", value_name = "FIELD")]
    pub facet_fields: Vec<String>,

    /// Query to facet on (repeatable)
    #[arg(long = "facet-query", value_name = "QUERY")]
    pub facet_queries: Vec<String>,

    /// Fields to highlight (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub highlight: Vec<String>,

    /// Markup before a highlighted term
    #[arg(long, requires = "highlight")]
    pub hl_pre: Option<String>,

    /// Markup after a highlighted term
    #[arg(long, requires = "highlight")]
    pub hl_post: Option<String>,

    /// Print the request instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}

impl SearchArgs {
    /// Get the query.
    pub fn query(&self) -> SolrQuery {
        SolrQuery::new(self.query.as_str())
    }

    /// Build the query options described by the arguments.
    pub fn to_options(&self) -> Result<QueryOptions> {
        let mut options = QueryOptions::new();
        options.rows = self.rows;
        options.start = self.start;

        if self.random {
            options = options.random_order();
        } else if let Some(sort) = &self.sort {
            options = options.sort_by(SortOrder::parse_list(sort)?);
        }

        options.fields = self.fields.clone();
        for filter in &self.filters {
            options = options.filter(Box::new(SolrQuery::new(filter.as_str())));
        }
        for field in &self.facet_fields {
            options = options.facet(FacetQuery::field(field.as_str()));
        }
        for query in &self.facet_queries {
            options = options.facet(FacetQuery::query(SolrQuery::new(query.as_str())));
        }

        if !self.highlight.is_empty() {
            let mut highlight = HighlightOptions::new(self.highlight.iter().cloned());
            highlight.before_term = self.hl_pre.clone();
            highlight.after_term = self.hl_post.clone();
            options = options.highlight(highlight);
        }

        Ok(options)
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
