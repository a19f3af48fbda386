//! Output formatting for CLI commands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SolrQueryArgs};
use crate::document::{Document, SolrDocument};
use crate::error::Result;
use crate::params::Parameters;
use crate::results::{FacetValue, QueryResults};

/// Result structure for search operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchOutput {
    pub num_found: u64,
    pub start: u64,
    pub query_time_ms: u64,
    pub documents: Vec<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub facet_fields: BTreeMap<String, Vec<FacetValue>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub facet_queries: BTreeMap<String, u64>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub highlights: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl From<QueryResults<Document>> for SearchOutput {
    fn from(results: QueryResults<Document>) -> Self {
        let documents = results
            .documents
            .iter()
            .map(|doc| {
                doc.fields()
                    .iter()
                    .map(|(name, value)| (name.clone(), value.to_string()))
                    .collect()
            })
            .collect();

        SearchOutput {
            num_found: results.num_found,
            start: results.start,
            query_time_ms: results.header.query_time,
            documents,
            facet_fields: results.facet_fields.into_iter().collect(),
            facet_queries: results.facet_queries.into_iter().collect(),
            highlights: results
                .highlights
                .into_iter()
                .map(|(key, fields)| (key, fields.into_iter().collect()))
                .collect(),
        }
    }
}

impl SearchOutput {
    /// Highlight snippets of a rendered document, looked up by its unique key.
    pub fn highlights_for(
        &self,
        document: &BTreeMap<String, String>,
    ) -> Option<&BTreeMap<String, Vec<String>>> {
        document
            .get(Document::unique_key_field())
            .and_then(|key| self.highlights.get(key))
    }
}

/// Result structure for a request that was not sent.
#[derive(Debug, Serialize, Deserialize)]
pub struct DryRunOutput {
    pub url: String,
    pub parameters: Vec<(String, String)>,
}

impl DryRunOutput {
    pub fn new<S: Into<String>>(url: S, parameters: &Parameters) -> Self {
        DryRunOutput {
            url: url.into(),
            parameters: parameters.pairs().to_vec(),
        }
    }

    /// Full request URL including the encoded query string.
    pub fn request_url(&self) -> String {
        let query: Parameters = self.parameters.iter().cloned().collect();
        format!("{}?{}", self.url, query.to_query_string())
    }
}

/// Print search results in the selected format.
pub fn output_search(result: &SearchOutput, args: &SolrQueryArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            output_search_human(result, args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Print an unsent request in the selected format.
pub fn output_dry_run(result: &DryRunOutput, args: &SolrQueryArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                for (key, value) in &result.parameters {
                    println!("{key} = {value}");
                }
                println!();
            }
            println!("{}", result.request_url());
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SolrQueryArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

/// Output search results in human-readable format.
fn output_search_human(result: &SearchOutput, args: &SolrQueryArgs) {
    if args.verbosity() > 0 {
        println!(
            "Found {} documents, showing {} from offset {} ({}ms)",
            result.num_found,
            result.documents.len(),
            result.start,
            result.query_time_ms
        );
        println!();
    }

    for (i, doc) in result.documents.iter().enumerate() {
        println!("{}.", i + 1);
        for (name, value) in doc {
            println!("   {name}: {value}");
        }

        if let Some(highlights) = result.highlights_for(doc) {
            for (field, snippets) in highlights {
                for snippet in snippets {
                    println!("   [{field}] {snippet}");
                }
            }
        }
        println!();
    }

    if !result.facet_fields.is_empty() || !result.facet_queries.is_empty() {
        println!("Facets:");
        for (field, values) in &result.facet_fields {
            println!("  {field}:");
            for value in values {
                println!("    {}: {}", value.value, value.count);
            }
        }
        for (query, count) in &result.facet_queries {
            println!("  {query}: {count}");
        }
    }
}
