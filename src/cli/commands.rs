//! Command implementations for the solr-query CLI.

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::client::SolrClient;
use crate::config::ClientConfig;
use crate::document::Document;
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: SolrQueryArgs) -> Result<()> {
    let config = load_config(&args)?;
    match &args.command {
        Command::Search(search_args) => search(search_args, &config, &args),
    }
}

/// Resolve the client configuration: file or defaults, then environment,
/// then `--url`.
pub fn load_config(args: &SolrQueryArgs) -> Result<ClientConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            ClientConfig::from_file(path)?
        }
        None => ClientConfig::default(),
    }
    .with_env_overrides()?;

    if let Some(url) = &args.url {
        config.base_url = url.clone();
    }
    config.validate()?;
    Ok(config)
}

/// Run a search, or print its request with `--dry-run`.
fn search(args: &SearchArgs, config: &ClientConfig, cli_args: &SolrQueryArgs) -> Result<()> {
    let query = args.query();
    let options = args.to_options()?;
    let client: SolrClient<Document> = SolrClient::new(config)?;

    if args.dry_run {
        let url = format!(
            "{}{}",
            config.base_url.trim_end_matches('/'),
            client.executer().select_path()
        );
        let parameters = client.parameters(&query, &options);
        return output_dry_run(&DryRunOutput::new(url, &parameters), cli_args);
    }

    info!("Searching {} for {}", config.base_url, args.query);
    let results = client.query(&query, &options)?;
    info!(
        "{} of {} documents returned",
        results.len(),
        results.num_found
    );

    output_search(&SearchOutput::from(results), cli_args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_url_flag_overrides_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"base_url": "http://from-file:8983/solr/a", "default_rows": 7}}"#
        )
        .unwrap();

        let args = SolrQueryArgs::try_parse_from([
            "solr-query",
            "--config",
            file.path().to_str().unwrap(),
            "--url",
            "http://from-flag:8983/solr/b",
            "search",
            "*:*",
        ])
        .unwrap();

        let config = load_config(&args).unwrap();
        assert_eq!(config.base_url, "http://from-flag:8983/solr/b");
        assert_eq!(config.default_rows, 7);
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let args =
            SolrQueryArgs::try_parse_from(["solr-query", "--url", "nowhere", "search", "*:*"])
                .unwrap();
        assert!(load_config(&args).is_err());
    }

    #[test]
    fn test_dry_run_sends_nothing() {
        // Port 9 (discard) is never queried on a dry run.
        let args = SolrQueryArgs::try_parse_from([
            "solr-query",
            "--url",
            "http://127.0.0.1:9/solr/books",
            "search",
            "title:rust",
            "--dry-run",
        ])
        .unwrap();
        assert!(execute_command(args).is_ok());
    }
}
