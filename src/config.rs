//! Client configuration.
//!
//! A [`ClientConfig`] can be built in code, loaded from a JSON file and then
//! adjusted from the environment:
//!
//! ```no_run
//! use solr_query::config::ClientConfig;
//!
//! let config = ClientConfig::from_file("solr.json")?
//!     .with_env_overrides()?;
//! config.validate()?;
//! # Ok::<(), solr_query::error::SolrError>(())
//! ```

use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SolrError};

/// Environment variable overriding [`ClientConfig::base_url`].
pub const ENV_URL: &str = "SOLR_URL";
/// Environment variable overriding [`ClientConfig::default_rows`].
pub const ENV_DEFAULT_ROWS: &str = "SOLR_DEFAULT_ROWS";
/// Environment variable overriding [`ClientConfig::timeout_secs`].
pub const ENV_TIMEOUT_SECS: &str = "SOLR_TIMEOUT_SECS";

/// Configuration for connecting to a search server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the core, e.g. `http://localhost:8983/solr/products`.
    pub base_url: String,
    /// Path of the search handler, appended to the base URL.
    pub select_path: String,
    /// Rows requested when the options do not say.
    pub default_rows: usize,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Basic-auth user name.
    pub username: Option<String>,
    /// Basic-auth password.
    pub password: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: "http://localhost:8983/solr".to_string(),
            select_path: "/select".to_string(),
            default_rows: 10,
            timeout_secs: 30,
            user_agent: format!("solr-query/{}", crate::VERSION),
            username: None,
            password: None,
        }
    }
}

impl ClientConfig {
    /// Create a configuration for the given base URL.
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        ClientConfig {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Load a configuration from a JSON file. Missing keys take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Apply `SOLR_URL`, `SOLR_DEFAULT_ROWS` and `SOLR_TIMEOUT_SECS`.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|key| env::var(key).ok())
    }

    fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_URL) {
            self.base_url = url;
        }
        if let Some(rows) = lookup(ENV_DEFAULT_ROWS) {
            self.default_rows = rows.parse().map_err(|e| {
                SolrError::config(format!("{ENV_DEFAULT_ROWS}={rows:?} is not a number: {e}"))
            })?;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = secs.parse().map_err(|e| {
                SolrError::config(format!("{ENV_TIMEOUT_SECS}={secs:?} is not a number: {e}"))
            })?;
        }
        Ok(self)
    }

    /// Set the search handler path.
    pub fn select_path<S: Into<String>>(mut self, path: S) -> Self {
        self.select_path = path.into();
        self
    }

    /// Set the default number of rows.
    pub fn default_rows(mut self, rows: usize) -> Self {
        self.default_rows = rows;
        self
    }

    /// Set the request timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set basic-auth credentials.
    pub fn basic_auth<U: Into<String>, P: Into<String>>(mut self, username: U, password: P) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Get the request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check the configuration for values that cannot work.
    pub fn validate(&self) -> Result<()> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(SolrError::config("base_url must not be empty"));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(SolrError::config(format!(
                "base_url must start with http:// or https://, got {url:?}"
            )));
        }
        if !self.select_path.starts_with('/') {
            return Err(SolrError::config(format!(
                "select_path must start with '/', got {:?}",
                self.select_path
            )));
        }
        if self.timeout_secs == 0 {
            return Err(SolrError::config("timeout_secs must be greater than zero"));
        }
        if self.password.is_some() && self.username.is_none() {
            return Err(SolrError::config("password given without username"));
        }
        Ok(())
    }
}
