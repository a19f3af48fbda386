//! Blocking HTTP connection backed by `reqwest`.

use std::fmt;

use log::{debug, warn};
use reqwest::blocking::Client;

use crate::config::ClientConfig;
use crate::connection::Connection;
use crate::error::{Result, SolrError};
use crate::params::Parameters;

/// Connection issuing blocking HTTP requests to a configured base URL.
pub struct HttpConnection {
    /// HTTP client.
    client: Client,
    /// Base URL without a trailing slash.
    base_url: String,
    /// Basic-auth credentials.
    credentials: Option<(String, Option<String>)>,
}

impl HttpConnection {
    /// Create a new connection from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(HttpConnection {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials: config
                .username
                .clone()
                .map(|user| (user, config.password.clone())),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL of `path`.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl fmt::Debug for HttpConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpConnection")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

impl Connection for HttpConnection {
    fn get(&self, path: &str, parameters: &Parameters) -> Result<String> {
        let url = self.url_for(path);
        debug!("GET {url}?{parameters}");

        let mut request = self.client.get(&url).query(parameters.pairs());
        if let Some((user, password)) = &self.credentials {
            request = request.basic_auth(user, password.as_ref());
        }

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            warn!("GET {url} returned {status}");
            let body = response.text().unwrap_or_default();
            return Err(SolrError::status(status.as_u16(), body));
        }

        Ok(response.text()?)
    }
}
