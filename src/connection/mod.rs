//! Transport to the search server.

pub mod http;

use crate::error::Result;
use crate::params::Parameters;

pub use self::http::HttpConnection;

/// Trait for issuing GET requests against the search server.
pub trait Connection: Send + Sync {
    /// Send `GET {path}?{parameters}` and return the response body.
    fn get(&self, path: &str, parameters: &Parameters) -> Result<String>;
}

impl<C: Connection + ?Sized> Connection for Box<C> {
    fn get(&self, path: &str, parameters: &Parameters) -> Result<String> {
        (**self).get(path, parameters)
    }
}

impl<C: Connection + ?Sized> Connection for std::sync::Arc<C> {
    fn get(&self, path: &str, parameters: &Parameters) -> Result<String> {
        (**self).get(path, parameters)
    }
}
