//! Error types for nexsci-fetch.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("invalid proxy URL {url}: {message}")]
    Proxy { url: String, message: String },

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("network error: {0}")]
    Network(String),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        match (e.url(), e.status()) {
            (Some(url), Some(status)) => FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            },
            _ if e.is_builder() => FetchError::InvalidUrl(e.to_string()),
            _ => FetchError::Network(e.to_string()),
        }
    }
}
