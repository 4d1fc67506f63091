use nexsci_fetch::FetchError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every variant is terminal for the current query.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown parameter group {given:?}, expected one of: {valid}")]
    InvalidGroup { given: String, valid: String },

    #[error("schema documentation unavailable: {0}")]
    SchemaFetch(String),

    #[error("failed to fetch archive table: {0}")]
    Fetch(String),

    #[error("no row matches host {hostname:?} with planet letter {letter:?}")]
    NoMatch { hostname: String, letter: String },

    #[error("required column {0:?} is missing from the table")]
    MissingColumn(String),

    #[error("cache file {path}: {source}")]
    Cache {
        path: PathBuf,
        #[source]
        source: FetchError,
    },

    #[error("download attempt unsuccessful")]
    Download(#[source] Box<Error>),
}

impl Error {
    pub(crate) fn schema(e: impl std::fmt::Display) -> Self {
        Error::SchemaFetch(e.to_string())
    }

    pub(crate) fn fetch(e: impl std::fmt::Display) -> Self {
        Error::Fetch(e.to_string())
    }
}
