//! Error type for the library.
//!
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EsStatsError>;

#[derive(Debug, Error)]
pub enum EsStatsError {
    #[error("Node name not provided")]
    MissingArgument,

    #[error("Node with name {0} not found")]
    NodeNotFound(String),

    #[error("Key '{segment}' of '{path}' not found")]
    KeyNotFound { path: String, segment: String },

    #[error("Host lookup error: {0}")]
    HostLookup(#[source] std::io::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Non success response: {url} = {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("serde_json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No hosts configured")]
    NoHosts,
}

impl EsStatsError {
    pub(crate) fn key_not_found(path: &str, segment: &str) -> Self {
        Self::KeyNotFound {
            path: path.to_string(),
            segment: segment.to_string(),
        }
    }
}
