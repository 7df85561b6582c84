//! Error types for qnabot-pages.
//!
//! This module defines the error type returned by config loading, page
//! fetching, and content queries.

use std::path::PathBuf;

/// Error type for fetch-and-extract operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not a JSON object of topic -> URL array.
    #[error("invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// The requested topic has no entry in the configuration.
    #[error("topic not found in config: {0}")]
    MissingTopic(String),

    /// A configured page URL could not be parsed.
    #[error("invalid page URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The HTTP request failed at the transport level.
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The content selector is not valid CSS.
    #[error("invalid content selector {selector:?}: {reason}")]
    Selector { selector: String, reason: String },

    /// Writing diagnostics or page output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type alias for fetch-and-extract operations.
pub type Result<T> = std::result::Result<T, Error>;
