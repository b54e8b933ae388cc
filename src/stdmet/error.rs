use crate::types::channel::Channel;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("No file published at {url}")]
    NotFound { url: String },

    #[error("HTTP request failed for {url} with status {status}")]
    Transport {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    // Covers body reads and gzip decompression
    #[error("Download or decompression failed for {0}")]
    DownloadIo(String, #[source] std::io::Error),
}

/// Why a single data line could not be turned into an observation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecordError {
    #[error("expected at least {expected} fields, found {found}")]
    TooFewFields { expected: usize, found: usize },

    #[error("unparseable timestamp '{0}'")]
    InvalidTimestamp(String),

    #[error("unparseable {channel} value '{token}'")]
    InvalidNumber { channel: Channel, token: String },
}
