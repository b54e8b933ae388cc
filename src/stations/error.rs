use crate::stdmet::error::FeedError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StationLookupError {
    #[error("Station '{station}' not found in the station table")]
    NotFound { station: String },

    #[error("Malformed station table row for '{station}': {reason}")]
    MalformedRow { station: String, reason: String },

    #[error(transparent)]
    Feed(#[from] FeedError),
}
