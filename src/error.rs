use crate::stations::error::StationLookupError;
use crate::stdmet::error::{FeedError, RecordError};
use crate::types::dataset::RecordLayout;
use chrono::{DateTime, Utc};
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NdbcError {
    #[error(transparent)]
    StationLookup(#[from] StationLookupError),

    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error("Malformed {layout} record for station '{station}' at line {line_number}")]
    MalformedRecord {
        station: String,
        layout: RecordLayout,
        line_number: usize,
        #[source]
        source: RecordError,
    },

    #[error("Start time {start} is not covered by any dataset (now is {now})")]
    InvalidRange {
        start: DateTime<Utc>,
        now: DateTime<Utc>,
    },

    #[error("Failed to parse the given date or time")]
    DateParsingError,

    #[error("Failed to build DataFrame")]
    DataFrame(#[from] PolarsError),
}
