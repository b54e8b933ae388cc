mod error;
mod ndbc_station;
mod stations;
mod stdmet;
mod types;

#[cfg(test)]
mod test_support;

pub use error::NdbcError;
pub use ndbc_station::BuoyStation;

pub use types::channel::{Channel, CHANNEL_COUNT};
pub use types::dataset::{DatasetKind, HeaderEra, RecordLayout, MODERN_ERA_START};
pub use types::observation::Observation;
pub use types::station::*;
pub use types::time_series::TimeSeries;

pub use types::traits::any_datetime::AnyDateTime;
pub use types::traits::types::{Month, Period, Year};

pub use stdmet::accumulator::{ArchiveCursor, Continuation, LineError, TimeSeriesAccumulator};
pub use stdmet::fetcher::{FeedFetcher, HttpFeedFetcher, DEFAULT_BASE_URL};
pub use stdmet::record_parser::{data_lines, parse_record};
pub use stdmet::sentinel::{sentinel_for, Sentinel};
pub use stdmet::source::{select_dataset, REALTIME_WINDOW_DAYS};

pub use stations::error::StationLookupError;
pub use stations::station_table::lookup_station;
pub use stdmet::error::{FeedError, RecordError};
