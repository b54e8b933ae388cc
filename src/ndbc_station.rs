//! This module provides the main entry point: a [`BuoyStation`] ties a station's
//! metadata to the standard meteorological time series retrieved for it.

use crate::error::NdbcError;
use crate::stations::station_table::lookup_station;
use crate::stdmet::accumulator::{ArchiveCursor, Continuation, LineError, TimeSeriesAccumulator};
use crate::stdmet::fetcher::{FeedFetcher, HttpFeedFetcher};
use crate::stdmet::source::select_dataset;
use crate::types::dataset::{DatasetKind, RecordLayout};
use crate::types::station::Station;
use crate::types::time_series::TimeSeries;
use crate::types::traits::any_datetime::AnyDateTime;
use bon::bon;
use chrono::{DateTime, Datelike, Utc};
use log::{debug, info, warn};
use polars::prelude::DataFrame;

/// One NDBC station and the observations last retrieved for it.
///
/// Metadata is looked up once, when the station is built, and never changes.
/// The time series is rebuilt from scratch by every call to
/// [`BuoyStation::retrieve`]: a second retrieval overwrites the first, it
/// never appends to it.
///
/// All I/O is blocking and sequential. A `BuoyStation` is not meant to be
/// shared between threads while a retrieval is running.
///
/// # Examples
///
/// ```no_run
/// use ndbc::{BuoyStation, NdbcError};
///
/// # fn main() -> Result<(), NdbcError> {
/// let mut buoy = BuoyStation::open("41010")?;
/// let series = buoy.retrieve("2010-01-15", "2010-03-01")?;
/// println!("{} rows, first at {:?}", series.len(), series.first_time());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct BuoyStation<F: FeedFetcher = HttpFeedFetcher> {
    fetcher: F,
    station: Station,
    series: TimeSeries,
    dataset: Option<DatasetKind>,
}

#[bon]
impl<F: FeedFetcher> BuoyStation<F> {
    /// Looks up station `id` and, when both `start` and `end` are given,
    /// retrieves that range right away.
    ///
    /// Station ids are matched case-insensitively.
    ///
    /// # Errors
    ///
    /// * [`NdbcError::StationLookup`] if the station table cannot be fetched,
    ///   does not list `id`, or lists it with an unreadable row.
    /// * Any error of [`BuoyStation::retrieve`] when a range is given.
    #[builder]
    pub fn new(
        fetcher: F,
        #[builder(into)] id: String,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Self, NdbcError> {
        let id = id.trim().to_lowercase();
        let station = lookup_station(&fetcher, &id)?;
        let mut buoy = Self {
            fetcher,
            station,
            series: TimeSeries::default(),
            dataset: None,
        };
        match (start, end) {
            (Some(start), Some(end)) => {
                buoy.retrieve(start, end)?;
            }
            (None, None) => {}
            _ => warn!("Only one end of the time range given for {}, not retrieving", id),
        }
        Ok(buoy)
    }
}

impl BuoyStation<HttpFeedFetcher> {
    /// Looks up `id` using an [`HttpFeedFetcher`] with default settings.
    pub fn open(id: &str) -> Result<Self, NdbcError> {
        Self::builder()
            .fetcher(HttpFeedFetcher::standard()?)
            .id(id)
            .build()
    }
}

impl<F: FeedFetcher> BuoyStation<F> {
    pub fn id(&self) -> &str {
        &self.station.id
    }

    pub fn station(&self) -> &Station {
        &self.station
    }

    /// Observations from the last successful retrieval; empty before the
    /// first one and after a failed one.
    pub fn series(&self) -> &TimeSeries {
        &self.series
    }

    /// Dataset the current series was read from.
    pub fn dataset(&self) -> Option<DatasetKind> {
        self.dataset
    }

    /// The current series as a Polars `DataFrame`, see [`TimeSeries::to_dataframe`].
    pub fn to_dataframe(&self) -> Result<DataFrame, NdbcError> {
        Ok(self.series.to_dataframe()?)
    }

    /// Drops any retrieved observations.
    pub fn reset(&mut self) {
        self.series.clear();
        self.dataset = None;
    }

    /// Retrieves observations from `start` to `end`, relative to the current
    /// time. See [`BuoyStation::retrieve_as_of`].
    pub fn retrieve(
        &mut self,
        start: impl AnyDateTime,
        end: impl AnyDateTime,
    ) -> Result<&TimeSeries, NdbcError> {
        self.retrieve_as_of(start, end, Utc::now())
    }

    /// Retrieves observations from `start` to `end` as if the current time
    /// were `now`, replacing whatever the station held before.
    ///
    /// The dataset is chosen by [`crate::select_dataset`]:
    ///
    /// * **Realtime**: the whole rolling window is returned regardless of
    ///   `end`, oldest first.
    /// * **Historical**: yearly files from `start`'s year on, until one runs
    ///   past `end`.
    /// * **Recent**: monthly files from `start`'s month on, until one runs past
    ///   `end` or December has been read.
    ///
    /// Archive rows outside `[start, end]` are dropped.
    ///
    /// # Errors
    ///
    /// * [`NdbcError::DateParsingError`] if `start` or `end` cannot be resolved.
    /// * [`NdbcError::InvalidRange`] if `start` lies after `now`; nothing is fetched.
    /// * [`NdbcError::Feed`] if any file cannot be fetched.
    /// * [`NdbcError::MalformedRecord`] on the first line that cannot be parsed.
    ///
    /// On error the series is left empty; no partial result is kept.
    pub fn retrieve_as_of(
        &mut self,
        start: impl AnyDateTime,
        end: impl AnyDateTime,
        now: DateTime<Utc>,
    ) -> Result<&TimeSeries, NdbcError> {
        let start = start
            .get_datetime_range()
            .ok_or(NdbcError::DateParsingError)?
            .start;
        let end = end
            .get_datetime_range()
            .ok_or(NdbcError::DateParsingError)?
            .end;

        if !self.series.is_empty() {
            debug!("Discarding {} rows held for {}", self.series.len(), self.station.id);
        }
        self.reset();

        let kind = select_dataset(start, end, now)?;
        info!(
            "Retrieving {} data for station {} from {} to {}",
            kind, self.station.id, start, end
        );

        let mut accumulator = TimeSeriesAccumulator::new(start, end);
        match kind {
            DatasetKind::Realtime => {
                let lines = self.fetcher.fetch_realtime_file(&self.station.id)?;
                self.ingest(&mut accumulator, RecordLayout::Realtime, &lines)?;
            }
            DatasetKind::Historical | DatasetKind::Recent => {
                let mut cursor = ArchiveCursor::starting_at(kind, start);
                loop {
                    let lines = self.fetcher.fetch_month_file(
                        &self.station.id,
                        kind,
                        cursor.year,
                        cursor.month,
                    )?;
                    if self.ingest(&mut accumulator, cursor.layout(), &lines)? == Continuation::Done {
                        break;
                    }
                    if !cursor.advance(now.year()) {
                        debug!("No {} file after {}-{:02}", kind, cursor.year, cursor.month);
                        break;
                    }
                }
            }
        }

        self.series = accumulator.finish();
        self.dataset = Some(kind);
        info!("Retrieved {} rows for station {}", self.series.len(), self.station.id);
        Ok(&self.series)
    }

    fn ingest(
        &self,
        accumulator: &mut TimeSeriesAccumulator,
        layout: RecordLayout,
        lines: &[String],
    ) -> Result<Continuation, NdbcError> {
        accumulator
            .ingest(layout, lines)
            .map_err(|LineError { line_number, source }| NdbcError::MalformedRecord {
                station: self.station.id.clone(),
                layout,
                line_number,
                source,
            })
    }
}
