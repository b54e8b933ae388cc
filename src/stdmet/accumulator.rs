//! Assembles parsed files into a single [`TimeSeries`].

use crate::stdmet::error::RecordError;
use crate::stdmet::record_parser::{data_lines, parse_record};
use crate::types::dataset::{DatasetKind, RecordLayout};
use crate::types::time_series::TimeSeries;
use chrono::{DateTime, Datelike, Utc};
use log::debug;
use thiserror::Error;

/// Rough row count of one yearly file at hourly sampling.
const YEAR_OF_HOURLY_ROWS: usize = 24 * 366;

/// A data line that failed to parse, with its position in the file.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("line {line_number}: {source}")]
pub struct LineError {
    pub line_number: usize,
    #[source]
    pub source: RecordError,
}

/// What to do after a file has been ingested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// Fetch the next file of the dataset.
    NextFile,
    /// The requested end is covered, or the dataset has a single file.
    Done,
}

/// Appends observations file by file, in chronological order.
///
/// Archive files (historical, recent) are read oldest-first; rows outside
/// `[start, end]` are dropped. The realtime file is newest-first and is
/// appended in reverse, keeping the whole rolling window.
#[derive(Debug)]
pub struct TimeSeriesAccumulator {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    series: TimeSeries,
}

impl TimeSeriesAccumulator {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            series: TimeSeries::with_capacity(YEAR_OF_HOURLY_ROWS),
        }
    }

    /// Parses every data line of one fetched file and appends it.
    ///
    /// Parsing is strict: the first malformed line aborts the file and is
    /// returned as a [`LineError`]. Rows appended before it stay in the
    /// accumulator but the retrieval as a whole is expected to be discarded.
    pub fn ingest<S: AsRef<str>>(
        &mut self,
        layout: RecordLayout,
        lines: &[S],
    ) -> Result<Continuation, LineError> {
        match layout {
            RecordLayout::Realtime => {
                let before = self.series.len();
                for (line_number, line) in data_lines(layout, lines).rev() {
                    let observation = parse_record(layout, line)
                        .map_err(|source| LineError { line_number, source })?;
                    self.series.push(&observation);
                }
                debug!("Appended {} realtime rows", self.series.len() - before);
                Ok(Continuation::Done)
            }
            RecordLayout::Historical(_) | RecordLayout::Recent(_) => {
                let mut last_parsed = None;
                let mut kept = 0usize;
                for (line_number, line) in data_lines(layout, lines) {
                    let observation = parse_record(layout, line)
                        .map_err(|source| LineError { line_number, source })?;
                    last_parsed = Some(observation.time);
                    if observation.time >= self.start && observation.time <= self.end {
                        self.series.push(&observation);
                        kept += 1;
                    }
                }
                debug!("Kept {} rows from {} file, last at {:?}", kept, layout, last_parsed);
                Ok(match last_parsed {
                    Some(last) if last > self.end => Continuation::Done,
                    _ => Continuation::NextFile,
                })
            }
        }
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Hands over the assembled columns, trimmed to their final length.
    pub fn finish(mut self) -> TimeSeries {
        self.series.shrink_to_fit();
        self.series
    }
}

/// Position in the sequence of archive files covering a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveCursor {
    pub kind: DatasetKind,
    pub year: i32,
    pub month: u32,
}

impl ArchiveCursor {
    pub fn starting_at(kind: DatasetKind, start: DateTime<Utc>) -> Self {
        Self {
            kind,
            year: start.year(),
            month: start.month(),
        }
    }

    pub fn layout(&self) -> RecordLayout {
        RecordLayout::for_file(self.kind, self.year)
    }

    /// Moves to the following file. Returns `false` when there is none.
    ///
    /// Historical files advance by year and never run past `current_year`.
    /// Recent files advance by month and stop after December without
    /// moving into the next year.
    pub fn advance(&mut self, current_year: i32) -> bool {
        match self.kind {
            DatasetKind::Historical => {
                self.year += 1;
                self.year <= current_year
            }
            DatasetKind::Recent => {
                self.month += 1;
                self.month <= 12
            }
            DatasetKind::Realtime => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::channel::Channel;
    use crate::types::dataset::HeaderEra;
    use chrono::TimeZone;

    const HISTORICAL: RecordLayout = RecordLayout::Historical(HeaderEra::Modern);

    fn archive_line(month: u32, day: u32, hour: u32, wspd: f64) -> String {
        format!(
            "2010 {:02} {:02} {:02} 50 300 {:.1} 8.4 1.45 8.33 5.60 999 1021.9 12.8 21.9 4.6 99.0 99.00",
            month, day, hour, wspd
        )
    }

    fn header() -> Vec<String> {
        vec![
            "#YY  MM DD hh mm WDIR WSPD GST  WVHT   DPD   APD MWD   PRES  ATMP  WTMP  DEWP  VIS  TIDE".into(),
            "#yr  mo dy hr mn degT m/s  m/s     m   sec   sec degT   hPa  degC  degC  degC  nmi    ft".into(),
        ]
    }

    fn utc(month: u32, day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2010, month, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn archive_rows_are_clipped_to_window() {
        let mut lines = header();
        lines.push(archive_line(1, 14, 23, 1.0));
        lines.push(archive_line(1, 15, 0, 2.0));
        lines.push(archive_line(3, 1, 23, 3.0));
        lines.push(archive_line(3, 2, 0, 4.0));

        let end = Utc.with_ymd_and_hms(2010, 3, 1, 23, 59, 59).unwrap();
        let mut acc = TimeSeriesAccumulator::new(utc(1, 15, 0), end);
        assert_eq!(acc.ingest(HISTORICAL, &lines).unwrap(), Continuation::Done);

        let series = acc.finish();
        assert_eq!(series.wspd(), &[2.0, 3.0]);
        assert!(series.first_time().unwrap() >= utc(1, 15, 0));
        assert!(series.last_time().unwrap() <= end);
    }

    #[test]
    fn file_ending_before_end_asks_for_more() {
        let mut lines = header();
        lines.push(archive_line(12, 31, 23, 1.0));
        let mut acc = TimeSeriesAccumulator::new(utc(1, 1, 0), utc(12, 31, 23) + chrono::Duration::days(40));
        assert_eq!(acc.ingest(HISTORICAL, &lines).unwrap(), Continuation::NextFile);
        assert_eq!(acc.len(), 1);
    }

    #[test]
    fn empty_file_asks_for_more() {
        let mut acc = TimeSeriesAccumulator::new(utc(1, 1, 0), utc(2, 1, 0));
        assert_eq!(acc.ingest(HISTORICAL, &header()).unwrap(), Continuation::NextFile);
        assert!(acc.is_empty());
    }

    #[test]
    fn realtime_is_reversed_and_not_clipped() {
        let lines = vec![
            "#YY  MM DD hh mm WDIR WSPD GST  WVHT   DPD   APD MWD   PRES  ATMP  WTMP  DEWP  VIS PTDY  TIDE".to_string(),
            "#yr  mo dy hr mn degT m/s  m/s     m   sec   sec degT   hPa  degC  degC  degC  nmi  hPa    ft".to_string(),
            "2026 10 16 23 50 120 3.0 MM MM MM MM MM 1016.2 24.1 26.3 19.8 MM MM MM".to_string(),
            "2026 10 16 22 50 120 2.0 MM MM MM MM MM 1016.2 24.1 26.3 19.8 MM MM MM".to_string(),
            "2026 09 02 00 50 120 1.0 MM MM MM MM MM 1016.2 24.1 26.3 19.8 MM MM MM".to_string(),
            String::new(),
        ];
        // A narrow window has no effect on the realtime feed.
        let mut acc = TimeSeriesAccumulator::new(
            Utc.with_ymd_and_hms(2026, 10, 16, 23, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 10, 16, 23, 10, 0).unwrap(),
        );
        assert_eq!(acc.ingest(RecordLayout::Realtime, &lines).unwrap(), Continuation::Done);
        let series = acc.finish();
        assert_eq!(series.channel(Channel::WindSpeed), &[1.0, 2.0, 3.0]);
        assert!(series.time().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn malformed_line_reports_its_position() {
        let mut lines = header();
        lines.push(archive_line(1, 15, 0, 2.0));
        lines.push("2010 01 15 01 50 300".to_string());
        let mut acc = TimeSeriesAccumulator::new(utc(1, 1, 0), utc(2, 1, 0));
        let err = acc.ingest(HISTORICAL, &lines).unwrap_err();
        assert_eq!(err.line_number, 4);
        assert!(matches!(err.source, RecordError::TooFewFields { .. }));
    }

    #[test]
    fn historical_cursor_advances_by_year_until_current() {
        let mut cursor = ArchiveCursor::starting_at(DatasetKind::Historical, utc(5, 1, 0));
        assert!(cursor.advance(2012));
        assert_eq!(cursor.year, 2011);
        assert!(cursor.advance(2012));
        assert!(!cursor.advance(2012));
    }

    #[test]
    fn recent_cursor_stops_after_december() {
        let start = Utc.with_ymd_and_hms(2026, 11, 3, 0, 0, 0).unwrap();
        let mut cursor = ArchiveCursor::starting_at(DatasetKind::Recent, start);
        assert!(cursor.advance(2026));
        assert_eq!((cursor.year, cursor.month), (2026, 12));
        assert!(!cursor.advance(2026));
        assert_eq!(cursor.year, 2026);
    }
}
