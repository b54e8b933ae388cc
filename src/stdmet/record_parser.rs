//! Turns one whitespace-delimited line of an NDBC standard meteorological
//! file into an [`Observation`].
//!
//! Archive lines (historical and recent) look like
//!
//! ```text
//! #YY  MM DD hh mm WDIR WSPD GST  WVHT   DPD   APD MWD   PRES  ATMP  WTMP  DEWP  VIS  TIDE
//! 2010 01 15 00 50 300  6.6  8.4  1.45  8.33  5.60 999 1021.9  12.8  21.9   4.6 99.0 99.00
//! ```
//!
//! with only the first eleven channels read. Files from before 2005 have no
//! minute column, and files before 2000 use a two-digit year. Realtime lines
//! always carry minutes and all fourteen channels, with `MM` for missing values.

use crate::stdmet::error::RecordError;
use crate::stdmet::sentinel::sentinel_for;
use crate::types::channel::{Channel, ARCHIVE_CHANNEL_COUNT, CHANNEL_COUNT};
use crate::types::dataset::{HeaderEra, RecordLayout};
use crate::types::observation::Observation;
use chrono::{DateTime, NaiveDateTime, Utc};

const STAMP_FORMAT: &str = "%Y%m%d%H%M";

/// Token count of an archive line with minutes: timestamp, eleven channels, VIS and TIDE.
const MINUTE_LINE_TOKENS: usize = 5 + ARCHIVE_CHANNEL_COUNT + 2;

/// Parses a single data line laid out as `layout`.
///
/// # Errors
///
/// Returns a [`RecordError`] when the line has too few fields for the
/// layout, the timestamp cannot be read, or a channel value is not a number
/// (and not the layout's missing-value marker).
///
/// # Examples
///
/// ```
/// use ndbc::{parse_record, Channel, RecordLayout};
///
/// let line = "2026 10 16 23 50 MM 5.0 7.0 1.2 9 6.1 110 1016.2 24.1 26.3 19.8 MM +0.3 MM";
/// let obs = parse_record(RecordLayout::Realtime, line).unwrap();
/// assert!(obs.get(Channel::WindDirection).is_nan());
/// assert_eq!(obs.get(Channel::WindSpeed), 5.0);
/// ```
pub fn parse_record(layout: RecordLayout, line: &str) -> Result<Observation, RecordError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match layout {
        RecordLayout::Historical(_) | RecordLayout::Recent(_) => parse_archive(layout, &tokens),
        RecordLayout::Realtime => parse_realtime(&tokens),
    }
}

/// Yields `(line_number, line)` for every data line of a file, skipping the
/// layout's header lines and blank lines. Line numbers are 1-based.
pub fn data_lines<'a, S: AsRef<str>>(
    layout: RecordLayout,
    lines: &'a [S],
) -> impl DoubleEndedIterator<Item = (usize, &'a str)> + 'a {
    lines
        .iter()
        .enumerate()
        .skip(layout.header_lines())
        .map(|(i, line)| (i + 1, line.as_ref()))
        .filter(|(_, line)| !line.trim().is_empty())
}

fn parse_archive(layout: RecordLayout, tokens: &[&str]) -> Result<Observation, RecordError> {
    check_len(tokens, 4 + ARCHIVE_CHANNEL_COUNT)?;
    let consumed = if has_minute_column(layout, tokens) { 5 } else { 4 };
    check_len(tokens, consumed + ARCHIVE_CHANNEL_COUNT)?;
    let time = archive_timestamp(tokens, consumed)
        .ok_or_else(|| RecordError::InvalidTimestamp(tokens[..consumed].join(" ")))?;

    let mut observation = Observation::empty(time);
    let fields = &tokens[consumed..consumed + ARCHIVE_CHANNEL_COUNT];
    for (channel, token) in Channel::ALL.into_iter().zip(fields) {
        observation.set(channel, read_value(layout, channel, token)?);
    }
    Ok(observation)
}

fn parse_realtime(tokens: &[&str]) -> Result<Observation, RecordError> {
    check_len(tokens, 5 + CHANNEL_COUNT)?;
    let stamp = tokens[..5].concat();
    let time = parse_stamp(&stamp)
        .ok_or_else(|| RecordError::InvalidTimestamp(tokens[..5].join(" ")))?;

    let mut observation = Observation::empty(time);
    for (channel, token) in Channel::ALL.into_iter().zip(&tokens[5..5 + CHANNEL_COUNT]) {
        observation.set(channel, read_value(RecordLayout::Realtime, channel, token)?);
    }
    Ok(observation)
}

/// Whether an archive line has a minute column.
///
/// Modern-era files always do. Older files gained it in 2005 together with
/// the trailing VIS and TIDE columns, so there the token count decides.
fn has_minute_column(layout: RecordLayout, tokens: &[&str]) -> bool {
    match layout {
        RecordLayout::Historical(HeaderEra::Modern) | RecordLayout::Recent(HeaderEra::Modern) => true,
        _ => tokens.len() >= MINUTE_LINE_TOKENS,
    }
}

/// Reads the first `count` tokens as a concatenated timestamp: five tokens
/// include minutes, four tokens end at the hour (minute 0).
fn archive_timestamp(tokens: &[&str], count: usize) -> Option<DateTime<Utc>> {
    let mut stamp = String::with_capacity(12);
    if tokens[0].len() == 2 {
        stamp.push_str("19");
    }
    for token in &tokens[..count] {
        stamp.push_str(token);
    }
    if count == 4 {
        stamp.push_str("00");
    }
    parse_stamp(&stamp)
}

fn parse_stamp(stamp: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(stamp, STAMP_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

fn read_value(layout: RecordLayout, channel: Channel, token: &str) -> Result<f64, RecordError> {
    let sentinel = sentinel_for(layout, channel);
    let parsed = token.parse::<f64>().ok();
    if sentinel.matches(token, parsed) {
        return Ok(f64::NAN);
    }
    parsed.ok_or_else(|| RecordError::InvalidNumber {
        channel,
        token: token.to_string(),
    })
}

fn check_len(tokens: &[&str], expected: usize) -> Result<(), RecordError> {
    if tokens.len() < expected {
        return Err(RecordError::TooFewFields {
            expected,
            found: tokens.len(),
        });
    }
    Ok(())
}
