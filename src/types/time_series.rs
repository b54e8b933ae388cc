//! Contains the `TimeSeries` structure, the materialized result of a standard
//! meteorological retrieval.

use crate::types::channel::{Channel, CHANNEL_COUNT};
use crate::types::observation::Observation;
use chrono::{DateTime, Utc};
use polars::prelude::*;

/// Index-aligned columns of buoy observations.
///
/// `time` and every channel column always have the same length; position `i`
/// of each channel belongs to `time[i]`. Missing readings are `f64::NAN`.
///
/// # Examples
///
/// ```
/// use ndbc::{Channel, TimeSeries};
///
/// let series = TimeSeries::default();
/// assert!(series.is_empty());
/// assert_eq!(series.channel(Channel::WindSpeed).len(), series.len());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    time: Vec<DateTime<Utc>>,
    columns: [Vec<f64>; CHANNEL_COUNT],
}

impl TimeSeries {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            time: Vec::with_capacity(capacity),
            columns: std::array::from_fn(|_| Vec::with_capacity(capacity)),
        }
    }

    pub(crate) fn push(&mut self, observation: &Observation) {
        self.time.push(observation.time);
        for (column, value) in self.columns.iter_mut().zip(observation.values) {
            column.push(value);
        }
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.time.shrink_to_fit();
        for column in &mut self.columns {
            column.shrink_to_fit();
        }
    }

    /// Drops every row, keeping the allocations.
    ///
    /// A retrieval on an already populated station calls this first, so the
    /// result only ever reflects the most recent request.
    pub fn clear(&mut self) {
        self.time.clear();
        for column in &mut self.columns {
            column.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn time(&self) -> &[DateTime<Utc>] {
        &self.time
    }

    pub fn channel(&self, channel: Channel) -> &[f64] {
        &self.columns[channel.index()]
    }

    pub fn first_time(&self) -> Option<DateTime<Utc>> {
        self.time.first().copied()
    }

    pub fn last_time(&self) -> Option<DateTime<Utc>> {
        self.time.last().copied()
    }

    /// Row `index` as an [`Observation`].
    pub fn get(&self, index: usize) -> Option<Observation> {
        let time = *self.time.get(index)?;
        Some(Observation {
            time,
            values: std::array::from_fn(|c| self.columns[c][index]),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = Observation> + '_ {
        (0..self.len()).filter_map(|i| self.get(i))
    }

    pub fn wdir(&self) -> &[f64] {
        self.channel(Channel::WindDirection)
    }
    pub fn wspd(&self) -> &[f64] {
        self.channel(Channel::WindSpeed)
    }
    pub fn gst(&self) -> &[f64] {
        self.channel(Channel::GustSpeed)
    }
    pub fn wvht(&self) -> &[f64] {
        self.channel(Channel::WaveHeight)
    }
    pub fn dpd(&self) -> &[f64] {
        self.channel(Channel::DominantWavePeriod)
    }
    pub fn apd(&self) -> &[f64] {
        self.channel(Channel::AverageWavePeriod)
    }
    pub fn mwd(&self) -> &[f64] {
        self.channel(Channel::MeanWaveDirection)
    }
    pub fn pres(&self) -> &[f64] {
        self.channel(Channel::Pressure)
    }
    pub fn atmp(&self) -> &[f64] {
        self.channel(Channel::AirTemperature)
    }
    pub fn wtmp(&self) -> &[f64] {
        self.channel(Channel::WaterTemperature)
    }
    pub fn dewp(&self) -> &[f64] {
        self.channel(Channel::Dewpoint)
    }
    pub fn vis(&self) -> &[f64] {
        self.channel(Channel::Visibility)
    }
    pub fn ptdy(&self) -> &[f64] {
        self.channel(Channel::PressureTendency)
    }
    pub fn tide(&self) -> &[f64] {
        self.channel(Channel::Tide)
    }

    /// Copies the series into a Polars `DataFrame`.
    ///
    /// The frame has a `time` column (timezone-naive UTC, millisecond
    /// precision) followed by one `f64` column per [`Channel`], named after
    /// [`Channel::column_name`]. Missing readings stay `NaN`.
    ///
    /// # Errors
    ///
    /// Returns a [`PolarsError`] if the frame cannot be assembled.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let naive: Vec<_> = self.time.iter().map(|t| t.naive_utc()).collect();
        let mut columns = Vec::with_capacity(CHANNEL_COUNT + 1);
        columns.push(
            DatetimeChunked::from_naive_datetime("time".into(), naive, TimeUnit::Milliseconds)
                .into_series()
                .into_column(),
        );
        for channel in Channel::ALL {
            columns.push(Column::new(
                channel.column_name().into(),
                self.channel(channel),
            ));
        }
        DataFrame::new(columns)
    }

    /// Same as [`TimeSeries::to_dataframe`], wrapped in a `LazyFrame` for
    /// further filtering.
    pub fn lazy(&self) -> PolarsResult<LazyFrame> {
        Ok(self.to_dataframe()?.lazy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn obs(hour: u32, wspd: f64) -> Observation {
        let mut o = Observation::empty(Utc.with_ymd_and_hms(2010, 1, 15, hour, 0, 0).unwrap());
        o.set(Channel::WindSpeed, wspd);
        o
    }

    #[test]
    fn columns_stay_aligned() {
        let mut series = TimeSeries::default();
        series.push(&obs(0, 1.0));
        series.push(&obs(1, 2.0));
        assert_eq!(series.len(), 2);
        for channel in Channel::ALL {
            assert_eq!(series.channel(channel).len(), series.len());
        }
        assert_eq!(series.wspd(), &[1.0, 2.0]);
    }

    #[test]
    fn clear_empties_every_column() {
        let mut series = TimeSeries::default();
        series.push(&obs(0, 1.0));
        series.clear();
        assert!(series.is_empty());
        assert!(Channel::ALL.iter().all(|c| series.channel(*c).is_empty()));
    }

    #[test]
    fn get_rebuilds_observation() {
        let mut series = TimeSeries::default();
        series.push(&obs(5, 7.5));
        let row = series.get(0).unwrap();
        assert_eq!(row.value(Channel::WindSpeed), Some(7.5));
        assert!(series.get(1).is_none());
    }

    #[test]
    fn dataframe_has_time_and_all_channels() {
        let mut series = TimeSeries::default();
        series.push(&obs(0, 1.0));
        series.push(&obs(1, 2.0));
        let df = series.to_dataframe().unwrap();
        assert_eq!(df.shape(), (2, CHANNEL_COUNT + 1));
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert_eq!(names[0], "time");
        assert_eq!(names[1], "wdir");
        assert_eq!(names[CHANNEL_COUNT], "tide");
    }
}
