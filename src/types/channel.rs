//! Defines the `Channel` enum, naming the standard meteorological measurements
//! reported by NDBC buoys and the column order they appear in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of channels carried by every [`crate::Observation`] and [`crate::TimeSeries`].
pub const CHANNEL_COUNT: usize = 14;

/// Number of channels present in historical and recent (archived) files.
///
/// The archive layout stops after dew point; visibility, pressure tendency and
/// tide only exist in the realtime feed.
pub const ARCHIVE_CHANNEL_COUNT: usize = 11;

/// One standard meteorological measurement.
///
/// Variants are declared in the column order used by NDBC text files, so
/// `channel as usize` is both the array index inside an observation and the
/// field offset after the timestamp tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Channel {
    /// `WDIR`: wind direction, degrees clockwise from true north.
    WindDirection = 0,
    /// `WSPD`: wind speed, m/s.
    WindSpeed = 1,
    /// `GST`: peak gust speed, m/s.
    GustSpeed = 2,
    /// `WVHT`: significant wave height, m.
    WaveHeight = 3,
    /// `DPD`: dominant wave period, s.
    DominantWavePeriod = 4,
    /// `APD`: average wave period, s.
    AverageWavePeriod = 5,
    /// `MWD`: mean wave direction at the dominant period, degrees.
    MeanWaveDirection = 6,
    /// `PRES`: sea level pressure, hPa.
    Pressure = 7,
    /// `ATMP`: air temperature, Celsius.
    AirTemperature = 8,
    /// `WTMP`: sea surface temperature, Celsius.
    WaterTemperature = 9,
    /// `DEWP`: dewpoint temperature, Celsius.
    Dewpoint = 10,
    /// `VIS`: station visibility, nautical miles. Realtime only.
    Visibility = 11,
    /// `PTDY`: pressure tendency, hPa. Realtime only.
    PressureTendency = 12,
    /// `TIDE`: water level above or below MLLW, ft. Realtime only.
    Tide = 13,
}

impl Channel {
    /// All channels, in file column order.
    pub const ALL: [Channel; CHANNEL_COUNT] = [
        Channel::WindDirection,
        Channel::WindSpeed,
        Channel::GustSpeed,
        Channel::WaveHeight,
        Channel::DominantWavePeriod,
        Channel::AverageWavePeriod,
        Channel::MeanWaveDirection,
        Channel::Pressure,
        Channel::AirTemperature,
        Channel::WaterTemperature,
        Channel::Dewpoint,
        Channel::Visibility,
        Channel::PressureTendency,
        Channel::Tide,
    ];

    /// Lowercase NDBC column name (e.g. `"wdir"`).
    pub fn column_name(self) -> &'static str {
        match self {
            Channel::WindDirection => "wdir",
            Channel::WindSpeed => "wspd",
            Channel::GustSpeed => "gst",
            Channel::WaveHeight => "wvht",
            Channel::DominantWavePeriod => "dpd",
            Channel::AverageWavePeriod => "apd",
            Channel::MeanWaveDirection => "mwd",
            Channel::Pressure => "pres",
            Channel::AirTemperature => "atmp",
            Channel::WaterTemperature => "wtmp",
            Channel::Dewpoint => "dewp",
            Channel::Visibility => "vis",
            Channel::PressureTendency => "ptdy",
            Channel::Tide => "tide",
        }
    }

    /// Position of this channel inside an observation.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether the channel is an angle in degrees.
    pub fn is_direction(self) -> bool {
        matches!(self, Channel::WindDirection | Channel::MeanWaveDirection)
    }
}

/// Formats a `Channel` using its NDBC column name.
///
/// # Examples
///
/// ```
/// use ndbc::Channel;
///
/// assert_eq!(Channel::WaveHeight.to_string(), "wvht");
/// ```
impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_index_order() {
        for (i, channel) in Channel::ALL.iter().enumerate() {
            assert_eq!(channel.index(), i);
        }
    }

    #[test]
    fn archive_channels_end_at_dewpoint() {
        assert_eq!(Channel::ALL[ARCHIVE_CHANNEL_COUNT - 1], Channel::Dewpoint);
    }

    #[test]
    fn only_two_direction_channels() {
        let directions: Vec<_> = Channel::ALL.iter().filter(|c| c.is_direction()).collect();
        assert_eq!(
            directions,
            [&Channel::WindDirection, &Channel::MeanWaveDirection]
        );
    }
}
