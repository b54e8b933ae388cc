//! Defines the data structures representing NDBC stations as listed in the
//! station table, including the geographic location.

use serde::{Deserialize, Serialize};

/// Static identity and metadata of one NDBC station.
///
/// Parsed from a row of `station_table.txt`:
///
/// ```text
/// STATION_ID | OWNER | TTYPE | HULL | NAME | PAYLOAD | LOCATION | TIMEZONE | FORECAST | NOTE
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Station {
    /// The station identifier as used in data file names (e.g. "41010").
    pub id: String,
    /// Owner code of the station.
    pub owner: String,
    /// Station type, for example "3-meter discus buoy".
    pub station_type: String,
    /// Hull type code.
    pub hull: String,
    /// Human readable station name.
    pub name: String,
    /// Payload / electronics package.
    pub payload: String,
    pub location: Location,
    /// Timezone code used by NDBC for the station's local time.
    pub timezone: String,
    /// Marine forecast zone the station reports into (e.g. "FZNT23"), empty if none.
    pub forecast: String,
    /// Free-text note; often empty.
    pub note: String,
}

impl Station {
    /// Whether the station feeds a marine forecast zone.
    pub fn has_forecast(&self) -> bool {
        !self.forecast.is_empty()
    }
}

/// Geographic location of a station.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Location {
    /// Latitude in decimal degrees (positive for North, negative for South).
    pub latitude: f64,
    /// Longitude in decimal degrees (positive for East, negative for West).
    pub longitude: f64,
}
