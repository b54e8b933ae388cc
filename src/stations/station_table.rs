use crate::stations::error::StationLookupError;
use crate::stdmet::fetcher::FeedFetcher;
use crate::types::station::{Location, Station};
use log::info;

const FIELD_COUNT: usize = 10;

/// Fetches the station table and returns the entry for `station_id`.
///
/// When the table lists an id more than once, the last row wins.
pub fn lookup_station<F: FeedFetcher>(
    fetcher: &F,
    station_id: &str,
) -> Result<Station, StationLookupError> {
    let rows = fetcher.fetch_station_table()?;
    let row = rows
        .iter()
        .rev()
        .find(|row| row_id(row) == Some(station_id))
        .ok_or_else(|| StationLookupError::NotFound {
            station: station_id.to_string(),
        })?;
    let station = Station::from_table_row(row)?;
    info!("Found station {} ({})", station.id, station.name);
    Ok(station)
}

fn row_id(row: &str) -> Option<&str> {
    row.split('|').next().map(str::trim)
}

impl Station {
    /// Parses one pipe-delimited row of `station_table.txt`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndbc::Station;
    ///
    /// let row = "41010|NDBC|3-meter foam buoy|3D|CANAVERAL EAST|SCOOP|28.878 N 78.485 W (28&#176;52'41\" N 78&#176;29'6\" W)|E|FZNT23|";
    /// let station = Station::from_table_row(row).unwrap();
    /// assert_eq!(station.location.latitude, 28.878);
    /// assert_eq!(station.location.longitude, -78.485);
    /// ```
    pub fn from_table_row(row: &str) -> Result<Station, StationLookupError> {
        let fields: Vec<&str> = row.split('|').map(str::trim).collect();
        let id = fields.first().copied().unwrap_or_default().to_string();
        if fields.len() != FIELD_COUNT {
            return Err(StationLookupError::MalformedRow {
                station: id,
                reason: format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
            });
        }
        let location = parse_location(fields[6]).ok_or_else(|| StationLookupError::MalformedRow {
            station: id.clone(),
            reason: format!("unreadable location '{}'", fields[6]),
        })?;

        Ok(Station {
            id,
            owner: fields[1].to_string(),
            station_type: fields[2].to_string(),
            hull: fields[3].to_string(),
            name: fields[4].to_string(),
            payload: fields[5].to_string(),
            location,
            timezone: fields[7].to_string(),
            forecast: fields[8].to_string(),
            note: fields[9].to_string(),
        })
    }
}

/// Reads `"<lat> N|S <lon> E|W ..."` into signed decimal degrees.
fn parse_location(text: &str) -> Option<Location> {
    let mut tokens = text.split_whitespace();
    let latitude: f64 = tokens.next()?.parse().ok()?;
    let latitude = match tokens.next()? {
        "N" => latitude,
        "S" => -latitude,
        _ => return None,
    };
    let longitude: f64 = tokens.next()?.parse().ok()?;
    let longitude = match tokens.next()? {
        "E" => longitude,
        "W" => -longitude,
        _ => return None,
    };
    Some(Location {
        latitude,
        longitude,
    })
}
