use anyhow::Result;
use chrono::{Duration, Utc};
use ndbc::{BuoyStation, Channel};

fn main() -> Result<()> {
    let mut buoy = BuoyStation::open("41010")?;
    let now = Utc::now();
    let series = buoy.retrieve(now - Duration::days(3), now)?;

    println!("{} rows from {:?} to {:?}", series.len(), series.first_time(), series.last_time());
    for obs in series.iter().skip(series.len().saturating_sub(5)) {
        println!("{}  wspd={:?} wvht={:?}", obs.time, obs.value(Channel::WindSpeed), obs.value(Channel::WaveHeight));
    }
    Ok(())
}
