use anyhow::Result;
use ndbc::{lookup_station, HttpFeedFetcher};
use std::time::Duration;

fn main() -> Result<()> {
    let fetcher = HttpFeedFetcher::builder()
        .user_agent("ndbc-demo/0.1")
        .timeout(Duration::from_secs(30))
        .build()?;

    for id in ["41010", "46026", "51001"] {
        let station = lookup_station(&fetcher, id)?;
        println!(
            "{:>6}  {:<50} {:>8.3} {:>9.3}  forecast zone: {}",
            station.id,
            station.name,
            station.location.latitude,
            station.location.longitude,
            if station.has_forecast() { station.forecast.as_str() } else { "-" },
        );
    }
    Ok(())
}
