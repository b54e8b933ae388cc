use anyhow::Result;
use ndbc::BuoyStation;
use polars::prelude::*;

fn main() -> Result<()> {
    let mut buoy = BuoyStation::open("41010")?;
    buoy.retrieve("2010-01-15", "2010-03-01")?;
    println!("{} ({}): {} hourly rows", buoy.station().name, buoy.id(), buoy.series().len());

    let rough_seas = buoy
        .series()
        .lazy()?
        .filter(col("wvht").gt(lit(3.0f64)))
        .select([col("time"), col("wspd"), col("gst"), col("wvht"), col("pres")])
        .collect()?;

    println!("Rows with waves above 3 m:\n{}", rough_seas);
    Ok(())
}
