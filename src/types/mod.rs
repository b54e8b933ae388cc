pub mod channel;
pub mod dataset;
pub mod observation;
pub mod station;
pub mod time_series;
pub mod traits;
