pub mod any_datetime;
pub mod types;
