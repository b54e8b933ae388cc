pub mod accumulator;
pub mod error;
pub mod fetcher;
pub mod record_parser;
pub mod sentinel;
pub mod source;
