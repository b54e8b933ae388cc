//! In-memory [`FeedFetcher`] for unit tests.

use crate::stdmet::error::FeedError;
use crate::stdmet::fetcher::FeedFetcher;
use crate::types::dataset::DatasetKind;
use reqwest::StatusCode;
use std::cell::RefCell;
use std::collections::HashMap;

/// Serves files registered up front and records every request it receives.
///
/// Keys look like `historical/41010/2010`, `recent/41010/3`,
/// `realtime/41010` and `stations`. Unregistered keys answer
/// [`FeedError::NotFound`].
#[derive(Debug, Default)]
pub struct ScriptedFetcher {
    files: HashMap<String, Result<Vec<String>, StatusCode>>,
    requests: RefCell<Vec<String>>,
}

fn to_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_owned).collect()
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_station_table(mut self, text: &str) -> Self {
        self.files.insert("stations".into(), Ok(to_lines(text)));
        self
    }

    pub fn with_historical(mut self, station: &str, year: i32, text: &str) -> Self {
        self.files
            .insert(format!("historical/{}/{}", station, year), Ok(to_lines(text)));
        self
    }

    pub fn with_recent(mut self, station: &str, month: u32, text: &str) -> Self {
        self.files
            .insert(format!("recent/{}/{}", station, month), Ok(to_lines(text)));
        self
    }

    pub fn with_realtime(mut self, station: &str, text: &str) -> Self {
        self.files
            .insert(format!("realtime/{}", station), Ok(to_lines(text)));
        self
    }

    /// Makes `key` answer with a non-success HTTP status.
    pub fn with_status(mut self, key: &str, status: StatusCode) -> Self {
        self.files.insert(key.to_string(), Err(status));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn data_requests(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter(|r| r != "stations")
            .collect()
    }

    fn serve(&self, key: String) -> Result<Vec<String>, FeedError> {
        self.requests.borrow_mut().push(key.clone());
        match self.files.get(&key) {
            Some(Ok(lines)) => Ok(lines.clone()),
            Some(Err(status)) => Err(FeedError::Transport {
                url: key,
                status: *status,
            }),
            None => Err(FeedError::NotFound { url: key }),
        }
    }
}

impl FeedFetcher for ScriptedFetcher {
    fn fetch_station_table(&self) -> Result<Vec<String>, FeedError> {
        self.serve("stations".into())
    }

    fn fetch_month_file(
        &self,
        station_id: &str,
        kind: DatasetKind,
        year: i32,
        month: u32,
    ) -> Result<Vec<String>, FeedError> {
        match kind {
            DatasetKind::Historical => self.serve(format!("historical/{}/{}", station_id, year)),
            DatasetKind::Recent => self.serve(format!("recent/{}/{}", station_id, month)),
            DatasetKind::Realtime => self.fetch_realtime_file(station_id),
        }
    }

    fn fetch_realtime_file(&self, station_id: &str) -> Result<Vec<String>, FeedError> {
        self.serve(format!("realtime/{}", station_id))
    }
}
