//! Downloads NDBC text files and hands them to the parser as lines.

use crate::stdmet::error::FeedError;
use crate::types::dataset::DatasetKind;
use bon::bon;
use flate2::read::MultiGzDecoder;
use log::{debug, info, warn};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::io::Read;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://www.ndbc.noaa.gov/data";
const HISTORICAL_PATH: &str = "historical/stdmet";
const RECENT_PATH: &str = "stdmet";
const REALTIME_PATH: &str = "realtime2";
const STATION_TABLE_PATH: &str = "stations/station_table.txt";

const MONTH_DIRS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Source of raw NDBC files.
///
/// Implementations return the decompressed text of a file split into lines,
/// header lines included. One call is one request; nothing is retried.
pub trait FeedFetcher {
    /// The bulk station listing (`station_table.txt`).
    fn fetch_station_table(&self) -> Result<Vec<String>, FeedError>;

    /// One archive file: the yearly file for [`DatasetKind::Historical`]
    /// (`month` is ignored) or the monthly file for [`DatasetKind::Recent`].
    /// [`DatasetKind::Realtime`] is served by [`FeedFetcher::fetch_realtime_file`].
    fn fetch_month_file(
        &self,
        station_id: &str,
        kind: DatasetKind,
        year: i32,
        month: u32,
    ) -> Result<Vec<String>, FeedError>;

    /// The rolling realtime file, newest record first.
    fn fetch_realtime_file(&self, station_id: &str) -> Result<Vec<String>, FeedError>;
}

impl<T: FeedFetcher + ?Sized> FeedFetcher for &T {
    fn fetch_station_table(&self) -> Result<Vec<String>, FeedError> {
        (**self).fetch_station_table()
    }

    fn fetch_month_file(
        &self,
        station_id: &str,
        kind: DatasetKind,
        year: i32,
        month: u32,
    ) -> Result<Vec<String>, FeedError> {
        (**self).fetch_month_file(station_id, kind, year, month)
    }

    fn fetch_realtime_file(&self, station_id: &str) -> Result<Vec<String>, FeedError> {
        (**self).fetch_realtime_file(station_id)
    }
}

/// [`FeedFetcher`] talking to the NDBC web server with a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFeedFetcher {
    client: Client,
    base_url: String,
}

#[bon]
impl HttpFeedFetcher {
    /// Configures a fetcher.
    ///
    /// # Optional Builder Methods
    ///
    /// * `.base_url(..)`: server root, defaults to [`DEFAULT_BASE_URL`].
    /// * `.user_agent(..)`: `User-Agent` header sent with every request.
    /// * `.timeout(Duration)`: per-request timeout. Without it the `reqwest`
    ///   default applies.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::ClientBuild`] if the HTTP client cannot be created.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use ndbc::HttpFeedFetcher;
    /// use std::time::Duration;
    ///
    /// let fetcher = HttpFeedFetcher::builder()
    ///     .user_agent("buoy-dashboard/1.0")
    ///     .timeout(Duration::from_secs(30))
    ///     .build()?;
    /// # Ok::<(), ndbc::FeedError>(())
    /// ```
    #[builder]
    pub fn new(
        #[builder(into)] base_url: Option<String>,
        #[builder(into)] user_agent: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, FeedError> {
        let mut client = Client::builder();
        if let Some(agent) = user_agent {
            client = client.user_agent(agent);
        }
        if let Some(timeout) = timeout {
            client = client.timeout(timeout);
        }
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Ok(Self {
            client: client.build().map_err(FeedError::ClientBuild)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl HttpFeedFetcher {
    /// A fetcher with every option at its default.
    pub fn standard() -> Result<Self, FeedError> {
        Self::builder().build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn station_table_url(&self) -> String {
        format!("{}/{}", self.base_url, STATION_TABLE_PATH)
    }

    pub(crate) fn historical_url(&self, station_id: &str, year: i32) -> String {
        format!(
            "{}/{}/{}h{}.txt.gz",
            self.base_url, HISTORICAL_PATH, station_id, year
        )
    }

    /// Monthly files live in a directory named after the month and are
    /// named `<id><month><year>` with an unpadded month number.
    pub(crate) fn recent_url(&self, station_id: &str, year: i32, month: u32) -> String {
        let dir = MONTH_DIRS[(month.clamp(1, 12) - 1) as usize];
        format!(
            "{}/{}/{}/{}{}{}.txt.gz",
            self.base_url, RECENT_PATH, dir, station_id, month, year
        )
    }

    /// Realtime file names use the upper-case id (`BURL1.txt`), unlike the
    /// archive files.
    pub(crate) fn realtime_url(&self, station_id: &str) -> String {
        format!(
            "{}/{}/{}.txt",
            self.base_url,
            REALTIME_PATH,
            station_id.to_uppercase()
        )
    }

    fn download_lines(&self, url: &str) -> Result<Vec<String>, FeedError> {
        info!("Downloading {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FeedError::NetworkRequest(url.to_string(), e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            warn!("Nothing published at {}", url);
            return Err(FeedError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            warn!("HTTP {} for {}", status, url);
            return Err(FeedError::Transport {
                url: url.to_string(),
                status,
            });
        }

        let bytes = response
            .bytes()
            .map_err(|e| FeedError::NetworkRequest(url.to_string(), e))?;
        let text = decode_payload(url, &bytes)?;
        let lines: Vec<String> = text.lines().map(str::to_owned).collect();
        debug!("Read {} lines from {}", lines.len(), url);
        Ok(lines)
    }
}

impl FeedFetcher for HttpFeedFetcher {
    fn fetch_station_table(&self) -> Result<Vec<String>, FeedError> {
        self.download_lines(&self.station_table_url())
    }

    fn fetch_month_file(
        &self,
        station_id: &str,
        kind: DatasetKind,
        year: i32,
        month: u32,
    ) -> Result<Vec<String>, FeedError> {
        match kind {
            DatasetKind::Historical => self.download_lines(&self.historical_url(station_id, year)),
            DatasetKind::Recent => {
                self.download_lines(&self.recent_url(station_id, year, month))
            }
            DatasetKind::Realtime => self.fetch_realtime_file(station_id),
        }
    }

    fn fetch_realtime_file(&self, station_id: &str) -> Result<Vec<String>, FeedError> {
        self.download_lines(&self.realtime_url(station_id))
    }
}

/// Gunzips `bytes` when they carry the gzip magic number, otherwise reads
/// them as UTF-8 text.
pub(crate) fn decode_payload(url: &str, bytes: &[u8]) -> Result<String, FeedError> {
    let mut text = String::new();
    if bytes.starts_with(&GZIP_MAGIC) {
        MultiGzDecoder::new(bytes)
            .read_to_string(&mut text)
            .map_err(|e| FeedError::DownloadIo(url.to_string(), e))?;
    } else {
        text = String::from_utf8(bytes.to_vec()).map_err(|e| {
            FeedError::DownloadIo(
                url.to_string(),
                std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            )
        })?;
    }
    Ok(text)
}
