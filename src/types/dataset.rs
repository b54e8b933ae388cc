//! Defines the upstream dataset kinds and the record layouts found inside
//! their files.

use std::fmt;

/// First year whose archive files carry the two-line header (names + units)
/// and the five-token timestamp with minutes.
pub const MODERN_ERA_START: i32 = 2007;

/// Which NDBC standard meteorological dataset a request is served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    /// One compressed file per station per year.
    Historical,
    /// One compressed file per station per month of the current year.
    Recent,
    /// One plain-text file per station covering the last ~45 days, newest first.
    Realtime,
}

impl DatasetKind {
    pub(crate) fn path_segment(&self) -> &'static str {
        match self {
            DatasetKind::Historical => "historical",
            DatasetKind::Recent => "recent",
            DatasetKind::Realtime => "realtime",
        }
    }
}

/// Allows formatting a `DatasetKind` using its lowercase name.
///
/// # Examples
///
/// ```
/// use ndbc::DatasetKind;
///
/// assert_eq!(DatasetKind::Realtime.to_string(), "realtime");
/// ```
impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path_segment())
    }
}

/// Header era of an archive file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderEra {
    /// Before 2007: a single header line.
    Legacy,
    /// 2007 onward: column names plus a units line.
    Modern,
}

impl HeaderEra {
    pub fn for_year(year: i32) -> Self {
        if year >= MODERN_ERA_START {
            HeaderEra::Modern
        } else {
            HeaderEra::Legacy
        }
    }
}

impl fmt::Display for HeaderEra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderEra::Legacy => write!(f, "legacy"),
            HeaderEra::Modern => write!(f, "modern"),
        }
    }
}

/// Field layout of the lines inside one fetched file.
///
/// Archive files differ only by header era; realtime files have their own
/// channel set and missing-value marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordLayout {
    Historical(HeaderEra),
    Recent(HeaderEra),
    Realtime,
}

impl RecordLayout {
    /// Layout of an archive file of `kind` covering `year`.
    pub fn for_file(kind: DatasetKind, year: i32) -> Self {
        match kind {
            DatasetKind::Historical => RecordLayout::Historical(HeaderEra::for_year(year)),
            DatasetKind::Recent => RecordLayout::Recent(HeaderEra::for_year(year)),
            DatasetKind::Realtime => RecordLayout::Realtime,
        }
    }

    pub fn kind(&self) -> DatasetKind {
        match self {
            RecordLayout::Historical(_) => DatasetKind::Historical,
            RecordLayout::Recent(_) => DatasetKind::Recent,
            RecordLayout::Realtime => DatasetKind::Realtime,
        }
    }

    /// Number of leading header lines to skip.
    pub fn header_lines(&self) -> usize {
        match self {
            RecordLayout::Historical(HeaderEra::Legacy) | RecordLayout::Recent(HeaderEra::Legacy) => 1,
            RecordLayout::Historical(HeaderEra::Modern)
            | RecordLayout::Recent(HeaderEra::Modern)
            | RecordLayout::Realtime => 2,
        }
    }
}

impl fmt::Display for RecordLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordLayout::Historical(era) | RecordLayout::Recent(era) => {
                write!(f, "{} ({} header)", self.kind(), era)
            }
            RecordLayout::Realtime => write!(f, "realtime"),
        }
    }
}
