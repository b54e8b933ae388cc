//! Picks the upstream dataset that serves a requested time range.

use crate::error::NdbcError;
use crate::types::dataset::DatasetKind;
use chrono::{DateTime, Datelike, Duration, Utc};

/// Length of the rolling window published in the realtime feed.
pub const REALTIME_WINDOW_DAYS: i64 = 45;

/// Decides which dataset covers `start`.
///
/// Rules, in order:
/// 1. `start` after `now`: [`NdbcError::InvalidRange`].
/// 2. `start` within the last 45 days: [`DatasetKind::Realtime`]. `end` is
///    irrelevant, the realtime feed is always read whole.
/// 3. `start` in an earlier year: [`DatasetKind::Historical`].
/// 4. `start` earlier in the current year: [`DatasetKind::Recent`].
pub fn select_dataset(
    start: DateTime<Utc>,
    _end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<DatasetKind, NdbcError> {
    if start > now {
        return Err(NdbcError::InvalidRange { start, now });
    }
    if start > now - Duration::days(REALTIME_WINDOW_DAYS) {
        return Ok(DatasetKind::Realtime);
    }
    match start.year().cmp(&now.year()) {
        std::cmp::Ordering::Less => Ok(DatasetKind::Historical),
        std::cmp::Ordering::Equal => Ok(DatasetKind::Recent),
        std::cmp::Ordering::Greater => Err(NdbcError::InvalidRange { start, now }),
    }
}
