use crate::types::traits::types::{Month, Period, Year};
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Anything that can be resolved to a UTC period.
///
/// A retrieval uses the start of the resolved period as its start bound and
/// the end of the resolved period as its end bound, so passing the same date
/// to both covers that whole day.
pub trait AnyDateTime {
    fn get_datetime_range(self) -> Option<Period>;
}

fn day_period(date: NaiveDate) -> Option<Period> {
    let start = Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?);
    let end = Utc.from_utc_datetime(&date.and_hms_micro_opt(23, 59, 59, 999_999)?);
    Some(Period { start, end })
}

impl AnyDateTime for DateTime<Utc> {
    fn get_datetime_range(self) -> Option<Period> {
        Some(Period {
            start: self,
            end: self,
        })
    }
}

impl AnyDateTime for DateTime<FixedOffset> {
    fn get_datetime_range(self) -> Option<Period> {
        self.with_timezone(&Utc).get_datetime_range()
    }
}

impl AnyDateTime for NaiveDateTime {
    fn get_datetime_range(self) -> Option<Period> {
        Utc.from_utc_datetime(&self).get_datetime_range()
    }
}

impl AnyDateTime for NaiveDate {
    fn get_datetime_range(self) -> Option<Period> {
        day_period(self)
    }
}

impl AnyDateTime for &str {
    fn get_datetime_range(self) -> Option<Period> {
        if let Ok(dt) = self.parse::<DateTime<Utc>>() {
            return dt.get_datetime_range();
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(self, "%Y-%m-%d %H:%M:%S") {
            return naive.get_datetime_range();
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(self, "%Y-%m-%d %H:%M") {
            return naive.get_datetime_range();
        }
        NaiveDate::parse_from_str(self, "%Y-%m-%d")
            .ok()
            .and_then(day_period)
    }
}

impl AnyDateTime for String {
    fn get_datetime_range(self) -> Option<Period> {
        self.as_str().get_datetime_range()
    }
}

impl AnyDateTime for Year {
    fn get_datetime_range(self) -> Option<Period> {
        Some(Period {
            start: day_period(NaiveDate::from_ymd_opt(self.0, 1, 1)?)?.start,
            end: day_period(NaiveDate::from_ymd_opt(self.0, 12, 31)?)?.end,
        })
    }
}

impl AnyDateTime for Month {
    fn get_datetime_range(self) -> Option<Period> {
        let first = NaiveDate::from_ymd_opt(self.year(), self.month(), 1)?;
        let next = if self.month() == 12 {
            NaiveDate::from_ymd_opt(self.year().checked_add(1)?, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(self.year(), self.month() + 1, 1)?
        };
        let last = next - Duration::days(1);
        Some(Period {
            start: day_period(first)?.start,
            end: day_period(last)?.end,
        })
    }
}
