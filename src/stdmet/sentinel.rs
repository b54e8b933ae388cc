//! Missing-value markers per record layout.
//!
//! Archive files write an out-of-range number in place of a missing reading,
//! and the number depends on the channel. The realtime feed writes `MM` for
//! every channel.

use crate::types::channel::Channel;
use crate::types::dataset::RecordLayout;

/// How a missing reading is written in a file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sentinel {
    /// The token parses to exactly this number (`99.0` also matches `99.00`).
    Value(f64),
    /// The token is exactly this text.
    Token(&'static str),
}

pub const DIRECTION_MISSING: f64 = 999.0;
pub const PRESSURE_MISSING: f64 = 9999.0;
pub const MEASUREMENT_MISSING: f64 = 99.0;
pub const REALTIME_MISSING: &str = "MM";

/// Sentinel used by `layout` for `channel`.
pub fn sentinel_for(layout: RecordLayout, channel: Channel) -> Sentinel {
    match layout {
        RecordLayout::Realtime => Sentinel::Token(REALTIME_MISSING),
        RecordLayout::Historical(_) | RecordLayout::Recent(_) => match channel {
            c if c.is_direction() => Sentinel::Value(DIRECTION_MISSING),
            Channel::Pressure => Sentinel::Value(PRESSURE_MISSING),
            _ => Sentinel::Value(MEASUREMENT_MISSING),
        },
    }
}

impl Sentinel {
    /// Whether `token`, already parsed to `value` when numeric, marks a missing reading.
    pub fn matches(&self, token: &str, value: Option<f64>) -> bool {
        match self {
            Sentinel::Token(t) => token == *t,
            Sentinel::Value(v) => value == Some(*v),
        }
    }
}
