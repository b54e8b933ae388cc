use crate::types::channel::{Channel, CHANNEL_COUNT};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single time-stamped row of standard meteorological data.
///
/// Every channel is always present; a missing reading is stored as `f64::NAN`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub time: DateTime<Utc>,
    pub values: [f64; CHANNEL_COUNT],
}

impl Observation {
    /// Creates an observation with every channel missing.
    pub fn empty(time: DateTime<Utc>) -> Self {
        Self {
            time,
            values: [f64::NAN; CHANNEL_COUNT],
        }
    }

    pub fn get(&self, channel: Channel) -> f64 {
        self.values[channel.index()]
    }

    pub fn set(&mut self, channel: Channel, value: f64) {
        self.values[channel.index()] = value;
    }

    /// Returns the reading if it is not missing.
    pub fn value(&self, channel: Channel) -> Option<f64> {
        let v = self.get(channel);
        (!v.is_nan()).then_some(v)
    }
}
