//! Party clock mapping ticks onto a time of day
//!
//! The party takes place on the evening of 2020-05-01. Only the time of day
//! carries meaning; the day offset just counts how many midnights the party
//! has run past.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::config::ClockConfig;
use crate::core::types::Tick;

const MINUTES_PER_DAY: u64 = 24 * 60;

/// Simulated wall-clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SimTime {
    /// Days elapsed since the party started
    pub day_offset: u64,
    pub hour: u32,
    pub minute: u32,
}

impl SimTime {
    /// 12-hour rendering, e.g. `06:10 PM`
    pub fn to_12_hour(&self) -> String {
        let suffix = if self.hour < 12 { "AM" } else { "PM" };
        let hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{:02}:{:02} {}", hour, self.minute, suffix)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Converts ticks to simulated time at a fixed number of minutes per tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartyClock {
    minutes_per_tick: u32,
    start_minute_of_day: u64,
}

impl PartyClock {
    pub fn new(config: &ClockConfig) -> Self {
        Self {
            minutes_per_tick: config.minutes_per_tick,
            start_minute_of_day: config.start_hour as u64 * 60 + config.start_minute as u64,
        }
    }

    pub fn time_at(&self, tick: Tick) -> SimTime {
        let total = self.start_minute_of_day + tick.saturating_mul(self.minutes_per_tick as u64);
        let minute_of_day = total % MINUTES_PER_DAY;
        SimTime {
            day_offset: total / MINUTES_PER_DAY,
            hour: (minute_of_day / 60) as u32,
            minute: (minute_of_day % 60) as u32,
        }
    }
}

impl Default for PartyClock {
    fn default() -> Self {
        Self::new(&ClockConfig::default())
    }
}
