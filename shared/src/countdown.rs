use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{ENDED_MESSAGE, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountdownState {
    Remaining {
        days: i64,
        hours: u32,
        minutes: u32,
        seconds: u32,
    },
    Ended,
}

/// Time left until `end`, truncated to whole units. Recomputed on every tick.
pub fn countdown(now: DateTime<Utc>, end: DateTime<Utc>) -> CountdownState {
    if now >= end {
        return CountdownState::Ended;
    }

    let diff = end.signed_duration_since(now).num_milliseconds();
    CountdownState::Remaining {
        days: diff / MS_PER_DAY,
        hours: ((diff % MS_PER_DAY) / MS_PER_HOUR) as u32,
        minutes: ((diff % MS_PER_HOUR) / MS_PER_MINUTE) as u32,
        seconds: ((diff % MS_PER_MINUTE) / MS_PER_SECOND) as u32,
    }
}

impl CountdownState {
    pub fn is_ended(&self) -> bool {
        matches!(self, Self::Ended)
    }

    /// `HH:MM:SS` with days folded into the hour count.
    pub fn clock(&self) -> String {
        match self {
            Self::Remaining {
                days,
                hours,
                minutes,
                seconds,
            } => format!(
                "{:02}:{:02}:{:02}",
                days * 24 + i64::from(*hours),
                minutes,
                seconds
            ),
            Self::Ended => "00:00:00".to_string(),
        }
    }
}

impl fmt::Display for CountdownState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remaining {
                days,
                hours,
                minutes,
                seconds,
            } => write!(f, "{}d {}h {}m {}s", days, hours, minutes, seconds),
            Self::Ended => f.write_str(ENDED_MESSAGE),
        }
    }
}
