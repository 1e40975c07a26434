use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::MS_PER_DAY;
use crate::error::LeaderboardError;

/// Active range of a leaderboard. `end` is inclusive at millisecond granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowPhase {
    Upcoming,
    Active,
    Closed,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, LeaderboardError> {
        if start > end {
            return Err(LeaderboardError::Config(format!(
                "window start {} is after end {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, now: DateTime<Utc>) -> bool {
        self.start <= now && now <= self.end
    }

    pub fn phase(&self, now: DateTime<Utc>) -> WindowPhase {
        if now < self.start {
            WindowPhase::Upcoming
        } else if now > self.end {
            WindowPhase::Closed
        } else {
            WindowPhase::Active
        }
    }

    pub fn length_ms(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_milliseconds()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarUnit {
    Week,
    Month,
}

/// How a feed's window is derived from the current time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PeriodConfig {
    Fixed {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    /// `period_length_days` active days followed by `gap_days` idle days, tiled from `anchor`.
    Recurring {
        anchor: DateTime<Utc>,
        period_length_days: u32,
        #[serde(default)]
        gap_days: u32,
    },
    /// Aligned to a UTC calendar boundary. `week_start_day` counts from Sunday = 0.
    Calendar {
        unit: CalendarUnit,
        #[serde(default)]
        week_start_day: u8,
    },
}

impl PeriodConfig {
    pub fn fixed(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, LeaderboardError> {
        let config = Self::Fixed { start, end };
        config.validate()?;
        Ok(config)
    }

    pub fn recurring(
        anchor: DateTime<Utc>,
        period_length_days: u32,
        gap_days: u32,
    ) -> Result<Self, LeaderboardError> {
        let config = Self::Recurring {
            anchor,
            period_length_days,
            gap_days,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn weekly(week_start_day: u8) -> Result<Self, LeaderboardError> {
        let config = Self::Calendar {
            unit: CalendarUnit::Week,
            week_start_day,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn monthly() -> Self {
        Self::Calendar {
            unit: CalendarUnit::Month,
            week_start_day: 0,
        }
    }

    pub fn validate(&self) -> Result<(), LeaderboardError> {
        match self {
            Self::Fixed { start, end } => TimeWindow::new(*start, *end).map(|_| ()),
            Self::Recurring {
                period_length_days, ..
            } if *period_length_days == 0 => Err(LeaderboardError::Config(
                "period_length_days must be at least 1".to_string(),
            )),
            Self::Recurring { .. } => Ok(()),
            Self::Calendar { week_start_day, .. } if *week_start_day > 6 => {
                Err(LeaderboardError::Config(format!(
                    "week_start_day must be in 0..=6, got {}",
                    week_start_day
                )))
            }
            Self::Calendar { .. } => Ok(()),
        }
    }

    /// The window in effect at `now`.
    pub fn window_at(&self, now: DateTime<Utc>) -> Result<TimeWindow, LeaderboardError> {
        self.window_with_offset(now, 0)
    }

    /// The window `offset` whole periods away from the one in effect at `now`.
    /// Recurring windows never move before the first cycle; fixed windows ignore the offset.
    pub fn window_with_offset(
        &self,
        now: DateTime<Utc>,
        offset: i32,
    ) -> Result<TimeWindow, LeaderboardError> {
        self.validate()?;

        let window = match self {
            Self::Fixed { start, end } => TimeWindow::new(*start, *end)?,
            Self::Recurring {
                anchor,
                period_length_days,
                gap_days,
            } => recurring_window(*anchor, *period_length_days, *gap_days, now, offset)?,
            Self::Calendar {
                unit: CalendarUnit::Week,
                week_start_day,
            } => week_window(*week_start_day, now, offset)?,
            Self::Calendar {
                unit: CalendarUnit::Month,
                ..
            } => month_window(now, offset)?,
        };

        log::debug!(
            "Resolved window {} .. {} (offset {})",
            window.start,
            window.end,
            offset
        );
        Ok(window)
    }
}

fn recurring_window(
    anchor: DateTime<Utc>,
    period_length_days: u32,
    gap_days: u32,
    now: DateTime<Utc>,
    offset: i32,
) -> Result<TimeWindow, LeaderboardError> {
    let cycle_ms = (i64::from(period_length_days) + i64::from(gap_days)) * MS_PER_DAY;
    let elapsed_ms = now.signed_duration_since(anchor).num_milliseconds().max(0);
    let cycles = (elapsed_ms / cycle_ms + i64::from(offset)).max(0);

    let start_offset = cycles.checked_mul(cycle_ms).ok_or_else(out_of_range)?;
    let start = add_ms(anchor, start_offset)?;
    let end = add_ms(start, i64::from(period_length_days) * MS_PER_DAY - 1)?;
    TimeWindow::new(start, end)
}

fn week_window(
    week_start_day: u8,
    now: DateTime<Utc>,
    offset: i32,
) -> Result<TimeWindow, LeaderboardError> {
    let today = midnight(now.date_naive())?;
    let days_back = (now.weekday().num_days_from_sunday() + 7 - u32::from(week_start_day)) % 7;
    let shift_days = i64::from(offset) * 7 - i64::from(days_back);

    let start = add_ms(today, shift_days * MS_PER_DAY)?;
    let end = add_ms(start, 7 * MS_PER_DAY - 1)?;
    TimeWindow::new(start, end)
}

fn month_window(now: DateTime<Utc>, offset: i32) -> Result<TimeWindow, LeaderboardError> {
    let (year, month) = shift_month(now.year(), now.month(), offset);
    let start = month_start(year, month)?;

    // Last instant of the month is one tick before day 1 of the next.
    let (next_year, next_month) = shift_month(year, month, 1);
    let end = add_ms(month_start(next_year, next_month)?, -1)?;
    TimeWindow::new(start, end)
}

fn shift_month(year: i32, month: u32, offset: i32) -> (i32, u32) {
    let total = year * 12 + (month as i32 - 1) + offset;
    (total.div_euclid(12), total.rem_euclid(12) as u32 + 1)
}

fn month_start(year: i32, month: u32) -> Result<DateTime<Utc>, LeaderboardError> {
    let date = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(out_of_range)?;
    midnight(date)
}

fn midnight(date: NaiveDate) -> Result<DateTime<Utc>, LeaderboardError> {
    date.and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc())
        .ok_or_else(out_of_range)
}

fn add_ms(instant: DateTime<Utc>, ms: i64) -> Result<DateTime<Utc>, LeaderboardError> {
    instant
        .checked_add_signed(Duration::milliseconds(ms))
        .ok_or_else(out_of_range)
}

fn out_of_range() -> LeaderboardError {
    LeaderboardError::Config("window falls outside the supported date range".to_string())
}
