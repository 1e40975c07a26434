use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::constants::{DEFAULT_REFRESH_COOLDOWN, DEFAULT_REFRESH_INTERVAL, LAST_FETCH_KEY_PREFIX};
use crate::error::LeaderboardError;
use crate::period::TimeWindow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshDecision {
    Fetch,
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshPolicy {
    /// Period of the data-refresh timer.
    pub interval: Duration,
    /// Minimum time between two successful fetches of the same feed.
    pub cooldown: Duration,
}

impl Default for RefreshPolicy {
    fn default() -> Self {
        Self {
            interval: DEFAULT_REFRESH_INTERVAL,
            cooldown: DEFAULT_REFRESH_COOLDOWN,
        }
    }
}

impl RefreshPolicy {
    pub fn new(interval: Duration, cooldown: Duration) -> Self {
        Self { interval, cooldown }
    }

    /// `last_fetch_at` is only ever the time of a successful fetch, so a failed
    /// attempt never suppresses the next one. With nothing on screen we always fetch.
    pub fn decide(
        &self,
        now: DateTime<Utc>,
        last_fetch_at: Option<DateTime<Utc>>,
        has_data: bool,
    ) -> RefreshDecision {
        if !has_data {
            return RefreshDecision::Fetch;
        }
        let Some(last) = last_fetch_at else {
            return RefreshDecision::Fetch;
        };

        let elapsed_ms = now.signed_duration_since(last).num_milliseconds();
        let cooldown_ms = i64::try_from(self.cooldown.as_millis()).unwrap_or(i64::MAX);
        if (0..cooldown_ms).contains(&elapsed_ms) {
            RefreshDecision::Skip
        } else {
            RefreshDecision::Fetch
        }
    }

    /// Like [`decide`](Self::decide), but data shown for a window other than
    /// `expected` counts as no data, so a period rollover fetches at once.
    pub fn decide_for_window(
        &self,
        now: DateTime<Utc>,
        last_fetch_at: Option<DateTime<Utc>>,
        shown: Option<&TimeWindow>,
        expected: &TimeWindow,
    ) -> RefreshDecision {
        self.decide(now, last_fetch_at, shown == Some(expected))
    }

    /// The `lastFetchAt` to keep after an attempt started at `attempted_at`.
    /// Success records the attempt time; failure keeps `previous`.
    pub fn after_attempt<T, E>(
        attempted_at: DateTime<Utc>,
        result: &Result<T, E>,
        previous: Option<DateTime<Utc>>,
    ) -> Option<DateTime<Utc>> {
        match result {
            Ok(_) => Some(attempted_at),
            Err(_) => previous,
        }
    }
}

pub fn get_last_fetch_key(feed_slug: &str) -> String {
    format!("{}:{}", LAST_FETCH_KEY_PREFIX, feed_slug)
}

/// Per-page fetch lifecycle. Loading and Failed keep the last good data so a page
/// can keep showing it.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedState<T> {
    Idle,
    Loading { previous: Option<T> },
    Ready(T),
    Failed {
        error: LeaderboardError,
        previous: Option<T>,
    },
}

impl<T> Default for FeedState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> FeedState<T> {
    pub fn begin_refresh(self) -> Self {
        let previous = self.into_current();
        Self::Loading { previous }
    }

    /// Success replaces the data wholesale; failure leaves the previous data untouched.
    pub fn finish(self, result: Result<T, LeaderboardError>) -> Self {
        match result {
            Ok(data) => Self::Ready(data),
            Err(error) => Self::Failed {
                error,
                previous: self.into_current(),
            },
        }
    }

    pub fn current(&self) -> Option<&T> {
        match self {
            Self::Idle => None,
            Self::Ready(data) => Some(data),
            Self::Loading { previous } | Self::Failed { previous, .. } => previous.as_ref(),
        }
    }

    pub fn into_current(self) -> Option<T> {
        match self {
            Self::Idle => None,
            Self::Ready(data) => Some(data),
            Self::Loading { previous } | Self::Failed { previous, .. } => previous,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn error(&self) -> Option<&LeaderboardError> {
        match self {
            Self::Failed { error, .. } => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    fn window(start: &str, end: &str) -> TimeWindow {
        TimeWindow::new(utc(start), utc(end)).unwrap()
    }

    #[test]
    fn test_decide_respects_cooldown() {
        let policy = RefreshPolicy::new(Duration::from_secs(60), Duration::from_secs(300));
        let last = utc("2025-11-12T12:00:00Z");

        assert_eq!(
            policy.decide(utc("2025-11-12T12:04:59Z"), Some(last), true),
            RefreshDecision::Skip
        );
        assert_eq!(
            policy.decide(utc("2025-11-12T12:05:00Z"), Some(last), true),
            RefreshDecision::Fetch
        );
    }

    #[test]
    fn test_decide_fetches_without_data_or_history() {
        let policy = RefreshPolicy::default();
        let now = utc("2025-11-12T12:00:00Z");
        assert_eq!(policy.decide(now, Some(now), false), RefreshDecision::Fetch);
        assert_eq!(policy.decide(now, None, true), RefreshDecision::Fetch);
    }

    #[test]
    fn test_decide_fetches_when_clock_went_backwards() {
        let policy = RefreshPolicy::default();
        let decision = policy.decide(
            utc("2025-11-12T11:00:00Z"),
            Some(utc("2025-11-12T12:00:00Z")),
            true,
        );
        assert_eq!(decision, RefreshDecision::Fetch);
    }

    #[test]
    fn test_failed_attempt_keeps_last_fetch_and_retries() {
        let policy = RefreshPolicy::new(Duration::from_secs(60), Duration::from_secs(300));
        let last = utc("2025-11-12T12:00:00Z");
        let attempted = utc("2025-11-12T12:06:00Z");

        let failed: Result<(), LeaderboardError> =
            Err(LeaderboardError::Network("timeout".to_string()));
        let kept = RefreshPolicy::after_attempt(attempted, &failed, Some(last));
        assert_eq!(kept, Some(last));
        assert_eq!(
            policy.decide(utc("2025-11-12T12:07:00Z"), kept, true),
            RefreshDecision::Fetch
        );

        let first_failure = RefreshPolicy::after_attempt(attempted, &failed, None);
        assert_eq!(first_failure, None);
        assert_eq!(
            policy.decide(utc("2025-11-12T12:07:00Z"), first_failure, true),
            RefreshDecision::Fetch
        );
    }

    #[test]
    fn test_successful_attempt_records_start_time() {
        let policy = RefreshPolicy::new(Duration::from_secs(60), Duration::from_secs(300));
        let attempted = utc("2025-11-12T12:06:00Z");
        let ok: Result<u32, LeaderboardError> = Ok(1);

        let previous = Some(utc("2025-11-12T12:00:00Z"));
        let recorded = RefreshPolicy::after_attempt(attempted, &ok, previous);
        assert_eq!(recorded, Some(attempted));
        assert_eq!(
            policy.decide(utc("2025-11-12T12:07:00Z"), recorded, true),
            RefreshDecision::Skip
        );
    }

    #[test]
    fn test_period_rollover_bypasses_cooldown() {
        let policy = RefreshPolicy::default();
        let last = utc("2025-11-15T23:59:00Z");
        let now = utc("2025-11-16T00:01:00Z");
        let old = window("2025-11-09T00:00:00Z", "2025-11-15T23:59:59.999Z");
        let new = window("2025-11-16T00:00:00Z", "2025-11-22T23:59:59.999Z");

        assert_eq!(
            policy.decide_for_window(now, Some(last), Some(&old), &new),
            RefreshDecision::Fetch
        );
        assert_eq!(
            policy.decide_for_window(now, Some(last), Some(&new), &new),
            RefreshDecision::Skip
        );
        assert_eq!(
            policy.decide_for_window(now, Some(last), None, &new),
            RefreshDecision::Fetch
        );
    }

    #[test]
    fn test_state_transitions_keep_previous_data() {
        let state: FeedState<u32> = FeedState::default();
        let state = state.begin_refresh();
        assert!(state.is_loading());
        assert_eq!(state.current(), None);

        let state = state.finish(Ok(7));
        assert_eq!(state, FeedState::Ready(7));

        let state = state
            .begin_refresh()
            .finish(Err(LeaderboardError::Network("offline".to_string())));
        assert_eq!(state.current(), Some(&7));
        assert!(matches!(state.error(), Some(LeaderboardError::Network(_))));

        let state = state.begin_refresh().finish(Ok(9));
        assert_eq!(state.current(), Some(&9));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_last_fetch_key() {
        assert_eq!(get_last_fetch_key("clash"), "leaderboard:last_fetch:clash");
    }
}
