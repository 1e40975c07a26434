use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::countdown::{countdown, CountdownState};
use crate::error::LeaderboardError;
use crate::period::{PeriodConfig, TimeWindow};
use crate::prize::{Prize, PrizeTable};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    pub rank: u32,
    pub display_name: String,
    #[serde(default)]
    pub metrics: BTreeMap<String, f64>,
}

impl LeaderboardRow {
    pub fn new(rank: u32, display_name: impl Into<String>) -> Self {
        Self {
            rank,
            display_name: display_name.into(),
            metrics: BTreeMap::new(),
        }
    }

    pub fn with_metric(mut self, name: &str, value: f64) -> Self {
        self.metrics.insert(name.to_string(), value);
        self
    }

    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRow {
    pub row: LeaderboardRow,
    pub prize: Option<Prize>,
}

/// Read-only view handed to rendering code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardSnapshot {
    pub window: TimeWindow,
    pub countdown: CountdownState,
    pub ranked_rows: Vec<RankedRow>,
    pub total_prize_pool: u64,
    pub disclosure: Option<String>,
}

impl LeaderboardSnapshot {
    /// Same snapshot with the countdown recomputed for `now`.
    pub fn at(&self, now: DateTime<Utc>) -> Self {
        Self {
            countdown: countdown(now, self.window.end),
            ..self.clone()
        }
    }
}

/// Ranks must start at 1 and strictly increase; the feed is trusted for ordering, never re-sorted.
pub fn check_rank_order(rows: &[LeaderboardRow]) -> Result<(), LeaderboardError> {
    let mut previous = 0u32;
    for row in rows {
        if row.rank == 0 {
            return Err(LeaderboardError::MalformedData(format!(
                "row '{}' has rank 0",
                row.display_name
            )));
        }
        if row.rank == previous {
            return Err(LeaderboardError::MalformedData(format!(
                "duplicate rank {}",
                row.rank
            )));
        }
        if row.rank < previous {
            return Err(LeaderboardError::MalformedData(format!(
                "rank {} follows rank {}",
                row.rank, previous
            )));
        }
        previous = row.rank;
    }
    Ok(())
}

/// Composes window, countdown and prize lookup for one feed. One instance per page.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardPresenter {
    period: PeriodConfig,
    prizes: PrizeTable,
    max_rows: usize,
}

impl LeaderboardPresenter {
    pub fn new(
        period: PeriodConfig,
        prizes: PrizeTable,
        max_rows: usize,
    ) -> Result<Self, LeaderboardError> {
        period.validate()?;
        Ok(Self {
            period,
            prizes,
            max_rows,
        })
    }

    pub fn period(&self) -> &PeriodConfig {
        &self.period
    }

    pub fn prizes(&self) -> &PrizeTable {
        &self.prizes
    }

    pub fn window(&self, now: DateTime<Utc>, offset: i32) -> Result<TimeWindow, LeaderboardError> {
        self.period.window_with_offset(now, offset)
    }

    pub fn present(
        &self,
        rows: Vec<LeaderboardRow>,
        disclosure: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<LeaderboardSnapshot, LeaderboardError> {
        self.present_with_offset(rows, disclosure, now, 0)
    }

    pub fn present_with_offset(
        &self,
        rows: Vec<LeaderboardRow>,
        disclosure: Option<String>,
        now: DateTime<Utc>,
        offset: i32,
    ) -> Result<LeaderboardSnapshot, LeaderboardError> {
        if let Err(err) = check_rank_order(&rows) {
            log::warn!("Rejecting leaderboard rows: {}", err);
            return Err(err);
        }

        let window = self.window(now, offset)?;
        let total_prize_pool = self
            .prizes
            .total_for(rows.iter().map(|row| i64::from(row.rank)));

        let ranked_rows = rows
            .into_iter()
            .take(self.max_rows)
            .map(|row| {
                let prize = self.prizes.resolve(i64::from(row.rank)).cloned();
                RankedRow { row, prize }
            })
            .collect();

        Ok(LeaderboardSnapshot {
            window,
            countdown: countdown(now, window.end),
            ranked_rows,
            total_prize_pool,
            disclosure,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    fn row(rank: u32) -> LeaderboardRow {
        LeaderboardRow::new(rank, format!("player{}", rank))
            .with_metric("wagered", 1000.0 / rank as f64)
    }

    fn presenter(max_rows: usize) -> LeaderboardPresenter {
        let period = PeriodConfig::recurring(utc("2025-11-10T00:00:00Z"), 7, 1).unwrap();
        let prizes = PrizeTable::from_amounts(&[500, 200, 100]);
        LeaderboardPresenter::new(period, prizes, max_rows).unwrap()
    }

    #[test]
    fn test_prizes_and_pool() {
        let snapshot = presenter(10)
            .present(vec![row(1), row(2), row(4)], None, utc("2025-11-12T12:00:00Z"))
            .unwrap();

        let prizes: Vec<_> = snapshot
            .ranked_rows
            .iter()
            .map(|ranked| ranked.prize.as_ref().map(|prize| prize.amount))
            .collect();
        assert_eq!(prizes, vec![Some(500), Some(200), None]);
        assert_eq!(snapshot.total_prize_pool, 700);
        assert_eq!(snapshot.window.start, utc("2025-11-10T00:00:00Z"));
        assert_eq!(snapshot.window.end, utc("2025-11-16T23:59:59.999Z"));
        assert!(!snapshot.countdown.is_ended());
    }

    #[test]
    fn test_truncates_without_reordering() {
        let snapshot = presenter(2)
            .present(vec![row(1), row(2), row(3)], None, utc("2025-11-12T12:00:00Z"))
            .unwrap();
        let ranks: Vec<_> = snapshot.ranked_rows.iter().map(|r| r.row.rank).collect();
        assert_eq!(ranks, vec![1, 2]);
        // Pool still covers every fetched row.
        assert_eq!(snapshot.total_prize_pool, 800);
    }

    #[test]
    fn test_rejects_malformed_ranks() {
        let now = utc("2025-11-12T12:00:00Z");
        let p = presenter(10);
        for rows in [
            vec![row(2), row(1)],
            vec![row(1), row(1)],
            vec![row(0), row(1)],
        ] {
            assert!(matches!(
                p.present(rows, None, now),
                Err(LeaderboardError::MalformedData(_))
            ));
        }
    }

    #[test]
    fn test_empty_rows() {
        let snapshot = presenter(10)
            .present(Vec::new(), Some("18+ only".to_string()), utc("2025-11-12T12:00:00Z"))
            .unwrap();
        assert!(snapshot.ranked_rows.is_empty());
        assert_eq!(snapshot.total_prize_pool, 0);
        assert_eq!(snapshot.disclosure.as_deref(), Some("18+ only"));
    }

    #[test]
    fn test_snapshot_countdown_refresh() {
        let snapshot = presenter(10)
            .present(vec![row(1)], None, utc("2025-11-12T12:00:00Z"))
            .unwrap();
        let later = snapshot.at(utc("2025-11-17T00:00:00Z"));
        assert!(later.countdown.is_ended());
        assert_eq!(later.ranked_rows, snapshot.ranked_rows);
    }

    #[test]
    fn test_invalid_period_fails_at_construction() {
        let period = PeriodConfig::Recurring {
            anchor: utc("2025-11-10T00:00:00Z"),
            period_length_days: 0,
            gap_days: 0,
        };
        assert!(LeaderboardPresenter::new(period, PrizeTable::empty(), 10).is_err());
    }
}
