mod wire;

use chrono::{NaiveDate, SecondsFormat};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_ROWS, FAST_REFRESH_INTERVAL};
use crate::error::LeaderboardError;
use crate::leaderboard::{LeaderboardPresenter, LeaderboardRow};
use crate::period::{PeriodConfig, TimeWindow};
use crate::prize::PrizeTable;
use crate::refresh::RefreshPolicy;

use wire::*;

pub const METRIC_WAGERED: &str = "wagered";
pub const METRIC_WEIGHTED_WAGERED: &str = "weighted_wagered";
pub const METRIC_DEPOSITED: &str = "deposited";
pub const METRIC_WAGERED_GEMS: &str = "wagered_gems";

const ROOBET_PRIZES: [u64; 7] = [600, 300, 175, 75, 50, 25, 25];
const CLASH_PRIZES: [u64; 10] = [500, 200, 100, 75, 50, 25, 20, 15, 10, 5];
const CLASH_CYCLE_DAYS: u32 = 14;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub take: u32,
    pub skip: u32,
}

impl Pagination {
    pub fn first(take: u32) -> Self {
        Self { take, skip: 0 }
    }
}

/// Rows plus the optional disclosure text some platforms attach.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedPage {
    pub rows: Vec<LeaderboardRow>,
    pub disclosure: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricColumn {
    pub key: &'static str,
    pub label: &'static str,
    pub currency: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedKind {
    Roobet,
    CsgoWin,
    Clash,
    Packdraw,
    Rain,
}

impl FeedKind {
    pub const ALL: [FeedKind; 5] = [
        FeedKind::Roobet,
        FeedKind::CsgoWin,
        FeedKind::Clash,
        FeedKind::Packdraw,
        FeedKind::Rain,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::Roobet => "roobet",
            Self::CsgoWin => "csgowin",
            Self::Clash => "clash",
            Self::Packdraw => "packdraw",
            Self::Rain => "rain",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|feed| feed.slug() == slug)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Roobet => "Roobet Leaderboard",
            Self::CsgoWin => "CSGOWin Leaderboard",
            Self::Clash => "Clash.gg Leaderboard",
            Self::Packdraw => "Packdraw Leaderboard",
            Self::Rain => "Rain.gg Leaderboard",
        }
    }

    pub fn period(&self) -> Result<PeriodConfig, LeaderboardError> {
        match self {
            Self::Roobet | Self::Packdraw | Self::Rain => Ok(PeriodConfig::monthly()),
            Self::CsgoWin => PeriodConfig::weekly(0),
            Self::Clash => {
                let anchor = NaiveDate::from_ymd_opt(2025, 12, 7)
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
                    .map(|naive| naive.and_utc())
                    .ok_or_else(|| LeaderboardError::Config("bad clash anchor".to_string()))?;
                PeriodConfig::recurring(anchor, CLASH_CYCLE_DAYS, 0)
            }
        }
    }

    pub fn prize_table(&self) -> PrizeTable {
        match self {
            Self::Roobet => PrizeTable::from_amounts(&ROOBET_PRIZES),
            Self::Clash => PrizeTable::from_amounts(&CLASH_PRIZES),
            Self::CsgoWin | Self::Packdraw | Self::Rain => PrizeTable::empty(),
        }
    }

    pub fn refresh_policy(&self) -> RefreshPolicy {
        match self {
            Self::Roobet => RefreshPolicy::new(FAST_REFRESH_INTERVAL, FAST_REFRESH_INTERVAL),
            _ => RefreshPolicy::default(),
        }
    }

    pub fn max_rows(&self) -> usize {
        match self {
            Self::CsgoWin | Self::Clash => DEFAULT_MAX_ROWS,
            Self::Roobet | Self::Packdraw | Self::Rain => 50,
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::first(self.max_rows() as u32)
    }

    /// Feeds whose page lets the viewer step to earlier or later periods.
    pub fn supports_paging(&self) -> bool {
        matches!(self, Self::Packdraw | Self::Rain)
    }

    pub fn columns(&self) -> &'static [MetricColumn] {
        const WAGERED: MetricColumn = MetricColumn {
            key: METRIC_WAGERED,
            label: "Wagered",
            currency: true,
        };
        const DEPOSITED: MetricColumn = MetricColumn {
            key: METRIC_DEPOSITED,
            label: "Deposited",
            currency: true,
        };
        match self {
            Self::Roobet => &[
                WAGERED,
                MetricColumn {
                    key: METRIC_WEIGHTED_WAGERED,
                    label: "Weighted Wagered",
                    currency: true,
                },
            ],
            Self::Clash => &[
                MetricColumn {
                    key: METRIC_WAGERED_GEMS,
                    label: "Wagered (Gems)",
                    currency: false,
                },
                DEPOSITED,
            ],
            Self::CsgoWin | Self::Rain => &[WAGERED, DEPOSITED],
            Self::Packdraw => &[WAGERED],
        }
    }

    pub fn presenter(&self) -> Result<LeaderboardPresenter, LeaderboardError> {
        LeaderboardPresenter::new(self.period()?, self.prize_table(), self.max_rows())
    }

    pub fn endpoint(&self, base_url: &str, window: &TimeWindow, pagination: Pagination) -> String {
        let day = |instant: &chrono::DateTime<chrono::Utc>| instant.format("%Y-%m-%d").to_string();
        let iso = |instant: &chrono::DateTime<chrono::Utc>| {
            instant.to_rfc3339_opts(SecondsFormat::Millis, true)
        };

        match self {
            Self::Roobet => format!(
                "{}/api/leaderboard/{}/{}",
                base_url,
                day(&window.start),
                day(&window.end)
            ),
            Self::CsgoWin => format!(
                "{}/api/leaderboard/csgowin?take={}&skip={}&startDate={}&endDate={}",
                base_url,
                pagination.take,
                pagination.skip,
                window.start.timestamp_millis(),
                window.end.timestamp_millis()
            ),
            Self::Clash => format!("{}/api/leaderboard/clash/{}", base_url, day(&window.start)),
            Self::Packdraw => format!("{}/api/packdraw?after={}", base_url, iso(&window.start)),
            Self::Rain => format!(
                "{}/rain?start_date={}&end_date={}&type=wagered",
                base_url,
                iso(&window.start),
                iso(&window.end)
            ),
        }
    }

    pub fn decode_page(&self, body: &str) -> Result<FeedPage, LeaderboardError> {
        let page = match self {
            Self::Roobet => {
                let response: RoobetResponse = serde_json::from_str(body)?;
                FeedPage {
                    rows: rank_by_position(response.data, |rank, player| {
                        LeaderboardRow::new(rank, player.username)
                            .with_metric(METRIC_WAGERED, player.wagered)
                            .with_metric(METRIC_WEIGHTED_WAGERED, player.weighted_wagered)
                    }),
                    disclosure: response.disclosure,
                }
            }
            Self::CsgoWin => {
                let response: CsgoWinResponse = serde_json::from_str(body)?;
                FeedPage {
                    rows: rank_by_position(response.data, |rank, entry| {
                        LeaderboardRow::new(rank, entry.name)
                            .with_metric(METRIC_WAGERED, entry.wagered)
                            .with_metric(METRIC_DEPOSITED, entry.deposited)
                    }),
                    disclosure: None,
                }
            }
            Self::Clash => {
                let players: Vec<ClashPlayer> = serde_json::from_str(body)?;
                FeedPage {
                    rows: rank_by_position(players, |rank, player| {
                        LeaderboardRow::new(rank, player.name)
                            .with_metric(METRIC_WAGERED, player.wagered)
                            .with_metric(METRIC_WAGERED_GEMS, player.wagered / 100.0)
                            .with_metric(METRIC_DEPOSITED, player.deposits)
                    }),
                    disclosure: None,
                }
            }
            Self::Packdraw => {
                let response: PackdrawResponse = serde_json::from_str(body)?;
                FeedPage {
                    rows: rank_by_position(response.leaderboard, |rank, entry| {
                        LeaderboardRow::new(rank, entry.username)
                            .with_metric(METRIC_WAGERED, entry.wager_amount)
                    }),
                    disclosure: None,
                }
            }
            Self::Rain => {
                let response: RainResponse = serde_json::from_str(body)?;
                FeedPage {
                    rows: rank_by_position(response.results, |rank, user| {
                        LeaderboardRow::new(rank, user.username)
                            .with_metric(METRIC_WAGERED, user.wagered)
                            .with_metric(METRIC_DEPOSITED, user.deposited)
                    }),
                    disclosure: None,
                }
            }
        };

        log::debug!("Decoded {} rows for {}", page.rows.len(), self.slug());
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refresh::RefreshDecision;
    use chrono::{DateTime, Utc};

    fn utc(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    const BASE: &str = "https://data.example";

    #[test]
    fn test_slug_round_trip() {
        for feed in FeedKind::ALL {
            assert_eq!(FeedKind::from_slug(feed.slug()), Some(feed));
        }
        assert_eq!(FeedKind::from_slug("stake"), None);
    }

    #[test]
    fn test_every_feed_has_valid_presenter() {
        for feed in FeedKind::ALL {
            assert!(feed.presenter().is_ok(), "{:?}", feed);
        }
    }

    #[test]
    fn test_clash_window_and_endpoint() {
        let feed = FeedKind::Clash;
        let window = feed
            .period()
            .unwrap()
            .window_at(utc("2025-12-25T09:00:00Z"))
            .unwrap();
        assert_eq!(window.start, utc("2025-12-21T00:00:00Z"));
        assert_eq!(
            feed.endpoint(BASE, &window, feed.pagination()),
            "https://data.example/api/leaderboard/clash/2025-12-21"
        );
        assert_eq!(feed.prize_table().resolve(10).map(|p| p.amount), Some(5));
        assert_eq!(feed.prize_table().resolve(11), None);
    }

    #[test]
    fn test_month_endpoints() {
        let window = PeriodConfig::monthly()
            .window_at(utc("2025-11-12T00:00:00Z"))
            .unwrap();
        let pagination = Pagination::default();

        assert_eq!(
            FeedKind::Roobet.endpoint(BASE, &window, pagination),
            "https://data.example/api/leaderboard/2025-11-01/2025-11-30"
        );
        assert_eq!(
            FeedKind::Packdraw.endpoint(BASE, &window, pagination),
            "https://data.example/api/packdraw?after=2025-11-01T00:00:00.000Z"
        );
        assert_eq!(
            FeedKind::Rain.endpoint(BASE, &window, pagination),
            "https://data.example/rain?start_date=2025-11-01T00:00:00.000Z&end_date=2025-11-30T23:59:59.999Z&type=wagered"
        );
    }

    #[test]
    fn test_csgowin_endpoint_uses_epoch_millis() {
        let feed = FeedKind::CsgoWin;
        let window = feed
            .period()
            .unwrap()
            .window_at(utc("2025-11-12T00:00:00Z"))
            .unwrap();
        let url = feed.endpoint(BASE, &window, Pagination { take: 10, skip: 20 });
        assert_eq!(
            url,
            format!(
                "https://data.example/api/leaderboard/csgowin?take=10&skip=20&startDate={}&endDate={}",
                utc("2025-11-09T00:00:00Z").timestamp_millis(),
                utc("2025-11-15T23:59:59.999Z").timestamp_millis()
            )
        );
    }

    #[test]
    fn test_each_feed_refetches_on_its_first_tick() {
        let attempted = utc("2025-11-12T12:00:00Z");
        let ok: Result<(), LeaderboardError> = Ok(());
        for feed in FeedKind::ALL {
            let policy = feed.refresh_policy();
            let last = RefreshPolicy::after_attempt(attempted, &ok, None);
            let tick = attempted + chrono::Duration::from_std(policy.interval).unwrap();
            let expected = if policy.interval >= policy.cooldown {
                RefreshDecision::Fetch
            } else {
                RefreshDecision::Skip
            };
            assert_eq!(policy.decide(tick, last, true), expected, "{:?}", feed);
        }
        // Roobet polls and cools down on the same 30 s beat.
        let roobet = FeedKind::Roobet.refresh_policy();
        let last = RefreshPolicy::after_attempt(attempted, &ok, None);
        assert_eq!(
            roobet.decide(attempted + chrono::Duration::seconds(30), last, true),
            RefreshDecision::Fetch
        );
    }

    #[test]
    fn test_decode_roobet() {
        let body = r#"{
            "disclosure": "Wagers are weighted by game RTP.",
            "data": [
                {"uid": "a", "username": "alpha", "wagered": 1500.5, "weightedWagered": 1200.0, "favoriteGameTitle": "Plinko"},
                {"uid": "b", "username": "bravo", "wagered": 900.0, "weightedWagered": 950.0}
            ]
        }"#;
        let page = FeedKind::Roobet.decode_page(body).unwrap();
        assert_eq!(page.disclosure.as_deref(), Some("Wagers are weighted by game RTP."));
        assert_eq!(page.rows.len(), 2);
        assert_eq!(page.rows[1].rank, 2);
        assert_eq!(page.rows[1].display_name, "bravo");
        assert_eq!(page.rows[0].metric(METRIC_WEIGHTED_WAGERED), Some(1200.0));
    }

    #[test]
    fn test_decode_clash_adds_gems() {
        let body = r#"[{"uid": "x", "name": "gem", "wagered": 25000, "deposits": 100}]"#;
        let page = FeedKind::Clash.decode_page(body).unwrap();
        assert_eq!(page.rows[0].metric(METRIC_WAGERED_GEMS), Some(250.0));
        assert_eq!(page.rows[0].metric(METRIC_DEPOSITED), Some(100.0));
    }

    #[test]
    fn test_decode_missing_array_is_empty() {
        assert!(FeedKind::Packdraw.decode_page("{}").unwrap().rows.is_empty());
        assert!(FeedKind::Rain.decode_page("{}").unwrap().rows.is_empty());
        assert!(FeedKind::CsgoWin.decode_page(r#"{"data": []}"#).unwrap().rows.is_empty());
    }

    #[test]
    fn test_decode_garbage_is_decode_error() {
        assert!(matches!(
            FeedKind::Rain.decode_page("<html>502</html>"),
            Err(LeaderboardError::Decode(_))
        ));
        assert!(matches!(
            FeedKind::Clash.decode_page(r#"{"error": "down"}"#),
            Err(LeaderboardError::Decode(_))
        ));
    }

    #[test]
    fn test_decoded_rows_present_cleanly() {
        let body = r#"{"leaderboard": [
            {"username": "one", "wagerAmount": 30},
            {"username": "two", "wagerAmount": 20},
            {"username": "three", "wagerAmount": 10}
        ]}"#;
        let page = FeedKind::Packdraw.decode_page(body).unwrap();
        let snapshot = FeedKind::Packdraw
            .presenter()
            .unwrap()
            .present(page.rows, page.disclosure, utc("2025-11-12T00:00:00Z"))
            .unwrap();
        assert_eq!(snapshot.ranked_rows.len(), 3);
        assert!(snapshot.ranked_rows.iter().all(|ranked| ranked.prize.is_none()));
    }
}
