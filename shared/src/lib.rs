pub mod constants;
pub mod countdown;
pub mod error;
pub mod feeds;
pub mod format;
pub mod giveaway;
pub mod leaderboard;
pub mod live_status;
pub mod period;
pub mod prize;
pub mod refresh;

pub use countdown::{countdown, CountdownState};
pub use error::LeaderboardError;
pub use feeds::{FeedKind, FeedPage, Pagination};
pub use leaderboard::{LeaderboardPresenter, LeaderboardRow, LeaderboardSnapshot, RankedRow};
pub use period::{CalendarUnit, PeriodConfig, TimeWindow, WindowPhase};
pub use prize::{Prize, PrizeTable};
pub use refresh::{FeedState, RefreshDecision, RefreshPolicy};
