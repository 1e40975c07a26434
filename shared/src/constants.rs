use std::time::Duration;

pub const DATA_API_BASE_URL: &str = "https://misterteedata-production.up.railway.app";
pub const DEV_DATA_API_BASE_URL: &str = "http://localhost:3000";
pub const KICK_CHANNEL_URL: &str = "https://kick.com/api/v2/channels/MisterTee";

pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(60);
pub const DEFAULT_REFRESH_COOLDOWN: Duration = Duration::from_secs(5 * 60);
pub const FAST_REFRESH_INTERVAL: Duration = Duration::from_secs(30);
pub const LIVE_STATUS_INTERVAL: Duration = Duration::from_secs(60);
pub const COUNTDOWN_TICK: Duration = Duration::from_secs(1);

pub const DEFAULT_MAX_ROWS: usize = 10;
pub const DEFAULT_GIVEAWAY_MAX_PARTICIPANTS: u32 = 100;

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

pub const LAST_FETCH_KEY_PREFIX: &str = "leaderboard:last_fetch";
pub const ENDED_MESSAGE: &str = "Leaderboard period has ended.";
