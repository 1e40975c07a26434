//! Response shapes of the affiliate data API, one per platform.

use serde::Deserialize;

use crate::leaderboard::LeaderboardRow;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RoobetPlayer {
    pub username: String,
    #[serde(default)]
    pub wagered: f64,
    #[serde(default)]
    pub weighted_wagered: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RoobetResponse {
    #[serde(default)]
    pub disclosure: Option<String>,
    #[serde(default)]
    pub data: Vec<RoobetPlayer>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CsgoWinEntry {
    pub name: String,
    #[serde(default)]
    pub wagered: f64,
    #[serde(default)]
    pub deposited: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CsgoWinResponse {
    #[serde(default)]
    pub data: Vec<CsgoWinEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ClashPlayer {
    pub name: String,
    #[serde(default)]
    pub wagered: f64,
    #[serde(default)]
    pub deposits: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PackdrawEntry {
    pub username: String,
    #[serde(default)]
    pub wager_amount: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PackdrawResponse {
    #[serde(default)]
    pub leaderboard: Vec<PackdrawEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RainUser {
    pub username: String,
    #[serde(default)]
    pub wagered: f64,
    #[serde(default)]
    pub deposited: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RainResponse {
    #[serde(default)]
    pub results: Vec<RainUser>,
}

/// Feeds arrive sorted; rank is the 1-based position.
pub(crate) fn rank_by_position<T, F>(entries: Vec<T>, to_row: F) -> Vec<LeaderboardRow>
where
    F: Fn(u32, T) -> LeaderboardRow,
{
    (1u32..)
        .zip(entries)
        .map(|(rank, entry)| to_row(rank, entry))
        .collect()
}
