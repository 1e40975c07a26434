use gloo_net::http::Request;
use shared::constants::KICK_CHANNEL_URL;
use shared::live_status::LiveStatus;
use shared::{FeedKind, FeedPage, LeaderboardError, Pagination, TimeWindow};

use crate::config::get_api_base_url;

async fn get_text(url: &str) -> Result<String, LeaderboardError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| LeaderboardError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(LeaderboardError::Network(format!(
            "HTTP {} from {}",
            response.status(),
            url
        )));
    }

    response
        .text()
        .await
        .map_err(|e| LeaderboardError::Decode(e.to_string()))
}

/// Rows for `window`, in the order the feed ranked them.
pub async fn fetch_leaderboard(
    feed: FeedKind,
    window: &TimeWindow,
    pagination: Pagination,
) -> Result<FeedPage, LeaderboardError> {
    let url = feed.endpoint(&get_api_base_url(), window, pagination);
    log::info!("Fetching {} leaderboard: {}", feed.slug(), url);

    let body = get_text(&url).await?;
    feed.decode_page(&body)
}

pub async fn fetch_live_status() -> Result<LiveStatus, LeaderboardError> {
    let body = get_text(KICK_CHANNEL_URL).await?;
    LiveStatus::from_channel_json(&body)
}
