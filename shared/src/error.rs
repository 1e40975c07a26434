use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LeaderboardError {
    #[error("invalid period configuration: {0}")]
    Config(String),
    #[error("malformed leaderboard data: {0}")]
    MalformedData(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to decode leaderboard: {0}")]
    Decode(String),
}

impl LeaderboardError {
    /// Short message shown in the page's error banner.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Config(_) => "This leaderboard is misconfigured.",
            Self::MalformedData(_) => "The leaderboard returned inconsistent rankings.",
            Self::Network(_) => "Network error. Please try again",
            Self::Decode(_) => "Failed to fetch leaderboard",
        }
    }
}

impl From<serde_json::Error> for LeaderboardError {
    fn from(err: serde_json::Error) -> Self {
        LeaderboardError::Decode(err.to_string())
    }
}
