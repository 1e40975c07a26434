use serde::Deserialize;

use crate::error::LeaderboardError;

#[derive(Debug, Deserialize)]
struct Livestream {
    #[serde(default)]
    viewer_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct ChannelResponse {
    #[serde(default)]
    livestream: Option<Livestream>,
}

/// Streamer badge state shown in the navbar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LiveStatus {
    pub is_live: bool,
    pub viewer_count: Option<u64>,
}

impl LiveStatus {
    pub fn from_channel_json(body: &str) -> Result<Self, LeaderboardError> {
        let channel: ChannelResponse = serde_json::from_str(body)?;
        Ok(match channel.livestream {
            Some(stream) => Self {
                is_live: true,
                viewer_count: stream.viewer_count,
            },
            None => Self::default(),
        })
    }

    pub fn badge(&self) -> Option<String> {
        if !self.is_live {
            return None;
        }
        Some(match self.viewer_count {
            Some(count) => format!("LIVE ({})", count),
            None => "LIVE".to_string(),
        })
    }
}
