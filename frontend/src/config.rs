use shared::constants::{DATA_API_BASE_URL, DEV_DATA_API_BASE_URL};
use web_sys::window;

/// Data API host for the leaderboard feeds. Local builds talk to the dev proxy.
pub fn get_api_base_url() -> String {
    if let Some(window) = window() {
        if let Ok(hostname) = window.location().hostname() {
            if hostname == "localhost" || hostname == "127.0.0.1" {
                return DEV_DATA_API_BASE_URL.to_string();
            }
        }
    }

    DATA_API_BASE_URL.to_string()
}
