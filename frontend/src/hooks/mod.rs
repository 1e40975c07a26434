pub mod polling;
pub mod use_clock;
pub mod use_leaderboard;
pub mod use_live_status;

pub use polling::PollingHandle;
pub use use_clock::*;
pub use use_leaderboard::*;
pub use use_live_status::*;
