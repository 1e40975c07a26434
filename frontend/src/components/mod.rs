pub mod countdown_display;
pub mod footer;
pub mod giveaway_card;
pub mod leaderboard_table;
pub mod navbar;

pub use countdown_display::CountdownDisplay;
pub use footer::Footer;
pub use giveaway_card::GiveawayCard;
pub use leaderboard_table::LeaderboardTable;
pub use navbar::Navbar;
