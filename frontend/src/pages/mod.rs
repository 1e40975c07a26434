pub mod giveaways;
pub mod home;
pub mod leaderboard;
