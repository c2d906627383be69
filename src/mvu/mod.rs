pub mod error;
pub mod leaderboard;
pub mod runtime;
pub mod updates;
