//! Core domain types for the Aura Points dashboard

mod history;
mod leaderboard;
mod profile;
mod rank;
mod theme;

pub use history::{HistoricalQuery, Month, QueryError, selectable_years};
pub use leaderboard::LeaderboardEntry;
pub use profile::ProfileSnapshot;
pub use rank::{Elo, RankTier};
pub use theme::{Tab, Theme};
