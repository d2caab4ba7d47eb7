//! Client side of the Aura Points HTTP API
//!
//! The server is an external collaborator; this module only consumes its
//! contract:
//! - `GET /api/perfil/{id}` - profile of one agent, or `{error}`
//! - `GET /api/leaderboard` - current month's ranking
//! - `GET /api/historico?ano=Y&mes=M` - ranking of a past month

mod assets;
mod client;
mod error;
mod types;

pub use assets::AssetUrls;
pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use types::{ProfileResponse, RowsResponse, decode_profile, decode_rows};

use crate::domain::{HistoricalQuery, LeaderboardEntry};

/// The three endpoints the dashboard consumes.
///
/// Implementations are called from worker threads and must be shareable.
pub trait AuraApi: Send + Sync {
    /// Look up one agent's profile
    fn profile(&self, user_id: &str) -> Result<ProfileResponse, ApiError>;

    /// Current leaderboard, already sorted by the server
    fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ApiError>;

    /// Leaderboard of a past month (possibly empty)
    fn history(&self, query: HistoricalQuery) -> Result<Vec<LeaderboardEntry>, ApiError>;
}
