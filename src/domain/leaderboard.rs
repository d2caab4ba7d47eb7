//! Leaderboard rows returned by `/api/leaderboard` and `/api/historico`

use serde::{Deserialize, Serialize};

use super::rank::Elo;

/// One agent's standing. Position is implied by the index in the list,
/// which the server already sorts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "pontos")]
    pub score: i64,

    #[serde(rename = "elo")]
    pub rank: Elo,
}

impl LeaderboardEntry {
    pub fn new(name: impl Into<String>, score: i64, rank: impl Into<Elo>) -> Self {
        Self {
            name: name.into(),
            score,
            rank: rank.into(),
        }
    }
}
