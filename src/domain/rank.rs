//! Rank tiers ("elo")
//!
//! The server reports a rank as a lowercase identifier. Nine of them are known
//! tiers with their own badge glow; anything else (e.g. `"unranked"`) is kept
//! verbatim so the badge path can still be formed from it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the nine ordered rank tiers, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankTier {
    Iron,
    Bronze,
    Gold,
    Diamond,
    Mistico,
    Master,
    Grandmaster,
    Legend,
    Devil,
}

impl RankTier {
    /// All tiers in ascending order
    pub const ALL: [RankTier; 9] = [
        RankTier::Iron,
        RankTier::Bronze,
        RankTier::Gold,
        RankTier::Diamond,
        RankTier::Mistico,
        RankTier::Master,
        RankTier::Grandmaster,
        RankTier::Legend,
        RankTier::Devil,
    ];

    /// Identifier used by the API and by the badge asset names
    pub fn id(self) -> &'static str {
        match self {
            RankTier::Iron => "iron",
            RankTier::Bronze => "bronze",
            RankTier::Gold => "gold",
            RankTier::Diamond => "diamond",
            RankTier::Mistico => "mistico",
            RankTier::Master => "master",
            RankTier::Grandmaster => "grandmaster",
            RankTier::Legend => "legend",
            RankTier::Devil => "devil",
        }
    }

    /// Parse an API identifier (case-insensitive)
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::ALL
            .into_iter()
            .find(|tier| tier.id().eq_ignore_ascii_case(id))
    }
}

impl fmt::Display for RankTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// A rank exactly as the server sent it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Elo(String);

impl Elo {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Raw identifier, used for asset paths
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The known tier, if this identifier names one
    pub fn tier(&self) -> Option<RankTier> {
        RankTier::from_id(&self.0)
    }

    /// Upper-cased label for display
    pub fn label(&self) -> String {
        self.0.to_uppercase()
    }
}

impl From<RankTier> for Elo {
    fn from(tier: RankTier) -> Self {
        Self(tier.id().to_string())
    }
}

impl From<&str> for Elo {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl fmt::Display for Elo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers_are_ordered() {
        assert!(RankTier::Iron < RankTier::Bronze);
        assert!(RankTier::Legend < RankTier::Devil);
        assert_eq!(RankTier::ALL.first(), Some(&RankTier::Iron));
        assert_eq!(RankTier::ALL.last(), Some(&RankTier::Devil));
    }

    #[test]
    fn test_from_id() {
        assert_eq!(RankTier::from_id("gold"), Some(RankTier::Gold));
        assert_eq!(RankTier::from_id(" MISTICO "), Some(RankTier::Mistico));
        assert_eq!(RankTier::from_id("unranked"), None);
        assert_eq!(RankTier::from_id(""), None);
    }

    #[test]
    fn test_unknown_elo_keeps_raw_identifier() {
        let elo: Elo = serde_json::from_str("\"unranked\"").unwrap();
        assert_eq!(elo.tier(), None);
        assert_eq!(elo.as_str(), "unranked");
        assert_eq!(elo.label(), "UNRANKED");
    }

    #[test]
    fn test_known_elo() {
        let elo = Elo::from(RankTier::Grandmaster);
        assert_eq!(elo.tier(), Some(RankTier::Grandmaster));
        assert_eq!(elo.label(), "GRANDMASTER");
    }
}
