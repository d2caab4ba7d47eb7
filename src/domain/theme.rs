//! Presentation state: theme and active tab

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary presentation mode
///
/// `Role` shows the organizational role label and is the default. `Rank` shows
/// the rank tier and is the only theme in which milestone videos play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Role,
    Rank,
}

impl Theme {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Role => Theme::Rank,
            Theme::Rank => Theme::Role,
        }
    }

    /// Whether milestone videos may play in this theme
    pub fn is_celebratory(self) -> bool {
        matches!(self, Theme::Rank)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Role => "role",
            Theme::Rank => "rank",
        }
    }

    /// Parse a persisted value. Anything unrecognised falls back to `Role`.
    pub fn from_persisted(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("rank") => Theme::Rank,
            _ => Theme::Role,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "role" => Ok(Theme::Role),
            "rank" => Ok(Theme::Rank),
            other => Err(format!("Unknown theme: {} (expected 'role' or 'rank')", other)),
        }
    }
}

/// Dashboard panels. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Profile,
    Leaderboard,
    History,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Profile, Tab::Leaderboard, Tab::History];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Profile => "PROFILE",
            Tab::Leaderboard => "RANKING",
            Tab::History => "HISTORY",
        }
    }
}
