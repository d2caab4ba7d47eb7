//! Profile snapshot returned by `/api/perfil/{id}`

use serde::{Deserialize, Serialize};

use super::rank::Elo;
use super::theme::Theme;

/// Everything the profile panel shows for the logged-in agent.
///
/// Replaced wholesale on every poll tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "elo")]
    pub rank: Elo,

    /// Organizational role, shown in the `Role` theme
    #[serde(rename = "cargo", default)]
    pub role_label: String,

    /// Closed tickets this month
    #[serde(rename = "total")]
    pub current_score: i64,

    /// Score that unlocks the next tier
    #[serde(rename = "meta")]
    pub milestone_target: i64,

    /// Celebratory video unlocked at exactly this score
    #[serde(rename = "video", default)]
    pub milestone_video: Option<String>,
}

impl ProfileSnapshot {
    /// Name normalised for display
    pub fn display_name(&self) -> String {
        self.name.to_uppercase()
    }

    /// Rank or role label, depending on the theme
    pub fn label(&self, theme: Theme) -> String {
        match theme {
            Theme::Rank => self.rank.label(),
            Theme::Role => self.role_label.to_uppercase(),
        }
    }

    /// `min(current / target, 1.0)`, clamped to `[0, 1]`.
    ///
    /// A non-positive target counts as reached.
    pub fn progress(&self) -> f32 {
        if self.milestone_target <= 0 {
            return 1.0;
        }
        let ratio = self.current_score as f64 / self.milestone_target as f64;
        ratio.clamp(0.0, 1.0) as f32
    }

    /// Literal `current / target` counter
    pub fn counter(&self) -> String {
        format!("{} / {}", self.current_score, self.milestone_target)
    }

    /// Milestone video id, ignoring blank values
    pub fn video(&self) -> Option<&str> {
        self.milestone_video
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}
