//! Profile panel view

use crate::api::AssetUrls;
use crate::domain::{ProfileSnapshot, RankTier, Theme};

/// What the rank/role label shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    /// Rank tier, styled by tier when known
    Rank(Option<RankTier>),
    /// Organizational role, neutral styling
    Role,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileView {
    pub name: String,
    pub label: String,
    pub label_kind: LabelKind,
    pub badge_url: String,
    /// Tier for the badge glow; `None` means no decoration
    pub tier: Option<RankTier>,
    /// Fraction of the milestone reached, in `[0, 1]`
    pub progress: f32,
    /// `current / target`
    pub counter: String,
}

impl ProfileView {
    pub fn render(snapshot: &ProfileSnapshot, theme: Theme, assets: &AssetUrls) -> Self {
        let tier = snapshot.rank.tier();
        let label_kind = match theme {
            Theme::Rank => LabelKind::Rank(tier),
            Theme::Role => LabelKind::Role,
        };

        Self {
            name: snapshot.display_name(),
            label: snapshot.label(theme),
            label_kind,
            badge_url: assets.badge(&snapshot.rank),
            tier,
            progress: snapshot.progress(),
            counter: snapshot.counter(),
        }
    }

    /// Progress as a whole percentage for the bar caption
    pub fn percent(&self) -> u32 {
        (self.progress * 100.0).round() as u32
    }
}
