//! GUI Theme: "Heavy Metal" - dark steel panels with red and gold accents
//!
//! Color constants for the Aura GUI, plus per-tier badge glows.

use eframe::egui::Color32;

use crate::domain::{RankTier, Theme};
use crate::view::Podium;

// ═══════════════════════════════════════════════════════════════════════════
// BACKGROUNDS
// ═══════════════════════════════════════════════════════════════════════════

/// Background: near-black steel
pub const BG_PRIMARY: Color32 = Color32::from_rgb(12, 12, 14);
/// Secondary background for rows and cards
pub const BG_SECONDARY: Color32 = Color32::from_rgb(24, 24, 28);
/// Accent highlight background
pub const BG_HIGHLIGHT: Color32 = Color32::from_rgb(40, 40, 46);
/// Row border
pub const BORDER: Color32 = Color32::from_rgb(58, 58, 64);

// ═══════════════════════════════════════════════════════════════════════════
// TEXT COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(235, 235, 235);
pub const TEXT_DIM: Color32 = Color32::from_rgb(160, 160, 165);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(100, 100, 108);

// ═══════════════════════════════════════════════════════════════════════════
// ACCENT COLORS
// ═══════════════════════════════════════════════════════════════════════════

/// Metal red, used for scores and the rank theme
pub const ACCENT_RED: Color32 = Color32::from_rgb(220, 30, 40);
pub const ACCENT_GOLD: Color32 = Color32::from_rgb(255, 200, 50);
pub const ACCENT_SILVER: Color32 = Color32::from_rgb(210, 210, 215);
pub const ACCENT_BRONZE: Color32 = Color32::from_rgb(255, 150, 70);
/// Corporate blue, used for the role theme
pub const ACCENT_BLUE: Color32 = Color32::from_rgb(90, 150, 230);

/// Main accent for the active theme
pub fn accent(theme: Theme) -> Color32 {
    match theme {
        Theme::Rank => ACCENT_RED,
        Theme::Role => ACCENT_BLUE,
    }
}

/// Position number color
pub fn podium_color(podium: Podium) -> Color32 {
    match podium {
        Podium::First => ACCENT_GOLD,
        Podium::Second => ACCENT_SILVER,
        Podium::Other => ACCENT_BRONZE,
    }
}

/// Row border color; only the leader gets a gold frame
pub fn podium_border(podium: Podium) -> Color32 {
    match podium {
        Podium::First => ACCENT_GOLD,
        Podium::Second | Podium::Other => BORDER,
    }
}

/// Tier colour and glow opacity. Unknown ranks have none.
fn tier_rgba(tier: Option<RankTier>) -> Option<(u8, u8, u8, f32)> {
    Some(match tier? {
        RankTier::Iron => (120, 120, 120, 0.5),
        RankTier::Bronze => (205, 127, 50, 0.5),
        RankTier::Gold => (180, 180, 180, 0.6),
        RankTier::Diamond => (0, 191, 255, 0.6),
        RankTier::Mistico => (0, 255, 200, 0.6),
        RankTier::Master => (199, 21, 133, 0.7),
        RankTier::Grandmaster => (255, 69, 0, 0.7),
        RankTier::Legend => (255, 255, 255, 0.8),
        RankTier::Devil => (75, 0, 130, 0.9),
    })
}

/// Glow drawn behind a badge. Unknown ranks get none.
pub fn tier_glow(tier: Option<RankTier>) -> Option<Color32> {
    let (r, g, b, a) = tier_rgba(tier)?;
    Some(Color32::from_rgba_unmultiplied(r, g, b, (a * 255.0) as u8))
}

/// Opaque tier colour, lifted off black, for label text in the rank theme
pub fn tier_text(tier: Option<RankTier>) -> Color32 {
    match tier_rgba(tier) {
        Some((r, g, b, _)) => Color32::from_rgb(r.max(90), g.max(90), b.max(90)),
        None => TEXT_PRIMARY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tier_glows() {
        for tier in RankTier::ALL {
            assert!(tier_glow(Some(tier)).is_some(), "{} has no glow", tier);
        }
        assert_eq!(tier_glow(None), None);
    }

    #[test]
    fn test_only_leader_has_gold_border() {
        assert_eq!(podium_border(Podium::First), ACCENT_GOLD);
        assert_eq!(podium_border(Podium::Second), BORDER);
        assert_eq!(podium_border(Podium::Other), BORDER);
    }

    #[test]
    fn test_tier_text_keeps_full_channels() {
        assert_eq!(tier_text(Some(RankTier::Legend)), Color32::from_rgb(255, 255, 255));
        assert_eq!(tier_text(Some(RankTier::Diamond)), Color32::from_rgb(90, 191, 255));
        assert_eq!(tier_text(Some(RankTier::Devil)), Color32::from_rgb(90, 90, 130));
        assert_eq!(tier_text(None), TEXT_PRIMARY);
    }
}
