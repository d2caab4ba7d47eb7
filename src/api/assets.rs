//! Static asset addressing (badges and milestone videos)

use crate::domain::Elo;

/// Builds badge and video URLs below the server's static root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetUrls {
    base: String,
}

impl AssetUrls {
    pub fn new(base: impl Into<String>) -> Self {
        let base: String = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Badge image for a rank. Unknown ranks still get a path.
    pub fn badge(&self, rank: &Elo) -> String {
        format!("{}/imgs/{}.png", self.base, rank.as_str())
    }

    /// Milestone video for a server-supplied id
    pub fn video(&self, video_id: &str) -> String {
        format!("{}/vids/{}.mp4", self.base, video_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_paths() {
        let assets = AssetUrls::new("http://localhost:5000/static/");
        assert_eq!(
            assets.badge(&Elo::new("gold")),
            "http://localhost:5000/static/imgs/gold.png"
        );
        assert_eq!(
            assets.badge(&Elo::new("unranked")),
            "http://localhost:5000/static/imgs/unranked.png"
        );
        assert_eq!(
            assets.video("devilVid"),
            "http://localhost:5000/static/vids/devilVid.mp4"
        );
    }
}
