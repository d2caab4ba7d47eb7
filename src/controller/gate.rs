//! Once-per-milestone video gate
//!
//! `Idle -> Playing` when the snapshot carries a video, the theme is
//! celebratory and `(user, score)` has no watched record. The record is
//! persisted before playback starts, so a tick that lands while the video is
//! still loading finds it and stays idle.

use tracing::{error, info, warn};

use crate::api::AssetUrls;
use crate::domain::{ProfileSnapshot, Theme};
use crate::player::MediaPlayer;
use crate::store::ClientStore;

/// The milestone currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    pub user_id: String,
    pub score: i64,
    pub video_id: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GateState {
    #[default]
    Idle,
    Playing(Milestone),
}

#[derive(Debug, Default)]
pub struct MilestoneGate {
    state: GateState,
}

impl MilestoneGate {
    pub fn state(&self) -> &GateState {
        &self.state
    }

    pub fn current(&self) -> Option<&Milestone> {
        match &self.state {
            GateState::Playing(milestone) => Some(milestone),
            GateState::Idle => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, GateState::Playing(_))
    }

    /// Feed a fresh snapshot. Returns true when the gate fired.
    pub fn observe(
        &mut self,
        user_id: &str,
        snapshot: &ProfileSnapshot,
        theme: Theme,
        store: &mut ClientStore,
        player: &mut dyn MediaPlayer,
        assets: &AssetUrls,
    ) -> bool {
        if self.is_playing() || !theme.is_celebratory() {
            return false;
        }
        let Some(video_id) = snapshot.video() else {
            return false;
        };
        let score = snapshot.current_score;
        if store.is_watched(user_id, score) {
            return false;
        }

        // Record first: the in-memory flag is set even if the file write fails.
        if let Err(e) = store.mark_watched(user_id, score) {
            error!("Failed to persist watched milestone {} for {}: {}", score, user_id, e);
        }

        let milestone = Milestone {
            user_id: user_id.to_string(),
            score,
            video_id: video_id.to_string(),
            url: assets.video(video_id),
        };
        info!("Milestone {} reached by {}, playing {}", score, user_id, milestone.video_id);

        if let Err(e) = player.play(&milestone.url) {
            warn!("Milestone video did not start: {}", e);
        }
        self.state = GateState::Playing(milestone);
        true
    }

    /// Manual start after the automatic one was refused
    pub fn replay(&mut self, player: &mut dyn MediaPlayer) {
        if let GateState::Playing(milestone) = &self.state {
            if let Err(e) = player.play(&milestone.url) {
                warn!("Milestone video did not start: {}", e);
            }
        }
    }

    /// Natural end or dismissal: stop, rewind, hide
    pub fn finish(&mut self, player: &mut dyn MediaPlayer) {
        if self.is_playing() {
            player.stop();
            self.state = GateState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Elo;
    use crate::player::PlaybackError;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingPlayer {
        played: Vec<String>,
        stops: usize,
        refuse: bool,
        /// State file to reopen on `play`, with the `(user, score)` to look up
        watch: Option<(PathBuf, String, i64)>,
        /// Whether the watched record was on disk at each `play`
        recorded_at_play: Vec<bool>,
    }

    impl MediaPlayer for RecordingPlayer {
        fn play(&mut self, url: &str) -> Result<(), PlaybackError> {
            self.played.push(url.to_string());
            if let Some((path, user_id, score)) = &self.watch {
                let on_disk = ClientStore::open(path)
                    .map(|store| store.is_watched(user_id, *score))
                    .unwrap_or(false);
                self.recorded_at_play.push(on_disk);
            }
            if self.refuse {
                Err(PlaybackError::Unsupported)
            } else {
                Ok(())
            }
        }

        fn has_ended(&mut self) -> bool {
            false
        }

        fn stop(&mut self) {
            self.stops += 1;
        }
    }

    fn snapshot(total: i64, video: Option<&str>) -> ProfileSnapshot {
        ProfileSnapshot {
            name: "Vitor".to_string(),
            rank: Elo::new("legend"),
            role_label: "Analista".to_string(),
            current_score: total,
            milestone_target: 350,
            milestone_video: video.map(str::to_string),
        }
    }

    struct Fixture {
        assets: AssetUrls,
        store: ClientStore,
        player: RecordingPlayer,
        gate: MilestoneGate,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                assets: AssetUrls::new("/static"),
                store: ClientStore::in_memory(),
                player: RecordingPlayer::default(),
                gate: MilestoneGate::default(),
            }
        }

        fn observe(&mut self, total: i64, video: Option<&str>, theme: Theme) -> bool {
            self.gate.observe(
                "1",
                &snapshot(total, video),
                theme,
                &mut self.store,
                &mut self.player,
                &self.assets,
            )
        }
    }

    #[test]
    fn test_fires_once_per_score() {
        let mut fx = Fixture::new();

        assert!(fx.observe(260, Some("legendVid"), Theme::Rank));
        fx.gate.finish(&mut fx.player);
        assert!(!fx.observe(260, Some("legendVid"), Theme::Rank));
        assert_eq!(fx.player.played, vec!["/static/vids/legendVid.mp4".to_string()]);
        assert_eq!(fx.player.stops, 1);
    }

    #[test]
    fn test_record_is_on_disk_before_playback_starts() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        let mut fx = Fixture::new();
        fx.store = ClientStore::open(&path).unwrap();
        fx.player.watch = Some((path, "1".to_string(), 260));

        assert!(fx.observe(260, Some("legendVid"), Theme::Rank));
        assert_eq!(fx.player.recorded_at_play, vec![true]);
    }

    #[test]
    fn test_requires_celebratory_theme_and_video() {
        let mut fx = Fixture::new();

        assert!(!fx.observe(90, Some("diamondVid"), Theme::Role));
        assert!(!fx.observe(91, None, Theme::Rank));
        assert!(fx.player.played.is_empty());
        // Nothing was consumed by the refused attempts
        assert!(!fx.store.is_watched("1", 90));
    }

    #[test]
    fn test_refused_playback_keeps_surface_and_record() {
        let mut fx = Fixture::new();
        fx.player.refuse = true;

        assert!(fx.observe(10, Some("ironVid"), Theme::Rank));
        assert!(fx.gate.is_playing());
        assert!(fx.store.is_watched("1", 10));

        fx.gate.replay(&mut fx.player);
        assert_eq!(fx.player.played.len(), 2);
    }

    #[test]
    fn test_no_new_milestone_while_playing() {
        let mut fx = Fixture::new();

        assert!(fx.observe(15, Some("bronzeVid"), Theme::Rank));
        assert!(!fx.observe(35, Some("goldVid"), Theme::Rank));
        assert!(!fx.store.is_watched("1", 35));

        fx.gate.finish(&mut fx.player);
        assert!(fx.observe(35, Some("goldVid"), Theme::Rank));
    }
}
