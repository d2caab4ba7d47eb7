//! Results posted back to the controller by worker threads

use crate::api::{ApiError, ProfileResponse};
use crate::domain::{HistoricalQuery, LeaderboardEntry};

/// A finished fetch.
///
/// `epoch` identifies the session that issued it and `seq` orders results of
/// the same kind, so late arrivals can be recognised and dropped.
#[derive(Debug, Clone)]
pub enum ControllerEvent {
    Profile {
        epoch: u64,
        seq: u64,
        result: Result<ProfileResponse, ApiError>,
    },
    Leaderboard {
        epoch: u64,
        seq: u64,
        result: Result<Vec<LeaderboardEntry>, ApiError>,
    },
    History {
        epoch: u64,
        seq: u64,
        query: HistoricalQuery,
        result: Result<Vec<LeaderboardEntry>, ApiError>,
    },
}

impl ControllerEvent {
    pub fn epoch(&self) -> u64 {
        match self {
            ControllerEvent::Profile { epoch, .. }
            | ControllerEvent::Leaderboard { epoch, .. }
            | ControllerEvent::History { epoch, .. } => *epoch,
        }
    }
}
