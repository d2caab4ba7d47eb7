//! Shared test utilities: scripted API, recording player, fake HTTP server

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use aura::api::{ApiError, AssetUrls, AuraApi, ProfileResponse};
use aura::controller::{Controller, ControllerOptions};
use aura::player::{MediaPlayer, PlaybackError};
use aura::store::ClientStore;
use aura::{Elo, HistoricalQuery, LeaderboardEntry, Month, ProfileSnapshot};

// ═══════════════════════════════════════════════════════════════════════════
// Scripted API
// ═══════════════════════════════════════════════════════════════════════════

/// API whose answers are set by the test
pub struct FakeApi {
    pub profile: Mutex<Result<ProfileResponse, ApiError>>,
    pub leaderboard: Mutex<Result<Vec<LeaderboardEntry>, ApiError>>,
    pub history: Mutex<Result<Vec<LeaderboardEntry>, ApiError>>,
    pub history_queries: Mutex<Vec<HistoricalQuery>>,
    pub profile_calls: AtomicUsize,
    pub leaderboard_calls: AtomicUsize,
}

impl FakeApi {
    pub fn new(profile: ProfileSnapshot, leaderboard: Vec<LeaderboardEntry>) -> Self {
        Self {
            profile: Mutex::new(Ok(ProfileResponse::Profile(profile))),
            leaderboard: Mutex::new(Ok(leaderboard)),
            history: Mutex::new(Ok(Vec::new())),
            history_queries: Mutex::new(Vec::new()),
            profile_calls: AtomicUsize::new(0),
            leaderboard_calls: AtomicUsize::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.profile_calls.load(Ordering::SeqCst) + self.leaderboard_calls.load(Ordering::SeqCst)
    }
}

impl AuraApi for FakeApi {
    fn profile(&self, _user_id: &str) -> Result<ProfileResponse, ApiError> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        self.profile.lock().unwrap().clone()
    }

    fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ApiError> {
        self.leaderboard_calls.fetch_add(1, Ordering::SeqCst);
        self.leaderboard.lock().unwrap().clone()
    }

    fn history(&self, query: HistoricalQuery) -> Result<Vec<LeaderboardEntry>, ApiError> {
        self.history_queries.lock().unwrap().push(query);
        self.history.lock().unwrap().clone()
    }
}

pub fn network_error() -> ApiError {
    ApiError::Transport {
        url: "http://fake/api".to_string(),
        message: "connection refused".to_string(),
    }
}

pub fn snapshot(total: i64, meta: i64, video: Option<&str>) -> ProfileSnapshot {
    ProfileSnapshot {
        name: "Vitor Supremo".to_string(),
        rank: Elo::new("gold"),
        role_label: "Analista de Sistemas SR".to_string(),
        current_score: total,
        milestone_target: meta,
        milestone_video: video.map(str::to_string),
    }
}

pub fn sample_leaderboard() -> Vec<LeaderboardEntry> {
    vec![
        LeaderboardEntry::new("A", 10, Elo::new("gold")),
        LeaderboardEntry::new("B", 5, Elo::new("iron")),
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
// Recording player
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Default)]
pub struct PlayerLog {
    pub played: Vec<String>,
    pub stops: usize,
    pub ended: bool,
    pub refuse: bool,
}

/// Player that records calls into a shared log
#[derive(Clone, Default)]
pub struct FakePlayer {
    pub log: Arc<Mutex<PlayerLog>>,
}

impl FakePlayer {
    pub fn played(&self) -> Vec<String> {
        self.log.lock().unwrap().played.clone()
    }

    pub fn stops(&self) -> usize {
        self.log.lock().unwrap().stops
    }

    pub fn finish_playback(&self) {
        self.log.lock().unwrap().ended = true;
    }
}

impl MediaPlayer for FakePlayer {
    fn play(&mut self, url: &str) -> Result<(), PlaybackError> {
        let mut log = self.log.lock().unwrap();
        log.played.push(url.to_string());
        log.ended = false;
        if log.refuse {
            Err(PlaybackError::Unsupported)
        } else {
            Ok(())
        }
    }

    fn has_ended(&mut self) -> bool {
        self.log.lock().unwrap().ended
    }

    fn stop(&mut self) {
        let mut log = self.log.lock().unwrap();
        log.stops += 1;
        log.ended = false;
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Controller setup
// ═══════════════════════════════════════════════════════════════════════════

pub const WAIT: Duration = Duration::from_secs(5);

pub fn options() -> ControllerOptions {
    ControllerOptions {
        assets: AssetUrls::new("/static"),
        // Long enough that only the immediate tick runs during a test
        poll_interval: Duration::from_secs(3600),
        epoch_year: 2025,
        current_year: 2026,
        current_month: Month::October,
    }
}

pub fn controller(api: Arc<FakeApi>, store: ClientStore) -> (Controller, FakePlayer) {
    let player = FakePlayer::default();
    let controller = Controller::new(api, store, Box::new(player.clone()), options());
    (controller, player)
}

/// Apply the two results of the immediate tick
pub fn drain_first_tick(controller: &mut Controller) {
    for _ in 0..2 {
        assert!(controller.pump_timeout(WAIT), "poll tick did not deliver");
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Fake HTTP server
// ═══════════════════════════════════════════════════════════════════════════

/// In-process HTTP server answering every request through `handler`
pub struct FakeServer {
    pub base_url: String,
    pub requests: Arc<Mutex<Vec<String>>>,
    server: Arc<tiny_http::Server>,
}

impl FakeServer {
    pub fn start(handler: impl Fn(&str) -> (u16, String) + Send + 'static) -> Self {
        let server = Arc::new(tiny_http::Server::http("127.0.0.1:0").expect("Failed to bind"));
        let port = server
            .server_addr()
            .to_ip()
            .expect("Server has no IP address")
            .port();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let worker_server = Arc::clone(&server);
        let worker_requests = Arc::clone(&requests);
        thread::spawn(move || {
            for request in worker_server.incoming_requests() {
                let url = request.url().to_string();
                worker_requests.lock().unwrap().push(url.clone());
                let (status, body) = handler(&url);
                let header = tiny_http::Header::from_bytes(
                    &b"Content-Type"[..],
                    &b"application/json"[..],
                )
                .expect("Invalid header");
                let response = tiny_http::Response::from_string(body)
                    .with_status_code(status)
                    .with_header(header);
                let _ = request.respond(response);
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{}", port),
            requests,
            server,
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for FakeServer {
    fn drop(&mut self) {
        self.server.unblock();
    }
}
