//! Session & view controller
//!
//! Owns everything the dashboard shows: the session, the poll loop, cached
//! snapshots for each panel, theme and tab, and the milestone-video gate.
//! Worker threads never touch this state; they post [`ControllerEvent`]s that
//! the UI thread applies through [`Controller::pump`].

mod events;
mod gate;
mod poller;

pub use events::ControllerEvent;
pub use gate::{GateState, Milestone, MilestoneGate};
pub use poller::{Poller, Waker};

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, error, info, warn};

use crate::api::{ApiError, AssetUrls, AuraApi, ProfileResponse};
use crate::config::Config;
use crate::domain::{
    HistoricalQuery, LeaderboardEntry, Month, ProfileSnapshot, QueryError, Tab, Theme,
    selectable_years,
};
use crate::player::MediaPlayer;
use crate::store::ClientStore;
use crate::view::{BoardView, HistoryView, ProfileView};

/// An authenticated session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub theme: Theme,
}

/// Controller settings that do not change during a run
#[derive(Debug, Clone)]
pub struct ControllerOptions {
    pub assets: AssetUrls,
    pub poll_interval: Duration,
    pub epoch_year: i32,
    /// Newest selectable year
    pub current_year: i32,
    /// Month pre-selected in the history panel
    pub current_month: Month,
}

impl ControllerOptions {
    pub fn from_config(config: &Config, today: NaiveDate) -> Self {
        Self {
            assets: config.asset_urls(),
            poll_interval: config.poll_interval(),
            epoch_year: config.history.epoch_year,
            current_year: today.year(),
            current_month: Month::from_number(today.month()).unwrap_or(Month::January),
        }
    }
}

/// Cached content of a polled panel
#[derive(Debug)]
struct Panel<T> {
    data: Option<T>,
    /// Sequence number of the newest result applied (success or failure)
    seq: u64,
    last_error: Option<ApiError>,
}

impl<T> Default for Panel<T> {
    fn default() -> Self {
        Self {
            data: None,
            seq: 0,
            last_error: None,
        }
    }
}

impl<T> Panel<T> {
    /// Whether a result with this sequence number is newer than what is shown
    fn accepts(&self, seq: u64) -> bool {
        seq > self.seq
    }
}

#[derive(Debug, Clone)]
enum HistoryState {
    Idle,
    Searching(HistoricalQuery),
    Loaded(HistoricalQuery, Vec<LeaderboardEntry>),
    Failed(HistoricalQuery, String),
}

pub struct Controller {
    api: Arc<dyn AuraApi>,
    store: ClientStore,
    player: Box<dyn MediaPlayer>,
    options: ControllerOptions,
    events_tx: Sender<ControllerEvent>,
    events_rx: Receiver<ControllerEvent>,
    waker: Option<Waker>,

    poller: Option<Poller>,
    session: Option<Session>,
    /// Bumped on every start and logout; results from older epochs are dropped
    epoch: u64,
    /// Shown on the login surface after a forced logout
    notice: Option<String>,

    tab: Tab,
    profile: Panel<ProfileSnapshot>,
    leaderboard: Panel<Vec<LeaderboardEntry>>,
    history: HistoryState,
    history_seq: u64,
    history_selection: HistoricalQuery,
    gate: MilestoneGate,
}

impl Controller {
    pub fn new(
        api: Arc<dyn AuraApi>,
        store: ClientStore,
        player: Box<dyn MediaPlayer>,
        options: ControllerOptions,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::channel();
        let history_selection = default_selection(&options);

        Self {
            api,
            store,
            player,
            options,
            events_tx,
            events_rx,
            waker: None,
            poller: None,
            session: None,
            epoch: 0,
            notice: None,
            tab: Tab::default(),
            profile: Panel::default(),
            leaderboard: Panel::default(),
            history: HistoryState::Idle,
            history_seq: 0,
            history_selection,
            gate: MilestoneGate::default(),
        }
    }

    /// Run after every posted event, from the posting thread
    pub fn set_waker(&mut self, waker: Waker) {
        self.waker = Some(waker);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Session lifecycle
    // ═══════════════════════════════════════════════════════════════════════

    /// Restore the persisted session, if any. Returns true when authenticated.
    pub fn bootstrap(&mut self) -> bool {
        match self.store.user_id().map(str::to_string) {
            Some(user_id) => {
                info!("Restoring session for {}", user_id);
                let theme = self.store.theme();
                self.start(Session { user_id, theme });
                true
            }
            None => {
                debug!("No persisted session, showing login");
                false
            }
        }
    }

    /// Log in with free-text input. Blank input is ignored.
    pub fn login(&mut self, input: &str) -> bool {
        let user_id = input.trim();
        if user_id.is_empty() {
            return false;
        }

        if let Err(e) = self.store.set_user_id(user_id) {
            error!("Failed to persist session: {}", e);
        }
        info!("Logged in as {}", user_id);
        let theme = self.store.theme();
        self.start(Session {
            user_id: user_id.to_string(),
            theme,
        });
        true
    }

    /// Enter the authenticated view and start polling.
    ///
    /// Any previous poll loop is stopped first.
    pub fn start(&mut self, session: Session) {
        self.stop();
        self.reset_view();
        self.epoch += 1;
        self.notice = None;

        self.poller = Some(Poller::spawn(
            Arc::clone(&self.api),
            session.user_id.clone(),
            self.epoch,
            self.options.poll_interval,
            self.events_tx.clone(),
            self.waker.clone(),
        ));
        self.session = Some(session);
    }

    /// Stop the poll loop, keeping the session
    pub fn stop(&mut self) {
        if let Some(mut poller) = self.poller.take() {
            poller.stop();
        }
    }

    /// Clear the persisted session and that user's milestone records, and
    /// return to the login surface.
    pub fn logout(&mut self) {
        self.stop();
        self.notice = None;
        if let Some(session) = self.session.take() {
            info!("Logging out {}", session.user_id);
            if let Err(e) = self.store.clear_user_id() {
                error!("Failed to clear persisted session: {}", e);
            }
            if let Err(e) = self.store.clear_watched(&session.user_id) {
                error!("Failed to clear watched milestones: {}", e);
            }
        }
        self.epoch += 1;
        self.reset_view();
    }

    fn reset_view(&mut self) {
        self.gate.finish(self.player.as_mut());
        self.tab = Tab::default();
        self.profile = Panel::default();
        self.leaderboard = Panel::default();
        self.history = HistoryState::Idle;
        self.history_selection = default_selection(&self.options);
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn session_epoch(&self) -> u64 {
        self.epoch
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn store(&self) -> &ClientStore {
        &self.store
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Event handling
    // ═══════════════════════════════════════════════════════════════════════

    /// Apply every pending result without blocking. Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply(event);
            applied += 1;
        }
        if self.gate.is_playing() && self.player.has_ended() {
            self.gate.finish(self.player.as_mut());
        }
        applied
    }

    /// Wait up to `timeout` for one result and apply it
    pub fn pump_timeout(&mut self, timeout: Duration) -> bool {
        match self.events_rx.recv_timeout(timeout) {
            Ok(event) => {
                self.apply(event);
                true
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }

    /// Apply one fetch result
    pub fn apply(&mut self, event: ControllerEvent) {
        if event.epoch() != self.epoch || self.session.is_none() {
            debug!("Dropping result from a previous session");
            return;
        }

        match event {
            ControllerEvent::Profile { seq, result, .. } => self.apply_profile(seq, result),
            ControllerEvent::Leaderboard { seq, result, .. } => {
                self.apply_leaderboard(seq, result)
            }
            ControllerEvent::History {
                seq, query, result, ..
            } => self.apply_history(seq, query, result),
        }
    }

    fn apply_profile(&mut self, seq: u64, result: Result<ProfileResponse, ApiError>) {
        if !self.profile.accepts(seq) {
            debug!("Dropping stale profile from tick {}", seq);
            return;
        }
        self.profile.seq = seq;

        match result {
            Ok(ProfileResponse::Profile(snapshot)) => {
                self.profile.last_error = None;
                if let Some(session) = &self.session {
                    self.gate.observe(
                        &session.user_id,
                        &snapshot,
                        session.theme,
                        &mut self.store,
                        self.player.as_mut(),
                        &self.options.assets,
                    );
                }
                self.profile.data = Some(snapshot);
            }
            Ok(ProfileResponse::Invalid(message)) => {
                warn!("Server rejected the session: {}", message);
                self.logout();
                self.notice = Some(message);
            }
            Err(e) => {
                warn!("Profile refresh failed: {}", e);
                self.profile.last_error = Some(e);
            }
        }
    }

    fn apply_leaderboard(&mut self, seq: u64, result: Result<Vec<LeaderboardEntry>, ApiError>) {
        if !self.leaderboard.accepts(seq) {
            debug!("Dropping stale leaderboard from tick {}", seq);
            return;
        }
        self.leaderboard.seq = seq;

        match result {
            Ok(entries) => {
                self.leaderboard.last_error = None;
                self.leaderboard.data = Some(entries);
            }
            Err(e) => {
                warn!("Leaderboard refresh failed: {}", e);
                self.leaderboard.last_error = Some(e);
            }
        }
    }

    fn apply_history(
        &mut self,
        seq: u64,
        query: HistoricalQuery,
        result: Result<Vec<LeaderboardEntry>, ApiError>,
    ) {
        if seq != self.history_seq {
            debug!("Dropping superseded history result for {}", query);
            return;
        }

        self.history = match result {
            Ok(entries) => HistoryState::Loaded(query, entries),
            Err(e) => {
                warn!("History query for {} failed: {}", query, e);
                HistoryState::Failed(query, e.to_string())
            }
        };
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Theme and tabs
    // ═══════════════════════════════════════════════════════════════════════

    pub fn theme(&self) -> Theme {
        match &self.session {
            Some(session) => session.theme,
            None => self.store.theme(),
        }
    }

    /// Flip the theme and persist it. Views re-render from cached data.
    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.theme().toggled();
        if let Err(e) = self.store.set_theme(theme) {
            error!("Failed to persist theme: {}", e);
        }
        if let Some(session) = &mut self.session {
            session.theme = theme;
        }
        debug!("Theme switched to {}", theme);
        theme
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Show one panel. Only the history panel fetches.
    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
        if tab == Tab::History {
            self.query_history();
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // History
    // ═══════════════════════════════════════════════════════════════════════

    /// Years offered by the selector, oldest first
    pub fn history_years(&self) -> Vec<i32> {
        selectable_years(self.options.epoch_year, self.options.current_year)
    }

    pub fn history_months(&self) -> [Month; 12] {
        Month::ALL
    }

    pub fn history_selection(&self) -> HistoricalQuery {
        self.history_selection
    }

    /// Change the selected month without fetching
    pub fn select_history(&mut self, year: i32, month: u32) -> Result<(), QueryError> {
        self.history_selection = HistoricalQuery::new(
            year,
            month,
            self.options.epoch_year,
            self.options.current_year,
        )?;
        Ok(())
    }

    /// Fetch the selected month. Supersedes any query still in flight.
    pub fn query_history(&mut self) {
        if self.session.is_none() {
            return;
        }

        let query = self.history_selection;
        self.history_seq += 1;
        self.history = HistoryState::Searching(query);

        let api = Arc::clone(&self.api);
        let events = self.events_tx.clone();
        let waker = self.waker.clone();
        let epoch = self.epoch;
        let seq = self.history_seq;
        debug!("Querying history for {}", query);
        thread::spawn(move || {
            let result = api.history(query);
            poller::post(
                &events,
                waker.as_ref(),
                ControllerEvent::History {
                    epoch,
                    seq,
                    query,
                    result,
                },
            );
        });
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Milestone video
    // ═══════════════════════════════════════════════════════════════════════

    pub fn video(&self) -> Option<&Milestone> {
        self.gate.current()
    }

    /// Start the video again by hand (e.g. after autoplay was refused)
    pub fn replay_video(&mut self) {
        self.gate.replay(self.player.as_mut());
    }

    pub fn dismiss_video(&mut self) {
        self.gate.finish(self.player.as_mut());
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Views
    // ═══════════════════════════════════════════════════════════════════════

    pub fn profile(&self) -> Option<&ProfileSnapshot> {
        self.profile.data.as_ref()
    }

    pub fn profile_view(&self) -> Option<ProfileView> {
        self.profile
            .data
            .as_ref()
            .map(|snapshot| ProfileView::render(snapshot, self.theme(), &self.options.assets))
    }

    pub fn profile_error(&self) -> Option<&ApiError> {
        self.profile.last_error.as_ref()
    }

    pub fn leaderboard_view(&self) -> BoardView {
        BoardView::render(self.leaderboard.data.as_deref(), &self.options.assets)
    }

    pub fn leaderboard_error(&self) -> Option<&ApiError> {
        self.leaderboard.last_error.as_ref()
    }

    pub fn history_view(&self) -> HistoryView {
        match &self.history {
            HistoryState::Idle => HistoryView::Idle,
            HistoryState::Searching(query) => HistoryView::Searching(*query),
            HistoryState::Loaded(query, entries) => {
                HistoryView::loaded(*query, entries, &self.options.assets)
            }
            HistoryState::Failed(query, message) => HistoryView::Failed {
                query: *query,
                message: message.clone(),
            },
        }
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.stop();
    }
}

fn default_selection(options: &ControllerOptions) -> HistoricalQuery {
    HistoricalQuery::clamped(
        options.current_year,
        options.current_month,
        options.epoch_year,
        options.current_year,
    )
}
