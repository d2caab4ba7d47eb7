//! Fixed-interval poll loop
//!
//! A timer thread fires one tick immediately and then every `interval`. Each
//! tick spawns two independent fetches (profile and leaderboard) so a slow or
//! failing endpoint never holds up the other one.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::debug;

use super::events::ControllerEvent;
use crate::api::AuraApi;

/// Callback run after an event is posted (e.g. to request a GUI repaint)
pub type Waker = Arc<dyn Fn() + Send + Sync>;

/// Post an event and wake the UI
pub(super) fn post(
    events: &Sender<ControllerEvent>,
    waker: Option<&Waker>,
    event: ControllerEvent,
) {
    // A closed channel means the controller is gone; nothing left to update.
    if events.send(event).is_ok() {
        if let Some(waker) = waker {
            waker();
        }
    }
}

/// Handle to a running poll loop. Dropping it stops the loop.
pub struct Poller {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Poller {
    pub fn spawn(
        api: Arc<dyn AuraApi>,
        user_id: String,
        epoch: u64,
        interval: Duration,
        events: Sender<ControllerEvent>,
        waker: Option<Waker>,
    ) -> Self {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            let mut seq = 0u64;
            loop {
                seq += 1;
                debug!("Poll tick {} for user {}", seq, user_id);
                spawn_profile_fetch(&api, &user_id, epoch, seq, &events, waker.as_ref());
                spawn_leaderboard_fetch(&api, epoch, seq, &events, waker.as_ref());

                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => continue,
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            debug!("Poll loop for user {} stopped after {} ticks", user_id, seq);
        });

        Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    /// Stop the timer. Fetches already in flight still finish and post their
    /// results; the controller discards them by epoch.
    pub fn stop(&mut self) {
        // Dropping the sender wakes the timer thread immediately
        self.stop_tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.stop();
    }
}

fn spawn_profile_fetch(
    api: &Arc<dyn AuraApi>,
    user_id: &str,
    epoch: u64,
    seq: u64,
    events: &Sender<ControllerEvent>,
    waker: Option<&Waker>,
) {
    let api = Arc::clone(api);
    let user_id = user_id.to_string();
    let events = events.clone();
    let waker = waker.cloned();
    thread::spawn(move || {
        let result = api.profile(&user_id);
        post(
            &events,
            waker.as_ref(),
            ControllerEvent::Profile { epoch, seq, result },
        );
    });
}

fn spawn_leaderboard_fetch(
    api: &Arc<dyn AuraApi>,
    epoch: u64,
    seq: u64,
    events: &Sender<ControllerEvent>,
    waker: Option<&Waker>,
) {
    let api = Arc::clone(api);
    let events = events.clone();
    let waker = waker.cloned();
    thread::spawn(move || {
        let result = api.leaderboard();
        post(
            &events,
            waker.as_ref(),
            ControllerEvent::Leaderboard { epoch, seq, result },
        );
    });
}
