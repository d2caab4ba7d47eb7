//! Persisted client state
//!
//! A flat string map stored as JSON, in the spirit of browser local storage.
//! Keys are fixed prefixes plus user id and/or score:
//! - `aura_user_id` - the logged-in identifier
//! - `aura_theme` - `"role"` or `"rank"`
//! - `aura_watched_{user}_{score}` - milestone video already shown

mod io;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::error;

use crate::domain::Theme;

pub use io::StoreError;
pub(crate) use io::write_locked;

const USER_ID_KEY: &str = "aura_user_id";
const THEME_KEY: &str = "aura_theme";
const WATCHED_PREFIX: &str = "aura_watched_";

fn watched_key(user_id: &str, score: i64) -> String {
    format!("{}{}_{}", WATCHED_PREFIX, user_id, score)
}

/// Key/value client state, optionally backed by a file
#[derive(Debug, Clone, Default)]
pub struct ClientStore {
    entries: BTreeMap<String, String>,
    path: Option<PathBuf>,
}

impl ClientStore {
    /// A store that lives only in memory
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open a file-backed store. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = io::read_entries(&path)?;
        Ok(Self {
            entries,
            path: Some(path),
        })
    }

    /// Open a file-backed store, starting empty if the file is unreadable
    pub fn open_or_empty(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::open(&path) {
            Ok(store) => store,
            Err(e) => {
                error!("Discarding unreadable client state {}: {}", path.display(), e);
                Self {
                    entries: BTreeMap::new(),
                    path: Some(path),
                }
            }
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Set a key and persist. The in-memory value is updated even if
    /// persisting fails.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), StoreError> {
        let (key, value) = (key.into(), value.into());
        self.update(|entries| {
            entries.insert(key.clone(), value.clone());
        })
    }

    pub fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.update(|entries| {
            entries.remove(key);
        })
    }

    /// Apply one change in memory and to the file.
    ///
    /// The file side re-reads under the lock, so keys written by another
    /// process since `open` are kept and picked up here.
    fn update(
        &mut self,
        change: impl Fn(&mut BTreeMap<String, String>),
    ) -> Result<(), StoreError> {
        change(&mut self.entries);
        if let Some(path) = &self.path {
            self.entries = io::update_entries(path, &change)?;
        }
        Ok(())
    }

    // ── Session ────────────────────────────────────────────────────────────

    /// The persisted user id, ignoring blank values
    pub fn user_id(&self) -> Option<&str> {
        self.get(USER_ID_KEY).map(str::trim).filter(|id| !id.is_empty())
    }

    pub fn set_user_id(&mut self, user_id: &str) -> Result<(), StoreError> {
        self.set(USER_ID_KEY, user_id)
    }

    pub fn clear_user_id(&mut self) -> Result<(), StoreError> {
        self.remove(USER_ID_KEY)
    }

    // ── Theme ──────────────────────────────────────────────────────────────

    pub fn theme(&self) -> Theme {
        Theme::from_persisted(self.get(THEME_KEY))
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), StoreError> {
        self.set(THEME_KEY, theme.as_str())
    }

    // ── Watched milestones ─────────────────────────────────────────────────

    pub fn is_watched(&self, user_id: &str, score: i64) -> bool {
        self.get(&watched_key(user_id, score)) == Some("true")
    }

    pub fn mark_watched(&mut self, user_id: &str, score: i64) -> Result<(), StoreError> {
        self.set(watched_key(user_id, score), "true")
    }

    /// Remove every watched record of one user
    pub fn clear_watched(&mut self, user_id: &str) -> Result<(), StoreError> {
        let prefix = format!("{}{}_", WATCHED_PREFIX, user_id);
        // The remainder must be a bare score so user "a" keeps "a_b"'s records.
        self.update(|entries| {
            entries.retain(|key, _| {
                key.strip_prefix(&prefix)
                    .is_none_or(|score| score.parse::<i64>().is_err())
            });
        })
    }
}
