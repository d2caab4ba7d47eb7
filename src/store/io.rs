//! Client state file I/O

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::warn;

/// Error type for client state persistence
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid client state in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

pub(super) fn read_entries(path: &Path) -> Result<BTreeMap<String, String>, StoreError> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }

    let content = std::fs::read_to_string(path).map_err(io_error(path))?;
    if content.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    serde_json::from_str(&content).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply `change` to the file's current contents and write the result back,
/// all under the state lock.
///
/// Each writer re-reads before changing one key, so the dashboard and a CLI
/// command touching the same file never undo each other's keys. An
/// unreadable file is replaced. Returns the map as written.
pub(super) fn update_entries(
    path: &Path,
    change: impl FnOnce(&mut BTreeMap<String, String>),
) -> Result<BTreeMap<String, String>, StoreError> {
    let _lock = lock(path)?;

    let mut entries = match read_entries(path) {
        Ok(entries) => entries,
        Err(e @ StoreError::Json { .. }) => {
            warn!("Replacing unreadable client state: {}", e);
            BTreeMap::new()
        }
        Err(e) => return Err(e),
    };
    change(&mut entries);

    let content = serde_json::to_string_pretty(&entries).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    replace(path, content.as_bytes())?;
    Ok(entries)
}

/// `state.json` -> `state.json.lock`
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}

/// Take the exclusive lock guarding `path`, creating missing parent
/// directories. The lock is released when the returned file is dropped.
fn lock(path: &Path) -> Result<File, StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_error(parent))?;
    }

    let lock_path = sibling(path, ".lock");
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&lock_path)
        .map_err(io_error(&lock_path))?;
    lock_file.lock_exclusive().map_err(io_error(&lock_path))?;
    Ok(lock_file)
}

/// Write through a temp file and a rename so readers never see a partial file
fn replace(path: &Path, content: &[u8]) -> Result<(), StoreError> {
    let temp_path = sibling(path, ".tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(io_error(&temp_path))?;
    temp_file.write_all(content).map_err(io_error(&temp_path))?;
    temp_file.sync_all().map_err(io_error(&temp_path))?;

    std::fs::rename(&temp_path, path).map_err(io_error(path))
}

/// Replace the whole file under the lock, through a temp file and a rename.
///
/// Serializes whole-file writers against each other; it does not merge with
/// what another writer stored meanwhile (see [`update_entries`] for that).
pub(crate) fn write_locked(path: &Path, content: &[u8]) -> Result<(), StoreError> {
    let _lock = lock(path)?;
    replace(path, content)
}

#[cfg(test)]
mod tests {
    use super::super::ClientStore;
    use crate::domain::Theme;
    use tempfile::TempDir;

    #[test]
    fn test_state_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("state.json");

        {
            let mut store = ClientStore::open(&path).unwrap();
            store.set_user_id("19515").unwrap();
            store.set_theme(Theme::Rank).unwrap();
            store.mark_watched("19515", 35).unwrap();
        }

        let store = ClientStore::open(&path).unwrap();
        assert_eq!(store.user_id(), Some("19515"));
        assert_eq!(store.theme(), Theme::Rank);
        assert!(store.is_watched("19515", 35));
        assert!(!store.is_watched("19515", 65));
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = ClientStore::open(dir.path().join("absent.json")).unwrap();
        assert_eq!(store.user_id(), None);
        assert_eq!(store.theme(), Theme::Role);
    }

    #[test]
    fn test_write_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");

        super::write_locked(&path, b"{}").unwrap();
        super::write_locked(&path, b"{\"aura_theme\":\"rank\"}").unwrap();

        assert!(!dir.path().join("state.json.tmp").exists());
        assert!(dir.path().join("state.json.lock").exists());
        assert_eq!(ClientStore::open(&path).unwrap().theme(), Theme::Rank);
    }

    #[test]
    fn test_concurrent_logout_is_not_undone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");

        let mut dashboard = ClientStore::open(&path).unwrap();
        dashboard.set_user_id("20269").unwrap();

        let mut cli = ClientStore::open(&path).unwrap();
        cli.clear_user_id().unwrap();
        cli.set_theme(Theme::Rank).unwrap();

        dashboard.mark_watched("20269", 35).unwrap();
        assert_eq!(dashboard.user_id(), None);
        assert_eq!(dashboard.theme(), Theme::Rank);

        let reopened = ClientStore::open(&path).unwrap();
        assert_eq!(reopened.user_id(), None);
        assert_eq!(reopened.theme(), Theme::Rank);
        assert!(reopened.is_watched("20269", 35));
    }

    #[test]
    fn test_clear_watched_keeps_other_writers_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");

        let mut first = ClientStore::open(&path).unwrap();
        let mut second = ClientStore::open(&path).unwrap();
        first.mark_watched("1", 10).unwrap();
        second.mark_watched("2", 20).unwrap();
        second.mark_watched("1", 15).unwrap();

        first.clear_watched("1").unwrap();

        let reopened = ClientStore::open(&path).unwrap();
        assert!(!reopened.is_watched("1", 10));
        assert!(!reopened.is_watched("1", 15));
        assert!(reopened.is_watched("2", 20));
    }

    #[test]
    fn test_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = ClientStore::open(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid client state"), "got: {}", err);

        let mut store = ClientStore::open_or_empty(&path);
        assert_eq!(store.user_id(), None);
        store.set_user_id("8176").unwrap();
        assert_eq!(ClientStore::open(&path).unwrap().user_id(), Some("8176"));
    }
}
