//! Player record persistence
//!
//! `JsonFileStore` keeps the record as pretty JSON on disk. Loads hold a shared
//! lock and saves an exclusive lock on a sidecar `.lock` file; saves write a
//! temp file, fsync it and rename it over the target.

use super::record::PlayerRecord;
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name used inside the data directory
pub const DEFAULT_FILE_NAME: &str = "player.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not access player record at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("player record at {} is corrupt", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load/save collaborator for the player record
pub trait PlayerStore {
    /// Load the stored record, `None` if nothing was saved yet
    ///
    /// # Errors
    /// Returns `StoreError` if the storage cannot be read or decoded.
    fn load(&mut self) -> Result<Option<PlayerRecord>, StoreError>;

    /// Durably replace the stored record
    ///
    /// # Errors
    /// Returns `StoreError` if the record could not be written.
    fn save(&mut self, record: &PlayerRecord) -> Result<(), StoreError>;
}

/// Default location of the record: `<data dir>/cliordle/player.json`
///
/// Falls back to the working directory when the platform has no data dir.
#[must_use]
pub fn default_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cliordle")
        .join(DEFAULT_FILE_NAME)
}

/// JSON file on the local filesystem
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_err(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".lock");
        self.path.with_file_name(name)
    }

    fn open_lock(&self) -> io::Result<File> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        OpenOptions::new()
            .create(true)
            .truncate(false)
            .read(true)
            .write(true)
            .open(self.lock_path())
    }

    fn write_atomic(&self, content: &str) -> io::Result<()> {
        let dir = match self.path.parent() {
            Some(d) if !d.as_os_str().is_empty() => d,
            _ => Path::new("."),
        };
        let base = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(DEFAULT_FILE_NAME);
        let tmp_path = dir.join(format!(".{base}.tmp-{}", std::process::id()));

        let written = File::create(&tmp_path).and_then(|mut tmp| {
            tmp.write_all(content.as_bytes())?;
            tmp.sync_all()
        });
        if let Err(e) = written.and_then(|()| fs::rename(&tmp_path, &self.path)) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }
        // Directory fsync is best effort
        if let Ok(dirf) = File::open(dir) {
            let _ = dirf.sync_all();
        }
        Ok(())
    }
}

impl PlayerStore for JsonFileStore {
    fn load(&mut self) -> Result<Option<PlayerRecord>, StoreError> {
        if !self.path.exists() {
            log::debug!("no player record at {}", self.path.display());
            return Ok(None);
        }

        let lock = self.open_lock().map_err(|e| self.io_err(e))?;
        FileExt::lock_shared(&lock).map_err(|e| self.io_err(e))?;
        let content = fs::read_to_string(&self.path);
        FileExt::unlock(&lock).map_err(|e| self.io_err(e))?;
        let content = content.map_err(|e| self.io_err(e))?;

        if content.trim().is_empty() {
            log::warn!("player record at {} is empty", self.path.display());
            return Ok(None);
        }

        let record = serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        log::debug!("loaded player record from {}", self.path.display());
        Ok(Some(record))
    }

    fn save(&mut self, record: &PlayerRecord) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(record).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;

        let lock = self.open_lock().map_err(|e| self.io_err(e))?;
        FileExt::lock_exclusive(&lock).map_err(|e| self.io_err(e))?;
        let written = self.write_atomic(&json);
        FileExt::unlock(&lock).map_err(|e| self.io_err(e))?;
        written.map_err(|e| self.io_err(e))?;

        log::info!("saved player record to {}", self.path.display());
        Ok(())
    }
}

/// In-memory store, for tests and embedding
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    record: Option<PlayerRecord>,
    saves: usize,
    fail_saves: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an already saved record
    #[must_use]
    pub fn with_record(record: PlayerRecord) -> Self {
        Self {
            record: Some(record),
            ..Self::default()
        }
    }

    /// Make every save fail, as if the disk were unavailable
    #[must_use]
    pub fn failing(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    /// The last successfully saved record
    #[must_use]
    pub fn saved(&self) -> Option<&PlayerRecord> {
        self.record.as_ref()
    }

    /// Number of successful saves
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl PlayerStore for MemoryStore {
    fn load(&mut self) -> Result<Option<PlayerRecord>, StoreError> {
        Ok(self.record.clone())
    }

    fn save(&mut self, record: &PlayerRecord) -> Result<(), StoreError> {
        if self.fail_saves {
            return Err(StoreError::Io {
                path: PathBuf::from("<memory>"),
                source: io::Error::other("storage unavailable"),
            });
        }
        self.record = Some(record.clone());
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Settings;

    fn sample() -> PlayerRecord {
        PlayerRecord {
            settings: Settings {
                high_contrast: true,
                hard_mode: false,
            },
            played: 9,
            won: 7,
            current_streak: 2,
            longest_streak: 5,
            distribution: [0, 1, 3, 2, 1, 0],
        }
    }

    #[test]
    fn missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("player.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("player.json");
        let mut store = JsonFileStore::new(&path);

        store.save(&sample()).unwrap();
        assert!(path.exists());

        let mut reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.load().unwrap(), Some(sample()));
    }

    #[test]
    fn save_overwrites_previous_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("player.json"));

        store.save(&PlayerRecord::default()).unwrap();
        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), Some(sample()));

        // No temp files left behind
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().contains(".tmp-"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn failed_save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        // A non-empty directory at the target path makes the rename fail
        let path = dir.path().join("player.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let mut store = JsonFileStore::new(&path);
        assert!(matches!(store.save(&sample()), Err(StoreError::Io { .. })));

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().contains(".tmp-"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("player.json");
        fs::write(&path, "{ not json").unwrap();

        let mut store = JsonFileStore::new(&path);
        assert!(matches!(store.load(), Err(StoreError::Corrupt { .. })));
    }

    #[test]
    fn empty_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("player.json");
        fs::write(&path, "").unwrap();

        let mut store = JsonFileStore::new(&path);
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn memory_store_tracks_saves() {
        let mut store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());
        store.save(&sample()).unwrap();
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.saved(), Some(&sample()));
    }

    #[test]
    fn failing_memory_store_rejects_saves() {
        let mut store = MemoryStore::new().failing();
        assert!(matches!(store.save(&sample()), Err(StoreError::Io { .. })));
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn default_path_ends_with_file_name() {
        assert!(default_path().ends_with(Path::new("cliordle").join(DEFAULT_FILE_NAME)));
    }
}
