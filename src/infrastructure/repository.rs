//! File system repository

use crate::domain::{GratitudeItem, JournalEntry, SleepLog, Theme};
use crate::error::{MindcapsError, Result};
use crate::infrastructure::config::DATA_DIR;
use crate::infrastructure::store::{FileStore, KeyValueStore};
use crate::infrastructure::Config;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const ENTRIES_KEY: &str = "mindcaps-entries";
pub const GRATITUDES_KEY: &str = "mindcaps-gratitudes";
pub const SLEEP_KEY: &str = "mindcaps-sleep";
pub const THEME_KEY: &str = "mindcaps-theme";

/// Abstract repository for journal operations
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .mindcaps/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .mindcaps/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .mindcaps directory exists
    fn is_initialized(&self) -> bool;

    /// Create .mindcaps directory structure
    fn initialize(&self) -> Result<()>;

    /// Mood entries, newest first
    fn load_entries(&self) -> Result<Vec<JournalEntry>>;

    fn save_entries(&self, entries: &[JournalEntry]) -> Result<()>;

    /// Drop the stored entries collection entirely
    fn clear_entries(&self) -> Result<()>;

    fn load_gratitudes(&self) -> Result<Vec<GratitudeItem>>;

    fn save_gratitudes(&self, items: &[GratitudeItem]) -> Result<()>;

    /// Sleep logs, oldest first
    fn load_sleep_logs(&self) -> Result<Vec<SleepLog>>;

    fn save_sleep_logs(&self, logs: &[SleepLog]) -> Result<()>;

    fn load_theme(&self) -> Result<Theme>;

    fn save_theme(&self, theme: Theme) -> Result<()>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
    store: FileStore,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        let store = FileStore::new(root.join(DATA_DIR));
        FileSystemRepository { root, store }
    }

    /// Discover journal root by walking up from current directory
    /// First checks MINDCAPS_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("MINDCAPS_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_data_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(MindcapsError::Config(format!(
                    "MINDCAPS_ROOT is set to '{}' but no .mindcaps directory found. \
                    Run 'mindcaps init' in that directory or unset MINDCAPS_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_data_dir(&current) {
                debug!(root = %current.display(), "found journal root");
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(MindcapsError::NotMindcapsDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_data_dir(path: &Path) -> bool {
        path.join(DATA_DIR).is_dir()
    }

    /// Decode the JSON document under `key`; a missing key gives the default
    fn load_document<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(T::default());
        };

        serde_json::from_str(&raw).map_err(|e| {
            warn!(key, error = %e, "stored document is unreadable");
            MindcapsError::Storage(format!("stored '{}' could not be decoded: {}", key, e))
        })
    }

    fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        self.load_document(key)
    }

    fn save_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let json = serde_json::to_string(items)?;
        self.store.set(key, &json)?;
        debug!(key, count = items.len(), "saved collection");
        Ok(())
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_data_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let data_dir = self.root.join(DATA_DIR);

        if data_dir.exists() {
            return Err(MindcapsError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&data_dir)?;
        Ok(())
    }

    fn load_entries(&self) -> Result<Vec<JournalEntry>> {
        self.load_collection(ENTRIES_KEY)
    }

    fn save_entries(&self, entries: &[JournalEntry]) -> Result<()> {
        self.save_collection(ENTRIES_KEY, entries)
    }

    fn clear_entries(&self) -> Result<()> {
        self.store.remove(ENTRIES_KEY)
    }

    fn load_gratitudes(&self) -> Result<Vec<GratitudeItem>> {
        self.load_collection(GRATITUDES_KEY)
    }

    fn save_gratitudes(&self, items: &[GratitudeItem]) -> Result<()> {
        self.save_collection(GRATITUDES_KEY, items)
    }

    fn load_sleep_logs(&self) -> Result<Vec<SleepLog>> {
        self.load_collection(SLEEP_KEY)
    }

    fn save_sleep_logs(&self, logs: &[SleepLog]) -> Result<()> {
        self.save_collection(SLEEP_KEY, logs)
    }

    fn load_theme(&self) -> Result<Theme> {
        self.load_document(THEME_KEY)
    }

    fn save_theme(&self, theme: Theme) -> Result<()> {
        self.store.set(THEME_KEY, &serde_json::to_string(&theme)?)
    }
}
