//! Key-value document store

use crate::error::{MindcapsError, Result};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// String documents addressed by string keys
pub trait KeyValueStore {
    /// Read the document stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous document
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the document under `key`; missing keys are not an error
    fn remove(&self, key: &str) -> Result<()>;
}

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        FileStore { dir }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(MindcapsError::Storage(format!("invalid storage key: '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => {
                debug!(key, bytes = contents.len(), "read document");
                Ok(Some(contents))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(MindcapsError::Io(e)),
        }
    }

    /// Writes to a temp file in the same directory, then renames into place.
    /// The temp file is removed again if the rename fails.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the
    /// destination is removed first.
    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;

        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let tmp_path = self
            .dir
            .join(format!("{}.json.tmp-{}", key, std::process::id()));
        fs::write(&tmp_path, value)?;

        let replaced = (|| {
            if cfg!(windows) && path.exists() {
                fs::remove_file(&path)?;
            }
            fs::rename(&tmp_path, &path)
        })();
        if let Err(e) = replaced {
            let _ = fs::remove_file(&tmp_path);
            return Err(MindcapsError::Io(e));
        }

        debug!(key, bytes = value.len(), "wrote document");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(key, "removed document");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(MindcapsError::Io(e)),
        }
    }
}
