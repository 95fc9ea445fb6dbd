//! Export, import and clear use cases

use crate::domain::{import_entries, parse_entries, ImportMode, JournalEntry};
use crate::error::{MindcapsError, Result};
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Default backup file name for a given date
pub fn backup_filename(date: NaiveDate) -> String {
    format!("mindcaps_backup_{}.json", date.format("%Y-%m-%d"))
}

/// Service moving the entries collection in and out of the journal
pub struct TransferService {
    repository: FileSystemRepository,
}

impl TransferService {
    pub fn new(repository: FileSystemRepository) -> Self {
        TransferService { repository }
    }

    /// Pretty-printed JSON array of every entry
    pub fn export_json(&self) -> Result<String> {
        let entries = self.repository.load_entries()?;
        Ok(serde_json::to_string_pretty(&entries)?)
    }

    /// Write the export document to `path`
    pub fn export_to(&self, path: &Path) -> Result<usize> {
        let entries = self.repository.load_entries()?;
        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(path, json)?;

        info!(path = %path.display(), count = entries.len(), "exported entries");
        Ok(entries.len())
    }

    /// Export into `dir` under the dated backup name
    pub fn export_backup(&self, dir: &Path, date: NaiveDate) -> Result<(PathBuf, usize)> {
        let path = dir.join(backup_filename(date));
        let count = self.export_to(&path)?;
        Ok((path, count))
    }

    /// Import an export document, returning the resulting collection.
    ///
    /// The payload is fully validated before anything is written, so a
    /// rejected import leaves the journal untouched.
    pub fn import_json(&self, payload: &str, mode: ImportMode) -> Result<Vec<JournalEntry>> {
        let incoming = parse_entries(payload).inspect_err(|e| {
            warn!(error = %e, "rejected import");
        })?;
        let imported = incoming.len();

        let current = self.repository.load_entries()?;
        let result = import_entries(current, incoming, mode);
        self.repository.save_entries(&result)?;

        info!(?mode, imported, total = result.len(), "imported entries");
        Ok(result)
    }

    pub fn import_file(&self, path: &Path, mode: ImportMode) -> Result<Vec<JournalEntry>> {
        let bytes = fs::read(path)?;
        let payload = String::from_utf8(bytes).map_err(|e| {
            MindcapsError::InvalidFormat(format!("file is not valid UTF-8 ({})", e.utf8_error()))
        })?;
        self.import_json(&payload, mode)
    }

    /// Remove every entry; gratitude and sleep data are kept
    pub fn clear(&self) -> Result<()> {
        self.repository.clear_entries()?;
        info!("cleared all entries");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Intensity, Mood};
    use chrono::{DateTime, Utc};
    use tempfile::TempDir;

    fn entry(ms: i64, mood: Mood, note: &str) -> JournalEntry {
        let at = DateTime::<Utc>::from_timestamp_millis(ms).unwrap();
        JournalEntry::new(mood, Intensity::default(), note, at, None).unwrap()
    }

    fn setup(entries: &[JournalEntry]) -> (TempDir, FileSystemRepository, TransferService) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_entries(entries).unwrap();
        let service = TransferService::new(repo.clone());
        (temp, repo, service)
    }

    #[test]
    fn test_backup_filename() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert_eq!(backup_filename(date), "mindcaps_backup_2024-01-10.json");
    }

    #[test]
    fn test_replace_import() {
        let a = entry(2_000, Mood::Happy, "a");
        let b = entry(1_000, Mood::Sad, "b");
        let (_temp, repo, service) = setup(&[a, b]);

        let c = entry(4_000, Mood::Calm, "c");
        let d = entry(3_000, Mood::Excited, "d");
        let payload = serde_json::to_string(&vec![c.clone(), d.clone()]).unwrap();

        service.import_json(&payload, ImportMode::Replace).unwrap();
        assert_eq!(repo.load_entries().unwrap(), vec![c, d]);
    }

    #[test]
    fn test_merge_import() {
        let a = entry(2_000, Mood::Happy, "a");
        let b = entry(1_000, Mood::Sad, "b");
        let (_temp, repo, service) = setup(&[a.clone(), b.clone()]);

        let c = entry(4_000, Mood::Calm, "c");
        let d = entry(3_000, Mood::Excited, "d");
        let payload = serde_json::to_string(&vec![c.clone(), d.clone()]).unwrap();

        service.import_json(&payload, ImportMode::Merge).unwrap();
        assert_eq!(repo.load_entries().unwrap(), vec![c, d, a, b]);
    }

    #[test]
    fn test_invalid_import_leaves_state_unchanged() {
        let a = entry(1_000, Mood::Happy, "a");
        let (_temp, repo, service) = setup(&[a.clone()]);

        for mode in [ImportMode::Replace, ImportMode::Merge] {
            let err = service.import_json("\"not-an-array\"", mode).unwrap_err();
            assert!(matches!(err, MindcapsError::InvalidFormat(_)));
            assert_eq!(repo.load_entries().unwrap(), vec![a.clone()]);
        }
    }

    #[test]
    fn test_import_file_rejects_non_utf8() {
        let a = entry(1_000, Mood::Happy, "a");
        let (temp, repo, service) = setup(&[a.clone()]);
        let path = temp.path().join("garbled.json");
        fs::write(&path, [0xff, 0xfe, b'[', b']']).unwrap();

        let err = service.import_file(&path, ImportMode::Replace).unwrap_err();
        assert!(matches!(err, MindcapsError::InvalidFormat(_)));
        assert_eq!(err.exit_code(), 3);
        assert_eq!(repo.load_entries().unwrap(), vec![a]);
    }

    #[test]
    fn test_export_then_import_replace_round_trips() {
        let original = vec![
            entry(3_000, Mood::Calm, "peace and quiet"),
            entry(2_000, Mood::Stressed, "deadline"),
            entry(1_000, Mood::Happy, ""),
        ];
        let (temp, repo, service) = setup(&original);

        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let (path, count) = service.export_backup(temp.path(), date).unwrap();
        assert_eq!(count, 3);
        assert!(path.ends_with("mindcaps_backup_2024-01-10.json"));

        service.clear().unwrap();
        assert!(repo.load_entries().unwrap().is_empty());

        service.import_file(&path, ImportMode::Replace).unwrap();
        assert_eq!(repo.load_entries().unwrap(), original);
    }

    #[test]
    fn test_export_is_pretty_printed() {
        let (_temp, _repo, service) = setup(&[entry(1_000, Mood::Happy, "x")]);
        let json = service.export_json().unwrap();
        assert!(json.starts_with("[\n"));
        assert!(json.contains("  \"mood\": \"Happy\""));
    }
}
