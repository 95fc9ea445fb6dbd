//! Record a mood entry use case

use crate::domain::{Intensity, JournalEntry, Mood};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use chrono::{DateTime, Utc};
use tracing::info;

/// Service for adding entries to the journal
pub struct LogEntryService {
    repository: FileSystemRepository,
}

impl LogEntryService {
    pub fn new(repository: FileSystemRepository) -> Self {
        LogEntryService { repository }
    }

    /// Record an entry timestamped now
    pub fn execute(&self, mood: Mood, intensity: Intensity, note: &str) -> Result<JournalEntry> {
        self.record_at(mood, intensity, note, Utc::now())
    }

    /// Record an entry at `at` and insert it at the front of the collection
    pub fn record_at(
        &self,
        mood: Mood,
        intensity: Intensity,
        note: &str,
        at: DateTime<Utc>,
    ) -> Result<JournalEntry> {
        let mut entries = self.repository.load_entries()?;
        let previous_id = entries.iter().map(|e| e.id).max();

        let entry = JournalEntry::new(mood, intensity, note, at, previous_id)?;
        entries.insert(0, entry.clone());
        self.repository.save_entries(&entries)?;

        info!(id = entry.id, mood = %entry.mood, sentiment = %entry.sentiment, "logged entry");
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Sentiment;
    use tempfile::TempDir;

    fn service() -> (TempDir, FileSystemRepository, LogEntryService) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        let service = LogEntryService::new(repo.clone());
        (temp, repo, service)
    }

    #[test]
    fn test_newest_entry_goes_first() {
        let (_temp, repo, service) = service();
        let t = Utc::now();

        service
            .record_at(Mood::Sad, Intensity::default(), "first", t)
            .unwrap();
        service
            .record_at(Mood::Happy, Intensity::default(), "second", t)
            .unwrap();

        let entries = repo.load_entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].note, "second");
        assert_eq!(entries[1].note, "first");
    }

    #[test]
    fn test_same_millisecond_gets_unique_id() {
        let (_temp, repo, service) = service();
        let t = Utc::now();

        let a = service.record_at(Mood::Calm, Intensity::default(), "", t).unwrap();
        let b = service.record_at(Mood::Calm, Intensity::default(), "", t).unwrap();

        assert!(b.id > a.id);
        assert_eq!(repo.load_entries().unwrap().len(), 2);
    }

    #[test]
    fn test_sentiment_is_stored() {
        let (_temp, repo, service) = service();
        service
            .execute(Mood::Stressed, Intensity::new(8).unwrap(), "anxious and worried")
            .unwrap();

        let stored = &repo.load_entries().unwrap()[0];
        assert_eq!(stored.sentiment, Sentiment::Negative);
        assert_eq!(stored.intensity.value(), 8);
    }

    #[test]
    fn test_log_after_max_stored_id_fails_without_writing() {
        let (_temp, repo, service) = service();
        let mut stored = JournalEntry::new(Mood::Calm, Intensity::default(), "", Utc::now(), None)
            .unwrap();
        stored.id = i64::MAX;
        repo.save_entries(&[stored.clone()]).unwrap();

        let result = service.execute(Mood::Happy, Intensity::default(), "next");
        assert!(matches!(result, Err(crate::error::MindcapsError::Storage(_))));
        assert_eq!(repo.load_entries().unwrap(), vec![stored]);
    }
}
