//! Sleep tracking use cases

use crate::domain::{SleepLog, SleepQuality};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use chrono::{DateTime, Utc};
use tracing::info;

pub struct SleepService {
    repository: FileSystemRepository,
}

impl SleepService {
    pub fn new(repository: FileSystemRepository) -> Self {
        SleepService { repository }
    }

    pub fn log(&self, hours: f64, quality: SleepQuality) -> Result<SleepLog> {
        self.log_at(hours, quality, Utc::now())
    }

    /// Append a sleep log; the list is kept oldest first
    pub fn log_at(&self, hours: f64, quality: SleepQuality, at: DateTime<Utc>) -> Result<SleepLog> {
        let mut logs = self.repository.load_sleep_logs()?;
        let previous_id = logs.iter().map(|l| l.id).max();

        let log = SleepLog::new(hours, quality, at, previous_id)?;
        logs.push(log.clone());
        self.repository.save_sleep_logs(&logs)?;

        info!(id = log.id, hours, quality = %quality, "logged sleep");
        Ok(log)
    }

    pub fn list(&self) -> Result<Vec<SleepLog>> {
        self.repository.load_sleep_logs()
    }
}
