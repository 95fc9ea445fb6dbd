//! List entries use case

use crate::domain::JournalEntry;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository};

/// Entries in stored order, optionally limited to the first `limit`.
pub fn list_entries(
    repository: &FileSystemRepository,
    limit: Option<usize>,
) -> Result<Vec<JournalEntry>> {
    let mut entries = repository.load_entries()?;
    if let Some(n) = limit {
        entries.truncate(n);
    }
    Ok(entries)
}
