//! Gratitude list use cases

use crate::domain::gratitude::remove_gratitude;
use crate::domain::GratitudeItem;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use chrono::{DateTime, Utc};
use tracing::info;

pub struct GratitudeService {
    repository: FileSystemRepository,
}

impl GratitudeService {
    pub fn new(repository: FileSystemRepository) -> Self {
        GratitudeService { repository }
    }

    pub fn add(&self, text: &str) -> Result<GratitudeItem> {
        self.add_at(text, Utc::now())
    }

    /// Add an item at the front of the list
    pub fn add_at(&self, text: &str, at: DateTime<Utc>) -> Result<GratitudeItem> {
        let mut items = self.repository.load_gratitudes()?;
        let previous_id = items.iter().map(|g| g.id).max();

        let item = GratitudeItem::new(text, at, previous_id)?;
        items.insert(0, item.clone());
        self.repository.save_gratitudes(&items)?;

        info!(id = item.id, "added gratitude");
        Ok(item)
    }

    pub fn list(&self) -> Result<Vec<GratitudeItem>> {
        self.repository.load_gratitudes()
    }

    pub fn delete(&self, id: i64) -> Result<GratitudeItem> {
        let mut items = self.repository.load_gratitudes()?;
        let removed = remove_gratitude(&mut items, id)?;
        self.repository.save_gratitudes(&items)?;

        info!(id, "deleted gratitude");
        Ok(removed)
    }
}
