//! Daily gratitude items

use crate::domain::entry::next_id;
use crate::error::{MindcapsError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GratitudeItem {
    pub id: i64,
    pub text: String,
    pub date: DateTime<Utc>,
}

impl GratitudeItem {
    /// Create an item from user text; blank text is rejected
    pub fn new(text: &str, at: DateTime<Utc>, previous_id: Option<i64>) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(MindcapsError::InvalidInput(
                "gratitude text cannot be empty".to_string(),
            ));
        }

        Ok(GratitudeItem {
            id: next_id(at, previous_id)?,
            text: text.to_string(),
            date: at,
        })
    }
}

/// Remove the item with `id`, returning it
pub fn remove_gratitude(items: &mut Vec<GratitudeItem>, id: i64) -> Result<GratitudeItem> {
    let index = items
        .iter()
        .position(|g| g.id == id)
        .ok_or_else(|| MindcapsError::NotFound(format!("no gratitude item with id {}", id)))?;
    Ok(items.remove(index))
}
