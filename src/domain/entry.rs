//! Mood journal entries

use crate::domain::sentiment::{classify, Sentiment};
use crate::error::{MindcapsError, Result};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Moods offered by the journal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    Sad,
    Stressed,
    Calm,
    Excited,
}

impl Mood {
    /// All moods in display order
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Stressed,
        Mood::Calm,
        Mood::Excited,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Stressed => "Stressed",
            Mood::Calm => "Calm",
            Mood::Excited => "Excited",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Sad => "😢",
            Mood::Stressed => "😰",
            Mood::Calm => "😌",
            Mood::Excited => "🤩",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "sad" => Ok(Mood::Sad),
            "stressed" => Ok(Mood::Stressed),
            "calm" => Ok(Mood::Calm),
            "excited" => Ok(Mood::Excited),
            _ => Err(format!(
                "Unknown mood: '{}'. Valid moods are: happy, sad, stressed, calm, excited",
                s
            )),
        }
    }
}

/// Mood intensity on a 1-10 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Intensity(u8);

impl Intensity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: u8) -> Result<Self> {
        Self::try_from(value).map_err(MindcapsError::InvalidInput)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Intensity(5)
    }
}

impl TryFrom<u8> for Intensity {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Intensity(value))
        } else {
            Err(format!(
                "intensity must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            ))
        }
    }
}

impl From<Intensity> for u8 {
    fn from(intensity: Intensity) -> Self {
        intensity.0
    }
}

/// A single mood journal record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Creation time in milliseconds since the epoch; unique key
    pub id: i64,
    pub date: DateTime<Utc>,
    pub mood: Mood,
    pub intensity: Intensity,
    #[serde(default)]
    pub note: String,
    pub sentiment: Sentiment,
}

impl JournalEntry {
    /// Create an entry at `at`, deriving its sentiment from the note.
    ///
    /// `previous_id` is the largest id already in the collection; the new id
    /// is bumped past it when the clock alone would collide.
    pub fn new(
        mood: Mood,
        intensity: Intensity,
        note: &str,
        at: DateTime<Utc>,
        previous_id: Option<i64>,
    ) -> Result<Self> {
        let note = note.trim().to_string();
        let sentiment = classify(&note);
        Ok(JournalEntry {
            id: next_id(at, previous_id)?,
            date: at,
            mood,
            intensity,
            note,
            sentiment,
        })
    }

    /// Calendar day of this entry in the given time zone
    pub fn day_in<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDate {
        self.date.with_timezone(tz).date_naive()
    }

    /// Note shortened for list display
    pub fn note_preview(&self, max_chars: usize) -> String {
        if self.note.chars().count() > max_chars {
            let head: String = self.note.chars().take(max_chars).collect();
            format!("{}...", head)
        } else {
            self.note.clone()
        }
    }
}

/// Millisecond timestamp id, strictly greater than `previous`
pub fn next_id(at: DateTime<Utc>, previous: Option<i64>) -> Result<i64> {
    let millis = at.timestamp_millis();
    match previous {
        Some(prev) if prev >= millis => prev.checked_add(1).ok_or_else(|| {
            MindcapsError::Storage(format!("no id left after stored id {}", prev))
        }),
        _ => Ok(millis),
    }
}
