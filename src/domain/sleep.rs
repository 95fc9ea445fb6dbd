//! Sleep log records

use crate::domain::entry::next_id;
use crate::error::{MindcapsError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SleepQuality {
    Great,
    #[default]
    Good,
    Fair,
    Poor,
}

impl fmt::Display for SleepQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SleepQuality::Great => "Great",
            SleepQuality::Good => "Good",
            SleepQuality::Fair => "Fair",
            SleepQuality::Poor => "Poor",
        };
        f.write_str(label)
    }
}

impl FromStr for SleepQuality {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "great" => Ok(SleepQuality::Great),
            "good" => Ok(SleepQuality::Good),
            "fair" => Ok(SleepQuality::Fair),
            "poor" => Ok(SleepQuality::Poor),
            _ => Err(format!(
                "Unknown sleep quality: '{}'. Valid values are: great, good, fair, poor",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepLog {
    pub id: i64,
    pub date: DateTime<Utc>,
    pub hours: f64,
    pub quality: SleepQuality,
}

impl SleepLog {
    pub const MAX_HOURS: f64 = 24.0;

    pub fn new(
        hours: f64,
        quality: SleepQuality,
        at: DateTime<Utc>,
        previous_id: Option<i64>,
    ) -> Result<Self> {
        if !hours.is_finite() || !(0.0..=Self::MAX_HOURS).contains(&hours) {
            return Err(MindcapsError::InvalidInput(format!(
                "sleep hours must be between 0 and {}, got {}",
                Self::MAX_HOURS,
                hours
            )));
        }

        Ok(SleepLog {
            id: next_id(at, previous_id)?,
            date: at,
            hours,
            quality,
        })
    }
}
