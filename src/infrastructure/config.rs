//! Configuration management

use crate::error::{MindcapsError, Result};
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Directory holding config and stored documents inside a journal root
pub const DATA_DIR: &str = ".mindcaps";

/// Which clock decides where one calendar day ends and the next begins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DayBoundary {
    /// The system's local time zone, including daylight-saving shifts
    #[default]
    Local,
    Utc,
}

impl DayBoundary {
    /// Current calendar date under this boundary
    pub fn today(&self) -> NaiveDate {
        self.date_of(Utc::now())
    }

    /// Calendar date of the instant `at` under this boundary
    pub fn date_of(&self, at: DateTime<Utc>) -> NaiveDate {
        match self {
            DayBoundary::Local => at.with_timezone(&Local).date_naive(),
            DayBoundary::Utc => at.date_naive(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayBoundary::Local => "local",
            DayBoundary::Utc => "utc",
        }
    }
}

impl FromStr for DayBoundary {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(DayBoundary::Local),
            "utc" => Ok(DayBoundary::Utc),
            _ => Err(format!(
                "Invalid timezone: '{}'. Valid timezones are: local, utc",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timezone: DayBoundary,
    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new(timezone: DayBoundary) -> Self {
        Config {
            timezone,
            created: Utc::now(),
        }
    }

    /// Load config from .mindcaps/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(DATA_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MindcapsError::NotMindcapsDirectory(path.to_path_buf())
            } else {
                MindcapsError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| MindcapsError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .mindcaps/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let data_dir = path.join(DATA_DIR);
        let config_path = data_dir.join("config.toml");

        if !data_dir.exists() {
            fs::create_dir(&data_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| MindcapsError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}
