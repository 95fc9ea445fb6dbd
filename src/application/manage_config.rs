//! Config management use case

use crate::error::{MindcapsError, Result};
use crate::infrastructure::{Config, DayBoundary, FileSystemRepository, JournalRepository};
use std::str::FromStr;

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "timezone" => Ok(config.timezone.as_str().to_string()),
            _ => Err(MindcapsError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: timezone",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "timezone" => {
                config.timezone = DayBoundary::from_str(value).map_err(MindcapsError::Config)?;
            }
            "created" => {
                return Err(MindcapsError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MindcapsError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: timezone",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service() -> (TempDir, ConfigService) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new(DayBoundary::Local)).unwrap();
        (temp, ConfigService::new(repo))
    }

    #[test]
    fn test_get_and_set_timezone() {
        let (_temp, service) = service();
        assert_eq!(service.get("timezone").unwrap(), "local");

        service.set("timezone", "UTC").unwrap();
        assert_eq!(service.get("timezone").unwrap(), "utc");
    }

    #[test]
    fn test_invalid_timezone_rejected() {
        let (_temp, service) = service();
        match service.set("timezone", "mars").unwrap_err() {
            MindcapsError::Config(msg) => assert!(msg.contains("Invalid timezone")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_created_is_read_only_and_hidden() {
        let (_temp, service) = service();
        assert!(service.set("created", "2024-01-01").is_err());
        assert!(service.get("created").is_err());
    }

    #[test]
    fn test_unknown_key() {
        let (_temp, service) = service();
        assert!(service.get("editor").is_err());
        assert!(service.set("editor", "vim").is_err());
    }
}
