//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, DayBoundary, FileSystemRepository, JournalRepository};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new journal at the specified path.
pub fn init(path: &Path, timezone: DayBoundary) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let config = Config::new(timezone);
    repo.save_config(&config)?;

    info!(root = %path.display(), timezone = timezone.as_str(), "initialized journal");
    println!("Initialized mindcaps journal at {}", path.display());
    println!("Timezone: {}", timezone.as_str());

    Ok(())
}
