//! Theme preference use case

use crate::domain::Theme;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use tracing::info;

pub struct ThemeService {
    repository: FileSystemRepository,
}

impl ThemeService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ThemeService { repository }
    }

    pub fn current(&self) -> Result<Theme> {
        self.repository.load_theme()
    }

    pub fn set(&self, theme: Theme) -> Result<Theme> {
        self.repository.save_theme(theme)?;
        info!(theme = theme.as_str(), "theme changed");
        Ok(theme)
    }

    /// Switch between light and dark, returning the new theme
    pub fn toggle(&self) -> Result<Theme> {
        let next = self.current()?.toggled();
        self.set(next)
    }
}
