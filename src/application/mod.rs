//! Application layer - Use cases and orchestration

pub mod gratitude;
pub mod init;
pub mod list_entries;
pub mod log_entry;
pub mod manage_config;
pub mod meditate;
pub mod sleep;
pub mod stats;
pub mod theme;
pub mod transfer;

pub use gratitude::GratitudeService;
pub use log_entry::LogEntryService;
pub use manage_config::ConfigService;
pub use sleep::SleepService;
pub use stats::{Dashboard, StatsService, StatsSummary};
pub use theme::ThemeService;
pub use transfer::TransferService;
