//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod repository;
pub mod store;

pub use config::{Config, DayBoundary};
pub use repository::{FileSystemRepository, JournalRepository};
pub use store::{FileStore, KeyValueStore};
