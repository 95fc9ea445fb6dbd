//! Domain layer - Journal data and the pure algorithms over it

pub mod breathing;
pub mod entry;
pub mod gratitude;
pub mod greeting;
pub mod import;
pub mod sentiment;
pub mod sleep;
pub mod stats;
pub mod streak;
pub mod theme;
pub mod timer;

pub use breathing::{breathing_steps, BreathPhase, BreathStep};
pub use entry::{Intensity, JournalEntry, Mood};
pub use gratitude::GratitudeItem;
pub use import::{import_entries, parse_entries, ImportMode};
pub use sentiment::{classify, Sentiment};
pub use sleep::{SleepLog, SleepQuality};
pub use streak::compute_streak;
pub use theme::Theme;
pub use timer::{MeditationTimer, TimerEvent};
