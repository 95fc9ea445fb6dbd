//! mindcaps - Terminal mood journal
//!
//! Records mood entries with intensity and notes, keeps gratitude and sleep
//! logs, and derives streaks, keyword sentiment and chart statistics from the
//! stored data.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MindcapsError;
