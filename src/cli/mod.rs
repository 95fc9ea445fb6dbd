//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, GratitudeAction, SleepAction};
pub use output::{
    format_dashboard, format_entry_list, format_gratitude_list, format_sleep_list, format_stats,
    format_streak,
};
