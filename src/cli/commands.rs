//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mindcaps")]
#[command(about = "Mood journal with streaks, gratitude and sleep tracking", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Calendar used to decide day boundaries (local, utc)
        #[arg(short, long, default_value = "local")]
        timezone: String,
    },

    /// Record how you feel
    Log {
        /// Mood (happy, sad, stressed, calm, excited)
        mood: String,

        /// Intensity from 1 to 10
        #[arg(short, long, default_value_t = 5)]
        intensity: u8,

        /// Free-text note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// List journal entries, newest first
    List {
        /// Show at most this many entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show the current logging streak
    Streak {
        /// Reference date (YYYY-MM-DD, default: today)
        #[arg(long)]
        today: Option<String>,
    },

    /// Show mood, sentiment, intensity and sleep statistics
    Stats {
        /// Reference date (YYYY-MM-DD, default: today)
        #[arg(long)]
        today: Option<String>,
    },

    /// Manage gratitude items
    Gratitude {
        #[command(subcommand)]
        action: GratitudeAction,
    },

    /// Track sleep
    Sleep {
        #[command(subcommand)]
        action: SleepAction,
    },

    /// Show or change the theme (light, dark, toggle)
    Theme {
        value: Option<String>,
    },

    /// Run a meditation countdown or a guided breathing exercise
    Meditate {
        /// Session length in minutes
        #[arg(short, long, default_value_t = 5)]
        minutes: u32,

        /// Guided inhale/hold/exhale cycle instead of the countdown
        #[arg(short, long)]
        breathing: bool,

        /// Breathing rounds
        #[arg(short, long, default_value_t = 3, requires = "breathing")]
        rounds: u32,
    },

    /// Export entries as JSON
    Export {
        /// Output file ('-' for stdout; default: mindcaps_backup_<date>.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import entries from an export file
    Import {
        /// JSON file produced by 'mindcaps export'
        file: PathBuf,

        /// replace: discard current entries; merge: put imported entries first
        #[arg(short, long)]
        mode: String,
    },

    /// Delete all mood entries
    Clear {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum GratitudeAction {
    /// Add something you are grateful for
    Add { text: String },
    /// List gratitude items, newest first
    List,
    /// Delete a gratitude item by id
    Delete { id: i64 },
}

#[derive(Subcommand, Debug)]
pub enum SleepAction {
    /// Log last night's sleep
    Log {
        /// Hours slept (0-24)
        hours: f64,

        /// Quality (great, good, fair, poor)
        #[arg(short, long, default_value = "good")]
        quality: String,
    },
    /// List sleep logs, oldest first
    List,
}
