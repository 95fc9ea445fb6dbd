//! Meditation countdown timer
//!
//! The timer has no clock of its own: the host calls [`MeditationTimer::tick`]
//! once per elapsed second while it is running.

/// Default session length in seconds
pub const DEFAULT_SECONDS: u32 = 300;

/// Outcome of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Timer is paused; nothing changed
    Idle,
    /// One second elapsed, this many remain
    Tick(u32),
    /// Countdown reached zero; the timer has been reset
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeditationTimer {
    duration: u32,
    remaining: u32,
    running: bool,
}

impl Default for MeditationTimer {
    fn default() -> Self {
        Self::new(DEFAULT_SECONDS)
    }
}

impl MeditationTimer {
    pub fn new(duration: u32) -> Self {
        MeditationTimer {
            duration,
            remaining: duration,
            running: false,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start counting down. Has no effect if already running.
    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Start if paused, pause if running
    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Stop and restore the full duration
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining = self.duration;
    }

    pub fn tick(&mut self) -> TimerEvent {
        if !self.running {
            return TimerEvent::Idle;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.reset();
            TimerEvent::Completed
        } else {
            TimerEvent::Tick(self.remaining)
        }
    }

    /// Remaining time as MM:SS
    pub fn display(&self) -> String {
        format_clock(self.remaining)
    }
}

pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
