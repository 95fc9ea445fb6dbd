//! Guided breathing cycle

use std::fmt;

/// Seconds spent in each phase
pub const PHASE_SECONDS: u32 = 4;

/// Rounds in a default exercise
pub const DEFAULT_ROUNDS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreathPhase {
    Inhale,
    Hold,
    Exhale,
}

impl BreathPhase {
    /// Order of phases within one round
    pub const CYCLE: [BreathPhase; 3] =
        [BreathPhase::Inhale, BreathPhase::Hold, BreathPhase::Exhale];

    pub fn prompt(&self) -> &'static str {
        match self {
            BreathPhase::Inhale => "Inhale...",
            BreathPhase::Hold => "Hold...",
            BreathPhase::Exhale => "Exhale...",
        }
    }
}

impl fmt::Display for BreathPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prompt())
    }
}

/// One step of the exercise: the 1-based round and the phase to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreathStep {
    pub round: u32,
    pub phase: BreathPhase,
    pub seconds: u32,
}

/// Every step of a `rounds`-round exercise, in order
pub fn breathing_steps(rounds: u32) -> impl Iterator<Item = BreathStep> {
    (1..=rounds).flat_map(|round| {
        BreathPhase::CYCLE.into_iter().map(move |phase| BreathStep {
            round,
            phase,
            seconds: PHASE_SECONDS,
        })
    })
}
