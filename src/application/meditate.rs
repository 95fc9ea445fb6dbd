//! Meditation session use case

use crate::domain::{breathing_steps, BreathStep, MeditationTimer, TimerEvent};
use tracing::info;

/// Run `timer` to completion.
///
/// `wait` is called before every tick and is expected to block for one
/// second; `render` sees the timer after each tick, including the final
/// `Completed` event.
pub fn run_session<W, R>(timer: &mut MeditationTimer, mut wait: W, mut render: R) -> u32
where
    W: FnMut(),
    R: FnMut(TimerEvent, &MeditationTimer),
{
    let mut elapsed = 0;
    timer.start();
    info!(seconds = timer.remaining(), "meditation started");

    loop {
        wait();
        let event = timer.tick();
        elapsed += 1;
        render(event, timer);
        if !matches!(event, TimerEvent::Tick(_)) {
            break;
        }
    }

    info!(elapsed, "meditation finished");
    elapsed
}

/// Guide `rounds` breathing rounds.
///
/// `render` announces each step before `wait` is asked to block for the
/// step's length in seconds. Returns the total seconds waited.
pub fn run_breathing<W, R>(rounds: u32, mut wait: W, mut render: R) -> u32
where
    W: FnMut(u32),
    R: FnMut(&BreathStep),
{
    info!(rounds, "breathing exercise started");
    let mut elapsed = 0;

    for step in breathing_steps(rounds) {
        render(&step);
        wait(step.seconds);
        elapsed += step.seconds;
    }

    info!(elapsed, "breathing exercise finished");
    elapsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BreathPhase;

    #[test]
    fn test_runs_every_second_until_complete() {
        let mut timer = MeditationTimer::new(3);
        let mut waits = 0;
        let mut seen = Vec::new();

        let elapsed = run_session(
            &mut timer,
            || waits += 1,
            |event, t| seen.push((event, t.display())),
        );

        assert_eq!(elapsed, 3);
        assert_eq!(waits, 3);
        assert_eq!(
            seen,
            vec![
                (TimerEvent::Tick(2), "00:02".to_string()),
                (TimerEvent::Tick(1), "00:01".to_string()),
                (TimerEvent::Completed, "00:03".to_string()),
            ]
        );
        assert!(!timer.is_running());
    }

    #[test]
    fn test_zero_length_session_completes_at_once() {
        let mut timer = MeditationTimer::new(0);
        let elapsed = run_session(&mut timer, || {}, |_, _| {});
        assert_eq!(elapsed, 1);
    }

    #[test]
    fn test_breathing_announces_then_waits() {
        let log = std::cell::RefCell::new(Vec::new());

        let elapsed = run_breathing(
            2,
            |secs| log.borrow_mut().push(format!("wait {}", secs)),
            |step| log.borrow_mut().push(format!("{} {}", step.round, step.phase)),
        );

        assert_eq!(elapsed, 24);
        let log = log.into_inner();
        assert_eq!(log.len(), 12);
        assert_eq!(log[0], "1 Inhale...");
        assert_eq!(log[1], "wait 4");
        assert_eq!(log[2], "1 Hold...");
        assert_eq!(log[4], "1 Exhale...");
        assert_eq!(log[6], "2 Inhale...");
        assert_eq!(log[11], "wait 4");
    }

    #[test]
    fn test_breathing_default_rounds() {
        let mut phases = Vec::new();
        let elapsed = run_breathing(
            crate::domain::breathing::DEFAULT_ROUNDS,
            |_| {},
            |step| phases.push(step.phase),
        );
        assert_eq!(elapsed, 36);
        assert_eq!(phases.len(), 9);
        assert_eq!(phases.last(), Some(&BreathPhase::Exhale));
    }
}
