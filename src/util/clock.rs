//! Wall-clock timing of a quiz attempt

use std::time::{Duration, Instant};

use crate::session::Screen;

/// Measures how long an attempt took
///
/// The clock is driven by the active screen: entering the quiz starts it,
/// reaching the results stops it, and returning to the welcome screen
/// clears it.
#[derive(Debug, Default)]
pub struct AttemptClock {
    started: Option<Instant>,
    finished: Option<Duration>,
}

impl AttemptClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the clock after a handler has run
    pub fn observe(&mut self, screen: Screen) {
        match screen {
            Screen::Quiz if self.started.is_none() => {
                self.started = Some(Instant::now());
                self.finished = None;
            }
            Screen::Results | Screen::Review if self.finished.is_none() => {
                self.finished = self.started.map(|start| start.elapsed());
            }
            Screen::Welcome | Screen::Presentation => self.reset(),
            _ => {}
        }
    }

    pub fn reset(&mut self) {
        self.started = None;
        self.finished = None;
    }

    /// Duration of the finished attempt, if one was timed
    pub fn elapsed(&self) -> Option<Duration> {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_follows_screens() {
        let mut clock = AttemptClock::new();
        assert!(clock.elapsed().is_none());

        clock.observe(Screen::Quiz);
        assert!(clock.elapsed().is_none());

        clock.observe(Screen::Results);
        let first = clock.elapsed().unwrap();

        // moving between results and review keeps the recorded time
        clock.observe(Screen::Review);
        clock.observe(Screen::Results);
        assert_eq!(clock.elapsed(), Some(first));

        clock.observe(Screen::Welcome);
        assert!(clock.elapsed().is_none());
    }

    #[test]
    fn test_results_without_quiz_has_no_time() {
        let mut clock = AttemptClock::new();
        clock.observe(Screen::Results);
        assert!(clock.elapsed().is_none());
    }
}
