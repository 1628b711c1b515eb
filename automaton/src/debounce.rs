// debounce.rs - Collapses bursts of resize events into one action

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self { quiet, deadline: None }
    }

    /// Records activity; pushes the deadline back by the quiet period.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet);
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once, the first time it's polled after the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until it fires, if anything is pending.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: Duration = Duration::from_millis(250);

    #[test]
    fn fires_once_after_quiet_period() {
        let t0 = Instant::now();
        let mut debounce = Debouncer::new(QUIET);
        debounce.trigger(t0);

        assert!(!debounce.poll(t0 + Duration::from_millis(249)));
        assert!(debounce.poll(t0 + QUIET));
        assert!(!debounce.poll(t0 + Duration::from_secs(5)));
        assert!(!debounce.is_pending());
    }

    #[test]
    fn burst_collapses_into_one() {
        let t0 = Instant::now();
        let mut debounce = Debouncer::new(QUIET);
        let mut fired = 0;
        for ms in (0..1000).step_by(50) {
            let now = t0 + Duration::from_millis(ms);
            debounce.trigger(now);
            if debounce.poll(now) {
                fired += 1;
            }
        }
        assert_eq!(fired, 0);

        let last = t0 + Duration::from_millis(950);
        assert_eq!(debounce.remaining(last), Some(QUIET));
        assert!(debounce.poll(last + QUIET));
    }

    #[test]
    fn idle_debouncer_never_fires() {
        let mut debounce = Debouncer::new(QUIET);
        assert_eq!(debounce.remaining(Instant::now()), None);
        assert!(!debounce.poll(Instant::now() + Duration::from_secs(1)));
    }
}
