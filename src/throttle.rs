//! Instruction-rate limiting.
//!
//! The throttle keeps the run loop on an absolute schedule: after `n`
//! instructions, at least `n / target_hz` seconds must have elapsed since the
//! loop started. Sleeping against the schedule instead of a fixed
//! per-instruction interval means oversleeping on one step is paid back on
//! the following ones.

use std::thread;
use std::time::{Duration, Instant};

/// Paces instruction execution to a target frequency.
#[derive(Debug, Clone)]
pub struct Throttle {
    target_hz: f64,
    start: Instant,
    executed: u64,
}

impl Throttle {
    /// Starts a schedule at `target_hz` instructions per second, measured from now.
    pub fn new(target_hz: f64) -> Self {
        Self {
            target_hz,
            start: Instant::now(),
            executed: 0,
        }
    }

    pub fn target_hz(&self) -> f64 {
        self.target_hz
    }

    /// Instructions accounted for so far.
    pub fn executed(&self) -> u64 {
        self.executed
    }

    /// Records one executed instruction and sleeps until the schedule catches up.
    pub fn pace(&mut self) {
        self.executed += 1;
        if let Some(delay) = self.delay_for(self.start.elapsed()) {
            thread::sleep(delay);
        }
    }

    /// How long to sleep, given the wall-clock time elapsed since the start, for
    /// the instructions executed so far. `None` when already behind schedule.
    pub fn delay_for(&self, elapsed: Duration) -> Option<Duration> {
        if self.target_hz <= 0.0 || !self.target_hz.is_finite() {
            return None;
        }
        // Saturates for rates so slow the schedule leaves the Duration range
        let due = Duration::try_from_secs_f64(self.executed as f64 / self.target_hz)
            .unwrap_or(Duration::MAX);
        due.checked_sub(elapsed).filter(|d| !d.is_zero())
    }
}
