//! # Cycle Clock
//!
//! A monotonic cycle counter owned by one CPU. The engine ticks it once per
//! memory access and then by each instruction's fixed remaining cost.

/// Monotonic, never-decremented cycle counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Clock {
    counter: u64,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the clock by `ticks` cycles.
    pub fn tick(&mut self, ticks: u64) {
        self.counter = self.counter.saturating_add(ticks);
    }

    /// Total cycles elapsed since the clock was created.
    pub fn cycles(&self) -> u64 {
        self.counter
    }
}
