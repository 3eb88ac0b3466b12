//! Simulation clock - day and hour counters.

use serde::{Deserialize, Serialize};

use crate::constants::clock::DAY_LENGTH_HOURS;

/// Tracks the current day and the hour within that day.
///
/// The hour is not clamped: an action whose time cost overruns the day
/// pushes it past [`DAY_LENGTH_HOURS`], and callers check
/// [`Clock::is_day_over`] after advancing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    pub day: u32,
    pub hour: u32,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, hours: u32) {
        self.hour = self.hour.saturating_add(hours);
    }

    pub fn start_new_day(&mut self) {
        self.day += 1;
        self.hour = 0;
    }

    pub fn is_day_over(&self) -> bool {
        self.hour >= DAY_LENGTH_HOURS
    }

    /// Hours left before the day ends (0 once over).
    pub fn hours_remaining(&self) -> u32 {
        DAY_LENGTH_HOURS.saturating_sub(self.hour)
    }
}
