//! Upstream link monitor
//!
//! Tracks whether the transport is delivering valid vehicle state and how
//! long it has done so since the last gap.

/// Link health status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkStatus {
    /// Valid input for at least the clearing window
    Healthy,
    /// Valid input resumed but the clearing window has not elapsed
    Recovering,
    /// No valid input this cycle
    Lost,
}

/// Clearing hysteresis for the communications fault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkMonitor {
    /// Consecutive valid cycles required to clear a fault
    clear_cycles: u16,
    /// Consecutive valid cycles so far
    valid_streak: u16,
    /// Whether the last cycle was valid
    last_valid: bool,
    /// Cycles lost since start
    lost_cycles: u32,
}

impl LinkMonitor {
    pub fn new(clear_cycles: u16) -> Self {
        Self {
            clear_cycles: clear_cycles.max(1),
            valid_streak: 0,
            last_valid: false,
            lost_cycles: 0,
        }
    }

    /// Record a cycle with valid input
    pub fn record_valid(&mut self) {
        self.valid_streak = self.valid_streak.saturating_add(1);
        self.last_valid = true;
    }

    /// Record a cycle with missing or invalid input
    pub fn record_lost(&mut self) {
        self.valid_streak = 0;
        self.last_valid = false;
        self.lost_cycles = self.lost_cycles.saturating_add(1);
    }

    /// Check link health
    pub fn check(&self) -> LinkStatus {
        if !self.last_valid {
            LinkStatus::Lost
        } else if self.valid_streak >= self.clear_cycles {
            LinkStatus::Healthy
        } else {
            LinkStatus::Recovering
        }
    }

    /// Get number of consecutive valid cycles
    pub fn valid_streak(&self) -> u16 {
        self.valid_streak
    }

    /// Get total number of lost cycles
    pub fn lost_cycles(&self) -> u32 {
        self.lost_cycles
    }
}
