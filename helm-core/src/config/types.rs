//! Control loop configuration
//!
//! Loaded once at startup and immutable for the process lifetime.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shortest supported cycle period
pub const MIN_CYCLE_PERIOD_MS: u32 = 5;

/// Longest supported cycle period
pub const MAX_CYCLE_PERIOD_MS: u32 = 100;

/// Configuration validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ValidationError {
    /// Cycle period outside the supported range
    CyclePeriod,
    /// Fault clearing needs at least one valid cycle
    FaultClearCycles,
    /// Lockout set margin must be below the clear margin
    LockoutMargins,
    /// A speed or mass parameter is negative or not finite
    VehicleParameter,
    /// Bus index outside 0..=2
    BusIndex,
    /// Checksum variant cannot be used for the steering frame
    SteeringChecksum,
}

/// Timing and hysteresis parameters of the control loop
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ControlConfig {
    /// Control cycle period (ms)
    pub cycle_period_ms: u32,
    /// Consecutive valid cycles needed to leave Faulted
    pub fault_clear_cycles: u16,
    /// Time spent in SoftDisabling before disengaging (ms)
    pub soft_disable_timeout_ms: u32,
    /// Lockout engages below min steer speed plus this margin (m/s)
    pub lockout_set_margin: f32,
    /// Lockout clears above min steer speed plus this margin (m/s)
    pub lockout_clear_margin: f32,
    /// Lockout applies only to vehicles whose min steer speed reaches this (m/s)
    pub lockout_min_steer_speed: f32,
    /// Minimum speed for lane changes (m/s)
    pub lane_change_speed_min: f32,
    /// Show alert speeds in km/h
    pub metric: bool,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            cycle_period_ms: 10,
            fault_clear_cycles: 1,
            soft_disable_timeout_ms: 3000,
            lockout_set_margin: 0.2,
            lockout_clear_margin: 0.7,
            lockout_min_steer_speed: 10.0,
            lane_change_speed_min: 20.1168,
            metric: true,
        }
    }
}

impl ControlConfig {
    /// Check the configuration for values the loop cannot run with
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_CYCLE_PERIOD_MS..=MAX_CYCLE_PERIOD_MS).contains(&self.cycle_period_ms) {
            return Err(ValidationError::CyclePeriod);
        }
        if self.fault_clear_cycles == 0 {
            return Err(ValidationError::FaultClearCycles);
        }
        if !self.lockout_clear_margin.is_finite()
            || self.lockout_set_margin >= self.lockout_clear_margin
        {
            return Err(ValidationError::LockoutMargins);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(ControlConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_bad_period() {
        let config = ControlConfig {
            cycle_period_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::CyclePeriod));
    }

    #[test]
    fn test_rejects_inverted_margins() {
        let config = ControlConfig {
            lockout_set_margin: 0.7,
            lockout_clear_margin: 0.2,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::LockoutMargins));
    }
}
