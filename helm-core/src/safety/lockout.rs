//! Low-speed steering lockout
//!
//! Vehicles whose power steering cuts out at a high speed lose steering
//! just below that speed. The lockout engages a margin above the cut-off
//! and clears only once the car is clearly above it, so it does not
//! chatter at the threshold.

use crate::config::ControlConfig;

/// Hysteresis latch over vehicle speed
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SteerLockout {
    active: bool,
    set_margin: f32,
    clear_margin: f32,
    min_applicable: f32,
}

impl SteerLockout {
    pub fn new(config: &ControlConfig) -> Self {
        Self {
            active: false,
            set_margin: config.lockout_set_margin,
            clear_margin: config.lockout_clear_margin,
            min_applicable: config.lockout_min_steer_speed,
        }
    }

    /// Feed one speed sample and return the lockout state
    ///
    /// # Arguments
    /// - `v_ego`: Vehicle speed (m/s)
    /// - `min_steer_speed`: Steering cut-off of this vehicle (m/s)
    pub fn update(&mut self, v_ego: f32, min_steer_speed: f32) -> bool {
        if v_ego < min_steer_speed + self.set_margin && min_steer_speed >= self.min_applicable {
            self.active = true;
        }
        if v_ego > min_steer_speed + self.clear_margin {
            self.active = false;
        }
        self.active
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reset(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lockout() -> SteerLockout {
        SteerLockout::new(&ControlConfig::default())
    }

    #[test]
    fn test_sets_below_margin() {
        let mut l = lockout();
        assert!(!l.update(12.0, 10.0));
        assert!(l.update(10.19, 10.0));
    }

    #[test]
    fn test_holds_inside_band() {
        let mut l = lockout();
        assert!(l.update(10.1, 10.0));
        assert!(l.update(10.5, 10.0));
        assert!(l.update(10.69, 10.0));
    }

    #[test]
    fn test_clears_above_margin() {
        let mut l = lockout();
        assert!(l.update(10.1, 10.0));
        assert!(!l.update(10.71, 10.0));
        // Inside the band again without dropping below the set point
        assert!(!l.update(10.5, 10.0));
    }

    #[test]
    fn test_low_cutoff_never_locks() {
        let mut l = lockout();
        assert!(!l.update(0.0, 0.0));
        assert!(!l.update(9.0, 9.9));
    }
}
