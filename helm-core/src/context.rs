//! Runtime context for computed alerts

/// m/s to km/h
pub const MS_TO_KPH: f32 = 3.6;

/// m/s to mph
pub const MS_TO_MPH: f32 = 2.236_936;

/// Speed calibration needs before it makes progress (m/s)
pub const CALIBRATION_MIN_SPEED: f32 = 7.0;

/// Values computed alerts may read
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlertContext {
    /// Show speeds in km/h rather than mph
    pub metric: bool,
    /// Steering cut-off speed of the vehicle (m/s)
    pub min_steer_speed: f32,
    /// Camera calibration progress (percent)
    pub calibration_percent: u8,
    /// GPS antenna is built into the device
    pub gps_integrated: bool,
    /// Seconds until an automatic lane change starts
    pub lane_change_countdown_s: u8,
}

impl Default for AlertContext {
    fn default() -> Self {
        Self {
            metric: true,
            min_steer_speed: 0.0,
            calibration_percent: 0,
            gps_integrated: true,
            lane_change_countdown_s: 0,
        }
    }
}

impl AlertContext {
    /// Display unit label
    pub fn speed_unit(&self) -> &'static str {
        if self.metric {
            "km/h"
        } else {
            "mph"
        }
    }

    /// Convert m/s to display units
    pub fn display_speed(&self, speed_ms: f32) -> f32 {
        speed_ms * if self.metric { MS_TO_KPH } else { MS_TO_MPH }
    }
}

/// Round a non-negative value to the nearest integer
pub(crate) fn round_positive(value: f32) -> u32 {
    if value <= 0.0 {
        0
    } else {
        (value + 0.5) as u32
    }
}
