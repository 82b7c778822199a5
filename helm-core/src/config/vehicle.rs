//! Static vehicle parameter bundle
//!
//! Supplied once at initialization. Tuning values are carried through
//! unchanged; only the fields the core acts on are interpreted here.

use heapless::String;

use helm_protocol::{ChecksumVariant, LkasHud};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::ValidationError;

/// Maximum vehicle name length
pub const MAX_VEHICLE_NAME_LEN: usize = 32;

/// Highest bus index on the harness
pub const MAX_BUS: u8 = 2;

/// Which physical bus carries each actuator module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BusAssignment {
    /// Power-steering unit (1 = behind the harness)
    pub mdps: u8,
    /// Smart cruise radar
    pub scc: u8,
    /// Lane-keeping camera
    pub lkas: u8,
}

impl BusAssignment {
    /// Power-steering frames must be forwarded by us
    pub fn mdps_behind_harness(&self) -> bool {
        self.mdps == 1
    }
}

/// Vehicle parameters
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VehicleParams {
    /// Profile name
    pub name: String<MAX_VEHICLE_NAME_LEN>,
    /// Curb mass plus driver (kg)
    pub mass: f32,
    /// Wheelbase (m)
    pub wheelbase: f32,
    /// Steering ratio
    pub steer_ratio: f32,
    /// Speed below which steering is unavailable (m/s)
    pub min_steer_speed: f32,
    /// Speed below which engagement is refused (m/s)
    pub min_enable_speed: f32,
    /// Checksum variant of the steering frame
    pub checksum: ChecksumVariant,
    /// Cluster lane display style
    pub lkas_hud: LkasHud,
    pub buses: BusAssignment,
    /// We command acceleration instead of the stock cruise
    pub long_control: bool,
    /// Car has the lane-following / highway-driving-assist cluster icons
    pub has_lfa_hda: bool,
    /// Keep steering while pedals are used, without long control
    pub mad_mode: bool,
    /// Engagement follows the stock cruise main state
    pub enable_cruise: bool,
}

impl Default for VehicleParams {
    fn default() -> Self {
        Self {
            name: String::new(),
            mass: 1500.0,
            wheelbase: 2.8,
            steer_ratio: 13.5,
            min_steer_speed: 0.0,
            min_enable_speed: -1.0,
            checksum: ChecksumVariant::default(),
            lkas_hud: LkasHud::default(),
            buses: BusAssignment::default(),
            long_control: false,
            has_lfa_hda: false,
            mad_mode: false,
            enable_cruise: true,
        }
    }
}

impl VehicleParams {
    /// Check the parameters for values the core cannot act on
    pub fn validate(&self) -> Result<(), ValidationError> {
        let positive = [self.mass, self.wheelbase, self.steer_ratio];
        if positive.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(ValidationError::VehicleParameter);
        }
        if !self.min_steer_speed.is_finite()
            || self.min_steer_speed < 0.0
            || !self.min_enable_speed.is_finite()
        {
            return Err(ValidationError::VehicleParameter);
        }

        let buses = [self.buses.mdps, self.buses.scc, self.buses.lkas];
        if buses.iter().any(|bus| *bus > MAX_BUS) {
            return Err(ValidationError::BusIndex);
        }

        if !self.checksum.is_lkas_variant() {
            return Err(ValidationError::SteeringChecksum);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(VehicleParams::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_bus_index() {
        let params = VehicleParams {
            buses: BusAssignment {
                mdps: 3,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(params.validate(), Err(ValidationError::BusIndex));
    }

    #[test]
    fn test_rejects_frame_only_checksum() {
        let params = VehicleParams {
            checksum: ChecksumVariant::SumAll,
            ..Default::default()
        };
        assert_eq!(params.validate(), Err(ValidationError::SteeringChecksum));
    }

    #[test]
    fn test_rejects_zero_mass() {
        let params = VehicleParams {
            mass: 0.0,
            ..Default::default()
        };
        assert_eq!(params.validate(), Err(ValidationError::VehicleParameter));
    }

    #[test]
    fn test_mdps_harness() {
        let buses = BusAssignment {
            mdps: 1,
            ..Default::default()
        };
        assert!(buses.mdps_behind_harness());
        assert!(!BusAssignment::default().mdps_behind_harness());
    }
}
