//! Configuration loading
//!
//! A [`HelmConfig`] bundles the control loop timing with the vehicle
//! profile. It is read once at startup and never changes afterwards.

pub mod loader;

use serde::{Deserialize, Serialize};

use helm_core::config::{ControlConfig, ValidationError, VehicleParams};

pub use loader::{parse_binary, parse_toml, to_binary, ConfigError, ConfigLoader};

/// Format version written into binary profiles
pub const CONFIG_VERSION: u8 = 1;

/// Complete runtime configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelmConfig {
    pub version: u8,
    pub control: ControlConfig,
    pub vehicle: VehicleParams,
}

impl Default for HelmConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            control: ControlConfig::default(),
            vehicle: VehicleParams::default(),
        }
    }
}

impl HelmConfig {
    /// Check both halves of the configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.control.validate()?;
        self.vehicle.validate()
    }
}
