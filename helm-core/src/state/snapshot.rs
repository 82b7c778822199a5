//! Per-cycle vehicle state input

use helm_protocol::CruiseButton;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::events::EventSet;

/// Transmission selector position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GearShifter {
    #[default]
    Unknown,
    Park,
    Reverse,
    Neutral,
    Drive,
    Sport,
    Low,
    Manumatic,
}

impl GearShifter {
    /// Forward gears engagement is allowed in
    pub fn is_forward_drive(&self) -> bool {
        matches!(self, GearShifter::Drive | GearShifter::Sport | GearShifter::Low)
    }
}

/// Stock cruise control status
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CruiseState {
    /// Cruise is engaged
    pub enabled: bool,
    /// Main switch is on
    pub available: bool,
    /// Cruise is not adaptive (no radar following)
    pub non_adaptive: bool,
    /// Set speed (m/s)
    pub speed: f32,
}

/// Decoded vehicle state for one cycle
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VehicleState {
    /// Vehicle speed (m/s)
    pub v_ego: f32,
    pub standstill: bool,
    pub gear: GearShifter,
    pub left_blinker: bool,
    pub right_blinker: bool,
    pub door_open: bool,
    pub seatbelt_unlatched: bool,
    pub esp_disabled: bool,
    pub park_brake: bool,
    /// Auto hold is keeping the car stopped
    pub brake_hold: bool,
    pub gas_pressed: bool,
    pub brake_pressed: bool,
    /// Power steering reports a permanent fault
    pub steer_fault: bool,
    /// Power steering reports a temporary fault
    pub steer_warning: bool,
    pub stock_fcw: bool,
    pub stock_aeb: bool,
    pub cruise: CruiseState,
    /// Cruise stalk button currently held
    pub cruise_buttons: CruiseButton,
    /// Cruise main button currently held
    pub cruise_main_button: bool,
    /// Radar cruise reports itself unavailable
    pub cruise_unavailable: bool,
    /// Every bus parser produced fresh, checksum-valid data
    pub can_valid: bool,
}

impl Default for VehicleState {
    fn default() -> Self {
        Self {
            v_ego: 0.0,
            standstill: true,
            gear: GearShifter::Unknown,
            left_blinker: false,
            right_blinker: false,
            door_open: false,
            seatbelt_unlatched: false,
            esp_disabled: false,
            park_brake: false,
            brake_hold: false,
            gas_pressed: false,
            brake_pressed: false,
            steer_fault: false,
            steer_warning: false,
            stock_fcw: false,
            stock_aeb: false,
            cruise: CruiseState::default(),
            cruise_buttons: CruiseButton::None,
            cruise_main_button: false,
            cruise_unavailable: false,
            can_valid: true,
        }
    }
}

/// Everything the state machine consumes in one cycle
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CycleInput {
    /// `None` when the transport delivered nothing this cycle
    pub snapshot: Option<VehicleState>,
    /// Events raised by other collaborators for this cycle only
    pub raised: EventSet,
}

impl CycleInput {
    pub fn new(snapshot: VehicleState) -> Self {
        Self {
            snapshot: Some(snapshot),
            raised: EventSet::new(),
        }
    }

    /// A cycle with no vehicle state
    pub fn missing() -> Self {
        Self::default()
    }

    /// Snapshot, if present and valid
    pub fn valid_snapshot(&self) -> Option<&VehicleState> {
        self.snapshot.as_ref().filter(|s| s.can_valid)
    }
}
