//! Event conditions
//!
//! Turns one snapshot, the previous one and this cycle's button edges into
//! the set of events the vehicle itself raises.

use crate::config::{ControlConfig, VehicleParams};
use crate::events::{EventKind, EventSet};

use super::buttons::{ButtonEdges, ButtonKind};
use super::snapshot::{GearShifter, VehicleState};

/// Highest speed the controller engages at (m/s)
pub const MAX_CTRL_SPEED: f32 = (144.0 + 4.0) / 3.6;

/// Blinkers below this much under the lane-change minimum warn the driver
const TURN_INDICATOR_MARGIN: f32 = 1.2;

/// Vehicle condition evaluator
#[derive(Debug, Clone, Copy)]
pub struct Conditions<'a> {
    params: &'a VehicleParams,
    config: &'a ControlConfig,
}

impl<'a> Conditions<'a> {
    pub fn new(params: &'a VehicleParams, config: &'a ControlConfig) -> Self {
        Self { params, config }
    }

    /// Stock cruise engagement as seen by the controller
    ///
    /// In mad mode without long control, the main switch alone counts as
    /// engaged.
    pub fn cruise_engaged(&self, state: &VehicleState) -> bool {
        if self.params.mad_mode && !self.params.long_control {
            state.cruise.available
        } else {
            state.cruise.enabled
        }
    }

    /// Evaluate every condition for this cycle
    ///
    /// # Arguments
    /// - `curr`: This cycle's snapshot
    /// - `prev`: Last valid snapshot, or the resting default
    /// - `edges`: Button edges between the two
    /// - `lockout`: Low-speed steering lockout state after this sample
    pub fn evaluate(
        &self,
        curr: &VehicleState,
        prev: &VehicleState,
        edges: &ButtonEdges,
        lockout: bool,
    ) -> EventSet {
        let params = self.params;
        let mut events = EventSet::new();

        if curr.door_open {
            events.add(EventKind::DoorOpen);
        }
        if curr.seatbelt_unlatched {
            events.add(EventKind::SeatbeltNotLatched);
        }
        if !curr.gear.is_forward_drive() {
            events.add(EventKind::WrongGear);
        }
        if curr.gear == GearShifter::Reverse {
            events.add(EventKind::ReverseGear);
        }
        if !curr.cruise.available {
            events.add(EventKind::WrongCarMode);
        }
        if curr.esp_disabled {
            events.add(EventKind::EspDisabled);
        }
        if curr.gas_pressed {
            events.add(EventKind::GasPressed);
        }
        if curr.stock_fcw {
            events.add(EventKind::StockFcw);
        }
        if curr.stock_aeb {
            events.add(EventKind::StockAeb);
        }
        if curr.v_ego > MAX_CTRL_SPEED {
            events.add(EventKind::SpeedTooHigh);
        }
        if curr.cruise.non_adaptive {
            events.add(EventKind::WrongCruiseMode);
        }
        if curr.brake_hold {
            events.add(EventKind::BrakeHold);
        }
        if curr.park_brake {
            events.add(EventKind::ParkBrake);
        }

        if curr.steer_fault {
            events.add(EventKind::SteerUnavailable);
        } else if curr.steer_warning {
            events.add(EventKind::SteerTempUnavailable);
        }

        // Gas on its rising edge; brake on its rising edge or while rolling
        let gas_edge = curr.gas_pressed && !prev.gas_pressed;
        let brake = curr.brake_pressed && (!prev.brake_pressed || !curr.standstill);
        if gas_edge || brake {
            events.add(EventKind::PedalPressed);
        }

        if curr.v_ego < params.min_enable_speed {
            events.add(EventKind::BelowEngageSpeed);
        }

        let cruise_now = self.cruise_engaged(curr);
        if params.enable_cruise {
            if cruise_now && !self.cruise_engaged(prev) {
                events.add(EventKind::PcmEnable);
            } else if !cruise_now {
                events.add(EventKind::PcmDisable);
            }
        }

        if params.long_control && curr.cruise_unavailable {
            events.add(EventKind::BrakeUnavailable);
        }
        if lockout && params.buses.mdps == 0 {
            events.add(EventKind::BelowSteerSpeed);
        }

        let blinker = curr.left_blinker || curr.right_blinker;
        if blinker && curr.v_ego < self.config.lane_change_speed_min - TURN_INDICATOR_MARGIN {
            events.add(EventKind::TurningIndicatorOn);
        }

        if params.mad_mode && !params.long_control {
            events.remove(EventKind::PedalPressed);
        }

        for edge in edges {
            if edge.is_press(ButtonKind::Cancel) {
                events.add(EventKind::ButtonCancel);
            }

            if params.long_control {
                if edge.is_release(ButtonKind::AccelCruise) || edge.is_release(ButtonKind::DecelCruise)
                {
                    events.add(EventKind::ButtonEnable);
                }
            } else if cruise_now && edge.is_release(ButtonKind::DecelCruise) {
                events.add(EventKind::ButtonEnable);
            }
        }

        // Under long control the stock cruise state is not ours to follow
        if params.long_control {
            events.remove(EventKind::WrongCarMode);
            events.remove(EventKind::PcmDisable);
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::buttons::button_edges;
    use crate::state::snapshot::CruiseState;
    use helm_protocol::CruiseButton;

    fn cruising() -> VehicleState {
        VehicleState {
            v_ego: 25.0,
            standstill: false,
            gear: GearShifter::Drive,
            cruise: CruiseState {
                enabled: true,
                available: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn eval(params: &VehicleParams, prev: &VehicleState, curr: &VehicleState) -> EventSet {
        let config = ControlConfig::default();
        let edges = button_edges(prev, curr);
        Conditions::new(params, &config).evaluate(curr, prev, &edges, false)
    }

    #[test]
    fn test_steady_cruise_raises_nothing() {
        let params = VehicleParams::default();
        let state = cruising();
        assert!(eval(&params, &state, &state).is_empty());
    }

    #[test]
    fn test_door_and_gear() {
        let params = VehicleParams::default();
        let curr = VehicleState {
            door_open: true,
            gear: GearShifter::Reverse,
            ..cruising()
        };
        let events = eval(&params, &cruising(), &curr);
        assert!(events.contains(EventKind::DoorOpen));
        assert!(events.contains(EventKind::WrongGear));
        assert!(events.contains(EventKind::ReverseGear));
    }

    #[test]
    fn test_pcm_edges() {
        let params = VehicleParams::default();
        let off = VehicleState {
            cruise: CruiseState {
                available: true,
                ..Default::default()
            },
            ..cruising()
        };

        let rising = eval(&params, &off, &cruising());
        assert!(rising.contains(EventKind::PcmEnable));

        let falling = eval(&params, &cruising(), &off);
        assert!(falling.contains(EventKind::PcmDisable));
        assert!(!falling.contains(EventKind::PcmEnable));
    }

    #[test]
    fn test_brake_pedal_while_rolling() {
        let params = VehicleParams::default();
        let braking = VehicleState {
            brake_pressed: true,
            ..cruising()
        };
        // Held brake keeps firing while the car is moving
        let events = eval(&params, &braking, &braking);
        assert!(events.contains(EventKind::PedalPressed));

        let stopped = VehicleState {
            standstill: true,
            v_ego: 0.0,
            ..braking.clone()
        };
        let events = eval(&params, &stopped, &stopped);
        assert!(!events.contains(EventKind::PedalPressed));
    }

    #[test]
    fn test_gas_is_edge_plus_level() {
        let params = VehicleParams::default();
        let gas = VehicleState {
            gas_pressed: true,
            ..cruising()
        };
        let first = eval(&params, &cruising(), &gas);
        assert!(first.contains(EventKind::PedalPressed));
        assert!(first.contains(EventKind::GasPressed));

        let held = eval(&params, &gas, &gas);
        assert!(!held.contains(EventKind::PedalPressed));
        assert!(held.contains(EventKind::GasPressed));
    }

    #[test]
    fn test_mad_mode_drops_pedal_disengage() {
        let params = VehicleParams {
            mad_mode: true,
            ..Default::default()
        };
        let braking = VehicleState {
            brake_pressed: true,
            ..cruising()
        };
        let events = eval(&params, &cruising(), &braking);
        assert!(!events.contains(EventKind::PedalPressed));
    }

    #[test]
    fn test_cancel_press() {
        let params = VehicleParams::default();
        let cancel = VehicleState {
            cruise_buttons: CruiseButton::Cancel,
            ..cruising()
        };
        let events = eval(&params, &cruising(), &cancel);
        assert!(events.contains(EventKind::ButtonCancel));

        // Releasing cancel is not another cancel
        let events = eval(&params, &cancel, &cruising());
        assert!(!events.contains(EventKind::ButtonCancel));
    }

    #[test]
    fn test_decel_release_enables_under_stock_cruise() {
        let params = VehicleParams::default();
        let decel = VehicleState {
            cruise_buttons: CruiseButton::SetDecel,
            ..cruising()
        };
        assert!(!eval(&params, &cruising(), &decel).contains(EventKind::ButtonEnable));
        assert!(eval(&params, &decel, &cruising()).contains(EventKind::ButtonEnable));

        let accel = VehicleState {
            cruise_buttons: CruiseButton::ResAccel,
            ..cruising()
        };
        assert!(!eval(&params, &accel, &cruising()).contains(EventKind::ButtonEnable));
    }

    #[test]
    fn test_long_control_enable_and_filters() {
        let params = VehicleParams {
            long_control: true,
            ..Default::default()
        };
        let accel_idle = VehicleState {
            cruise_buttons: CruiseButton::ResAccel,
            cruise: CruiseState::default(),
            ..cruising()
        };
        let idle = VehicleState {
            cruise: CruiseState::default(),
            ..cruising()
        };

        let events = eval(&params, &accel_idle, &idle);
        assert!(events.contains(EventKind::ButtonEnable));
        assert!(!events.contains(EventKind::WrongCarMode));
        assert!(!events.contains(EventKind::PcmDisable));
    }

    #[test]
    fn test_cruise_unavailable_only_under_long_control() {
        let state = VehicleState {
            cruise_unavailable: true,
            ..cruising()
        };
        let stock = VehicleParams::default();
        assert!(!eval(&stock, &state, &state).contains(EventKind::BrakeUnavailable));

        let long = VehicleParams {
            long_control: true,
            ..Default::default()
        };
        assert!(eval(&long, &state, &state).contains(EventKind::BrakeUnavailable));
    }

    #[test]
    fn test_lockout_reported_only_without_harness() {
        let config = ControlConfig::default();
        let state = cruising();
        let edges = button_edges(&state, &state);

        let direct = VehicleParams::default();
        let events = Conditions::new(&direct, &config).evaluate(&state, &state, &edges, true);
        assert!(events.contains(EventKind::BelowSteerSpeed));

        let mut harness = VehicleParams::default();
        harness.buses.mdps = 1;
        let events = Conditions::new(&harness, &config).evaluate(&state, &state, &edges, true);
        assert!(!events.contains(EventKind::BelowSteerSpeed));
    }

    #[test]
    fn test_turn_indicator_at_low_speed() {
        let params = VehicleParams::default();
        let slow_blink = VehicleState {
            v_ego: 10.0,
            left_blinker: true,
            ..cruising()
        };
        assert!(eval(&params, &slow_blink, &slow_blink).contains(EventKind::TurningIndicatorOn));

        let fast_blink = VehicleState {
            v_ego: 25.0,
            ..slow_blink
        };
        assert!(!eval(&params, &fast_blink, &fast_blink).contains(EventKind::TurningIndicatorOn));
    }

    #[test]
    fn test_steer_fault_shadows_warning() {
        let params = VehicleParams::default();
        let state = VehicleState {
            steer_fault: true,
            steer_warning: true,
            ..cruising()
        };
        let events = eval(&params, &state, &state);
        assert!(events.contains(EventKind::SteerUnavailable));
        assert!(!events.contains(EventKind::SteerTempUnavailable));
    }
}
