//! Actuation encoder
//!
//! Owns the alive counters and the transmit schedule. Each cycle it turns
//! the authorization decision and the actuator values into the frames to
//! send, built on top of the latest stock payloads.
//!
//! Schedule per cycle:
//! - Steering (LKAS11) every cycle, mirrored to the harness bus when the
//!   power steering sits behind it
//! - Acceleration request (SCC12) every second cycle under long control,
//!   only once a stock radar payload has been received
//! - Lane-assist icon (LFAHDA) every fifth cycle when equipped
//! - Power-steering status (MDPS12) every cycle when behind the harness
//! - Cruise-button echo (CLU11) when a cancel is requested

use heapless::Vec;

use helm_protocol::messages::{clu11, lkas11, mdps12, scc12};
use helm_protocol::{
    AliveCounter, CanFrame, ChecksumVariant, Clu11, CruiseButton, EncodeError, Lfahda, Lkas11,
    LkasHud, Mdps12, Scc12,
};

use crate::config::{BusAssignment, VehicleParams};

/// Upper bound on frames in one cycle
pub const MAX_FRAMES_PER_CYCLE: usize = 6;

/// Bus the steering frame is sent on
pub const LKAS_BUS: u8 = 0;

/// Harness bus the power steering sits on when intercepted
pub const HARNESS_BUS: u8 = 1;

/// Bus forwarded power-steering status goes to
pub const MDPS_FORWARD_BUS: u8 = 2;

/// Bus the cluster icon frame is sent on
pub const LFAHDA_BUS: u8 = 0;

/// Acceleration request period (cycles)
pub const SCC12_PERIOD: u64 = 2;

/// Lane-assist icon period (cycles)
pub const LFAHDA_PERIOD: u64 = 5;

/// Frames produced in one cycle
pub type FrameList = Vec<CanFrame, MAX_FRAMES_PER_CYCLE>;

/// Actuator values from the control laws
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActuatorCommand {
    /// Steering torque request (raw units)
    pub steer: i16,
    /// Acceleration request (m/s²)
    pub accel: f32,
    /// Ask the stock cruise to cancel
    pub cancel: bool,
}

/// Cluster indications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HudCommand {
    pub left_lane_visible: bool,
    pub right_lane_visible: bool,
    pub left_lane_depart: bool,
    pub right_lane_depart: bool,
    /// Hands-on-wheel warning
    pub steer_required: bool,
}

impl HudCommand {
    /// Lane-departure system state code for the cluster
    pub fn lkas_sys_state(&self, enabled: bool) -> u8 {
        if (self.left_lane_visible && self.right_lane_visible) || self.steer_required {
            if enabled || self.steer_required {
                3
            } else {
                4
            }
        } else if self.left_lane_visible {
            5
        } else if self.right_lane_visible {
            6
        } else {
            1
        }
    }
}

/// Latest stock payloads received from the vehicle
#[derive(Debug, Clone, Copy, Default)]
pub struct StockMessages<'a> {
    pub lkas11: Option<&'a [u8]>,
    pub clu11: Option<&'a [u8]>,
    pub scc12: Option<&'a [u8]>,
    pub mdps12: Option<&'a [u8]>,
}

/// Frame schedule and alive counters for one vehicle
#[derive(Debug, Clone)]
pub struct ActuationEncoder {
    checksum: ChecksumVariant,
    hud: LkasHud,
    buses: BusAssignment,
    long_control: bool,
    has_lfa_hda: bool,
    lkas_counter: AliveCounter,
    clu_counter: AliveCounter,
    scc_counter: AliveCounter,
    mdps_counter: AliveCounter,
    cycle: u64,
}

impl ActuationEncoder {
    pub fn new(params: &VehicleParams) -> Self {
        Self {
            checksum: params.checksum,
            hud: params.lkas_hud,
            buses: params.buses,
            long_control: params.long_control,
            has_lfa_hda: params.has_lfa_hda,
            lkas_counter: AliveCounter::new(lkas11::COUNTER_WIDTH),
            clu_counter: AliveCounter::new(clu11::COUNTER_WIDTH),
            scc_counter: AliveCounter::new(scc12::COUNTER_WIDTH),
            mdps_counter: AliveCounter::new(mdps12::COUNTER_WIDTH),
            cycle: 0,
        }
    }

    /// Cycles encoded so far
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Build this cycle's frames
    ///
    /// Without authorization the frames still go out, carrying a neutral
    /// request so the stock stream they replace stays alive.
    pub fn encode(
        &mut self,
        authorized: bool,
        cmd: &ActuatorCommand,
        hud: &HudCommand,
        stock: &StockMessages<'_>,
    ) -> Result<FrameList, EncodeError> {
        let cycle = self.cycle;
        self.cycle = self.cycle.wrapping_add(1);

        let mut frames = FrameList::new();

        let steer = Lkas11 {
            apply_steer: if authorized { cmd.steer } else { 0 },
            steer_req: authorized,
            sys_warning: hud.steer_required,
            sys_state: hud.lkas_sys_state(authorized),
            enabled: authorized,
            left_lane: hud.left_lane_visible,
            right_lane: hud.right_lane_visible,
            left_lane_depart: hud.left_lane_depart,
            right_lane_depart: hud.right_lane_depart,
        };
        let counter = self.lkas_counter.tick();
        push(
            &mut frames,
            steer.encode(stock.lkas11, counter, self.hud, self.checksum, LKAS_BUS)?,
        );
        if self.buses.mdps_behind_harness() {
            push(
                &mut frames,
                steer.encode(stock.lkas11, counter, self.hud, self.checksum, HARNESS_BUS)?,
            );
        }

        if cmd.cancel {
            let speed = match stock.clu11 {
                Some(bytes) => clu11::LAYOUT.get(bytes, "CF_Clu_Vanz")?,
                None => 0.0,
            };
            let echo = Clu11 {
                button: CruiseButton::Cancel,
                speed,
            };
            push(
                &mut frames,
                echo.encode(stock.clu11, self.clu_counter.tick(), self.buses.scc)?,
            );
        }

        // The request rides on the radar's own frame; a zeroed base would
        // read as a full-braking limit
        if self.long_control && cycle % SCC12_PERIOD == 0 {
            if let Some(bytes) = stock.scc12 {
                let accel = Scc12 {
                    apply_accel: if authorized { f64::from(cmd.accel) } else { 0.0 },
                    enabled: authorized,
                };
                push(
                    &mut frames,
                    accel.encode(Some(bytes), self.scc_counter.tick(), self.buses.scc)?,
                );
            }
        }

        if self.buses.mdps_behind_harness() {
            if let Some(bytes) = stock.mdps12 {
                push(
                    &mut frames,
                    Mdps12.encode(Some(bytes), self.mdps_counter.tick(), MDPS_FORWARD_BUS)?,
                );
            }
        }

        if self.has_lfa_hda && cycle % LFAHDA_PERIOD == 0 {
            let icon = Lfahda {
                enabled: authorized,
            };
            push(&mut frames, icon.encode(LFAHDA_BUS)?);
        }

        Ok(frames)
    }
}

fn push(frames: &mut FrameList, frame: CanFrame) {
    // At most one frame of each kind plus the steering mirror
    let _ = frames.push(frame);
}
