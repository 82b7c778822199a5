//! Controller coordinating the state machine and the actuation encoder
//!
//! The controller is the piece of the cycle that does not touch a
//! transport:
//! - Steps the engagement state machine
//! - Arbitrates the alerts the outcome asks for
//! - Asks the control laws for actuator values
//! - Encodes the cycle's frames

use log::{debug, error, info, warn};

use helm_core::actuation::{ActuationEncoder, FrameList, StockMessages};
use helm_core::context::AlertContext;
use helm_core::events::{AlertList, EventKind, Taxonomy};
use helm_core::state::{ControlState, ControlStateMachine, CycleInput, CycleOutcome};
use helm_core::traits::ControlLaw;

use crate::config::HelmConfig;
use crate::error::RuntimeError;

/// What one cycle decided
#[derive(Debug, Clone)]
pub struct CycleResult {
    pub outcome: CycleOutcome,
    pub alerts: AlertList,
    /// Empty while faulted
    pub frames: FrameList,
}

/// Decision and encoding half of the control loop
pub struct Controls {
    machine: ControlStateMachine,
    encoder: ActuationEncoder,
    alert_ctx: AlertContext,
}

impl Controls {
    /// Build a controller from a loaded configuration
    ///
    /// Validates the event taxonomy; a malformed table stops startup.
    pub fn new(config: &HelmConfig) -> Result<Self, RuntimeError> {
        config.validate()?;
        let taxonomy = Taxonomy::builtin()?;

        let machine =
            ControlStateMachine::new(taxonomy, config.control, config.vehicle.clone());
        let alert_ctx = machine.alert_context();

        Ok(Self {
            machine,
            encoder: ActuationEncoder::new(&config.vehicle),
            alert_ctx,
        })
    }

    /// Get current authorization state
    pub fn state(&self) -> ControlState {
        self.machine.state()
    }

    pub fn machine(&self) -> &ControlStateMachine {
        &self.machine
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        self.machine.taxonomy()
    }

    /// Keep an event active every cycle until unlatched
    pub fn latch(&mut self, kind: EventKind) {
        info!("Latching {}", kind.name());
        self.machine.latch(kind);
    }

    pub fn unlatch(&mut self, kind: EventKind) {
        info!("Unlatching {}", kind.name());
        self.machine.unlatch(kind);
    }

    /// Context computed alerts read from
    pub fn alert_context(&self) -> &AlertContext {
        &self.alert_ctx
    }

    /// Update calibration progress shown by the calibration alert
    pub fn set_calibration_percent(&mut self, percent: u8) {
        self.alert_ctx.calibration_percent = percent.min(100);
    }

    /// Update the automatic lane change countdown
    pub fn set_lane_change_countdown(&mut self, seconds: u8) {
        self.alert_ctx.lane_change_countdown_s = seconds;
    }

    /// Run the decision half of one cycle
    pub fn step<L: ControlLaw>(
        &mut self,
        input: &CycleInput,
        law: &mut L,
        stock: &StockMessages<'_>,
    ) -> Result<CycleResult, RuntimeError> {
        let outcome = self.machine.step(input);
        log_outcome(&outcome);

        let alerts = self.machine.alerts(&outcome, &self.alert_ctx);
        for alert in &alerts {
            debug!("Alert {} (priority {})", alert.alert_type(), alert.priority().0);
        }

        // Nothing goes on the bus until the link recovers
        if outcome.state.is_faulted() {
            return Ok(CycleResult {
                outcome,
                alerts,
                frames: FrameList::new(),
            });
        }

        let (cmd, hud) = law.command(outcome.state, input.valid_snapshot());
        let frames = self
            .encoder
            .encode(outcome.state.actuation_allowed(), &cmd, &hud, stock)
            .map_err(|e| {
                error!("Frame encoding failed: {:?}", e);
                RuntimeError::from(e)
            })?;

        Ok(CycleResult {
            outcome,
            alerts,
            frames,
        })
    }
}

/// Log engagement changes and the events behind them
fn log_outcome(outcome: &CycleOutcome) {
    if outcome.changed() {
        debug!("State {:?} -> {:?}", outcome.previous, outcome.state);

        match (outcome.previous.is_engaged(), outcome.state.is_engaged()) {
            (false, true) => info!("Engaged"),
            (true, false) => info!("Disengaged ({:?})", outcome.cause),
            _ => {}
        }
        if outcome.state.is_faulted() {
            warn!("Vehicle link lost, control faulted");
        } else if outcome.previous.is_faulted() {
            info!("Vehicle link recovered");
        }
    }

    if !outcome.events.is_empty() {
        let names: Vec<&str> = outcome.events.iter().map(|kind| kind.name()).collect();
        debug!("Events: {}", names.join(", "));
    }
}
