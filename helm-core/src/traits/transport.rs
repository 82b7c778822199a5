//! Transport and control-law traits

use helm_protocol::CanFrame;

use crate::actuation::{ActuatorCommand, HudCommand, StockMessages};
use crate::events::EventSet;
use crate::state::{ControlState, VehicleState};

/// Errors reported by a transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// No data arrived within the cycle
    Timeout,
    /// Controller is bus-off or disconnected
    Disconnected,
    /// Transmit queue is full
    QueueFull,
}

/// Source of decoded vehicle state
///
/// Implementations parse the vehicle bus and keep the latest stock payload
/// of every message the encoder builds on.
pub trait StateSource {
    /// Fetch this cycle's snapshot
    ///
    /// An error means no usable state this cycle; the state machine faults.
    fn poll(&mut self) -> Result<VehicleState, TransportError>;

    /// Latest stock payloads
    fn stock(&self) -> StockMessages<'_> {
        StockMessages::default()
    }

    /// Events raised by other collaborators for this cycle
    fn raised_events(&mut self) -> EventSet {
        EventSet::new()
    }
}

/// Destination for outgoing frames
pub trait FrameSink {
    /// Queue one frame for transmission
    fn send(&mut self, frame: &CanFrame) -> Result<(), TransportError>;
}

/// Lateral and longitudinal control laws
///
/// Turns the authorization state and the latest snapshot into actuator
/// values. The encoder neutralizes them whenever actuation is not allowed.
pub trait ControlLaw {
    fn command(
        &mut self,
        state: ControlState,
        snapshot: Option<&VehicleState>,
    ) -> (ActuatorCommand, HudCommand);
}
