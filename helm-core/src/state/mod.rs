//! Engagement state machine
//!
//! Defines how vehicle snapshots become events and how events move the
//! authorization state. The machine is explicit, finite, and deterministic.

pub mod buttons;
pub mod conditions;
pub mod machine;
pub mod snapshot;

pub use buttons::{button_edges, ButtonEdge, ButtonEdges, ButtonKind};
pub use conditions::Conditions;
pub use machine::{ControlState, ControlStateMachine, CycleOutcome};
pub use snapshot::{CruiseState, CycleInput, GearShifter, VehicleState};
