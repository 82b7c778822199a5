//! Configuration types
//!
//! Defines the structures for the control loop and the vehicle profile.
//! Parsing lives in the runtime crate.

pub mod types;
pub mod vehicle;

pub use types::{ControlConfig, ValidationError};
pub use vehicle::{BusAssignment, VehicleParams};
