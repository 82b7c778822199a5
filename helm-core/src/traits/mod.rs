//! Transport abstraction traits
//!
//! These traits define the interface between the decision logic and the
//! bus transport and control laws it depends on.

pub mod transport;

pub use transport::{ControlLaw, FrameSink, StateSource, TransportError};
