//! Actuation frame encoding
//!
//! Decides which frames go out this cycle and fills them from the
//! authorization decision and actuator values.

pub mod encoder;

pub use encoder::{
    ActuationEncoder, ActuatorCommand, FrameList, HudCommand, StockMessages, MAX_FRAMES_PER_CYCLE,
};
