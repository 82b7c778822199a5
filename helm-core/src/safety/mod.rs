//! Safety interlocks
//!
//! Hysteresis latches that keep the engagement logic from chattering on
//! noisy inputs.

pub mod lockout;
pub mod monitor;

pub use lockout::SteerLockout;
pub use monitor::{LinkMonitor, LinkStatus};
