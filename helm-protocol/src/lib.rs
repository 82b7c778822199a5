//! Actuation bus protocol
//!
//! This crate defines the CAN messages Helm writes onto the vehicle bus:
//! their signal layouts, the rolling alive counters and the per-vehicle
//! checksum variants. It knows nothing about engagement state; callers
//! decide *whether* to send and this crate decides *how* the bytes look.
//!
//! # Message Overview
//!
//! All messages are classic CAN frames (at most 8 data bytes) with
//! little-endian (Intel) signals:
//! ```text
//! ┌──────────┬─────┬────────────────────────────┬─────────┬──────────┐
//! │ ADDRESS  │ BUS │ SIGNALS                    │ COUNTER │ CHECKSUM │
//! │ 11 bit   │ 0–2 │ layout-defined bit fields  │ 4/8 bit │ 4/8 bit  │
//! └──────────┴─────┴────────────────────────────┴─────────┴──────────┘
//! ```
//!
//! The checksum is always computed last, over the final payload with the
//! checksum field itself excluded.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod checksum;
pub mod counter;
pub mod frame;
pub mod messages;
pub mod signal;

pub use checksum::ChecksumVariant;
pub use counter::{AliveCounter, CounterWidth};
pub use frame::{CanFrame, FrameError, MAX_DLC};
pub use messages::{Clu11, CruiseButton, Lfahda, Lkas11, LkasHud, Mdps12, Scc12};
pub use signal::{EncodeError, MessageLayout, Signal};
