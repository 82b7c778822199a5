//! Vehicle-agnostic decision logic for Helm
//!
//! This crate contains everything between a decoded vehicle snapshot and
//! the frames handed to the bus, none of which depends on a transport:
//!
//! - Event taxonomy and the alert arbiter
//! - Engagement state machine
//! - Safety interlocks (low-speed lockout, link fault hysteresis)
//! - Configuration type definitions
//! - Actuation encoder (frame schedule, alive counters)
//! - Transport traits

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod actuation;
pub mod config;
pub mod context;
pub mod events;
pub mod safety;
pub mod state;
pub mod traits;
