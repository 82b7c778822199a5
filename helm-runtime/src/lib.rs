//! Host-side runtime for Helm
//!
//! Binds the transport-agnostic decision logic in `helm-core` to a clock,
//! a state source and a frame sink:
//!
//! - Configuration loading (TOML, with a postcard binary fallback)
//! - Fixed-cadence cycle runner with deadline enforcement
//! - Per-cycle reports for telemetry
//!
//! Logging goes through the `log` facade; the embedding binary picks the
//! logger.

pub mod clock;
pub mod config;
pub mod controls;
pub mod error;
pub mod report;
pub mod runner;

pub use clock::{Clock, SystemClock};
pub use config::{ConfigError, ConfigLoader, HelmConfig};
pub use controls::{Controls, CycleResult};
pub use error::RuntimeError;
pub use report::{CycleReport, ReportedAlert, ReportedEvent};
pub use runner::Runner;
