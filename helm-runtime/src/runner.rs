//! Fixed-cadence cycle runner
//!
//! Owns the controller and its transports and drives one cycle per period:
//! poll the vehicle state, decide, encode and hand the frames to the sink.
//! A cycle that misses its budget has its frames dropped; they are never
//! sent late. The loop then resumes at the next scheduled slot.

use std::time::Duration;

use log::{debug, info, trace, warn};

use helm_core::state::CycleInput;
use helm_core::traits::{ControlLaw, FrameSink, StateSource};
use helm_protocol::CanFrame;

use crate::clock::Clock;
use crate::config::HelmConfig;
use crate::controls::Controls;
use crate::error::RuntimeError;
use crate::report::CycleReport;

/// Control loop bound to its transports
pub struct Runner<S, K, L, C> {
    controls: Controls,
    source: S,
    sink: K,
    law: L,
    clock: C,
    period: Duration,
    cycle: u64,
    overruns: u64,
}

impl<S, K, L, C> Runner<S, K, L, C>
where
    S: StateSource,
    K: FrameSink,
    L: ControlLaw,
    C: Clock,
{
    pub fn new(
        config: &HelmConfig,
        source: S,
        sink: K,
        law: L,
        clock: C,
    ) -> Result<Self, RuntimeError> {
        let controls = Controls::new(config)?;
        Ok(Self {
            controls,
            source,
            sink,
            law,
            clock,
            period: Duration::from_millis(u64::from(config.control.cycle_period_ms)),
            cycle: 0,
            overruns: 0,
        })
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut Controls {
        &mut self.controls
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Cycles run so far
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Cycles whose frames were dropped for missing the budget
    pub fn overruns(&self) -> u64 {
        self.overruns
    }

    /// Run one cycle now
    pub fn run_cycle(&mut self) -> Result<CycleReport, RuntimeError> {
        let started = self.clock.now();

        let snapshot = match self.source.poll() {
            Ok(state) => Some(state),
            Err(e) => {
                warn!("No vehicle state in cycle {}: {:?}", self.cycle, e);
                None
            }
        };
        let input = CycleInput {
            snapshot,
            raised: self.source.raised_events(),
        };

        let stock = self.source.stock();
        let result = self.controls.step(&input, &mut self.law, &stock)?;

        let mut report = CycleReport::new(
            self.cycle,
            &result.outcome,
            self.controls.taxonomy(),
            &result.alerts,
        );
        report.frames_built = result.frames.len();

        let elapsed = self.clock.now().saturating_sub(started);
        if elapsed > self.period {
            self.overruns += 1;
            report.overrun = true;
            warn!(
                "Cycle {} overran its budget ({} us > {} us), dropping {} frames",
                self.cycle,
                elapsed.as_micros(),
                self.period.as_micros(),
                result.frames.len()
            );
        } else {
            report.frames_sent = self.transmit(&result.frames);
            trace!(
                "Cycle {}: sent {}/{} frames",
                self.cycle,
                report.frames_sent,
                report.frames_built
            );
        }

        self.cycle += 1;
        Ok(report)
    }

    /// Run cycles at the configured period
    ///
    /// Runs forever when `cycles` is `None`. Every report is handed to
    /// `on_report` as soon as its cycle completes.
    pub fn run<F>(&mut self, cycles: Option<u64>, mut on_report: F) -> Result<(), RuntimeError>
    where
        F: FnMut(&CycleReport),
    {
        info!(
            "Control loop starting, period {} ms",
            self.period.as_millis()
        );

        let mut remaining = cycles;
        let mut next = self.clock.now();

        while remaining != Some(0) {
            self.clock.sleep_until(next);

            let report = self.run_cycle()?;
            on_report(&report);

            // Slots that passed while this cycle ran are skipped, not made up
            next += self.period;
            let now = self.clock.now();
            let mut skipped = 0u32;
            while next < now {
                next += self.period;
                skipped += 1;
            }
            if skipped > 0 {
                debug!("Skipped {} cycle slots", skipped);
            }

            if let Some(n) = remaining.as_mut() {
                *n -= 1;
            }
        }

        info!(
            "Control loop stopped after {} cycles ({} overruns)",
            self.cycle, self.overruns
        );
        Ok(())
    }

    /// Hand frames to the sink in order, stopping at the first refusal
    fn transmit(&mut self, frames: &[CanFrame]) -> usize {
        let mut sent = 0;
        for frame in frames {
            if let Err(e) = self.sink.send(frame) {
                warn!(
                    "Transmit of 0x{:03X} on bus {} failed: {:?}",
                    frame.address, frame.bus, e
                );
                break;
            }
            sent += 1;
        }
        sent
    }
}
