//! Monotonic time source for the cycle runner

use std::thread;
use std::time::{Duration, Instant};

/// Monotonic clock the runner schedules against
pub trait Clock {
    /// Time elapsed since an arbitrary fixed origin
    fn now(&self) -> Duration;

    /// Block until `deadline`; returns immediately if it has passed
    fn sleep_until(&mut self, deadline: Duration);
}

/// Wall-clock implementation on `std::time::Instant`
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep_until(&mut self, deadline: Duration) {
        let now = self.now();
        if deadline > now {
            thread::sleep(deadline - now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn test_sleep_until_past_deadline_returns() {
        let mut clock = SystemClock::new();
        let before = clock.now();
        clock.sleep_until(Duration::ZERO);
        assert!(clock.now() >= before);
    }

    #[test]
    fn test_sleep_until_waits() {
        let mut clock = SystemClock::new();
        let deadline = clock.now() + Duration::from_millis(5);
        clock.sleep_until(deadline);
        assert!(clock.now() >= deadline);
    }
}
