//! Rolling alive counters
//!
//! Every periodic message carries a counter that advances by one per
//! transmit so the receiver can detect dropped or replayed frames.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Width of a message's counter field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CounterWidth {
    /// 4-bit counter, wraps 15 → 0
    Nibble,
    /// 8-bit counter, wraps 255 → 0
    Byte,
}

impl CounterWidth {
    /// Largest value before wrapping
    pub const fn max(&self) -> u8 {
        match self {
            CounterWidth::Nibble => 0x0F,
            CounterWidth::Byte => 0xFF,
        }
    }
}

/// Per-message alive counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AliveCounter {
    width: CounterWidth,
    value: u8,
}

impl AliveCounter {
    /// Create a counter starting at zero
    pub const fn new(width: CounterWidth) -> Self {
        Self { width, value: 0 }
    }

    /// Value that the next transmit will carry
    pub fn peek(&self) -> u8 {
        self.value
    }

    /// Take the value for this transmit and advance
    pub fn tick(&mut self) -> u8 {
        let current = self.value;
        self.value = if current == self.width.max() {
            0
        } else {
            current + 1
        };
        current
    }

    /// Counter width
    pub fn width(&self) -> CounterWidth {
        self.width
    }

    /// Restart from zero
    pub fn reset(&mut self) {
        self.value = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_nibble_wraps() {
        let mut counter = AliveCounter::new(CounterWidth::Nibble);
        for expected in 0..16 {
            assert_eq!(counter.tick(), expected);
        }
        assert_eq!(counter.tick(), 0);
    }

    #[test]
    fn test_byte_wraps() {
        let mut counter = AliveCounter::new(CounterWidth::Byte);
        for _ in 0..255 {
            counter.tick();
        }
        assert_eq!(counter.tick(), 255);
        assert_eq!(counter.tick(), 0);
    }

    #[test]
    fn test_reset() {
        let mut counter = AliveCounter::new(CounterWidth::Nibble);
        counter.tick();
        counter.tick();
        counter.reset();
        assert_eq!(counter.peek(), 0);
    }

    proptest! {
        #[test]
        fn prop_counter_matches_modulo(transmits in 0usize..2000) {
            let mut nibble = AliveCounter::new(CounterWidth::Nibble);
            let mut byte = AliveCounter::new(CounterWidth::Byte);
            for _ in 0..transmits {
                nibble.tick();
                byte.tick();
            }
            prop_assert_eq!(nibble.peek() as usize, transmits % 16);
            prop_assert_eq!(byte.peek() as usize, transmits % 256);
        }
    }
}
