//! Signal tables and bit packing
//!
//! A [`MessageLayout`] is the externally supplied description of where each
//! field of a message lives. Signals are little-endian (Intel byte order):
//! `start_bit` is the position of the least significant bit, counted from
//! bit 0 of byte 0.
//!
//! Writing a value that does not fit its field is an error, never a silent
//! truncation.

use crate::frame::{FrameError, MAX_DLC};

/// Widest signal supported by the packer
pub const MAX_SIGNAL_BITS: u8 = 32;

/// Errors raised while packing or validating a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// Signal name is not part of the layout
    UnknownSignal,
    /// Value does not fit in the signal's bit width
    ValueOutOfRange,
    /// Signal extends past the end of the payload
    SignalOutOfBounds,
    /// Two signals claim the same bit
    OverlappingSignals,
    /// Signal width is zero or wider than [`MAX_SIGNAL_BITS`]
    InvalidWidth,
    /// Base payload length differs from the layout size
    PayloadSizeMismatch,
    /// Checksum variant cannot be used for this message
    UnsupportedChecksum,
    /// Frame construction failed
    Frame(FrameError),
}

impl From<FrameError> for EncodeError {
    fn from(e: FrameError) -> Self {
        EncodeError::Frame(e)
    }
}

/// One field of a message
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signal {
    /// Signal name as it appears in the vehicle's message database
    pub name: &'static str,
    /// Bit position of the least significant bit
    pub start_bit: u16,
    /// Width in bits
    pub size: u8,
    /// Two's complement raw value
    pub signed: bool,
    /// Physical value = raw × factor + offset
    pub factor: f64,
    /// Physical value = raw × factor + offset
    pub offset: f64,
}

impl Signal {
    /// Create an unsigned, unscaled signal
    pub const fn new(name: &'static str, start_bit: u16, size: u8) -> Self {
        Self {
            name,
            start_bit,
            size,
            signed: false,
            factor: 1.0,
            offset: 0.0,
        }
    }

    /// Apply a physical scale and offset
    pub const fn scaled(self, factor: f64, offset: f64) -> Self {
        Self {
            factor,
            offset,
            ..self
        }
    }

    /// Interpret the raw value as two's complement
    pub const fn signed(self) -> Self {
        Self {
            signed: true,
            ..self
        }
    }

    /// Bit mask of this signal within a little-endian u64 payload
    fn mask(&self) -> u64 {
        ((1u64 << self.size) - 1) << self.start_bit
    }

    /// Smallest raw value that fits
    pub fn raw_min(&self) -> i64 {
        if self.signed {
            -(1i64 << (self.size - 1))
        } else {
            0
        }
    }

    /// Largest raw value that fits
    pub fn raw_max(&self) -> i64 {
        if self.signed {
            (1i64 << (self.size - 1)) - 1
        } else {
            (1i64 << self.size) - 1
        }
    }

    /// Smallest physical value that fits
    pub fn min(&self) -> f64 {
        self.raw_min() as f64 * self.factor + self.offset
    }

    /// Largest physical value that fits
    pub fn max(&self) -> f64 {
        self.raw_max() as f64 * self.factor + self.offset
    }

    fn check_bounds(&self, payload_len: usize) -> Result<(), EncodeError> {
        if self.size == 0 || self.size > MAX_SIGNAL_BITS {
            return Err(EncodeError::InvalidWidth);
        }
        let end = self.start_bit as usize + self.size as usize;
        if end > payload_len.min(MAX_DLC) * 8 {
            return Err(EncodeError::SignalOutOfBounds);
        }
        Ok(())
    }

    /// Write a raw value into the payload
    pub fn write_raw(&self, payload: &mut [u8], raw: i64) -> Result<(), EncodeError> {
        self.check_bounds(payload.len())?;
        if raw < self.raw_min() || raw > self.raw_max() {
            return Err(EncodeError::ValueOutOfRange);
        }

        let field = (raw as u64) & ((1u64 << self.size) - 1);
        let word = (load(payload) & !self.mask()) | (field << self.start_bit);
        store(payload, word);
        Ok(())
    }

    /// Read the raw value from the payload
    pub fn read_raw(&self, payload: &[u8]) -> Result<i64, EncodeError> {
        self.check_bounds(payload.len())?;
        let field = (load(payload) & self.mask()) >> self.start_bit;

        if self.signed && field & (1u64 << (self.size - 1)) != 0 {
            Ok(field as i64 - (1i64 << self.size))
        } else {
            Ok(field as i64)
        }
    }

    /// Write a physical value, rounding to the nearest raw step
    pub fn write(&self, payload: &mut [u8], value: f64) -> Result<(), EncodeError> {
        let scaled = (value - self.offset) / self.factor;
        // NaN fails both comparisons
        if !(scaled >= self.raw_min() as f64 - 0.5 && scaled < self.raw_max() as f64 + 0.5) {
            return Err(EncodeError::ValueOutOfRange);
        }
        self.write_raw(payload, round_half_away(scaled))
    }

    /// Read the physical value
    pub fn read(&self, payload: &[u8]) -> Result<f64, EncodeError> {
        Ok(self.read_raw(payload)? as f64 * self.factor + self.offset)
    }
}

/// Static description of one message
#[derive(Debug, Clone, Copy)]
pub struct MessageLayout {
    /// Message name
    pub name: &'static str,
    /// Arbitration identifier
    pub address: u32,
    /// Payload length in bytes
    pub size: usize,
    /// Fields in declaration order
    pub signals: &'static [Signal],
}

impl MessageLayout {
    /// Look up a signal by name
    pub fn signal(&self, name: &str) -> Result<&Signal, EncodeError> {
        self.signals
            .iter()
            .find(|s| s.name == name)
            .ok_or(EncodeError::UnknownSignal)
    }

    /// Check that every signal fits the payload and that none overlap
    pub fn validate(&self) -> Result<(), EncodeError> {
        if self.size == 0 || self.size > MAX_DLC {
            return Err(EncodeError::PayloadSizeMismatch);
        }

        let mut claimed = 0u64;
        for signal in self.signals {
            signal.check_bounds(self.size)?;
            if claimed & signal.mask() != 0 {
                return Err(EncodeError::OverlappingSignals);
            }
            claimed |= signal.mask();
        }
        Ok(())
    }

    /// Write a physical value by signal name
    pub fn set(&self, payload: &mut [u8], name: &str, value: f64) -> Result<(), EncodeError> {
        self.signal(name)?.write(payload, value)
    }

    /// Write a raw value by signal name
    pub fn set_raw(&self, payload: &mut [u8], name: &str, raw: i64) -> Result<(), EncodeError> {
        self.signal(name)?.write_raw(payload, raw)
    }

    /// Write a boolean flag by signal name
    pub fn set_flag(&self, payload: &mut [u8], name: &str, on: bool) -> Result<(), EncodeError> {
        self.set_raw(payload, name, on as i64)
    }

    /// Read a physical value by signal name
    pub fn get(&self, payload: &[u8], name: &str) -> Result<f64, EncodeError> {
        self.signal(name)?.read(payload)
    }

    /// Read a raw value by signal name
    pub fn get_raw(&self, payload: &[u8], name: &str) -> Result<i64, EncodeError> {
        self.signal(name)?.read_raw(payload)
    }

    /// Start a zeroed payload, or copy a forwarded stock payload
    pub fn base_payload(&self, stock: Option<&[u8]>) -> Result<[u8; MAX_DLC], EncodeError> {
        let mut payload = [0u8; MAX_DLC];
        if let Some(stock) = stock {
            if stock.len() != self.size {
                return Err(EncodeError::PayloadSizeMismatch);
            }
            payload[..self.size].copy_from_slice(stock);
        }
        Ok(payload)
    }
}

fn load(payload: &[u8]) -> u64 {
    payload
        .iter()
        .take(MAX_DLC)
        .enumerate()
        .fold(0u64, |acc, (i, &b)| acc | (b as u64) << (8 * i))
}

fn store(payload: &mut [u8], word: u64) {
    for (i, byte) in payload.iter_mut().take(MAX_DLC).enumerate() {
        *byte = (word >> (8 * i)) as u8;
    }
}

/// Round to nearest, ties away from zero (no libm in no_std)
fn round_half_away(x: f64) -> i64 {
    if x >= 0.0 {
        (x + 0.5) as i64
    } else {
        (x - 0.5) as i64
    }
}
