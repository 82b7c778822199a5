//! CAN frame container
//!
//! A frame is built fresh every transmit cycle and handed to the transport
//! immediately; nothing in this crate keeps a frame across cycles.

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum classic CAN data length
pub const MAX_DLC: usize = 8;

/// Highest valid 11-bit identifier
pub const MAX_STANDARD_ID: u32 = 0x7FF;

/// Errors that can occur while constructing a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Payload exceeds the classic CAN data length
    PayloadTooLarge,
    /// Identifier does not fit in 11 bits
    InvalidAddress,
}

/// A single outgoing CAN frame
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CanFrame {
    /// Arbitration identifier
    pub address: u32,
    /// Physical bus index (0 = powertrain, 1 = chassis harness, 2 = camera)
    pub bus: u8,
    /// Payload bytes
    pub data: Vec<u8, MAX_DLC>,
}

impl CanFrame {
    /// Create a frame from an address, bus and payload
    pub fn new(address: u32, bus: u8, data: &[u8]) -> Result<Self, FrameError> {
        if address > MAX_STANDARD_ID {
            return Err(FrameError::InvalidAddress);
        }

        let mut payload = Vec::new();
        payload
            .extend_from_slice(data)
            .map_err(|_| FrameError::PayloadTooLarge)?;

        Ok(Self {
            address,
            bus,
            data: payload,
        })
    }

    /// Payload length in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check whether the payload is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_new() {
        let frame = CanFrame::new(0x340, 0, &[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(frame.address, 0x340);
        assert_eq!(frame.bus, 0);
        assert_eq!(frame.len(), 8);
    }

    #[test]
    fn test_payload_too_large() {
        let result = CanFrame::new(0x340, 0, &[0u8; MAX_DLC + 1]);
        assert_eq!(result, Err(FrameError::PayloadTooLarge));
    }

    #[test]
    fn test_extended_address_rejected() {
        let result = CanFrame::new(0x800, 0, &[0u8; 4]);
        assert_eq!(result, Err(FrameError::InvalidAddress));
    }
}
