//! Payload checksum variants
//!
//! Which variant a message uses is a static property of the vehicle
//! profile. It is never inferred from traffic.
//!
//! Variants A/B/C apply to the 8-byte steering command, whose checksum
//! lives in byte 6:
//!
//! | Variant | Input | Algorithm |
//! |---|---|---|
//! | A `Crc8` | bytes 0–5, 7 | CRC-8, poly 0x11D, init 0xFD, xor-out 0xDF |
//! | B `Sum6` | bytes 0–5 | sum mod 256 |
//! | C `Sum6Plus7` | bytes 0–5, 7 | sum mod 256 |
//!
//! The CRC "init" follows the reference convention where it is the value
//! returned for an empty input, so the shift register starts at
//! `init ^ xor_out`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// CRC-8 generator polynomial (x^8 + x^4 + x^3 + x^2 + 1, implicit top bit)
pub const CRC8_POLY: u8 = 0x1D;

/// CRC-8 result for an empty input
pub const CRC8_INIT: u8 = 0xFD;

/// CRC-8 final XOR
pub const CRC8_XOR_OUT: u8 = 0xDF;

/// Index of the checksum byte in the steering command
pub const LKAS_CHECKSUM_BYTE: usize = 6;

const CRC8_TABLE: [u8; 256] = build_crc8_table();

const fn build_crc8_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u8;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 0x80 != 0 {
                (crc << 1) ^ CRC8_POLY
            } else {
                crc << 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// Checksum algorithm assigned to a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ChecksumVariant {
    /// Variant A: CRC-8 over bytes 0–5 and 7
    Crc8,
    /// Variant B: sum of bytes 0–5
    Sum6,
    /// Variant C: sum of bytes 0–5 plus byte 7
    #[default]
    Sum6Plus7,
    /// 4-bit complement of the nibble sum of every byte
    NibbleComplement,
    /// Sum of every byte
    SumAll,
}

impl ChecksumVariant {
    /// Whether this variant is defined for the steering command layout
    pub fn is_lkas_variant(&self) -> bool {
        matches!(
            self,
            ChecksumVariant::Crc8 | ChecksumVariant::Sum6 | ChecksumVariant::Sum6Plus7
        )
    }

    /// Compute the checksum over a payload whose checksum field is zeroed
    ///
    /// Variants A/B/C expect the 8-byte steering layout; the other two
    /// accept any length.
    pub fn compute(&self, payload: &[u8]) -> u8 {
        match self {
            ChecksumVariant::Crc8 => {
                let head = &payload[..payload.len().min(LKAS_CHECKSUM_BYTE)];
                let tail = payload.get(LKAS_CHECKSUM_BYTE + 1..).unwrap_or(&[]);
                crc8_finish(crc8_update(crc8_update(crc8_start(), head), tail))
            }
            ChecksumVariant::Sum6 => sum_bytes(&payload[..payload.len().min(6)]),
            ChecksumVariant::Sum6Plus7 => {
                let tail = payload.get(7).copied().unwrap_or(0);
                sum_bytes(&payload[..payload.len().min(6)]).wrapping_add(tail)
            }
            ChecksumVariant::NibbleComplement => nibble_complement(payload),
            ChecksumVariant::SumAll => sum_bytes(payload),
        }
    }
}

/// Initial shift register value
fn crc8_start() -> u8 {
    CRC8_INIT ^ CRC8_XOR_OUT
}

fn crc8_update(mut crc: u8, data: &[u8]) -> u8 {
    for &byte in data {
        crc = CRC8_TABLE[(crc ^ byte) as usize];
    }
    crc
}

fn crc8_finish(crc: u8) -> u8 {
    crc ^ CRC8_XOR_OUT
}

/// CRC-8 of a byte slice (variant A's algorithm, without byte selection)
pub fn crc8(data: &[u8]) -> u8 {
    crc8_finish(crc8_update(crc8_start(), data))
}

/// Sum of bytes modulo 256
pub fn sum_bytes(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
}

/// `(16 - Σ(high + low nibble) mod 16) mod 16`
pub fn nibble_complement(data: &[u8]) -> u8 {
    let sum: u32 = data.iter().map(|&b| ((b >> 4) + (b & 0x0F)) as u32).sum();
    ((16 - sum % 16) % 16) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD_1: [u8; 8] = [0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x00, 0x77];
    const PAYLOAD_2: [u8; 8] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0xAB, 0x08];
    const PAYLOAD_3: [u8; 8] = [0xFF; 8];

    #[test]
    fn test_crc8_empty_is_init() {
        assert_eq!(crc8(&[]), CRC8_INIT);
    }

    #[test]
    fn test_crc8_golden() {
        assert_eq!(ChecksumVariant::Crc8.compute(&PAYLOAD_1), 0xD0);
        assert_eq!(ChecksumVariant::Crc8.compute(&PAYLOAD_2), 0xFF);
        assert_eq!(ChecksumVariant::Crc8.compute(&PAYLOAD_3), 0x34);
    }

    #[test]
    fn test_crc8_ignores_checksum_byte() {
        let mut payload = PAYLOAD_1;
        payload[LKAS_CHECKSUM_BYTE] = 0x5A;
        assert_eq!(
            ChecksumVariant::Crc8.compute(&payload),
            ChecksumVariant::Crc8.compute(&PAYLOAD_1)
        );
    }

    #[test]
    fn test_sum6_golden() {
        assert_eq!(ChecksumVariant::Sum6.compute(&PAYLOAD_1), 0x65);
        assert_eq!(ChecksumVariant::Sum6.compute(&PAYLOAD_2), 21);
        assert_eq!(ChecksumVariant::Sum6.compute(&PAYLOAD_3), 250);
    }

    #[test]
    fn test_sum6_plus7_golden() {
        assert_eq!(ChecksumVariant::Sum6Plus7.compute(&PAYLOAD_1), 0xDC);
        assert_eq!(ChecksumVariant::Sum6Plus7.compute(&PAYLOAD_2), 29);
        assert_eq!(ChecksumVariant::Sum6Plus7.compute(&PAYLOAD_3), 249);
    }

    #[test]
    fn test_nibble_complement() {
        // nibbles: 1+2 + 3+4 = 10 -> 16 - 10 = 6
        assert_eq!(nibble_complement(&[0x12, 0x34]), 6);
        // nibble sum multiple of 16 wraps to zero instead of 16
        assert_eq!(nibble_complement(&[0x88]), 0);
        assert_eq!(nibble_complement(&[]), 0);
    }

    #[test]
    fn test_sum_all() {
        assert_eq!(ChecksumVariant::SumAll.compute(&PAYLOAD_3), 0xF8);
        assert_eq!(ChecksumVariant::SumAll.compute(&[0x80, 0x80, 0x01]), 0x01);
    }

    #[test]
    fn test_lkas_variants() {
        assert!(ChecksumVariant::Crc8.is_lkas_variant());
        assert!(ChecksumVariant::Sum6.is_lkas_variant());
        assert!(ChecksumVariant::Sum6Plus7.is_lkas_variant());
        assert!(!ChecksumVariant::SumAll.is_lkas_variant());
    }
}
