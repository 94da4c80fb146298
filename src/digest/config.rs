//! Per-version digest configuration.
//!
//! Version 0 is the only layout this crate defines. Keeping the config as
//! its own small struct, separate from the enclosing
//! `Digest`, leaves room for a version 1 without reshaping the outer type.

use crate::bitpos::{BitPosition, OverflowError};

/// The version-0 config: `advanceRate(u16) | windowSize(u16) | byteLength(u64)
/// | bitLength(u8)`, 13 bytes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config0 {
    pub advance_rate: u16,
    pub window_size: u16,
    pub byte_length: u64,
    pub bit_length: u8,
}

impl Config0 {
    pub const WIRE_LEN: usize = 13;

    /// `8 * byte_length + bit_length`, the bit length of the data segment
    /// this config describes.
    pub fn data_length(&self) -> Result<BitPosition, OverflowError> {
        let total_bits = (self.byte_length as i128) * 8 + self.bit_length as i128;
        if total_bits.unsigned_abs() >= crate::config::MAX_BIT_MAGNITUDE as u128 {
            return Err(OverflowError);
        }
        Ok(BitPosition::from_bits(total_bits))
    }

    pub fn to_bytes(&self) -> [u8; Self::WIRE_LEN] {
        let mut out = [0u8; Self::WIRE_LEN];
        out[0..2].copy_from_slice(&self.advance_rate.to_be_bytes());
        out[2..4].copy_from_slice(&self.window_size.to_be_bytes());
        out[4..12].copy_from_slice(&self.byte_length.to_be_bytes());
        out[12] = self.bit_length;
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Config0 {
        debug_assert!(bytes.len() >= Self::WIRE_LEN);
        Config0 {
            advance_rate: u16::from_be_bytes([bytes[0], bytes[1]]),
            window_size: u16::from_be_bytes([bytes[2], bytes[3]]),
            byte_length: u64::from_be_bytes(bytes[4..12].try_into().unwrap()),
            bit_length: bytes[12],
        }
    }
}
