//! A bit-precise string: a sequence of bits with byte-addressed storage and
//! an exact length measured in bits rather than bytes.
//!
//! `BitString` is a value type. Every operation that returns a `BitString`
//! returns a freshly owned buffer; `bytes()` hands back a defensive copy.
//! `set_length` is the sole mutator, used internally to re-establish the
//! "tail zero" invariant (bits past `length`, within the final stored byte,
//! are always zero) after a resize.

use std::fmt;

use crate::bitpos::{BitPosition, OverflowError};

/// Errors raised by `BitString` operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitStringError {
    /// A documented precondition was violated (negative length, a window or
    /// advance rate below 1, `advance > window`, a non-positive diff width).
    /// The payload names which precondition.
    InvalidArgument(&'static str),
    /// A `BitPosition` involved in the operation could not be materialized
    /// as a bounded byte count.
    Overflow(OverflowError),
}

impl fmt::Display for BitStringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitStringError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            BitStringError::Overflow(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for BitStringError {}

impl From<OverflowError> for BitStringError {
    fn from(e: OverflowError) -> Self {
        BitStringError::Overflow(e)
    }
}

/// A finite sequence of bits.
#[derive(Debug, Clone)]
pub struct BitString {
    bytes: Vec<u8>,
    length: BitPosition,
}

impl BitString {
    /// Copies `bytes` in, with `length = 8 * bytes.len()`.
    pub fn new(bytes: &[u8]) -> Self {
        BitString {
            bytes: bytes.to_vec(),
            length: BitPosition::new(bytes.len() as i64, 0),
        }
    }

    fn from_raw(bytes: Vec<u8>, length: BitPosition) -> Self {
        BitString { bytes, length }
    }

    /// A defensive copy of the underlying byte buffer.
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// The exact bit length.
    pub fn length(&self) -> BitPosition {
        self.length.clone()
    }

    /// Resizes this string to `new_length` bits, truncating or zero-extending
    /// the buffer and re-zeroing any partial tail byte.
    ///
    /// Fails with `InvalidArgument` if `new_length` is negative, or
    /// `Overflow` if it cannot be sized into a buffer.
    pub fn set_length(&mut self, new_length: BitPosition) -> Result<(), BitStringError> {
        if new_length.sign() < 0 {
            return Err(BitStringError::InvalidArgument(
                "BitString length must be non-negative",
            ));
        }
        let new_byte_len = new_length.ceil_byte_offset()? as usize;
        self.bytes.resize(new_byte_len, 0);
        self.length = new_length;
        self.zero_tail();
        Ok(())
    }

    fn zero_tail(&mut self) {
        let used_bits = (self.length.to_i128().unwrap_or(0) % 8) as u32;
        if used_bits != 0 {
            if let Some(last) = self.bytes.last_mut() {
                let mask = 0xffu8 << (8 - used_bits);
                *last &= mask;
            }
        }
    }

    /// Reads the conceptual bit at `idx`, where the source is imagined
    /// surrounded by infinitely many zero bits on both sides.
    fn bit_at(&self, idx: i128, len: i128) -> u8 {
        if idx < 0 || idx >= len {
            return 0;
        }
        let byte_idx = (idx / 8) as usize;
        let bit_in_byte = (idx % 8) as u32;
        (self.bytes[byte_idx] >> (7 - bit_in_byte)) & 1
    }

    /// Extracts `length` bits starting at `from`, treating the source as
    /// zero-padded infinitely on both sides. `from` may be negative or run
    /// past the end of the source; both cases yield zero bits for the
    /// out-of-range portion.
    pub fn slice(&self, from: &BitPosition, length: &BitPosition) -> Result<BitString, BitStringError> {
        if length.sign() < 0 {
            return Err(BitStringError::InvalidArgument(
                "slice length must be non-negative",
            ));
        }
        let out_byte_len = length.ceil_byte_offset()? as usize;
        let mut out = vec![0u8; out_byte_len];

        let from_i = from
            .to_i128()
            .ok_or(BitStringError::Overflow(OverflowError))?;
        let len_i = length
            .to_i128()
            .ok_or(BitStringError::Overflow(OverflowError))?;
        let src_len_i = self
            .length
            .to_i128()
            .ok_or(BitStringError::Overflow(OverflowError))?;

        for i in 0..len_i {
            let bit = self.bit_at(from_i + i, src_len_i);
            if bit == 1 {
                let out_byte_idx = (i / 8) as usize;
                let out_bit_in_byte = (i % 8) as u32;
                out[out_byte_idx] |= 1 << (7 - out_bit_in_byte);
            }
        }

        Ok(BitString::from_raw(out, length.clone()))
    }

    /// `shift(offset) = slice(-offset, self.length())`. A positive offset
    /// shifts right (low bits fall off the end); a negative offset shifts
    /// left (high bits fall off the start). Length is preserved.
    pub fn shift(&self, offset: &BitPosition) -> Result<BitString, BitStringError> {
        let zero = BitPosition::new(0, 0);
        let neg_offset = zero.minus(offset);
        self.slice(&neg_offset, &self.length)
    }

    /// XOR-folds overlapping `window`-bit windows of this string, placed at
    /// stride `advance`, into a single shorter output.
    ///
    /// Preconditions: `advance >= 1`, `window >= 1`, `advance <= window`.
    /// The empty source always compresses to the empty string.
    pub fn xor_compress(&self, advance: u16, window: u16) -> Result<BitString, BitStringError> {
        if advance < 1 || window < 1 || advance > window {
            return Err(BitStringError::InvalidArgument(
                "xor_compress requires 1 <= advance <= window",
            ));
        }
        if self.length.sign() == 0 {
            return Ok(BitString::new(&[]));
        }

        let w = window as i128;
        let a = advance as i128;
        let src_len = self
            .length
            .to_i128()
            .ok_or(BitStringError::Overflow(OverflowError))?;

        let n = ceil_div_i128(src_len, w);
        let out_len_bits = (n - 1) * a + w;
        let out_length = BitPosition::from_bits(out_len_bits);
        let out_byte_len = out_length.ceil_byte_offset()? as usize;
        let mut out_bytes = vec![0u8; out_byte_len];

        for idx in 0..n {
            let window_start = idx * w;
            for local in 0..w {
                if self.bit_at(window_start + local, src_len) == 1 {
                    let out_idx = idx * a + local;
                    if out_idx < out_len_bits {
                        let out_byte_idx = (out_idx / 8) as usize;
                        let out_bit_in_byte = (out_idx % 8) as u32;
                        out_bytes[out_byte_idx] ^= 1 << (7 - out_bit_in_byte);
                    }
                }
            }
        }

        Ok(BitString::from_raw(out_bytes, out_length))
    }
}

fn ceil_div_i128(a: i128, b: i128) -> i128 {
    let q = a / b;
    let r = a % b;
    if r != 0 && (r > 0) == (b > 0) {
        q + 1
    } else {
        q
    }
}

/// Structural equality: canonicalized (tail-zeroed) buffers and equal
/// length. Every constructor and mutator here maintains the tail-zero
/// invariant, so a plain field comparison already implements this.
impl PartialEq for BitString {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.bytes == other.bytes
    }
}

impl Eq for BitString {}

/// Produces a bit-per-window equality map between `a` and `b`.
///
/// Let `m = min(a.length(), b.length())`. The output has `⌈m / w⌉` bits; bit
/// `i` is `1` if the `w`-bit window at `i·w` differs between `a` and `b`,
/// packed MSB-first (bit `i` lands at byte `i / 8`, bit position `7 - (i %
/// 8)`).
pub fn diff(a: &BitString, b: &BitString, w: &BitPosition) -> Result<BitString, BitStringError> {
    if w.sign() < 1 {
        return Err(BitStringError::InvalidArgument(
            "diff window width must be at least 1",
        ));
    }
    let m = a.length().min(b.length());
    let out_len = m.ceil_divided_by(w);
    let out_len_i = out_len.to_i128().ok_or(BitStringError::Overflow(OverflowError))?;

    let out_byte_len = out_len.ceil_byte_offset()? as usize;
    let mut out_bytes = vec![0u8; out_byte_len];

    for i in 0..out_len_i {
        let start = BitPosition::from_bits(i).multiplied_by(w);
        let window_a = a.slice(&start, w)?;
        let window_b = b.slice(&start, w)?;
        if window_a != window_b {
            let byte_idx = (i / 8) as usize;
            let bit_in_byte = (i % 8) as u32;
            out_bytes[byte_idx] |= 1 << (7 - bit_in_byte);
        }
    }

    Ok(BitString::from_raw(out_bytes, out_len))
}
