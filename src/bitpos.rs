//! Arbitrary-precision signed bit positions.
//!
//! A [`BitPosition`] is a single signed integer count of bits, backed by
//! [`num_bigint::BigInt`] so that intermediate arithmetic in [`crate::bitstr`]
//! (negative "from" offsets, window counts, shift deltas) never has to worry
//! about overflowing a fixed-width accumulator. The only place a `BitPosition`
//! is materialized into a bounded byte count is [`BitPosition::ceil_byte_offset`],
//! which is also the only fallible operation here.
//!
//! Every method below constructs a fresh `BigInt` for its result; none of
//! them mutate `self` or reuse an operand as scratch space, unlike the Go
//! source this crate's behavior is grounded in.

use std::cmp::Ordering;
use std::fmt;

use num_bigint::{BigInt, Sign};
use num_traits::{Signed, ToPrimitive, Zero};

/// Raised by [`BitPosition::ceil_byte_offset`] when `|p|` is too large to be
/// represented as a `u64` byte count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverflowError;

impl fmt::Display for OverflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("bit position magnitude exceeds the representable byte-count range")
    }
}

impl std::error::Error for OverflowError {}

/// An arbitrary-precision signed count of bits.
///
/// Decomposes to a `(byteOffset, bitOffset)` pair via [`BitPosition::new`];
/// both division components truncate toward zero, matching the sign of the
/// position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitPosition(BigInt);

impl BitPosition {
    /// Constructs `p = 8 * byte_offset + bit_offset`.
    ///
    /// Accepts any signed 64-bit pair; the arbitrary-precision backing store
    /// means this never overflows.
    pub fn new(byte_offset: i64, bit_offset: i64) -> Self {
        BitPosition(BigInt::from(8) * BigInt::from(byte_offset) + BigInt::from(bit_offset))
    }

    fn from_bigint(value: BigInt) -> Self {
        BitPosition(value)
    }

    /// Builds a position directly from a raw bit count, bypassing the
    /// byte/bit decomposition in [`BitPosition::new`]. Used internally by
    /// [`crate::bitstr`] where a bit offset is already in hand as a plain
    /// integer.
    pub(crate) fn from_bits(bits: i128) -> Self {
        BitPosition(BigInt::from(bits))
    }

    /// Narrows this position to an `i128`, when it fits.
    ///
    /// `None` here does not necessarily mean `ceil_byte_offset` would also
    /// fail: this is a plain numeric narrowing, used by [`crate::bitstr`]
    /// for loop bounds, not the `2^63` buffer-sizing threshold.
    pub(crate) fn to_i128(&self) -> Option<i128> {
        self.0.to_i128()
    }

    /// `self + other`.
    pub fn plus(&self, other: &BitPosition) -> BitPosition {
        BitPosition::from_bigint(&self.0 + &other.0)
    }

    /// `self - other`.
    pub fn minus(&self, other: &BitPosition) -> BitPosition {
        BitPosition::from_bigint(&self.0 - &other.0)
    }

    /// `self * other`.
    pub fn multiplied_by(&self, other: &BitPosition) -> BitPosition {
        BitPosition::from_bigint(&self.0 * &other.0)
    }

    /// `self / other`, truncating toward zero.
    ///
    /// Precondition: `other` is non-zero (as in ordinary integer division).
    pub fn divided_by(&self, other: &BitPosition) -> BitPosition {
        BitPosition::from_bigint(&self.0 / &other.0)
    }

    /// `⌈self / other⌉`, the mathematical ceiling (rounding toward `+∞`),
    /// for any combination of signs.
    ///
    /// Implemented by truncating division plus a correction: when the
    /// remainder is non-zero and shares `other`'s sign, the truncated
    /// quotient is one short of the ceiling.
    ///
    /// Precondition: `other` is non-zero.
    pub fn ceil_divided_by(&self, other: &BitPosition) -> BitPosition {
        let quotient = &self.0 / &other.0;
        let remainder = &self.0 % &other.0;
        if !remainder.is_zero() && remainder.sign() == other.0.sign() {
            BitPosition::from_bigint(quotient + 1)
        } else {
            BitPosition::from_bigint(quotient)
        }
    }

    /// `-1`, `0`, or `1` according to the sign of this position.
    pub fn sign(&self) -> i32 {
        match self.0.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    /// Numeric equality.
    pub fn equals(&self, other: &BitPosition) -> bool {
        self.0 == other.0
    }

    /// The smaller of `self` and `other` (by numeric value).
    pub fn min(&self, other: &BitPosition) -> BitPosition {
        if self.0 <= other.0 {
            self.clone()
        } else {
            other.clone()
        }
    }

    /// The larger of `self` and `other` (by numeric value).
    pub fn max(&self, other: &BitPosition) -> BitPosition {
        if self.0 >= other.0 {
            self.clone()
        } else {
            other.clone()
        }
    }

    /// `⌈self / 8⌉`, the byte count needed to hold this many bits, rounding
    /// toward `+∞`.
    ///
    /// Negative positions ceiling to a negative number of bytes, which has
    /// no meaning as a buffer size; those are clamped to zero (no bytes are
    /// needed to hold a position that lies entirely in the zero-padded
    /// region to the left of a [`crate::bitstr::BitString`]). This is the
    /// "negative-ceiling variant" among the two definitions the original
    /// implementation left ambiguous — see `DESIGN.md`.
    ///
    /// Fails when `|self| >= 2^63`, the threshold beyond which a byte count
    /// cannot be safely represented in a `u64` buffer length.
    pub fn ceil_byte_offset(&self) -> Result<u64, OverflowError> {
        let limit = BigInt::from(crate::config::MAX_BIT_MAGNITUDE);
        if self.0.abs() >= limit {
            return Err(OverflowError);
        }
        let eight = BitPosition::new(1, 0);
        let ceiled = self.ceil_divided_by(&eight);
        if ceiled.0.sign() == Sign::Minus {
            return Ok(0);
        }
        // Safe: the magnitude bound above means `ceiled` fits in one u64 digit.
        let (_, digits) = ceiled.0.to_u64_digits();
        Ok(digits.first().copied().unwrap_or(0))
    }
}

impl PartialOrd for BitPosition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.0.cmp(&other.0))
    }
}

impl Ord for BitPosition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl fmt::Display for BitPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
