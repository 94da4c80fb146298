//! Compile-time configuration constants for the digest engine.
//!
//! Plays the same role `lz4conf.h` plays elsewhere: one place for the magic
//! numbers that would otherwise be scattered across the modules that use
//! them.

/// Default advance rate (bits) used by [`crate::digest::Digest::new`].
///
/// Version-0 digests always use this value; see `digest::config::Config0`.
pub const DEFAULT_ADVANCE_RATE: u16 = 1;

/// Default window size (bits) used by [`crate::digest::Digest::new`].
pub const DEFAULT_WINDOW_SIZE: u16 = 8;

/// Threshold beyond which a [`crate::bitpos::BitPosition`] magnitude cannot
/// be safely materialized as a `u64` byte count.
///
/// `ceil_byte_offset` fails once `|p| >= MAX_BIT_MAGNITUDE`.
pub const MAX_BIT_MAGNITUDE: u64 = 1 << 63;

/// Digest envelope version table: `(version, config byte length)`.
///
/// Version 0 is the only defined layout: `advanceRate(u16) | windowSize(u16)
/// | byteLength(u64) | bitLength(u8)` = 2 + 2 + 8 + 1 = 13 bytes.
pub const VERSION_TABLE: &[(u32, u16)] = &[(0, 13)];

/// Looks up the expected config byte length for a digest format version.
pub fn config_len_for_version(version: u32) -> Option<u16> {
    VERSION_TABLE
        .iter()
        .find(|(v, _)| *v == version)
        .map(|(_, len)| *len)
}
