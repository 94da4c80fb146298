//! Versioned digest envelope: `(version, config, data)` plus parse/emit.
//!
//! A `Digest` is the on-disk artifact this crate produces: a
//! [`crate::bitstr::BitString`] that has been [`crate::bitstr::BitString::xor_compress`]ed,
//! tagged with the parameters that produced it so it can be decoded without
//! any out-of-band knowledge.

pub mod config;

use std::fmt;

use crate::bitpos::{BitPosition, OverflowError};
use crate::bitstr::{self, BitString, BitStringError};
use crate::config as crate_config;
use config::Config0;

/// Errors raised while parsing a serialized digest envelope, or while
/// building one whose configured length overflows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    /// Buffer is shorter than the 4-byte version field.
    ShortVersion,
    /// The version field names a version absent from the version table.
    UnknownVersion(u32),
    /// Buffer has a recognized version but not enough bytes for that
    /// version's config layout.
    ShortConfig,
    /// The config's declared data length exceeds the bits actually present
    /// in the remaining buffer. Treated as malformed/adversarial input.
    ConfigLengthExceedsData,
    /// A `BitPosition` computed while building or loading this digest could
    /// not be materialized as a bounded byte count.
    Overflow(OverflowError),
    /// Propagated from the underlying `BitString` operation that built this
    /// digest's data (e.g. an invalid `advance`/`window` pair).
    BitString(BitStringError),
}

impl fmt::Display for DigestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigestError::ShortVersion => write!(f, "buffer too short to contain a version field"),
            DigestError::UnknownVersion(v) => write!(f, "unknown digest version {v}"),
            DigestError::ShortConfig => write!(f, "buffer too short to contain its config"),
            DigestError::ConfigLengthExceedsData => {
                write!(f, "configured data length exceeds the bytes present")
            }
            DigestError::Overflow(e) => write!(f, "{e}"),
            DigestError::BitString(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DigestError {}

impl From<OverflowError> for DigestError {
    fn from(e: OverflowError) -> Self {
        DigestError::Overflow(e)
    }
}

impl From<BitStringError> for DigestError {
    fn from(e: BitStringError) -> Self {
        match e {
            BitStringError::Overflow(o) => DigestError::Overflow(o),
            other => DigestError::BitString(other),
        }
    }
}

/// A built or loaded digest: format version, its config, and the compressed
/// data bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    version: u32,
    config: Config0,
    data: BitString,
}

impl Digest {
    /// Builds a version-0 digest from `source`, using the fixed defaults
    /// `advanceRate = 1`, `windowSize = 8`.
    pub fn new(source: &BitString) -> Result<Digest, DigestError> {
        Digest::with_config(
            source,
            crate_config::DEFAULT_ADVANCE_RATE,
            crate_config::DEFAULT_WINDOW_SIZE,
        )
    }

    /// Builds a version-0 digest from `source` with caller-chosen
    /// `advance`/`window`, rather than the fixed defaults `Digest::new`
    /// always uses. The wire layout is identical; only the config fields
    /// differ.
    pub fn with_config(source: &BitString, advance: u16, window: u16) -> Result<Digest, DigestError> {
        let data = source.xor_compress(advance, window)?;
        let data_len = data
            .length()
            .to_i128()
            .ok_or(DigestError::Overflow(OverflowError))?;
        let byte_length = (data_len / 8) as u64;
        let bit_length = (data_len % 8) as u8;
        Ok(Digest {
            version: 0,
            config: Config0 {
                advance_rate: advance,
                window_size: window,
                byte_length,
                bit_length,
            },
            data,
        })
    }

    /// Parses a serialized envelope.
    ///
    /// State machine: `Start -> HasVersion -> HasConfig -> HasData`, each
    /// transition fallible.
    pub fn load(bytes: &[u8]) -> Result<Digest, DigestError> {
        // Start -> HasVersion
        if bytes.len() < 4 {
            return Err(DigestError::ShortVersion);
        }
        let version = u32::from_be_bytes(bytes[0..4].try_into().unwrap());

        // HasVersion -> HasConfig
        let config_len = crate_config::config_len_for_version(version)
            .ok_or(DigestError::UnknownVersion(version))? as usize;
        let remaining = &bytes[4..];
        if remaining.len() < config_len {
            return Err(DigestError::ShortConfig);
        }
        let config = Config0::from_bytes(&remaining[..config_len]);

        // HasConfig -> HasData
        let data_bytes = &remaining[config_len..];
        let data_length = config.data_length()?;
        let declared_bits = data_length
            .to_i128()
            .ok_or(DigestError::Overflow(OverflowError))?;
        if declared_bits > (data_bytes.len() as i128) * 8 {
            return Err(DigestError::ConfigLengthExceedsData);
        }

        let mut data = BitString::new(data_bytes);
        data.set_length(data_length)?;

        Ok(Digest { version, config, data })
    }

    /// The reverse of `load`: 4-byte version, then the config layout for
    /// that version, then the data bytes (tail bits zero).
    pub fn emit(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(4 + Config0::WIRE_LEN + self.data.bytes().len());
        out.extend_from_slice(&self.version.to_be_bytes());
        out.extend_from_slice(&self.config.to_bytes());
        out.extend_from_slice(&self.data.bytes());
        out
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn config(&self) -> Config0 {
        self.config
    }

    pub fn data(&self) -> BitString {
        self.data.clone()
    }
}

/// Produces a bit-per-window equality map between two digests' data, per
/// `w`-bit windows. Operates directly on the compressed `BitString`s; it
/// does not require matching configs between `a` and `b`.
pub fn diff(a: &Digest, b: &Digest, w: &BitPosition) -> Result<BitString, DigestError> {
    Ok(bitstr::diff(&a.data, &b.data, w)?)
}
