//! xorsig — content-similarity digest engine.
//!
//! Three layered components, leaves first: [`bitpos`] (arbitrary-precision
//! signed bit positions), [`bitstr`] (a bit-precise string built on top),
//! and [`digest`] (the versioned envelope and the `XORCompress`/`Diff`
//! operations that make it useful for comparing two inputs).
//!
//! The library is synchronous, single-threaded, and performs no I/O; the
//! `xorsig` binary built alongside it is the external collaborator that
//! reads files, drives the CLI, and renders output.

pub mod bitpos;
pub mod bitstr;
pub mod config;
pub mod digest;

pub use bitpos::{BitPosition, OverflowError};
pub use bitstr::{diff, BitString, BitStringError};
pub use digest::{config::Config0, Digest, DigestError};
