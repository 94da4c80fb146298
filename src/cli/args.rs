//! Command-line argument definitions for the `xorsig` binary.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "xorsig", about = "Content-similarity digest engine")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase output verbosity (may be repeated).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-essential output.
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build a digest envelope from a file.
    Digest {
        /// Input file to digest.
        input: std::path::PathBuf,

        /// Write the envelope here instead of stdout.
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,

        /// Advance rate (bits) passed to XORCompress. Defaults to the
        /// version-0 fixed value.
        #[arg(long, default_value_t = xorsig::config::DEFAULT_ADVANCE_RATE)]
        advance: u16,

        /// Window size (bits) passed to XORCompress. Defaults to the
        /// version-0 fixed value.
        #[arg(long, default_value_t = xorsig::config::DEFAULT_WINDOW_SIZE)]
        window: u16,
    },

    /// Compare two digest envelopes and print their windowed diff.
    Diff {
        /// First digest envelope file.
        digest_a: std::path::PathBuf,

        /// Second digest envelope file.
        digest_b: std::path::PathBuf,

        /// Diff window width, in bits.
        #[arg(short = 'w', long, default_value_t = 8)]
        window: u16,

        /// Render the diff as a block bitmap instead of hex.
        #[arg(long)]
        pretty: bool,
    },
}
