pub mod args;
pub mod constants;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use xorsig::{BitPosition, BitString, Digest};

use crate::{displaylevel, displayout};
use args::Command;

pub fn run(cli: args::Cli) -> Result<()> {
    if cli.quiet {
        constants::set_display_level(0);
    } else {
        constants::set_display_level(2 + cli.verbose as u32);
    }

    match cli.command {
        Command::Digest {
            input,
            output,
            advance,
            window,
        } => run_digest(&input, output.as_deref(), advance, window),
        Command::Diff {
            digest_a,
            digest_b,
            window,
            pretty,
        } => run_diff(&digest_a, &digest_b, window, pretty),
    }
}

fn run_digest(input: &Path, output: Option<&Path>, advance: u16, window: u16) -> Result<()> {
    let raw = fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    displaylevel!(2, "read {} bytes from {}", raw.len(), input.display());

    let source = BitString::new(&raw);
    let digest = Digest::with_config(&source, advance, window).with_context(|| "building digest")?;
    let envelope = digest.emit();

    match output {
        Some(path) => {
            fs::write(path, &envelope).with_context(|| format!("writing {}", path.display()))?;
            displaylevel!(2, "wrote {} bytes to {}", envelope.len(), path.display());
        }
        None => {
            displayout!("{}\n", hex::encode(&envelope));
        }
    }
    Ok(())
}

fn run_diff(digest_a: &Path, digest_b: &Path, window: u16, pretty: bool) -> Result<()> {
    let bytes_a = fs::read(digest_a).with_context(|| format!("reading {}", digest_a.display()))?;
    let bytes_b = fs::read(digest_b).with_context(|| format!("reading {}", digest_b.display()))?;

    let a = Digest::load(&bytes_a).with_context(|| format!("parsing {}", digest_a.display()))?;
    let b = Digest::load(&bytes_b).with_context(|| format!("parsing {}", digest_b.display()))?;

    let w = BitPosition::new(0, window as i64);
    let result = xorsig::digest::diff(&a, &b, &w).with_context(|| "computing diff")?;
    let bytes = result.bytes();

    if pretty {
        displayout!("{}\n", pretty_diff(&bytes));
    } else {
        displayout!("{}\n", hex::encode(&bytes));
    }
    Ok(())
}

/// Renders each diff bit as a block ("██" for a matching window, "--" for
/// one that differs).
fn pretty_diff(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 8 * 2);
    for byte in bytes {
        for bit_idx in 0..8 {
            let bit = (byte >> (7 - bit_idx)) & 1;
            out.push_str(if bit == 0 { "\u{2588}\u{2588}" } else { "--" });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pretty_diff_renders_blocks_and_dashes() {
        assert_eq!(pretty_diff(&[0b1000_0000]), "--\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}");
        assert_eq!(
            pretty_diff(&[0x00]),
            "\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}"
        );
    }
}
