//! Binary entry point for the `xorsig` command-line tool.
//!
//! A thin collaborator over the `xorsig` library: parses arguments, reads
//! files, and prints results. All digest/diff logic lives in the library;
//! this binary performs no computation of its own beyond formatting output.

mod cli;

use clap::Parser;

fn main() {
    let args = cli::args::Cli::parse();
    if let Err(err) = cli::run(args) {
        eprintln!("xorsig: {err:#}");
        std::process::exit(1);
    }
}
