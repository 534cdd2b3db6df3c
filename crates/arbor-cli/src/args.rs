//! Command-line argument definitions for the Arbor CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, link emission, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Arbor layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input JSON tree
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output JSON layout
    #[arg(short, long, default_value = "layout.json")]
    pub output: String,

    /// Emit a Hermite-sampled link path for each parent-child edge
    #[arg(long)]
    pub links: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
