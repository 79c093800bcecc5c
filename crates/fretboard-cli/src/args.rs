//! Command-line argument definitions for the fretboard CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the annotation input, output path,
//! configuration file selection, simulated host state and logging verbosity.

use clap::Parser;

/// Command-line arguments for the fretboard diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to an annotation file (TOML) with markers and shapes
    #[arg(help = "Path to the annotation file")]
    pub input: Option<String>,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Width of the simulated viewport; 768 or less draws a vertical board
    #[arg(long, default_value_t = 1024.0)]
    pub viewport_width: f32,

    /// Number of taps on the board before exporting
    #[arg(long, default_value_t = 0)]
    pub taps: u32,

    /// Interaction mode reported by the host (e.g. chord, scale)
    #[arg(long)]
    pub mode: Option<String>,
}
