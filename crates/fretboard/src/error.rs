//! Error types for fretboard operations.
//!
//! Building and annotating a board never fails; errors only arise at the
//! edges, when configuration is turned into styles or output is written.

use std::io;

use thiserror::Error;

/// The main error type for fretboard operations.
#[derive(Debug, Error)]
pub enum FretboardError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
