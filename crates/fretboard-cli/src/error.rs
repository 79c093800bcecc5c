//! Error type of the CLI run.

use thiserror::Error;

use fretboard::FretboardError;

use crate::{annotations::AnnotationError, config::ConfigError};

/// Any failure of a CLI run.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Fretboard(#[from] FretboardError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Annotation(#[from] AnnotationError),
}
