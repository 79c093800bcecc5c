//! Error adapter for converting [`CliError`] to miette diagnostics.
//!
//! TOML parse failures in configuration or annotation files carry the
//! source text and the offending span, which are rendered as a labelled
//! snippet. Every other error is reported as a plain message with a code.

use std::{fmt, ops::Range};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use fretboard::FretboardError;

use crate::{CliError, annotations::AnnotationError, config::ConfigError};

/// Adapter rendering a [`CliError`] through miette.
pub struct ErrorAdapter<'a>(pub &'a CliError);

impl ErrorAdapter<'_> {
    /// Source text and span of a TOML parse failure, if this is one.
    fn parse_location(&self) -> Option<(&String, Option<&Range<usize>>)> {
        match self.0 {
            CliError::Config(ConfigError::Parse { src, span, .. })
            | CliError::Annotation(AnnotationError::Parse { src, span, .. }) => {
                Some((src, span.as_ref()))
            }
            _ => None,
        }
    }
}

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            CliError::Fretboard(FretboardError::Io(_)) => "fretboard::io",
            CliError::Fretboard(FretboardError::Config(_)) => "fretboard::style",
            CliError::Config(_) => "fretboard::config",
            CliError::Annotation(_) => "fretboard::annotation",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            CliError::Fretboard(FretboardError::Config(_))
            | CliError::Annotation(AnnotationError::Color(_)) => {
                "colors accept any CSS color, e.g. \"crimson\" or \"#336699\""
            }
            CliError::Annotation(AnnotationError::StrokeStyle(_)) => {
                "stroke styles are solid, dashed, dotted or a dasharray such as \"6,2\""
            }
            CliError::Config(ConfigError::MissingFile(_)) => {
                "omit --config to search the default locations"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.parse_location()
            .map(|(src, _)| src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let (_, span) = self.parse_location()?;
        let span = span?;
        let label = LabeledSpan::new_primary_with_span(
            Some("here".to_string()),
            SourceSpan::new(span.start.into(), span.len()),
        );
        Some(Box::new(std::iter::once(label)))
    }
}
