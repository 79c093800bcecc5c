//! Instrument description: tuning and fret count.
//!
//! An [`InstrumentConfig`] is fixed for the lifetime of a rendered board.
//! Strings are stored lowest-pitched first, while positions address them
//! highest-pitched first: string `1` is the last entry of the tuning.

use serde::Deserialize;

/// Default number of frets drawn on a board.
pub const DEFAULT_FRETS: u32 = 15;

/// Standard six-string guitar tuning, lowest-pitched string first.
pub const STANDARD_TUNING: [&str; 6] = ["E", "A", "D", "G", "B", "E"];

/// The drawn instrument.
///
/// No validation is performed: an empty tuning or zero frets yields a
/// degenerate (but panic-free) layout.
///
/// # Examples
///
/// ```
/// # use fretboard_core::instrument::InstrumentConfig;
/// let guitar = InstrumentConfig::default();
/// assert_eq!(guitar.num_strings(), 6);
/// assert_eq!(guitar.fret_count(), 15);
///
/// let bass = InstrumentConfig::new(["E", "A", "D", "G"], 20);
/// assert_eq!(bass.string_name(1), Some("G"));
/// assert_eq!(bass.string_name(4), Some("E"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InstrumentConfig {
    /// String names ordered from the lowest-pitched string to the highest.
    #[serde(default = "standard_tuning")]
    tuning: Vec<String>,

    /// Number of frets after the nut.
    #[serde(default = "default_frets")]
    frets: u32,
}

fn standard_tuning() -> Vec<String> {
    STANDARD_TUNING.iter().map(|name| name.to_string()).collect()
}

fn default_frets() -> u32 {
    DEFAULT_FRETS
}

impl InstrumentConfig {
    /// Creates an instrument from string names (lowest pitch first) and a fret count.
    pub fn new<I, S>(tuning: I, frets: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tuning: tuning.into_iter().map(Into::into).collect(),
            frets,
        }
    }

    /// Returns the string names, lowest-pitched first.
    pub fn tuning(&self) -> &[String] {
        &self.tuning
    }

    /// Returns the number of strings.
    pub fn num_strings(&self) -> usize {
        self.tuning.len()
    }

    /// Returns the number of frets.
    pub fn fret_count(&self) -> u32 {
        self.frets
    }

    /// Returns the name of a string addressed the way markers address it
    /// (`1` = highest-pitched), or `None` when out of range.
    pub fn string_name(&self, string: i32) -> Option<&str> {
        let index = self.num_strings() as i64 - i64::from(string);
        usize::try_from(index)
            .ok()
            .and_then(|index| self.tuning.get(index))
            .map(String::as_str)
    }
}

impl Default for InstrumentConfig {
    fn default() -> Self {
        Self {
            tuning: standard_tuning(),
            frets: DEFAULT_FRETS,
        }
    }
}
