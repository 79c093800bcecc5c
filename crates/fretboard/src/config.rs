//! Configuration types for fretboard rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! configuration file. Every section and field is optional and falls back
//! to the built-in defaults.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining every section.
//! - [`InstrumentConfig`] - Tuning and fret count (`[instrument]`).
//! - [`LayoutMetrics`] - Spacing constants (`[layout]`).
//! - [`StyleConfig`] - Board colors (`[style]`).
//! - [`SurfaceConfig`] - Marker stacking (`[surface]`).
//!
//! # Example
//!
//! ```
//! # use fretboard::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.instrument().num_strings(), 6);
//! assert!(config.style().board_style().is_ok());
//! ```

use serde::Deserialize;

use fretboard_core::{color::Color, instrument::InstrumentConfig, layout::LayoutMetrics};

use crate::{FretboardError, style::BoardStyle, surface::SurfaceOptions};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Instrument section.
    #[serde(default)]
    instrument: InstrumentConfig,

    /// Layout metrics section.
    #[serde(default)]
    layout: LayoutMetrics,

    /// Style section.
    #[serde(default)]
    style: StyleConfig,

    /// Surface behavior section.
    #[serde(default)]
    surface: SurfaceConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(
        instrument: InstrumentConfig,
        layout: LayoutMetrics,
        style: StyleConfig,
        surface: SurfaceConfig,
    ) -> Self {
        Self {
            instrument,
            layout,
            style,
            surface,
        }
    }

    pub fn instrument(&self) -> &InstrumentConfig {
        &self.instrument
    }

    pub fn layout(&self) -> &LayoutMetrics {
        &self.layout
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn surface(&self) -> &SurfaceConfig {
        &self.surface
    }

    /// Resolves the surface options described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FretboardError::Config`] if a configured color cannot be
    /// parsed.
    pub fn surface_options(&self) -> Result<SurfaceOptions, FretboardError> {
        let style = self.style.board_style().map_err(FretboardError::Config)?;
        Ok(SurfaceOptions::new()
            .with_metrics(self.layout)
            .with_style(style)
            .with_markers_on_top(self.surface.markers_on_top))
    }
}

/// Visual styling configuration.
///
/// Colors are CSS color strings. Fields that are not set keep the
/// [`BoardStyle`] defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Page color behind the board.
    #[serde(default)]
    background_color: Option<String>,

    #[serde(default)]
    board_color: Option<String>,

    #[serde(default)]
    nut_color: Option<String>,

    #[serde(default)]
    fret_color: Option<String>,

    #[serde(default)]
    string_color: Option<String>,

    #[serde(default)]
    inlay_color: Option<String>,

    /// Color of the fret-number labels.
    #[serde(default)]
    label_color: Option<String>,

    #[serde(default)]
    label_font_size: Option<u16>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        parse_color("background", self.background_color.as_deref())
    }

    /// Builds a [`BoardStyle`] from the defaults and the configured overrides.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first color that cannot be parsed.
    pub fn board_style(&self) -> Result<BoardStyle, String> {
        let mut style = BoardStyle {
            page_color: self.background_color()?,
            ..BoardStyle::default()
        };

        if let Some(color) = parse_color("board", self.board_color.as_deref())? {
            style.board_color = color;
        }
        if let Some(color) = parse_color("nut", self.nut_color.as_deref())? {
            style.nut_color = color;
        }
        if let Some(color) = parse_color("fret", self.fret_color.as_deref())? {
            style.fret_color = color;
        }
        if let Some(color) = parse_color("string", self.string_color.as_deref())? {
            style.string_color = color;
        }
        if let Some(color) = parse_color("inlay", self.inlay_color.as_deref())? {
            style.inlay_color = color;
        }
        if let Some(color) = parse_color("label", self.label_color.as_deref())? {
            style.label_text.set_color(Some(color));
        }
        if let Some(size) = self.label_font_size {
            style.label_text.set_font_size(size);
        }

        Ok(style)
    }
}

fn parse_color(field: &str, value: Option<&str>) -> Result<Option<Color>, String> {
    value
        .map(Color::new)
        .transpose()
        .map_err(|err| format!("Invalid {field} color in config: {err}"))
}

/// Behavior of the board surface.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct SurfaceConfig {
    /// Draw markers and shapes above the fret-number labels.
    #[serde(default)]
    markers_on_top: bool,
}

impl SurfaceConfig {
    pub fn new(markers_on_top: bool) -> Self {
        Self { markers_on_top }
    }

    pub fn markers_on_top(&self) -> bool {
        self.markers_on_top
    }
}
