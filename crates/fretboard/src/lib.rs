//! Fretboard - interactive diagrams of fretted string instruments.
//!
//! A [`Fretboard`] lays out strings, frets, inlays and fret numbers for an
//! instrument, then accepts markers and shapes addressed by logical
//! `(string, fret)` positions. A [`RotationToggle`](rotation::RotationToggle)
//! turns marker labels a quarter turn on each tap.
//!
//! # Examples
//!
//! ```
//! use fretboard::{
//!     Fretboard,
//!     layout::FretPosition,
//!     marker::{MarkerOptions, ShapeOptions},
//!     rotation::{NoMode, PointerEvent, RotationToggle},
//!     viewport::FixedViewport,
//! };
//! use fretboard_core::instrument::InstrumentConfig;
//!
//! let mut board = Fretboard::create(&FixedViewport(1280.0), InstrumentConfig::default());
//! board.set_marker((2, 3), MarkerOptions::new().with_text("R"));
//! board.add_shape(
//!     &[FretPosition::new(1, 1), FretPosition::new(2, 3), FretPosition::new(3, 2)],
//!     ShapeOptions::default(),
//! );
//!
//! let mut toggle = RotationToggle::new(NoMode);
//! let tap = PointerEvent::TapEnded {
//!     position: board.geometry().board_bounds().center(),
//! };
//! assert!(toggle.handle_event(tap, &mut board));
//!
//! let svg = board.render_svg();
//! assert!(svg.contains("rotate(90"));
//! ```

pub mod config;
pub mod marker;
pub mod rotation;
pub mod style;
pub mod viewport;

mod error;
mod surface;

pub use fretboard_core::{color, draw, geometry, instrument, layout};

pub use error::FretboardError;
pub use surface::{Fretboard, SurfaceOptions};
