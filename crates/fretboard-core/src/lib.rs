//! Fretboard Core Types and Definitions
//!
//! This crate provides the foundational pieces for rendering fretted-string
//! instrument diagrams. It includes:
//!
//! - **Instrument**: Tuning and fret count of the drawn instrument ([`instrument`] module)
//! - **Layout**: The mapping between logical `(string, fret)` positions and
//!   drawing coordinates, under both orientations ([`layout`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: The retained, layered scene graph and its SVG output ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod instrument;
pub mod layout;
