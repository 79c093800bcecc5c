//! Layout engine: logical fretboard positions to drawing coordinates.
//!
//! The engine is a set of pure computations over an [`InstrumentConfig`], an
//! [`Orientation`] and a set of [`LayoutMetrics`]. [`compute_geometry`]
//! produces a [`LayoutGeometry`], which then maps every logical position
//! ([`FretPosition`]) and every static board element (nut, fret wires,
//! strings, inlays, fret-number labels) to physical coordinates.
//!
//! # Axes
//!
//! Positions are first computed along two logical axes:
//!
//! - the **string axis**, across the strings, and
//! - the **fret axis**, along the strings from the nut towards the body.
//!
//! In [`Orientation::Vertical`] the string axis is `x` and the fret axis is
//! `y`; [`Orientation::Horizontal`] swaps them and also reverses the string
//! axis so the highest-pitched string is drawn nearest the top.
//!
//! ```text
//!  Vertical                      Horizontal
//!
//!   E A D G B e                  e ─┼──┼──┼──
//!   ═══════════  nut             B ─┼──┼──┼──
//!   │ │ │ │ │ │                  G ─┼──┼──┼──
//!   ┼─┼─┼─┼─┼─┼  fret 1          D ─┼──┼──┼──
//!   │ │ │ │ │ │                  A ─┼──┼──┼──
//!   ┼─┼─┼─┼─┼─┼  fret 2          E ─┼──┼──┼──
//!                                   ‖  1  2   (nut, fret labels below)
//! ```
//!
//! No input is validated: out-of-range strings or frets map to off-board
//! coordinates and degenerate counts give degenerate extents.

use std::fmt;

use serde::Deserialize;

use crate::{
    geometry::{Bounds, Insets, Point, Size},
    instrument::InstrumentConfig,
};

/// Viewports at most this wide get a vertical board.
pub const VERTICAL_BREAKPOINT: f32 = 768.0;

/// Frets carrying an inlay dot and a fret-number label.
pub const INLAY_FRETS: [u32; 6] = [3, 5, 7, 9, 12, 15];

/// The fret whose inlay is a pair of dots.
pub const DOUBLE_INLAY_FRET: u32 = 12;

/// Direction in which the board is drawn.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Strings run top to bottom, nut at the top.
    Vertical,
    /// Strings run left to right, nut at the left (default).
    #[default]
    Horizontal,
}

impl Orientation {
    /// Resolves the orientation for a host viewport of the given width.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fretboard_core::layout::Orientation;
    /// assert_eq!(Orientation::from_viewport_width(390.0), Orientation::Vertical);
    /// assert_eq!(Orientation::from_viewport_width(768.0), Orientation::Vertical);
    /// assert_eq!(Orientation::from_viewport_width(1280.0), Orientation::Horizontal);
    /// ```
    pub fn from_viewport_width(width: f32) -> Self {
        if width <= VERTICAL_BREAKPOINT {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }

    /// Returns true for [`Orientation::Vertical`].
    pub fn is_vertical(self) -> bool {
        self == Self::Vertical
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertical => write!(f, "vertical"),
            Self::Horizontal => write!(f, "horizontal"),
        }
    }
}

/// The fixed spacing constants of a board, in drawing units.
///
/// Every field has a built-in default and may be overridden individually
/// from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    /// Margin on every side of the board.
    pub padding: f32,
    /// Distance between neighbouring strings.
    pub string_spacing: f32,
    /// Distance between neighbouring fret wires.
    pub fret_spacing: f32,
    /// Stroke width of the nut.
    pub nut_thickness: f32,
    /// Extra margin on the fret-number label side.
    pub label_offset: f32,
    /// Distance of open-string markers before the nut.
    pub open_string_offset: f32,
    /// Stroke width of the highest-pitched string.
    pub string_base_width: f32,
    /// Stroke width added per step towards the lowest-pitched string.
    pub string_width_step: f32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            padding: 40.0,
            string_spacing: 30.0,
            fret_spacing: 60.0,
            nut_thickness: 6.0,
            label_offset: 30.0,
            open_string_offset: 20.0,
            string_base_width: 1.0,
            string_width_step: 0.5,
        }
    }
}

/// A logical position on the board.
///
/// `string` counts from `1` (highest-pitched) upwards; `fret` is `0` for the
/// open string and `1..=N` for fretted positions. Both are signed so that
/// out-of-range values map to off-board geometry rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FretPosition {
    string: i32,
    fret: i32,
}

impl FretPosition {
    pub fn new(string: i32, fret: i32) -> Self {
        Self { string, fret }
    }

    pub fn string(self) -> i32 {
        self.string
    }

    pub fn fret(self) -> i32 {
        self.fret
    }
}

impl From<(i32, i32)> for FretPosition {
    fn from((string, fret): (i32, i32)) -> Self {
        Self::new(string, fret)
    }
}

/// Derived, immutable dimensions of a board for one configuration and
/// orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutGeometry {
    metrics: LayoutMetrics,
    orientation: Orientation,
    num_strings: usize,
    fret_count: u32,
    board: Size,
}

/// Computes the geometry of a board.
///
/// Board extents are `(strings - 1) * string_spacing` along the string axis
/// and `frets * fret_spacing` along the fret axis. The canvas adds
/// `padding` on every side and `label_offset` on the fret-label side
/// (right when vertical, bottom when horizontal).
///
/// # Examples
///
/// ```
/// # use fretboard_core::instrument::InstrumentConfig;
/// # use fretboard_core::layout::{compute_geometry, LayoutMetrics, Orientation};
/// let metrics = LayoutMetrics::default();
/// let geometry = compute_geometry(
///     &InstrumentConfig::default(),
///     Orientation::Horizontal,
///     metrics,
/// );
/// assert_eq!(geometry.board_height(), 5.0 * metrics.string_spacing);
/// assert_eq!(geometry.board_width(), 15.0 * metrics.fret_spacing);
/// ```
pub fn compute_geometry(
    config: &InstrumentConfig,
    orientation: Orientation,
    metrics: LayoutMetrics,
) -> LayoutGeometry {
    let string_extent = (config.num_strings() as f32 - 1.0) * metrics.string_spacing;
    let fret_extent = config.fret_count() as f32 * metrics.fret_spacing;

    let board = match orientation {
        Orientation::Vertical => Size::new(string_extent, fret_extent),
        Orientation::Horizontal => Size::new(fret_extent, string_extent),
    };

    LayoutGeometry {
        metrics,
        orientation,
        num_strings: config.num_strings(),
        fret_count: config.fret_count(),
        board,
    }
}

impl LayoutGeometry {
    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_vertical(&self) -> bool {
        self.orientation.is_vertical()
    }

    pub fn num_strings(&self) -> usize {
        self.num_strings
    }

    pub fn fret_count(&self) -> u32 {
        self.fret_count
    }

    /// Width of the board itself, excluding margins.
    pub fn board_width(&self) -> f32 {
        self.board.width()
    }

    /// Height of the board itself, excluding margins.
    pub fn board_height(&self) -> f32 {
        self.board.height()
    }

    /// Board rectangle in canvas coordinates.
    pub fn board_bounds(&self) -> Bounds {
        let padding = self.metrics.padding;
        Bounds::new_from_top_left(Point::new(padding, padding), self.board)
    }

    /// Margins around the board; the label side carries the extra offset.
    pub fn margins(&self) -> Insets {
        let padding = self.metrics.padding;
        let label = padding + self.metrics.label_offset;
        match self.orientation {
            Orientation::Vertical => Insets::new(padding, label, padding, padding),
            Orientation::Horizontal => Insets::new(padding, padding, label, padding),
        }
    }

    /// Total drawing size: board plus margins.
    pub fn canvas_size(&self) -> Size {
        self.board.add_padding(self.margins())
    }

    /// Canvas rectangle, anchored at the origin.
    pub fn canvas_bounds(&self) -> Bounds {
        Bounds::new_from_top_left(Point::default(), self.canvas_size())
    }

    /// Physical string index of a marker-addressed string (`strings - string`).
    ///
    /// For valid strings `1..=strings` this is a bijection onto
    /// `0..strings`; index `0` is the lowest-pitched string.
    pub fn string_index(&self, string: i32) -> i64 {
        self.num_strings as i64 - i64::from(string)
    }

    /// Maps a logical position to its physical coordinates.
    ///
    /// Open positions sit `open_string_offset` before the nut; fretted
    /// positions sit halfway between the two fret wires bounding the fret.
    pub fn position_for(&self, position: FretPosition) -> Point {
        let string_axis = self.string_axis(self.string_index(position.string()) as f32);
        let fret_axis = self.fret_axis(position.fret());
        self.to_point(string_axis, fret_axis)
    }

    /// Endpoints of the nut.
    pub fn nut_line(&self) -> (Point, Point) {
        self.fret_wire(0)
    }

    /// Endpoints of fret wire `fret`, spanning every string.
    pub fn fret_wire(&self, fret: u32) -> (Point, Point) {
        let fret_axis = self.wire_axis(fret as f32);
        let start = self.metrics.padding;
        let end = start + self.string_extent();
        (
            self.to_point(start, fret_axis),
            self.to_point(end, fret_axis),
        )
    }

    /// Endpoints of the string at physical `index`, from the nut to the last fret.
    pub fn string_line(&self, index: usize) -> (Point, Point) {
        let string_axis = self.string_axis(index as f32);
        (
            self.to_point(string_axis, self.wire_axis(0.0)),
            self.to_point(string_axis, self.wire_axis(self.fret_count as f32)),
        )
    }

    /// Stroke width of the string at physical `index`; lower strings are thicker.
    pub fn string_width(&self, index: usize) -> f32 {
        let steps = self.num_strings as f32 - 1.0 - index as f32;
        self.metrics.string_base_width + steps * self.metrics.string_width_step
    }

    /// Inlay frets that exist on this board.
    pub fn inlay_frets(&self) -> impl Iterator<Item = u32> + '_ {
        INLAY_FRETS
            .into_iter()
            .filter(|fret| *fret <= self.fret_count)
    }

    /// Centers of the inlay dots of `fret`.
    ///
    /// A single dot sits on the middle of the string axis; the double inlay
    /// straddles it one string spacing to either side.
    pub fn inlay_centers(&self, fret: u32) -> Vec<Point> {
        let fret_axis = self.fret_axis(fret as i32);
        let center = self.metrics.padding + self.string_extent() / 2.0;

        if fret == DOUBLE_INLAY_FRET {
            let offset = self.metrics.string_spacing;
            vec![
                self.to_point(center - offset, fret_axis),
                self.to_point(center + offset, fret_axis),
            ]
        } else {
            vec![self.to_point(center, fret_axis)]
        }
    }

    /// Anchor of the number label of `fret`, centered in the label margin.
    pub fn fret_label_anchor(&self, fret: u32) -> Point {
        let fret_axis = self.fret_axis(fret as i32);
        let string_axis = self.metrics.padding
            + self.string_extent()
            + (self.metrics.padding + self.metrics.label_offset) / 2.0;
        self.to_point(string_axis, fret_axis)
    }

    fn string_extent(&self) -> f32 {
        (self.num_strings as f32 - 1.0) * self.metrics.string_spacing
    }

    fn string_axis(&self, index: f32) -> f32 {
        let slot = match self.orientation {
            Orientation::Vertical => index,
            Orientation::Horizontal => self.num_strings as f32 - 1.0 - index,
        };
        self.metrics.padding + slot * self.metrics.string_spacing
    }

    fn wire_axis(&self, fret: f32) -> f32 {
        self.metrics.padding + fret * self.metrics.fret_spacing
    }

    fn fret_axis(&self, fret: i32) -> f32 {
        if fret <= 0 {
            return self.wire_axis(0.0) - self.metrics.open_string_offset;
        }
        let fret = fret as f32;
        (self.wire_axis(fret - 1.0) + self.wire_axis(fret)) / 2.0
    }

    fn to_point(&self, string_axis: f32, fret_axis: f32) -> Point {
        let point = Point::new(string_axis, fret_axis);
        match self.orientation {
            Orientation::Vertical => point,
            Orientation::Horizontal => point.transpose(),
        }
    }
}
