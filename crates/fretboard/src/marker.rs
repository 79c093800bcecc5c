//! Markers and shapes placed on a board.
//!
//! Both are described by logical positions only. Their drawing coordinates
//! are derived from the board's layout when they are added.

use fretboard_core::{
    color::Color,
    draw::{StrokeDefinition, StrokeStyle},
    layout::FretPosition,
};

/// Appearance of a marker dot.
///
/// # Examples
///
/// ```
/// # use fretboard::marker::MarkerOptions;
/// # use fretboard_core::color::Color;
/// let root = MarkerOptions::new()
///     .with_color(Color::new("crimson").unwrap())
///     .with_text("R");
/// assert_eq!(root.text(), "R");
/// assert!(root.border_color().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerOptions {
    color: Color,
    border_color: Option<Color>,
    text: String,
    text_color: Color,
}

impl MarkerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Fill color of the dot.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Outline color, `None` for no outline.
    pub fn border_color(&self) -> Option<Color> {
        self.border_color
    }

    /// Label drawn on the dot. Empty means no label.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub(crate) fn has_text(&self) -> bool {
        !self.text.is_empty()
    }
}

impl Default for MarkerOptions {
    fn default() -> Self {
        Self {
            color: Color::default(),
            border_color: None,
            text: String::new(),
            text_color: Color::white(),
        }
    }
}

/// A marker recorded by a board, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    position: FretPosition,
    options: MarkerOptions,
}

impl Marker {
    pub(crate) fn new(position: FretPosition, options: MarkerOptions) -> Self {
        Self { position, options }
    }

    pub fn position(&self) -> FretPosition {
        self.position
    }

    pub fn options(&self) -> &MarkerOptions {
        &self.options
    }
}

/// Appearance of a closed shape drawn through logical positions.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeOptions {
    stroke: StrokeDefinition,
    fill: Option<Color>,
    opacity: f32,
}

impl ShapeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke.set_color(color);
        self
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke.set_width(width);
        self
    }

    /// Sets the outline pattern. Markers are always drawn solid.
    pub fn with_stroke_style(mut self, style: StrokeStyle) -> Self {
        self.stroke = self.stroke.with_style(style);
        self
    }

    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}

impl Default for ShapeOptions {
    fn default() -> Self {
        Self {
            stroke: StrokeDefinition::new(Color::default(), 1.0),
            fill: None,
            opacity: 0.3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_defaults() {
        let options = MarkerOptions::default();
        assert_eq!(options.color(), Color::default());
        assert_eq!(options.border_color(), None);
        assert_eq!(options.text(), "");
        assert!(!options.has_text());
        assert_eq!(options.text_color(), Color::white());
    }

    #[test]
    fn test_marker_builders() {
        let options = MarkerOptions::new()
            .with_border_color(Color::white())
            .with_text("5")
            .with_text_color(Color::default());
        assert_eq!(options.border_color(), Some(Color::white()));
        assert!(options.has_text());
        assert_eq!(options.text_color(), Color::default());
    }

    #[test]
    fn test_shape_defaults() {
        let options = ShapeOptions::default();
        assert_eq!(options.stroke().color(), Color::default());
        assert_eq!(options.stroke().width(), 1.0);
        assert_eq!(options.fill(), None);
        assert_eq!(options.opacity(), 0.3);
        assert_eq!(*options.stroke().style(), StrokeStyle::Solid);
    }

    #[test]
    fn test_shape_stroke_style_keeps_color_and_width() {
        let options = ShapeOptions::new()
            .with_stroke_color(Color::white())
            .with_stroke_width(2.0)
            .with_stroke_style(StrokeStyle::Dotted);
        assert_eq!(*options.stroke().style(), StrokeStyle::Dotted);
        assert_eq!(options.stroke().color(), Color::white());
        assert_eq!(options.stroke().width(), 2.0);
    }

    #[test]
    fn test_shape_builders() {
        let navy = Color::new("navy").unwrap();
        let options = ShapeOptions::new()
            .with_stroke_color(navy)
            .with_stroke_width(2.0)
            .with_fill(Color::white())
            .with_opacity(0.5);
        assert_eq!(options.stroke().color(), navy);
        assert_eq!(options.stroke().width(), 2.0);
        assert_eq!(options.fill(), Some(Color::white()));
        assert_eq!(options.opacity(), 0.5);
    }
}
