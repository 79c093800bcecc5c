//! Annotation files: markers and shapes to draw on a board.
//!
//! ```toml
//! [[marker]]
//! string = 1
//! fret = 3
//! color = "crimson"
//! text = "R"
//!
//! [[shape]]
//! points = [[1, 1], [2, 2], [3, 1]]
//! stroke = "navy"
//! stroke_width = 2.0
//! stroke_style = "dashed"
//! opacity = 0.3
//! ```

use std::{fs, ops::Range, path::Path};

use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use fretboard::{
    Fretboard,
    color::Color,
    draw::StrokeStyle,
    layout::FretPosition,
    marker::{MarkerOptions, ShapeOptions},
};

/// Errors raised while reading or applying an annotation file
#[derive(Debug, Error)]
pub enum AnnotationError {
    #[error("Failed to read annotation file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse annotations: {message}")]
    Parse {
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },

    #[error("Invalid color in annotation: {0}")]
    Color(String),

    #[error("Invalid stroke style in annotation: {0}")]
    StrokeStyle(String),
}

/// The markers and shapes of an annotation file, in file order.
#[derive(Debug, Default, Deserialize)]
pub struct Annotations {
    #[serde(default, rename = "marker")]
    markers: Vec<MarkerEntry>,

    #[serde(default, rename = "shape")]
    shapes: Vec<ShapeEntry>,
}

#[derive(Debug, Deserialize)]
struct MarkerEntry {
    string: i32,
    fret: i32,
    color: Option<String>,
    border_color: Option<String>,
    text: Option<String>,
    text_color: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ShapeEntry {
    points: Vec<(i32, i32)>,
    stroke: Option<String>,
    stroke_width: Option<f32>,
    stroke_style: Option<String>,
    fill: Option<String>,
    opacity: Option<f32>,
}

impl Annotations {
    /// Reads and parses an annotation file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AnnotationError> {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading annotations");
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses annotations from TOML source.
    pub fn parse(content: &str) -> Result<Self, AnnotationError> {
        toml::from_str(content).map_err(|err| AnnotationError::Parse {
            message: err.message().to_string(),
            span: err.span(),
            src: content.to_string(),
        })
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Draws every marker, then every shape, onto `board`.
    ///
    /// Colors are checked before anything is drawn, so a bad color leaves
    /// the board untouched.
    pub fn apply(&self, board: &mut Fretboard) -> Result<(), AnnotationError> {
        let markers = self
            .markers
            .iter()
            .map(|entry| {
                let position = FretPosition::new(entry.string, entry.fret);
                entry.options().map(|options| (position, options))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let shapes = self
            .shapes
            .iter()
            .map(|entry| entry.options().map(|options| (entry.positions(), options)))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(markers = markers.len(), shapes = shapes.len(); "Applying annotations");

        for (position, options) in markers {
            board.set_marker(position, options);
        }
        for (points, options) in shapes {
            board.add_shape(&points, options);
        }
        Ok(())
    }
}

impl MarkerEntry {
    fn options(&self) -> Result<MarkerOptions, AnnotationError> {
        let mut options = MarkerOptions::new();
        if let Some(color) = parse_color(self.color.as_deref())? {
            options = options.with_color(color);
        }
        if let Some(color) = parse_color(self.border_color.as_deref())? {
            options = options.with_border_color(color);
        }
        if let Some(text) = &self.text {
            options = options.with_text(text.as_str());
        }
        if let Some(color) = parse_color(self.text_color.as_deref())? {
            options = options.with_text_color(color);
        }
        Ok(options)
    }
}

impl ShapeEntry {
    fn positions(&self) -> Vec<FretPosition> {
        self.points.iter().copied().map(FretPosition::from).collect()
    }

    fn options(&self) -> Result<ShapeOptions, AnnotationError> {
        let mut options = ShapeOptions::new();
        if let Some(color) = parse_color(self.stroke.as_deref())? {
            options = options.with_stroke_color(color);
        }
        if let Some(width) = self.stroke_width {
            options = options.with_stroke_width(width);
        }
        if let Some(style) = &self.stroke_style {
            let style = style
                .parse::<StrokeStyle>()
                .map_err(AnnotationError::StrokeStyle)?;
            options = options.with_stroke_style(style);
        }
        if let Some(color) = parse_color(self.fill.as_deref())? {
            options = options.with_fill(color);
        }
        if let Some(opacity) = self.opacity {
            options = options.with_opacity(opacity);
        }
        Ok(options)
    }
}

fn parse_color(value: Option<&str>) -> Result<Option<Color>, AnnotationError> {
    value
        .map(Color::new)
        .transpose()
        .map_err(AnnotationError::Color)
}

#[cfg(test)]
mod tests {
    use fretboard::{draw::RenderLayer, instrument::InstrumentConfig, viewport::FixedViewport};

    use super::*;

    fn board() -> Fretboard {
        Fretboard::create(&FixedViewport(1024.0), InstrumentConfig::default())
    }

    #[test]
    fn test_parse_and_apply() {
        let annotations = Annotations::parse(
            r#"
            [[marker]]
            string = 1
            fret = 3
            color = "crimson"
            text = "R"

            [[marker]]
            string = 5
            fret = 0

            [[shape]]
            points = [[1, 1], [2, 2], [3, 1]]
            stroke = "navy"
            stroke_width = 2.0
            "#,
        )
        .unwrap();
        assert_eq!(annotations.marker_count(), 2);
        assert_eq!(annotations.shape_count(), 1);

        let mut board = board();
        annotations.apply(&mut board).unwrap();

        assert_eq!(board.marker_count(), 2);
        assert_eq!(board.markers()[0].options().text(), "R");
        assert_eq!(
            board.markers()[0].options().color(),
            Color::new("crimson").unwrap()
        );
        assert_eq!(board.markers()[1].position(), FretPosition::new(5, 0));
        assert_eq!(board.scene().layer(RenderLayer::Markers).len(), 3);
    }

    #[test]
    fn test_empty_file() {
        let annotations = Annotations::parse("").unwrap();
        let mut board = board();
        annotations.apply(&mut board).unwrap();
        assert!(board.scene().layer(RenderLayer::Markers).is_empty());
    }

    #[test]
    fn test_bad_color_draws_nothing() {
        let annotations = Annotations::parse(
            r#"
            [[marker]]
            string = 1
            fret = 1

            [[shape]]
            points = [[1, 1], [2, 2]]
            fill = "plaid"
            "#,
        )
        .unwrap();

        let mut board = board();
        let err = annotations.apply(&mut board).unwrap_err();
        assert!(matches!(err, AnnotationError::Color(_)));
        assert!(board.scene().layer(RenderLayer::Markers).is_empty());
    }

    #[test]
    fn test_shape_stroke_style() {
        let annotations = Annotations::parse(
            r#"
            [[shape]]
            points = [[1, 1], [2, 3]]
            stroke_style = "dashed"

            [[shape]]
            points = [[3, 1], [4, 3]]
            stroke_style = "6,2"
            "#,
        )
        .unwrap();

        let mut board = board();
        annotations.apply(&mut board).unwrap();

        let svg = board.render_svg();
        assert!(svg.contains(r#"stroke-dasharray="5,5""#));
        assert!(svg.contains(r#"stroke-dasharray="6,2""#));
    }

    #[test]
    fn test_bad_stroke_style_draws_nothing() {
        let annotations = Annotations::parse(
            r#"
            [[marker]]
            string = 2
            fret = 2

            [[shape]]
            points = [[1, 1], [2, 2]]
            stroke_style = "wavy"
            "#,
        )
        .unwrap();

        let mut board = board();
        let err = annotations.apply(&mut board).unwrap_err();
        assert!(matches!(err, AnnotationError::StrokeStyle(_)));
        assert!(board.scene().layer(RenderLayer::Markers).is_empty());
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let err = Annotations::parse("[[marker]]\nstring = 1\n").unwrap_err();
        let AnnotationError::Parse { message, .. } = err else {
            panic!("expected a parse error");
        };
        assert!(message.contains("fret"));
    }
}
