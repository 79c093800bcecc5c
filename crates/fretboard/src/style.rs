//! Visual style of the static board and of markers.

use fretboard_core::{
    color::Color,
    draw::{StrokeCap, StrokeDefinition, TextDefinition},
};

/// Colors, radii and fonts used when building a board.
///
/// Geometry (spacing, padding, string taper) lives in
/// [`LayoutMetrics`](fretboard_core::layout::LayoutMetrics); this type only
/// controls how the computed shapes are painted.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardStyle {
    /// Page color behind the board, `None` for transparent.
    pub page_color: Option<Color>,
    pub board_color: Color,
    pub board_corner_radius: f32,
    pub nut_color: Color,
    pub fret_color: Color,
    pub fret_width: f32,
    pub string_color: Color,
    pub inlay_color: Color,
    pub inlay_radius: f32,
    pub label_text: TextDefinition,
    pub marker_radius: f32,
    pub marker_border_width: f32,
    pub marker_text: TextDefinition,
}

impl BoardStyle {
    pub(crate) fn fret_stroke(&self) -> StrokeDefinition {
        StrokeDefinition::new(self.fret_color, self.fret_width)
    }

    pub(crate) fn nut_stroke(&self, thickness: f32) -> StrokeDefinition {
        StrokeDefinition::new(self.nut_color, thickness).with_cap(StrokeCap::Square)
    }

    pub(crate) fn string_stroke(&self, width: f32) -> StrokeDefinition {
        StrokeDefinition::new(self.string_color, width).with_cap(StrokeCap::Round)
    }

    pub(crate) fn marker_border(&self, color: Option<Color>) -> Option<StrokeDefinition> {
        color.map(|color| StrokeDefinition::new(color, self.marker_border_width))
    }
}

impl Default for BoardStyle {
    fn default() -> Self {
        let mut label_text = TextDefinition::new();
        label_text.set_font_size(14);
        label_text.set_color(Color::new("#555555").ok());

        let mut marker_text = TextDefinition::new();
        marker_text.set_font_size(13);
        marker_text.set_font_weight("bold");

        Self {
            page_color: None,
            board_color: Color::new("#deb887").unwrap_or_default(),
            board_corner_radius: 4.0,
            nut_color: Color::new("#f5f5dc").unwrap_or_default(),
            fret_color: Color::new("#a0a0a0").unwrap_or_default(),
            fret_width: 2.0,
            string_color: Color::new("#6b6b6b").unwrap_or_default(),
            inlay_color: Color::new("#fffaf0").unwrap_or_default(),
            inlay_radius: 7.0,
            label_text,
            marker_radius: 12.0,
            marker_border_width: 2.0,
            marker_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_colors_parse() {
        let style = BoardStyle::default();
        assert_ne!(style.board_color, Color::default());
        assert_ne!(style.fret_color, Color::default());
        assert!(style.page_color.is_none());
        assert!(style.label_text.color().is_some());
    }

    #[test]
    fn test_strokes() {
        let style = BoardStyle::default();
        assert_eq!(style.string_stroke(2.5).width(), 2.5);
        assert_eq!(style.string_stroke(2.5).cap(), StrokeCap::Round);
        assert_eq!(style.nut_stroke(6.0).width(), 6.0);
        assert_eq!(style.fret_stroke().width(), style.fret_width);
        assert!(style.marker_border(None).is_none());
        assert_eq!(
            style.marker_border(Some(Color::white())).map(|s| s.width()),
            Some(style.marker_border_width)
        );
    }
}
