//! Text style definitions for labels.
//!
//! A [`TextDefinition`] is shared by every label of the same kind (fret
//! numbers, marker captions). The text itself and its anchor live on the
//! [`TextNode`](super::TextNode) that uses the definition.

use crate::color::Color;

/// Defines the visual style for text elements.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"sans-serif"` |
/// | Font size | `12` |
/// | Font weight | `"normal"` |
/// | Text color | `None` (SVG default, typically black) |
///
/// # Examples
///
/// ```
/// # use fretboard_core::draw::TextDefinition;
/// # use fretboard_core::color::Color;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut style = TextDefinition::new();
/// style.set_font_size(14);
/// style.set_color(Some(Color::new("white")?));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    font_weight: String,
    color: Option<Color>,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in points.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the font weight (e.g., "normal", "bold").
    pub fn set_font_weight(&mut self, weight: &str) {
        self.font_weight = weight.to_string();
    }

    /// Sets the text color. `None` leaves the SVG default.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// Returns a copy with the given color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_weight(&self) -> &str {
        &self.font_weight
    }

    /// Returns a reference to the text color, if set.
    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 12,
            font_weight: "normal".to_string(),
            color: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_definition_defaults() {
        let def = TextDefinition::new();
        assert_eq!(def.font_family(), "sans-serif");
        assert_eq!(def.font_size(), 12);
        assert_eq!(def.font_weight(), "normal");
        assert!(def.color().is_none());
    }

    #[test]
    fn test_text_definition_setters() {
        let mut def = TextDefinition::new();
        def.set_font_size(16);
        def.set_font_weight("bold");
        def.set_color(Some(Color::white()));

        assert_eq!(def.font_size(), 16);
        assert_eq!(def.font_weight(), "bold");
        assert_eq!(def.color(), Some(&Color::white()));

        def.set_color(None);
        assert!(def.color().is_none());
    }

    #[test]
    fn test_text_definition_with_color() {
        let def = TextDefinition::new().with_color(Color::default());
        assert_eq!(def.color().map(ToString::to_string).as_deref(), Some("black"));
    }
}
