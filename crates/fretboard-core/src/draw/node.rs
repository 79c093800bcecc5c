//! Retained scene primitives.
//!
//! Each primitive is a plain attribute record: geometry in drawing
//! coordinates plus the colors and strokes applied when it is serialized.
//! Nodes stay inspectable after they are attached to a [`Scene`](super::Scene),
//! which is what lets text rotation be rewritten in place.

use svg::{node::Text as SvgText, node::element as svg_element};

use crate::{
    apply_stroke,
    color::Color,
    draw::{Drawable, StrokeDefinition, SvgNode, TextDefinition},
    geometry::{Bounds, Point},
};

/// A drawable element of the scene.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Rect(RectNode),
    Line(LineNode),
    Circle(CircleNode),
    Text(TextNode),
    Path(PathNode),
    Group(GroupNode),
}

impl Node {
    /// Returns the primitive kind, matching the SVG element name.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Rect(_) => "rect",
            Self::Line(_) => "line",
            Self::Circle(_) => "circle",
            Self::Text(_) => "text",
            Self::Path(_) => "path",
            Self::Group(_) => "g",
        }
    }

    /// Calls `visit` for every text node in this subtree, in paint order.
    pub fn visit_text_mut(&mut self, visit: &mut impl FnMut(&mut TextNode)) {
        match self {
            Self::Text(text) => visit(text),
            Self::Group(group) => {
                for child in &mut group.children {
                    child.visit_text_mut(visit);
                }
            }
            _ => {}
        }
    }

    /// Collects every text node in this subtree, in paint order.
    pub fn collect_text<'a>(&'a self, out: &mut Vec<&'a TextNode>) {
        match self {
            Self::Text(text) => out.push(text),
            Self::Group(group) => {
                for child in &group.children {
                    child.collect_text(out);
                }
            }
            _ => {}
        }
    }
}

impl Drawable for Node {
    fn render_to_svg(&self) -> SvgNode {
        match self {
            Self::Rect(rect) => rect.render_to_svg(),
            Self::Line(line) => line.render_to_svg(),
            Self::Circle(circle) => circle.render_to_svg(),
            Self::Text(text) => text.render_to_svg(),
            Self::Path(path) => path.render_to_svg(),
            Self::Group(group) => group.render_to_svg(),
        }
    }
}

/// A filled rectangle with optionally rounded corners.
#[derive(Debug, Clone, PartialEq)]
pub struct RectNode {
    bounds: Bounds,
    fill: Color,
    corner_radius: f32,
}

impl RectNode {
    pub fn new(bounds: Bounds, fill: Color) -> Self {
        Self {
            bounds,
            fill,
            corner_radius: 0.0,
        }
    }

    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

impl Drawable for RectNode {
    fn render_to_svg(&self) -> SvgNode {
        let mut rect = svg_element::Rectangle::new()
            .set("x", self.bounds.min_x())
            .set("y", self.bounds.min_y())
            .set("width", self.bounds.width())
            .set("height", self.bounds.height())
            .set("fill", self.fill.to_string())
            .set("fill-opacity", self.fill.alpha());
        if self.corner_radius > 0.0 {
            rect = rect.set("rx", self.corner_radius);
        }
        Box::new(rect)
    }
}

/// A straight stroked line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineNode {
    from: Point,
    to: Point,
    stroke: StrokeDefinition,
}

impl LineNode {
    pub fn new(from: Point, to: Point, stroke: StrokeDefinition) -> Self {
        Self { from, to, stroke }
    }

    pub fn from(&self) -> Point {
        self.from
    }

    pub fn to(&self) -> Point {
        self.to
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }
}

impl Drawable for LineNode {
    fn render_to_svg(&self) -> SvgNode {
        let line = svg_element::Line::new()
            .set("x1", self.from.x())
            .set("y1", self.from.y())
            .set("x2", self.to.x())
            .set("y2", self.to.y());
        Box::new(apply_stroke!(line, &self.stroke))
    }
}

/// A filled circle with an optional outline.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleNode {
    center: Point,
    radius: f32,
    fill: Color,
    stroke: Option<StrokeDefinition>,
}

impl CircleNode {
    pub fn new(center: Point, radius: f32, fill: Color) -> Self {
        Self {
            center,
            radius,
            fill,
            stroke: None,
        }
    }

    pub fn with_stroke(mut self, stroke: Option<StrokeDefinition>) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn stroke(&self) -> Option<&StrokeDefinition> {
        self.stroke.as_ref()
    }
}

impl Drawable for CircleNode {
    fn render_to_svg(&self) -> SvgNode {
        let circle = svg_element::Circle::new()
            .set("cx", self.center.x())
            .set("cy", self.center.y())
            .set("r", self.radius)
            .set("fill", self.fill.to_string())
            .set("fill-opacity", self.fill.alpha());
        match &self.stroke {
            Some(stroke) => Box::new(apply_stroke!(circle, stroke)),
            None => Box::new(circle),
        }
    }
}

/// A single-line label centered on its anchor.
///
/// The rotation, when set, pivots about the anchor so every label turns in
/// place independently of the others.
#[derive(Debug, Clone, PartialEq)]
pub struct TextNode {
    anchor: Point,
    content: String,
    definition: TextDefinition,
    rotation: Option<f32>,
}

impl TextNode {
    pub fn new(anchor: Point, content: impl Into<String>, definition: TextDefinition) -> Self {
        Self {
            anchor,
            content: content.into(),
            definition,
            rotation: None,
        }
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn definition(&self) -> &TextDefinition {
        &self.definition
    }

    /// Returns the applied rotation in degrees, if any was set.
    pub fn rotation(&self) -> Option<f32> {
        self.rotation
    }

    /// Rotates the label by `degrees` about its own anchor.
    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = Some(degrees);
    }

    /// Returns the SVG transform for the current rotation.
    pub fn transform(&self) -> Option<String> {
        self.rotation.map(|degrees| {
            format!(
                "rotate({degrees} {} {})",
                self.anchor.x(),
                self.anchor.y()
            )
        })
    }
}

impl Drawable for TextNode {
    fn render_to_svg(&self) -> SvgNode {
        let mut text = svg_element::Text::new("")
            .set("x", self.anchor.x())
            .set("y", self.anchor.y())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size())
            .set("font-weight", self.definition.font_weight());

        if let Some(color) = self.definition.color() {
            text = text
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        if let Some(transform) = self.transform() {
            text = text.set("transform", transform);
        }

        Box::new(text.add(SvgText::new(self.content.as_str())))
    }
}

/// A polyline through drawing points, optionally closed.
#[derive(Debug, Clone, PartialEq)]
pub struct PathNode {
    points: Vec<Point>,
    closed: bool,
    stroke: StrokeDefinition,
    fill: Option<Color>,
    opacity: f32,
}

impl PathNode {
    /// Creates a closed path through `points`.
    pub fn closed(points: Vec<Point>, stroke: StrokeDefinition) -> Self {
        Self {
            points,
            closed: true,
            stroke,
            fill: None,
            opacity: 1.0,
        }
    }

    pub fn with_fill(mut self, fill: Option<Color>) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_closed(&self) -> bool {
        self.closed
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

    /// Number of drawn segments, counting the closing one.
    pub fn segment_count(&self) -> usize {
        let open_segments = self.points.len().saturating_sub(1);
        if self.closed && self.points.len() > 1 {
            open_segments + 1
        } else {
            open_segments
        }
    }

    /// SVG path data: `M` to the first point, `L` to each further point,
    /// `Z` when closed.
    pub fn path_data(&self) -> String {
        let mut commands: Vec<String> = self
            .points
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let command = if i == 0 { 'M' } else { 'L' };
                format!("{command} {} {}", point.x(), point.y())
            })
            .collect();
        if self.closed && !self.points.is_empty() {
            commands.push("Z".to_string());
        }
        commands.join(" ")
    }
}

impl Drawable for PathNode {
    fn render_to_svg(&self) -> SvgNode {
        let fill = self
            .fill
            .map(|color| color.to_string())
            .unwrap_or_else(|| "none".to_string());
        let path = svg_element::Path::new()
            .set("d", self.path_data())
            .set("fill", fill)
            .set("opacity", self.opacity);
        Box::new(apply_stroke!(path, &self.stroke))
    }
}

/// A group of nodes moved and removed together.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupNode {
    class: Option<String>,
    children: Vec<Node>,
}

impl GroupNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn add(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

impl Drawable for GroupNode {
    fn render_to_svg(&self) -> SvgNode {
        let mut group = svg_element::Group::new();
        if let Some(class) = &self.class {
            group = group.set("class", class.as_str());
        }
        let group = self
            .children
            .iter()
            .fold(group, |group, child| group.add(child.render_to_svg()));
        Box::new(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;

    fn triangle() -> PathNode {
        PathNode::closed(
            vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(5.0, 8.0),
            ],
            StrokeDefinition::default(),
        )
    }

    #[test]
    fn test_path_segments_include_closing_segment() {
        let path = triangle();
        assert_eq!(path.points().len(), 3);
        assert_eq!(path.segment_count(), 3);
        assert!(path.is_closed());
    }

    #[test]
    fn test_path_data_commands() {
        assert_eq!(triangle().path_data(), "M 0 0 L 10 0 L 5 8 Z");
        assert_eq!(
            PathNode::closed(Vec::new(), StrokeDefinition::default()).path_data(),
            ""
        );
        assert_eq!(
            PathNode::closed(vec![Point::new(1.5, 2.0)], StrokeDefinition::default())
                .path_data(),
            "M 1.5 2 Z"
        );
    }

    #[test]
    fn test_path_renders_fill_none_by_default() {
        let rendered = triangle().with_opacity(0.3).render_to_svg().to_string();
        assert!(rendered.contains(r#"fill="none""#));
        assert!(rendered.contains(r#"opacity="0.3""#));
        assert!(rendered.contains(r#"d="M 0 0 L 10 0 L 5 8 Z""#));
    }

    #[test]
    fn test_text_rotation_pivots_on_anchor() {
        let mut text = TextNode::new(Point::new(12.0, 34.0), "R", TextDefinition::new());
        assert!(text.transform().is_none());
        assert!(!text.render_to_svg().to_string().contains("transform"));

        text.set_rotation(90.0);
        assert_eq!(text.rotation(), Some(90.0));
        assert_eq!(text.transform().as_deref(), Some("rotate(90 12 34)"));
        assert!(text.render_to_svg().to_string().contains("rotate(90 12 34)"));
    }

    #[test]
    fn test_circle_stroke_optional() {
        let plain = CircleNode::new(Point::new(1.0, 2.0), 3.0, Color::default());
        assert!(plain.stroke().is_none());
        assert!(!plain.render_to_svg().to_string().contains("stroke="));

        let outlined = plain.with_stroke(Some(StrokeDefinition::new(Color::white(), 2.0)));
        assert!(outlined.render_to_svg().to_string().contains(r#"stroke="white""#));
    }

    #[test]
    fn test_group_text_visiting() {
        let mut group = Node::Group(
            GroupNode::new()
                .with_class("marker")
                .add(Node::Circle(CircleNode::new(
                    Point::default(),
                    4.0,
                    Color::default(),
                )))
                .add(Node::Text(TextNode::new(
                    Point::default(),
                    "1",
                    TextDefinition::new(),
                ))),
        );

        let mut visited = 0;
        group.visit_text_mut(&mut |text| {
            text.set_rotation(45.0);
            visited += 1;
        });
        assert_eq!(visited, 1);

        let mut texts = Vec::new();
        group.collect_text(&mut texts);
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].rotation(), Some(45.0));
        assert_eq!(group.kind(), "g");
    }

    #[test]
    fn test_rect_render() {
        let rect = RectNode::new(
            Bounds::new_from_top_left(Point::new(1.0, 2.0), Size::new(3.0, 4.0)),
            Color::new("wheat").unwrap(),
        )
        .with_corner_radius(2.0);
        let rendered = rect.render_to_svg().to_string();
        assert!(rendered.contains(r#"width="3""#));
        assert!(rendered.contains(r#"rx="2""#));
    }
}
