//! The retained, layered scene of a fretboard.

use log::trace;
use svg::Document;

use crate::{
    color::Color,
    draw::{Layer, Node, RenderLayer, SvgNode, TextNode},
    geometry::Size,
};

/// A retained vector scene with one [`Layer`] per [`RenderLayer`].
///
/// Layers are created up front, so every layer is addressable even while
/// empty. Stacking follows [`RenderLayer::ALL`] until a layer is raised with
/// [`Scene::raise_to_top`].
///
/// # Examples
///
/// ```
/// # use fretboard_core::color::Color;
/// # use fretboard_core::draw::{CircleNode, Node, RenderLayer, Scene};
/// # use fretboard_core::geometry::{Point, Size};
/// let mut scene = Scene::new(Size::new(200.0, 100.0));
/// scene.attach(
///     RenderLayer::Markers,
///     Node::Circle(CircleNode::new(Point::new(50.0, 50.0), 10.0, Color::default())),
/// );
/// assert_eq!(scene.layer(RenderLayer::Markers).len(), 1);
///
/// let svg = scene.to_svg_string();
/// assert!(svg.contains(r#"data-layer="markers""#));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    size: Size,
    background: Option<Color>,
    layers: Vec<Layer>,
    stacking: Vec<RenderLayer>,
}

impl Scene {
    /// Creates an empty scene with every layer in default stacking order.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            background: None,
            layers: RenderLayer::ALL.into_iter().map(Layer::new).collect(),
            stacking: RenderLayer::ALL.to_vec(),
        }
    }

    /// Sets a page color painted behind every layer.
    pub fn set_background(&mut self, color: Option<Color>) {
        self.background = color;
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the layer of the given kind.
    pub fn layer(&self, kind: RenderLayer) -> &Layer {
        &self.layers[kind.index()]
    }

    /// Layers from bottom to top.
    pub fn stacking_order(&self) -> &[RenderLayer] {
        &self.stacking
    }

    /// Appends a node to a layer.
    pub fn attach(&mut self, kind: RenderLayer, node: Node) {
        trace!(layer = kind.name(), node = node.kind(); "Attaching node");
        self.layers[kind.index()].push(node);
    }

    /// Removes every node from a layer, returning how many were removed.
    pub fn clear_layer(&mut self, kind: RenderLayer) -> usize {
        self.layers[kind.index()].clear()
    }

    /// Moves a layer to the top of the stack.
    pub fn raise_to_top(&mut self, kind: RenderLayer) {
        self.stacking.retain(|layer| *layer != kind);
        self.stacking.push(kind);
    }

    /// Calls `visit` for every text node of a layer, groups included.
    pub fn for_each_text_mut(&mut self, kind: RenderLayer, mut visit: impl FnMut(&mut TextNode)) {
        for node in self.layers[kind.index()].children_mut() {
            node.visit_text_mut(&mut visit);
        }
    }

    /// Returns every text node of a layer, groups included.
    pub fn text_nodes(&self, kind: RenderLayer) -> Vec<&TextNode> {
        let mut out = Vec::new();
        for node in self.layer(kind).children() {
            node.collect_text(&mut out);
        }
        out
    }

    /// Renders every layer to an SVG group, bottom to top.
    pub fn render(&self) -> Vec<SvgNode> {
        self.stacking
            .iter()
            .map(|kind| self.layer(*kind).render())
            .collect()
    }

    /// Builds the complete SVG document.
    pub fn to_document(&self) -> Document {
        let width = self.size.width();
        let height = self.size.height();

        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", width)
            .set("height", height);

        if let Some(color) = &self.background {
            let page = svg::node::element::Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", width)
                .set("height", height)
                .set("fill", color.to_string());
            doc = doc.add(page);
        }

        self.render().into_iter().fold(doc, |doc, node| doc.add(node))
    }

    /// Serializes the scene to an SVG string.
    pub fn to_svg_string(&self) -> String {
        self.to_document().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        draw::{CircleNode, GroupNode, LineNode, StrokeDefinition, TextDefinition},
        geometry::Point,
    };

    fn marker(text: &str) -> Node {
        Node::Group(
            GroupNode::new()
                .add(Node::Circle(CircleNode::new(
                    Point::new(10.0, 10.0),
                    5.0,
                    Color::default(),
                )))
                .add(Node::Text(TextNode::new(
                    Point::new(10.0, 10.0),
                    text,
                    TextDefinition::new(),
                ))),
        )
    }

    #[test]
    fn test_new_scene_has_every_layer_empty() {
        let scene = Scene::new(Size::new(10.0, 10.0));
        for kind in RenderLayer::ALL {
            assert_eq!(scene.layer(kind).kind(), kind);
            assert!(scene.layer(kind).is_empty());
        }
        assert_eq!(scene.stacking_order(), &RenderLayer::ALL);
    }

    #[test]
    fn test_clear_layer_leaves_others() {
        let mut scene = Scene::new(Size::new(10.0, 10.0));
        scene.attach(
            RenderLayer::Strings,
            Node::Line(LineNode::new(
                Point::default(),
                Point::new(0.0, 10.0),
                StrokeDefinition::default(),
            )),
        );
        scene.attach(RenderLayer::Markers, marker("A"));
        scene.attach(RenderLayer::Markers, marker("B"));

        assert_eq!(scene.clear_layer(RenderLayer::Markers), 2);
        assert!(scene.layer(RenderLayer::Markers).is_empty());
        assert_eq!(scene.layer(RenderLayer::Strings).len(), 1);
        assert_eq!(scene.clear_layer(RenderLayer::Markers), 0);
    }

    #[test]
    fn test_raise_to_top() {
        let mut scene = Scene::new(Size::new(10.0, 10.0));
        scene.raise_to_top(RenderLayer::Markers);
        assert_eq!(scene.stacking_order().last(), Some(&RenderLayer::Markers));
        assert_eq!(scene.stacking_order().len(), RenderLayer::ALL.len());

        let svg = scene.to_svg_string();
        let labels = svg.find(r#"data-layer="labels""#).unwrap();
        let markers = svg.find(r#"data-layer="markers""#).unwrap();
        assert!(labels < markers);
    }

    #[test]
    fn test_text_nodes_are_found_inside_groups() {
        let mut scene = Scene::new(Size::new(10.0, 10.0));
        scene.attach(RenderLayer::Markers, marker("1"));
        scene.attach(RenderLayer::Markers, marker("2"));

        scene.for_each_text_mut(RenderLayer::Markers, |text| text.set_rotation(90.0));

        let texts = scene.text_nodes(RenderLayer::Markers);
        assert_eq!(texts.len(), 2);
        assert!(texts.iter().all(|text| text.rotation() == Some(90.0)));
        assert!(scene.text_nodes(RenderLayer::Labels).is_empty());
    }

    #[test]
    fn test_document_layers_in_order() {
        let mut scene = Scene::new(Size::new(300.0, 120.0));
        scene.set_background(Some(Color::white()));
        let svg = scene.to_svg_string();

        assert!(svg.contains("<svg"));
        assert!(svg.contains(r#"viewBox="0 0 300 120""#));

        let positions: Vec<usize> = RenderLayer::ALL
            .iter()
            .map(|kind| {
                svg.find(&format!(r#"data-layer="{}""#, kind.name()))
                    .unwrap()
            })
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
