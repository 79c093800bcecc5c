//! Drawable primitives and the retained scene they live in.
//!
//! The [`Scene`] is the drawing surface of a fretboard: a fixed stack of
//! named [`RenderLayer`]s holding [`Node`] primitives (rectangles, lines,
//! circles, text, paths and groups). Nodes are plain attribute records and
//! stay mutable after being attached; serialization to SVG happens only when
//! the scene is rendered.
//!
//! # Layer-Based Rendering
//!
//! Every layer renders to its own `<g data-layer="...">` group, emitted in
//! the scene's stacking order.
mod layer;
mod node;
mod scene;
mod stroke;
mod text;

pub use layer::{Layer, RenderLayer, SvgNode};
pub use node::{CircleNode, GroupNode, LineNode, Node, PathNode, RectNode, TextNode};
pub use scene::Scene;
pub use stroke::{StrokeCap, StrokeDefinition, StrokeStyle};
pub use text::TextDefinition;

/// Trait for scene elements that can be serialized to SVG.
pub trait Drawable: std::fmt::Debug {
    /// Renders this element to a single SVG node.
    fn render_to_svg(&self) -> SvgNode;
}
