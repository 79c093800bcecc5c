//! Layers of the fretboard scene.
//!
//! Every drawn element belongs to exactly one [`RenderLayer`]. Layers are
//! stacked bottom to top in variant declaration order unless the scene
//! restacks one of them (see [`Scene::raise_to_top`](super::Scene::raise_to_top)).
//!
//! | Layer | Contents | Mutated after build |
//! |-------|----------|---------------------|
//! | `Background` | board plate | no |
//! | `Inlays` | position dots | no |
//! | `Frets` | nut and fret wires | no |
//! | `Strings` | strings | no |
//! | `Markers` | markers and shapes | yes |
//! | `Labels` | fret numbers | no |

use svg::node::element as svg_element;

use crate::draw::{Drawable, Node};

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Defines the rendering layers of a fretboard.
///
/// The `Ord` derive uses declaration order, so the first variant renders
/// first (bottom) and the last variant renders last (top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Board plate - renders first
    Background,
    /// Inlay dots
    Inlays,
    /// Nut and fret wires
    Frets,
    /// Strings
    Strings,
    /// Markers and shapes added by the caller
    Markers,
    /// Fret-number labels
    Labels,
}

impl RenderLayer {
    /// All layers in their default stacking order.
    pub const ALL: [RenderLayer; 6] = [
        Self::Background,
        Self::Inlays,
        Self::Frets,
        Self::Strings,
        Self::Markers,
        Self::Labels,
    ];

    /// Returns the logical name of this layer, used as its SVG `data-layer`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Inlays => "inlays",
            Self::Frets => "frets",
            Self::Strings => "strings",
            Self::Markers => "markers",
            Self::Labels => "labels",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// An ordered collection of nodes drawn together.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    kind: RenderLayer,
    children: Vec<Node>,
}

impl Layer {
    pub(crate) fn new(kind: RenderLayer) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    pub fn kind(&self) -> RenderLayer {
        self.kind
    }

    /// Returns the nodes of this layer in paint order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn push(&mut self, node: Node) {
        self.children.push(node);
    }

    pub(crate) fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }

    /// Removes every node, returning how many were removed.
    pub(crate) fn clear(&mut self) -> usize {
        let removed = self.children.len();
        self.children.clear();
        removed
    }

    /// Renders the layer as an SVG `<g>` tagged with its `data-layer` name.
    ///
    /// Empty layers still produce a group so the output stays addressable by
    /// layer name.
    pub fn render(&self) -> SvgNode {
        let group = self
            .children
            .iter()
            .fold(
                svg_element::Group::new().set("data-layer", self.kind.name()),
                |group, node| group.add(node.render_to_svg()),
            );
        Box::new(group)
    }
}
