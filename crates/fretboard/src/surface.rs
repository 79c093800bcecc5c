//! The fretboard surface: a built board plus its mutation API.
//!
//! A [`Fretboard`] owns its [`Scene`] and its marker list. The static layers
//! (plate, inlays, frets, strings, labels) are built once at construction;
//! only the marker layer changes afterwards.

use std::{fs::File, io::Write, path::Path};

use log::{debug, info};

use fretboard_core::{
    draw::{
        CircleNode, GroupNode, LineNode, Node, PathNode, RectNode, RenderLayer, Scene, TextNode,
    },
    geometry::Point,
    instrument::InstrumentConfig,
    layout::{FretPosition, LayoutGeometry, LayoutMetrics, Orientation, compute_geometry},
};

use crate::{
    FretboardError,
    config::AppConfig,
    marker::{Marker, MarkerOptions, ShapeOptions},
    style::BoardStyle,
    viewport::Viewport,
};

/// Options applied when a board is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurfaceOptions {
    metrics: LayoutMetrics,
    style: BoardStyle,
    markers_on_top: bool,
}

impl SurfaceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metrics(mut self, metrics: LayoutMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn with_style(mut self, style: BoardStyle) -> Self {
        self.style = style;
        self
    }

    /// Stack the marker layer above the fret-number labels.
    pub fn with_markers_on_top(mut self, markers_on_top: bool) -> Self {
        self.markers_on_top = markers_on_top;
        self
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    pub fn style(&self) -> &BoardStyle {
        &self.style
    }

    pub fn markers_on_top(&self) -> bool {
        self.markers_on_top
    }
}

/// A rendered fretboard and the handle for annotating it.
///
/// Positions are never validated: out-of-range strings or frets simply land
/// off the board.
///
/// # Examples
///
/// ```
/// # use fretboard::{Fretboard, marker::MarkerOptions, viewport::FixedViewport};
/// # use fretboard_core::instrument::InstrumentConfig;
/// let mut board = Fretboard::create(&FixedViewport(1024.0), InstrumentConfig::default());
/// board.set_marker((1, 3), MarkerOptions::new().with_text("G"));
/// assert_eq!(board.marker_count(), 1);
///
/// let svg = board.render_svg();
/// assert!(svg.contains(r#"data-layer="markers""#));
/// ```
#[derive(Debug, Clone)]
pub struct Fretboard {
    config: InstrumentConfig,
    geometry: LayoutGeometry,
    style: BoardStyle,
    scene: Scene,
    markers: Vec<Marker>,
}

impl Fretboard {
    /// Builds a board with default options.
    ///
    /// The viewport width is read once here to choose the orientation.
    pub fn create(viewport: &impl Viewport, config: InstrumentConfig) -> Self {
        Self::with_options(viewport, config, SurfaceOptions::default())
    }

    /// Builds a board with explicit metrics, style and stacking.
    pub fn with_options(
        viewport: &impl Viewport,
        config: InstrumentConfig,
        options: SurfaceOptions,
    ) -> Self {
        let width = viewport.width();
        let orientation = Orientation::from_viewport_width(width);
        let geometry = compute_geometry(&config, orientation, options.metrics);

        info!(
            viewport_width = width,
            orientation = orientation.to_string(),
            strings = config.num_strings(),
            frets = config.fret_count();
            "Building fretboard"
        );

        let mut scene = Scene::new(geometry.canvas_size());
        scene.set_background(options.style.page_color);
        if options.markers_on_top {
            scene.raise_to_top(RenderLayer::Markers);
        }

        let mut board = Self {
            config,
            geometry,
            style: options.style,
            scene,
            markers: Vec::new(),
        };
        board.build_static_layers();
        board
    }

    /// Builds a board from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FretboardError::Config`] if a configured color is invalid.
    pub fn from_app_config(
        viewport: &impl Viewport,
        config: &AppConfig,
    ) -> Result<Self, FretboardError> {
        let options = config.surface_options()?;
        Ok(Self::with_options(
            viewport,
            config.instrument().clone(),
            options,
        ))
    }

    /// Places a marker dot at a logical position.
    ///
    /// The marker is drawn as a group of a filled circle, an optional
    /// outline and an optional centered label, and is recorded in
    /// [`Fretboard::markers`]. Repeated positions are drawn again.
    pub fn set_marker(&mut self, position: impl Into<FretPosition>, options: MarkerOptions) {
        let position = position.into();
        let center = self.geometry.position_for(position);

        debug!(
            string = position.string(),
            fret = position.fret(),
            x = center.x(),
            y = center.y();
            "Setting marker"
        );

        let circle = CircleNode::new(center, self.style.marker_radius, options.color())
            .with_stroke(self.style.marker_border(options.border_color()));
        let mut group = GroupNode::new()
            .with_class("marker")
            .add(Node::Circle(circle));

        if options.has_text() {
            let definition = self
                .style
                .marker_text
                .clone()
                .with_color(options.text_color());
            group = group.add(Node::Text(TextNode::new(center, options.text(), definition)));
        }

        self.scene.attach(RenderLayer::Markers, Node::Group(group));
        self.markers.push(Marker::new(position, options));
    }

    /// Removes every marker and shape. Other layers are untouched.
    pub fn clear_markers(&mut self) {
        let removed = self.scene.clear_layer(RenderLayer::Markers);
        self.markers.clear();
        debug!(removed; "Cleared marker layer");
    }

    /// Draws a closed outline through logical positions.
    ///
    /// Fewer than two points draw nothing. Shapes share the marker layer but
    /// are not recorded as markers.
    pub fn add_shape(&mut self, points: &[FretPosition], options: ShapeOptions) {
        if points.len() < 2 {
            debug!(points = points.len(); "Ignoring shape with fewer than two points");
            return;
        }

        let drawn: Vec<Point> = points
            .iter()
            .map(|position| self.geometry.position_for(*position))
            .collect();

        debug!(points = drawn.len(); "Adding shape");

        let path = PathNode::closed(drawn, options.stroke().clone())
            .with_fill(options.fill())
            .with_opacity(options.opacity());
        self.scene.attach(RenderLayer::Markers, Node::Path(path));
    }

    /// Markers in the order they were set.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn geometry(&self) -> &LayoutGeometry {
        &self.geometry
    }

    pub fn orientation(&self) -> Orientation {
        self.geometry.orientation()
    }

    pub fn config(&self) -> &InstrumentConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable access to the scene, used to restyle nodes in place.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Serializes the board to an SVG string.
    pub fn render_svg(&self) -> String {
        self.scene.to_svg_string()
    }

    /// Writes the board as an SVG file.
    ///
    /// # Errors
    ///
    /// Returns [`FretboardError::Io`] if the file cannot be written.
    pub fn write_svg(&self, path: impl AsRef<Path>) -> Result<(), FretboardError> {
        let path = path.as_ref();
        let mut file = File::create(path)?;
        write!(file, "{}", self.render_svg())?;
        debug!(path = path.display().to_string(); "Wrote SVG file");
        Ok(())
    }

    fn build_static_layers(&mut self) {
        self.build_background();
        self.build_inlays();
        self.build_frets();
        self.build_strings();
        self.build_labels();
    }

    fn build_background(&mut self) {
        let plate = RectNode::new(self.geometry.board_bounds(), self.style.board_color)
            .with_corner_radius(self.style.board_corner_radius);
        self.scene.attach(RenderLayer::Background, Node::Rect(plate));
    }

    fn build_inlays(&mut self) {
        let frets: Vec<u32> = self.geometry.inlay_frets().collect();
        for fret in frets {
            for center in self.geometry.inlay_centers(fret) {
                let dot = CircleNode::new(center, self.style.inlay_radius, self.style.inlay_color);
                self.scene.attach(RenderLayer::Inlays, Node::Circle(dot));
            }
        }
    }

    fn build_frets(&mut self) {
        let (from, to) = self.geometry.nut_line();
        let nut = LineNode::new(
            from,
            to,
            self.style.nut_stroke(self.geometry.metrics().nut_thickness),
        );
        self.scene.attach(RenderLayer::Frets, Node::Line(nut));

        for fret in 1..=self.geometry.fret_count() {
            let (from, to) = self.geometry.fret_wire(fret);
            let wire = LineNode::new(from, to, self.style.fret_stroke());
            self.scene.attach(RenderLayer::Frets, Node::Line(wire));
        }
    }

    fn build_strings(&mut self) {
        for index in 0..self.geometry.num_strings() {
            let (from, to) = self.geometry.string_line(index);
            let stroke = self.style.string_stroke(self.geometry.string_width(index));
            self.scene
                .attach(RenderLayer::Strings, Node::Line(LineNode::new(from, to, stroke)));
        }
    }

    fn build_labels(&mut self) {
        let frets: Vec<u32> = self.geometry.inlay_frets().collect();
        for fret in frets {
            let anchor = self.geometry.fret_label_anchor(fret);
            let label = TextNode::new(anchor, fret.to_string(), self.style.label_text.clone());
            self.scene.attach(RenderLayer::Labels, Node::Text(label));
        }
    }
}
