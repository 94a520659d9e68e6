//! # Drawing Model
//!
//! A renderer-neutral display list for the plan and section views. Shapes
//! are in model millimetres with y growing downward; text sizes are in
//! screen pixels so labels stay readable at any zoom. The SVG writer
//! ([`crate::svg`]) and the GUI canvas both consume a [`Drawing`].
//!
//! ## Example
//!
//! ```rust
//! use foundation_core::config::FoundationConfig;
//! use foundation_core::drawing::{drawing_for, Layer};
//! use foundation_core::view::ViewMode;
//!
//! let drawing = drawing_for(ViewMode::Plan, &FoundationConfig::default());
//! let bars = drawing.elements.iter().filter(|e| e.layer == Layer::Rebar).count();
//! assert_eq!(bars, 50);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::FoundationConfig;
use crate::metrics::{plan_grid, FoundationMetrics};
use crate::section::SectionLayout;
use crate::view::ViewMode;

/// Text size for the drawing title (px)
pub const TITLE_SIZE: f32 = 16.0;
/// Text size for dimension labels (px)
pub const LABEL_SIZE: f32 = 12.0;
/// Text size for notes (px)
pub const NOTE_SIZE: f32 = 11.0;

/// Dimension lines sit this fraction of the larger extent outside the outline
const DIMENSION_OFFSET_RATIO: f64 = 0.06;
/// Tick half-length as a fraction of the larger extent
const TICK_RATIO: f64 = 0.012;

/// A point in model space (mm)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// RGB colour shared by every renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#rrggbb` form for SVG
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Components scaled to `0.0..=1.0`
    pub fn to_f32(&self) -> [f32; 3] {
        [
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        ]
    }
}

/// Style class of a drawing element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Concrete,
    Wall,
    Rebar,
    Stirrup,
    Dimension,
    Annotation,
}

impl Layer {
    pub fn stroke(&self) -> Rgb {
        match self {
            Layer::Concrete => Rgb(96, 96, 96),
            Layer::Wall => Rgb(64, 64, 64),
            Layer::Rebar => Rgb(192, 48, 40),
            Layer::Stirrup => Rgb(40, 96, 176),
            Layer::Dimension => Rgb(60, 60, 60),
            Layer::Annotation => Rgb(40, 40, 40),
        }
    }

    /// Fill for closed shapes; `None` draws outline only
    pub fn fill(&self) -> Option<Rgb> {
        match self {
            Layer::Concrete => Some(Rgb(222, 222, 216)),
            Layer::Wall => Some(Rgb(176, 176, 168)),
            Layer::Rebar => Some(Rgb(192, 48, 40)),
            _ => None,
        }
    }

    /// Stroke width in pixels
    pub fn stroke_px(&self) -> f32 {
        match self {
            Layer::Concrete | Layer::Wall => 1.5,
            Layer::Rebar => 1.5,
            Layer::Stirrup => 1.0,
            Layer::Dimension => 0.75,
            Layer::Annotation => 0.0,
        }
    }
}

/// Horizontal anchoring of a text label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Primitive shapes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum Shape {
    Line {
        from: Point,
        to: Point,
    },
    Rect {
        origin: Point,
        width: f64,
        height: f64,
    },
    Circle {
        center: Point,
        radius: f64,
    },
    Text {
        at: Point,
        content: String,
        size: f32,
        anchor: TextAnchor,
        /// Rotated -90 degrees (reads bottom to top)
        vertical: bool,
    },
}

/// A shape with its style layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub layer: Layer,
    pub shape: Shape,
}

/// One legend row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub layer: Layer,
    pub label: String,
}

/// Model-space bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    fn empty() -> Self {
        Self {
            min: Point::new(f64::MAX, f64::MAX),
            max: Point::new(f64::MIN, f64::MIN),
        }
    }

    fn expand(&mut self, p: Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }
}

/// Display list for one view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    pub view: ViewMode,
    pub title: String,
    pub elements: Vec<Element>,
    pub legend: Vec<LegendEntry>,
}

impl Drawing {
    fn new(view: ViewMode, title: impl Into<String>) -> Self {
        Self {
            view,
            title: title.into(),
            elements: Vec::new(),
            legend: Vec::new(),
        }
    }

    fn push(&mut self, layer: Layer, shape: Shape) {
        self.elements.push(Element { layer, shape });
    }

    fn line(&mut self, layer: Layer, from: Point, to: Point) {
        self.push(layer, Shape::Line { from, to });
    }

    fn rect(&mut self, layer: Layer, x: f64, y: f64, width: f64, height: f64) {
        self.push(
            layer,
            Shape::Rect {
                origin: Point::new(x, y),
                width,
                height,
            },
        );
    }

    fn text(
        &mut self,
        at: Point,
        content: impl Into<String>,
        size: f32,
        anchor: TextAnchor,
        vertical: bool,
    ) {
        self.push(
            Layer::Annotation,
            Shape::Text {
                at,
                content: content.into(),
                size,
                anchor,
                vertical,
            },
        );
    }

    fn legend(&mut self, layer: Layer, label: impl Into<String>) {
        self.legend.push(LegendEntry {
            layer,
            label: label.into(),
        });
    }

    /// Horizontal dimension above `y` spanning `x1..x2`
    fn dimension_horizontal(
        &mut self,
        x1: f64,
        x2: f64,
        y: f64,
        offset: f64,
        tick: f64,
        label: String,
    ) {
        let dim_y = y - offset;
        self.line(Layer::Dimension, Point::new(x1, y), Point::new(x1, dim_y - tick));
        self.line(Layer::Dimension, Point::new(x2, y), Point::new(x2, dim_y - tick));
        self.line(Layer::Dimension, Point::new(x1, dim_y), Point::new(x2, dim_y));
        for x in [x1, x2] {
            self.line(
                Layer::Dimension,
                Point::new(x - tick, dim_y + tick),
                Point::new(x + tick, dim_y - tick),
            );
        }
        self.text(
            Point::new((x1 + x2) / 2.0, dim_y - tick),
            label,
            LABEL_SIZE,
            TextAnchor::Middle,
            false,
        );
    }

    /// Vertical dimension left of `x` spanning `y1..y2`
    fn dimension_vertical(
        &mut self,
        y1: f64,
        y2: f64,
        x: f64,
        offset: f64,
        tick: f64,
        label: String,
    ) {
        let dim_x = x - offset;
        self.line(Layer::Dimension, Point::new(x, y1), Point::new(dim_x - tick, y1));
        self.line(Layer::Dimension, Point::new(x, y2), Point::new(dim_x - tick, y2));
        self.line(Layer::Dimension, Point::new(dim_x, y1), Point::new(dim_x, y2));
        for y in [y1, y2] {
            self.line(
                Layer::Dimension,
                Point::new(dim_x - tick, y + tick),
                Point::new(dim_x + tick, y - tick),
            );
        }
        self.text(
            Point::new(dim_x - tick, (y1 + y2) / 2.0),
            label,
            LABEL_SIZE,
            TextAnchor::Middle,
            true,
        );
    }

    /// Bounding box of all geometry, text anchors included
    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::empty();
        for element in &self.elements {
            match &element.shape {
                Shape::Line { from, to } => {
                    bounds.expand(*from);
                    bounds.expand(*to);
                }
                Shape::Rect { origin, width, height } => {
                    bounds.expand(*origin);
                    bounds.expand(Point::new(origin.x + width, origin.y + height));
                }
                Shape::Circle { center, radius } => {
                    bounds.expand(Point::new(center.x - radius, center.y - radius));
                    bounds.expand(Point::new(center.x + radius, center.y + radius));
                }
                Shape::Text { at, .. } => bounds.expand(*at),
            }
        }
        bounds
    }

    /// Number of elements on a layer
    pub fn count(&self, layer: Layer) -> usize {
        self.elements.iter().filter(|e| e.layer == layer).count()
    }
}

/// Drawing for the selected view
pub fn drawing_for(view: ViewMode, config: &FoundationConfig) -> Drawing {
    match view {
        ViewMode::Plan => plan_drawing(config),
        ViewMode::Section => section_drawing(config),
    }
}

/// Top-down plan: outline, perimeter walls, rebar grid and overall dimensions.
pub fn plan_drawing(config: &FoundationConfig) -> Drawing {
    let length = config.length();
    let width = config.width();
    let wall = config.wall_thickness();
    let extent = length.max(width);
    let offset = extent * DIMENSION_OFFSET_RATIO;
    let tick = extent * TICK_RATIO;

    let mut drawing = Drawing::new(
        ViewMode::Plan,
        format!("Plan View ({:.0} x {:.0} mm)", length, width),
    );

    // Walls first so the slab interior paints over the inner part
    drawing.rect(Layer::Wall, 0.0, 0.0, length, width);
    let inner_w = length - 2.0 * wall;
    let inner_h = width - 2.0 * wall;
    if inner_w > 0.0 && inner_h > 0.0 {
        drawing.rect(Layer::Concrete, wall, wall, inner_w, inner_h);
    }

    let grid = plan_grid(config);
    for bar in &grid {
        drawing.line(Layer::Rebar, Point::new(bar.x1, bar.y1), Point::new(bar.x2, bar.y2));
    }

    drawing.dimension_horizontal(0.0, length, 0.0, offset, tick, format!("{:.0}", length));
    drawing.dimension_vertical(0.0, width, 0.0, offset, tick, format!("{:.0}", width));

    let metrics = FoundationMetrics::from_grid(config, &grid);
    drawing.text(
        Point::new(0.0, width + offset),
        format!(
            "Rebar \u{00d8}{:.0} @ {:.0} c/c, cover {:.0} mm: {} bars, {} m",
            config.rebar_diameter(),
            config.rebar_spacing(),
            config.cover_concrete(),
            metrics.rebar_count,
            metrics.total_length_display(),
        ),
        NOTE_SIZE,
        TextAnchor::Start,
        false,
    );

    drawing.legend(Layer::Concrete, "Concrete slab");
    drawing.legend(Layer::Wall, format!("Perimeter wall t={:.0}", wall));
    drawing.legend(
        Layer::Rebar,
        format!("Rebar \u{00d8}{:.0} @ {:.0}", config.rebar_diameter(), config.rebar_spacing()),
    );
    drawing
}

/// Vertical slice across the width: walls, two bar layers and stirrups.
pub fn section_drawing(config: &FoundationConfig) -> Drawing {
    let layout = SectionLayout::from_config(config);
    let extent = layout.width.max(layout.depth);
    let offset = extent * DIMENSION_OFFSET_RATIO;
    let tick = extent * TICK_RATIO;

    let mut drawing = Drawing::new(
        ViewMode::Section,
        format!("Section View ({:.0} x {:.0} mm)", layout.width, layout.depth),
    );

    drawing.rect(Layer::Concrete, 0.0, 0.0, layout.width, layout.depth);
    for band in &layout.walls {
        drawing.rect(Layer::Wall, band.x, 0.0, band.width, layout.depth);
    }

    for stirrup in &layout.stirrups {
        drawing.line(
            Layer::Stirrup,
            Point::new(stirrup.x, stirrup.y_top),
            Point::new(stirrup.x, stirrup.y_bottom),
        );
    }

    for bar in &layout.bars {
        drawing.push(
            Layer::Rebar,
            Shape::Circle {
                center: Point::new(bar.x, bar.y),
                radius: bar.diameter / 2.0,
            },
        );
    }

    let width_label = format!("{:.0}", layout.width);
    let depth_label = format!("{:.0}", layout.depth);
    drawing.dimension_horizontal(0.0, layout.width, 0.0, offset, tick, width_label);
    drawing.dimension_vertical(0.0, layout.depth, 0.0, offset, tick, depth_label);

    drawing.text(
        Point::new(layout.width + tick, layout.cover),
        format!("cover {:.0}", layout.cover),
        NOTE_SIZE,
        TextAnchor::Start,
        false,
    );
    drawing.text(
        Point::new(0.0, layout.depth + offset),
        format!(
            "{} layers x {} bars \u{00d8}{:.0} @ {:.0}, stirrups @ {:.0}",
            layout.layer_count(),
            layout.bars_per_layer(),
            config.rebar_diameter(),
            config.rebar_spacing(),
            config.rebar_spacing() * crate::section::STIRRUP_SPACING_FACTOR,
        ),
        NOTE_SIZE,
        TextAnchor::Start,
        false,
    );

    drawing.legend(Layer::Concrete, "Concrete");
    drawing.legend(Layer::Wall, format!("Wall t={:.0}", config.wall_thickness()));
    drawing.legend(
        Layer::Rebar,
        format!("Main bars \u{00d8}{:.0} (top + bottom)", config.rebar_diameter()),
    );
    drawing.legend(Layer::Stirrup, "Stirrups");
    drawing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Parameter;

    #[test]
    fn test_plan_has_every_bar() {
        let config = FoundationConfig::default();
        let drawing = plan_drawing(&config);
        assert_eq!(drawing.view, ViewMode::Plan);
        assert_eq!(drawing.count(Layer::Rebar), plan_grid(&config).len());
        assert_eq!(drawing.legend.len(), 3);
    }

    #[test]
    fn test_plan_bounds_include_dimensions() {
        let config = FoundationConfig::default();
        let bounds = plan_drawing(&config).bounds();
        assert!(bounds.min.x < 0.0);
        assert!(bounds.min.y < 0.0);
        assert!(bounds.max.x >= config.length());
        assert!(bounds.max.y > config.width());
    }

    #[test]
    fn test_plan_without_interior() {
        // Walls of 1000 on a 1000 x 1000 plan leave no slab interior
        let config = FoundationConfig::default()
            .with_value(Parameter::Length, 1000.0)
            .with_value(Parameter::Width, 1000.0)
            .with_value(Parameter::WallThickness, 1000.0);
        let drawing = plan_drawing(&config);
        assert_eq!(drawing.count(Layer::Concrete), 0);
        assert_eq!(drawing.count(Layer::Wall), 1);
    }

    #[test]
    fn test_section_elements() {
        let config = FoundationConfig::default();
        let layout = SectionLayout::from_config(&config);
        let drawing = section_drawing(&config);
        assert_eq!(drawing.count(Layer::Rebar), layout.total_bar_count());
        assert_eq!(drawing.count(Layer::Stirrup), layout.stirrups.len());
        assert_eq!(drawing.count(Layer::Wall), 2);
        assert!(drawing.title.contains("4000 x 600"));
    }

    #[test]
    fn test_drawing_for_dispatch() {
        let config = FoundationConfig::default();
        assert_eq!(drawing_for(ViewMode::Plan, &config).view, ViewMode::Plan);
        assert_eq!(drawing_for(ViewMode::Section, &config).view, ViewMode::Section);
    }

    #[test]
    fn test_rgb_hex() {
        assert_eq!(Rgb(192, 48, 40).hex(), "#c03028");
        assert_eq!(Rgb(255, 0, 0).to_f32(), [1.0, 0.0, 0.0]);
    }
}
