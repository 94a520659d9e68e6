//! # Section View Geometry
//!
//! A vertical slice across the foundation's width. The horizontal axis
//! runs `0..width`, the vertical axis runs `0..depth` downward from the
//! top face, all in millimetres.
//!
//! ## Layout
//!
//! ```text
//!  0                                      width
//!  +------+-------------------------+------+  0
//!  | wall |  o   o   o   o   o   o  | wall |  cover         (top layer)
//!  |      |  |       |       |      |      |  stirrups at 2 x spacing
//!  |      |  o   o   o   o   o   o  |      |  depth - cover (bottom layer)
//!  +------+-------------------------+------+  depth
//! ```
//!
//! Bar positions across the width come from [`bar_positions`], the same
//! helper the plan grid uses, so the per-layer count always equals the
//! plan's vertical bar count for the same width.

use serde::{Deserialize, Serialize};

use crate::config::FoundationConfig;
use crate::rebar::bar_positions;

/// Main bar layers shown in section
pub const SECTION_LAYERS: usize = 2;

/// Stirrups are placed at this multiple of the main bar spacing
pub const STIRRUP_SPACING_FACTOR: f64 = 2.0;

/// Which main bar layer a bar belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarLayer {
    Top,
    Bottom,
}

/// A main bar cut by the section plane, drawn as a circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionBar {
    pub layer: BarLayer,
    pub x: f64,
    pub y: f64,
    pub diameter: f64,
}

/// A vertical link between the top and bottom layers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stirrup {
    pub x: f64,
    pub y_top: f64,
    pub y_bottom: f64,
}

/// Axis-aligned band, used for the perimeter walls
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub x: f64,
    pub width: f64,
}

/// Complete section geometry for one configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionLayout {
    pub width: f64,
    pub depth: f64,
    pub cover: f64,
    pub walls: [Band; 2],
    pub bars: Vec<SectionBar>,
    pub stirrups: Vec<Stirrup>,
}

impl SectionLayout {
    /// Build the section across `config.width()`
    pub fn from_config(config: &FoundationConfig) -> Self {
        let width = config.width();
        let depth = config.depth();
        let cover = config.cover_concrete();
        let spacing = config.rebar_spacing();

        let wall = config.wall_thickness().min(width / 2.0);
        let walls = [
            Band { x: 0.0, width: wall },
            Band {
                x: width - wall,
                width: wall,
            },
        ];

        let y_top = cover;
        let y_bottom = depth - cover;
        let positions = bar_positions(cover, width - cover, spacing);

        // Both layers need room inside the depth
        let bars = if y_top <= y_bottom {
            [(BarLayer::Top, y_top), (BarLayer::Bottom, y_bottom)]
                .iter()
                .flat_map(|&(layer, y)| {
                    positions.iter().map(move |&x| SectionBar {
                        layer,
                        x,
                        y,
                        diameter: config.rebar_diameter(),
                    })
                })
                .collect()
        } else {
            Vec::new()
        };

        let stirrups = if y_top < y_bottom {
            bar_positions(cover, width - cover, spacing * STIRRUP_SPACING_FACTOR)
                .into_iter()
                .map(|x| Stirrup { x, y_top, y_bottom })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            width,
            depth,
            cover,
            walls,
            bars,
            stirrups,
        }
    }

    /// Number of main bar layers drawn
    pub fn layer_count(&self) -> usize {
        SECTION_LAYERS
    }

    /// Bars in one layer
    pub fn bars_per_layer(&self) -> usize {
        self.bars.iter().filter(|b| b.layer == BarLayer::Top).count()
    }

    /// Bars across all layers
    pub fn total_bar_count(&self) -> usize {
        self.bars.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Parameter;
    use crate::metrics::FoundationMetrics;

    #[test]
    fn test_default_section() {
        let config = FoundationConfig::default();
        let section = SectionLayout::from_config(&config);

        // Width 4000, cover 50, spacing 200: floor(3900 / 200) + 1 = 20 per layer
        assert_eq!(section.bars_per_layer(), 20);
        assert_eq!(section.total_bar_count(), 40);
        assert_eq!(section.layer_count(), 2);

        // Stirrups at 400: floor(3900 / 400) + 1 = 10
        assert_eq!(section.stirrups.len(), 10);
        assert!(section.stirrups.iter().all(|s| s.y_top == 50.0 && s.y_bottom == 550.0));
    }

    #[test]
    fn test_layers_at_cover() {
        let config = FoundationConfig::default().with_value(Parameter::Depth, 800.0);
        let section = SectionLayout::from_config(&config);
        for bar in &section.bars {
            match bar.layer {
                BarLayer::Top => assert_eq!(bar.y, 50.0),
                BarLayer::Bottom => assert_eq!(bar.y, 750.0),
            }
            assert_eq!(bar.diameter, 16.0);
        }
    }

    #[test]
    fn test_layer_count_matches_plan_grid() {
        // Per layer, the section cuts the plan bars that run along Y when the
        // plan width equals the section width.
        let config = FoundationConfig::default()
            .with_value(Parameter::Length, 4000.0)
            .with_value(Parameter::Width, 4000.0)
            .with_value(Parameter::RebarSpacing, 175.0);
        let section = SectionLayout::from_config(&config);
        let metrics = FoundationMetrics::from_config(&config);
        assert_eq!(section.bars_per_layer(), metrics.vertical_count);
    }

    #[test]
    fn test_walls_never_overlap() {
        let config = FoundationConfig::default()
            .with_value(Parameter::Width, 1000.0)
            .with_value(Parameter::WallThickness, 1000.0);
        let section = SectionLayout::from_config(&config);
        assert_eq!(section.walls[0].width, 500.0);
        assert_eq!(section.walls[1].x, 500.0);
    }

    #[test]
    fn test_stirrups_coarser_than_bars() {
        let section = SectionLayout::from_config(&FoundationConfig::default());
        assert!(section.stirrups.len() < section.bars_per_layer());
        let xs: Vec<f64> = section.stirrups.iter().map(|s| s.x).collect();
        assert!(xs.windows(2).all(|w| (w[1] - w[0] - 400.0).abs() < 1e-9));
    }
}
