//! # Derived Metrics
//!
//! Aggregate quantities shown next to the drawings: concrete volume,
//! rebar count and total rebar length. Each is a pure function; nothing
//! here is cached.
//!
//! Total length covers a single layer of the plan grid. Designs with more
//! than one layer multiply externally (see [`crate::section::SectionLayout::layer_count`]).
//!
//! ## Example
//!
//! ```rust
//! use foundation_core::metrics::{rebar_count, total_rebar_length};
//! use foundation_core::rebar::generate_grid;
//!
//! let grid = generate_grid(1000.0, 1000.0, 200.0, 50.0);
//! assert_eq!(rebar_count(&grid), 10);
//! assert_eq!(total_rebar_length(&grid).0, 9.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::FoundationConfig;
use crate::rebar::{generate_grid, Rebar, RebarKind};
use crate::units::{CubicMeters, CubicMillimeters, Meters, Millimeters};

/// Concrete volume `length x width x depth / 1e9` in cubic metres.
pub fn concrete_volume(length: f64, width: f64, depth: f64) -> CubicMeters {
    CubicMillimeters(length * width * depth).into()
}

/// Number of bars in the grid
pub fn rebar_count(grid: &[Rebar]) -> usize {
    grid.len()
}

/// Sum of bar lengths in metres
pub fn total_rebar_length(grid: &[Rebar]) -> Meters {
    let total_mm = grid.iter().fold(0.0, |acc, bar| acc + bar.length().0);
    Millimeters(total_mm).into()
}

/// Round half away from zero to `places` decimals
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Plan grid for a configuration: X is `length`, Y is `width`.
pub fn plan_grid(config: &FoundationConfig) -> Vec<Rebar> {
    generate_grid(
        config.length(),
        config.width(),
        config.rebar_spacing(),
        config.cover_concrete(),
    )
}

/// All display metrics for one configuration.
///
/// Values are unrounded; use the `*_display` helpers for UI text.
///
/// ## JSON Example
///
/// ```json
/// {
///   "volume_m3": 14.4,
///   "rebar_count": 50,
///   "horizontal_count": 20,
///   "vertical_count": 30,
///   "total_rebar_length_m": 235.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoundationMetrics {
    pub volume_m3: CubicMeters,
    pub rebar_count: usize,
    pub horizontal_count: usize,
    pub vertical_count: usize,
    pub total_rebar_length_m: Meters,
}

impl FoundationMetrics {
    /// Compute metrics over a freshly generated plan grid
    pub fn from_config(config: &FoundationConfig) -> Self {
        Self::from_grid(config, &plan_grid(config))
    }

    /// Compute metrics for a grid that was already generated from `config`
    pub fn from_grid(config: &FoundationConfig, grid: &[Rebar]) -> Self {
        let horizontal_count = grid.iter().filter(|r| r.kind == RebarKind::Horizontal).count();
        Self {
            volume_m3: concrete_volume(config.length(), config.width(), config.depth()),
            rebar_count: rebar_count(grid),
            horizontal_count,
            vertical_count: grid.len() - horizontal_count,
            total_rebar_length_m: total_rebar_length(grid),
        }
    }

    /// Volume rounded to 2 decimals, e.g. "14.40"
    pub fn volume_display(&self) -> String {
        format!("{:.2}", round_to(self.volume_m3.0, 2))
    }

    /// Total length rounded to 1 decimal, e.g. "9.0"
    pub fn total_length_display(&self) -> String {
        format!("{:.1}", round_to(self.total_rebar_length_m.0, 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Parameter;

    #[test]
    fn test_volume() {
        let v = concrete_volume(6000.0, 4000.0, 600.0);
        assert!((v.0 - 14.4).abs() < 1e-12);
    }

    #[test]
    fn test_volume_monotonic() {
        let base = concrete_volume(5000.0, 3000.0, 500.0).0;
        assert!(concrete_volume(5100.0, 3000.0, 500.0).0 > base);
        assert!(concrete_volume(5000.0, 3100.0, 500.0).0 > base);
        assert!(concrete_volume(5000.0, 3000.0, 550.0).0 > base);
    }

    #[test]
    fn test_scenario_metrics() {
        let grid = generate_grid(1000.0, 1000.0, 200.0, 50.0);
        assert_eq!(rebar_count(&grid), 10);
        assert!((total_rebar_length(&grid).0 - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_grid() {
        assert_eq!(rebar_count(&[]), 0);
        assert_eq!(total_rebar_length(&[]).0, 0.0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(14.404, 2), 14.4);
        assert_eq!(round_to(14.405001, 2), 14.41);
        assert_eq!(round_to(285.96, 1), 286.0);
        assert_eq!(round_to(-2.25, 0), -2.0);
    }

    #[test]
    fn test_metrics_from_config() {
        let config = FoundationConfig::default();
        let metrics = FoundationMetrics::from_config(&config);

        // 6000 x 4000 at 200 spacing with 50 cover:
        // horizontal: floor(3900 / 200) + 1 = 20, vertical: floor(5900 / 200) + 1 = 30
        assert_eq!(metrics.horizontal_count, 20);
        assert_eq!(metrics.vertical_count, 30);
        assert_eq!(metrics.rebar_count, 50);

        // 20 x 5.9 m + 30 x 3.9 m = 235 m
        assert!((metrics.total_rebar_length_m.0 - 235.0).abs() < 1e-9);
        assert_eq!(metrics.total_length_display(), "235.0");
        assert_eq!(metrics.volume_display(), "14.40");
    }

    #[test]
    fn test_metrics_track_config_changes() {
        let config = FoundationConfig::default();
        let wider = config.with_value(Parameter::Width, 8000.0);
        let a = FoundationMetrics::from_config(&config);
        let b = FoundationMetrics::from_config(&wider);
        assert!(b.volume_m3 > a.volume_m3);
        assert!(b.horizontal_count > a.horizontal_count);
        assert_eq!(b.vertical_count, a.vertical_count);
    }

    #[test]
    fn test_serialization() {
        let metrics = FoundationMetrics::from_config(&FoundationConfig::default());
        let json = serde_json::to_string(&metrics).unwrap();
        let roundtrip: FoundationMetrics = serde_json::from_str(&json).unwrap();
        assert_eq!(metrics, roundtrip);
    }
}
