//! # Rebar Grid Generator
//!
//! Places straight reinforcing bars on a rectangular plan area, keeping
//! `cover` clear of every edge and stepping by `spacing`.
//!
//! ## Position Policy
//!
//! Bar positions are produced by repeated addition (`pos += spacing`),
//! not by `cover + k * spacing`. For spacings that are not exactly
//! representable the last position can drift by rounding error, which can
//! change the count by one at an exact boundary. Both the plan grid and
//! the section view use [`bar_positions`], so they always agree.
//!
//! ## Example
//!
//! ```rust
//! use foundation_core::rebar::{generate_grid, RebarKind};
//!
//! let grid = generate_grid(1000.0, 1000.0, 200.0, 50.0);
//! assert_eq!(grid.len(), 10);
//! assert_eq!(grid[0].kind, RebarKind::Horizontal);
//! assert_eq!(grid[5].kind, RebarKind::Vertical);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::units::Millimeters;

/// Orientation of a bar in plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RebarKind {
    /// Runs along X at a fixed Y
    Horizontal,
    /// Runs along Y at a fixed X
    Vertical,
}

impl RebarKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            RebarKind::Horizontal => "Horizontal",
            RebarKind::Vertical => "Vertical",
        }
    }
}

impl std::fmt::Display for RebarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A straight bar from `(x1, y1)` to `(x2, y2)` in plan millimetres.
///
/// ## JSON Example
///
/// ```json
/// { "kind": "horizontal", "x1": 50.0, "y1": 250.0, "x2": 950.0, "y2": 250.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rebar {
    pub kind: RebarKind,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Rebar {
    /// Euclidean length between the endpoints
    pub fn length(&self) -> Millimeters {
        let dx = self.x2 - self.x1;
        let dy = self.y2 - self.y1;
        Millimeters((dx * dx + dy * dy).sqrt())
    }
}

/// Positions from `start` while `pos <= end`, stepping by repeated addition.
///
/// Empty when `start > end`, or when `spacing` is not a positive finite
/// number (a zero step would never terminate).
pub fn bar_positions(start: f64, end: f64, spacing: f64) -> Vec<f64> {
    let mut positions = Vec::new();
    if !(spacing.is_finite() && spacing > 0.0) {
        return positions;
    }

    let mut pos = start;
    while pos <= end {
        positions.push(pos);
        pos += spacing;
    }
    positions
}

/// Generate the plan rebar grid for a `plan_width` x `plan_height` rectangle.
///
/// All horizontal bars come first (increasing Y), then all vertical bars
/// (increasing X). If `cover` leaves no interior along an axis, that axis
/// contributes no bars; the result may be empty but this never fails.
pub fn generate_grid(plan_width: f64, plan_height: f64, spacing: f64, cover: f64) -> Vec<Rebar> {
    let x_end = plan_width - cover;
    let y_end = plan_height - cover;

    let horizontal = bar_positions(cover, y_end, spacing)
        .into_iter()
        .map(|y| Rebar {
            kind: RebarKind::Horizontal,
            x1: cover,
            y1: y,
            x2: x_end,
            y2: y,
        });

    let vertical = bar_positions(cover, x_end, spacing)
        .into_iter()
        .map(|x| Rebar {
            kind: RebarKind::Vertical,
            x1: x,
            y1: cover,
            x2: x,
            y2: y_end,
        });

    let grid: Vec<Rebar> = horizontal.chain(vertical).collect();
    debug!(plan_width, plan_height, spacing, cover, bars = grid.len(), "generated rebar grid");
    grid
}
