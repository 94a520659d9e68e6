//! # foundation_core - Foundation Rebar Layout Engine
//!
//! `foundation_core` computes the reinforcing-bar layout of a rectangular
//! concrete foundation from seven design parameters, derives the quantities
//! shown next to the drawings, and builds plan and section drawings that
//! any renderer can paint.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: the configuration is the only state; grid, metrics and
//!   drawings are pure functions of it, recomputed on every read
//! - **Total**: numeric input is parsed leniently and clamped, never rejected
//! - **JSON-First**: all types implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use foundation_core::config::FoundationConfig;
//! use foundation_core::metrics::FoundationMetrics;
//!
//! let config = FoundationConfig::default();
//! let metrics = FoundationMetrics::from_config(&config);
//! assert_eq!(metrics.volume_display(), "14.40");
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Parameters, ranges, lenient parsing and clamping
//! - [`rebar`] - Rebar grid generator
//! - [`metrics`] - Volume, bar count and total bar length
//! - [`section`] - Section view geometry (layers, stirrups, walls)
//! - [`drawing`] - Renderer-neutral plan/section display lists
//! - [`svg`] - SVG serialization of drawings
//! - [`session`] - Explicit design session state
//! - [`view`] - Plan/section view selection
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod config;
pub mod drawing;
pub mod errors;
pub mod metrics;
pub mod rebar;
pub mod section;
pub mod session;
pub mod svg;
pub mod units;
pub mod view;

// Re-export commonly used types at crate root for convenience
pub use config::{update_config, FoundationConfig, Parameter};
pub use errors::{FoundationError, FoundationResult};
pub use metrics::FoundationMetrics;
pub use rebar::{generate_grid, Rebar, RebarKind};
pub use session::DesignSession;
pub use view::ViewMode;
