//! UI module for the foundation layout GUI
//!
//! # Panel Structure
//! - `toolbar` - View selector (Plan | Section), Reset, theme toggle
//! - `input_panel` - Left panel: the seven parameter fields
//! - `results_panel` - Right panel: drawing canvas, legend, metrics
//! - `status_bar` - Bottom status messages
//!
//! # Shared Components
//! - `shared/drawing_canvas` - Canvas program that paints a plan/section `Drawing`

pub mod toolbar;
pub mod input_panel;
pub mod results_panel;
pub mod status_bar;

pub mod shared;
