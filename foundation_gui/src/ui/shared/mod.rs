//! Shared UI components
//!
//! Contains:
//! - `drawing_canvas` - Canvas program that paints plan and section drawings

pub mod drawing_canvas;
