//! # Design Session
//!
//! The explicit state of one design session: the configuration plus the
//! selected view. Updates return a new snapshot; the grid, metrics and
//! drawing are recomputed on every access and never stored.
//!
//! ## Example
//!
//! ```rust
//! use foundation_core::session::DesignSession;
//! use foundation_core::view::ViewMode;
//!
//! let session = DesignSession::default();
//! let next = session.update("rebarSpacing", "250").unwrap().with_view(ViewMode::Section);
//!
//! assert_eq!(next.config.rebar_spacing(), 250.0);
//! assert_eq!(session.config.rebar_spacing(), 200.0);
//! assert_eq!(next.drawing().view, ViewMode::Section);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{update_config, FoundationConfig, Parameter};
use crate::drawing::{drawing_for, Drawing};
use crate::errors::FoundationResult;
use crate::metrics::{plan_grid, FoundationMetrics};
use crate::rebar::Rebar;
use crate::section::SectionLayout;
use crate::view::ViewMode;

/// Configuration and view selection for one session
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DesignSession {
    pub config: FoundationConfig,
    pub view: ViewMode,
}

impl DesignSession {
    pub fn new(config: FoundationConfig) -> Self {
        Self {
            config,
            view: ViewMode::default(),
        }
    }

    /// Apply a keyed text update, returning the next snapshot
    pub fn update(&self, key: &str, text: &str) -> FoundationResult<Self> {
        Ok(Self {
            config: update_config(&self.config, key, text)?,
            view: self.view,
        })
    }

    /// Typed variant of [`DesignSession::update`] for callers that already hold a [`Parameter`]
    pub fn with_input(&self, param: Parameter, text: &str) -> Self {
        Self {
            config: self.config.with_input(param, text),
            view: self.view,
        }
    }

    /// Same configuration, different view
    pub fn with_view(&self, view: ViewMode) -> Self {
        Self {
            config: self.config,
            view,
        }
    }

    /// Plan rebar grid
    pub fn grid(&self) -> Vec<Rebar> {
        plan_grid(&self.config)
    }

    pub fn metrics(&self) -> FoundationMetrics {
        FoundationMetrics::from_config(&self.config)
    }

    pub fn section(&self) -> SectionLayout {
        SectionLayout::from_config(&self.config)
    }

    /// Drawing for the selected view
    pub fn drawing(&self) -> Drawing {
        drawing_for(self.view, &self.config)
    }
}
