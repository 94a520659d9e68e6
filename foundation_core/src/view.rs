//! View selection: which renderer consumes the configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::FoundationError;

/// Plan (top-down) or section (vertical slice) drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Plan,
    Section,
}

impl ViewMode {
    /// All views for UI selection
    pub const ALL: [ViewMode; 2] = [ViewMode::Plan, ViewMode::Section];

    /// The other view
    pub fn toggle(self) -> Self {
        match self {
            ViewMode::Plan => ViewMode::Section,
            ViewMode::Section => ViewMode::Plan,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ViewMode::Plan => "Plan View",
            ViewMode::Section => "Section View",
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ViewMode {
    type Err = FoundationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plan" => Ok(ViewMode::Plan),
            "section" => Ok(ViewMode::Section),
            _ => Err(FoundationError::unknown_view(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(ViewMode::Plan.toggle(), ViewMode::Section);
        assert_eq!(ViewMode::Section.toggle().toggle(), ViewMode::Section);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Plan".parse::<ViewMode>().unwrap(), ViewMode::Plan);
        assert_eq!(" section ".parse::<ViewMode>().unwrap(), ViewMode::Section);
        assert_eq!("iso".parse::<ViewMode>().unwrap_err().error_code(), "UNKNOWN_VIEW");
    }
}
