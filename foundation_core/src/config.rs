//! # Foundation Configuration
//!
//! The seven design parameters of a foundation, each a length in
//! millimetres held inside a fixed inclusive range. The configuration is
//! the only state of a design session; everything else (rebar grid,
//! metrics, drawings) is derived from it on demand.
//!
//! Values are clamped at the moment they are set, so a stored value is
//! always in range. Text input is parsed leniently: the longest numeric
//! prefix is used, and anything unparseable counts as zero before clamping.
//!
//! ## Example
//!
//! ```rust
//! use foundation_core::config::{update_config, FoundationConfig, Parameter};
//!
//! let config = FoundationConfig::default();
//! let deeper = update_config(&config, "depth", "999999").unwrap();
//! assert_eq!(deeper.depth(), 5000.0);
//!
//! // The original snapshot is untouched
//! assert_eq!(config.get(Parameter::Depth), 600.0);
//! ```

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{FoundationError, FoundationResult};

/// Inclusive range with the UI step for one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParamRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Clamp a value into the range. NaN counts as zero.
    pub fn clamp(&self, value: f64) -> f64 {
        let value = if value.is_nan() { 0.0 } else { value };
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// One of the seven configurable foundation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Parameter {
    /// Plan dimension along X
    Length,
    /// Plan dimension along Y
    Width,
    /// Slab thickness, shown in section
    Depth,
    /// Thickness of the perimeter walls
    WallThickness,
    /// Centre-to-centre distance between main bars
    RebarSpacing,
    /// Main bar diameter
    RebarDiameter,
    /// Cover from concrete face to bar centreline
    CoverConcrete,
}

impl Parameter {
    /// All parameters in input-field order
    pub const ALL: [Parameter; 7] = [
        Parameter::Length,
        Parameter::Width,
        Parameter::Depth,
        Parameter::WallThickness,
        Parameter::RebarSpacing,
        Parameter::RebarDiameter,
        Parameter::CoverConcrete,
    ];

    /// Valid range and input step (mm)
    pub fn range(&self) -> ParamRange {
        match self {
            Parameter::Length => ParamRange::new(1000.0, 50000.0, 100.0),
            Parameter::Width => ParamRange::new(1000.0, 50000.0, 100.0),
            Parameter::Depth => ParamRange::new(200.0, 5000.0, 50.0),
            Parameter::WallThickness => ParamRange::new(100.0, 1000.0, 25.0),
            Parameter::RebarSpacing => ParamRange::new(100.0, 500.0, 25.0),
            Parameter::RebarDiameter => ParamRange::new(6.0, 40.0, 2.0),
            Parameter::CoverConcrete => ParamRange::new(25.0, 100.0, 5.0),
        }
    }

    pub fn min(&self) -> f64 {
        self.range().min
    }

    pub fn max(&self) -> f64 {
        self.range().max
    }

    pub fn step(&self) -> f64 {
        self.range().step
    }

    /// Value used for a fresh session
    pub fn default_value(&self) -> f64 {
        match self {
            Parameter::Length => 6000.0,
            Parameter::Width => 4000.0,
            Parameter::Depth => 600.0,
            Parameter::WallThickness => 300.0,
            Parameter::RebarSpacing => 200.0,
            Parameter::RebarDiameter => 16.0,
            Parameter::CoverConcrete => 50.0,
        }
    }

    /// Canonical key, as used by `update_config` and JSON files
    pub fn key(&self) -> &'static str {
        match self {
            Parameter::Length => "length",
            Parameter::Width => "width",
            Parameter::Depth => "depth",
            Parameter::WallThickness => "wallThickness",
            Parameter::RebarSpacing => "rebarSpacing",
            Parameter::RebarDiameter => "rebarDiameter",
            Parameter::CoverConcrete => "coverConcrete",
        }
    }

    /// Human-readable label for input fields
    pub fn label(&self) -> &'static str {
        match self {
            Parameter::Length => "Length",
            Parameter::Width => "Width",
            Parameter::Depth => "Depth",
            Parameter::WallThickness => "Wall Thickness",
            Parameter::RebarSpacing => "Rebar Spacing",
            Parameter::RebarDiameter => "Rebar Diameter",
            Parameter::CoverConcrete => "Concrete Cover",
        }
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Parameter {
    type Err = FoundationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Parameter::ALL
            .iter()
            .copied()
            .find(|p| {
                p.key() == key || p.key().eq_ignore_ascii_case(&key.replace(['_', '-'], ""))
            })
            .ok_or_else(|| FoundationError::unknown_parameter(key))
    }
}

/// Parse user-entered text the way a numeric input field does.
///
/// Leading whitespace is skipped and the longest decimal prefix
/// (`[+-]digits[.digits][e[+-]digits]`) is used. Text with no numeric
/// prefix and NaN parse as `0.0`. Overflow keeps its sign as an infinity,
/// which the clamp then pins to the nearer bound.
pub fn parse_lenient(text: &str) -> f64 {
    let s = text.trim();
    if let Ok(v) = s.parse::<f64>() {
        return if v.is_nan() { 0.0 } else { v };
    }

    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return 0.0;
    }

    // Optional exponent, only if it has at least one digit
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    match s[..end].parse::<f64>() {
        Ok(v) if !v.is_nan() => v,
        _ => 0.0,
    }
}

/// Foundation design parameters, all in millimetres.
///
/// Fields are private so that every stored value passes through the
/// clamp. Deserialization clamps as well.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length": 6000.0,
///   "width": 4000.0,
///   "depth": 600.0,
///   "wallThickness": 300.0,
///   "rebarSpacing": 200.0,
///   "rebarDiameter": 16.0,
///   "coverConcrete": 50.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawConfig")]
pub struct FoundationConfig {
    length: f64,
    width: f64,
    depth: f64,
    wall_thickness: f64,
    rebar_spacing: f64,
    rebar_diameter: f64,
    cover_concrete: f64,
}

impl Default for FoundationConfig {
    fn default() -> Self {
        Self {
            length: Parameter::Length.default_value(),
            width: Parameter::Width.default_value(),
            depth: Parameter::Depth.default_value(),
            wall_thickness: Parameter::WallThickness.default_value(),
            rebar_spacing: Parameter::RebarSpacing.default_value(),
            rebar_diameter: Parameter::RebarDiameter.default_value(),
            cover_concrete: Parameter::CoverConcrete.default_value(),
        }
    }
}

impl FoundationConfig {
    /// Read one parameter
    pub fn get(&self, param: Parameter) -> f64 {
        match param {
            Parameter::Length => self.length,
            Parameter::Width => self.width,
            Parameter::Depth => self.depth,
            Parameter::WallThickness => self.wall_thickness,
            Parameter::RebarSpacing => self.rebar_spacing,
            Parameter::RebarDiameter => self.rebar_diameter,
            Parameter::CoverConcrete => self.cover_concrete,
        }
    }

    /// Return a new snapshot with `param` set to `value`, clamped into range.
    pub fn with_value(&self, param: Parameter, value: f64) -> Self {
        let clamped = param.range().clamp(value);
        if clamped != value {
            debug!(
                parameter = param.key(),
                requested = value,
                stored = clamped,
                "clamped parameter"
            );
        }

        let mut next = *self;
        let slot = match param {
            Parameter::Length => &mut next.length,
            Parameter::Width => &mut next.width,
            Parameter::Depth => &mut next.depth,
            Parameter::WallThickness => &mut next.wall_thickness,
            Parameter::RebarSpacing => &mut next.rebar_spacing,
            Parameter::RebarDiameter => &mut next.rebar_diameter,
            Parameter::CoverConcrete => &mut next.cover_concrete,
        };
        *slot = clamped;
        next
    }

    /// Return a new snapshot with `param` set from user text (lenient parse, then clamp).
    pub fn with_input(&self, param: Parameter, text: &str) -> Self {
        self.with_value(param, parse_lenient(text))
    }

    /// Iterate over `(parameter, value)` pairs in field order
    pub fn values(&self) -> impl Iterator<Item = (Parameter, f64)> + '_ {
        Parameter::ALL.iter().map(move |&p| (p, self.get(p)))
    }

    /// Load a configuration from JSON text. Missing keys take defaults.
    pub fn from_json(json: &str) -> FoundationResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    ///
    /// # Returns
    ///
    /// * `Err(FoundationError::Io)` - the file could not be read
    /// * `Err(FoundationError::Serialization)` - invalid JSON
    pub fn load(path: &Path) -> FoundationResult<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| FoundationError::io("read", path.display().to_string(), e.to_string()))?;
        serde_json::from_str(&json).map_err(|e| {
            FoundationError::serialization(format!("Invalid JSON in {}: {}", path.display(), e))
        })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    pub fn wall_thickness(&self) -> f64 {
        self.wall_thickness
    }

    pub fn rebar_spacing(&self) -> f64 {
        self.rebar_spacing
    }

    pub fn rebar_diameter(&self) -> f64 {
        self.rebar_diameter
    }

    pub fn cover_concrete(&self) -> f64 {
        self.cover_concrete
    }
}

/// Apply a keyed text update to a configuration snapshot.
///
/// The key must name a parameter; the text never fails (see [`parse_lenient`]).
pub fn update_config(
    config: &FoundationConfig,
    key: &str,
    text: &str,
) -> FoundationResult<FoundationConfig> {
    let param: Parameter = key.parse()?;
    Ok(config.with_input(param, text))
}

/// Unclamped wire form; converted through the clamp on deserialize.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawConfig {
    length: f64,
    width: f64,
    depth: f64,
    #[serde(alias = "wall_thickness")]
    wall_thickness: f64,
    #[serde(alias = "rebar_spacing")]
    rebar_spacing: f64,
    #[serde(alias = "rebar_diameter")]
    rebar_diameter: f64,
    #[serde(alias = "cover_concrete", alias = "cover")]
    cover_concrete: f64,
}

impl Default for RawConfig {
    fn default() -> Self {
        let d = FoundationConfig::default();
        Self {
            length: d.length,
            width: d.width,
            depth: d.depth,
            wall_thickness: d.wall_thickness,
            rebar_spacing: d.rebar_spacing,
            rebar_diameter: d.rebar_diameter,
            cover_concrete: d.cover_concrete,
        }
    }
}

impl From<RawConfig> for FoundationConfig {
    fn from(raw: RawConfig) -> Self {
        FoundationConfig::default()
            .with_value(Parameter::Length, raw.length)
            .with_value(Parameter::Width, raw.width)
            .with_value(Parameter::Depth, raw.depth)
            .with_value(Parameter::WallThickness, raw.wall_thickness)
            .with_value(Parameter::RebarSpacing, raw.rebar_spacing)
            .with_value(Parameter::RebarDiameter, raw.rebar_diameter)
            .with_value(Parameter::CoverConcrete, raw.cover_concrete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_in_range() {
        let config = FoundationConfig::default();
        for (param, value) in config.values() {
            assert!(param.range().contains(value), "{} out of range", param.key());
        }
    }

    #[test]
    fn test_clamp_above_max() {
        let config = update_config(&FoundationConfig::default(), "depth", "999999").unwrap();
        assert_eq!(config.depth(), 5000.0);
    }

    #[test]
    fn test_clamp_below_min() {
        let config = update_config(&FoundationConfig::default(), "rebarDiameter", "-5").unwrap();
        assert_eq!(config.rebar_diameter(), 6.0);
    }

    #[test]
    fn test_unparseable_is_zero_then_clamped() {
        assert_eq!(parse_lenient("abc"), 0.0);
        let config = update_config(&FoundationConfig::default(), "length", "abc").unwrap();
        assert_eq!(config.length(), 1000.0);
    }

    #[test]
    fn test_update_returns_new_snapshot() {
        let original = FoundationConfig::default();
        let updated = original.with_value(Parameter::Width, 12000.0);
        assert_eq!(original.width(), 4000.0);
        assert_eq!(updated.width(), 12000.0);
        assert_eq!(updated.length(), original.length());
    }

    #[test]
    fn test_parse_lenient_prefixes() {
        assert_eq!(parse_lenient("12abc"), 12.0);
        assert_eq!(parse_lenient("  3.5e2mm"), 350.0);
        assert_eq!(parse_lenient("-7.25"), -7.25);
        assert_eq!(parse_lenient(".5"), 0.5);
        assert_eq!(parse_lenient("4."), 4.0);
        assert_eq!(parse_lenient("1e"), 1.0);
        assert_eq!(parse_lenient(""), 0.0);
        assert_eq!(parse_lenient("-"), 0.0);
        assert_eq!(parse_lenient("."), 0.0);
        assert_eq!(parse_lenient("NaN"), 0.0);
        assert_eq!(parse_lenient("inf"), f64::INFINITY);
        assert_eq!(parse_lenient("-1e999x"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_overflow_clamps_to_nearest_bound() {
        let base = FoundationConfig::default();
        assert_eq!(update_config(&base, "depth", "1e999").unwrap().depth(), 5000.0);
        assert_eq!(update_config(&base, "depth", "Infinity").unwrap().depth(), 5000.0);
        assert_eq!(update_config(&base, "depth", "-1e999").unwrap().depth(), 200.0);
    }

    #[test]
    fn test_nan_value_clamps_to_min() {
        let config = FoundationConfig::default().with_value(Parameter::RebarSpacing, f64::NAN);
        assert_eq!(config.rebar_spacing(), 100.0);
    }

    #[test]
    fn test_parameter_keys() {
        assert_eq!("wallThickness".parse::<Parameter>().unwrap(), Parameter::WallThickness);
        assert_eq!("wall_thickness".parse::<Parameter>().unwrap(), Parameter::WallThickness);
        assert_eq!("cover-concrete".parse::<Parameter>().unwrap(), Parameter::CoverConcrete);
        assert_eq!("REBARSPACING".parse::<Parameter>().unwrap(), Parameter::RebarSpacing);
        assert!("height".parse::<Parameter>().is_err());
        assert!(update_config(&FoundationConfig::default(), "height", "10").is_err());
    }

    #[test]
    fn test_json_clamps_and_defaults() {
        let config = FoundationConfig::from_json(r#"{"length": 80000, "rebar_spacing": 50}"#).unwrap();
        assert_eq!(config.length(), 50000.0);
        assert_eq!(config.rebar_spacing(), 100.0);
        assert_eq!(config.width(), 4000.0);
        assert_eq!(config.cover_concrete(), 50.0);
    }

    #[test]
    fn test_serialization() {
        let config = FoundationConfig::default().with_value(Parameter::Depth, 750.0);
        let json = serde_json::to_string_pretty(&config).unwrap();
        assert!(json.contains("\"wallThickness\""));
        let roundtrip = FoundationConfig::from_json(&json).unwrap();
        assert_eq!(config, roundtrip);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("foundation_cfg_{}.json", std::process::id()));
        fs::write(&path, r#"{"depth": 9000, "cover": 40}"#).unwrap();
        let config = FoundationConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.depth(), 5000.0);
        assert_eq!(config.cover_concrete(), 40.0);
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("foundation_cfg_does_not_exist.json");
        let err = FoundationConfig::load(&path).unwrap_err();
        assert_eq!(err.error_code(), "IO_ERROR");
        assert!(err.to_string().contains("foundation_cfg_does_not_exist.json"));
    }

    #[test]
    fn test_invalid_json() {
        let err = FoundationConfig::from_json("{not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
