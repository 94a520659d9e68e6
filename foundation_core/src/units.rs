//! # Unit Types
//!
//! Type-safe wrappers for the SI units used in foundation drawings. These
//! provide compile-time safety against unit confusion while remaining
//! lightweight (just f64 wrappers).
//!
//! ## Units
//!
//! All geometry is modelled in millimetres, matching the input fields.
//! Aggregate quantities are reported in metres (bar length) and cubic
//! metres (concrete volume).
//!
//! ## Example
//!
//! ```rust
//! use foundation_core::units::{CubicMeters, CubicMillimeters, Meters, Millimeters};
//!
//! let bar = Millimeters(9000.0);
//! let bar_m: Meters = bar.into();
//! assert_eq!(bar_m.0, 9.0);
//!
//! let volume: CubicMeters = CubicMillimeters(6000.0 * 4000.0 * 600.0).into();
//! assert!((volume.0 - 14.4).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

/// Millimetres per metre
pub const MM_PER_M: f64 = 1000.0;

/// Cubic millimetres per cubic metre
pub const MM3_PER_M3: f64 = 1e9;

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / MM_PER_M)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * MM_PER_M)
    }
}

// ============================================================================
// Volume Units
// ============================================================================

/// Volume in cubic millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMillimeters(pub f64);

/// Volume in cubic metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMeters(pub f64);

impl From<CubicMillimeters> for CubicMeters {
    fn from(mm3: CubicMillimeters) -> Self {
        CubicMeters(mm3.0 / MM3_PER_M3)
    }
}

impl From<CubicMeters> for CubicMillimeters {
    fn from(m3: CubicMeters) -> Self {
        CubicMillimeters(m3.0 * MM3_PER_M3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm_to_m() {
        let m: Meters = Millimeters(2500.0).into();
        assert_eq!(m.0, 2.5);
        let back: Millimeters = m.into();
        assert_eq!(back.0, 2500.0);
    }

    #[test]
    fn test_volume_conversion() {
        let m3: CubicMeters = CubicMillimeters(1000.0 * 1000.0 * 1000.0).into();
        assert_eq!(m3.0, 1.0);
    }

    #[test]
    fn test_serialization() {
        let m = Meters(9.0);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "9.0");

        let roundtrip: Meters = serde_json::from_str(&json).unwrap();
        assert_eq!(m, roundtrip);
    }
}
