//! # Unit Types
//!
//! Lightweight newtype wrappers for the physical units the indent engine
//! mixes: shop-floor dimensions arrive in millimeters, feet or inches, stock
//! is ordered in meters, and everything is weighed in kilograms.
//!
//! ## Metric Units (Primary)
//!
//! Calculations run in metric internally:
//! - Length: millimeters (mm) for sheet geometry, meters (m) for stock
//! - Mass: kilograms (kg)
//! - Linear mass: kilograms per meter (kg/m)
//!
//! Imperial inputs (feet for plate sizes, inches for jack rods) are
//! converted at the boundary.
//!
//! ## Example
//!
//! ```rust
//! use indent_core::units::{Feet, Millimeters, Meters, KgPerMeter, Kilograms};
//!
//! let side: Millimeters = Feet(3.0).into();
//! assert!((side.0 - 914.4).abs() < 1e-9);
//!
//! let stock: Meters = side.into();
//! let weight: Kilograms = KgPerMeter(1.8) * stock;
//! assert!((weight.0 - 1.64592).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Millimeters per foot
pub const MM_PER_FOOT: f64 = 304.8;

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Millimeters per meter
pub const MM_PER_METER: f64 = 1000.0;

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Feet> for Millimeters {
    fn from(ft: Feet) -> Self {
        Millimeters(ft.0 * MM_PER_FOOT)
    }
}

impl From<Inches> for Millimeters {
    fn from(inches: Inches) -> Self {
        Millimeters(inches.0 * MM_PER_INCH)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / MM_PER_METER)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * MM_PER_METER)
    }
}

impl From<Inches> for Meters {
    fn from(inches: Inches) -> Self {
        Millimeters::from(inches).into()
    }
}

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Linear mass in kilograms per meter
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgPerMeter(pub f64);

impl Mul<Meters> for KgPerMeter {
    type Output = Kilograms;
    fn mul(self, rhs: Meters) -> Kilograms {
        Kilograms(self.0 * rhs.0)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqM(pub f64);

impl SqM {
    /// Area of a rectangle given both sides in millimeters
    pub fn from_mm(length: Millimeters, breadth: Millimeters) -> Self {
        SqM((length.0 * breadth.0) / (MM_PER_METER * MM_PER_METER))
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

// Feet and Inches only exist to convert into metric at the input boundary.

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(Meters);
impl_arithmetic!(Kilograms);
impl_arithmetic!(KgPerMeter);
impl_arithmetic!(SqM);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feet_to_millimeters() {
        let mm: Millimeters = Feet(2.0).into();
        assert!((mm.0 - 609.6).abs() < 1e-9);
    }

    #[test]
    fn test_inches_to_meters() {
        // 18" jack rod
        let m: Meters = Inches(18.0).into();
        assert!((m.0 - 0.4572).abs() < 1e-12);
    }

    #[test]
    fn test_linear_mass_times_length() {
        let w = KgPerMeter(3.25) * Meters(300.0);
        assert!((w.0 - 975.0).abs() < 1e-9);
    }

    #[test]
    fn test_area_from_mm() {
        let a = SqM::from_mm(Millimeters(900.0), Millimeters(600.0));
        assert!((a.0 - 0.54).abs() < 1e-12);
    }

    #[test]
    fn test_arithmetic() {
        let a = Meters(3.0);
        let b = Meters(0.3);
        assert!(((a - b).0 - 2.7).abs() < 1e-12);
        assert_eq!((a + a).0, 6.0);
        assert_eq!((a * 2.0).0, 6.0);
        assert_eq!((a / 2.0).0, 1.5);
    }

    #[test]
    fn test_serialization() {
        let mm = Millimeters(900.0);
        let json = serde_json::to_string(&mm).unwrap();
        assert_eq!(json, "900.0");

        let roundtrip: Millimeters = serde_json::from_str(&json).unwrap();
        assert_eq!(mm, roundtrip);
    }
}
