//! # Centering Plate
//!
//! A steel sheet stiffened by an MS angle frame. The frame layout is
//! described by how many angle runs go along the long side (L) and the short
//! side (S) of the plate.
//!
//! ## Method
//!
//! - Sheet weight = area (m²) × thickness (mm) × 7.85
//! - Angle run per plate = (L-count × longer side + S-count × shorter side) / 1000
//! - Angle weight = run × tabulated kg/m (zero if the angle is not tabulated)
//!
//! ## Example
//!
//! ```rust
//! use indent_core::calculations::plate::{calculate, PlateInput};
//!
//! let input = PlateInput::default(); // 900 x 600 mm, 2 mm sheet, 25 x 25 x 5 angle, 2L3S
//! let rows = calculate(&input, 100);
//!
//! assert!((rows[0].total_weight_kg - 847.8).abs() < 1e-6);
//! assert!((rows[1].quantity - 360.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use super::{require_positive, BatchQuantity, LineUnit, MaterialLineItem};
use crate::errors::CalcResult;
use crate::materials::{angle_weight_per_meter, sync_angle_thickness, STEEL_SHEET_KG_PER_M2_MM};
use crate::units::{Feet, Kilograms, Meters, Millimeters, SqM, MM_PER_METER};

/// Unit the plate length and breadth are entered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DimensionUnit {
    /// Millimeters
    #[default]
    #[serde(rename = "mm")]
    Millimeter,
    /// Feet
    #[serde(rename = "feet")]
    Foot,
}

impl DimensionUnit {
    /// Convert a raw entry in this unit to millimeters
    pub fn to_mm(&self, value: f64) -> Millimeters {
        match self {
            DimensionUnit::Millimeter => Millimeters(value),
            DimensionUnit::Foot => Feet(value).into(),
        }
    }
}

/// Angle framing layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FramingType {
    /// Two long runs, three short runs
    #[default]
    #[serde(rename = "2L3S")]
    TwoLongThreeShort,
    /// Two long runs, four short runs
    #[serde(rename = "2L4S")]
    TwoLongFourShort,
    /// Three long runs, two short runs
    #[serde(rename = "3L2S")]
    ThreeLongTwoShort,
}

impl FramingType {
    /// (long-side runs, short-side runs)
    pub fn counts(&self) -> (u32, u32) {
        match self {
            FramingType::TwoLongThreeShort => (2, 3),
            FramingType::TwoLongFourShort => (2, 4),
            FramingType::ThreeLongTwoShort => (3, 2),
        }
    }

    /// Label printed on the indent
    pub fn label(&self) -> &'static str {
        match self {
            FramingType::TwoLongThreeShort => "Type A (2L+3S)",
            FramingType::TwoLongFourShort => "Type B (2L+4S)",
            FramingType::ThreeLongTwoShort => "Type C (3L+2S)",
        }
    }
}

impl std::fmt::Display for FramingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Centering plate configuration.
///
/// ## JSON Example
///
/// ```json
/// {
///   "dimension_unit": "mm",
///   "length": 900.0,
///   "breadth": 600.0,
///   "sheet_thickness_mm": 2.0,
///   "angle_size": "25 x 25",
///   "angle_thickness_mm": 5.0,
///   "framing": "2L3S"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateInput {
    /// Unit of `length` and `breadth`
    pub dimension_unit: DimensionUnit,

    /// Plate length in `dimension_unit`
    pub length: f64,

    /// Plate breadth in `dimension_unit`
    pub breadth: f64,

    /// HR sheet thickness (mm)
    pub sheet_thickness_mm: f64,

    /// Angle cross-section label, e.g. "25 x 25"
    pub angle_size: String,

    /// Angle leg thickness (mm)
    pub angle_thickness_mm: f64,

    /// Stiffener layout
    pub framing: FramingType,
}

impl Default for PlateInput {
    fn default() -> Self {
        PlateInput {
            dimension_unit: DimensionUnit::Millimeter,
            length: 900.0,
            breadth: 600.0,
            sheet_thickness_mm: 2.0,
            angle_size: "25 x 25".to_string(),
            angle_thickness_mm: 5.0,
            framing: FramingType::TwoLongThreeShort,
        }
    }
}

impl PlateInput {
    /// Switch the angle size, resetting the thickness if the new size does
    /// not offer the current one.
    pub fn with_angle_size(mut self, size: impl Into<String>) -> Self {
        self.angle_size = size.into();
        self.angle_thickness_mm = sync_angle_thickness(&self.angle_size, self.angle_thickness_mm);
        self
    }

    /// Length in millimeters
    pub fn length_mm(&self) -> Millimeters {
        self.dimension_unit.to_mm(self.length)
    }

    /// Breadth in millimeters
    pub fn breadth_mm(&self) -> Millimeters {
        self.dimension_unit.to_mm(self.breadth)
    }

    /// Sheet area per plate
    pub fn sheet_area(&self) -> SqM {
        SqM::from_mm(self.length_mm(), self.breadth_mm())
    }

    /// Sheet weight per plate
    pub fn sheet_weight_per_piece(&self) -> Kilograms {
        Kilograms(self.sheet_area().0 * self.sheet_thickness_mm * STEEL_SHEET_KG_PER_M2_MM)
    }

    /// Angle run per plate
    pub fn angle_length_per_piece(&self) -> Meters {
        let (long_count, short_count) = self.framing.counts();
        let (a, b) = (self.length_mm().0, self.breadth_mm().0);
        let longer = a.max(b);
        let shorter = a.min(b);
        Meters((long_count as f64 * longer + short_count as f64 * shorter) / MM_PER_METER)
    }

    /// Angle weight per plate
    pub fn angle_weight_per_piece(&self) -> Kilograms {
        angle_weight_per_meter(&self.angle_size, self.angle_thickness_mm) * self.angle_length_per_piece()
    }

    /// Size as entered, e.g. "900x600mm" or "3'x2'"
    pub fn dimension_label(&self) -> String {
        match self.dimension_unit {
            DimensionUnit::Millimeter => format!("{}x{}mm", self.length, self.breadth),
            DimensionUnit::Foot => format!("{}'x{}'", self.length, self.breadth),
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("length", self.length)?;
        require_positive("breadth", self.breadth)?;
        require_positive("sheet_thickness_mm", self.sheet_thickness_mm)?;
        require_positive("angle_thickness_mm", self.angle_thickness_mm)
    }
}

/// Calculate the plate indent: sheet row then angle row.
pub fn calculate(input: &PlateInput, quantity: BatchQuantity) -> Vec<MaterialLineItem> {
    let qty = quantity as f64;
    let sheet_weight = input.sheet_weight_per_piece();
    let angle_length = input.angle_length_per_piece();
    let angle_weight = input.angle_weight_per_piece();

    log::debug!(
        "plate {}: sheet {:.3} kg/pc, angle {:.3} m/pc ({:.3} kg/pc)",
        input.dimension_label(),
        sheet_weight.0,
        angle_length.0,
        angle_weight.0
    );

    vec![
        MaterialLineItem::raw(
            "HR Sheet (Plate Body)",
            format!("{}mm Thick ({})", input.sheet_thickness_mm, input.dimension_label()),
            qty,
            LineUnit::Pieces,
            sheet_weight.0 * qty,
        ),
        MaterialLineItem::raw(
            format!("MS Angle ({})", input.framing.label()),
            format!("{} x {}mm", input.angle_size, input.angle_thickness_mm),
            angle_length.0 * qty,
            LineUnit::Meters,
            angle_weight.0 * qty,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_plate() {
        let input = PlateInput::default();
        assert!((input.sheet_weight_per_piece().0 - 8.478).abs() < 1e-9);
        assert!((input.angle_length_per_piece().0 - 3.6).abs() < 1e-9);
        assert!((input.angle_weight_per_piece().0 - 6.48).abs() < 1e-9);

        let rows = calculate(&input, 100);
        assert_eq!(rows.len(), 2);

        let sheet = &rows[0];
        assert_eq!(sheet.item, "HR Sheet (Plate Body)");
        assert_eq!(sheet.specification, "2mm Thick (900x600mm)");
        assert_eq!(sheet.unit, LineUnit::Pieces);
        assert_eq!(sheet.quantity, 100.0);
        assert!((sheet.total_weight_kg - 847.8).abs() < 1e-6);
        assert!(sheet.is_raw_material);

        let angle = &rows[1];
        assert_eq!(angle.item, "MS Angle (Type A (2L+3S))");
        assert_eq!(angle.specification, "25 x 25 x 5mm");
        assert_eq!(angle.unit, LineUnit::Meters);
        assert!((angle.quantity - 360.0).abs() < 1e-9);
        assert!((angle.total_weight_kg - 648.0).abs() < 1e-6);
    }

    #[test]
    fn test_orientation_does_not_matter() {
        let a = PlateInput::default();
        let b = PlateInput {
            length: 600.0,
            breadth: 900.0,
            ..PlateInput::default()
        };
        assert!((a.angle_length_per_piece().0 - b.angle_length_per_piece().0).abs() < 1e-12);
    }

    #[test]
    fn test_framing_layouts() {
        let mut input = PlateInput::default();
        input.framing = FramingType::TwoLongFourShort;
        // 2 x 0.9 + 4 x 0.6
        assert!((input.angle_length_per_piece().0 - 4.2).abs() < 1e-9);
        input.framing = FramingType::ThreeLongTwoShort;
        // 3 x 0.9 + 2 x 0.6
        assert!((input.angle_length_per_piece().0 - 3.9).abs() < 1e-9);
        assert_eq!(calculate(&input, 1)[1].item, "MS Angle (Type C (3L+2S))");
    }

    #[test]
    fn test_feet_input() {
        let input = PlateInput {
            dimension_unit: DimensionUnit::Foot,
            length: 3.0,
            breadth: 2.0,
            ..PlateInput::default()
        };
        // 914.4 x 609.6 mm
        assert!((input.sheet_area().0 - 0.557418_24).abs() < 1e-9);
        let rows = calculate(&input, 10);
        assert_eq!(rows[0].specification, "2mm Thick (3'x2')");
        assert!((rows[0].total_weight_kg - 0.557418_24 * 2.0 * 7.85 * 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_untabulated_angle_weighs_zero() {
        let input = PlateInput {
            angle_size: "20 x 20".to_string(),
            angle_thickness_mm: 6.0,
            ..PlateInput::default()
        };
        let rows = calculate(&input, 50);
        assert!((rows[1].quantity - 180.0).abs() < 1e-9);
        assert_eq!(rows[1].total_weight_kg, 0.0);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_with_angle_size_resyncs_thickness() {
        let input = PlateInput::default().with_angle_size("20 x 20");
        assert_eq!(input.angle_thickness_mm, 3.0);
        assert!(input.validate().is_ok());

        let kept = PlateInput::default().with_angle_size("50 x 50");
        assert_eq!(kept.angle_thickness_mm, 5.0);
    }

    #[test]
    fn test_negative_input_does_not_panic() {
        let input = PlateInput {
            length: -900.0,
            ..PlateInput::default()
        };
        let rows = calculate(&input, 10);
        assert!(rows[0].total_weight_kg < 0.0);
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let input = PlateInput::default();
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"framing\":\"2L3S\""));
        assert!(json.contains("\"dimension_unit\":\"mm\""));
        let roundtrip: PlateInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}
