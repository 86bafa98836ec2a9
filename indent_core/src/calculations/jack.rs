//! # Base Jack / U-Jack
//!
//! A threaded solid rod (length specified in inches, as ordered) with a flat
//! base or U-plate and a cup nut.

use serde::{Deserialize, Serialize};

use super::{require_positive, BatchQuantity, LineUnit, MaterialLineItem};
use crate::errors::CalcResult;
use crate::materials::{rod_weight_per_meter, Component};
use crate::units::{Inches, Kilograms, Meters};

/// Jack variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum JackKind {
    /// Base jack with flat plate
    #[default]
    #[serde(rename = "Base Jack")]
    BaseJack,
    /// U-jack with U-plate
    #[serde(rename = "U-Jack")]
    UJack,
}

impl JackKind {
    /// Item name of the flat base
    pub fn base_item_name(&self) -> &'static str {
        match self {
            JackKind::BaseJack => "Base Plate",
            JackKind::UJack => "U-Plate",
        }
    }
}

/// Jack configuration.
///
/// ## JSON Example
///
/// ```json
/// { "kind": "U-Jack", "rod_diameter": "32mm", "rod_length_in": 24.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JackInput {
    /// Base jack or U-jack
    pub kind: JackKind,

    /// Nominal rod diameter label, e.g. "30mm"
    pub rod_diameter: String,

    /// Rod length (inches)
    pub rod_length_in: f64,
}

impl Default for JackInput {
    fn default() -> Self {
        JackInput {
            kind: JackKind::BaseJack,
            rod_diameter: "30mm".to_string(),
            rod_length_in: 18.0,
        }
    }
}

impl JackInput {
    /// Rod length in meters
    pub fn rod_length(&self) -> Meters {
        Inches(self.rod_length_in).into()
    }

    /// Rod weight per jack (unknown labels use the 30 mm weight)
    pub fn rod_weight_per_piece(&self) -> Kilograms {
        rod_weight_per_meter(&self.rod_diameter) * self.rod_length()
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("rod_length_in", self.rod_length_in)
    }
}

/// Calculate the jack indent.
pub fn calculate(input: &JackInput, quantity: BatchQuantity) -> Vec<MaterialLineItem> {
    let qty = quantity as f64;
    let rod_weight = input.rod_weight_per_piece();

    log::debug!(
        "jack rod {} x {}in: {:.5} kg/pc",
        input.rod_diameter,
        input.rod_length_in,
        rod_weight.0
    );

    vec![
        MaterialLineItem::raw(
            "Threaded Solid Rod",
            format!("{} (L={}\")", input.rod_diameter, input.rod_length_in),
            qty,
            LineUnit::Pieces,
            rod_weight.0 * qty,
        ),
        MaterialLineItem::raw(
            input.kind.base_item_name(),
            "Standard (1.0 kg)",
            qty,
            LineUnit::Pieces,
            Component::JackFlatBase.unit_weight().0 * qty,
        ),
        MaterialLineItem::accessory(
            "Cup Nut",
            "180g each",
            qty,
            LineUnit::Nos,
            Component::CupNut.unit_weight().0 * qty,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::DEFAULT_ROD_WEIGHT_PER_METER;

    #[test]
    fn test_reference_jack() {
        let input = JackInput::default();
        assert!((input.rod_length().0 - 0.4572).abs() < 1e-12);
        assert!((input.rod_weight_per_piece().0 - 2.53746).abs() < 1e-9);

        let rows = calculate(&input, 100);
        assert_eq!(rows.len(), 3);

        let rod = &rows[0];
        assert_eq!(rod.specification, "30mm (L=18\")");
        assert_eq!(rod.unit, LineUnit::Pieces);
        assert_eq!(rod.quantity, 100.0);
        assert!((rod.total_weight_kg - 253.746).abs() < 1e-3);

        assert_eq!(rows[1].item, "Base Plate");
        assert_eq!(rows[1].total_weight_kg, 100.0);

        let nut = &rows[2];
        assert_eq!(nut.item, "Cup Nut");
        assert!(!nut.is_raw_material);
        assert!((nut.total_weight_kg - 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_u_jack_name() {
        let input = JackInput {
            kind: JackKind::UJack,
            ..JackInput::default()
        };
        assert_eq!(calculate(&input, 1)[1].item, "U-Plate");
    }

    #[test]
    fn test_rod_sizes() {
        let input = JackInput {
            rod_diameter: "32mm".to_string(),
            ..JackInput::default()
        };
        assert!((input.rod_weight_per_piece().0 - 6.31 * 0.4572).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_rod_falls_back() {
        let input = JackInput {
            rod_diameter: "36mm".to_string(),
            ..JackInput::default()
        };
        assert!(
            (input.rod_weight_per_piece().0 - DEFAULT_ROD_WEIGHT_PER_METER * 0.4572).abs() < 1e-9
        );
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let json = r#"{ "kind": "U-Jack", "rod_diameter": "28mm", "rod_length_in": 12.0 }"#;
        let input: JackInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.kind, JackKind::UJack);
        assert_eq!(input.rod_length_in, 12.0);
    }
}
