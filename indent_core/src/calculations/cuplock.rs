//! # Cuplock Vertical / Ledger
//!
//! Verticals carry a top cup and a bottom cup at every 0.5 m node. Ledgers
//! are cut 60 mm short of nominal to make room for the laser-cut blades
//! welded to each end.

use serde::{Deserialize, Serialize};

use super::{require_positive, BatchQuantity, LineUnit, MaterialLineItem};
use crate::errors::{CalcError, CalcResult};
use crate::materials::{Component, PipeClass};
use crate::units::{Meters, Millimeters, MM_PER_METER};

/// Node spacing along a vertical
pub const CUP_SPACING_M: f64 = 0.5;

/// Trim allowance on a ledger for the blade joint (mm)
pub const LEDGER_TRIM_MM: f64 = 60.0;

/// Blades per ledger
pub const BLADES_PER_LEDGER: u32 = 2;

/// Cuplock member kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CuplockKind {
    /// Upright with cups
    #[default]
    Vertical,
    /// Horizontal with end blades
    Ledger,
}

/// Pipe wall thickness offered for cuplock members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CuplockWall {
    /// 2.9 mm wall
    #[default]
    #[serde(rename = "2.9mm")]
    Mm2_9,
    /// 3.2 mm wall
    #[serde(rename = "3.2mm")]
    Mm3_2,
}

impl CuplockWall {
    /// Wall thickness (mm)
    pub fn thickness_mm(&self) -> f64 {
        match self {
            CuplockWall::Mm2_9 => 2.9,
            CuplockWall::Mm3_2 => 3.2,
        }
    }

    /// Matching 48.3 OD pipe class
    pub fn pipe_class(&self) -> PipeClass {
        match self {
            CuplockWall::Mm2_9 => PipeClass::Od48Wall29,
            CuplockWall::Mm3_2 => PipeClass::Od48Wall32,
        }
    }
}

/// Cuplock configuration.
///
/// ## JSON Example
///
/// ```json
/// { "kind": "Ledger", "length_m": 1.2, "wall": "2.9mm" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuplockInput {
    /// Vertical or ledger
    pub kind: CuplockKind,

    /// Nominal member length (m)
    pub length_m: f64,

    /// Pipe wall class
    pub wall: CuplockWall,
}

impl Default for CuplockInput {
    fn default() -> Self {
        CuplockInput {
            kind: CuplockKind::Vertical,
            length_m: 3.0,
            wall: CuplockWall::Mm2_9,
        }
    }
}

impl CuplockInput {
    /// Cups of each kind on one vertical (nearest whole node, ties away from zero)
    pub fn cups_per_piece(&self) -> f64 {
        (self.length_m / CUP_SPACING_M).round()
    }

    /// Pipe cut length for one ledger
    pub fn ledger_cut_length(&self) -> Meters {
        Millimeters(self.length_m * MM_PER_METER - LEDGER_TRIM_MM).into()
    }

    fn pipe_item_name(&self) -> String {
        format!("48.3 OD MS Pipe ({}mm)", self.wall.thickness_mm())
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("length_m", self.length_m)?;
        if self.kind == CuplockKind::Ledger && self.ledger_cut_length().0 <= 0.0 {
            return Err(CalcError::invalid_input(
                "length_m",
                self.length_m.to_string(),
                "Ledger must be longer than the 60 mm blade allowance",
            ));
        }
        Ok(())
    }
}

/// Calculate the cuplock indent.
pub fn calculate(input: &CuplockInput, quantity: BatchQuantity) -> Vec<MaterialLineItem> {
    match input.kind {
        CuplockKind::Vertical => calculate_vertical(input, quantity),
        CuplockKind::Ledger => calculate_ledger(input, quantity),
    }
}

fn calculate_vertical(input: &CuplockInput, quantity: BatchQuantity) -> Vec<MaterialLineItem> {
    let qty = quantity as f64;
    let pipe_wpm = input.wall.pipe_class().weight_per_meter();
    let cups = input.cups_per_piece();
    let pipe_length = Meters(input.length_m * qty);
    let cup_count = cups * qty;

    log::debug!("cuplock vertical {}m: {} cups/pc", input.length_m, cups);

    vec![
        MaterialLineItem::raw(
            input.pipe_item_name(),
            format!("Length: {}m", input.length_m),
            pipe_length.0,
            LineUnit::Meters,
            (pipe_wpm * pipe_length).0,
        ),
        MaterialLineItem::accessory(
            "Top Cup (Forged)",
            format!("{} Cups/Pc", cups),
            cup_count,
            LineUnit::Nos,
            cup_count * Component::TopCup.unit_weight().0,
        ),
        MaterialLineItem::accessory(
            "Bottom Cup (Pressed)",
            format!("{} Cups/Pc", cups),
            cup_count,
            LineUnit::Nos,
            cup_count * Component::BottomCup.unit_weight().0,
        ),
    ]
}

fn calculate_ledger(input: &CuplockInput, quantity: BatchQuantity) -> Vec<MaterialLineItem> {
    let qty = quantity as f64;
    let pipe_wpm = input.wall.pipe_class().weight_per_meter();
    let cut = input.ledger_cut_length();
    let pipe_length = cut * qty;
    let blades = BLADES_PER_LEDGER as f64 * qty;

    log::debug!("cuplock ledger {}m: cut {:.3}m", input.length_m, cut.0);

    vec![
        MaterialLineItem::raw(
            input.pipe_item_name(),
            format!(
                "Laser Cut: {:.0}mm (for {}m)",
                Millimeters::from(cut).0,
                input.length_m
            ),
            pipe_length.0,
            LineUnit::Meters,
            (pipe_wpm * pipe_length).0,
        ),
        MaterialLineItem::accessory(
            "Ledger Blade (Laser Blade)",
            format!("{} Pcs/Pc", BLADES_PER_LEDGER),
            blades,
            LineUnit::Nos,
            blades * Component::LedgerBlade.unit_weight().0,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_reference() {
        let rows = calculate(&CuplockInput::default(), 100);
        assert_eq!(rows.len(), 3);

        let pipe = &rows[0];
        assert_eq!(pipe.item, "48.3 OD MS Pipe (2.9mm)");
        assert_eq!(pipe.specification, "Length: 3m");
        assert!((pipe.quantity - 300.0).abs() < 1e-9);
        assert!((pipe.total_weight_kg - 975.0).abs() < 1e-6);
        assert!(pipe.is_raw_material);

        let top = &rows[1];
        assert_eq!(top.specification, "6 Cups/Pc");
        assert_eq!(top.quantity, 600.0);
        assert_eq!(top.unit, LineUnit::Nos);
        assert!((top.total_weight_kg - 219.0).abs() < 1e-6);
        assert!(!top.is_raw_material);

        let bottom = &rows[2];
        assert_eq!(bottom.quantity, 600.0);
        assert!((bottom.total_weight_kg - 108.0).abs() < 1e-6);
    }

    #[test]
    fn test_cup_rounding() {
        let mut input = CuplockInput::default();
        input.length_m = 2.75; // 5.5 nodes, ties away from zero
        assert_eq!(input.cups_per_piece(), 6.0);
        input.length_m = 2.6;
        assert_eq!(input.cups_per_piece(), 5.0);
        input.length_m = 1.0;
        assert_eq!(input.cups_per_piece(), 2.0);
    }

    #[test]
    fn test_heavier_wall() {
        let input = CuplockInput {
            wall: CuplockWall::Mm3_2,
            ..CuplockInput::default()
        };
        let rows = calculate(&input, 100);
        assert_eq!(rows[0].item, "48.3 OD MS Pipe (3.2mm)");
        assert!((rows[0].total_weight_kg - 300.0 * 3.56).abs() < 1e-6);
    }

    #[test]
    fn test_ledger_reference() {
        let input = CuplockInput {
            kind: CuplockKind::Ledger,
            length_m: 1.2,
            wall: CuplockWall::Mm2_9,
        };
        assert!((input.ledger_cut_length().0 - 1.14).abs() < 1e-12);

        let rows = calculate(&input, 50);
        assert_eq!(rows.len(), 2);

        let pipe = &rows[0];
        assert_eq!(pipe.specification, "Laser Cut: 1140mm (for 1.2m)");
        assert!((pipe.quantity - 57.0).abs() < 1e-9);
        assert!((pipe.total_weight_kg - 57.0 * 3.25).abs() < 1e-6);

        let blade = &rows[1];
        assert_eq!(blade.item, "Ledger Blade (Laser Blade)");
        assert_eq!(blade.specification, "2 Pcs/Pc");
        assert_eq!(blade.quantity, 100.0);
        assert!((blade.total_weight_kg - 17.5).abs() < 1e-9);
    }

    #[test]
    fn test_short_ledger_rejected_but_computed() {
        let input = CuplockInput {
            kind: CuplockKind::Ledger,
            length_m: 0.05,
            wall: CuplockWall::Mm2_9,
        };
        assert!(input.validate().is_err());
        let rows = calculate(&input, 10);
        assert!(rows[0].quantity < 0.0);
    }

    #[test]
    fn test_serialization() {
        let input = CuplockInput::default();
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"wall\":\"2.9mm\""));
        let roundtrip: CuplockInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}
