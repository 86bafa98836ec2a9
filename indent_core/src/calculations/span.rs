//! # Telescopic Span
//!
//! Spans are built to a fixed master bill of materials, so a plain span
//! indent is the master table scaled by batch quantity.
//!
//! An optional [`SpanGeometry`] computes the body sheet from its actual size
//! and adds a perimeter angle run, the same way plates are costed.

use serde::{Deserialize, Serialize};

use super::{require_positive, BatchQuantity, LineUnit, MaterialLineItem};
use crate::errors::CalcResult;
use crate::materials::{angle_weight_per_meter, STEEL_SHEET_KG_PER_M2_MM};
use crate::units::{Kilograms, Meters, Millimeters, SqM, MM_PER_METER};

/// One row of the span master BOM
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpanMaterial {
    /// Item name
    pub item: &'static str,
    /// What the item is used for
    pub specification: &'static str,
    /// Weight per span (kg)
    pub weight_kg: f64,
}

/// Master BOM, per finished span. The first row is the body sheet.
pub static SPAN_MASTER_BOM: [SpanMaterial; 6] = [
    SpanMaterial { item: "HR Sheet", specification: "Main Body Sheet", weight_kg: 15.34 },
    SpanMaterial { item: "10mm MS Round Rod", specification: "Lattice Support", weight_kg: 8.40 },
    SpanMaterial { item: "T-Angle", specification: "Spine Member", weight_kg: 7.75 },
    SpanMaterial { item: "MS Flat 65x5 (Patti)", specification: "Support Strip", weight_kg: 4.80 },
    SpanMaterial { item: "MS Flat 40x5 (Patti)", specification: "Outer Strip", weight_kg: 2.00 },
    SpanMaterial { item: "75x5 MS Angle", specification: "End Base Angles", weight_kg: 1.92 },
];

/// I-bolt & nut sets per span
pub const I_BOLT_SETS_PER_SPAN: u32 = 2;

/// Actual body geometry for a non-standard span
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanGeometry {
    /// Body length (mm)
    pub length_mm: f64,
    /// Body breadth (mm)
    pub breadth_mm: f64,
    /// Body sheet thickness (mm)
    pub sheet_thickness_mm: f64,
    /// Perimeter angle size label
    pub angle_size: String,
    /// Perimeter angle thickness (mm)
    pub angle_thickness_mm: f64,
}

impl SpanGeometry {
    /// Body sheet weight per span
    pub fn sheet_weight_per_piece(&self) -> Kilograms {
        let area = SqM::from_mm(Millimeters(self.length_mm), Millimeters(self.breadth_mm));
        Kilograms(area.0 * self.sheet_thickness_mm * STEEL_SHEET_KG_PER_M2_MM)
    }

    /// Perimeter angle run per span
    pub fn perimeter(&self) -> Meters {
        Meters(2.0 * (self.length_mm + self.breadth_mm) / MM_PER_METER)
    }

    fn validate(&self) -> CalcResult<()> {
        require_positive("length_mm", self.length_mm)?;
        require_positive("breadth_mm", self.breadth_mm)?;
        require_positive("sheet_thickness_mm", self.sheet_thickness_mm)?;
        require_positive("angle_thickness_mm", self.angle_thickness_mm)
    }
}

/// Span configuration. Empty for standard spans.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpanInput {
    /// Optional actual geometry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<SpanGeometry>,
}

impl SpanInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        match &self.geometry {
            Some(geometry) => geometry.validate(),
            None => Ok(()),
        }
    }
}

/// Calculate the span indent.
pub fn calculate(input: &SpanInput, quantity: BatchQuantity) -> Vec<MaterialLineItem> {
    let qty = quantity as f64;
    let mut rows = Vec::with_capacity(SPAN_MASTER_BOM.len() + 2);

    let fixed_rows = match &input.geometry {
        None => &SPAN_MASTER_BOM[..],
        Some(geometry) => {
            let perimeter = geometry.perimeter();
            let angle_weight = angle_weight_per_meter(&geometry.angle_size, geometry.angle_thickness_mm) * perimeter;
            rows.push(MaterialLineItem::raw(
                SPAN_MASTER_BOM[0].item,
                format!(
                    "{}mm Thick ({}x{}mm)",
                    geometry.sheet_thickness_mm, geometry.length_mm, geometry.breadth_mm
                ),
                qty,
                LineUnit::Pieces,
                geometry.sheet_weight_per_piece().0 * qty,
            ));
            rows.push(MaterialLineItem::raw(
                "MS Angle (Perimeter)",
                format!("{} x {}mm", geometry.angle_size, geometry.angle_thickness_mm),
                perimeter.0 * qty,
                LineUnit::Meters,
                angle_weight.0 * qty,
            ));
            &SPAN_MASTER_BOM[1..]
        }
    };

    for material in fixed_rows {
        rows.push(MaterialLineItem::raw(
            material.item,
            material.specification,
            qty,
            LineUnit::Pieces,
            material.weight_kg * qty,
        ));
    }

    rows.push(MaterialLineItem::accessory(
        "I-Bolt & Nut Set",
        format!("{} Sets per Span", I_BOLT_SETS_PER_SPAN),
        I_BOLT_SETS_PER_SPAN as f64 * qty,
        LineUnit::Nos,
        0.0,
    ));

    rows
}
