//! # Adjustable Prop
//!
//! Outer tube (60 OD) with a 2" coil pipe sleeve at the top, a sliding
//! 48 OD inner tube, a 10 mm round handle/pin, flat plates at both ends and
//! a prop nut.

use serde::{Deserialize, Serialize};

use super::{format_length, require_positive, BatchQuantity, LineUnit, MaterialLineItem};
use crate::errors::{CalcError, CalcResult};
use crate::materials::{rod_weight_per_meter, Component, PipeClass, PROP_COIL_LEN, PROP_HANDLE_LEN};
use crate::units::Meters;

/// Head fitted to the inner tube
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PropTop {
    /// Flat base plate
    #[default]
    Plate,
    /// U-head
    #[serde(rename = "U-Head")]
    UHead,
    /// L-angle head
    #[serde(rename = "L-Angle")]
    LAngle,
}

impl PropTop {
    /// Item name of the inner-tube head
    pub fn item_name(&self) -> &'static str {
        match self {
            PropTop::Plate => "Base Plate (Inner)",
            PropTop::UHead => "U-Head (Inner)",
            PropTop::LAngle => "L-Angle (Inner)",
        }
    }
}

/// Adjustable prop configuration.
///
/// ## JSON Example
///
/// ```json
/// { "outer_length_m": 2.0, "inner_length_m": 2.0, "top": "U-Head" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropInput {
    /// Overall outer tube length including the coil sleeve (m)
    pub outer_length_m: f64,

    /// Inner tube length (m)
    pub inner_length_m: f64,

    /// Inner tube head
    pub top: PropTop,
}

impl Default for PropInput {
    fn default() -> Self {
        PropInput {
            outer_length_m: 2.0,
            inner_length_m: 2.0,
            top: PropTop::Plate,
        }
    }
}

impl PropInput {
    /// Outer tube cut length, excluding the coil sleeve
    pub fn outer_cut_length(&self) -> Meters {
        Meters(self.outer_length_m) - PROP_COIL_LEN
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("outer_length_m", self.outer_length_m)?;
        require_positive("inner_length_m", self.inner_length_m)?;
        if self.outer_cut_length().0 <= 0.0 {
            return Err(CalcError::invalid_input(
                "outer_length_m",
                self.outer_length_m.to_string(),
                "Outer tube must be longer than the 300 mm coil sleeve",
            ));
        }
        Ok(())
    }
}

/// Calculate the prop indent.
pub fn calculate(input: &PropInput, quantity: BatchQuantity) -> Vec<MaterialLineItem> {
    let qty = quantity as f64;
    let outer_cut = input.outer_cut_length();
    let plate_kg = Component::JackFlatBase.unit_weight().0;

    let outer = outer_cut * qty;
    let coil = PROP_COIL_LEN * qty;
    let inner = Meters(input.inner_length_m) * qty;
    let handle = PROP_HANDLE_LEN * qty;

    vec![
        MaterialLineItem::raw(
            "60 OD MS Pipe (Outer)",
            format!("{}m cut", format_length(outer_cut.0)),
            outer.0,
            LineUnit::Meters,
            (PipeClass::Od60Wall32.weight_per_meter() * outer).0,
        ),
        MaterialLineItem::raw(
            "2-inch Coil Pipe",
            "300mm length",
            coil.0,
            LineUnit::Meters,
            (PipeClass::Od60Wall35.weight_per_meter() * coil).0,
        ),
        MaterialLineItem::raw(
            "48 OD MS Pipe (Inner)",
            format!("{}m", input.inner_length_m),
            inner.0,
            LineUnit::Meters,
            (PipeClass::Od48Wall29.weight_per_meter() * inner).0,
        ),
        MaterialLineItem::raw(
            "10mm Round Handle / Pin",
            "500mm length",
            handle.0,
            LineUnit::Meters,
            (rod_weight_per_meter("10mm") * handle).0,
        ),
        MaterialLineItem::raw("Base Plate (Outer)", "150x6 Flat", qty, LineUnit::Nos, plate_kg * qty),
        MaterialLineItem::raw(input.top.item_name(), "1 kg per piece", qty, LineUnit::Nos, plate_kg * qty),
        MaterialLineItem::accessory(
            "Prop Nut",
            "Standard (550g)",
            qty,
            LineUnit::Nos,
            Component::PropNut.unit_weight().0 * qty,
        ),
    ]
}
