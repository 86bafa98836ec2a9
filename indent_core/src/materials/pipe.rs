//! MS Pipe Weights
//!
//! Linear weights for the ERW pipe classes used across the cuplock and prop
//! product lines.

use serde::{Deserialize, Serialize};

use crate::units::KgPerMeter;

/// Pipe class by outer diameter and wall thickness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PipeClass {
    /// 48.3 mm OD, 3.2 mm wall
    #[serde(rename = "OD48_32")]
    Od48Wall32,
    /// 48.3 mm OD, 2.9 mm wall (cuplock default, prop inner)
    #[serde(rename = "OD48_29")]
    Od48Wall29,
    /// 60 mm OD, 3.2 mm wall (prop outer)
    #[serde(rename = "OD60_32")]
    Od60Wall32,
    /// 60 mm OD, 3.5 mm wall (2" coil pipe)
    #[serde(rename = "OD60_35")]
    Od60Wall35,
}

impl PipeClass {
    /// All pipe classes for iteration
    pub const ALL: [PipeClass; 4] = [
        PipeClass::Od48Wall32,
        PipeClass::Od48Wall29,
        PipeClass::Od60Wall32,
        PipeClass::Od60Wall35,
    ];

    /// Linear weight (kg/m)
    pub fn weight_per_meter(&self) -> KgPerMeter {
        KgPerMeter(match self {
            PipeClass::Od48Wall32 => 3.56,
            PipeClass::Od48Wall29 => 3.25,
            PipeClass::Od60Wall32 => 4.48,
            PipeClass::Od60Wall35 => 4.88,
        })
    }

    /// Nominal outer diameter (mm)
    pub fn outer_diameter_mm(&self) -> f64 {
        match self {
            PipeClass::Od48Wall32 | PipeClass::Od48Wall29 => 48.3,
            PipeClass::Od60Wall32 | PipeClass::Od60Wall35 => 60.0,
        }
    }

    /// Wall thickness (mm)
    pub fn wall_thickness_mm(&self) -> f64 {
        match self {
            PipeClass::Od48Wall32 | PipeClass::Od60Wall32 => 3.2,
            PipeClass::Od48Wall29 => 2.9,
            PipeClass::Od60Wall35 => 3.5,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            PipeClass::Od48Wall32 => "48.3 OD x 3.2mm",
            PipeClass::Od48Wall29 => "48.3 OD x 2.9mm",
            PipeClass::Od60Wall32 => "60 OD x 3.2mm",
            PipeClass::Od60Wall35 => "60 OD x 3.5mm",
        }
    }
}

impl std::fmt::Display for PipeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Linear weight of a pipe class (kg/m)
pub fn pipe_weight_per_meter(class: PipeClass) -> KgPerMeter {
    class.weight_per_meter()
}
