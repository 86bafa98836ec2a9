//! # Material Property Tables
//!
//! Static reference data used by the product calculators. Everything here
//! is compiled in and read-only; lookups never fail loudly.
//!
//! ## Tables
//!
//! - **Angles**: MS equal angle weight per meter by (size, thickness)
//! - **Pipes**: weight per meter by outer-diameter / wall-thickness class
//! - **Rods**: round/threaded rod weight per meter by nominal diameter
//! - **Components**: fixed unit weights of forged/pressed/bought-out parts
//!
//! ## Example
//!
//! ```rust
//! use indent_core::materials::{find_angle, thicknesses_for, PipeClass, rod_weight_per_meter};
//!
//! let angle = find_angle("25 x 25", 5.0).unwrap();
//! assert_eq!(angle.weight_per_meter, 1.8);
//! assert_eq!(thicknesses_for("75 x 75"), vec![5.0, 6.0, 8.0, 10.0]);
//!
//! assert_eq!(PipeClass::Od48Wall29.weight_per_meter().0, 3.25);
//! // Unknown rod labels fall back to the 30 mm weight
//! assert_eq!(rod_weight_per_meter("99mm").0, 5.55);
//! ```

pub mod angle;
pub mod components;
pub mod pipe;
pub mod rod;

pub use angle::{
    angle_sizes, angle_weight_per_meter, find_angle, sync_angle_thickness, thicknesses_for,
    AngleSpec, ANGLE_WEIGHT_TABLE, FALLBACK_ANGLE_THICKNESS_MM,
};
pub use components::{component_weight, Component, PROP_COIL_LEN, PROP_HANDLE_LEN};
pub use pipe::{pipe_weight_per_meter, PipeClass};
pub use rod::{rod_labels, rod_weight_per_meter, try_rod_weight_per_meter, DEFAULT_ROD_WEIGHT_PER_METER};

/// Mild-steel sheet weight in kg per m² per mm of thickness (density 7850 kg/m³)
pub const STEEL_SHEET_KG_PER_M2_MM: f64 = 7.85;
