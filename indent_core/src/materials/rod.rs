//! Round / threaded rod weights by nominal diameter label ("30mm").

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::errors::{CalcError, CalcResult};
use crate::units::KgPerMeter;

/// Linear weight used when a diameter label is not tabulated (30 mm rod)
pub const DEFAULT_ROD_WEIGHT_PER_METER: f64 = 5.55;

const ROD_WEIGHTS: [(&str, f64); 4] = [
    ("10mm", 0.617),
    ("28mm", 4.83),
    ("30mm", 5.55),
    ("32mm", 6.31),
];

static ROD_INDEX: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| ROD_WEIGHTS.iter().copied().collect());

/// Tabulated diameter labels, smallest first
pub fn rod_labels() -> Vec<&'static str> {
    ROD_WEIGHTS.iter().map(|(label, _)| *label).collect()
}

/// Strict lookup for callers that want to reject unknown labels up front.
pub fn try_rod_weight_per_meter(label: &str) -> CalcResult<KgPerMeter> {
    ROD_INDEX
        .get(label)
        .map(|&w| KgPerMeter(w))
        .ok_or_else(|| CalcError::material_not_found(format!("rod {}", label)))
}

/// Linear weight for a rod label, falling back to
/// [`DEFAULT_ROD_WEIGHT_PER_METER`] on a miss.
pub fn rod_weight_per_meter(label: &str) -> KgPerMeter {
    try_rod_weight_per_meter(label).unwrap_or_else(|_| {
        log::warn!(
            "unknown rod diameter '{}', using {} kg/m",
            label,
            DEFAULT_ROD_WEIGHT_PER_METER
        );
        KgPerMeter(DEFAULT_ROD_WEIGHT_PER_METER)
    })
}
