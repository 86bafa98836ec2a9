//! MS Equal Angle Weights
//!
//! Weight per meter of equal-leg mild-steel angles, keyed by cross-section
//! label ("25 x 25") and leg thickness in mm. `(size, thickness)` pairs are
//! unique; a size may carry several thicknesses.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::units::KgPerMeter;

/// Thickness selected when a size has no rows at all (mm)
pub const FALLBACK_ANGLE_THICKNESS_MM: f64 = 5.0;

/// One row of the angle weight table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AngleSpec {
    /// Cross-section label, e.g. "25 x 25"
    pub size: &'static str,
    /// Leg thickness (mm)
    pub thickness: f64,
    /// Linear weight (kg/m)
    pub weight_per_meter: f64,
}

const fn row(size: &'static str, thickness: f64, weight_per_meter: f64) -> AngleSpec {
    AngleSpec {
        size,
        thickness,
        weight_per_meter,
    }
}

/// Master angle weight table, ordered by size then thickness
pub static ANGLE_WEIGHT_TABLE: [AngleSpec; 26] = [
    row("20 x 20", 3.0, 0.9),
    row("20 x 20", 4.0, 1.1),
    row("25 x 25", 3.0, 1.1),
    row("25 x 25", 4.0, 1.4),
    row("25 x 25", 5.0, 1.8),
    row("25 x 25", 6.0, 2.1),
    row("30 x 30", 3.0, 1.4),
    row("30 x 30", 4.0, 1.8),
    row("30 x 30", 5.0, 2.2),
    row("30 x 30", 6.0, 2.6),
    row("35 x 35", 3.0, 1.6),
    row("35 x 35", 4.0, 2.1),
    row("35 x 35", 5.0, 2.6),
    row("35 x 35", 6.0, 3.0),
    row("40 x 40", 3.0, 1.8),
    row("40 x 40", 4.0, 2.4),
    row("40 x 40", 5.0, 3.0),
    row("40 x 40", 6.0, 3.5),
    row("50 x 50", 3.0, 2.3),
    row("50 x 50", 4.0, 3.0),
    row("50 x 50", 5.0, 3.8),
    row("50 x 50", 6.0, 4.5),
    row("75 x 75", 5.0, 5.7),
    row("75 x 75", 6.0, 6.8),
    row("75 x 75", 8.0, 8.9),
    row("75 x 75", 10.0, 11.0),
];

/// Rows grouped by size, thicknesses ascending
static ANGLES_BY_SIZE: Lazy<HashMap<&'static str, Vec<&'static AngleSpec>>> = Lazy::new(|| {
    let mut index: HashMap<&'static str, Vec<&'static AngleSpec>> = HashMap::new();
    for spec in ANGLE_WEIGHT_TABLE.iter() {
        index.entry(spec.size).or_default().push(spec);
    }
    for rows in index.values_mut() {
        rows.sort_by(|a, b| a.thickness.total_cmp(&b.thickness));
    }
    index
});

fn same_thickness(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Look up an angle by size label and thickness.
///
/// Returns `None` on a miss; callers treat that as zero weight.
pub fn find_angle(size: &str, thickness_mm: f64) -> Option<&'static AngleSpec> {
    ANGLES_BY_SIZE
        .get(size)?
        .iter()
        .copied()
        .find(|spec| same_thickness(spec.thickness, thickness_mm))
}

/// Linear weight for an angle, or zero if the combination is not tabulated.
pub fn angle_weight_per_meter(size: &str, thickness_mm: f64) -> KgPerMeter {
    match find_angle(size, thickness_mm) {
        Some(spec) => KgPerMeter(spec.weight_per_meter),
        None => {
            log::warn!(
                "no angle row for {} x {}mm, counting zero weight",
                size,
                thickness_mm
            );
            KgPerMeter(0.0)
        }
    }
}

/// Available thicknesses for a size, ascending. Empty for unknown sizes.
pub fn thicknesses_for(size: &str) -> Vec<f64> {
    ANGLES_BY_SIZE
        .get(size)
        .map(|rows| rows.iter().map(|spec| spec.thickness).collect())
        .unwrap_or_default()
}

/// Distinct size labels in table order
pub fn angle_sizes() -> Vec<&'static str> {
    let mut sizes: Vec<&'static str> = Vec::new();
    for spec in ANGLE_WEIGHT_TABLE.iter() {
        if !sizes.contains(&spec.size) {
            sizes.push(spec.size);
        }
    }
    sizes
}

/// Keep a thickness selection valid for `size`.
///
/// Returns `current` when `(size, current)` is tabulated, otherwise the
/// thinnest available thickness for `size`, otherwise
/// [`FALLBACK_ANGLE_THICKNESS_MM`].
pub fn sync_angle_thickness(size: &str, current_mm: f64) -> f64 {
    let available = thicknesses_for(size);
    if available.iter().any(|&t| same_thickness(t, current_mm)) {
        return current_mm;
    }
    let synced = available.first().copied().unwrap_or(FALLBACK_ANGLE_THICKNESS_MM);
    log::debug!(
        "angle thickness {}mm not offered for {}, reset to {}mm",
        current_mm,
        size,
        synced
    );
    synced
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_are_unique() {
        for (i, a) in ANGLE_WEIGHT_TABLE.iter().enumerate() {
            for b in ANGLE_WEIGHT_TABLE.iter().skip(i + 1) {
                assert!(
                    !(a.size == b.size && same_thickness(a.thickness, b.thickness)),
                    "duplicate row {} x {}",
                    a.size,
                    a.thickness
                );
            }
        }
    }

    #[test]
    fn test_all_weights_positive() {
        assert!(ANGLE_WEIGHT_TABLE
            .iter()
            .all(|s| s.thickness > 0.0 && s.weight_per_meter > 0.0));
    }

    #[test]
    fn test_find_angle() {
        let spec = find_angle("50 x 50", 6.0).unwrap();
        assert_eq!(spec.weight_per_meter, 4.5);
        assert!(find_angle("50 x 50", 8.0).is_none());
        assert!(find_angle("60 x 60", 5.0).is_none());
    }

    #[test]
    fn test_miss_weighs_nothing() {
        assert_eq!(angle_weight_per_meter("20 x 20", 6.0).0, 0.0);
        assert_eq!(angle_weight_per_meter("20 x 20", 4.0).0, 1.1);
    }

    #[test]
    fn test_thicknesses_ascending() {
        assert_eq!(thicknesses_for("20 x 20"), vec![3.0, 4.0]);
        assert_eq!(thicknesses_for("25 x 25"), vec![3.0, 4.0, 5.0, 6.0]);
        assert!(thicknesses_for("nope").is_empty());
    }

    #[test]
    fn test_angle_sizes() {
        assert_eq!(
            angle_sizes(),
            vec!["20 x 20", "25 x 25", "30 x 30", "35 x 35", "40 x 40", "50 x 50", "75 x 75"]
        );
    }

    #[test]
    fn test_sync_keeps_valid_selection() {
        assert_eq!(sync_angle_thickness("25 x 25", 5.0), 5.0);
        assert_eq!(sync_angle_thickness("75 x 75", 10.0), 10.0);
    }

    #[test]
    fn test_sync_resets_to_thinnest() {
        // 5mm is not offered in 20 x 20
        assert_eq!(sync_angle_thickness("20 x 20", 5.0), 3.0);
        // 3mm is not offered in 75 x 75
        assert_eq!(sync_angle_thickness("75 x 75", 3.0), 5.0);
    }

    #[test]
    fn test_sync_unknown_size_uses_fallback() {
        assert_eq!(sync_angle_thickness("90 x 90", 3.0), FALLBACK_ANGLE_THICKNESS_MM);
    }

    #[test]
    fn test_sync_never_leaves_invalid_pair() {
        let all_thicknesses: Vec<f64> = ANGLE_WEIGHT_TABLE.iter().map(|s| s.thickness).collect();
        for size in angle_sizes() {
            for &current in &all_thicknesses {
                let synced = sync_angle_thickness(size, current);
                assert!(
                    find_angle(size, synced).is_some(),
                    "{} kept invalid thickness {}",
                    size,
                    synced
                );
            }
        }
    }
}
