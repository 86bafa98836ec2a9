//! Fixed unit weights of discrete components and the fixed cut lengths of
//! the prop assembly.

use serde::{Deserialize, Serialize};

use crate::units::{Kilograms, Meters};

/// Coil pipe length consumed by the prop's telescoping joint
pub const PROP_COIL_LEN: Meters = Meters(0.3);

/// 10 mm round handle / pin length per prop
pub const PROP_HANDLE_LEN: Meters = Meters(0.5);

/// Discrete component with a fixed unit weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Component {
    /// Forged cuplock top cup
    TopCup,
    /// Pressed cuplock bottom cup
    BottomCup,
    /// Laser-cut ledger end blade
    LedgerBlade,
    /// Adjustable prop nut
    PropNut,
    /// Jack cup nut
    CupNut,
    /// Flat base / U-plate / L-angle head (shared 1 kg blank)
    JackFlatBase,
}

impl Component {
    /// All components for iteration
    pub const ALL: [Component; 6] = [
        Component::TopCup,
        Component::BottomCup,
        Component::LedgerBlade,
        Component::PropNut,
        Component::CupNut,
        Component::JackFlatBase,
    ];

    /// Unit weight
    pub fn unit_weight(&self) -> Kilograms {
        Kilograms(match self {
            Component::TopCup => 0.365,
            Component::BottomCup => 0.18,
            Component::LedgerBlade => 0.175,
            Component::PropNut => 0.55,
            Component::CupNut => 0.18,
            Component::JackFlatBase => 1.0,
        })
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Component::TopCup => "Top Cup",
            Component::BottomCup => "Bottom Cup",
            Component::LedgerBlade => "Ledger Blade",
            Component::PropNut => "Prop Nut",
            Component::CupNut => "Cup Nut",
            Component::JackFlatBase => "Jack Flat Base",
        }
    }
}

/// Unit weight of a component
pub fn component_weight(component: Component) -> Kilograms {
    component.unit_weight()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_weights() {
        assert_eq!(component_weight(Component::TopCup).0, 0.365);
        assert_eq!(component_weight(Component::BottomCup).0, 0.18);
        assert_eq!(component_weight(Component::LedgerBlade).0, 0.175);
        assert_eq!(component_weight(Component::PropNut).0, 0.55);
        assert_eq!(component_weight(Component::CupNut).0, 0.18);
        assert_eq!(component_weight(Component::JackFlatBase).0, 1.0);
    }

    #[test]
    fn test_all_positive() {
        assert!(Component::ALL.iter().all(|c| c.unit_weight().0 > 0.0));
        assert!(PROP_COIL_LEN.0 > 0.0 && PROP_HANDLE_LEN.0 > 0.0);
    }
}
