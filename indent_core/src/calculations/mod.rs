//! # Product Calculations
//!
//! One calculator per product family. Each follows the pattern:
//!
//! - `*Input` - Configuration for that family (JSON-serializable)
//! - `calculate(input, quantity) -> Vec<MaterialLineItem>` - Pure function
//!
//! [`calculate`] at this level is the dispatcher: it picks the calculator
//! matching the [`ProductConfiguration`] variant and wraps the rows in a
//! [`CalculationResult`] with the aggregated weight.
//!
//! ## Available Calculators
//!
//! - [`plate`] - Centering plate (sheet + angle framing)
//! - [`span`] - Telescopic span (fixed master BOM, optional geometry)
//! - [`cuplock`] - Cuplock vertical / ledger
//! - [`prop`] - Adjustable prop
//! - [`jack`] - Base jack / U-jack
//!
//! ## Example
//!
//! ```rust
//! use indent_core::calculations::{calculate, ProductConfiguration};
//! use indent_core::calculations::cuplock::{CuplockInput, CuplockKind, CuplockWall};
//!
//! let config = ProductConfiguration::Cuplock(CuplockInput {
//!     kind: CuplockKind::Vertical,
//!     length_m: 3.0,
//!     wall: CuplockWall::Mm2_9,
//! });
//!
//! let result = calculate(&config, 100);
//! assert_eq!(result.line_items.len(), 3);
//! assert!((result.total_weight_kg - (975.0 + 219.0 + 108.0)).abs() < 1e-6);
//! ```

pub mod cuplock;
pub mod jack;
pub mod plate;
pub mod prop;
pub mod span;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// Re-export commonly used types
pub use cuplock::CuplockInput;
pub use jack::JackInput;
pub use plate::PlateInput;
pub use prop::PropInput;
pub use span::SpanInput;

/// Number of finished pieces in one production run
pub type BatchQuantity = u32;

/// Batch size the order form starts with
pub const DEFAULT_BATCH_QUANTITY: BatchQuantity = 100;

// ============================================================================
// Product Catalogue
// ============================================================================

/// Product families the engine can estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    /// Telescopic span
    Span,
    /// Centering plate
    Plate,
    /// Cuplock vertical or ledger
    Cuplock,
    /// Adjustable prop
    Prop,
    /// Base jack or U-jack
    Jack,
}

impl ProductType {
    /// All product types, in catalogue order
    pub const ALL: [ProductType; 5] = [
        ProductType::Span,
        ProductType::Plate,
        ProductType::Cuplock,
        ProductType::Prop,
        ProductType::Jack,
    ];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductType::Span => "Telescopic Span",
            ProductType::Plate => "Centering Plate",
            ProductType::Cuplock => "Cuplock (Vertical/Ledger)",
            ProductType::Prop => "Adjustable Prop",
            ProductType::Jack => "Base / U-Jack",
        }
    }

    /// Parse a product tag coming from outside the type system.
    ///
    /// Accepts the display name (case-insensitive) or a short alias.
    /// Anything else is an integration error, not a recoverable condition.
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized = s.trim().to_lowercase();
        if let Some(product) = ProductType::ALL
            .iter()
            .find(|p| p.display_name().to_lowercase() == normalized)
        {
            return Ok(*product);
        }
        match normalized.replace(['-', '_', ' '], "").as_str() {
            "span" | "telescopicspan" => Ok(ProductType::Span),
            "plate" | "centeringplate" | "centring" | "centering" => Ok(ProductType::Plate),
            "cuplock" => Ok(ProductType::Cuplock),
            "prop" | "adjustableprop" => Ok(ProductType::Prop),
            "jack" | "basejack" | "ujack" => Ok(ProductType::Jack),
            _ => Err(CalcError::calculator_not_found(s)),
        }
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Configuration for exactly one product family.
///
/// ## JSON Serialization
///
/// ```json
/// { "type": "Plate", "dimension_unit": "mm", "length": 900.0, "breadth": 600.0,
///   "sheet_thickness_mm": 2.0, "angle_size": "25 x 25", "angle_thickness_mm": 5.0,
///   "framing": "2L3S" }
///
/// { "type": "Jack", "kind": "Base Jack", "rod_diameter": "30mm", "rod_length_in": 18.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProductConfiguration {
    /// Centering plate
    Plate(PlateInput),
    /// Telescopic span
    Span(SpanInput),
    /// Cuplock vertical / ledger
    Cuplock(CuplockInput),
    /// Adjustable prop
    Prop(PropInput),
    /// Base jack / U-jack
    Jack(JackInput),
}

impl ProductConfiguration {
    /// The product family this configuration belongs to
    pub fn product_type(&self) -> ProductType {
        match self {
            ProductConfiguration::Plate(_) => ProductType::Plate,
            ProductConfiguration::Span(_) => ProductType::Span,
            ProductConfiguration::Cuplock(_) => ProductType::Cuplock,
            ProductConfiguration::Prop(_) => ProductType::Prop,
            ProductConfiguration::Jack(_) => ProductType::Jack,
        }
    }

    /// Default configuration for a product family (the order form's
    /// starting values).
    pub fn default_for(product: ProductType) -> Self {
        match product {
            ProductType::Plate => ProductConfiguration::Plate(PlateInput::default()),
            ProductType::Span => ProductConfiguration::Span(SpanInput::default()),
            ProductType::Cuplock => ProductConfiguration::Cuplock(CuplockInput::default()),
            ProductType::Prop => ProductConfiguration::Prop(PropInput::default()),
            ProductType::Jack => ProductConfiguration::Jack(JackInput::default()),
        }
    }

    /// Validate the configuration before it is submitted.
    ///
    /// [`calculate`] never calls this; it is for the form/CLI layer, which
    /// owns input validation.
    pub fn validate(&self) -> CalcResult<()> {
        match self {
            ProductConfiguration::Plate(input) => input.validate(),
            ProductConfiguration::Span(input) => input.validate(),
            ProductConfiguration::Cuplock(input) => input.validate(),
            ProductConfiguration::Prop(input) => input.validate(),
            ProductConfiguration::Jack(input) => input.validate(),
        }
    }
}

// ============================================================================
// Line Items
// ============================================================================

/// Unit a line item's quantity is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineUnit {
    /// Running length of stock
    Meters,
    /// Cut pieces / blanks
    Pieces,
    /// Counted bought-out or forged parts
    Nos,
}

impl LineUnit {
    /// Label used in tables and exports
    pub fn label(&self) -> &'static str {
        match self {
            LineUnit::Meters => "Meters",
            LineUnit::Pieces => "Pieces",
            LineUnit::Nos => "Nos",
        }
    }
}

impl std::fmt::Display for LineUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One row of an indent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialLineItem {
    /// Item name, e.g. "HR Sheet (Plate Body)"
    pub item: String,
    /// Human-readable specification; display only
    pub specification: String,
    /// Quantity in `unit`
    pub quantity: f64,
    /// Unit of `quantity`
    pub unit: LineUnit,
    /// Total weight for the batch (kg); 0 when tracked by count only
    pub total_weight_kg: f64,
    /// Stock consumed by weight/length (true) or bought-out accessory (false)
    pub is_raw_material: bool,
}

impl MaterialLineItem {
    /// Raw-material row
    pub fn raw(
        item: impl Into<String>,
        specification: impl Into<String>,
        quantity: f64,
        unit: LineUnit,
        total_weight_kg: f64,
    ) -> Self {
        MaterialLineItem {
            item: item.into(),
            specification: specification.into(),
            quantity,
            unit,
            total_weight_kg,
            is_raw_material: true,
        }
    }

    /// Accessory (bought-out) row
    pub fn accessory(
        item: impl Into<String>,
        specification: impl Into<String>,
        quantity: f64,
        unit: LineUnit,
        total_weight_kg: f64,
    ) -> Self {
        MaterialLineItem {
            item: item.into(),
            specification: specification.into(),
            quantity,
            unit,
            total_weight_kg,
            is_raw_material: false,
        }
    }
}

// ============================================================================
// Result Envelope
// ============================================================================

/// Full indent for one configuration and batch.
///
/// ## JSON Example
///
/// ```json
/// {
///   "product_type": "Jack",
///   "product_name": "Base / U-Jack",
///   "quantity": 100,
///   "line_items": [
///     { "item": "Cup Nut", "specification": "180g each", "quantity": 100.0,
///       "unit": "Nos", "total_weight_kg": 18.0, "is_raw_material": false }
///   ],
///   "total_weight_kg": 371.746
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Product family
    pub product_type: ProductType,
    /// Display name of the product
    pub product_name: String,
    /// Batch quantity the rows were computed for
    pub quantity: BatchQuantity,
    /// Rows in calculator order
    pub line_items: Vec<MaterialLineItem>,
    /// Sum of every row's `total_weight_kg`
    pub total_weight_kg: f64,
}

impl CalculationResult {
    fn new(product_type: ProductType, quantity: BatchQuantity, line_items: Vec<MaterialLineItem>) -> Self {
        let total_weight_kg = line_items.iter().map(|i| i.total_weight_kg).sum();
        CalculationResult {
            product_type,
            product_name: product_type.display_name().to_string(),
            quantity,
            line_items,
            total_weight_kg,
        }
    }

    /// Raw-material rows, in order
    pub fn raw_materials(&self) -> impl Iterator<Item = &MaterialLineItem> {
        self.line_items.iter().filter(|i| i.is_raw_material)
    }

    /// Accessory rows, in order
    pub fn accessories(&self) -> impl Iterator<Item = &MaterialLineItem> {
        self.line_items.iter().filter(|i| !i.is_raw_material)
    }

    /// Weight of raw-material rows only
    pub fn raw_material_weight_kg(&self) -> f64 {
        self.raw_materials().map(|i| i.total_weight_kg).sum()
    }

    /// Weight of accessory rows only
    pub fn accessory_weight_kg(&self) -> f64 {
        self.accessories().map(|i| i.total_weight_kg).sum()
    }

    /// Find a row by exact item name
    pub fn line_item(&self, item: &str) -> Option<&MaterialLineItem> {
        self.line_items.iter().find(|i| i.item == item)
    }
}

// ============================================================================
// Dispatcher
// ============================================================================

/// Compute the indent for a configuration and batch quantity.
///
/// Pure and infallible: table misses fall back inside the calculators and
/// nonsensical numbers flow through the arithmetic unchanged.
pub fn calculate(config: &ProductConfiguration, quantity: BatchQuantity) -> CalculationResult {
    let product_type = config.product_type();
    log::debug!("calculating {} x {}", product_type, quantity);

    let line_items = match config {
        ProductConfiguration::Plate(input) => plate::calculate(input, quantity),
        ProductConfiguration::Span(input) => span::calculate(input, quantity),
        ProductConfiguration::Cuplock(input) => cuplock::calculate(input, quantity),
        ProductConfiguration::Prop(input) => prop::calculate(input, quantity),
        ProductConfiguration::Jack(input) => jack::calculate(input, quantity),
    };

    CalculationResult::new(product_type, quantity, line_items)
}

/// Tag-checked entry point for callers that carry the selected product
/// separately from its configuration (e.g. a form with a product selector).
///
/// Fails with `ConfigurationMismatch` if `config` belongs to a different
/// product than `product_type`.
pub fn dispatch(
    product_type: ProductType,
    config: &ProductConfiguration,
    quantity: BatchQuantity,
) -> CalcResult<CalculationResult> {
    let found = config.product_type();
    if found != product_type {
        return Err(CalcError::configuration_mismatch(
            product_type.display_name(),
            found.display_name(),
        ));
    }
    Ok(calculate(config, quantity))
}

/// Same as [`dispatch`], with the product given as an untyped tag.
pub fn dispatch_named(
    product_type: &str,
    config: &ProductConfiguration,
    quantity: BatchQuantity,
) -> CalcResult<CalculationResult> {
    dispatch(ProductType::from_str_flexible(product_type)?, config, quantity)
}

/// Reject a zero batch.
pub fn validate_quantity(quantity: BatchQuantity) -> CalcResult<()> {
    if quantity == 0 {
        return Err(CalcError::invalid_input(
            "quantity",
            "0",
            "Batch quantity must be at least 1",
        ));
    }
    Ok(())
}

/// Shared check for dimensions that must be finite and > 0
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Must be a positive number",
        ));
    }
    Ok(())
}

/// Millimeter-precision length for specification text, e.g. 1.9 -> "1.9"
pub(crate) fn format_length(meters: f64) -> String {
    let fixed = format!("{:.3}", meters);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::cuplock::{CuplockKind, CuplockWall};

    fn all_defaults() -> Vec<ProductConfiguration> {
        ProductType::ALL
            .iter()
            .map(|p| ProductConfiguration::default_for(*p))
            .collect()
    }

    #[test]
    fn test_total_is_sum_of_rows() {
        for config in all_defaults() {
            let result = calculate(&config, 37);
            let sum: f64 = result.line_items.iter().map(|i| i.total_weight_kg).sum();
            assert!((result.total_weight_kg - sum).abs() < 1e-9);
            assert!(
                (result.raw_material_weight_kg() + result.accessory_weight_kg() - sum).abs() < 1e-9
            );
        }
    }

    #[test]
    fn test_linear_scaling() {
        for config in all_defaults() {
            let small = calculate(&config, 10);
            let large = calculate(&config, 250);
            let ratio = 25.0;
            assert_eq!(small.line_items.len(), large.line_items.len());
            for (a, b) in small.line_items.iter().zip(large.line_items.iter()) {
                assert_eq!(a.item, b.item);
                assert!(
                    (b.quantity - a.quantity * ratio).abs() < 1e-6,
                    "{} quantity does not scale",
                    a.item
                );
                assert!(
                    (b.total_weight_kg - a.total_weight_kg * ratio).abs() < 1e-6,
                    "{} weight does not scale",
                    a.item
                );
            }
        }
    }

    #[test]
    fn test_zero_quantity_is_all_zero() {
        for config in all_defaults() {
            let result = calculate(&config, 0);
            assert_eq!(result.total_weight_kg, 0.0);
            assert!(result.line_items.iter().all(|i| i.quantity == 0.0));
        }
    }

    #[test]
    fn test_product_name_matches_variant() {
        for product in ProductType::ALL {
            let result = calculate(&ProductConfiguration::default_for(product), 1);
            assert_eq!(result.product_type, product);
            assert_eq!(result.product_name, product.display_name());
        }
    }

    #[test]
    fn test_dispatch_mismatch() {
        let config = ProductConfiguration::Jack(JackInput::default());
        let err = dispatch(ProductType::Prop, &config, 10).unwrap_err();
        assert_eq!(err.error_code(), "CONFIGURATION_MISMATCH");
        assert!(dispatch(ProductType::Jack, &config, 10).is_ok());
    }

    #[test]
    fn test_dispatch_named_unknown_product() {
        let config = ProductConfiguration::Span(SpanInput::default());
        let err = dispatch_named("Scaffold Tower", &config, 10).unwrap_err();
        assert_eq!(
            err,
            CalcError::calculator_not_found("Scaffold Tower")
        );
    }

    #[test]
    fn test_product_type_parsing() {
        assert_eq!(ProductType::from_str_flexible("Centering Plate").unwrap(), ProductType::Plate);
        assert_eq!(
            ProductType::from_str_flexible("cuplock (vertical/ledger)").unwrap(),
            ProductType::Cuplock
        );
        assert_eq!(ProductType::from_str_flexible("U-Jack").unwrap(), ProductType::Jack);
        assert_eq!(ProductType::from_str_flexible(" prop ").unwrap(), ProductType::Prop);
        assert!(ProductType::from_str_flexible("tower").is_err());
    }

    #[test]
    fn test_raw_and_accessory_split_preserves_order() {
        let config = ProductConfiguration::Cuplock(CuplockInput {
            kind: CuplockKind::Vertical,
            length_m: 3.0,
            wall: CuplockWall::Mm2_9,
        });
        let result = calculate(&config, 100);
        let raw: Vec<&str> = result.raw_materials().map(|i| i.item.as_str()).collect();
        let acc: Vec<&str> = result.accessories().map(|i| i.item.as_str()).collect();
        assert_eq!(raw, vec!["48.3 OD MS Pipe (2.9mm)"]);
        assert_eq!(acc, vec!["Top Cup (Forged)", "Bottom Cup (Pressed)"]);
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(0).is_err());
    }

    #[test]
    fn test_configuration_serialization() {
        for config in all_defaults() {
            let json = serde_json::to_string(&config).unwrap();
            assert!(json.contains("\"type\":"));
            let parsed: ProductConfiguration = serde_json::from_str(&json).unwrap();
            assert_eq!(config, parsed);
        }
    }

    #[test]
    fn test_unknown_configuration_tag_rejected() {
        let json = r#"{ "type": "Tower", "height_m": 6.0 }"#;
        assert!(serde_json::from_str::<ProductConfiguration>(json).is_err());
    }

    #[test]
    fn test_defaults_validate() {
        for config in all_defaults() {
            assert!(config.validate().is_ok(), "{:?} should validate", config);
        }
    }

    #[test]
    fn test_lookup_misses_pass_validation() {
        let jack = ProductConfiguration::Jack(JackInput {
            rod_diameter: "36mm".to_string(),
            ..JackInput::default()
        });
        assert!(jack.validate().is_ok());
        let result = calculate(&jack, 10);
        assert!(result.total_weight_kg > 0.0);

        let plate = ProductConfiguration::Plate(PlateInput {
            angle_size: "60 x 60".to_string(),
            ..PlateInput::default()
        });
        assert!(plate.validate().is_ok());
        assert_eq!(calculate(&plate, 10).line_items[1].total_weight_kg, 0.0);
    }

    #[test]
    fn test_format_length() {
        assert_eq!(format_length(1.9000000000000001), "1.9");
        assert_eq!(format_length(2.0), "2");
        assert_eq!(format_length(0.0), "0");
    }
}
