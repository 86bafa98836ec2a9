//! # Indent Requests
//!
//! An [`IndentRequest`] is the saved form of one order: who it is for, which
//! product configuration, and how many pieces. Requests serialize to JSON
//! `.indent.json` files; computing a request yields an [`Indent`], which is
//! what the exporters consume.
//!
//! ## Structure
//!
//! ```text
//! IndentRequest
//! ├── meta: IndentMeta (version, company, reference, prepared_by, created)
//! ├── product: ProductConfiguration (tagged by "type")
//! └── quantity: BatchQuantity
//! ```
//!
//! ## Example
//!
//! ```rust
//! use indent_core::calculations::{ProductConfiguration, ProductType};
//! use indent_core::indent::IndentRequest;
//!
//! let request = IndentRequest::new(ProductConfiguration::default_for(ProductType::Jack), 100);
//! let indent = request.calculate();
//!
//! assert_eq!(indent.result.line_items.len(), 3);
//! assert_eq!(indent.file_stem(), "Aditya_Indent_Base");
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculations::{self, BatchQuantity, CalculationResult, ProductConfiguration};
use crate::errors::CalcResult;

/// Current schema version for request files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Company printed on every indent unless overridden
pub const DEFAULT_COMPANY: &str = "ADITYA EQUIPMENTS";

/// Request metadata stored in the file header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndentMeta {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Manufacturer name shown in export headings
    #[serde(default = "default_company")]
    pub company: String,

    /// Order or job reference
    #[serde(default)]
    pub reference: String,

    /// Who prepared the indent
    #[serde(default)]
    pub prepared_by: String,

    /// When the request was created
    pub created: DateTime<Utc>,
}

fn default_company() -> String {
    DEFAULT_COMPANY.to_string()
}

impl Default for IndentMeta {
    fn default() -> Self {
        IndentMeta {
            version: SCHEMA_VERSION.to_string(),
            company: default_company(),
            reference: String::new(),
            prepared_by: String::new(),
            created: Utc::now(),
        }
    }
}

/// One production order: a product configuration and a batch size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndentRequest {
    /// Header
    pub meta: IndentMeta,

    /// What to build
    pub product: ProductConfiguration,

    /// How many
    pub quantity: BatchQuantity,
}

impl IndentRequest {
    /// Create a request with default metadata.
    pub fn new(product: ProductConfiguration, quantity: BatchQuantity) -> Self {
        IndentRequest {
            meta: IndentMeta::default(),
            product,
            quantity,
        }
    }

    /// Set the order reference
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.meta.reference = reference.into();
        self
    }

    /// Set who prepared the indent
    pub fn with_prepared_by(mut self, prepared_by: impl Into<String>) -> Self {
        self.meta.prepared_by = prepared_by.into();
        self
    }

    /// Override the company name
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.meta.company = company.into();
        self
    }

    /// Check the configuration and quantity before calculating.
    pub fn validate(&self) -> CalcResult<()> {
        calculations::validate_quantity(self.quantity)?;
        self.product.validate()
    }

    /// Compute the indent. Never fails; see [`IndentRequest::validate`].
    pub fn calculate(&self) -> Indent {
        Indent {
            meta: self.meta.clone(),
            result: calculations::calculate(&self.product, self.quantity),
        }
    }
}

/// A computed indent, ready to print or export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indent {
    /// Header copied from the request
    pub meta: IndentMeta,

    /// Engine output
    pub result: CalculationResult,
}

impl Indent {
    /// Base name for exported files, e.g. `Aditya_Indent_Centering`.
    ///
    /// First word of the company (title-cased) and first word of the
    /// product name.
    pub fn file_stem(&self) -> String {
        let company = first_word(&self.meta.company);
        let product = first_word(&self.result.product_name);
        format!("{}_Indent_{}", title_case(company), product)
    }

    /// Company heading, upper-cased as printed
    pub fn company_heading(&self) -> String {
        self.meta.company.trim().to_uppercase()
    }
}

fn first_word(s: &str) -> &str {
    s.split_whitespace().next().unwrap_or("")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{ProductType, PropInput};

    #[test]
    fn test_request_creation() {
        let request = IndentRequest::new(ProductConfiguration::Prop(PropInput::default()), 40)
            .with_reference("PO-118")
            .with_prepared_by("Stores");
        assert_eq!(request.meta.version, SCHEMA_VERSION);
        assert_eq!(request.meta.company, DEFAULT_COMPANY);
        assert_eq!(request.meta.reference, "PO-118");
        assert_eq!(request.meta.prepared_by, "Stores");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_serialization() {
        let request = IndentRequest::new(ProductConfiguration::default_for(ProductType::Plate), 25);
        let json = serde_json::to_string_pretty(&request).unwrap();

        assert!(json.contains("\"type\": \"Plate\""));
        assert!(json.contains("ADITYA EQUIPMENTS"));

        let roundtrip: IndentRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, request);
    }

    #[test]
    fn test_meta_defaults_when_missing() {
        let json = r#"{
            "meta": { "version": "0.1.0", "created": "2025-01-01T00:00:00Z" },
            "product": { "type": "Span" },
            "quantity": 10
        }"#;
        let request: IndentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.meta.company, DEFAULT_COMPANY);
        assert!(request.meta.reference.is_empty());
        assert_eq!(request.calculate().result.line_items.len(), 7);
    }

    #[test]
    fn test_zero_quantity_rejected_by_validate_only() {
        let request = IndentRequest::new(ProductConfiguration::default_for(ProductType::Span), 0);
        assert!(request.validate().is_err());
        assert_eq!(request.calculate().result.total_weight_kg, 0.0);
    }

    #[test]
    fn test_file_stem() {
        let cases = [
            (ProductType::Plate, "Aditya_Indent_Centering"),
            (ProductType::Span, "Aditya_Indent_Telescopic"),
            (ProductType::Cuplock, "Aditya_Indent_Cuplock"),
            (ProductType::Prop, "Aditya_Indent_Adjustable"),
            (ProductType::Jack, "Aditya_Indent_Base"),
        ];
        for (product, stem) in cases {
            let indent = IndentRequest::new(ProductConfiguration::default_for(product), 1).calculate();
            assert_eq!(indent.file_stem(), stem);
        }
    }

    #[test]
    fn test_file_stem_custom_company() {
        let indent = IndentRequest::new(ProductConfiguration::default_for(ProductType::Plate), 1)
            .with_company("  shree ganesh fabricators")
            .calculate();
        assert_eq!(indent.file_stem(), "Shree_Indent_Centering");
        assert_eq!(indent.company_heading(), "SHREE GANESH FABRICATORS");
    }
}
