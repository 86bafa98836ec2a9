//! # indent_core - Production Indent Engine
//!
//! `indent_core` estimates the raw materials and bought-out accessories
//! needed to manufacture a batch of scaffolding and formwork products
//! (centering plates, telescopic spans, cuplock members, adjustable props
//! and base/U-jacks). All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Calculators are pure functions of configuration and quantity
//! - **Total**: A well-typed configuration always produces an indent; lookup
//!   misses fall back to documented defaults instead of failing
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types for the few real failure paths
//!
//! ## Quick Start
//!
//! ```rust
//! use indent_core::calculations::{calculate, ProductConfiguration};
//! use indent_core::calculations::plate::PlateInput;
//!
//! let result = calculate(&ProductConfiguration::Plate(PlateInput::default()), 100);
//!
//! // 900 x 600 mm, 2 mm sheet: 8.478 kg per plate
//! let sheet = result.line_item("HR Sheet (Plate Body)").unwrap();
//! assert!((sheet.total_weight_kg - 847.8).abs() < 1e-6);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Product calculators and the dispatcher
//! - [`materials`] - Angle, pipe, rod and component weight tables
//! - [`indent`] - Request envelope and computed indent
//! - [`export`] - Excel, PDF and Word exporters
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - Request files and atomic writes

pub mod calculations;
pub mod errors;
pub mod export;
pub mod file_io;
pub mod indent;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    calculate, dispatch, BatchQuantity, CalculationResult, LineUnit, MaterialLineItem, ProductConfiguration,
    ProductType,
};
pub use errors::{CalcError, CalcResult};
pub use export::ExportFormat;
pub use file_io::{load_request, save_request};
pub use indent::{Indent, IndentMeta, IndentRequest};
