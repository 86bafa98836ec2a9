//! # Export Module
//!
//! Turns a computed [`Indent`] into a shareable document. Exporters only
//! format what the engine produced; they never recompute weights.
//!
//! - [`excel`] - `.xlsx` workbook (rust_xlsxwriter)
//! - [`pdf`] - PDF report (typst)
//! - [`word`] - `.doc` HTML document that word processors open directly
//!
//! ## Example
//!
//! ```rust,no_run
//! use indent_core::calculations::{ProductConfiguration, ProductType};
//! use indent_core::export::{export_to_dir, ExportFormat};
//! use indent_core::indent::IndentRequest;
//! use std::path::Path;
//!
//! let indent = IndentRequest::new(ProductConfiguration::default_for(ProductType::Plate), 100).calculate();
//! let path = export_to_dir(&indent, ExportFormat::Xlsx, Path::new("."))?;
//! assert!(path.ends_with("Aditya_Indent_Centering.xlsx"));
//! # Ok::<(), indent_core::errors::CalcError>(())
//! ```

pub mod excel;
pub mod pdf;
pub mod word;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::file_io::write_atomic;
use crate::indent::Indent;

/// Document formats an indent can be exported to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExportFormat {
    /// Excel workbook
    Xlsx,
    /// PDF report
    Pdf,
    /// Word-compatible HTML document
    Doc,
}

impl ExportFormat {
    /// File extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Doc => "doc",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Render an indent to document bytes.
pub fn render(indent: &Indent, format: ExportFormat) -> CalcResult<Vec<u8>> {
    log::debug!("rendering {} export for {}", format, indent.result.product_name);
    match format {
        ExportFormat::Xlsx => excel::render_xlsx(indent),
        ExportFormat::Pdf => pdf::render_pdf(indent),
        ExportFormat::Doc => Ok(word::render_doc(indent)),
    }
}

/// Suggested file name, e.g. `Aditya_Indent_Cuplock.xlsx`
pub fn suggested_file_name(indent: &Indent, format: ExportFormat) -> String {
    format!("{}.{}", indent.file_stem(), format.extension())
}

/// Render and atomically write to an explicit path.
pub fn export_to_path(indent: &Indent, format: ExportFormat, path: &Path) -> CalcResult<()> {
    let bytes = render(indent, format)?;
    write_atomic(path, &bytes)?;
    log::info!("exported {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

/// Render and write into `dir` under the suggested file name.
pub fn export_to_dir(indent: &Indent, format: ExportFormat, dir: &Path) -> CalcResult<PathBuf> {
    let path = dir.join(suggested_file_name(indent, format));
    export_to_path(indent, format, &path)?;
    Ok(path)
}

/// Weight cell text, always two decimals
pub(crate) fn format_weight(kg: f64) -> String {
    format!("{:.2}", kg)
}

/// Quantity cell text; whole numbers print without a fraction
pub(crate) fn format_quantity(quantity: f64) -> String {
    format!("{}", quantity)
}
