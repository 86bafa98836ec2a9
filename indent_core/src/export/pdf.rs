//! # PDF Export
//!
//! Generates the printable indent using Typst.
//!
//! ## Architecture
//!
//! - The Typst template is embedded as a string constant
//! - Data is injected via placeholder replacement before compilation
//! - Fonts come from `typst-assets`, so no system fonts are needed
//! - Output is raw PDF bytes (`Vec<u8>`)

use chrono::{Datelike, Utc};
use typst::diag::{FileError, FileResult};
use typst::foundations::{Bytes, Datetime};
use typst::syntax::{FileId, Source};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};
use typst_pdf::PdfOptions;

use super::{format_quantity, format_weight};
use crate::calculations::MaterialLineItem;
use crate::errors::{CalcError, CalcResult};
use crate::indent::Indent;

// ============================================================================
// Typst World Implementation
// ============================================================================

/// A minimal Typst world for compiling documents without external files.
struct PdfWorld {
    /// The main source document
    main: Source,
    /// Font book
    book: LazyHash<FontBook>,
    /// Available fonts
    fonts: Vec<Font>,
    /// Library (standard functions)
    library: LazyHash<Library>,
}

impl PdfWorld {
    fn new(source: String) -> Self {
        let fonts = Self::load_fonts();
        let book = FontBook::from_fonts(&fonts);

        PdfWorld {
            main: Source::detached(source),
            book: LazyHash::new(book),
            fonts,
            library: LazyHash::new(Library::default()),
        }
    }

    fn load_fonts() -> Vec<Font> {
        typst_assets::fonts()
            .flat_map(|font_bytes| Font::iter(Bytes::new(font_bytes.to_vec())))
            .collect()
    }
}

impl World for PdfWorld {
    fn library(&self) -> &LazyHash<Library> {
        &self.library
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &self.book
    }

    fn main(&self) -> FileId {
        self.main.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main.id() {
            Ok(self.main.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        self.fonts.get(index).cloned()
    }

    fn today(&self, _offset: Option<i64>) -> Option<Datetime> {
        let now = Utc::now();
        Datetime::from_ymd(now.year(), now.month() as u8, now.day() as u8)
    }
}

// ============================================================================
// Template
// ============================================================================

const INDENT_TEMPLATE: &str = r##"
#set page(
  paper: "a4",
  margin: (top: 18mm, bottom: 18mm, left: 16mm, right: 16mm),
  footer: context [
    #line(length: 100%, stroke: 0.5pt + gray)
    #v(4pt)
    #grid(
      columns: (1fr, 1fr, 1fr),
      align(left)[#text(size: 8pt)[{{REFERENCE}}]],
      align(center)[#text(size: 8pt)[Page #counter(page).display()]],
      align(right)[#text(size: 8pt)[{{DATE}}]],
    )
  ]
)

#set text(size: 10pt)

#align(center)[
  #block(width: 100%, fill: rgb("#020617"), inset: 12pt, radius: 4pt)[
    #text(size: 18pt, weight: "bold", fill: white)[{{COMPANY}}]
    #v(2pt)
    #text(size: 10pt, fill: rgb("#cbd5e1"))[PRODUCTION INDENT]
  ]
]

#v(8pt)

#grid(
  columns: (1fr, 1fr, 1fr),
  gutter: 12pt,
  [*Product* \ {{PRODUCT}}],
  [*Batch Quantity* \ {{QUANTITY}} PCS],
  [*Total Weight* \ {{TOTAL_WEIGHT}} KG],
)
{{PREPARED_BY}}
#v(12pt)

== Raw Material Indent (by weight)

#table(
  columns: (2fr, 2fr, 1fr, auto, 1fr),
  stroke: 0.5pt + gray,
  fill: (_, row) => if row == 0 { rgb("#f1f5f9") },
  align: (left, left, right, left, right),
  [*Item*], [*Specification*], [*Quantity*], [*Unit*], [*Weight (KG)*],
{{RAW_ROWS}}
)

#v(12pt)

== Accessories Indent (by pieces)

#table(
  columns: (2fr, 2fr, 1fr, auto),
  stroke: 0.5pt + gray,
  fill: (_, row) => if row == 0 { rgb("#f1f5f9") },
  align: (left, left, right, left),
  [*Item*], [*Specification*], [*Quantity*], [*Unit*],
{{ACCESSORY_ROWS}}
)
"##;

/// Render an indent to PDF.
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - PDF file as bytes
/// * `Err(CalcError::ExportFailed)` - Typst compilation or PDF rendering failed
pub fn render_pdf(indent: &Indent) -> CalcResult<Vec<u8>> {
    let result = &indent.result;

    let prepared_by = if indent.meta.prepared_by.is_empty() {
        String::new()
    } else {
        format!("\n#v(4pt)\nPrepared by: {}\n", escape_typst(&indent.meta.prepared_by))
    };

    let source = INDENT_TEMPLATE
        .replace("{{COMPANY}}", &escape_typst(&indent.company_heading()))
        .replace("{{REFERENCE}}", &escape_typst(&indent.meta.reference))
        .replace("{{DATE}}", &indent.meta.created.format("%Y-%m-%d").to_string())
        .replace("{{PRODUCT}}", &escape_typst(&result.product_name))
        .replace("{{QUANTITY}}", &result.quantity.to_string())
        .replace("{{TOTAL_WEIGHT}}", &format_weight(result.total_weight_kg))
        .replace("{{PREPARED_BY}}", &prepared_by)
        .replace("{{RAW_ROWS}}", &build_rows(result.raw_materials(), true))
        .replace("{{ACCESSORY_ROWS}}", &build_rows(result.accessories(), false));

    let world = PdfWorld::new(source);
    let warned = typst::compile(&world);

    let document = warned.output.map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::export_failed("pdf", format!("Typst compilation failed: {}", error_msgs.join("; ")))
    })?;

    let pdf_bytes = typst_pdf::pdf(&document, &PdfOptions::default()).map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::export_failed("pdf", format!("PDF rendering failed: {}", error_msgs.join("; ")))
    })?;

    Ok(pdf_bytes)
}

/// Table cells for one section
fn build_rows<'a>(items: impl Iterator<Item = &'a MaterialLineItem>, with_weight: bool) -> String {
    items
        .map(|item| {
            let mut row = format!(
                "  [{}], [{}], [{}], [{}],",
                escape_typst(&item.item),
                escape_typst(&item.specification),
                format_quantity(item.quantity),
                item.unit.label()
            );
            if with_weight {
                row.push_str(&format!(" [{}],", format_weight(item.total_weight_kg)));
            }
            row
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Escape characters with markup meaning in Typst content blocks
fn escape_typst(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(
            c,
            '*' | '_' | '#' | '$' | '@' | '<' | '>' | '\\' | '`' | '[' | ']' | '/' | '"' | '\'' | '~' | '=' | '-' | '+'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
