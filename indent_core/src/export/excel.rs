//! Excel export

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use crate::errors::{CalcError, CalcResult};
use crate::indent::Indent;

const SHEET_NAME: &str = "Indent";

const RAW_HEADERS: [&str; 5] = ["Item", "Specification", "Quantity", "Unit", "Weight (KG)"];
const ACCESSORY_HEADERS: [&str; 4] = ["Item", "Specification", "Quantity", "Unit"];

fn xlsx_error(e: XlsxError) -> CalcError {
    CalcError::export_failed("xlsx", e.to_string())
}

/// Render an indent as an `.xlsx` workbook with a single "Indent" sheet.
pub fn render_xlsx(indent: &Indent) -> CalcResult<Vec<u8>> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    write_indent_sheet(sheet, indent)?;

    workbook.save_to_buffer().map_err(xlsx_error)
}

fn write_indent_sheet(sheet: &mut Worksheet, indent: &Indent) -> CalcResult<()> {
    let result = &indent.result;

    sheet.set_name(SHEET_NAME).map_err(xlsx_error)?;

    let bold = Format::new().set_bold();
    let weight_format = Format::new().set_num_format("0.00");

    // Heading block
    sheet
        .write_string_with_format(
            0,
            0,
            format!("{} - PRODUCTION INDENT", indent.company_heading()),
            &bold,
        )
        .map_err(xlsx_error)?;
    sheet
        .write_string(1, 0, format!("Product: {}", result.product_name))
        .map_err(xlsx_error)?;
    sheet
        .write_string(1, 1, format!("Batch Qty: {}", result.quantity))
        .map_err(xlsx_error)?;
    sheet
        .write_string(2, 0, format!("Total Weight: {:.2} KG", result.total_weight_kg))
        .map_err(xlsx_error)?;

    // Raw materials
    let mut row: u32 = 4;
    sheet
        .write_string_with_format(row, 0, "RAW MATERIAL INDENT (BY WEIGHT)", &bold)
        .map_err(xlsx_error)?;
    row += 1;
    write_header_row(sheet, row, &RAW_HEADERS, &bold)?;
    row += 1;

    for item in result.raw_materials() {
        sheet.write_string(row, 0, &item.item).map_err(xlsx_error)?;
        sheet.write_string(row, 1, &item.specification).map_err(xlsx_error)?;
        sheet.write_number(row, 2, item.quantity).map_err(xlsx_error)?;
        sheet.write_string(row, 3, item.unit.label()).map_err(xlsx_error)?;
        sheet
            .write_number_with_format(row, 4, item.total_weight_kg, &weight_format)
            .map_err(xlsx_error)?;
        row += 1;
    }

    // Accessories, after one blank row
    row += 1;
    sheet
        .write_string_with_format(row, 0, "ACCESSORIES INDENT (BY PIECES)", &bold)
        .map_err(xlsx_error)?;
    row += 1;
    write_header_row(sheet, row, &ACCESSORY_HEADERS, &bold)?;
    row += 1;

    for item in result.accessories() {
        sheet.write_string(row, 0, &item.item).map_err(xlsx_error)?;
        sheet.write_string(row, 1, &item.specification).map_err(xlsx_error)?;
        sheet.write_number(row, 2, item.quantity).map_err(xlsx_error)?;
        sheet.write_string(row, 3, item.unit.label()).map_err(xlsx_error)?;
        row += 1;
    }

    log::debug!("xlsx sheet: {} rows", row);

    // Approximate auto-fit
    for (col, width) in [(0u16, 32), (1, 30), (2, 12), (3, 10), (4, 14)] {
        sheet.set_column_width(col, width).map_err(xlsx_error)?;
    }

    Ok(())
}

fn write_header_row(sheet: &mut Worksheet, row: u32, headers: &[&str], format: &Format) -> CalcResult<()> {
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(row, col as u16, *header, format)
            .map_err(xlsx_error)?;
    }
    Ok(())
}
