//! Word-processor export.
//!
//! Word, LibreOffice and WPS open an HTML body saved as `.doc` without
//! complaint, so the document is plain HTML behind a UTF-8 byte-order mark.

use std::fmt::Write;

use super::{format_quantity, format_weight};
use crate::indent::Indent;

/// Byte-order mark word processors use to detect UTF-8
const UTF8_BOM: char = '\u{feff}';

const HEADER_ROW_STYLE: &str = "background: #f1f5f9;";
const TABLE_STYLE: &str = "width: 100%; border-collapse: collapse;";

/// Render an indent as a `.doc` document.
pub fn render_doc(indent: &Indent) -> Vec<u8> {
    let result = &indent.result;
    let mut html = String::new();
    html.push(UTF8_BOM);

    // Writing into a String cannot fail.
    let _ = write!(
        html,
        r#"<html><head><meta charset="utf-8"><title>{title}</title></head><body>
<div style="font-family: Arial; padding: 20px;">
<h1 style="color: #020617; text-align: center;">{company}</h1>
<h2 style="text-align: center;">PRODUCTION INDENT: {product}</h2>
"#,
        title = escape_html(&indent.file_stem()),
        company = escape_html(&indent.company_heading()),
        product = escape_html(&result.product_name),
    );

    if !indent.meta.reference.is_empty() {
        let _ = writeln!(html, "<p><strong>Reference:</strong> {}</p>", escape_html(&indent.meta.reference));
    }
    if !indent.meta.prepared_by.is_empty() {
        let _ = writeln!(html, "<p><strong>Prepared By:</strong> {}</p>", escape_html(&indent.meta.prepared_by));
    }
    let _ = writeln!(html, "<p><strong>Batch Quantity:</strong> {} PCS</p>", result.quantity);
    let _ = writeln!(html, "<p><strong>Total Weight:</strong> {} KG</p>", format_weight(result.total_weight_kg));

    let _ = writeln!(html, "<h3>RAW MATERIALS</h3>");
    open_table(&mut html, "Weight (KG)");
    for item in result.raw_materials() {
        push_row(&mut html, &item.item, &item.specification, &format_weight(item.total_weight_kg));
    }
    html.push_str("</table>\n");

    let _ = writeln!(html, "<h3>ACCESSORIES</h3>");
    open_table(&mut html, "Qty (NOS)");
    for item in result.accessories() {
        push_row(&mut html, &item.item, &item.specification, &format_quantity(item.quantity));
    }
    html.push_str("</table>\n</div></body></html>\n");

    html.into_bytes()
}

fn open_table(html: &mut String, value_header: &str) {
    let _ = writeln!(
        html,
        r#"<table border="1" style="{}"><tr style="{}"><th>Item</th><th>Spec</th><th>{}</th></tr>"#,
        TABLE_STYLE, HEADER_ROW_STYLE, value_header
    );
}

fn push_row(html: &mut String, item: &str, specification: &str, value: &str) {
    let _ = writeln!(
        html,
        r#"<tr><td>{}</td><td>{}</td><td align="right">{}</td></tr>"#,
        escape_html(item),
        escape_html(specification),
        value
    );
}

/// Escape text for an HTML body or attribute
fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{ProductConfiguration, ProductType};
    use crate::indent::IndentRequest;

    fn render(product: ProductType, quantity: u32) -> String {
        let indent = IndentRequest::new(ProductConfiguration::default_for(product), quantity).calculate();
        String::from_utf8(render_doc(&indent)).unwrap()
    }

    #[test]
    fn test_doc_layout() {
        let doc = render(ProductType::Cuplock, 100);
        assert!(doc.starts_with('\u{feff}'));
        assert!(doc.contains("ADITYA EQUIPMENTS"));
        assert!(doc.contains("PRODUCTION INDENT: Cuplock (Vertical/Ledger)"));
        assert!(doc.contains("100 PCS"));
        assert!(doc.contains("1302.00 KG"));
        assert!(doc.contains("<th>Weight (KG)</th>"));
        assert!(doc.contains("<th>Qty (NOS)</th>"));

        // raw section precedes accessories
        let raw = doc.find("RAW MATERIALS").unwrap();
        let acc = doc.find("ACCESSORIES").unwrap();
        let pipe = doc.find("48.3 OD MS Pipe").unwrap();
        let cup = doc.find("Top Cup (Forged)").unwrap();
        assert!(raw < pipe && pipe < acc && acc < cup);
        assert!(doc.contains(r#"<td align="right">600</td>"#));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let indent = IndentRequest::new(ProductConfiguration::default_for(ProductType::Span), 5)
            .with_company("A&B <Works>")
            .calculate();
        let doc = String::from_utf8(render_doc(&indent)).unwrap();
        assert!(doc.contains("A&amp;B &lt;WORKS&gt;"));
        assert!(doc.contains("I-Bolt &amp; Nut Set"));
        assert!(!doc.contains("<WORKS>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"30mm (L=18")"#), "30mm (L=18&quot;)");
        assert_eq!(escape_html("3'x2'"), "3&#39;x2&#39;");
    }
}
