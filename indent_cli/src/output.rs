//! Output formatting module

use anyhow::Result;

use indent_core::calculations::MaterialLineItem;
use indent_core::materials::{Component, PipeClass, ANGLE_WEIGHT_TABLE};
use indent_core::materials::{rod_labels, rod_weight_per_meter};
use indent_core::Indent;

use crate::cli::OutputFormat;

const ITEM_WIDTH: usize = 30;
const SPEC_WIDTH: usize = 30;

pub fn output_indent(output_format: OutputFormat, indent: &Indent) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(indent)?);
        return Ok(());
    }

    print!("{}", render_indent(indent));
    Ok(())
}

/// Plain-text print view of an indent
pub fn render_indent(indent: &Indent) -> String {
    let result = &indent.result;
    let mut out = String::new();

    let heading = format!("{} - PRODUCTION INDENT", indent.company_heading());
    out.push_str(&format!("\n{}\n{}\n", heading, "=".repeat(heading.len())));
    out.push_str(&format!("Product:        {}\n", result.product_name));
    out.push_str(&format!("Batch quantity: {} PCS\n", result.quantity));
    if !indent.meta.reference.is_empty() {
        out.push_str(&format!("Reference:      {}\n", indent.meta.reference));
    }
    if !indent.meta.prepared_by.is_empty() {
        out.push_str(&format!("Prepared by:    {}\n", indent.meta.prepared_by));
    }
    out.push_str(&format!("Total weight:   {:.2} KG\n", result.total_weight_kg));

    out.push_str("\nRAW MATERIAL INDENT (BY WEIGHT)\n");
    out.push_str(&format!(
        "{:<iw$} {:<sw$} {:>12} {:<7} {:>12}\n",
        "Item",
        "Specification",
        "Quantity",
        "Unit",
        "Weight (KG)",
        iw = ITEM_WIDTH,
        sw = SPEC_WIDTH
    ));
    for item in result.raw_materials() {
        out.push_str(&format!(
            "{} {:>12.2}\n",
            line_columns(item),
            item.total_weight_kg
        ));
    }
    out.push_str(&format!(
        "{:>width$.2}\n",
        result.raw_material_weight_kg(),
        width = ITEM_WIDTH + SPEC_WIDTH + 12 + 7 + 16
    ));

    let accessories: Vec<_> = result.accessories().collect();
    if !accessories.is_empty() {
        out.push_str("\nACCESSORIES INDENT (BY PIECES)\n");
        out.push_str(&format!(
            "{:<iw$} {:<sw$} {:>12} {:<7}\n",
            "Item",
            "Specification",
            "Quantity",
            "Unit",
            iw = ITEM_WIDTH,
            sw = SPEC_WIDTH
        ));
        for item in accessories {
            out.push_str(&format!("{}\n", line_columns(item)));
        }
    }

    out
}

fn line_columns(item: &MaterialLineItem) -> String {
    format!(
        "{:<iw$} {:<sw$} {:>12} {:<7}",
        item.item,
        item.specification,
        trim_quantity(item.quantity),
        item.unit.label(),
        iw = ITEM_WIDTH,
        sw = SPEC_WIDTH
    )
}

/// Whole numbers print bare; fractional lengths keep three decimals
fn trim_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{}", quantity)
    } else {
        format!("{:.3}", quantity)
    }
}

pub fn output_tables(output_format: OutputFormat) -> Result<()> {
    if output_format == OutputFormat::Json {
        let rods: Vec<_> = rod_labels()
            .into_iter()
            .map(|label| serde_json::json!({ "label": label, "kg_per_m": rod_weight_per_meter(label).0 }))
            .collect();
        let pipes: Vec<_> = PipeClass::ALL
            .iter()
            .map(|p| serde_json::json!({ "class": p.display_name(), "kg_per_m": p.weight_per_meter().0 }))
            .collect();
        let components: Vec<_> = Component::ALL
            .iter()
            .map(|c| serde_json::json!({ "component": c.display_name(), "kg_each": c.unit_weight().0 }))
            .collect();
        let tables = serde_json::json!({
            "angles": &ANGLE_WEIGHT_TABLE[..],
            "pipes": pipes,
            "rods": rods,
            "components": components,
        });
        println!("{}", serde_json::to_string_pretty(&tables)?);
        return Ok(());
    }

    println!("\nMS Angles (kg/m)");
    println!("================");
    for angle in ANGLE_WEIGHT_TABLE.iter() {
        println!("{:<10} {:>5} mm  {:>6.2}", angle.size, angle.thickness, angle.weight_per_meter);
    }

    println!("\nMS Pipes (kg/m)");
    println!("===============");
    for pipe in PipeClass::ALL {
        println!("{:<18} {:>6.2}", pipe.display_name(), pipe.weight_per_meter().0);
    }

    println!("\nRound / Threaded Rod (kg/m)");
    println!("===========================");
    for label in rod_labels() {
        println!("{:<8} {:>6.3}", label, rod_weight_per_meter(label).0);
    }

    println!("\nComponents (kg each)");
    println!("====================");
    for component in Component::ALL {
        println!("{:<22} {:>6.3}", component.display_name(), component.unit_weight().0);
    }

    Ok(())
}
