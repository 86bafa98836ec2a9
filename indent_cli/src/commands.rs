//! Command execution

use anyhow::{Context, Result};

use indent_core::calculations::cuplock::CuplockInput;
use indent_core::calculations::jack::JackInput;
use indent_core::calculations::plate::PlateInput;
use indent_core::calculations::prop::PropInput;
use indent_core::calculations::span::{SpanGeometry, SpanInput};
use indent_core::calculations::{ProductConfiguration, ProductType};
use indent_core::export::{export_to_dir, ExportFormat};
use indent_core::file_io::{load_request, save_request};
use indent_core::materials::{sync_angle_thickness, FALLBACK_ANGLE_THICKNESS_MM};
use indent_core::IndentRequest;

use crate::cli::{BatchArgs, Cli, Commands, ExportArgs, OutputFormat};
use crate::output::{output_indent, output_tables};

pub fn execute(cli: Cli) -> Result<()> {
    let format = cli.format;

    match cli.command {
        Commands::Plate {
            length,
            breadth,
            unit,
            sheet,
            angle,
            angle_thk,
            framing,
            batch,
        } => {
            let input = PlateInput {
                dimension_unit: unit.into(),
                length,
                breadth,
                sheet_thickness_mm: sheet,
                angle_thickness_mm: angle_thk.unwrap_or(FALLBACK_ANGLE_THICKNESS_MM),
                framing: framing.into(),
                ..PlateInput::default()
            }
            .with_angle_size(angle);
            run_product(ProductConfiguration::Plate(input), batch, format)
        }

        Commands::Span {
            length_mm,
            breadth_mm,
            sheet,
            angle,
            angle_thk,
            batch,
        } => {
            let geometry = match (length_mm, breadth_mm) {
                (Some(length_mm), Some(breadth_mm)) => Some(SpanGeometry {
                    length_mm,
                    breadth_mm,
                    sheet_thickness_mm: sheet,
                    angle_thickness_mm: sync_angle_thickness(
                        &angle,
                        angle_thk.unwrap_or(FALLBACK_ANGLE_THICKNESS_MM),
                    ),
                    angle_size: angle,
                }),
                _ => None,
            };
            run_product(ProductConfiguration::Span(SpanInput { geometry }), batch, format)
        }

        Commands::Cuplock {
            kind,
            length,
            wall,
            batch,
        } => {
            let input = CuplockInput {
                kind: kind.into(),
                length_m: length,
                wall: wall.into(),
            };
            run_product(ProductConfiguration::Cuplock(input), batch, format)
        }

        Commands::Prop {
            outer,
            inner,
            top,
            batch,
        } => {
            let input = PropInput {
                outer_length_m: outer,
                inner_length_m: inner,
                top: top.into(),
            };
            run_product(ProductConfiguration::Prop(input), batch, format)
        }

        Commands::Jack {
            kind,
            rod,
            length_in,
            batch,
        } => {
            let input = JackInput {
                kind: kind.into(),
                rod_diameter: rod,
                rod_length_in: length_in,
            };
            run_product(ProductConfiguration::Jack(input), batch, format)
        }

        Commands::Run { request, export } => {
            let loaded = load_request(&request)
                .with_context(|| format!("Failed to load request {}", request.display()))?;
            run_request(loaded, &export, format)
        }

        Commands::Init { product, output, qty } => {
            let product = ProductType::from(product);
            let request = IndentRequest::new(ProductConfiguration::default_for(product), qty);
            save_request(&request, &output)?;
            eprintln!("Wrote {} request to {}", product, output.display());
            Ok(())
        }

        Commands::Tables => output_tables(format),
    }
}

fn run_product(
    product: ProductConfiguration,
    batch: BatchArgs,
    format: OutputFormat,
) -> Result<()> {
    let mut request = IndentRequest::new(product, batch.qty);
    if let Some(company) = batch.company {
        request = request.with_company(company);
    }
    if let Some(reference) = batch.reference {
        request = request.with_reference(reference);
    }
    if let Some(prepared_by) = batch.prepared_by {
        request = request.with_prepared_by(prepared_by);
    }
    run_request(request, &batch.export, format)
}

fn run_request(request: IndentRequest, export: &ExportArgs, format: OutputFormat) -> Result<()> {
    request.validate().context("Invalid indent request")?;

    if let Some(path) = &export.save_request {
        save_request(&request, path)?;
        log::info!("saved request to {}", path.display());
    }

    let indent = request.calculate();
    output_indent(format, &indent)?;

    for kind in &export.export {
        let export_format = ExportFormat::from(*kind);
        let path = export_to_dir(&indent, export_format, &export.out_dir)
            .with_context(|| format!("Failed to export {}", export_format))?;
        eprintln!("Exported {}", path.display());
    }

    Ok(())
}
