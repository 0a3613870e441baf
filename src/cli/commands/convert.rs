//! Convert command: ticketing export in, bill-import CSV out

use serde::Serialize;
use tracing::{info, warn};

use super::shared::{load_mapping, read_input, setup_logging, write_output, write_text_file};
use crate::app::models::ConversionResult;
use crate::app::services::bill_mapper::convert_text;
use crate::app::services::csv::write_table;
use crate::cli::args::ConvertArgs;
use crate::{Error, Result};

/// JSON report mirroring the conversion outcome for upload tooling
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ConversionReport<'a> {
    success: bool,
    row_count: usize,
    errors: &'a [crate::app::models::ConversionError],
}

/// Run the conversion workflow
pub fn run_convert(args: &ConvertArgs) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet);

    let config = load_mapping(args.mapping.as_ref())?;
    let raw = read_input(args.input.as_ref())?;
    let defaults = args.conversion_defaults();

    info!(
        "Converting {} bytes of input ({} output columns)",
        raw.len(),
        config.output_header.len()
    );
    let result = convert_text(&raw, &config, &defaults);

    if let Some(report_path) = &args.report {
        write_report(report_path, &result)?;
    }
    for error in &result.errors {
        warn!("{}", error.message);
    }

    // Structural failure or every row rejected: nothing importable. A
    // header-only input (zero rows, zero diagnostics) is still a success
    // and writes a header-only table.
    if result.rows.is_empty() {
        if let Some(first) = result.errors.first() {
            return Err(Error::conversion_failed(first.message.clone()));
        }
    }

    let output_text = write_table(&config.output_header, &result.rows);
    write_output(args.output.as_ref(), &output_text)?;

    info!(
        "Wrote {} bill rows ({} rows rejected)",
        result.rows.len(),
        result.errors.len()
    );
    Ok(())
}

fn write_report(path: &std::path::Path, result: &ConversionResult) -> Result<()> {
    // Zero accepted rows with diagnostics counts as failure for callers,
    // whether or not the failure was structural.
    let report = ConversionReport {
        success: !(result.rows.is_empty() && !result.errors.is_empty()),
        row_count: result.rows.len(),
        errors: &result.errors,
    };
    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| Error::configuration(format!("Failed to serialize report: {}", e)))?;
    write_text_file(path, &json)
}
