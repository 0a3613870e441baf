//! Row validation and batch orchestration
//!
//! Drives one conversion call end to end: structural checks first (empty
//! input, required columns), then independent per-row mapping and
//! validation. A bad row is dropped with exactly one diagnostic and never
//! stops the batch; only the structural checks terminate the whole call.

use tracing::{debug, info, warn};

use super::catalog::ColumnCatalog;
use super::field_parsers::parse_amount;
use super::resolver::FieldResolver;
use crate::app::models::{
    Cell, ConversionDefaults, ConversionError, ConversionResult, OutputRow,
};
use crate::app::services::csv;
use crate::config::MappingConfig;
use crate::constants::output_columns as col;

/// Convert raw input text into bill-import rows plus diagnostics.
///
/// Folds the empty-input boundary error into the structural (row = 0)
/// diagnostic shape, so callers get a uniform [`ConversionResult`] for every
/// non-I/O outcome.
pub fn convert_text(
    raw: &str,
    config: &MappingConfig,
    defaults: &ConversionDefaults,
) -> ConversionResult {
    match csv::parse_with_header(raw) {
        Ok(table) => convert_rows(&table.header, &table.rows, config, defaults),
        Err(error) => {
            warn!("Structural failure before row processing: {}", error);
            ConversionResult::structural_failure(error.to_string())
        }
    }
}

/// Convert an already-parsed source table into bill-import rows.
///
/// Row numbering in diagnostics is the 1-based position among data rows
/// (header excluded); skipped blank rows keep their number so diagnostics
/// line up with the source file.
pub fn convert_rows(
    header: &[String],
    data_rows: &[Vec<String>],
    config: &MappingConfig,
    defaults: &ConversionDefaults,
) -> ConversionResult {
    // Ruleset geometry must hold before any fixed-position indexing below;
    // a hand-built config may never have gone through the load path.
    if let Err(error) = config.validate() {
        warn!("{}", error);
        return ConversionResult::structural_failure(error.to_string());
    }

    let catalog = ColumnCatalog::build(header);

    // Whole-batch check: all required columns present, judged on first
    // occurrences only. Fails atomically before any row is touched.
    let missing = catalog.missing_required(&config.required_columns);
    if !missing.is_empty() {
        let message = format!("Required source columns not found: {}", missing.join(", "));
        warn!("{}", message);
        return ConversionResult::structural_failure(message);
    }

    let resolver = FieldResolver::new(
        &catalog,
        &config.mapping_fields,
        &config.payment_details_column,
    );

    let mut result = ConversionResult::default();
    for (offset, row) in data_rows.iter().enumerate() {
        let row_index = offset + 1;

        // Blank first cell marks a trailing/padding line: no row, no error
        if row.first().map(|c| c.trim().is_empty()).unwrap_or(true) {
            debug!("Row {}: blank first cell, skipped", row_index);
            continue;
        }

        match validate_row(row_index, row, &resolver, defaults) {
            Ok(output_row) => result.rows.push(output_row),
            Err(error) => {
                warn!("{}", error.message);
                result.errors.push(error);
            }
        }
    }

    info!(
        "Converted {} of {} data rows ({} rejected)",
        result.rows.len(),
        data_rows.len(),
        result.errors.len()
    );
    result
}

/// Map and validate one data row.
///
/// Returns the completed output row, or the single diagnostic that rejects
/// it. Checks run in a fixed order so the first offending field is stable:
/// ContactName, InvoiceNumber, InvoiceDate, DueDate, Amount.
fn validate_row(
    row_index: usize,
    row: &[String],
    resolver: &FieldResolver<'_>,
    defaults: &ConversionDefaults,
) -> Result<OutputRow, ConversionError> {
    let mut candidate = resolver.resolve_row(row);

    let contact_name = text_at(&candidate, col::CONTACT_NAME);
    let invoice_number = text_at(&candidate, col::INVOICE_NUMBER);
    let invoice_date = text_at(&candidate, col::INVOICE_DATE);
    let mut due_date = text_at(&candidate, col::DUE_DATE);
    if due_date.is_empty() {
        due_date = invoice_date.clone();
    }
    let amount = match &candidate[col::TOTAL] {
        Cell::Number(n) => Some(*n),
        Cell::Text(t) => parse_amount(t),
    };

    // (logical name, decorated name) pairs, in fixed check order
    let mut failed: Vec<(&str, String)> = Vec::new();
    if contact_name.is_empty() {
        failed.push(("ContactName", "ContactName".to_string()));
    }
    if invoice_number.is_empty() {
        failed.push(("InvoiceNumber", "InvoiceNumber".to_string()));
    }
    if invoice_date.is_empty() {
        failed.push(("InvoiceDate", "InvoiceDate".to_string()));
    }
    if due_date.is_empty() {
        failed.push(("DueDate", "DueDate".to_string()));
    }
    if amount.is_none() {
        // Distinguish an absent amount from one that refused to parse
        let decorated = if resolver.first_raw(col::TOTAL, row).is_none() {
            "Amount (missing)"
        } else {
            "Amount (invalid number)"
        };
        failed.push(("Amount", decorated.to_string()));
    }

    if !failed.is_empty() {
        let names: Vec<&str> = failed.iter().map(|(_, d)| d.as_str()).collect();
        return Err(ConversionError::for_row(
            row_index,
            format!(
                "Row {}: Missing or invalid required value for {}",
                row_index,
                names.join(", ")
            ),
            failed[0].0,
        ));
    }

    let total = amount.unwrap_or(0.0);
    candidate[col::DUE_DATE] = Cell::Text(due_date);
    candidate[col::TOTAL] = Cell::Number(total);
    candidate[col::QUANTITY] = Cell::Number(defaults.quantity() as f64);
    candidate[col::UNIT_AMOUNT] = Cell::Number(total);
    candidate[col::ACCOUNT_CODE] = Cell::Text(defaults.account_code().to_string());
    candidate[col::TAX_TYPE] = Cell::Text(defaults.tax_type().to_string());

    Ok(candidate)
}

/// Text content at a fixed output position; numbers read as empty text
fn text_at(candidate: &[Cell], position: usize) -> String {
    candidate[position].as_text().unwrap_or("").to_string()
}
