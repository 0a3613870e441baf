//! End-to-end tests for the row validator and batch orchestrator

use super::{minimal_header, row, valid_row};
use crate::app::models::{Cell, ConversionDefaults};
use crate::app::services::bill_mapper::{convert_rows, convert_text};
use crate::config::MappingConfig;
use crate::constants::output_columns as col;

fn convert(header: &[String], rows: &[Vec<String>]) -> crate::ConversionResult {
    convert_rows(
        header,
        rows,
        &MappingConfig::builtin(),
        &ConversionDefaults::default(),
    )
}

#[test]
fn test_missing_required_columns_is_structural_failure() {
    let result = convert(&row(&["Only", "Two"]), &[row(&["a", "b"])]);

    assert!(result.rows.is_empty());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].row, 0);
    assert!(result.errors[0].message.contains("Summary"));
    assert!(result.errors[0].message.contains("Issue key"));
    assert!(result.errors[0].message.contains("Created"));
    assert!(result.is_structural_failure());
}

#[test]
fn test_truncated_ruleset_is_structural_failure_not_panic() {
    let mut config = MappingConfig::builtin();
    config.mapping_fields.truncate(5);
    config.output_header.truncate(5);

    let result = convert_rows(
        &minimal_header(),
        &[valid_row()],
        &config,
        &ConversionDefaults::default(),
    );

    assert!(result.is_structural_failure());
    assert_eq!(result.errors[0].row, 0);
    assert!(result.errors[0].message.contains("columns"));
}

#[test]
fn test_maps_one_valid_row_with_defaults() {
    let result = convert(&minimal_header(), &[valid_row()]);

    assert!(result.errors.is_empty());
    assert_eq!(result.rows.len(), 1);
    let out = &result.rows[0];
    assert_eq!(out.len(), 26);
    assert_eq!(out[col::CONTACT_NAME], Cell::from("Acme Ltd"));
    assert_eq!(out[col::INVOICE_NUMBER], Cell::from("SBD-123"));
    // InvoiceDate prefers Resolved over Created
    assert_eq!(out[col::INVOICE_DATE], Cell::from("2026-01-30"));
    assert_eq!(out[col::DUE_DATE], Cell::from("2026-01-30"));
    assert_eq!(out[col::TOTAL], Cell::Number(14644.0));
    assert_eq!(out[col::DESCRIPTION], Cell::from("Test Payment"));
    assert_eq!(out[col::QUANTITY], Cell::Number(1.0));
    assert_eq!(out[col::UNIT_AMOUNT], Cell::Number(14644.0));
    assert_eq!(out[col::ACCOUNT_CODE], Cell::from(""));
    assert_eq!(out[col::TAX_TYPE], Cell::from("None"));
    assert_eq!(out[col::CURRENCY], Cell::from("Rwf"));
}

#[test]
fn test_custom_defaults_are_applied_uniformly() {
    let defaults = ConversionDefaults {
        tax_type: Some("VAT".to_string()),
        account_code: Some("400".to_string()),
        quantity: Some(3),
    };
    let result = convert_rows(
        &minimal_header(),
        &[valid_row()],
        &MappingConfig::builtin(),
        &defaults,
    );

    let out = &result.rows[0];
    assert_eq!(out[col::QUANTITY], Cell::Number(3.0));
    assert_eq!(out[col::ACCOUNT_CODE], Cell::from("400"));
    assert_eq!(out[col::TAX_TYPE], Cell::from("VAT"));
}

#[test]
fn test_due_date_falls_back_to_invoice_date() {
    let mut data = valid_row();
    data[4] = String::new(); // blank Due date
    let result = convert(&minimal_header(), &[data]);

    assert!(result.errors.is_empty());
    assert_eq!(result.rows[0][col::DUE_DATE], Cell::from("2026-01-30"));
}

#[test]
fn test_invalid_rows_are_dropped_and_reported() {
    let rows = vec![
        row(&[
            "Valid", "SBD-1", "01/Jan/26 9:00 AM", "01/Jan/26", "01/Jan/26", "100", "RWF",
            "Vendor", "",
        ]),
        row(&[
            "No amount", "SBD-2", "02/Jan/26", "02/Jan/26", "02/Jan/26", "", "RWF", "Vendor", "",
        ]),
        row(&[
            "Bad date", "SBD-3", "not-a-date", "", "", "50", "RWF", "Vendor", "",
        ]),
    ];
    let result = convert(&minimal_header(), &rows);

    assert_eq!(result.rows.len(), 1);
    assert_eq!(result.rows[0][col::INVOICE_NUMBER], Cell::from("SBD-1"));
    assert_eq!(result.errors.len(), 2);
    assert!(
        result
            .errors
            .iter()
            .any(|e| e.message.contains("Row 2") && e.message.contains("Amount"))
    );
    assert!(
        result
            .errors
            .iter()
            .any(|e| e.message.contains("Row 3") && e.message.contains("InvoiceDate"))
    );
    // Partial batches are not structural failures
    assert!(!result.is_structural_failure());
}

#[test]
fn test_amount_missing_vs_invalid_messages() {
    let rows = vec![
        row(&[
            "Missing", "SBD-1", "01/Jan/26", "01/Jan/26", "01/Jan/26", "", "RWF", "Vendor", "",
        ]),
        row(&[
            "Invalid", "SBD-2", "01/Jan/26", "01/Jan/26", "01/Jan/26", "pending", "RWF", "Vendor",
            "",
        ]),
    ];
    let result = convert(&minimal_header(), &rows);

    assert_eq!(result.errors.len(), 2);
    assert!(result.errors[0].message.contains("Amount (missing)"));
    assert!(result.errors[1].message.contains("Amount (invalid number)"));
    // Both surface under the same logical field name
    assert_eq!(result.errors[0].field.as_deref(), Some("Amount"));
    assert_eq!(result.errors[1].field.as_deref(), Some("Amount"));
}

#[test]
fn test_amount_with_currency_suffix_converts() {
    let mut data = valid_row();
    data[5] = "14644 RWF".to_string();
    let result = convert(&minimal_header(), &[data]);

    assert!(result.errors.is_empty(), "row rejected: {:?}", result.errors);
    assert_eq!(result.rows[0][col::TOTAL], Cell::Number(14644.0));
    assert_eq!(result.rows[0][col::UNIT_AMOUNT], Cell::Number(14644.0));
}

#[test]
fn test_error_field_is_first_failed_check() {
    let rows = vec![row(&["No vendor", "", "", "", "", "", "", "", ""])];
    let result = convert(&minimal_header(), &rows);

    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].field.as_deref(), Some("ContactName"));
    assert!(
        result.errors[0]
            .message
            .contains("ContactName, InvoiceNumber, InvoiceDate, DueDate, Amount (missing)")
    );
}

#[test]
fn test_blank_first_cell_rows_are_skipped_without_shifting_numbering() {
    let rows = vec![
        row(&["", "SBD-0", "", "", "", "", "", "", ""]),
        valid_row(),
        row(&[""]),
        row(&[
            "No amount", "SBD-2", "02/Jan/26", "02/Jan/26", "02/Jan/26", "", "RWF", "Vendor", "",
        ]),
    ];
    let result = convert(&minimal_header(), &rows);

    assert_eq!(result.rows.len(), 1);
    assert_eq!(result.errors.len(), 1);
    // The bad row is the 4th data row, and keeps that number
    assert_eq!(result.errors[0].row, 4);
    assert!(result.errors[0].message.contains("Row 4"));
}

#[test]
fn test_accepted_rows_keep_input_order() {
    let mut second = valid_row();
    second[1] = "SBD-456".to_string();
    let result = convert(&minimal_header(), &[valid_row(), second]);

    assert_eq!(result.rows.len(), 2);
    assert_eq!(result.rows[0][col::INVOICE_NUMBER], Cell::from("SBD-123"));
    assert_eq!(result.rows[1][col::INVOICE_NUMBER], Cell::from("SBD-456"));
}

#[test]
fn test_duplicate_amount_column_recovers_from_second_occurrence() {
    let header = row(&[
        "Summary",
        "Issue key",
        "Created",
        "Custom field (Amount)",
        "Custom field (Amount)",
        "Custom field (Vendor to be paid)",
    ]);
    let data = row(&["Pay", "SBD-9", "01/Feb/26 10:00 AM", "", "250", "Vendor A"]);
    let result = convert(&header, &[data]);

    assert!(result.errors.is_empty(), "errors: {:?}", result.errors);
    assert_eq!(result.rows[0][col::TOTAL], Cell::Number(250.0));
    assert_eq!(result.rows[0][col::UNIT_AMOUNT], Cell::Number(250.0));
}

#[test]
fn test_contact_name_falls_back_to_payment_details_patterns() {
    let mut account_name_row = valid_row();
    account_name_row[7] = String::new();
    account_name_row[8] = "Account Name: Huza HR Ltd\nAccount Number: 123".to_string();

    let mut name_row = valid_row();
    name_row[1] = "SBD-3".to_string();
    name_row[7] = String::new();
    name_row[8] = "Name : Norbert Mugwaneza\n\nPhone : 0788667519".to_string();

    let result = convert(&minimal_header(), &[account_name_row, name_row]);

    assert!(result.errors.is_empty());
    assert_eq!(result.rows[0][col::CONTACT_NAME], Cell::from("Huza HR Ltd"));
    assert_eq!(
        result.rows[1][col::CONTACT_NAME],
        Cell::from("Norbert Mugwaneza")
    );
}

#[test]
fn test_convert_text_runs_whole_pipeline() {
    let input = "Summary,Issue key,Created,Resolved,Due date,Custom field (Amount),Custom field (Currency),Custom field (Vendor to be paid),Custom field (Payment details)\n\
                 Test Payment,SBD-123,29/Jan/26 12:09 PM,30/Jan/26 11:38 AM,30/Jan/26 11:38 AM,14644.0,Rwf,Acme Ltd,\n";
    let result = convert_text(
        input,
        &MappingConfig::builtin(),
        &ConversionDefaults::default(),
    );

    assert!(result.errors.is_empty());
    assert_eq!(result.rows.len(), 1);
    assert_eq!(result.rows[0][col::CONTACT_NAME], Cell::from("Acme Ltd"));
}

#[test]
fn test_convert_text_empty_input_is_structural_failure() {
    let result = convert_text(
        "  \n ",
        &MappingConfig::builtin(),
        &ConversionDefaults::default(),
    );

    assert!(result.is_structural_failure());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].row, 0);
    assert!(result.errors[0].message.contains("empty"));
}

#[test]
fn test_quoted_cells_flow_through_conversion() {
    let input = "Summary,Issue key,Created,Custom field (Amount),Custom field (Vendor to be paid)\n\
                 \"Fee, with comma\",SBD-7,01/Jan/26,\"1,500\",\"Vendor \"\"A\"\"\"";
    let result = convert_text(
        input,
        &MappingConfig::builtin(),
        &ConversionDefaults::default(),
    );

    assert!(result.errors.is_empty(), "errors: {:?}", result.errors);
    let out = &result.rows[0];
    assert_eq!(out[col::DESCRIPTION], Cell::from("Fee, with comma"));
    assert_eq!(out[col::TOTAL], Cell::Number(1500.0));
    assert_eq!(out[col::CONTACT_NAME], Cell::from("Vendor \"A\""));
}
