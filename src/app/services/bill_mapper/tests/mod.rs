//! Test utilities shared across the schema-mapping engine tests

mod converter_tests;

/// Convert string literals into owned cells/headers
pub fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

/// Stock export header used by most converter tests
pub fn minimal_header() -> Vec<String> {
    row(&[
        "Summary",
        "Issue key",
        "Created",
        "Resolved",
        "Due date",
        "Custom field (Amount)",
        "Custom field (Currency)",
        "Custom field (Vendor to be paid)",
        "Custom field (Payment details)",
    ])
}

/// A fully valid data row aligned to [`minimal_header`]
pub fn valid_row() -> Vec<String> {
    row(&[
        "Test Payment",
        "SBD-123",
        "29/Jan/26 12:09 PM",
        "30/Jan/26 11:38 AM",
        "30/Jan/26 11:38 AM",
        "14644.0",
        "Rwf",
        "Acme Ltd",
        "Account Name: Acme Ltd",
    ])
}
