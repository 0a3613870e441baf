//! Application constants for billbridge
//!
//! This module contains the fixed output-schema geometry, input limits,
//! and default values used throughout the converter.

// =============================================================================
// Input Limits
// =============================================================================

/// Maximum accepted input size in bytes (2 MiB)
///
/// Batches are held in memory in full; the cap is enforced at the CLI
/// boundary before any parsing happens.
pub const MAX_INPUT_BYTES: usize = 2 * 1024 * 1024;

// =============================================================================
// Output Schema Geometry
// =============================================================================

/// Number of columns in the reference bill-import schema
pub const OUTPUT_COLUMN_COUNT: usize = 26;

/// Fixed positions of the logical fields the validator depends on
///
/// These indices are contractual: downstream import tooling consumes the
/// output columns by position, so reordering them is a breaking change.
pub mod output_columns {
    pub const CONTACT_NAME: usize = 0;
    pub const PO_COUNTRY: usize = 9;
    pub const INVOICE_NUMBER: usize = 10;
    pub const INVOICE_DATE: usize = 11;
    pub const DUE_DATE: usize = 12;
    pub const TOTAL: usize = 13;
    pub const DESCRIPTION: usize = 15;
    pub const QUANTITY: usize = 16;
    pub const UNIT_AMOUNT: usize = 17;
    pub const ACCOUNT_CODE: usize = 18;
    pub const TAX_TYPE: usize = 19;
    pub const CURRENCY: usize = 25;
}

// =============================================================================
// Conversion Defaults
// =============================================================================

/// Tax type applied to accepted rows when none is supplied
pub const DEFAULT_TAX_TYPE: &str = "None";

/// Account code applied to accepted rows when none is supplied
pub const DEFAULT_ACCOUNT_CODE: &str = "";

/// Line quantity applied to accepted rows when none is supplied
pub const DEFAULT_QUANTITY: i64 = 1;
