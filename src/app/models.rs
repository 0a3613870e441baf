//! Core data model for the conversion pipeline.
//!
//! All entities here are created fresh per conversion call and discarded
//! afterwards; there is no cross-call cache or mutable global state.

use serde::Serialize;
use std::fmt;

use crate::constants::{DEFAULT_ACCOUNT_CODE, DEFAULT_QUANTITY, DEFAULT_TAX_TYPE};

/// A single output cell: text or a numeric amount
///
/// Numbers keep their identity through to serialization so amounts are
/// written in canonical decimal form rather than whatever string the source
/// export used.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    /// Empty text cell
    pub fn empty() -> Self {
        Cell::Text(String::new())
    }

    /// Text content if this is a text cell
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            Cell::Number(_) => None,
        }
    }

    /// Numeric content if this is a number cell
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(_) => None,
        }
    }

    /// True for text cells whose trimmed content is empty
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            // f64 Display gives the shortest exact decimal form ("14644", "99.5")
            Cell::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

/// One converted row, index-aligned to the configured output header
pub type OutputRow = Vec<Cell>;

/// A diagnostic attached to one data row, or to the whole batch
///
/// `row` is the 1-based position among data rows (header excluded);
/// `row == 0` marks a structural failure that prevented row processing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionError {
    pub row: usize,
    pub message: String,
    /// First offending logical field name, when the error is field-specific
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ConversionError {
    /// Build a whole-batch (row = 0) structural error
    pub fn structural(message: impl Into<String>) -> Self {
        Self {
            row: 0,
            message: message.into(),
            field: None,
        }
    }

    /// Build a per-row validation error
    pub fn for_row(row: usize, message: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            row,
            message: message.into(),
            field: Some(field.into()),
        }
    }
}

/// Outcome of one conversion call
///
/// Both sequences preserve input row order. A batch with zero accepted rows
/// but per-row errors is a partial result; only a `row == 0` error marks a
/// structural failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConversionResult {
    pub rows: Vec<OutputRow>,
    pub errors: Vec<ConversionError>,
}

impl ConversionResult {
    /// Build the terminal result for a structural (whole-batch) failure
    pub fn structural_failure(message: impl Into<String>) -> Self {
        Self {
            rows: Vec::new(),
            errors: vec![ConversionError::structural(message)],
        }
    }

    /// True when a row = 0 error prevented any row processing
    pub fn is_structural_failure(&self) -> bool {
        self.rows.is_empty() && self.errors.iter().any(|e| e.row == 0)
    }
}

/// Per-call defaults applied uniformly to every accepted row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionDefaults {
    pub tax_type: Option<String>,
    pub account_code: Option<String>,
    pub quantity: Option<i64>,
}

impl ConversionDefaults {
    /// Tax type to write, falling back to [`DEFAULT_TAX_TYPE`]
    pub fn tax_type(&self) -> &str {
        self.tax_type.as_deref().unwrap_or(DEFAULT_TAX_TYPE)
    }

    /// Account code to write, falling back to [`DEFAULT_ACCOUNT_CODE`]
    pub fn account_code(&self) -> &str {
        self.account_code.as_deref().unwrap_or(DEFAULT_ACCOUNT_CODE)
    }

    /// Line quantity to write, falling back to [`DEFAULT_QUANTITY`]
    pub fn quantity(&self) -> i64 {
        self.quantity.unwrap_or(DEFAULT_QUANTITY)
    }
}
