//! Schema-mapping engine: source table in, bill-import rows out
//!
//! This service owns the algorithmic core of the converter. The column
//! catalog resolves source columns by (possibly duplicated) name, the field
//! resolver derives one raw value per output column according to its mapping
//! kind, and the converter validates each row and assembles the final result
//! with per-row diagnostics.
//!
//! The engine is synchronous and side-effect-free: the catalog is built once
//! per call and read-only afterwards, and no state carries between rows.
//!
//! ## Architecture
//!
//! - [`catalog`] - First-occurrence and all-occurrences column index maps
//! - [`field_parsers`] - Date grammar, amount, and contact-name parsing
//! - [`resolver`] - Per-kind value resolution for one output row
//! - [`converter`] - Structural checks, row validation, result assembly
//!
//! ## Usage
//!
//! ```rust
//! use billbridge::{ConversionDefaults, MappingConfig, convert_text};
//!
//! let input = "Summary,Issue key,Created,Custom field (Amount),Custom field (Vendor to be paid)\n\
//!              Fee,SBD-1,01/Jan/26,100,Vendor";
//! let result = convert_text(input, &MappingConfig::builtin(), &ConversionDefaults::default());
//!
//! assert_eq!(result.rows.len(), 1);
//! assert!(result.errors.is_empty());
//! ```

pub mod catalog;
pub mod converter;
pub mod field_parsers;
pub mod resolver;

#[cfg(test)]
pub mod tests;

pub use catalog::ColumnCatalog;
pub use converter::{convert_rows, convert_text};
pub use field_parsers::{contact_from_payment_details, parse_amount, parse_export_date};
pub use resolver::FieldResolver;
