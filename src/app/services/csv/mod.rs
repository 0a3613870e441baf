//! Quote-aware delimited-text handling
//!
//! This service owns the raw text layer of the pipeline: a lenient RFC 4180
//! style scanner that turns input text into rows of cells, header extraction
//! with BOM stripping and empty-input detection, and a writer that escapes
//! rows back into importable CSV text.

pub mod scanner;
pub mod writer;

#[cfg(test)]
pub mod tests;

pub use scanner::{ParsedTable, parse_with_header, scan_rows};
pub use writer::{escape_cell, write_line, write_table};
