//! Escaping serializer for delimited text output
//!
//! Inverse of the scanner: any cell the scanner would misread unescaped
//! (commas, quotes, newlines) is wrapped in quotes with internal quotes
//! doubled. Cells that need no escaping are written verbatim, so simple
//! output stays byte-for-byte simple.

use crate::app::models::{Cell, OutputRow};

/// Escape one cell value for delimited-text output.
///
/// Quoting is applied only when the value contains a comma, double-quote,
/// or line terminator; internal quotes are doubled either way.
pub fn escape_cell(value: &str) -> String {
    let needs_quotes = value.contains([',', '"', '\n', '\r']);
    let escaped = value.replace('"', "\"\"");
    if needs_quotes {
        format!("\"{}\"", escaped)
    } else {
        escaped
    }
}

/// Join one sequence of raw cell values into a single escaped line
pub fn write_line<S: AsRef<str>>(cells: &[S]) -> String {
    cells
        .iter()
        .map(|c| escape_cell(c.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Serialize a header and data rows into output text.
///
/// Numbers are rendered in canonical decimal form before escaping. Lines
/// are newline-joined with no trailing terminator after the last row.
pub fn write_table(header: &[String], rows: &[OutputRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(write_line(header));
    for row in rows {
        let cells: Vec<String> = row.iter().map(Cell::to_string).collect();
        lines.push(write_line(&cells));
    }
    lines.join("\n")
}
