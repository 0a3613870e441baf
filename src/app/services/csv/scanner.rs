//! Two-state scanner for quote-aware delimited text
//!
//! The scanner is deliberately lenient: malformed quoting never fails. An
//! unterminated quote simply consumes the remainder of the input into the
//! current cell, and a quote opening mid-cell is accepted. Structural
//! problems ("is this actually a table?") are judged by the caller, not here.

use tracing::debug;

use crate::{Error, Result};

/// Byte-order mark that spreadsheet tools prepend to UTF-8 exports
const BOM: char = '\u{feff}';

/// Scanner state: inside or outside a quoted section of the current cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Unquoted,
    Quoted,
}

/// Header row plus data rows, as produced by [`parse_with_header`]
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTable {
    /// Trimmed column names, duplicates preserved in order
    pub header: Vec<String>,
    /// Data rows, index-aligned to `header` (may be ragged)
    pub rows: Vec<Vec<String>>,
}

/// Tokenize raw text into rows of cells.
///
/// Cells are separated by commas, rows by `\n`, `\r`, or `\r\n`. A
/// double-quote toggles quoted mode; inside quotes, `""` emits a literal
/// quote and separators/newlines are taken verbatim. End of input always
/// flushes the pending cell and row, so input without a trailing newline
/// still yields its last row. Empty input yields one row with one empty
/// cell.
pub fn scan_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut cell = String::new();
    let mut state = ScanState::Unquoted;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match state {
            ScanState::Quoted => {
                if ch == '"' {
                    if chars.peek() == Some(&'"') {
                        // Doubled quote: literal " and stay quoted
                        cell.push('"');
                        chars.next();
                    } else {
                        state = ScanState::Unquoted;
                    }
                } else {
                    cell.push(ch);
                }
            }
            ScanState::Unquoted => match ch {
                '"' => state = ScanState::Quoted,
                ',' => row.push(std::mem::take(&mut cell)),
                '\n' | '\r' => {
                    if ch == '\r' && chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    row.push(std::mem::take(&mut cell));
                    rows.push(std::mem::take(&mut row));
                }
                _ => cell.push(ch),
            },
        }
    }

    // Flush the final cell and row even without a trailing terminator
    row.push(cell);
    rows.push(row);
    rows
}

/// Extract the header row and data rows from raw input text.
///
/// Strips a leading byte-order mark, rejects blank/whitespace-only input
/// with [`Error::EmptyInput`], and trims each header name. Data rows are
/// returned untrimmed; per-cell trimming is a mapping concern.
pub fn parse_with_header(raw: &str) -> Result<ParsedTable> {
    // BOM first: `str::trim` does not treat U+FEFF as whitespace, and a
    // BOM-plus-whitespace input is still empty input
    let text = raw.strip_prefix(BOM).unwrap_or(raw);
    if text.trim().is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut all = scan_rows(text);
    debug!("Scanned {} raw rows", all.len());

    let header: Vec<String> = all.remove(0).iter().map(|h| h.trim().to_string()).collect();
    Ok(ParsedTable { header, rows: all })
}
