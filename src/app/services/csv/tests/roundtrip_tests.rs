//! Round-trip law: serialize then re-scan must reproduce cell values exactly

use crate::app::models::Cell;
use crate::app::services::csv::{scan_rows, write_line, write_table};

/// Serialize a single-cell row and read it back
fn roundtrip(value: &str) -> String {
    let line = write_line(&[value]);
    let rows = scan_rows(&line);
    assert_eq!(rows.len(), 1, "single-cell value {:?} split into rows", value);
    assert_eq!(rows[0].len(), 1, "single-cell value {:?} split into cells", value);
    rows[0][0].clone()
}

#[test]
fn test_roundtrip_plain_values() {
    for v in ["", "plain", "  padded  ", "ünïcode ✓", "0012"] {
        assert_eq!(roundtrip(v), v);
    }
}

#[test]
fn test_roundtrip_separator_heavy_values() {
    for v in [",", ",,,", "a,b,c", "trailing,"] {
        assert_eq!(roundtrip(v), v);
    }
}

#[test]
fn test_roundtrip_quote_heavy_values() {
    for v in ["\"", "\"\"", "say \"hi\"", "\"leading", "trailing\"", "a\"b\"c"] {
        assert_eq!(roundtrip(v), v);
    }
}

#[test]
fn test_roundtrip_newline_values() {
    for v in ["a\nb", "a\r\nb", "a\rb", "\n", "line1\nline2\nline3"] {
        assert_eq!(roundtrip(v), v);
    }
}

#[test]
fn test_roundtrip_everything_at_once() {
    let v = "Name : \"Acme, Ltd\"\r\nAccount: 12,345\n\"quoted\"";
    assert_eq!(roundtrip(v), v);
}

#[test]
fn test_roundtrip_multi_row_table() {
    let header = vec!["A,1".to_string(), "B".to_string()];
    let rows = vec![
        vec![Cell::from("x\ny"), Cell::Number(2.5)],
        vec![Cell::from("\"q\""), Cell::from("plain")],
    ];
    let text = write_table(&header, &rows);

    let parsed = scan_rows(&text);
    assert_eq!(parsed.len(), 3);
    assert_eq!(parsed[0], vec!["A,1", "B"]);
    assert_eq!(parsed[1], vec!["x\ny", "2.5"]);
    assert_eq!(parsed[2], vec!["\"q\"", "plain"]);
}
