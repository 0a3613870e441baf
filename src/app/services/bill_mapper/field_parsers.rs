//! Field parsing for date, amount, and contact-name extraction
//!
//! The date grammar is deliberately narrow: it accepts exactly the ticketing
//! export's `D/MMM/YY[YY]` form (an optional time fragment is ignored) and
//! nothing else, including already-ISO dates. Downstream validation treats
//! an unparsed date the same as a missing one, so widening the grammar would
//! silently change which rows import.

use regex::Regex;
use std::sync::LazyLock;

/// Export date shape: day/month-abbreviation/year, then end or whitespace
static EXPORT_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})/([A-Za-z]{3})/(\d{2,4})(?:\s|$)").expect("valid date regex")
});

/// "Account Name : <text>" line inside payment-details free text
static ACCOUNT_NAME_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Account\s+Name\s*:\s*([^\n]+)").expect("valid regex"));

/// "Name : <text>" line inside payment-details free text
static NAME_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Name\s*:\s*([^\n]+)").expect("valid regex"));

/// Parse an export-format date ("29/Jan/26 12:09 PM") into `YYYY-MM-DD`.
///
/// Month abbreviations are matched case-sensitively; two-digit years get a
/// literal `20` century prefix. Returns `None` for anything else.
pub fn parse_export_date(value: &str) -> Option<String> {
    let captures = EXPORT_DATE.captures(value.trim())?;
    let day = &captures[1];
    let month = month_number(&captures[2])?;
    let year_part = &captures[3];

    let year = if year_part.len() == 2 {
        format!("20{}", year_part)
    } else {
        year_part.to_string()
    };
    Some(format!("{}-{}-{:0>2}", year, month, day))
}

fn month_number(abbrev: &str) -> Option<&'static str> {
    Some(match abbrev {
        "Jan" => "01",
        "Feb" => "02",
        "Mar" => "03",
        "Apr" => "04",
        "May" => "05",
        "Jun" => "06",
        "Jul" => "07",
        "Aug" => "08",
        "Sep" => "09",
        "Oct" => "10",
        "Nov" => "11",
        "Dec" => "12",
        _ => return None,
    })
}

/// Parse a monetary amount, tolerating thousands separators.
///
/// Only the leading numeric prefix is consumed, so a cell like
/// `"14644 RWF"` parses as `14644`; trailing text never rejects an amount.
/// Returns `None` when the value has no numeric prefix at all or the result
/// is not finite.
pub fn parse_amount(value: &str) -> Option<f64> {
    let cleaned = value.trim().replace(',', "");
    let prefix = numeric_prefix(&cleaned)?;
    prefix.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Longest leading substring that is a valid decimal literal
///
/// Optional sign, integer digits, fraction, and exponent. Returns `None`
/// when no digits are found, and stops before a dangling `e` that has no
/// exponent digits after it.
fn numeric_prefix(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut saw_digit = false;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
        saw_digit = true;
    }
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
            saw_digit = true;
        }
    }
    if !saw_digit {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        if bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
                exp_end += 1;
            }
            end = exp_end;
        }
    }
    Some(&s[..end])
}

/// Extract a vendor name from payment-details free text.
///
/// Tries `Account Name : <text>` first, then `Name : <text>`, both
/// case-insensitive, capturing up to the end of the line. Returns the
/// trimmed capture, or `None` when neither pattern yields a non-empty name.
pub fn contact_from_payment_details(details: &str) -> Option<String> {
    let details = details.trim();
    if details.is_empty() {
        return None;
    }
    ACCOUNT_NAME_LINE
        .captures(details)
        .or_else(|| NAME_LINE.captures(details))
        .map(|c| c[1].trim().to_string())
        .filter(|name| !name.is_empty())
}
