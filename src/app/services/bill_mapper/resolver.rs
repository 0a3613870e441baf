//! Per-row field resolution against the mapping ruleset
//!
//! The resolver is built once per conversion from the column catalog and the
//! ordered mapping fields, then consulted read-only for every data row. Each
//! mapping kind has its own scan strategy:
//!
//! - `Contact` tries each source's first occurrence, then falls back to
//!   free-text extraction from the payment-details column
//! - `Date` and `Amount` scan every occurrence of every source and take the
//!   first value that parses
//! - `Plain` takes the first non-empty value across all occurrences, falling
//!   back to the primary source's first-occurrence cell (even if empty)

use super::catalog::ColumnCatalog;
use super::field_parsers::{contact_from_payment_details, parse_amount, parse_export_date};
use crate::app::models::Cell;
use crate::config::{FieldKind, MappingField};

/// Read-only resolution plan for one conversion call
#[derive(Debug)]
pub struct FieldResolver<'a> {
    catalog: &'a ColumnCatalog,
    fields: &'a [MappingField],

    /// First-occurrence index of each field's primary source, if any
    primary_indices: Vec<Option<usize>>,

    /// First-occurrence index of the payment-details column, if present
    payment_details_index: Option<usize>,
}

impl<'a> FieldResolver<'a> {
    pub fn new(
        catalog: &'a ColumnCatalog,
        fields: &'a [MappingField],
        payment_details_column: &str,
    ) -> Self {
        let primary_indices = fields
            .iter()
            .map(|field| catalog.first_index_of_any(&field.source_names))
            .collect();

        Self {
            catalog,
            fields,
            primary_indices,
            payment_details_index: catalog.first_index(payment_details_column),
        }
    }

    /// Resolve the full candidate output row for one data row
    pub fn resolve_row(&self, row: &[String]) -> Vec<Cell> {
        self.fields
            .iter()
            .enumerate()
            .map(|(position, field)| self.resolve_field(position, field, row))
            .collect()
    }

    /// First non-empty raw value for a field, across all sources and
    /// occurrences, without any kind-specific parsing.
    ///
    /// Used by the validator to tell "amount missing" apart from "amount
    /// present but unparseable".
    pub fn first_raw(&self, position: usize, row: &[String]) -> Option<String> {
        let field = &self.fields[position];
        for name in &field.source_names {
            for &index in self.catalog.indices(name) {
                let value = cell_at(row, Some(index));
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
        None
    }

    fn resolve_field(&self, position: usize, field: &MappingField, row: &[String]) -> Cell {
        match field.kind {
            FieldKind::Contact => Cell::Text(self.resolve_contact(field, row)),
            FieldKind::Date => self.resolve_date(field, row),
            FieldKind::Amount => self.resolve_amount(field, row),
            FieldKind::Plain => Cell::Text(self.resolve_plain(position, field, row)),
        }
    }

    /// Contact: first occurrences only, then payment-details free text
    fn resolve_contact(&self, field: &MappingField, row: &[String]) -> String {
        for name in &field.source_names {
            let value = cell_at(row, self.catalog.first_index(name));
            if !value.is_empty() {
                return value.to_string();
            }
        }
        contact_from_payment_details(cell_at(row, self.payment_details_index)).unwrap_or_default()
    }

    /// Date: every occurrence of every source, first successful parse wins
    fn resolve_date(&self, field: &MappingField, row: &[String]) -> Cell {
        for name in &field.source_names {
            for &index in self.catalog.indices(name) {
                if let Some(date) = parse_export_date(cell_at(row, Some(index))) {
                    return Cell::Text(date);
                }
            }
        }
        Cell::empty()
    }

    /// Amount: every occurrence of every source, first finite parse wins
    fn resolve_amount(&self, field: &MappingField, row: &[String]) -> Cell {
        for name in &field.source_names {
            for &index in self.catalog.indices(name) {
                if let Some(amount) = parse_amount(cell_at(row, Some(index))) {
                    return Cell::Number(amount);
                }
            }
        }
        Cell::empty()
    }

    /// Plain: first non-empty across all occurrences, else the primary
    /// source's first-occurrence value as-is
    fn resolve_plain(&self, position: usize, field: &MappingField, row: &[String]) -> String {
        for name in &field.source_names {
            for &index in self.catalog.indices(name) {
                let value = cell_at(row, Some(index));
                if !value.is_empty() {
                    return value.to_string();
                }
            }
        }
        cell_at(row, self.primary_indices[position]).to_string()
    }
}

/// Trimmed cell value at an optional index; out-of-range reads as empty
fn cell_at(row: &[String], index: Option<usize>) -> &str {
    index
        .and_then(|i| row.get(i))
        .map(|s| s.trim())
        .unwrap_or("")
}