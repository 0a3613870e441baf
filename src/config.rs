//! Mapping ruleset configuration.
//!
//! The converter engine treats the ruleset as opaque input: which source
//! columns feed which output columns, which columns are required, and the
//! output header itself all arrive as data. The ruleset is normally loaded
//! from a JSON file so operations staff can adjust the mapping without a
//! rebuild; compiled-in defaults cover the stock Jira-payment-queue export.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use crate::constants::OUTPUT_COLUMN_COUNT;
use crate::{Error, Result};

/// How one output column's value is derived from the source table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// First non-empty value across all sources and occurrences
    #[default]
    Plain,
    /// First value parseable with the export date grammar
    Date,
    /// First value parseable as a finite decimal number
    Amount,
    /// Contact resolution with payment-details free-text fallback
    Contact,
}

impl<'de> Deserialize<'de> for FieldKind {
    // Unknown or absent kind strings degrade to Plain rather than failing,
    // so a hand-edited mapping file stays loadable.
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw.as_deref() {
            Some("date") => FieldKind::Date,
            Some("amount") => FieldKind::Amount,
            Some("contact") => FieldKind::Contact,
            _ => FieldKind::Plain,
        })
    }
}

/// One configured rule: which source columns feed one output column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingField {
    /// Destination column name in the output schema
    pub output_column: String,

    /// Candidate source column names, tried in order
    #[serde(default)]
    pub source_names: Vec<String>,

    /// Resolution rule for this column
    #[serde(default)]
    pub kind: FieldKind,
}

impl MappingField {
    pub fn new(output_column: &str, source_names: &[&str], kind: FieldKind) -> Self {
        Self {
            output_column: output_column.to_string(),
            source_names: source_names.iter().map(|s| s.to_string()).collect(),
            kind,
        }
    }
}

/// Complete mapping ruleset for one conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MappingConfig {
    /// Source columns that must be present in the input header
    pub required_columns: Vec<String>,

    /// Output header, position-aligned with `mapping_fields`
    pub output_header: Vec<String>,

    /// One rule per output column, in output-schema order
    pub mapping_fields: Vec<MappingField>,

    /// Source column holding free-text payment details, used as the
    /// contact-name fallback
    pub payment_details_column: String,

    /// Preferred ordering for the source-template header
    pub template_column_order: Vec<String>,

    /// Tax types offered as defaults
    pub default_tax_types: Vec<String>,

    /// Quantities offered as defaults
    pub default_quantity_options: Vec<i64>,

    /// Account codes offered as defaults
    pub default_account_codes: Vec<String>,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

impl MappingConfig {
    /// Compiled-in ruleset for the stock Jira payment-queue export
    pub fn builtin() -> Self {
        use FieldKind::{Amount, Contact, Date, Plain};

        let mapping_fields = vec![
            MappingField::new("*ContactName", &["Custom field (Vendor to be paid)"], Contact),
            MappingField::new("EmailAddress", &[], Plain),
            MappingField::new("POAddressLine1", &[], Plain),
            MappingField::new("POAddressLine2", &[], Plain),
            MappingField::new("POAddressLine3", &[], Plain),
            MappingField::new("POAddressLine4", &[], Plain),
            MappingField::new("POCity", &[], Plain),
            MappingField::new("PORegion", &[], Plain),
            MappingField::new("POPostalCode", &[], Plain),
            MappingField::new("POCountry", &[], Plain),
            MappingField::new("*InvoiceNumber", &["Issue key"], Plain),
            MappingField::new("*InvoiceDate", &["Resolved", "Created"], Date),
            MappingField::new("*DueDate", &["Due date"], Date),
            MappingField::new("Total", &["Custom field (Amount)"], Amount),
            MappingField::new("InventoryItemCode", &[], Plain),
            MappingField::new("Description", &["Summary"], Plain),
            MappingField::new("*Quantity", &[], Plain),
            MappingField::new("*UnitAmount", &[], Plain),
            MappingField::new("*AccountCode", &[], Plain),
            MappingField::new("*TaxType", &[], Plain),
            MappingField::new("TaxAmount", &[], Plain),
            MappingField::new("TrackingName1", &[], Plain),
            MappingField::new("TrackingOption1", &[], Plain),
            MappingField::new("TrackingName2", &[], Plain),
            MappingField::new("TrackingOption2", &[], Plain),
            MappingField::new("Currency", &["Custom field (Currency)"], Plain),
        ];
        let output_header = mapping_fields
            .iter()
            .map(|f| f.output_column.clone())
            .collect();

        Self {
            required_columns: to_strings(&["Summary", "Issue key", "Created"]),
            output_header,
            mapping_fields,
            payment_details_column: "Custom field (Payment details)".to_string(),
            template_column_order: to_strings(&[
                "Summary",
                "Issue key",
                "Created",
                "Resolved",
                "Due date",
                "Custom field (Amount)",
                "Custom field (Currency)",
                "Custom field (Vendor to be paid)",
                "Custom field (Payment details)",
            ]),
            default_tax_types: to_strings(&[
                "None",
                "GST",
                "VAT",
                "OUTPUT",
                "INPUT",
                "Zero Rated",
                "Exempt",
            ]),
            default_quantity_options: vec![1, 2, 3, 4, 5, 10],
            default_account_codes: to_strings(&["", "200", "400", "310"]),
        }
    }

    /// Load a ruleset from a JSON file.
    ///
    /// Lists left absent or empty in the file fall back to the builtin
    /// ruleset, so a minimal file can override just one section.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read mapping file {}", path.display()), e))?;

        let parsed: MappingConfig = serde_json::from_str(&text)
            .map_err(|e| Error::mapping_parsing(path.display().to_string(), e))?;

        let config = parsed.with_fallbacks();
        config.validate()?;
        debug!(
            "Loaded mapping ruleset from {}: {} output columns, {} required source columns",
            path.display(),
            config.output_header.len(),
            config.required_columns.len()
        );
        Ok(config)
    }

    /// Replace empty sections with their builtin counterparts
    fn with_fallbacks(mut self) -> Self {
        let builtin = Self::builtin();
        if self.required_columns.is_empty() {
            self.required_columns = builtin.required_columns;
        }
        if self.output_header.is_empty() {
            self.output_header = builtin.output_header;
        }
        if self.mapping_fields.is_empty() {
            self.mapping_fields = builtin.mapping_fields;
        }
        if self.payment_details_column.is_empty() {
            self.payment_details_column = builtin.payment_details_column;
        }
        if self.template_column_order.is_empty() {
            self.template_column_order = builtin.template_column_order;
        }
        if self.default_tax_types.is_empty() {
            self.default_tax_types = builtin.default_tax_types;
        }
        if self.default_quantity_options.is_empty() {
            self.default_quantity_options = builtin.default_quantity_options;
        }
        if self.default_account_codes.is_empty() {
            self.default_account_codes = builtin.default_account_codes;
        }
        self
    }

    /// Check ruleset geometry before any conversion runs
    pub fn validate(&self) -> Result<()> {
        if self.mapping_fields.len() != self.output_header.len() {
            return Err(Error::configuration(format!(
                "Mapping ruleset has {} fields but the output header has {} columns",
                self.mapping_fields.len(),
                self.output_header.len()
            )));
        }
        // The validator extracts logical fields by fixed position, so the
        // reference columns must all exist.
        if self.output_header.len() < OUTPUT_COLUMN_COUNT {
            return Err(Error::configuration(format!(
                "Output header has {} columns; at least {} are required",
                self.output_header.len(),
                OUTPUT_COLUMN_COUNT
            )));
        }
        Ok(())
    }

    /// Source columns for the downloadable input template.
    ///
    /// Unique names only: configured ordering first, then the remainder
    /// sorted alphabetically.
    pub fn template_columns(&self) -> Vec<String> {
        let mut known: HashSet<&str> = HashSet::new();
        for field in &self.mapping_fields {
            for name in &field.source_names {
                if !name.is_empty() {
                    known.insert(name);
                }
            }
        }
        for name in &self.required_columns {
            known.insert(name);
        }
        known.insert(&self.payment_details_column);

        let mut ordered: Vec<String> = self
            .template_column_order
            .iter()
            .filter(|c| known.contains(c.as_str()))
            .cloned()
            .collect();
        let mut rest: Vec<String> = known
            .iter()
            .filter(|c| !self.template_column_order.iter().any(|o| o == *c))
            .map(|c| c.to_string())
            .collect();
        rest.sort();
        ordered.extend(rest);
        ordered
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
