//! Command-line argument definitions for billbridge
//!
//! This module defines the complete CLI interface using the clap derive API.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::app::models::ConversionDefaults;

/// CLI arguments for the billbridge converter
///
/// Converts support-ticketing CSV exports (Jira Service Desk payment
/// queues) into the Xero bill-import CSV format, reporting per-row
/// diagnostics without aborting the whole batch.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "billbridge",
    version,
    about = "Convert ticketing CSV exports into the Xero bill-import format",
    long_about = "Converts support-ticketing CSV exports into the Xero bill-import CSV \
                  format. Every input row is validated independently: bad rows are \
                  dropped with a diagnostic naming the offending fields, and the rest \
                  of the batch still converts."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for billbridge
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Convert a ticketing export into bill-import CSV (main command)
    Convert(ConvertArgs),
    /// Write the source-template header for the configured mapping
    Template(TemplateArgs),
}

/// Arguments for the convert command
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// Input CSV export to convert
    ///
    /// Reads from stdin when omitted. Inputs above 2 MiB are rejected
    /// before parsing.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input CSV export (stdin when omitted)"
    )]
    pub input: Option<PathBuf>,

    /// Where to write the bill-import CSV
    ///
    /// Writes to stdout when omitted.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output bill-import CSV (stdout when omitted)"
    )]
    pub output: Option<PathBuf>,

    /// Path to a mapping ruleset file
    ///
    /// JSON file describing source columns, required columns, and the
    /// output header. The builtin ruleset for the stock Jira payment-queue
    /// export is used when omitted; sections left empty in the file fall
    /// back to the builtin values.
    #[arg(
        short = 'm',
        long = "mapping",
        value_name = "FILE",
        help = "Mapping ruleset file (JSON); builtin ruleset when omitted"
    )]
    pub mapping: Option<PathBuf>,

    /// Tax type applied to every accepted row
    #[arg(
        long = "tax-type",
        value_name = "TYPE",
        help = "Tax type for accepted rows (default \"None\")"
    )]
    pub tax_type: Option<String>,

    /// Account code applied to every accepted row
    #[arg(
        long = "account-code",
        value_name = "CODE",
        help = "Account code for accepted rows (default empty)"
    )]
    pub account_code: Option<String>,

    /// Line quantity applied to every accepted row
    #[arg(
        short = 'q',
        long = "quantity",
        value_name = "N",
        help = "Line quantity for accepted rows (default 1)"
    )]
    pub quantity: Option<i64>,

    /// Write a JSON conversion report
    ///
    /// The report carries the accepted row count and every diagnostic,
    /// suitable for feeding back into upload tooling.
    #[arg(
        long = "report",
        value_name = "FILE",
        help = "Write a JSON conversion report to FILE"
    )]
    pub report: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(long = "quiet", help = "Only show errors")]
    pub quiet: bool,
}

impl ConvertArgs {
    /// Log level derived from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Per-call defaults assembled from the CLI flags
    pub fn conversion_defaults(&self) -> ConversionDefaults {
        ConversionDefaults {
            tax_type: self.tax_type.clone(),
            account_code: self.account_code.clone(),
            quantity: self.quantity,
        }
    }
}

/// Arguments for the template command
#[derive(Debug, Clone, Parser)]
pub struct TemplateArgs {
    /// Where to write the template header line
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file for the template header (stdout when omitted)"
    )]
    pub output: Option<PathBuf>,

    /// Path to a mapping ruleset file
    #[arg(
        short = 'm',
        long = "mapping",
        value_name = "FILE",
        help = "Mapping ruleset file (JSON); builtin ruleset when omitted"
    )]
    pub mapping: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

impl TemplateArgs {
    /// Log level derived from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
