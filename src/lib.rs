//! Billbridge Library
//!
//! A Rust library for converting support-ticketing CSV exports (Jira Service
//! Desk payment queues) into the Xero bill-import CSV format.
//!
//! This library provides tools for:
//! - Lenient, quote-aware tokenizing of delimited text (RFC 4180 style)
//! - Resolving source columns by name, including duplicate column names
//! - Mapping and validating each data row against a fixed output schema
//! - Collecting per-row diagnostics without aborting the whole batch
//! - Serializing accepted rows back to importable CSV output

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod bill_mapper;
        pub mod csv;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Cell, ConversionDefaults, ConversionError, ConversionResult, OutputRow};
pub use app::services::bill_mapper::{convert_rows, convert_text};
pub use config::{FieldKind, MappingConfig, MappingField};

/// Result type alias for billbridge operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for conversion-boundary failures
///
/// Per-row problems are never errors: they travel as data inside
/// [`ConversionResult`]. This enum covers the failures that stop a call
/// before (or instead of) row processing.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input text is blank or whitespace-only
    #[error("Input is empty")]
    EmptyInput,

    /// Input exceeds the configured size cap
    #[error("Input is too large: {size} bytes (max {limit} bytes)")]
    InputTooLarge { size: usize, limit: usize },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Mapping ruleset file could not be parsed
    #[error("Invalid mapping file '{path}': {source}")]
    MappingParsing {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Conversion produced no importable rows
    #[error("Conversion failed: {message}")]
    ConversionFailed { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a mapping-file parse error
    pub fn mapping_parsing(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::MappingParsing {
            path: path.into(),
            source,
        }
    }

    /// Create a conversion-failed error
    pub fn conversion_failed(message: impl Into<String>) -> Self {
        Self::ConversionFailed {
            message: message.into(),
        }
    }
}
