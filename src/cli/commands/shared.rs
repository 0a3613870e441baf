//! Shared helpers for CLI commands: logging setup, config and I/O plumbing

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::MappingConfig;
use crate::constants::MAX_INPUT_BYTES;
use crate::{Error, Result};

/// Set up structured logging to stderr
///
/// `RUST_LOG` wins when set; otherwise the level derived from the CLI
/// verbosity flags applies. Quiet mode drops timestamps for clean piping.
pub fn setup_logging(log_level: &str, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("billbridge={}", log_level)));

    // try_init: a subscriber may already be installed (repeat calls in tests)
    let result = if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if result.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
}

/// Load the mapping ruleset from a file, or use the builtin one
pub fn load_mapping(path: Option<&PathBuf>) -> Result<MappingConfig> {
    match path {
        Some(path) => MappingConfig::load(path),
        None => {
            debug!("No mapping file supplied, using builtin ruleset");
            Ok(MappingConfig::builtin())
        }
    }
}

/// Read the input text from a file or stdin, enforcing the size cap
pub fn read_input(path: Option<&PathBuf>) -> Result<String> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read input file {}", path.display()), e))?,
        None => std::io::read_to_string(std::io::stdin())
            .map_err(|e| Error::io("Failed to read input from stdin", e))?,
    };

    if text.len() > MAX_INPUT_BYTES {
        return Err(Error::InputTooLarge {
            size: text.len(),
            limit: MAX_INPUT_BYTES,
        });
    }
    Ok(text)
}

/// Write output text to a file, or to stdout when no path is given
pub fn write_output(path: Option<&PathBuf>, text: &str) -> Result<()> {
    match path {
        Some(path) => write_text_file(path, text),
        None => {
            println!("{}", text);
            Ok(())
        }
    }
}

/// Write a text file with an I/O error carrying the path
pub fn write_text_file(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text)
        .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))
}
