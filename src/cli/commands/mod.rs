//! Command implementations for the billbridge CLI
//!
//! This module contains the command execution logic and error handling for
//! the CLI interface. Each command is implemented in its own module.

pub mod convert;
pub mod shared;
pub mod template;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for billbridge
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `convert`: the conversion workflow with CSV output and diagnostics
/// - `template`: source-template header generation
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Convert(convert_args)) => convert::run_convert(&convert_args),
        Some(Commands::Template(template_args)) => template::run_template(&template_args),
        None => Ok(()),
    }
}
