use billbridge::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Billbridge - Ticketing Export to Bill-Import Converter");
    println!("======================================================");
    println!();
    println!("Convert support-ticketing CSV exports into the Xero bill-import CSV");
    println!("format, validating every row and reporting per-row diagnostics.");
    println!();
    println!("USAGE:");
    println!("    billbridge <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    convert     Convert a ticketing export into bill-import CSV (main command)");
    println!("    template    Write the source-template header for the configured mapping");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Convert an export with the builtin mapping:");
    println!("    billbridge convert --input export.csv --output bills.csv");
    println!();
    println!("    # Convert with custom defaults and a diagnostic report:");
    println!("    billbridge convert -i export.csv -o bills.csv \\");
    println!("                       --tax-type VAT --account-code 400 --report report.json");
    println!();
    println!("    # Write the blank source template:");
    println!("    billbridge template --output template.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    billbridge <COMMAND> --help");
}
