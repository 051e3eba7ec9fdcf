use clap::Parser;
use ncoa_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    match commands::run(command) {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("NCOA Processor - Account Address Reconciler");
    println!("===========================================");
    println!();
    println!("Prepares fixed-width account master files for NCOA address");
    println!("standardization and merges the returned move-update feed back");
    println!("onto the original registration lines.");
    println!();
    println!("USAGE:");
    println!("    ncoa-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    parse       Decode, filter and normalize a fixed-width master file");
    println!("    merge       Merge a move-update feed with the original master file");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Normalize a quarterly master file (filter list next to it):");
    println!("    ncoa-processor parse /data/q3/NCOA_master.txt");
    println!();
    println!("    # Merge the standardized feed back:");
    println!("    ncoa-processor merge -o /data/q3/NCOA_master.txt -m /data/q3/ParsedData_MM.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    ncoa-processor <COMMAND> --help");
}
