//! Command implementations for the NCOA processor CLI
//!
//! Each pass is implemented in its own module. The `*_files` functions do
//! the work without touching logging or the console, so they can be driven
//! directly from tests.

pub mod merge;
pub mod parse;
pub mod shared;

pub use merge::{MergeOutcome, merge_files};
pub use parse::{ParseOutcome, parse_file};
pub use shared::RunStats;

use crate::Result;
use crate::cli::args::Commands;

/// Main command runner
///
/// Dispatches to the handler of the given subcommand:
/// - `parse`: fixed-width master file to normalized CSV
/// - `merge`: move-update feed back onto the original records
pub fn run(command: Commands) -> Result<RunStats> {
    match command {
        Commands::Parse(parse_args) => parse::run_parse(parse_args),
        Commands::Merge(merge_args) => merge::run_merge(merge_args),
    }
}
