//! Command-line argument definitions for the NCOA processor
//!
//! This module defines the CLI interface using the clap derive API. The two
//! subcommands mirror the two passes of a quarterly run: `parse` before the
//! file goes out for address standardization, `merge` after it comes back.

use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// CLI arguments for the NCOA processor
///
/// Reconciles a fixed-width account master file with an NCOA move-update
/// feed and produces eligible/ineligible mailing outputs.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ncoa-processor",
    version,
    about = "Reconcile fixed-width account address files with NCOA move-update feeds",
    long_about = "Prepares a fixed-width account master file for NCOA address standardization \
                  (parse) and merges the standardized move-update feed back with the original \
                  registration lines (merge). Records are routed into eligible and ineligible \
                  outputs by their tax status."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Decode, filter and normalize a fixed-width master file
    Parse(ParseArgs),
    /// Merge a move-update feed with the original master file
    Merge(MergeArgs),
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// Fixed-width master file (295-byte records)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Filter list of company or company+account numbers, one per line
    ///
    /// If not specified, records_to_filter.txt in the output directory is
    /// used when it exists; otherwise nothing is filtered.
    #[arg(
        short = 'f',
        long = "filter-list",
        value_name = "FILE",
        help = "Filter list of company or company+account numbers"
    )]
    pub filter_list: Option<PathBuf>,

    /// Directory for ParsedData.csv, FilteredRecords.txt and COUNTS.txt
    ///
    /// Defaults to the directory of the input file.
    #[arg(long = "output-dir", value_name = "DIR", help = "Output directory")]
    pub output_dir: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the merge command
#[derive(Debug, Clone, Parser)]
pub struct MergeArgs {
    /// Original fixed-width master file
    #[arg(
        short = 'o',
        long = "org",
        value_name = "FILE",
        help = "Original fixed-width master file"
    )]
    pub original: PathBuf,

    /// Move-update feed returned by address standardization (CSV)
    #[arg(
        short = 'm',
        long = "mm",
        value_name = "FILE",
        help = "Move-update feed returned by address standardization"
    )]
    pub update_feed: PathBuf,

    /// Directory for NCOA_Records.csv and the workbook
    ///
    /// Defaults to the directory of the move-update feed.
    #[arg(long = "output-dir", value_name = "DIR", help = "Output directory")]
    pub output_dir: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Options shared by every subcommand
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct CommonArgs {
    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// ~/.config/ncoa-processor/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: debug, -vv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for the final run report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Output format options for the final report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON format for scripting
    Json,
}

impl CommonArgs {
    /// Determine the log level from the verbosity flags
    ///
    /// Progress lines are logged at info, so that is the default.
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }

    /// Progress bars are hidden in quiet mode and for JSON output
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.output_format == OutputFormat::Human
    }

    /// Validate the shared options
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            require_file(config_file, "Config file")?;
        }
        Ok(())
    }
}

impl ParseArgs {
    /// Validate the parse command arguments
    pub fn validate(&self) -> Result<()> {
        require_file(&self.input, "Input file")?;

        if let Some(filter_list) = &self.filter_list {
            require_file(filter_list, "Filter list")?;
        }
        if let Some(output_dir) = &self.output_dir {
            require_dir(output_dir)?;
        }

        self.common.validate()
    }
}

impl MergeArgs {
    /// Validate the merge command arguments
    pub fn validate(&self) -> Result<()> {
        require_file(&self.original, "Original file")?;
        require_file(&self.update_feed, "Move-update feed")?;

        if let Some(output_dir) = &self.output_dir {
            require_dir(output_dir)?;
        }

        self.common.validate()
    }
}

fn require_file(path: &Path, label: &str) -> Result<()> {
    if !path.exists() {
        return Err(Error::configuration(format!(
            "{} does not exist: {}",
            label,
            path.display()
        )));
    }

    if !path.is_file() {
        return Err(Error::configuration(format!(
            "{} is not a file: {}",
            label,
            path.display()
        )));
    }

    Ok(())
}

fn require_dir(path: &Path) -> Result<()> {
    if path.exists() && !path.is_dir() {
        return Err(Error::configuration(format!(
            "Output path is not a directory: {}",
            path.display()
        )));
    }
    Ok(())
}
