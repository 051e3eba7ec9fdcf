//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! the parse and merge command implementations.

use crate::cli::args::{CommonArgs, OutputFormat};
use crate::config::Config;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use colored::Colorize;
use indicatif::HumanDuration;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Run statistics reported at the end of either pass
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Subcommand that produced these statistics
    pub command: String,
    /// Wall-clock start of the run
    pub started_at: Option<DateTime<Utc>>,
    /// Records or feed rows read
    pub records_read: usize,
    pub eligible: usize,
    pub ineligible: usize,
    /// Records removed by the filter list (parse only)
    pub filtered: usize,
    /// Total processing time
    pub processing_time: Duration,
    /// Output file sizes in bytes
    pub output_sizes: Vec<(String, u64)>,
}

impl RunStats {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            started_at: Some(Utc::now()),
            ..Default::default()
        }
    }

    /// Calculate total output size in bytes
    pub fn total_output_size(&self) -> u64 {
        self.output_sizes.iter().map(|(_, size)| size).sum()
    }

    /// Record the size of a written output file
    pub fn add_output(&mut self, path: &Path) {
        let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        self.output_sizes.push((path.display().to_string(), size));
    }

    /// Format output size in human-readable format
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

/// Set up structured logging on stderr
///
/// `RUST_LOG` overrides the level derived from the verbosity flags. A
/// subscriber that is already installed is left in place.
pub fn setup_logging(args: &CommonArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ncoa_processor={}", log_level)));

    let installed = if args.quiet {
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

    if installed.is_err() {
        debug!("Logging already initialized");
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using the layered approach (defaults -> file -> args)
pub fn load_configuration(args: &CommonArgs, output_dir: Option<&Path>) -> Result<Config> {
    info!("Loading configuration");

    let default_config_path = if args.config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    match config_file {
        Some(config_path) => info!("Using config file: {}", config_path.display()),
        None => debug!("No config file found, using defaults"),
    }

    let mut config = Config::load_layered(config_file)?;
    apply_cli_overrides(&mut config, args, output_dir);
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &CommonArgs, output_dir: Option<&Path>) {
    if let Some(dir) = output_dir {
        config.output.output_dir = Some(dir.to_path_buf());
    }
    if !args.show_progress() {
        config.processing.show_progress = false;
    }
}

/// Create the output directory if it doesn't exist
pub fn prepare_output_dir(output_dir: &Path) -> Result<PathBuf> {
    if !output_dir.exists() {
        std::fs::create_dir_all(output_dir).map_err(|e| {
            Error::configuration(format!(
                "Failed to create output directory '{}': {}",
                output_dir.display(),
                e
            ))
        })?;
    }

    info!("Output directory: {}", output_dir.display());
    Ok(output_dir.to_path_buf())
}

/// Print the final report in the requested format
pub fn generate_final_report(format: OutputFormat, stats: &RunStats) -> Result<()> {
    match format {
        OutputFormat::Human => {
            println!("{}", render_human_report(stats));
            Ok(())
        }
        OutputFormat::Json => {
            println!("{}", render_json_report(stats)?);
            Ok(())
        }
    }
}

/// Human-readable report
pub fn render_human_report(stats: &RunStats) -> String {
    let mut lines = vec![
        String::new(),
        format!("NCOA {} complete", stats.command).green().bold().to_string(),
        "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".to_string(),
        "Summary:".bold().to_string(),
        format!("   • Records read: {}", stats.records_read),
        format!("   • Eligible: {}", stats.eligible),
        format!("   • Ineligible: {}", stats.ineligible),
    ];

    if stats.command == "parse" {
        lines.push(format!("   • Filtered: {}", stats.filtered));
    }

    lines.push(format!(
        "   • Total output size: {}",
        RunStats::format_size(stats.total_output_size())
    ));
    lines.push(format!(
        "   • Processing time: {}",
        HumanDuration(stats.processing_time)
    ));

    if !stats.output_sizes.is_empty() {
        lines.push(String::new());
        lines.push("Output Files:".bold().to_string());
        for (filename, size) in &stats.output_sizes {
            lines.push(format!(
                "   • {}: {}",
                filename,
                RunStats::format_size(*size)
            ));
        }
    }

    lines.join("\n")
}

/// JSON report for machine consumption
pub fn render_json_report(stats: &RunStats) -> Result<String> {
    let json_stats = serde_json::json!({
        "command": stats.command,
        "started_at": stats.started_at,
        "records_read": stats.records_read,
        "eligible": stats.eligible,
        "ineligible": stats.ineligible,
        "filtered": stats.filtered,
        "processing_time_seconds": stats.processing_time.as_secs_f64(),
        "total_output_size_bytes": stats.total_output_size(),
        "output_files": stats.output_sizes.iter().map(|(name, size)| {
            serde_json::json!({
                "filename": name,
                "size_bytes": size
            })
        }).collect::<Vec<_>>()
    });

    serde_json::to_string_pretty(&json_stats)
        .map_err(|e| Error::configuration(format!("Failed to render JSON report: {}", e)))
}
