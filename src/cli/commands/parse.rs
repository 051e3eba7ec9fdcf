//! Parse command implementation
//!
//! Decodes the fixed-width master file, removes filtered accounts, splits
//! every remaining record and writes the normalized file for address
//! standardization together with the filtered-records audit and the counts
//! report.

use super::shared::{
    RunStats, generate_final_report, load_configuration, prepare_output_dir, setup_logging,
};
use crate::app::models::{FilteredRecord, NormalizedRow};
use crate::app::services::record_classifier::{FilterList, classify_records};
use crate::app::services::record_decoder::{FixedWidthReader, decode_records};
use crate::app::services::report_writer::{CountsReport, ProgressReporter, write_csv};
use crate::cli::args::{OutputFormat, ParseArgs};
use crate::config::Config;
use crate::constants::{FILTERED_HEADER, NORMALIZED_HEADER, RECORD_WIDTH};
use crate::Result;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Files and counts produced by one parse run
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub counts: CountsReport,
    pub parsed_file: PathBuf,
    pub filtered_file: PathBuf,
    pub counts_file: PathBuf,
}

/// Parse command runner
///
/// 1. Set up logging and configuration
/// 2. Load the filter list
/// 3. Decode and classify every record
/// 4. Write the outputs and print the counts report
pub fn run_parse(args: ParseArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    setup_logging(&args.common)?;

    info!("Starting NCOA parse of {}", args.input.display());
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = load_configuration(&args.common, args.output_dir.as_deref())?;
    debug!("Loaded configuration: {:?}", config);

    let output_dir = prepare_output_dir(&config.output.resolve_dir(&args.input))?;
    let outcome = parse_file(&args.input, args.filter_list.as_deref(), &output_dir, &config)?;

    if args.common.output_format == OutputFormat::Human {
        println!("{}", outcome.counts.render());
    }

    let mut stats = RunStats::new("parse");
    stats.records_read = outcome.counts.total_records();
    stats.eligible = outcome.counts.eligible;
    stats.ineligible = outcome.counts.ineligible;
    stats.filtered = outcome.counts.filtered;
    for path in [&outcome.parsed_file, &outcome.filtered_file, &outcome.counts_file] {
        stats.add_output(path);
    }
    stats.processing_time = start_time.elapsed();

    generate_final_report(args.common.output_format, &stats)?;
    Ok(stats)
}

/// Run the parse pass on one master file
///
/// With no explicit filter list, the configured filter file in `output_dir`
/// is used if present.
pub fn parse_file(
    input: &Path,
    filter_list: Option<&Path>,
    output_dir: &Path,
    config: &Config,
) -> Result<ParseOutcome> {
    let filter = match filter_list {
        Some(path) => FilterList::load(path)?,
        None => FilterList::load_optional(&output_dir.join(&config.processing.filter_file_name))?,
    };

    let mut progress = ProgressReporter::new("records", config.processing.parse_progress_interval);
    if config.processing.show_progress {
        let estimated = std::fs::metadata(input)
            .map(|m| (m.len() as usize).div_ceil(RECORD_WIDTH))
            .unwrap_or(0);
        progress = progress.with_total(estimated).with_progress_bar();
    }

    let reader = FixedWidthReader::open(input)?;
    let result = match classify_records(decode_records(reader), &filter, &mut progress) {
        Ok(result) => {
            progress.finish("records parsed");
            result
        }
        Err(e) => {
            progress.finish_with_error(&e.to_string());
            return Err(e);
        }
    };

    let parsed_file = output_dir.join(&config.output.parsed_file);
    write_csv(
        &parsed_file,
        &NORMALIZED_HEADER,
        result.normalized_rows().map(NormalizedRow::to_row),
    )?;

    let filtered_file = output_dir.join(&config.output.filtered_file);
    write_csv(
        &filtered_file,
        &FILTERED_HEADER,
        result.filtered.iter().map(FilteredRecord::to_row),
    )?;

    let counts = CountsReport {
        file_name: input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
        eligible: result.eligible.len(),
        ineligible: result.ineligible.len(),
        filtered: result.filtered.len(),
        filter_entries: filter.entries().to_vec(),
        address_start_points: result.address_start_points.clone(),
    };
    let counts_file = output_dir.join(&config.output.counts_file);
    counts.write(&counts_file)?;

    info!(
        "Parse complete: {} records to process, {} filtered",
        counts.records_to_process(),
        counts.filtered
    );

    Ok(ParseOutcome {
        counts,
        parsed_file,
        filtered_file,
        counts_file,
    })
}
