//! Merge command implementation
//!
//! Joins the move-update feed returned by address standardization with the
//! original master file and writes the merged records plus the
//! Eligible/Ineligible workbook.

use super::shared::{
    RunStats, generate_final_report, load_configuration, prepare_output_dir, setup_logging,
};
use crate::app::models::MergedOutputRecord;
use crate::app::services::address_merge::{
    MergeResult, OriginalIndex, UpdateFeedReader, merge_feed,
};
use crate::app::services::report_writer::{ProgressReporter, Sheet, Workbook, write_csv};
use crate::cli::args::MergeArgs;
use crate::config::Config;
use crate::constants::MERGED_HEADER;
use crate::Result;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Files and rows produced by one merge run
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub result: MergeResult,
    pub merged_file: PathBuf,
    pub workbook_file: PathBuf,
}

/// Merge command runner
///
/// 1. Set up logging and configuration
/// 2. Resolve the feed header, then index the original file
/// 3. Merge every feed row in feed order
/// 4. Write the merged file and the workbook
pub fn run_merge(args: MergeArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    setup_logging(&args.common)?;

    info!("Starting NCOA merge");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = load_configuration(&args.common, args.output_dir.as_deref())?;
    debug!("Loaded configuration: {:?}", config);

    let output_dir = prepare_output_dir(&config.output.resolve_dir(&args.update_feed))?;
    let outcome = merge_files(&args.original, &args.update_feed, &output_dir, &config)?;

    let mut stats = RunStats::new("merge");
    stats.records_read = outcome.result.total();
    stats.eligible = outcome.result.eligible.len();
    stats.ineligible = outcome.result.ineligible.len();
    stats.add_output(&outcome.merged_file);
    stats.add_output(&outcome.workbook_file);
    stats.processing_time = start_time.elapsed();

    generate_final_report(args.common.output_format, &stats)?;
    Ok(stats)
}

/// Run the merge pass for one original file and its move-update feed
pub fn merge_files(
    original: &Path,
    update_feed: &Path,
    output_dir: &Path,
    config: &Config,
) -> Result<MergeOutcome> {
    // Header problems surface before the original file is read
    let feed = UpdateFeedReader::open(update_feed)?;
    let index = OriginalIndex::load(original)?;

    let updates = feed.collect::<Result<Vec<_>>>()?;
    let mut progress = merge_progress(config, updates.len());

    let result = match merge_feed(&index, updates.into_iter().map(Ok), &mut progress) {
        Ok(result) => {
            progress.finish("records matched");
            result
        }
        Err(e) => {
            progress.finish_with_error(&e.to_string());
            return Err(e);
        }
    };

    info!(
        "Merged {} with {}",
        original.display(),
        update_feed.display()
    );

    let merged_file = output_dir.join(&config.output.merged_file);
    write_csv(&merged_file, &MERGED_HEADER, result.rows())?;

    let mut workbook = Workbook::new(&config.output.workbook_name, &MERGED_HEADER);
    workbook
        .add_sheet(Sheet::new(
            &config.output.eligible_sheet,
            result.eligible.iter().map(MergedOutputRecord::to_row).collect(),
        ))
        .add_sheet(Sheet::new(
            &config.output.ineligible_sheet,
            result.ineligible.iter().map(MergedOutputRecord::to_row).collect(),
        ));
    let workbook_file = workbook.save(output_dir)?;

    Ok(MergeOutcome {
        result,
        merged_file,
        workbook_file,
    })
}

/// Progress over a feed whose row count is known up front
fn merge_progress(config: &Config, total: usize) -> ProgressReporter {
    let progress = ProgressReporter::new("records matched", config.processing.merge_progress_interval)
        .with_total(total);
    if config.processing.show_progress {
        progress.with_progress_bar()
    } else {
        progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_progress_reports_against_feed_total() {
        let mut config = Config::default();
        config.processing.show_progress = false;

        let mut progress = merge_progress(&config, 3);
        progress.increment();
        progress.increment();

        assert_eq!(progress.status_line(), "2 of 3 records matched");
    }
}
