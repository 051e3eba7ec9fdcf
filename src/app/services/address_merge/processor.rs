//! Batch merge over a whole move-update feed

use super::merge::merge;
use super::original_index::OriginalIndex;
use crate::Result;
use crate::app::models::{Eligibility, MergedOutputRecord, UpdatedAddressRecord};
use crate::app::services::address_splitter::split;
use crate::app::services::report_writer::ProgressReporter;
use tracing::info;

/// Merged rows of one run, in feed order per bucket
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeResult {
    pub eligible: Vec<MergedOutputRecord>,
    pub ineligible: Vec<MergedOutputRecord>,
}

impl MergeResult {
    pub fn push(&mut self, record: MergedOutputRecord) {
        match record.eligibility() {
            Eligibility::Eligible => self.eligible.push(record),
            Eligibility::Ineligible => self.ineligible.push(record),
        }
    }

    /// Eligible rows followed by ineligible rows
    pub fn rows(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        self.eligible
            .iter()
            .chain(self.ineligible.iter())
            .map(MergedOutputRecord::to_row)
    }

    pub fn total(&self) -> usize {
        self.eligible.len() + self.ineligible.len()
    }
}

/// Merge every feed row against the index, stopping at the first error
///
/// The index must be complete before the first row is merged.
pub fn merge_feed<I>(
    index: &OriginalIndex,
    updates: I,
    progress: &mut ProgressReporter,
) -> Result<MergeResult>
where
    I: IntoIterator<Item = Result<UpdatedAddressRecord>>,
{
    let mut result = MergeResult::default();

    for update in updates {
        let update = update?;
        let original = index.lookup(&update.company_account_key, update.row_number)?;
        let split_address = split(original)?;

        result.push(merge(original, &split_address, &update)?);
        progress.increment();
    }

    info!(
        "Matching complete: {} records ({} eligible, {} ineligible)",
        result.total(),
        result.eligible.len(),
        result.ineligible.len()
    );
    Ok(result)
}
