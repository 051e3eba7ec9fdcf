//! Per-record classification and the batch parse run

use super::filter_list::FilterList;
use super::result::ClassificationResult;
use crate::Result;
use crate::app::models::{Eligibility, FilteredRecord, NormalizedRow, ParsedRecord};
use crate::app::services::address_splitter::split;
use crate::app::services::report_writer::ProgressReporter;
use tracing::info;

/// Routing decision for one master record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Eligible(NormalizedRow),
    Ineligible(NormalizedRow),
    Filtered(FilteredRecord),
}

/// Classify one record
///
/// The filter check runs before the split, so a filtered record with a bad
/// address start point is still filtered rather than rejected.
pub fn classify(record: &ParsedRecord, filter: &FilterList) -> Result<Classification> {
    if filter.matches(record) {
        return Ok(Classification::Filtered(FilteredRecord {
            sequence: record.line_number,
            company_number: record.company_number.clone(),
            account_number: record.account_number.clone(),
            name: record.registration_lines[0].clone(),
        }));
    }

    let row = NormalizedRow {
        company_account_key: record.company_account_key(),
        split: split(record)?,
        status: record.status.clone(),
    };

    Ok(match record.eligibility() {
        Eligibility::Eligible => Classification::Eligible(row),
        Eligibility::Ineligible => Classification::Ineligible(row),
    })
}

/// Classify every record, stopping at the first decode or split error
pub fn classify_records<I>(
    records: I,
    filter: &FilterList,
    progress: &mut ProgressReporter,
) -> Result<ClassificationResult>
where
    I: IntoIterator<Item = Result<ParsedRecord>>,
{
    let mut result = ClassificationResult::new();

    for record in records {
        let record = record?;
        result.push(classify(&record, filter)?);
        progress.increment();
    }

    info!(
        "Classified {} records: {} eligible, {} ineligible, {} filtered",
        result.total_records(),
        result.eligible.len(),
        result.ineligible.len(),
        result.filtered.len()
    );
    Ok(result)
}
