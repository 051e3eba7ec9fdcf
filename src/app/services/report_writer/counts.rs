//! Counts report for the parse pass

use crate::app::models::AddressStartPoint;
use crate::constants::COUNTS_LINE_SEPARATOR;
use crate::{Error, Result};
use std::collections::BTreeSet;
use std::path::Path;

/// Record counts of one parse run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountsReport {
    pub file_name: String,
    pub eligible: usize,
    pub ineligible: usize,
    pub filtered: usize,
    /// Filter list entries in file order
    pub filter_entries: Vec<String>,
    pub address_start_points: BTreeSet<AddressStartPoint>,
}

impl CountsReport {
    pub fn records_to_process(&self) -> usize {
        self.eligible + self.ineligible
    }

    pub fn total_records(&self) -> usize {
        self.records_to_process() + self.filtered
    }

    /// Render the report with CRLF line endings
    pub fn render(&self) -> String {
        let filter_entries = self
            .filter_entries
            .iter()
            .map(|entry| format!("'{}'", entry))
            .collect::<Vec<_>>()
            .join(", ");
        let start_points = self
            .address_start_points
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        [
            format!("Filename: {}", self.file_name),
            format!("Total Record count: {}", self.total_records()),
            String::new(),
            format!("Records to process: {}", self.records_to_process()),
            format!("Eligible: {}", self.eligible),
            format!("Ineligible: {}", self.ineligible),
            String::new(),
            format!("Records filtered: {}", self.filtered),
            format!("Company Numbers filtered: [{}]", filter_entries),
            String::new(),
            format!("{}Address Start Points: {}", COUNTS_LINE_SEPARATOR, start_points),
        ]
        .join(COUNTS_LINE_SEPARATOR)
    }

    /// Write the rendered report to `path`
    pub fn write(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.render())
            .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))
    }
}
