//! Bucket container for the parse pass

use super::classifier::Classification;
use crate::app::models::{AddressStartPoint, FilteredRecord, NormalizedRow};
use std::collections::BTreeSet;

/// Eligible, ineligible and filtered records of one run, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationResult {
    pub eligible: Vec<NormalizedRow>,
    pub ineligible: Vec<NormalizedRow>,
    pub filtered: Vec<FilteredRecord>,
    /// Distinct start points seen on non-filtered records
    pub address_start_points: BTreeSet<AddressStartPoint>,
}

impl ClassificationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a classified record to its bucket
    pub fn push(&mut self, classification: Classification) {
        match classification {
            Classification::Eligible(row) => {
                self.address_start_points
                    .insert(row.split.address_start_point);
                self.eligible.push(row);
            }
            Classification::Ineligible(row) => {
                self.address_start_points
                    .insert(row.split.address_start_point);
                self.ineligible.push(row);
            }
            Classification::Filtered(record) => self.filtered.push(record),
        }
    }

    /// Eligible rows followed by ineligible rows
    pub fn normalized_rows(&self) -> impl Iterator<Item = &NormalizedRow> {
        self.eligible.iter().chain(self.ineligible.iter())
    }

    pub fn records_to_process(&self) -> usize {
        self.eligible.len() + self.ineligible.len()
    }

    pub fn total_records(&self) -> usize {
        self.records_to_process() + self.filtered.len()
    }
}
