//! In-memory index of original master records

use crate::app::models::ParsedRecord;
use crate::app::services::record_decoder::{FixedWidthReader, decode_records};
use crate::{Error, Result};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// Original records keyed by company + account number
#[derive(Debug, Clone, Default)]
pub struct OriginalIndex {
    records: HashMap<String, ParsedRecord>,
}

impl OriginalIndex {
    /// Build the index, failing on the first decode error
    ///
    /// A key seen twice keeps the later record.
    pub fn build<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<ParsedRecord>>,
    {
        let mut index = Self::default();

        for record in records {
            let record = record?;
            let key = record.company_account_key();
            if let Some(previous) = index.records.insert(key.clone(), record) {
                warn!(
                    "Duplicate account {} in original file; line {} replaced by a later line",
                    key, previous.line_number
                );
            }
        }

        Ok(index)
    }

    /// Decode a whole master file into an index
    pub fn load(path: &Path) -> Result<Self> {
        info!("Indexing original records from {}", path.display());

        let reader = FixedWidthReader::open(path)?;
        let index = Self::build(decode_records(reader))?;

        info!("Indexed {} original accounts", index.len());
        Ok(index)
    }

    pub fn get(&self, key: &str) -> Option<&ParsedRecord> {
        self.records.get(key)
    }

    /// Look up the original of a feed row, failing if the account is unknown
    pub fn lookup(&self, key: &str, row: usize) -> Result<&ParsedRecord> {
        self.get(key)
            .ok_or_else(|| Error::missing_original_record(key, row))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
