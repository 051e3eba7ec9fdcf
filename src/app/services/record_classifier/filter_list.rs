//! Company / account filter list
//!
//! One entry per line: either a bare company number, which removes every
//! account of that company, or a company number immediately followed by an
//! account number, which removes that single account.

use crate::app::models::ParsedRecord;
use crate::{Error, Result};
use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterList {
    entries: Vec<String>,
    lookup: HashSet<String>,
}

impl FilterList {
    /// Build a list from raw entries
    ///
    /// Every entry is kept trimmed and in order, blanks and repeats included,
    /// so the counts report lists the file as read. Blank entries never match.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries: Vec<String> = entries
            .into_iter()
            .map(|entry| entry.as_ref().trim().to_string())
            .collect();
        let lookup = entries
            .iter()
            .filter(|entry| !entry.is_empty())
            .cloned()
            .collect();
        Self { entries, lookup }
    }

    /// Read one entry per line
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let lines = reader
            .lines()
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|e| Error::io("Failed to read filter list", e))?;
        Ok(Self::new(lines))
    }

    /// Load a filter list that must exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let file = std::fs::File::open(path)
            .map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))?;
        let list = Self::from_reader(std::io::BufReader::new(file))?;

        info!(
            "Loaded {} filter entries from {}: {}",
            list.len(),
            path.display(),
            list.entries.join(", ")
        );
        Ok(list)
    }

    /// Load a filter list if the file exists, otherwise use an empty list
    pub fn load_optional(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            info!(
                "No filter list at {}. Place records_to_filter.txt next to the data to filter records.",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Whether the record's company or company + account key is listed
    pub fn matches(&self, record: &ParsedRecord) -> bool {
        let matched = self.lookup.contains(&record.company_number)
            || self.lookup.contains(&record.company_account_key());
        if matched {
            debug!("Filter list matched {}", record.describe());
        }
        matched
    }

    /// Entries in file order, as read
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
