//! Move-update feed schema and reader
//!
//! The feed is a header-first CSV. The join key is always the first
//! column; every other column is located by header name once, up front.

use crate::app::models::{MoveMetadata, UpdatedAddressRecord};
use crate::constants::{REGISTRATION_SLOTS, UPDATED_ADDRESS_SLOTS, feed_columns};
use crate::{Error, Result};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Column positions of the expected feed columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSchema {
    registration: [usize; REGISTRATION_SLOTS],
    updated_address: [usize; UPDATED_ADDRESS_SLOTS],
    city: usize,
    state: usize,
    zip: usize,
    return_code: usize,
    footnote: usize,
    ncoalink_code: usize,
    move_date: usize,
    move_type: usize,
}

impl FeedSchema {
    /// Resolve every expected column, listing all missing ones on failure
    pub fn resolve(headers: &StringRecord) -> Result<Self> {
        if headers.is_empty() {
            return Err(Error::schema("update feed has no header row"));
        }

        let mut missing = Vec::new();
        let mut position = |name: &str| -> usize {
            match headers.iter().position(|header| header == name) {
                Some(index) => index,
                None => {
                    missing.push(name.to_string());
                    0
                }
            }
        };

        let registration = feed_columns::REGISTRATION.map(&mut position);
        let updated_address = feed_columns::UPDATED_ADDRESS.map(&mut position);
        let schema = Self {
            registration,
            updated_address,
            city: position(feed_columns::CITY),
            state: position(feed_columns::STATE),
            zip: position(feed_columns::ZIP),
            return_code: position(feed_columns::RETURN_CODE),
            footnote: position(feed_columns::FOOTNOTE),
            ncoalink_code: position(feed_columns::NCOALINK_RETURN_CODE),
            move_date: position(feed_columns::MOVE_DATE),
            move_type: position(feed_columns::MOVE_TYPE),
        };

        if !missing.is_empty() {
            return Err(Error::schema(format!(
                "missing columns: {}",
                missing.join(", ")
            )));
        }

        debug!("Resolved update feed schema: {:?}", schema);
        Ok(schema)
    }

    /// Convert one feed row; `row_number` counts data rows from 1
    pub fn parse_row(&self, record: &StringRecord, row_number: usize) -> Result<UpdatedAddressRecord> {
        let column = |index: usize| -> Result<String> {
            record.get(index).map(str::to_string).ok_or_else(|| {
                Error::schema(format!(
                    "row {} has {} columns, column {} is missing",
                    row_number,
                    record.len(),
                    index + 1
                ))
            })
        };

        let mut registration_lines: [String; REGISTRATION_SLOTS] = Default::default();
        for (line, &index) in registration_lines.iter_mut().zip(&self.registration) {
            *line = column(index)?;
        }

        let mut updated_address_lines: [String; UPDATED_ADDRESS_SLOTS] = Default::default();
        for (line, &index) in updated_address_lines.iter_mut().zip(&self.updated_address) {
            *line = column(index)?;
        }

        Ok(UpdatedAddressRecord {
            row_number,
            company_account_key: column(0)?.trim().to_string(),
            registration_lines,
            updated_address_lines,
            city: column(self.city)?,
            state: column(self.state)?,
            zip: column(self.zip)?,
            move_metadata: MoveMetadata {
                return_code: column(self.return_code)?,
                footnote_code: column(self.footnote)?,
                ncoalink_code: column(self.ncoalink_code)?,
                move_date: column(self.move_date)?,
                move_type: column(self.move_type)?,
            },
        })
    }
}

/// Row-by-row reader over a move-update feed
pub struct UpdateFeedReader<R> {
    reader: csv::Reader<R>,
    schema: FeedSchema,
    file: String,
    row_number: usize,
    buffer: StringRecord,
    failed: bool,
}

impl UpdateFeedReader<File> {
    /// Open a feed file and resolve its header
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let file = File::open(path)
            .map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))?;
        let reader = Self::from_reader(file, path.display().to_string())?;

        info!("Opened update feed {}", path.display());
        Ok(reader)
    }
}

impl<R: Read> UpdateFeedReader<R> {
    /// Wrap any reader; the header row is read and resolved immediately
    pub fn from_reader(input: R, file: impl Into<String>) -> Result<Self> {
        let file = file.into();
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(input);

        let headers = reader
            .headers()
            .map_err(|e| Error::csv(file.clone(), "Failed to read header row", Some(e)))?
            .clone();
        let schema = FeedSchema::resolve(&headers)?;

        Ok(Self {
            reader,
            schema,
            file,
            row_number: 0,
            buffer: StringRecord::new(),
            failed: false,
        })
    }
}

impl<R: Read> Iterator for UpdateFeedReader<R> {
    type Item = Result<UpdatedAddressRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match self.reader.read_record(&mut self.buffer) {
            Ok(false) => None,
            Ok(true) => {
                self.row_number += 1;
                let row = self.schema.parse_row(&self.buffer, self.row_number);
                self.failed = row.is_err();
                Some(row)
            }
            Err(e) => {
                self.failed = true;
                Some(Err(Error::csv(
                    self.file.clone(),
                    format!("Failed to read row {}", self.row_number + 1),
                    Some(e),
                )))
            }
        }
    }
}
