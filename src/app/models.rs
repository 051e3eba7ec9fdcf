//! Data models for NCOA processing
//!
//! This module contains the core data structures for the fixed-width account
//! master records, the split registration/address view of a record, the rows
//! of the move-update feed, and the output rows produced by both passes.

use crate::constants::{
    ADDRESS_SLOTS, MERGED_HEADER, NEW_ADDRESS_SLOTS, NORMALIZED_HEADER, NULL_TOKEN,
    REGISTRATION_SLOTS, UPDATED_ADDRESS_SLOTS,
};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Record Layout Fields
// =============================================================================

/// Named fields of the fixed-width master record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CompanyNumber,
    AccountNumber,
    CompanyName,
    RegistrationLine1,
    RegistrationLine2,
    RegistrationLine3,
    RegistrationLine4,
    RegistrationLine5,
    RegistrationLine6,
    AddressStartPoint,
    Status,
}

impl Field {
    /// Registration line fields in slot order
    pub const REGISTRATION_LINES: [Field; REGISTRATION_SLOTS] = [
        Field::RegistrationLine1,
        Field::RegistrationLine2,
        Field::RegistrationLine3,
        Field::RegistrationLine4,
        Field::RegistrationLine5,
        Field::RegistrationLine6,
    ];

    /// Column name used by the legacy master file documentation
    pub fn name(&self) -> &'static str {
        match self {
            Field::CompanyNumber => "Company Number",
            Field::AccountNumber => "Account Number",
            Field::CompanyName => "Company Name",
            Field::RegistrationLine1 => "Account Registration Line 1",
            Field::RegistrationLine2 => "Account Registration Line 2",
            Field::RegistrationLine3 => "Account Registration Line 3",
            Field::RegistrationLine4 => "Account Registration Line 4",
            Field::RegistrationLine5 => "Account Registration Line 5",
            Field::RegistrationLine6 => "Account Registration Line 6",
            Field::AddressStartPoint => "Address Line Starting Point",
            Field::Status => "Status",
        }
    }

    /// Zero-based registration slot, if this is a registration line
    pub fn registration_slot(&self) -> Option<usize> {
        Self::REGISTRATION_LINES.iter().position(|field| field == self)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Check whether a registration/address value counts as absent
pub fn is_blank_or_null(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case(NULL_TOKEN)
}

// =============================================================================
// Parsed Master Record
// =============================================================================

/// One decoded master record with every field trimmed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRecord {
    /// One-based line number in the master file
    pub line_number: usize,
    pub company_number: String,
    pub account_number: String,
    pub company_name: String,
    pub registration_lines: [String; REGISTRATION_SLOTS],
    /// Raw address start point value, validated only when split
    pub address_start_point: String,
    /// Tax status; blank means eligible
    pub status: String,
}

impl ParsedRecord {
    /// Create an empty record for the given master file line
    pub fn new(line_number: usize) -> Self {
        Self {
            line_number,
            ..Default::default()
        }
    }

    /// Get the value of a field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::CompanyNumber => &self.company_number,
            Field::AccountNumber => &self.account_number,
            Field::CompanyName => &self.company_name,
            Field::AddressStartPoint => &self.address_start_point,
            Field::Status => &self.status,
            registration => match registration.registration_slot() {
                Some(slot) => &self.registration_lines[slot],
                None => "",
            },
        }
    }

    /// Set the value of a field
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::CompanyNumber => self.company_number = value,
            Field::AccountNumber => self.account_number = value,
            Field::CompanyName => self.company_name = value,
            Field::AddressStartPoint => self.address_start_point = value,
            Field::Status => self.status = value,
            registration => {
                if let Some(slot) = registration.registration_slot() {
                    self.registration_lines[slot] = value;
                }
            }
        }
    }

    /// Join key shared with the move-update feed
    pub fn company_account_key(&self) -> String {
        format!("{}{}", self.company_number, self.account_number)
    }

    /// Eligibility derived from the status field
    pub fn eligibility(&self) -> Eligibility {
        Eligibility::from_status(&self.status)
    }

    /// Registration lines that are neither blank nor the NULL token, in order
    pub fn non_blank_fields(&self) -> Vec<&str> {
        self.registration_lines
            .iter()
            .map(String::as_str)
            .filter(|line| !is_blank_or_null(line))
            .collect()
    }

    /// Short label used in diagnostics
    pub fn describe(&self) -> String {
        format!(
            "line {} (account {})",
            self.line_number,
            self.company_account_key()
        )
    }
}

/// Eligible/ineligible routing decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    Ineligible,
}

impl Eligibility {
    /// A blank status is eligible, anything else is not
    pub fn from_status(status: &str) -> Self {
        if status.is_empty() {
            Eligibility::Eligible
        } else {
            Eligibility::Ineligible
        }
    }
}

// =============================================================================
// Address Start Point
// =============================================================================

/// Position (1..=6) in the non-blank line list where address lines begin
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AddressStartPoint(u8);

impl AddressStartPoint {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = REGISTRATION_SLOTS as u8;

    /// Create a start point, rejecting values outside 1..=6
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&value)
            .then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Zero-based index of the first address line
    pub fn line_start_index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl FromStr for AddressStartPoint {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let value: u8 = s
            .trim()
            .parse()
            .map_err(|_| format!("address start point '{}' is not a number", s))?;

        Self::new(value).ok_or_else(|| {
            format!(
                "address start point {} is outside {}..={}",
                value,
                Self::MIN,
                Self::MAX
            )
        })
    }
}

impl fmt::Display for AddressStartPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Split Address
// =============================================================================

/// Registration lines, address lines and city-state-zip of one record
///
/// The line vectors hold only the lines taken from the non-blank field list;
/// padding to the output slot counts happens on access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitAddress {
    pub address_start_point: AddressStartPoint,
    pub registration_lines: Vec<String>,
    pub address_lines: Vec<String>,
    pub city_state_zip: String,
}

impl SplitAddress {
    /// Registration lines padded with blanks to six slots
    pub fn registration_slots(&self) -> Vec<String> {
        pad_with_blanks(self.registration_lines.clone(), REGISTRATION_SLOTS)
    }

    /// Address lines padded with blanks to four slots
    pub fn address_slots(&self) -> Vec<String> {
        pad_with_blanks(self.address_lines.clone(), ADDRESS_SLOTS)
    }

    /// Rebuild the non-blank field list the split was taken from
    pub fn reconstruct(&self) -> Vec<String> {
        self.registration_lines
            .iter()
            .chain(self.address_lines.iter())
            .chain(std::iter::once(&self.city_state_zip))
            .cloned()
            .collect()
    }
}

/// Add blanks to the right of a line list until it has `slots` entries
pub fn pad_with_blanks(mut lines: Vec<String>, slots: usize) -> Vec<String> {
    if lines.len() < slots {
        lines.resize(slots, String::new());
    }
    lines
}

// =============================================================================
// Parse Pass Output Rows
// =============================================================================

/// One row of the normalized file sent to address standardization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRow {
    pub company_account_key: String,
    pub split: SplitAddress,
    pub status: String,
}

impl NormalizedRow {
    pub fn to_row(&self) -> Vec<String> {
        let mut row = Vec::with_capacity(NORMALIZED_HEADER.len());
        row.push(self.company_account_key.clone());
        row.extend(self.split.registration_slots());
        row.extend(self.split.address_slots());
        row.push(self.split.city_state_zip.clone());
        row.push(self.split.address_start_point.to_string());
        row.push(self.status.clone());
        row
    }
}

/// Audit entry for a record removed by the filter list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredRecord {
    /// One-based position of the record in the master file
    pub sequence: usize,
    pub company_number: String,
    pub account_number: String,
    /// First registration line
    pub name: String,
}

impl FilteredRecord {
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.sequence.to_string(),
            self.company_number.clone(),
            self.account_number.clone(),
            self.name.clone(),
        ]
    }
}

// =============================================================================
// Move-Update Feed
// =============================================================================

/// Move metadata carried through to the merged output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveMetadata {
    pub return_code: String,
    pub footnote_code: String,
    pub ncoalink_code: String,
    pub move_date: String,
    pub move_type: String,
}

impl MoveMetadata {
    pub fn to_row(&self) -> [String; 5] {
        [
            self.return_code.clone(),
            self.footnote_code.clone(),
            self.ncoalink_code.clone(),
            self.move_date.clone(),
            self.move_type.clone(),
        ]
    }
}

/// One row of the move-update feed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdatedAddressRecord {
    /// One-based data row number in the feed (header excluded)
    pub row_number: usize,
    pub company_account_key: String,
    /// FullName, Company, Company2..Company5
    pub registration_lines: [String; REGISTRATION_SLOTS],
    /// Updated Address 1..4
    pub updated_address_lines: [String; UPDATED_ADDRESS_SLOTS],
    pub city: String,
    pub state: String,
    pub zip: String,
    pub move_metadata: MoveMetadata,
}

impl UpdatedAddressRecord {
    /// Registration lines that are neither blank nor the NULL token
    pub fn non_blank_registration_lines(&self) -> Vec<String> {
        self.registration_lines
            .iter()
            .filter(|line| !is_blank_or_null(line))
            .cloned()
            .collect()
    }

    /// Final address line in "City, ST Zip" form
    pub fn city_state_zip(&self) -> String {
        format!("{}, {} {}", self.city, self.state, self.zip)
    }
}

// =============================================================================
// Merged Output
// =============================================================================

/// Final merged row for one account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedOutputRecord {
    pub status: String,
    pub company_number: String,
    pub account_number: String,
    pub company_name: String,
    /// Original registration lines as stored in the master file
    pub original_registration_lines: [String; REGISTRATION_SLOTS],
    /// Original address start point value
    pub first_address_line: String,
    /// Six new name/address slots
    pub new_address_lines: Vec<String>,
    pub move_metadata: MoveMetadata,
}

impl MergedOutputRecord {
    pub fn eligibility(&self) -> Eligibility {
        Eligibility::from_status(&self.status)
    }

    pub fn to_row(&self) -> Vec<String> {
        let mut row = Vec::with_capacity(MERGED_HEADER.len());
        row.push(self.status.clone());
        row.push(self.company_number.clone());
        row.push(self.account_number.clone());
        row.push(self.company_name.clone());
        row.extend(self.original_registration_lines.iter().cloned());
        row.push(self.first_address_line.clone());
        row.extend(pad_with_blanks(
            self.new_address_lines.clone(),
            NEW_ADDRESS_SLOTS,
        ));
        row.extend(self.move_metadata.to_row());
        row
    }
}
