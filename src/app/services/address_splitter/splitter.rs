//! Partitioning of non-blank registration fields
//!
//! Given the non-blank registration fields `f` and start index
//! `s = start_point - 1`:
//! - registration lines are `f[..s]`
//! - address lines are `f[s..len - 1]`
//! - city-state-zip is the last element
//!
//! Start points the list cannot honor are rejected rather than clamped.

use crate::app::models::{AddressStartPoint, ParsedRecord, SplitAddress};
use crate::constants::{ADDRESS_SLOTS, REGISTRATION_SLOTS};
use crate::{Error, Result};
use thiserror::Error as ThisError;
use tracing::debug;

/// Reasons a non-blank field list cannot be split
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum SplitFailure {
    #[error("record has no non-blank registration lines")]
    NoLines,

    #[error("address start point {start_point} needs at least {start_point} non-blank lines, found {found}")]
    TooFewLines {
        start_point: AddressStartPoint,
        found: usize,
    },

    #[error("{count} registration lines exceed {capacity} slots")]
    RegistrationOverflow { count: usize, capacity: usize },

    #[error("{count} address lines exceed {capacity} slots")]
    AddressOverflow { count: usize, capacity: usize },
}

/// Split a parsed record into registration lines, address lines and city-state-zip
pub fn split(record: &ParsedRecord) -> Result<SplitAddress> {
    let start_point = address_start_point(record)?;
    let fields = record.non_blank_fields();

    let split = split_fields(&fields, start_point)
        .map_err(|failure| Error::split(record.describe(), failure.to_string()))?;

    debug!(
        "Split {}: {} registration, {} address lines",
        record.describe(),
        split.registration_lines.len(),
        split.address_lines.len()
    );
    Ok(split)
}

/// Validate and parse the record's address start point
pub fn address_start_point(record: &ParsedRecord) -> Result<AddressStartPoint> {
    record
        .address_start_point
        .parse()
        .map_err(|message: String| Error::split(record.describe(), message))
}

/// Split a non-blank field list at the given start point
pub fn split_fields(
    fields: &[&str],
    start_point: AddressStartPoint,
) -> std::result::Result<SplitAddress, SplitFailure> {
    let (city_state_zip, lines) = fields.split_last().ok_or(SplitFailure::NoLines)?;

    let start = start_point.line_start_index();
    if start > lines.len() {
        return Err(SplitFailure::TooFewLines {
            start_point,
            found: fields.len(),
        });
    }

    let (registration, address) = lines.split_at(start);

    if registration.len() > REGISTRATION_SLOTS {
        return Err(SplitFailure::RegistrationOverflow {
            count: registration.len(),
            capacity: REGISTRATION_SLOTS,
        });
    }
    if address.len() > ADDRESS_SLOTS {
        return Err(SplitFailure::AddressOverflow {
            count: address.len(),
            capacity: ADDRESS_SLOTS,
        });
    }

    Ok(SplitAddress {
        address_start_point: start_point,
        registration_lines: registration.iter().map(|line| line.to_string()).collect(),
        address_lines: address.iter().map(|line| line.to_string()).collect(),
        city_state_zip: city_state_zip.to_string(),
    })
}
