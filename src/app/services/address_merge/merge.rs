//! Registration-line backfill and merged row assembly
//!
//! The standardization pass returns up to four updated address lines. When
//! the leading slots come back blank, the lines it dropped were name lines
//! that sat where the address used to start; they are restored from the
//! original record. Once a non-blank updated line has appeared, later blank
//! slots mean the address has ended and are left alone.

use crate::app::models::{
    AddressStartPoint, MergedOutputRecord, ParsedRecord, SplitAddress, UpdatedAddressRecord,
    pad_with_blanks,
};
use crate::constants::{NEW_ADDRESS_SLOTS, REGISTRATION_SLOTS};
use crate::{Error, Result};
use tracing::debug;

/// Merge one original record with its updated address
///
/// New address slots are the feed's non-blank registration lines, then the
/// backfilled/updated address lines, then "City, ST Zip", padded to six.
pub fn merge(
    original: &ParsedRecord,
    split: &SplitAddress,
    update: &UpdatedAddressRecord,
) -> Result<MergedOutputRecord> {
    let mut new_address = update.non_blank_registration_lines();
    backfill_registration_lines(
        &original.registration_lines,
        split.address_start_point,
        &update.updated_address_lines,
        &mut new_address,
    );
    new_address.push(update.city_state_zip());

    if new_address.len() > NEW_ADDRESS_SLOTS {
        return Err(Error::address_overflow(
            original.company_account_key(),
            new_address.len(),
            NEW_ADDRESS_SLOTS,
        ));
    }

    debug!(
        "Merged account {}: {} new address lines",
        original.company_account_key(),
        new_address.len()
    );

    Ok(MergedOutputRecord {
        status: original.status.clone(),
        company_number: original.company_number.clone(),
        account_number: original.account_number.clone(),
        company_name: original.company_name.clone(),
        original_registration_lines: original.registration_lines.clone(),
        first_address_line: original.address_start_point.clone(),
        new_address_lines: pad_with_blanks(new_address, NEW_ADDRESS_SLOTS),
        move_metadata: update.move_metadata.clone(),
    })
}

/// Append updated address lines, restoring missing registration lines
///
/// For each updated slot `i`:
/// - blank, with every earlier slot blank: take original registration line
///   `start_index + i`, unless the accumulator already holds that value
/// - non-blank: append it as is
/// - blank after a non-blank slot: skip
///
/// Positions past the sixth registration line have nothing to restore.
pub fn backfill_registration_lines(
    original_lines: &[String; REGISTRATION_SLOTS],
    start_point: AddressStartPoint,
    updated_lines: &[String],
    accumulator: &mut Vec<String>,
) {
    let start = start_point.line_start_index();

    for (i, updated) in updated_lines.iter().enumerate() {
        let leading_blank =
            updated.is_empty() && updated_lines[..i].iter().all(|line| line.is_empty());

        if leading_blank {
            if let Some(missing) = original_lines.get(start + i) {
                if !accumulator.contains(missing) {
                    accumulator.push(missing.clone());
                }
            }
        } else if !updated.is_empty() {
            accumulator.push(updated.clone());
        }
    }
}
