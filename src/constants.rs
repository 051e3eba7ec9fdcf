//! Application constants for the NCOA processor
//!
//! This module contains the fixed record layout, output headers, default
//! file names and processing defaults used throughout the application.

use crate::app::models::Field;

// =============================================================================
// Fixed-Width Record Layout
// =============================================================================

/// Field layout of the original master file, in byte order
pub const FIELD_LAYOUT: [(Field, usize); 11] = [
    (Field::CompanyNumber, 5),
    (Field::AccountNumber, 10),
    (Field::CompanyName, 40),
    (Field::RegistrationLine1, 38),
    (Field::RegistrationLine2, 38),
    (Field::RegistrationLine3, 38),
    (Field::RegistrationLine4, 38),
    (Field::RegistrationLine5, 38),
    (Field::RegistrationLine6, 38),
    (Field::AddressStartPoint, 1),
    (Field::Status, 10),
];

/// Sum of all field widths
pub const FIELD_LAYOUT_WIDTH: usize = 294;

/// Width of one raw record line, including its `\n` terminator
pub const RECORD_WIDTH: usize = FIELD_LAYOUT_WIDTH + 1;

/// Registration line slots in the original record and in every output row
pub const REGISTRATION_SLOTS: usize = 6;

/// Street address line slots in the normalized output
pub const ADDRESS_SLOTS: usize = 4;

/// Updated address line slots in the move-update feed
pub const UPDATED_ADDRESS_SLOTS: usize = 4;

/// New name/address slots in the merged output
pub const NEW_ADDRESS_SLOTS: usize = 6;

/// Registration line value treated as absent (compared case-insensitively)
pub const NULL_TOKEN: &str = "NULL";

// =============================================================================
// Output Headers
// =============================================================================

/// Header of the normalized file handed to the address standardization pass
pub const NORMALIZED_HEADER: [&str; 14] = [
    "CompAcctNo",
    "FullName",
    "Company",
    "Company2",
    "Company3",
    "Company4",
    "Company5",
    "Delivery Address",
    "Alternate 1 Address",
    "Alternate 2 Address",
    "Alternate 3 Address",
    "City-State-Zip",
    "AddrStartPoint",
    "Status",
];

/// Header of the merged output and both workbook sheets
pub const MERGED_HEADER: [&str; 22] = [
    "Status",
    "CoNumber",
    "AcctNumber",
    "CoName",
    "OrigNA1",
    "OrigNA2",
    "OrigNA3",
    "OrigNA4",
    "OrigNA5",
    "OrigNA6",
    "FirstAddressLine",
    "NewNA1",
    "NewNA2",
    "NewNA3",
    "NewNA4",
    "NewNA5",
    "NewNA6",
    "ReturnCode",
    "FootnoteCode",
    "NCOALink",
    "NCOAMoveDate",
    "NCOAMoveType",
];

/// Header of the filtered records audit file
pub const FILTERED_HEADER: [&str; 4] = [
    "Record Sequence",
    "Company Number",
    "Account Number",
    "Name",
];

// =============================================================================
// Move-Update Feed Columns
// =============================================================================

/// Feed columns carrying the updated registration (name) lines
pub mod feed_columns {
    pub const REGISTRATION: [&str; 6] = [
        "FullName", "Company", "Company2", "Company3", "Company4", "Company5",
    ];

    pub const UPDATED_ADDRESS: [&str; 4] = [
        "Updated Address 1",
        "Updated Address 2",
        "Updated Address 3",
        "Updated Address 4",
    ];

    pub const CITY: &str = "City";
    pub const STATE: &str = "State";
    pub const ZIP: &str = "Zip 4";

    pub const RETURN_CODE: &str = "Return Code";
    pub const FOOTNOTE: &str = "Footnote";
    pub const NCOALINK_RETURN_CODE: &str = "NCOALink Return Code";
    pub const MOVE_DATE: &str = "Move Date";
    pub const MOVE_TYPE: &str = "Move Type";
}

// =============================================================================
// Default File Names
// =============================================================================

/// Filter list looked up next to the input when none is given
pub const DEFAULT_FILTER_FILE: &str = "records_to_filter.txt";

pub const DEFAULT_PARSED_FILE: &str = "ParsedData.csv";
pub const DEFAULT_FILTERED_FILE: &str = "FilteredRecords.txt";
pub const DEFAULT_COUNTS_FILE: &str = "COUNTS.txt";
pub const DEFAULT_MERGED_FILE: &str = "NCOA_Records.csv";
pub const DEFAULT_WORKBOOK_NAME: &str = "Quarterly NCOA_36_37_38";
pub const DEFAULT_ELIGIBLE_SHEET: &str = "Eligible";
pub const DEFAULT_INELIGIBLE_SHEET: &str = "Ineligible";

/// Config file location relative to the platform config directory
pub const CONFIG_DIR_NAME: &str = "ncoa-processor";
pub const CONFIG_FILE_NAME: &str = "config.toml";

// =============================================================================
// Processing Defaults
// =============================================================================

/// Records between progress log lines during the parse pass
pub const DEFAULT_PARSE_PROGRESS_INTERVAL: usize = 50_000;

/// Feed rows between progress log lines during the merge pass
pub const DEFAULT_MERGE_PROGRESS_INTERVAL: usize = 500;

/// Line separator of the counts report
pub const COUNTS_LINE_SEPARATOR: &str = "\r\n";
