//! Tests for the address merge engine

use crate::app::models::{MoveMetadata, UpdatedAddressRecord};

mod merge_tests;

/// Feed header with the key first and the other columns out of layout order
pub const FEED_HEADER: &str = "CompAcctNo,Company,FullName,Company2,Company3,Company4,Company5,\
Updated Address 1,Updated Address 2,Updated Address 3,Updated Address 4,City,State,Zip 4,\
Return Code,Footnote,NCOALink Return Code,Move Date,Move Type";

/// One feed line matching [`FEED_HEADER`]
pub fn feed_line(key: &str, full_name: &str, addresses: [&str; 4]) -> String {
    format!(
        "{},,{},,,,,{},{},{},{},DALLAS,TX,75201-1234,A,91,M,202407,I",
        key, full_name, addresses[0], addresses[1], addresses[2], addresses[3]
    )
}

/// Updated record with the given name lines and address slots
pub fn updated_record(key: &str, names: [&str; 6], addresses: [&str; 4]) -> UpdatedAddressRecord {
    UpdatedAddressRecord {
        row_number: 1,
        company_account_key: key.to_string(),
        registration_lines: names.map(str::to_string),
        updated_address_lines: addresses.map(str::to_string),
        city: "DALLAS".to_string(),
        state: "TX".to_string(),
        zip: "75201-1234".to_string(),
        move_metadata: MoveMetadata {
            return_code: "A".to_string(),
            footnote_code: "91".to_string(),
            ncoalink_code: "M".to_string(),
            move_date: "202407".to_string(),
            move_type: "I".to_string(),
        },
    }
}
