//! Tests for record classification

use crate::app::models::ParsedRecord;
use crate::app::services::record_decoder::decode_record;
use crate::app::services::record_decoder::tests::RawRecordBuilder;


/// Decode a builder at the given master file line
pub fn decoded(builder: &RawRecordBuilder, line_number: usize) -> ParsedRecord {
    decode_record(&builder.build(), line_number).unwrap()
}
